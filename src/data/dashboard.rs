//! Dashboard state derived from one device snapshot.
//!
//! The state is rebuilt from scratch for every snapshot; only the update
//! counter carries over.

use std::time::Instant;

use tracing::debug;

use super::connectivity::ConnectivitySeries;
use super::palette::ColorPolicy;
use super::versions::{version_histogram, Processor, VersionHistogramEntry};
use crate::source::DeviceSnapshot;

/// Chart-ready series for the whole dashboard.
#[derive(Debug, Clone)]
pub struct DashboardState {
    pub device_count: u64,
    pub connectivity: ConnectivitySeries,
    pub esp_versions: Vec<VersionHistogramEntry>,
    pub msp_versions: Vec<VersionHistogramEntry>,
    /// Number of snapshots applied so far, including this one.
    pub updates: u64,
    pub last_updated: Instant,
}

impl DashboardState {
    /// Compute the next state from the previous one and a new snapshot.
    ///
    /// The snapshot is consumed; nothing from it is retained beyond the
    /// derived series.
    pub fn apply(
        previous: Option<&DashboardState>,
        snapshot: DeviceSnapshot,
        colors: &impl ColorPolicy,
    ) -> Self {
        let updates = previous.map_or(1, |p| p.updates + 1);
        let connectivity = ConnectivitySeries::from_snapshot(&snapshot);
        let esp_versions = version_histogram(&snapshot, Processor::Esp, colors);
        let msp_versions = version_histogram(&snapshot, Processor::Msp, colors);

        debug!(
            devices = snapshot.len(),
            connected = connectivity.connected,
            disconnected = connectivity.disconnected,
            esp_versions = esp_versions.len(),
            msp_versions = msp_versions.len(),
            updates,
            "dashboard state updated"
        );

        Self {
            device_count: snapshot.len() as u64,
            connectivity,
            esp_versions,
            msp_versions,
            updates,
            last_updated: Instant::now(),
        }
    }

    /// Histogram entries for the given processor.
    pub fn versions(&self, processor: Processor) -> &[VersionHistogramEntry] {
        match processor {
            Processor::Esp => &self.esp_versions,
            Processor::Msp => &self.msp_versions,
        }
    }
}
