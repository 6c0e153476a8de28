//! Firmware version histograms.

use std::collections::HashMap;
use std::fmt;

use serde::Serialize;

use super::palette::ColorPolicy;
use crate::source::{DeviceRecord, DeviceSnapshot};

/// Label for devices that report no firmware revision.
pub const UNKNOWN_LABEL: &str = "Unknown";

/// Processor whose firmware revision is being charted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Processor {
    /// ESP32 radio module (`espFwRevision`).
    Esp,
    /// MSP430 microcontroller (`TiFwRevision`).
    Msp,
}

impl Processor {
    pub const ALL: [Processor; 2] = [Processor::Esp, Processor::Msp];

    /// Returns the chart title for this processor.
    pub fn title(&self) -> &'static str {
        match self {
            Processor::Esp => "ESP32 Firmware",
            Processor::Msp => "MSP430 Firmware",
        }
    }

    /// Returns this processor's revision from a record, if present.
    pub fn revision<'a>(&self, record: &'a DeviceRecord) -> Option<&'a str> {
        let revision = match self {
            Processor::Esp => record.system.esp_fw_revision.as_deref(),
            Processor::Msp => record.system.ti_fw_revision.as_deref(),
        };
        revision.filter(|r| !r.is_empty())
    }
}

impl fmt::Display for Processor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Processor::Esp => f.write_str("ESP"),
            Processor::Msp => f.write_str("MSP"),
        }
    }
}

/// One bar/slice of a firmware distribution chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VersionHistogramEntry {
    pub label: String,
    pub count: u64,
    pub color: String,
}

/// Bucket label for a revision: `v<revision>`, or [`UNKNOWN_LABEL`].
pub fn version_label(revision: Option<&str>) -> String {
    match revision {
        Some(r) if !r.is_empty() => format!("v{r}"),
        _ => UNKNOWN_LABEL.to_string(),
    }
}

/// Group a snapshot's devices by `processor` firmware revision.
///
/// Entries come out in the order their labels are first seen while walking
/// the snapshot. Snapshots iterate in lexicographic device-id order, so
/// device `"10"` is seen before device `"9"`. Each entry's color is
/// `colors.color(i)` where `i` is that position.
pub fn version_histogram(
    snapshot: &DeviceSnapshot,
    processor: Processor,
    colors: &impl ColorPolicy,
) -> Vec<VersionHistogramEntry> {
    let mut counts: Vec<(String, u64)> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for record in snapshot.values() {
        let label = version_label(processor.revision(record));
        match index.get(&label) {
            Some(&i) => counts[i].1 += 1,
            None => {
                index.insert(label.clone(), counts.len());
                counts.push((label, 1));
            }
        }
    }

    counts
        .into_iter()
        .enumerate()
        .map(|(i, (label, count))| VersionHistogramEntry {
            label,
            count,
            color: colors.color(i),
        })
        .collect()
}
