//! Connected/disconnected device counts.

use serde::Serialize;

use crate::source::DeviceSnapshot;

/// Label of the connected bucket.
pub const CONNECTED_LABEL: &str = "Connected";
/// Label of the disconnected bucket.
pub const DISCONNECTED_LABEL: &str = "Disconnected";

/// Device counts partitioned by connection status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ConnectivitySeries {
    pub connected: u64,
    pub disconnected: u64,
}

impl ConnectivitySeries {
    /// Count connected and disconnected devices in a snapshot.
    pub fn from_snapshot(snapshot: &DeviceSnapshot) -> Self {
        snapshot.values().fold(Self::default(), |mut series, record| {
            if record.is_disconnected() {
                series.disconnected += 1;
            } else {
                series.connected += 1;
            }
            series
        })
    }

    /// Total number of devices counted.
    pub fn total(&self) -> u64 {
        self.connected + self.disconnected
    }

    /// The two buckets as (label, count) pairs, in chart order.
    pub fn buckets(&self) -> [(&'static str, u64); 2] {
        [
            (CONNECTED_LABEL, self.connected),
            (DISCONNECTED_LABEL, self.disconnected),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{DeviceRecord, SystemInfo};

    fn snapshot(statuses: &[Option<i64>]) -> DeviceSnapshot {
        statuses
            .iter()
            .enumerate()
            .map(|(i, status)| {
                (
                    format!("dev-{i}"),
                    DeviceRecord {
                        status: *status,
                        system: SystemInfo::default(),
                    },
                )
            })
            .collect()
    }

    #[test]
    fn test_empty_snapshot_is_all_zero() {
        let series = ConnectivitySeries::from_snapshot(&DeviceSnapshot::new());
        assert_eq!(series, ConnectivitySeries::default());
        assert_eq!(series.total(), 0);
    }

    #[test]
    fn test_status_99_is_disconnected() {
        let series = ConnectivitySeries::from_snapshot(&snapshot(&[Some(99)]));
        assert_eq!(series.disconnected, 1);
        assert_eq!(series.connected, 0);
    }

    #[test]
    fn test_other_codes_are_connected() {
        let series =
            ConnectivitySeries::from_snapshot(&snapshot(&[Some(0), Some(1), Some(98), Some(100), None]));
        assert_eq!(series.connected, 5);
        assert_eq!(series.disconnected, 0);
    }

    #[test]
    fn test_counts_sum_to_snapshot_size() {
        let snap = snapshot(&[Some(1), Some(99), None, Some(99), Some(2), Some(-1)]);
        let series = ConnectivitySeries::from_snapshot(&snap);
        assert_eq!(series.total(), snap.len() as u64);
        assert_eq!(series.buckets(), [("Connected", 4), ("Disconnected", 2)]);
    }
}
