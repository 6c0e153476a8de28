//! End-to-end checks through the public API: JSON snapshot in, series out.

use std::io::Write;

use awacs_dashboard::{
    version_histogram, ConnectivitySeries, DashboardState, DataSource, DeviceSnapshot, FileSource,
    Palette, Processor,
};

fn parse(json: &str) -> DeviceSnapshot {
    serde_json::from_str(json).unwrap()
}

#[test]
fn test_mixed_fleet_scenario() {
    let snapshot = parse(
        r#"{
            "a": {"status": 1, "system": {"espFwRevision": "1.2"}},
            "b": {"status": 99, "system": {}},
            "c": {"status": 1, "system": {"espFwRevision": "1.2"}}
        }"#,
    );

    let connectivity = ConnectivitySeries::from_snapshot(&snapshot);
    assert_eq!(connectivity.connected, 2);
    assert_eq!(connectivity.disconnected, 1);

    let esp = version_histogram(&snapshot, Processor::Esp, &Palette::default());
    let pairs: Vec<(&str, u64)> = esp.iter().map(|e| (e.label.as_str(), e.count)).collect();
    assert_eq!(pairs, [("v1.2", 2), ("Unknown", 1)]);
}

#[test]
fn test_empty_fleet_scenario() {
    let snapshot = parse("{}");

    let connectivity = ConnectivitySeries::from_snapshot(&snapshot);
    assert_eq!(connectivity, ConnectivitySeries::default());

    for processor in [Processor::Esp, Processor::Msp] {
        assert!(version_histogram(&snapshot, processor, &Palette::default()).is_empty());
    }
}

#[test]
fn test_missing_esp_revision_ignores_msp_revision() {
    let snapshot = parse(
        r#"{
            "x": {"status": 1, "system": {"espFwRevision": "", "TiFwRevision": "2.0"}},
            "y": {"status": 1, "system": {"TiFwRevision": "2.0"}}
        }"#,
    );

    let esp = version_histogram(&snapshot, Processor::Esp, &Palette::default());
    assert_eq!(esp.len(), 1);
    assert_eq!(esp[0].label, "Unknown");
    assert_eq!(esp[0].count, 2);
}

#[test]
fn test_file_snapshot_to_dashboard_state() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{
            "n1": {{"status": 3, "system": {{"espFwRevision": "1.0", "TiFwRevision": "0.1"}}}},
            "n2": {{"status": 99, "system": {{"espFwRevision": "1.1", "TiFwRevision": "0.1"}}}},
            "n3": {{"system": {{"espFwRevision": "1.0"}}}}
        }}"#
    )
    .unwrap();

    let mut source = FileSource::new(file.path());
    let snapshot = source.poll().expect("snapshot");
    let state = DashboardState::apply(None, snapshot, &Palette::default());

    assert_eq!(state.device_count, 3);
    assert_eq!(state.connectivity.total(), 3);
    assert_eq!(state.connectivity.disconnected, 1);

    for processor in [Processor::Esp, Processor::Msp] {
        let total: u64 = state.versions(processor).iter().map(|e| e.count).sum();
        assert_eq!(total, 3);
    }

    let msp: Vec<&str> = state.msp_versions.iter().map(|e| e.label.as_str()).collect();
    assert_eq!(msp, ["v0.1", "Unknown"]);
}

#[test]
fn test_loosely_typed_records_keep_the_snapshot() {
    let snapshot = parse(
        r#"{
            "a": {"status": 1, "system": {"espFwRevision": "1.2"}},
            "b": {"status": "99", "system": {"espFwRevision": 12}},
            "c": {"status": 1, "system": null}
        }"#,
    );

    let connectivity = ConnectivitySeries::from_snapshot(&snapshot);
    assert_eq!((connectivity.connected, connectivity.disconnected), (2, 1));

    let esp = version_histogram(&snapshot, Processor::Esp, &Palette::default());
    let pairs: Vec<(&str, u64)> = esp.iter().map(|e| (e.label.as_str(), e.count)).collect();
    assert_eq!(pairs, [("v1.2", 1), ("v12", 1), ("Unknown", 1)]);
}
