//! JSON export of the dashboard series.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde_json::{json, Value};
use tracing::info;

use crate::data::DashboardState;

/// Build the export document for a dashboard state.
pub fn export_json(state: &DashboardState) -> Value {
    json!({
        "total_devices": state.device_count,
        "connectivity": state.connectivity,
        "firmware": {
            "esp": state.esp_versions,
            "msp": state.msp_versions,
        },
    })
}

/// Write the export document to `path`, pretty-printed.
pub fn write_export(state: &DashboardState, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(&export_json(state))?;
    fs::write(path, json).with_context(|| format!("failed to write {}", path.display()))?;
    info!(path = %path.display(), "exported dashboard state");
    Ok(())
}
