//! Shared types for device snapshots.
//!
//! These types match the JSON published by the device telemetry backend.
//! A snapshot is the complete known device population at one instant.

use std::collections::BTreeMap;

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};

/// Status code reported for a device that has lost its connection.
pub const DISCONNECTED_STATUS: i64 = 99;

/// A complete snapshot of the device population, keyed by device id.
///
/// Ordered by device id so that every consumer walks the records in the
/// same order, whatever order the producer wrote them in.
pub type DeviceSnapshot = BTreeMap<String, DeviceRecord>;

/// A single device as reported by the telemetry backend.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceRecord {
    /// Status code. [`DISCONNECTED_STATUS`] means disconnected; anything
    /// else, including a missing code, means connected.
    #[serde(
        default,
        deserialize_with = "lenient_status",
        skip_serializing_if = "Option::is_none"
    )]
    pub status: Option<i64>,

    /// Firmware and hardware details. `null` reads as empty.
    #[serde(default, deserialize_with = "nullable_system")]
    pub system: SystemInfo,
}

impl DeviceRecord {
    /// Returns true if the device reports the disconnected status code.
    pub fn is_disconnected(&self) -> bool {
        self.status == Some(DISCONNECTED_STATUS)
    }
}

/// Firmware revisions of the two processors on a device.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemInfo {
    /// ESP32 firmware revision.
    #[serde(
        rename = "espFwRevision",
        default,
        deserialize_with = "lenient_revision",
        skip_serializing_if = "Option::is_none"
    )]
    pub esp_fw_revision: Option<String>,

    /// MSP430 firmware revision.
    #[serde(
        rename = "TiFwRevision",
        default,
        deserialize_with = "lenient_revision",
        skip_serializing_if = "Option::is_none"
    )]
    pub ti_fw_revision: Option<String>,
}

/// Scalar shapes seen in backend records. Anything else is ignored.
#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Int(i64),
    Float(f64),
    Text(String),
    Other(#[allow(dead_code)] IgnoredAny),
}

/// Accepts an integer status or a numeric string such as `"99"`.
fn lenient_status<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let status = match Option::<Scalar>::deserialize(deserializer)? {
        Some(Scalar::Int(n)) => Some(n),
        Some(Scalar::Float(f)) => integral(f),
        Some(Scalar::Text(s)) => {
            let s = s.trim();
            s.parse::<i64>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().and_then(integral))
        }
        Some(Scalar::Other(_)) | None => None,
    };
    Ok(status)
}

fn integral(f: f64) -> Option<i64> {
    (f.is_finite() && f.fract() == 0.0).then_some(f as i64)
}

/// Accepts a string or numeric revision; `12` reads as `"12"`.
fn lenient_revision<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let revision = match Option::<Scalar>::deserialize(deserializer)? {
        Some(Scalar::Text(s)) => Some(s),
        Some(Scalar::Int(n)) => Some(n.to_string()),
        Some(Scalar::Float(f)) => Some(f.to_string()),
        Some(Scalar::Other(_)) | None => None,
    };
    Ok(revision)
}

fn nullable_system<'de, D>(deserializer: D) -> Result<SystemInfo, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<SystemInfo>::deserialize(deserializer)?.unwrap_or_default())
}
