//! # awacs-dashboard
//!
//! A terminal dashboard for a fleet of telemetry devices: how many are
//! connected, and which ESP32 / MSP430 firmware revisions they run.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        Application                          │
//! │  ┌─────────┐    ┌──────────┐    ┌─────────┐    ┌─────────┐ │
//! │  │  app    │───▶│   data   │───▶│   ui    │───▶│ Terminal│ │
//! │  │ (state) │    │(aggregate)    │(charts) │    │         │ │
//! │  └────┬────┘    └──────────┘    └─────────┘    └─────────┘ │
//! │       │                                                     │
//! │       ▼                                                     │
//! │  ┌─────────┐                                                │
//! │  │ source  │◀── FileSource | StreamSource | ChannelSource  │
//! │  │ (input) │                                                │
//! │  └─────────┘                                                │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! - **[`source`]**: the [`DataSource`] trait, its implementations, and
//!   [`subscribe`] for callback-style consumers
//! - **[`data`]**: pure aggregation of a [`DeviceSnapshot`] into a
//!   [`ConnectivitySeries`] and per-processor version histograms, plus the
//!   [`DashboardState`] update function
//! - **[`ui`]**: ratatui rendering of the three charts
//! - **[`config`]**: layered settings (defaults, TOML file, environment)
//!
//! ## Usage
//!
//! ### Aggregating a snapshot
//!
//! ```
//! use awacs_dashboard::{version_histogram, ConnectivitySeries, DeviceSnapshot, Palette, Processor};
//!
//! let snapshot: DeviceSnapshot = serde_json::from_str(r#"{
//!     "a": {"status": 1, "system": {"espFwRevision": "1.2"}},
//!     "b": {"status": 99, "system": {}}
//! }"#).unwrap();
//!
//! let connectivity = ConnectivitySeries::from_snapshot(&snapshot);
//! assert_eq!((connectivity.connected, connectivity.disconnected), (1, 1));
//!
//! let esp = version_histogram(&snapshot, Processor::Esp, &Palette::default());
//! assert_eq!(esp[0].label, "v1.2");
//! assert_eq!(esp[1].label, "Unknown");
//! ```
//!
//! ### Subscribing with a callback
//!
//! ```no_run
//! use std::time::Duration;
//! use awacs_dashboard::{subscribe, DashboardState, FileSource, Palette};
//!
//! # tokio_test::block_on(async {
//! let palette = Palette::default();
//! let mut state: Option<DashboardState> = None;
//! let handle = subscribe(
//!     Box::new(FileSource::new("devices.json")),
//!     Duration::from_secs(1),
//!     move |snapshot| {
//!         let next = DashboardState::apply(state.as_ref(), snapshot, &palette);
//!         println!("{} devices", next.device_count);
//!         state = Some(next);
//!     },
//! );
//! # handle.abort();
//! # });
//! ```

pub mod app;
pub mod config;
pub mod data;
pub mod events;
pub mod export;
pub mod source;
pub mod ui;

pub use app::App;
pub use crate::config::Settings;
pub use data::{
    version_histogram, ColorPolicy, ConnectivitySeries, DashboardState, Palette, Processor,
    VersionHistogramEntry,
};
pub use source::{
    subscribe, ChannelSource, DataSource, DeviceRecord, DeviceSnapshot, FileSource, StreamSource,
    SystemInfo,
};
