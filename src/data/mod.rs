//! Aggregation of device snapshots into chart series.
//!
//! ## Submodules
//!
//! - [`connectivity`]: connected/disconnected counts
//! - [`versions`]: per-processor firmware version histograms
//! - [`palette`]: color assignment policy for histogram labels
//! - [`dashboard`]: the `(previous, snapshot) -> next` state update
//! - [`duration`]: parsing of refresh intervals ("1s", "500ms")
//!
//! ## Data Flow
//!
//! ```text
//! DeviceSnapshot (raw JSON)
//!        │
//!        ▼
//! DashboardState::apply()
//!        │
//!        ├──▶ ConnectivitySeries::from_snapshot()
//!        │
//!        └──▶ version_histogram() for ESP and MSP (colors from ColorPolicy)
//! ```

pub mod connectivity;
pub mod dashboard;
pub mod duration;
pub mod palette;
pub mod versions;

pub use connectivity::ConnectivitySeries;
pub use dashboard::DashboardState;
pub use palette::{ColorPolicy, Palette};
pub use versions::{version_histogram, Processor, VersionHistogramEntry};
