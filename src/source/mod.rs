//! Data source abstraction for receiving device snapshots.
//!
//! This module provides a trait-based abstraction for receiving device data
//! from various sources (files, network streams, in-process channels), plus
//! [`subscribe`] for consumers that prefer a callback over polling.

mod channel;
mod file;
mod snapshot;
mod stream;

pub use channel::ChannelSource;
pub use file::FileSource;
pub use snapshot::{DeviceRecord, DeviceSnapshot, SystemInfo, DISCONNECTED_STATUS};
pub use stream::StreamSource;

use std::fmt::Debug;
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info};

/// Shortest polling period accepted by [`subscribe`].
pub const MIN_SUBSCRIBE_INTERVAL: Duration = Duration::from_millis(1);

/// Trait for receiving device snapshots from various sources.
///
/// # Example
///
/// ```
/// use awacs_dashboard::{DataSource, FileSource};
///
/// let mut source = FileSource::new("devices.json");
/// if let Some(snapshot) = source.poll() {
///     println!("Got {} devices", snapshot.len());
/// }
/// ```
pub trait DataSource: Send + Debug {
    /// Poll for the latest snapshot.
    ///
    /// Returns `Some(snapshot)` if new data is available, `None` otherwise.
    /// This method should be non-blocking.
    fn poll(&mut self) -> Option<DeviceSnapshot>;

    /// Returns a human-readable description of the source.
    ///
    /// Used for display in the TUI status bar.
    fn description(&self) -> &str;

    /// Returns the error message from the last poll, if any.
    fn error(&self) -> Option<&str>;

    /// Returns true once the source can never produce another snapshot,
    /// e.g. the stream hit EOF or the channel sender was dropped.
    fn is_closed(&self) -> bool {
        false
    }
}

/// Subscribe to a source with a callback.
///
/// Spawns a task that polls `source` every `interval` and calls `callback`
/// once for each new snapshot. Deliveries are sequential. The subscription
/// runs until the returned handle is aborted or the source reports
/// [`DataSource::is_closed`]. Intervals shorter than
/// [`MIN_SUBSCRIBE_INTERVAL`] are raised to it.
///
/// Must be called from within a tokio runtime.
pub fn subscribe<F>(
    mut source: Box<dyn DataSource>,
    interval: Duration,
    mut callback: F,
) -> JoinHandle<()>
where
    F: FnMut(DeviceSnapshot) + Send + 'static,
{
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval.max(MIN_SUBSCRIBE_INTERVAL));
        loop {
            ticker.tick().await;
            if let Some(snapshot) = source.poll() {
                debug!(
                    source = source.description(),
                    devices = snapshot.len(),
                    "delivering snapshot"
                );
                callback(snapshot);
            } else if source.is_closed() {
                info!(
                    source = source.description(),
                    error = source.error(),
                    "source closed, ending subscription"
                );
                break;
            }
        }
    })
}
