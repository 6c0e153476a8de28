//! Channel-based data source.
//!
//! Receives device snapshots via a tokio watch channel. The producer pushes
//! whole snapshots; a slow consumer only ever sees the latest one.

use tokio::sync::watch;

use super::{DataSource, DeviceSnapshot};

/// A data source that receives device snapshots via a channel.
///
/// Intended for in-process producers such as a backend client that already
/// owns the connection to the telemetry service.
///
/// # Example
///
/// ```
/// use awacs_dashboard::ChannelSource;
///
/// let (tx, source) = ChannelSource::create("backend");
/// ```
#[derive(Debug)]
pub struct ChannelSource {
    receiver: watch::Receiver<DeviceSnapshot>,
    description: String,
    /// Whether the initial value has been handed out
    initial_returned: bool,
}

impl ChannelSource {
    /// Create a new channel source.
    ///
    /// `source_description` names the producer, e.g. "backend" or
    /// "mqtt://broker:1883".
    pub fn new(receiver: watch::Receiver<DeviceSnapshot>, source_description: &str) -> Self {
        Self {
            receiver,
            description: format!("channel: {}", source_description),
            initial_returned: false,
        }
    }

    /// Create a (sender, source) pair. The channel starts with an empty
    /// snapshot.
    pub fn create(source_description: &str) -> (watch::Sender<DeviceSnapshot>, Self) {
        let (tx, rx) = watch::channel(DeviceSnapshot::default());
        (tx, Self::new(rx, source_description))
    }
}

impl DataSource for ChannelSource {
    fn poll(&mut self) -> Option<DeviceSnapshot> {
        if !self.initial_returned {
            self.initial_returned = true;
            self.receiver.mark_changed();
        }

        if self.receiver.has_changed().unwrap_or(false) {
            Some(self.receiver.borrow_and_update().clone())
        } else {
            None
        }
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn error(&self) -> Option<&str> {
        None
    }

    fn is_closed(&self) -> bool {
        self.receiver.has_changed().is_err()
    }
}
