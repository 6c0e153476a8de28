//! Stream-based data source.
//!
//! Receives device snapshots from an async byte stream, one JSON snapshot
//! per line. Used for TCP connections and for raw payloads pushed by
//! other components.

use std::sync::{Arc, Mutex};

use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use super::{DataSource, DeviceSnapshot};

const CHANNEL_CAPACITY: usize = 16;

type ErrorSlot = Arc<Mutex<Option<String>>>;

/// A data source that receives device snapshots from an async stream.
///
/// A background task reads newline-delimited JSON from the reader and makes
/// snapshots available via `poll()`. Lines that fail to parse are skipped
/// and reported through [`DataSource::error`].
///
/// # Example
///
/// ```
/// use std::io::Cursor;
/// use awacs_dashboard::StreamSource;
///
/// # tokio_test::block_on(async {
/// let data = b"{}\n";
/// let stream = Cursor::new(data.to_vec());
/// let source = StreamSource::spawn(stream, "example");
/// # });
/// ```
#[derive(Debug)]
pub struct StreamSource {
    receiver: mpsc::Receiver<DeviceSnapshot>,
    description: String,
    shared_error: ErrorSlot,
    /// Copy of `shared_error` taken at the last poll
    last_error: Option<String>,
    /// Set once the reader task has finished and the buffer is drained
    closed: bool,
}

fn record_error(slot: &Mutex<Option<String>>, value: Option<String>) {
    match slot.lock() {
        Ok(mut guard) => *guard = value,
        Err(poisoned) => *poisoned.into_inner() = value,
    }
}

fn read_error(slot: &Mutex<Option<String>>) -> Option<String> {
    match slot.lock() {
        Ok(guard) => guard.clone(),
        Err(poisoned) => poisoned.into_inner().clone(),
    }
}

impl StreamSource {
    /// Spawn a background task that reads from the given async reader.
    ///
    /// Must be called from within a tokio runtime.
    pub fn spawn<R>(reader: R, description: &str) -> Self
    where
        R: AsyncRead + Unpin + Send + 'static,
    {
        let (tx, rx) = mpsc::channel(CHANNEL_CAPACITY);
        let shared_error: ErrorSlot = Arc::new(Mutex::new(None));
        let error_handle = shared_error.clone();
        let desc = description.to_string();

        tokio::spawn(async move {
            let mut reader = BufReader::new(reader);
            let mut line = String::new();

            loop {
                line.clear();
                match reader.read_line(&mut line).await {
                    Ok(0) => {
                        info!(source = %desc, "snapshot stream closed");
                        record_error(&error_handle, Some("Connection closed".to_string()));
                        break;
                    }
                    Ok(_) if line.trim().is_empty() => {}
                    Ok(_) => match serde_json::from_str::<DeviceSnapshot>(line.trim()) {
                        Ok(snapshot) => {
                            debug!(source = %desc, devices = snapshot.len(), "received snapshot");
                            record_error(&error_handle, None);
                            if tx.send(snapshot).await.is_err() {
                                break;
                            }
                        }
                        Err(e) => {
                            warn!(source = %desc, error = %e, "skipping malformed snapshot");
                            record_error(&error_handle, Some(format!("Parse error: {}", e)));
                        }
                    },
                    Err(e) => {
                        warn!(source = %desc, error = %e, "snapshot stream failed");
                        record_error(&error_handle, Some(format!("Read error: {}", e)));
                        break;
                    }
                }
            }
        });

        Self {
            receiver: rx,
            description: format!("stream: {}", description),
            shared_error,
            last_error: None,
            closed: false,
        }
    }

    /// Create a StreamSource fed by a channel of raw JSON payloads.
    ///
    /// Each message is one complete snapshot.
    pub fn from_bytes_channel(mut rx: mpsc::Receiver<Vec<u8>>, description: &str) -> Self {
        let (tx, snapshot_rx) = mpsc::channel(CHANNEL_CAPACITY);
        let shared_error: ErrorSlot = Arc::new(Mutex::new(None));
        let error_handle = shared_error.clone();

        tokio::spawn(async move {
            while let Some(bytes) = rx.recv().await {
                match serde_json::from_slice::<DeviceSnapshot>(&bytes) {
                    Ok(snapshot) => {
                        record_error(&error_handle, None);
                        if tx.send(snapshot).await.is_err() {
                            break;
                        }
                    }
                    Err(e) => {
                        warn!(error = %e, "skipping malformed snapshot payload");
                        record_error(&error_handle, Some(format!("Parse error: {}", e)));
                    }
                }
            }
        });

        Self {
            receiver: snapshot_rx,
            description: format!("stream: {}", description),
            shared_error,
            last_error: None,
            closed: false,
        }
    }
}

impl DataSource for StreamSource {
    fn poll(&mut self) -> Option<DeviceSnapshot> {
        let result = match self.receiver.try_recv() {
            Ok(snapshot) => Some(snapshot),
            Err(mpsc::error::TryRecvError::Empty) => None,
            Err(mpsc::error::TryRecvError::Disconnected) => {
                self.closed = true;
                if read_error(&self.shared_error).is_none() {
                    record_error(&self.shared_error, Some("Stream disconnected".to_string()));
                }
                None
            }
        };

        self.last_error = read_error(&self.shared_error);
        result
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    fn is_closed(&self) -> bool {
        self.closed
    }
}
