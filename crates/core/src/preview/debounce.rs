//! Quiet-period debouncing over a channel.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::timeout;

const OUTPUT_BUFFER: usize = 16;

/// Forwards only the latest value once `quiet` has passed without a newer one.
///
/// Values superseded within the quiet period are dropped. When `input`
/// closes, a value still waiting out its quiet period is dropped too and the
/// returned receiver closes.
pub fn debounce<T>(mut input: mpsc::Receiver<T>, quiet: Duration) -> mpsc::Receiver<T>
where
    T: Send + 'static,
{
    let (tx, rx) = mpsc::channel(OUTPUT_BUFFER);

    tokio::spawn(async move {
        let mut pending: Option<T> = None;

        loop {
            if pending.is_none() {
                match input.recv().await {
                    Some(value) => pending = Some(value),
                    None => break,
                }
                continue;
            }

            match timeout(quiet, input.recv()).await {
                Ok(Some(value)) => pending = Some(value),
                Ok(None) => break,
                Err(_elapsed) => {
                    if let Some(value) = pending.take()
                        && tx.send(value).await.is_err()
                    {
                        break;
                    }
                }
            }
        }
    });

    rx
}
