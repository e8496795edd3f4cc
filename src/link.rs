//! # Radio Link Module
//!
//! Trait abstraction for the radio collaborator, plus an in-process loopback
//! implementation used by the demo binary and integration-style tests.
//!
//! The physical radio driver (channel tuning, RF send/receive primitives) is
//! out of scope; endpoints only rely on this seam. Both operations are
//! non-blocking from the caller's perspective: `send` is fire-and-forget and
//! `try_receive` returns immediately when nothing is queued.

use async_trait::async_trait;
use std::io;
use tokio::sync::mpsc;
use tracing::debug;

/// Queue depth of the loopback medium; a full queue drops frames like a busy channel
const LOOPBACK_QUEUE_DEPTH: usize = 32;

/// Trait for radio link I/O operations
#[async_trait]
pub trait RadioLink: Send {
    /// Transmit one frame, fire-and-forget
    async fn send(&mut self, frame: &[u8]) -> io::Result<()>;

    /// Poll for one inbound frame; `None` when nothing is queued
    async fn try_receive(&mut self) -> io::Result<Option<Vec<u8>>>;
}

/// One endpoint of an in-process radio medium
///
/// Frames sent on one endpoint become receivable on the other. When the
/// queue is full the frame is silently dropped, mirroring the lossy
/// fire-and-forget contract of the real link.
pub struct LoopbackRadio {
    outbound: mpsc::Sender<Vec<u8>>,
    inbound: mpsc::Receiver<Vec<u8>>,
}

/// Create a connected pair of loopback endpoints
pub fn loopback_pair() -> (LoopbackRadio, LoopbackRadio) {
    let (a_tx, b_rx) = mpsc::channel(LOOPBACK_QUEUE_DEPTH);
    let (b_tx, a_rx) = mpsc::channel(LOOPBACK_QUEUE_DEPTH);

    (
        LoopbackRadio { outbound: a_tx, inbound: a_rx },
        LoopbackRadio { outbound: b_tx, inbound: b_rx },
    )
}

#[async_trait]
impl RadioLink for LoopbackRadio {
    async fn send(&mut self, frame: &[u8]) -> io::Result<()> {
        match self.outbound.try_send(frame.to_vec()) {
            Ok(()) => Ok(()),
            Err(mpsc::error::TrySendError::Full(_)) => {
                // Lossy medium: the next beat supersedes the dropped frame
                debug!("Loopback queue full, dropping frame ({} bytes)", frame.len());
                Ok(())
            }
            Err(mpsc::error::TrySendError::Closed(_)) => Err(io::Error::new(
                io::ErrorKind::BrokenPipe,
                "peer endpoint closed",
            )),
        }
    }

    async fn try_receive(&mut self) -> io::Result<Option<Vec<u8>>> {
        match self.inbound.try_recv() {
            Ok(frame) => Ok(Some(frame)),
            Err(mpsc::error::TryRecvError::Empty) => Ok(None),
            Err(mpsc::error::TryRecvError::Disconnected) => Err(io::Error::new(
                io::ErrorKind::BrokenPipe,
                "peer endpoint closed",
            )),
        }
    }
}
