//! Messages delivered to the app from outside the key loop.

use crate::store::LoadState;

/// Asynchronous input for the [`App`](super::App).
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// The conference store published a new state
    LoadStateChanged(LoadState),
    /// Terminal dimensions changed
    Resized { width: u16, height: u16 },
}
