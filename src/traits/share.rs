//! Share surface abstraction.
//!
//! Detail screens compose a plain-text message; the surface decides how it
//! reaches the user (clipboard in production, a recorder in tests).

use crate::error::ShareError;

/// What happened to a shared message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShareOutcome {
    /// Placed on the system clipboard
    Copied,
    /// Handed to some other target, described for the status line
    Delivered(String),
}

pub trait ShareSurface: Send {
    fn share(&mut self, message: &str) -> Result<ShareOutcome, ShareError>;
}
