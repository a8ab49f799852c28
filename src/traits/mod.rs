//! Trait abstractions for dependency injection and testability.
//!
//! The app talks to the outside world through three narrow seams:
//!
//! - [`HttpClient`] - fetching the schedule document
//! - [`ShareSurface`] - handing a plain-text message to the platform
//! - [`UrlLauncher`] - opening a video or link outside the terminal

pub mod http;
pub mod launcher;
pub mod share;

pub use http::{Headers, HttpClient, HttpError, Response};
pub use launcher::UrlLauncher;
pub use share::{ShareOutcome, ShareSurface};
