//! Error types for confdeck.
//!
//! Failures fall into three groups:
//!
//! | Kind | Type | Handling |
//! |------|------|----------|
//! | Fetch (network, status, decode) | [`FetchError`] | logged, store enters `Failed`, never retried |
//! | Lookup miss (unknown session/speaker/room id) | none | treated as an absent value |
//! | Platform surface (clipboard, browser) | [`ShareError`], [`LaunchError`] | shown on the status line |
//!
//! None of these end the session.

mod fetch;
mod surface;

pub use fetch::FetchError;
pub use surface::{LaunchError, ShareError};
