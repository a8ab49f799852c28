//! Concrete implementations of trait abstractions.
//!
//! # Adapters
//!
//! - [`ReqwestHttpClient`] - HTTP client using reqwest
//! - [`ClipboardShare`] - share surface backed by the system clipboard
//! - [`SystemLauncher`] - opens URLs with the platform default handler
//!
//! # Mock Implementations
//!
//! The [`mock`] submodule provides test doubles:
//! - [`mock::MockHttpClient`] - Configurable HTTP responses
//! - [`mock::RecordingShare`] - Captures shared messages
//! - [`mock::RecordingLauncher`] - Captures launched URLs

pub mod clipboard_share;
pub mod mock;
pub mod reqwest_http;
pub mod system_launcher;

pub use clipboard_share::ClipboardShare;
pub use mock::{MockHttpClient, RecordingLauncher, RecordingShare};
pub use reqwest_http::ReqwestHttpClient;
pub use system_launcher::SystemLauncher;
