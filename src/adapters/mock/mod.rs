//! Mock implementations for testing.
//!
//! These let the fetch, share and launch paths run without network access,
//! a clipboard or a browser.

pub mod http;
pub mod surfaces;

pub use http::{MockHttpClient, MockResponse, RecordedRequest};
pub use surfaces::{RecordingLauncher, RecordingShare};
