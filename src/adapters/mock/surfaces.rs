//! Recording doubles for the share and launch surfaces.

use std::sync::{Arc, Mutex};

use crate::error::{LaunchError, ShareError};
use crate::traits::{ShareOutcome, ShareSurface, UrlLauncher};

/// Captures every shared message. Clones share the same log.
#[derive(Debug, Clone, Default)]
pub struct RecordingShare {
    messages: Arc<Mutex<Vec<String>>>,
    fail_with: Option<ShareError>,
}

impl RecordingShare {
    pub fn new() -> Self {
        Self::default()
    }

    /// A share surface that always fails.
    pub fn failing(error: ShareError) -> Self {
        Self {
            messages: Arc::default(),
            fail_with: Some(error),
        }
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }
}

impl ShareSurface for RecordingShare {
    fn share(&mut self, message: &str) -> Result<ShareOutcome, ShareError> {
        if let Some(err) = &self.fail_with {
            return Err(err.clone());
        }
        self.messages.lock().unwrap().push(message.to_string());
        Ok(ShareOutcome::Delivered("recorder".to_string()))
    }
}

/// Captures every launched URL. Clones share the same log.
#[derive(Debug, Clone, Default)]
pub struct RecordingLauncher {
    urls: Arc<Mutex<Vec<String>>>,
}

impl RecordingLauncher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn urls(&self) -> Vec<String> {
        self.urls.lock().unwrap().clone()
    }
}

impl UrlLauncher for RecordingLauncher {
    fn launch(&mut self, url: &str) -> Result<(), LaunchError> {
        self.urls.lock().unwrap().push(url.to_string());
        Ok(())
    }
}
