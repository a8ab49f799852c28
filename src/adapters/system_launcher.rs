//! URL launcher using the `open` crate.

use crate::error::LaunchError;
use crate::traits::UrlLauncher;

#[derive(Debug, Default)]
pub struct SystemLauncher;

impl SystemLauncher {
    pub fn new() -> Self {
        Self
    }
}

impl UrlLauncher for SystemLauncher {
    fn launch(&mut self, url: &str) -> Result<(), LaunchError> {
        tracing::info!("Opening {}", url);
        open::that(url).map_err(|e| LaunchError {
            url: url.to_string(),
            message: e.to_string(),
        })
    }
}
