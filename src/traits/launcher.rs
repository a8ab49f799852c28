//! URL launcher abstraction used for video playback and speaker links.

use crate::error::LaunchError;

pub trait UrlLauncher: Send {
    /// Open `url` with the platform's default handler.
    fn launch(&mut self, url: &str) -> Result<(), LaunchError>;
}
