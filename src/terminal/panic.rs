//! Panic hook that gives the terminal back before the message prints.

use std::panic;

use super::setup::emergency_restore;

/// Install the hook. Call it before creating the `TerminalManager`.
pub fn setup_panic_hook() {
    let original_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        emergency_restore();
        tracing::error!("panic: {}", panic_info);
        original_hook(panic_info);
    }));
}
