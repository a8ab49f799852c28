//! Version and usage text.

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn version_text() -> String {
    format!("confdeck {}", VERSION)
}

pub fn help_text() -> String {
    format!(
        "{}
Browse a conference schedule in the terminal.

USAGE:
    confdeck [OPTIONS]

OPTIONS:
    --endpoint <url>   Schedule document URL (env: CONFDECK_ENDPOINT)
    --event <name>     Event name used in share messages (env: CONFDECK_EVENT_NAME)
    -V, --version      Print version
    -h, --help         Print this help

Logs are written to the confdeck cache directory; set CONFDECK_LOG to change the filter.",
        version_text()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_text() {
        assert!(version_text().starts_with("confdeck "));
        assert!(version_text().ends_with(VERSION));
    }

    #[test]
    fn test_help_mentions_flags() {
        let help = help_text();
        assert!(help.contains("--endpoint"));
        assert!(help.contains("--event"));
        assert!(help.contains("CONFDECK_LOG"));
    }
}
