//! Process-wide viewer configuration, installed once before launch.

use std::sync::OnceLock;

use greeting_core::{ClockFormat, GreetingContent};

/// Everything the root component needs from the command line.
#[derive(Debug, Clone, Default)]
pub struct ViewerConfig {
    pub content: GreetingContent,
    pub clock_format: ClockFormat,
}

/// Global storage for the viewer configuration.
static VIEWER_CONFIG: OnceLock<ViewerConfig> = OnceLock::new();

/// Stores the configuration. Returns `false` if one was already installed.
pub fn install(config: ViewerConfig) -> bool {
    VIEWER_CONFIG.set(config).is_ok()
}

/// Returns the installed configuration, or the built-in defaults.
pub fn viewer_config() -> &'static ViewerConfig {
    VIEWER_CONFIG.get_or_init(ViewerConfig::default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_install_once() {
        let _ = install(ViewerConfig::default());
        assert!(!install(ViewerConfig::default()));
        assert_eq!(viewer_config().content, GreetingContent::default());
    }
}
