//! Pipeline warnings with colored terminal output.
//!
//! The conversion pipeline never raises; lenient stages report what they
//! dropped here instead — the drop itself is the contract, the warning is
//! only a diagnostic aid. Each unique message prints once per conversion.

use std::collections::HashSet;
use std::fmt;
use std::sync::{LazyLock, Mutex};

/// ANSI color codes for terminal output
const YELLOW: &str = "\x1b[33m";
const RESET: &str = "\x1b[0m";

/// Messages already printed, keyed by component + text.
static WARNED: LazyLock<Mutex<HashSet<String>>> = LazyLock::new(|| Mutex::new(HashSet::new()));

/// The pipeline stage reporting a warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Component {
    /// The markup parser.
    Markup,
    /// The stylesheet parser and cascade resolver.
    Style,
    /// Layout synthesis.
    Scene,
    /// Pipeline orchestration and the raster host.
    Studio,
}

impl Component {
    /// The label shown in warning output.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Markup => "Markup",
            Self::Style => "Style",
            Self::Scene => "Scene",
            Self::Studio => "Studio",
        }
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Warn about a dropped or unsupported construct (prints once per unique message)
///
/// # Example
/// ```ignore
/// warn_once(Component::Markup, "dropping unmatched <div> tag");
/// ```
///
/// # Panics
/// Panics if the global warning set mutex is poisoned.
pub fn warn_once(component: Component, message: &str) {
    let key = format!("[{component}] {message}");
    let should_print = WARNED.lock().unwrap().insert(key);

    if should_print {
        eprintln!("{YELLOW}[Stencil {component}] ⚠ {message}{RESET}");
    }
}

/// Clear all recorded warnings (call when starting a new conversion)
///
/// # Panics
/// Panics if the global warning set mutex is poisoned.
pub fn clear_warnings() {
    WARNED.lock().unwrap().clear();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_component_labels() {
        assert_eq!(Component::Markup.label(), "Markup");
        assert_eq!(Component::Studio.to_string(), "Studio");
    }

    #[test]
    fn test_warn_and_clear_do_not_panic() {
        warn_once(Component::Scene, "test-only message");
        warn_once(Component::Scene, "test-only message");
        clear_warnings();
    }
}
