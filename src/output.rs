//! # Output Formatting
//!
//! Human-readable rendering of query results for the CLI, plus the colour
//! decision that goes with it.
//!
//! ## Respecting User Preferences
//!
//! - `--color=never|always|auto` - CLI flag for color control
//! - `NO_COLOR` - Disables colors when set (per https://no-color.org/)
//! - `CLICOLOR=0` - Disables colors
//! - `CLICOLOR_FORCE=1` - Forces colors even in non-TTY
//! - `TERM=dumb` - Disables colors for dumb terminals

use std::env;

use console::style;

use crate::revision::PackageRevision;

/// Output configuration for controlling colors and emojis.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// Whether colors and emojis should be used in output.
    pub use_color: bool,
}

impl OutputConfig {
    /// Create an output configuration from environment and CLI flag.
    ///
    /// `always` and `never` win over the environment; anything else detects
    /// support from the variables listed in the module docs and the TTY.
    pub fn from_env_and_flag(color_flag: &str) -> Self {
        let use_color = match color_flag.to_lowercase().as_str() {
            "always" => true,
            "never" => false,
            _ => Self::detect_color_support(),
        };

        Self { use_color }
    }

    fn detect_color_support() -> bool {
        // Presence alone disables colors, even when empty
        if env::var_os("NO_COLOR").is_some() {
            return false;
        }

        if env::var("CLICOLOR").is_ok_and(|v| v == "0") {
            return false;
        }

        if env::var("CLICOLOR_FORCE").is_ok_and(|v| v != "0" && !v.is_empty()) {
            return true;
        }

        if env::var("TERM").is_ok_and(|v| v == "dumb") {
            return false;
        }

        console::Term::stdout().features().colors_supported()
    }

    #[cfg(test)]
    pub fn with_color() -> Self {
        Self { use_color: true }
    }

    #[cfg(test)]
    pub fn without_color() -> Self {
        Self { use_color: false }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self::from_env_and_flag("auto")
    }
}

/// Returns `emoji_str` when colors are enabled, `plain` otherwise.
pub fn emoji<'a>(config: &OutputConfig, emoji_str: &'a str, plain: &'a str) -> &'a str {
    if config.use_color {
        emoji_str
    } else {
        plain
    }
}

/// One line per resolved revision: `<spec>: <revision> (<timestamp>)`
/// followed by the optional fields that are present.
pub fn render_revision(config: &OutputConfig, spec: &str, revision: &PackageRevision) -> String {
    let name = if config.use_color {
        style(revision.revision()).bold().to_string()
    } else {
        revision.revision().to_string()
    };

    let mut line = format!(
        "{} {}: {} ({})",
        emoji(config, "✅", "[OK]"),
        spec,
        name,
        revision.timestamp().to_rfc3339()
    );

    let details = [
        ("user", revision.user()),
        ("location", revision.package_location()),
        ("trackback", revision.trackback_url()),
        ("comment", revision.revision_comment()),
    ];
    for (label, value) in details {
        if let Some(value) = value {
            line.push_str(&format!("\n    {}: {}", label, value));
        }
    }
    line
}

/// Line shown for a spec that matched no package.
pub fn render_absent(config: &OutputConfig, spec: &str) -> String {
    format!("{} {}: no matching package", emoji(config, "➖", "[NONE]"), spec)
}

/// Line shown for a failed query.
pub fn render_failure(config: &OutputConfig, spec: &str, message: &str) -> String {
    format!("{} {}: {}", emoji(config, "❌", "[FAIL]"), spec, message)
}
