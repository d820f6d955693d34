//! Environment interpolation for YAML configs
//!
//! Replaces `${NAME}` with the value of environment variable `NAME` before
//! the config is parsed, so secrets never need to live in the file.

use crate::error::{Error, Result};
use regex::{Captures, Regex};
use std::sync::LazyLock;

/// Regex for matching `${VARIABLE}`
static ENV_VAR_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$\{\s*([A-Za-z_][A-Za-z0-9_]*)\s*\}").expect("env var pattern is valid")
});

/// Interpolate `${VAR}` references from the process environment
pub fn render_env(template: &str) -> Result<String> {
    render_with(template, |name| std::env::var(name).ok())
}

/// Interpolate `${VAR}` references using `lookup`
///
/// Every unresolved name is reported in a single error.
pub fn render_with(template: &str, lookup: impl Fn(&str) -> Option<String>) -> Result<String> {
    let mut missing = Vec::new();

    let rendered = ENV_VAR_REGEX.replace_all(template, |cap: &Captures<'_>| {
        let name = &cap[1];
        lookup(name).unwrap_or_else(|| {
            if !missing.iter().any(|m| m == name) {
                missing.push(name.to_string());
            }
            String::new()
        })
    });

    if missing.is_empty() {
        Ok(rendered.into_owned())
    } else {
        Err(Error::undefined_var(missing.join(", ")))
    }
}

/// Check if a string contains `${VAR}` references
pub fn has_env_refs(s: &str) -> bool {
    ENV_VAR_REGEX.is_match(s)
}
