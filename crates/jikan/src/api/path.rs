//! Path parameter substitution for endpoint templates.
//!
//! Templates name their parameters with `{name}` placeholders; a resolved
//! path has every placeholder replaced and no extra parameters.

use crate::error::JikanError;
use crate::Result;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt::Display;

static PLACEHOLDER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{([^}]+)\}").expect("placeholder pattern is valid"));

/// Ordered path parameters for one call
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathParams(Vec<(String, String)>);

impl PathParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a parameter, stringifying and percent-encoding its value
    ///
    /// Each value fills exactly one path segment, so `/`, `?`, `#` and
    /// spaces are encoded rather than passed through.
    pub fn with(mut self, name: impl Into<String>, value: impl Display) -> Self {
        let value = urlencoding::encode(&value.to_string()).into_owned();
        self.0.push((name.into(), value));
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Display, const N: usize> From<[(K, V); N]> for PathParams {
    fn from(pairs: [(K, V); N]) -> Self {
        pairs
            .into_iter()
            .fold(PathParams::new(), |params, (k, v)| params.with(k, v))
    }
}

/// Names of the placeholders in a template, in order of appearance
pub fn placeholders(template: &str) -> Vec<&str> {
    PLACEHOLDER
        .captures_iter(template)
        .filter_map(|c| c.get(1).map(|m| m.as_str()))
        .collect()
}

/// Substitute `params` into `template`
///
/// Fails with `TemplateMismatch` on the first parameter that has no
/// placeholder, and with `MissingParameter` listing every placeholder left
/// unresolved.
pub fn resolve(template: &str, params: &PathParams) -> Result<String> {
    let mut resolved = template.to_string();

    for (name, value) in params.iter() {
        let placeholder = format!("{{{name}}}");
        if !resolved.contains(&placeholder) {
            return Err(JikanError::TemplateMismatch {
                template: template.to_string(),
                key: name.to_string(),
            });
        }
        resolved = resolved.replacen(&placeholder, value, 1);
    }

    let missing: Vec<String> = placeholders(&resolved)
        .into_iter()
        .map(str::to_string)
        .collect();
    if !missing.is_empty() {
        return Err(JikanError::MissingParameter {
            template: template.to_string(),
            names: missing,
        });
    }

    Ok(resolved)
}
