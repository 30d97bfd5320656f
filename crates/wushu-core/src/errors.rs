//! Structured error types shared across the wushu crates.

use std::collections::BTreeMap;
use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Structured payload attached to every [`WushuError`] variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Stable machine readable error code.
    pub code: String,
    /// Human readable diagnostic message.
    pub message: String,
    /// Contextual key value pairs (posture codes, joint counts, etc.).
    #[serde(default)]
    pub context: BTreeMap<String, String>,
    /// Optional hint that may help the caller resolve the issue.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl ErrorInfo {
    /// Creates a new error payload with the provided code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            context: BTreeMap::new(),
            hint: None,
        }
    }

    /// Adds a context entry to the payload.
    pub fn with_context(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.context.insert(key.into(), value.to_string());
        self
    }

    /// Sets a human readable hint for remediation.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

impl Display for ErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code: {})", self.message, self.code)?;
        if !self.context.is_empty() {
            write!(f, " | context: [")?;
            for (idx, (key, value)) in self.context.iter().enumerate() {
                if idx > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{key}={value}")?;
            }
            write!(f, "]")?;
        }
        if let Some(hint) = &self.hint {
            write!(f, " | hint: {hint}")?;
        }
        Ok(())
    }
}

/// Canonical error type for the scoring engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(tag = "family", content = "detail")]
pub enum WushuError {
    /// Malformed keypoint input (too few joints, empty pose).
    #[error("keypoint error: {0}")]
    Keypoints(ErrorInfo),
    /// Posture lookup failures against the reference catalog.
    #[error("catalog error: {0}")]
    Catalog(ErrorInfo),
    /// Invalid scoring configuration.
    #[error("config error: {0}")]
    Config(ErrorInfo),
    /// Serialization and schema errors.
    #[error("serde error: {0}")]
    Serde(ErrorInfo),
}

impl WushuError {
    /// Returns a reference to the payload describing the error.
    pub fn info(&self) -> &ErrorInfo {
        match self {
            WushuError::Keypoints(info)
            | WushuError::Catalog(info)
            | WushuError::Config(info)
            | WushuError::Serde(info) => info,
        }
    }

    /// Returns the stable error code.
    pub fn code(&self) -> &str {
        &self.info().code
    }

    /// Raised when a pose has fewer joints than an operation indexes into.
    pub fn insufficient_keypoints(required: usize, actual: usize) -> Self {
        WushuError::Keypoints(
            ErrorInfo::new(
                "insufficient-keypoints",
                format!("pose has {actual} joints but at least {required} are required"),
            )
            .with_context("required", required)
            .with_context("actual", actual),
        )
    }

    /// Raised when a joint carries a NaN or infinite coordinate.
    pub fn non_finite_keypoint(index: usize) -> Self {
        WushuError::Keypoints(
            ErrorInfo::new(
                "non-finite-keypoints",
                format!("joint {index} has a non-finite coordinate"),
            )
            .with_context("index", index),
        )
    }

    /// Raised when an identifier does not name a catalog posture.
    pub fn unknown_posture(name: &str) -> Self {
        WushuError::Catalog(
            ErrorInfo::new("unknown-posture", format!("unknown posture identifier `{name}`"))
                .with_context("posture", name)
                .with_hint("use the Chinese name, the pinyin code or the snake_case code"),
        )
    }

    /// Raised when the catalog has no master pose for a known posture.
    pub fn missing_reference(code: &str) -> Self {
        WushuError::Catalog(
            ErrorInfo::new(
                "missing-reference",
                format!("no reference pose registered for `{code}`"),
            )
            .with_context("posture", code),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_lists_context_in_key_order() {
        let err = WushuError::insufficient_keypoints(12, 4);
        let text = err.to_string();
        assert!(text.starts_with("keypoint error: pose has 4 joints"));
        assert!(text.contains("context: [actual=4, required=12]"));
    }

    #[test]
    fn non_finite_keypoint_names_the_joint() {
        let err = WushuError::non_finite_keypoint(2);
        assert!(matches!(err, WushuError::Keypoints(_)));
        assert_eq!(err.code(), "non-finite-keypoints");
        assert_eq!(err.info().context.get("index"), Some(&"2".to_string()));
    }

    #[test]
    fn hint_is_rendered_last() {
        let err = WushuError::unknown_posture("tiger");
        assert!(err.to_string().ends_with(
            "hint: use the Chinese name, the pinyin code or the snake_case code"
        ));
    }
}
