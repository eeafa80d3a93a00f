//! Recovery of a JSON object from free-form model output.
//!
//! Models are told to answer with bare JSON, but often wrap it in Markdown
//! code fences or surround it with chatter. `extract` tries, in order:
//!
//! 1. the raw text with every "```json" and "```" marker removed, trimmed;
//! 2. the greedy span of the *original* text from the first `{` to the last `}`.
//!
//! The first candidate that deserializes into the requested type wins. If
//! neither does, the error carries the untouched raw text for diagnostics.

use regex::Regex;
use serde::de::DeserializeOwned;
use std::sync::LazyLock;
use thiserror::Error;

static CODE_FENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"```json|```").expect("valid fence pattern"));
static OBJECT_SPAN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)\{.*\}").expect("valid object pattern"));

#[derive(Debug, Error, PartialEq, Eq)]
#[error("model output does not contain the expected JSON object")]
pub struct ExtractError {
    pub raw: String,
}

pub fn extract<T: DeserializeOwned>(raw: &str) -> Result<T, ExtractError> {
    let cleaned = CODE_FENCE.replace_all(raw, "");
    if let Ok(value) = serde_json::from_str::<T>(cleaned.trim()) {
        return Ok(value);
    }

    OBJECT_SPAN
        .find(raw)
        .and_then(|span| serde_json::from_str::<T>(span.as_str()).ok())
        .ok_or_else(|| ExtractError {
            raw: raw.to_string(),
        })
}
