//! Requests for the browser-side highlighter and math typesetter.
//!
//! The server never waits on typesetting. It attaches a `quiz:typeset` event
//! to htmx responses through the `HX-Trigger-After-Settle` header, and
//! `static/quiz.js` runs highlight.js and MathJax, logging any failure to
//! the console. Every node an htmx swap re-creates has to be named here, or
//! it comes back with raw TeX and unhighlighted code.

use std::fmt::Write;

use axum::http::{HeaderName, HeaderValue};
use serde::Serialize;

pub const TYPESET_EVENT: &str = "quiz:typeset";
pub const HX_TRIGGER_AFTER_SETTLE: HeaderName = HeaderName::from_static("hx-trigger-after-settle");

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypesetRequest {
    /// Element ids to process; empty processes the whole results panel.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub targets: Vec<String>,
}

impl TypesetRequest {
    /// Highlight every code block and typeset every formula after a batch
    /// of cards has been inserted.
    pub fn global() -> Self {
        Self {
            targets: Vec::new(),
        }
    }

    /// Process only the nodes with these ids, e.g. a swapped options list and
    /// its freshly revealed explanation slot.
    pub fn nodes<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            targets: ids.into_iter().map(Into::into).collect(),
        }
    }

    /// Value for the `HX-Trigger-After-Settle` header. Non-ASCII characters
    /// are written as `\u` escapes since browsers read header bytes as
    /// Latin-1.
    pub fn header_value(&self) -> HeaderValue {
        let payload = serde_json::json!({ TYPESET_EVENT: self });
        let escaped = ascii_json(&payload.to_string());
        HeaderValue::from_str(&escaped).unwrap_or_else(|e| {
            tracing::error!("could not encode typeset trigger {escaped:?}: {e}");
            HeaderValue::from_static("{\"quiz:typeset\":{}}")
        })
    }
}

fn ascii_json(json: &str) -> String {
    let mut out = String::with_capacity(json.len());
    for c in json.chars() {
        if c.is_ascii() {
            out.push(c);
        } else {
            let mut units = [0u16; 2];
            for unit in c.encode_utf16(&mut units) {
                let _ = write!(out, "\\u{unit:04x}");
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn global_request_has_an_empty_detail() {
        assert_eq!(
            TypesetRequest::global().header_value(),
            "{\"quiz:typeset\":{}}"
        );
    }

    #[test]
    fn node_request_names_its_targets() {
        assert_eq!(
            TypesetRequest::nodes(["Q1-options", "Q1-explanation-text"]).header_value(),
            "{\"quiz:typeset\":{\"targets\":[\"Q1-options\",\"Q1-explanation-text\"]}}"
        );
    }

    #[test]
    fn non_ascii_targets_are_escaped() {
        let value = TypesetRequest::nodes(["题1-explanation-text"]).header_value();

        assert_eq!(
            value.to_str().unwrap(),
            "{\"quiz:typeset\":{\"targets\":[\"\\u98981-explanation-text\"]}}"
        );
    }
}
