//! Checklist line serialization.
//!
//! The canonical on-disk format, space-joined and trailing-trimmed:
//!
//! `- [ ] <text> est:<int> act:<int> reason:<text> <!-- tid:<hex> -->`
//!
//! Optional groups are omitted when absent, in exactly that order. Output is
//! always re-parseable to the same structured value.

use crate::parse::ident;
use crate::parse::line_parser::parse_free_text;

/// Build the canonical line for the given fields.
///
/// `text` is re-run through the parser's cleaning step first, so a caller
/// passing already-tokenized text cannot leak stale tokens into the output.
pub fn serialize_line(
    done: bool,
    text: &str,
    est_min: Option<u32>,
    act_min: Option<u32>,
    reason: &str,
    id: &str,
) -> String {
    let clean = parse_free_text(text).text;

    let mut parts: Vec<String> = Vec::new();
    parts.push(format!("- [{}]", if done { 'x' } else { ' ' }));
    if !clean.is_empty() {
        parts.push(clean);
    }
    if let Some(est) = est_min {
        parts.push(format!("est:{est}"));
    }
    if let Some(act) = act_min {
        parts.push(format!("act:{act}"));
    }
    let reason = reason.trim();
    if !reason.is_empty() {
        parts.push(format!("reason:{reason}"));
    }
    parts.push(ident::canonical_token(id));

    parts.join(" ").trim_end().to_string()
}
