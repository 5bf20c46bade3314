//! Checklist line parsing.
//!
//! A task line is: optional leading whitespace, `- [`, a single mark that is
//! space/`x`/`X`, `]`, whitespace, free text. From the free text we strip, in
//! order: the id token, a standalone `est:<int>` token, a standalone
//! `act:<int>` token, and finally a `reason:` token that greedily consumes
//! the rest of the line. What remains, whitespace-collapsed, is the display
//! text. The stripping is a hand-written tokenizer; token order matters and
//! the reason must go last, after the id token has already been removed.

use crate::parse::ident::{self, IdToken};

const EST_MARKER: &str = "est:";
const ACT_MARKER: &str = "act:";
const REASON_MARKER: &str = "reason:";

/// The structured value of one checklist line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLine {
    pub done: bool,
    /// Display text, stripped of every recognized token.
    pub text: String,
    pub est_min: Option<u32>,
    pub act_min: Option<u32>,
    /// Empty string when no reason token is present.
    pub reason: String,
    /// Identifier token, if the line carries one.
    pub id: Option<IdToken>,
}

/// Split off the checkbox prefix. Returns the done flag and the free text,
/// or `None` when the line is not a checklist item.
pub fn split_checkbox(line: &str) -> Option<(bool, &str)> {
    let content = line.trim_start();
    let rest = content.strip_prefix("- [")?;
    let mut chars = rest.chars();
    let done = match chars.next()? {
        ' ' => false,
        'x' | 'X' => true,
        _ => return None,
    };
    let rest = chars.as_str().strip_prefix(']')?;
    // Free text must be separated from the checkbox by whitespace, unless
    // the line ends right after the bracket.
    if !rest.is_empty() && !rest.starts_with(char::is_whitespace) {
        return None;
    }
    Some((done, rest.trim_start()))
}

/// True when the line matches the checkbox-task pattern.
pub fn is_task_line(line: &str) -> bool {
    split_checkbox(line).is_some()
}

/// Parse one raw line. Non-task lines yield `None`.
pub fn parse_line(line: &str) -> Option<ParsedLine> {
    let (done, free) = split_checkbox(line)?;
    let mut parsed = parse_free_text(free);
    parsed.done = done;
    Some(parsed)
}

/// Run the token-stripping pipeline over free text (everything after the
/// checkbox). Also used by the serializer to clean caller-supplied text so
/// stale tokens never leak back into a written line.
pub fn parse_free_text(free: &str) -> ParsedLine {
    let (free, id) = ident::extract_id(free);
    let (free, est_min) = take_minutes_token(&free, EST_MARKER);
    let (free, act_min) = take_minutes_token(&free, ACT_MARKER);
    let (free, reason) = take_reason_token(&free);
    ParsedLine {
        done: false,
        text: collapse_whitespace(&free),
        est_min,
        act_min,
        reason,
        id,
    }
}

/// Strip the first whitespace-delimited token starting with `marker`.
///
/// The value is kept only when the payload is all digits and fits; invalid
/// or negative payloads still remove the token but yield no value. Matching
/// whole tokens keeps arbitrary text after the token from being swallowed.
fn take_minutes_token(text: &str, marker: &str) -> (String, Option<u32>) {
    let mut value = None;
    let mut taken = false;
    let mut kept: Vec<&str> = Vec::new();
    for tok in text.split_whitespace() {
        if !taken
            && let Some(payload) = tok.strip_prefix(marker)
        {
            taken = true;
            if !payload.is_empty() && payload.bytes().all(|b| b.is_ascii_digit()) {
                value = payload.parse().ok();
            }
            continue;
        }
        kept.push(tok);
    }
    (kept.join(" "), value)
}

/// Strip a trailing `reason:` token. The reason consumes everything from the
/// marker to the end of the line, so it may contain spaces. Must run after
/// est/act/id stripping.
fn take_reason_token(text: &str) -> (String, String) {
    match find_token_start(text, REASON_MARKER) {
        Some(pos) => {
            let reason = text[pos + REASON_MARKER.len()..].trim().to_string();
            let rest = text[..pos].trim_end().to_string();
            (rest, reason)
        }
        None => (text.to_string(), String::new()),
    }
}

/// Find `marker` at a token boundary: at the start of the text or right
/// after whitespace. `breason:x` is plain text, `reason:x` is a token.
fn find_token_start(text: &str, marker: &str) -> Option<usize> {
    let mut search = 0;
    while let Some(off) = text[search..].find(marker) {
        let pos = search + off;
        if pos == 0 || text[..pos].ends_with(char::is_whitespace) {
            return Some(pos);
        }
        search = pos + marker.len();
    }
    None
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
