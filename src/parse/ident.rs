//! Stable per-task identifiers embedded in checklist lines.
//!
//! Two historical encodings are recognized:
//! - canonical: an inline comment, `<!-- tid:ab12cd34 -->`
//! - legacy: a bracket tag, `[id:ab12cd34]`, read-only
//!
//! Both carry a 6-32 character hex payload. Lines seen with only the legacy
//! form (or no id at all) are upgraded to the canonical form on the next
//! load; see the week store's migration pass.

/// Bounds on the hex payload accepted in either token form.
const MIN_HEX_LEN: usize = 6;
const MAX_HEX_LEN: usize = 32;

/// Length of freshly generated identifiers.
const GENERATED_HEX_LEN: usize = 8;

const COMMENT_OPEN: &str = "<!--";
const COMMENT_CLOSE: &str = "-->";
const BRACKET_OPEN: &str = "[id:";

/// An identifier token found on a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdToken {
    /// Hex payload, normalized to lowercase.
    pub hex: String,
    /// True only for the comment-style form. Anything else gets migrated.
    pub canonical: bool,
}

/// Error from the OS random source during id generation.
#[derive(Debug, thiserror::Error)]
#[error("could not generate task id: {0}")]
pub struct IdGenError(String);

/// Generate a fresh 8-hex-char identifier from OS-backed CSPRNG entropy.
///
/// Uniqueness is file-scoped and probabilistic; no global check is made.
pub fn generate_id() -> Result<String, IdGenError> {
    let mut bytes = [0_u8; GENERATED_HEX_LEN / 2];
    getrandom::fill(&mut bytes).map_err(|e| IdGenError(e.to_string()))?;
    let mut hex = String::with_capacity(GENERATED_HEX_LEN);
    for b in bytes {
        hex.push_str(&format!("{b:02x}"));
    }
    Ok(hex)
}

/// The canonical on-disk encoding of an identifier.
pub fn canonical_token(hex: &str) -> String {
    format!("<!-- tid:{hex} -->")
}

/// Extract the identifier token from a line's free text, if present.
///
/// Checks the canonical comment form first, then the legacy bracket form.
/// Returns the text with the token removed, plus the token.
pub fn extract_id(text: &str) -> (String, Option<IdToken>) {
    if let Some((rest, hex)) = take_comment_token(text) {
        return (
            rest,
            Some(IdToken {
                hex,
                canonical: true,
            }),
        );
    }
    if let Some((rest, hex)) = take_bracket_token(text) {
        return (
            rest,
            Some(IdToken {
                hex,
                canonical: false,
            }),
        );
    }
    (text.to_string(), None)
}

fn is_hex_payload(s: &str) -> bool {
    (MIN_HEX_LEN..=MAX_HEX_LEN).contains(&s.len()) && s.bytes().all(|b| b.is_ascii_hexdigit())
}

/// Match `<!-- tid:HEX -->`. The token is canonically trailing, so the scan
/// runs right to left; unrelated comments earlier on the line are ignored.
fn take_comment_token(text: &str) -> Option<(String, String)> {
    let mut search_end = text.len();
    while let Some(start) = text[..search_end].rfind(COMMENT_OPEN) {
        let inner_start = start + COMMENT_OPEN.len();
        if let Some(close_off) = text[inner_start..].find(COMMENT_CLOSE) {
            let inner_end = inner_start + close_off;
            if let Some(hex) = text[inner_start..inner_end].trim().strip_prefix("tid:") {
                let hex = hex.trim();
                if is_hex_payload(hex) {
                    return Some((
                        remove_span(text, start, inner_end + COMMENT_CLOSE.len()),
                        hex.to_ascii_lowercase(),
                    ));
                }
            }
        }
        search_end = start;
    }
    None
}

/// Match the legacy `[id:HEX]` bracket tag, also scanning right to left.
fn take_bracket_token(text: &str) -> Option<(String, String)> {
    let mut search_end = text.len();
    while let Some(start) = text[..search_end].rfind(BRACKET_OPEN) {
        let inner_start = start + BRACKET_OPEN.len();
        if let Some(close_off) = text[inner_start..].find(']') {
            let inner_end = inner_start + close_off;
            let hex = text[inner_start..inner_end].trim();
            if is_hex_payload(hex) {
                return Some((
                    remove_span(text, start, inner_end + 1),
                    hex.to_ascii_lowercase(),
                ));
            }
        }
        search_end = start;
    }
    None
}

fn remove_span(text: &str, start: usize, end: usize) -> String {
    let mut rest = String::with_capacity(text.len());
    rest.push_str(&text[..start]);
    rest.push_str(&text[end..]);
    rest
}
