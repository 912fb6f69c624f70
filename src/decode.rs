//! Character-reference decoding and extraction of the one fenced
//! `<pre><code>` block a question or option may embed.

use std::ops::Range;

/// Decode HTML character references into literal characters the way a
/// browser reads text inside a `<textarea>`: legacy names without a
/// semicolon (`&lt`, `&amp`) are expanded and invalid numeric references
/// become U+FFFD. Tags are left untouched.
pub fn decode(text: &str) -> String {
    htmlize::unescape(text).into_owned()
}

/// Result of splitting text around its first `<pre><code>` block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeSplit<'a> {
    pub before: &'a str,
    pub code: Option<String>,
    pub after: &'a str,
}

/// Split `text` around the first `<pre>` `<code ...>` ... `</code>` `</pre>`
/// block. Matching ignores ASCII case, whitespace between the tags and any
/// attributes on `<code>`.
///
/// Without a block both `before` and `after` hold the trimmed input. Only the
/// first block is recognised: a second one stays as literal markup in
/// `after`.
pub fn extract_code_block(text: &str) -> CodeSplit<'_> {
    match find_code_block(text) {
        Some(block) => CodeSplit {
            before: &text[..block.start],
            code: Some(decode(&text[block.inner])),
            after: &text[block.end..],
        },
        None => {
            let trimmed = text.trim();
            CodeSplit {
                before: trimmed,
                code: None,
                after: trimmed,
            }
        }
    }
}

struct BlockSpan {
    start: usize,
    inner: Range<usize>,
    end: usize,
}

const PRE_OPEN: &str = "<pre>";
const PRE_CLOSE: &str = "</pre>";
const CODE_OPEN: &str = "<code";
const CODE_CLOSE: &str = "</code>";

fn find_code_block(text: &str) -> Option<BlockSpan> {
    let mut from = 0;
    while let Some(start) = find_ignore_case(text, PRE_OPEN, from) {
        let after_pre = start + PRE_OPEN.len();
        if let Some(span) = match_code_body(text, start, after_pre) {
            return Some(span);
        }
        from = after_pre;
    }
    None
}

fn match_code_body(text: &str, start: usize, after_pre: usize) -> Option<BlockSpan> {
    let code_at = skip_whitespace(text, after_pre);
    if !starts_with_ignore_case(&text[code_at..], CODE_OPEN) {
        return None;
    }
    let inner_start = code_at + text[code_at..].find('>')? + 1;

    let mut search = inner_start;
    while let Some(close) = find_ignore_case(text, CODE_CLOSE, search) {
        let after_code = close + CODE_CLOSE.len();
        let pre_at = skip_whitespace(text, after_code);
        if starts_with_ignore_case(&text[pre_at..], PRE_CLOSE) {
            return Some(BlockSpan {
                start,
                inner: inner_start..close,
                end: pre_at + PRE_CLOSE.len(),
            });
        }
        search = after_code;
    }
    None
}

fn find_ignore_case(haystack: &str, needle: &str, from: usize) -> Option<usize> {
    let (h, n) = (haystack.as_bytes(), needle.as_bytes());
    let last = h.len().checked_sub(n.len())?;
    (from..=last).find(|&i| h[i..i + n.len()].eq_ignore_ascii_case(n))
}

fn starts_with_ignore_case(s: &str, prefix: &str) -> bool {
    s.len() >= prefix.len() && s.as_bytes()[..prefix.len()].eq_ignore_ascii_case(prefix.as_bytes())
}

fn skip_whitespace(text: &str, at: usize) -> usize {
    let rest = &text[at..];
    at + (rest.len() - rest.trim_start().len())
}
