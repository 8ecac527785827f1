//! Tag fragment extraction
//!
//! Pulls the plain text out of one tag of an HTML page without building a
//! document tree. The page is turned into a flat token stream and a
//! two-state machine decides which text tokens to keep.

mod tokens;

use std::borrow::Cow;

pub(crate) use tokens::{Token, tokenize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CaptureState {
    Outside,
    Inside,
}

/// Collects the text between the start and end tag of `tag`.
///
/// Capture toggles on the target's boundaries only; depth is not tracked.
/// A nested `<tag>` is ignored while capturing and the first `</tag>`
/// ends capture, even if it closes the nested one. The answer page never
/// nests its `<article>`, so this is left as is.
#[derive(Debug)]
pub(crate) struct FragmentExtractor {
    tag: String,
    state: CaptureState,
    buffer: String,
}

impl FragmentExtractor {
    pub(crate) fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_ascii_lowercase(),
            state: CaptureState::Outside,
            buffer: String::new(),
        }
    }

    pub(crate) fn feed(&mut self, token: Token<'_>) {
        match (self.state, token) {
            (CaptureState::Outside, Token::StartTag(name)) if self.is_target(&name) => {
                self.state = CaptureState::Inside;
            }
            (CaptureState::Inside, Token::EndTag(name)) if self.is_target(&name) => {
                self.state = CaptureState::Outside;
            }
            (CaptureState::Inside, Token::Text(text)) => self.buffer.push_str(&text),
            _ => {}
        }
    }

    pub(crate) fn is_capturing(&self) -> bool {
        self.state == CaptureState::Inside
    }

    pub(crate) fn finish(self) -> String {
        self.buffer.trim().to_string()
    }

    fn is_target(&self, name: &Cow<'_, str>) -> bool {
        name.eq_ignore_ascii_case(&self.tag)
    }
}

/// Text inside every `<tag>`…`</tag>` span of `html`, concatenated and
/// trimmed. Returns an empty string when the tag never appears.
pub(crate) fn extract_fragment(html: &str, tag: &str) -> String {
    let mut extractor = FragmentExtractor::new(tag);
    for token in tokenize(html) {
        extractor.feed(token);
    }
    if extractor.is_capturing() {
        tracing::debug!(tag, "input ended inside target tag");
    }
    extractor.finish()
}
