//! Lenient HTML token stream on top of quick-xml's pull reader.
//!
//! HTML is not XML: void elements are never closed and end tags may not
//! match. The reader is configured to accept both, and any hard error just
//! ends the stream.

use std::borrow::Cow;

use quick_xml::Reader;
use quick_xml::escape::resolve_predefined_entity;
use quick_xml::events::Event;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Token<'a> {
    StartTag(Cow<'a, str>),
    EndTag(Cow<'a, str>),
    Text(Cow<'a, str>),
}

pub(crate) struct Tokens<'a> {
    reader: Reader<&'a [u8]>,
    done: bool,
}

pub(crate) fn tokenize(html: &str) -> Tokens<'_> {
    let mut reader = Reader::from_str(html);
    let config = reader.config_mut();
    config.check_end_names = false;
    config.allow_unmatched_ends = true;
    config.check_comments = false;
    // `&&` in inline scripts, `&` in prose and query strings
    config.allow_dangling_amp = true;
    Tokens {
        reader,
        done: false,
    }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.done {
            let event = match self.reader.read_event() {
                Ok(event) => event,
                Err(e) => {
                    tracing::debug!(
                        position = self.reader.buffer_position(),
                        error = %e,
                        "stopping at malformed markup"
                    );
                    self.done = true;
                    return None;
                }
            };
            let token = match event {
                Event::Start(e) => Token::StartTag(lossy_owned(e.name().as_ref())),
                Event::End(e) => Token::EndTag(lossy_owned(e.name().as_ref())),
                Event::Text(e) => Token::Text(lossy(e.into_inner())),
                Event::CData(e) => Token::Text(lossy(e.into_inner())),
                Event::GeneralRef(e) => {
                    let name = String::from_utf8_lossy(&e);
                    Token::Text(resolve_reference(&name))
                }
                Event::Eof => {
                    self.done = true;
                    return None;
                }
                _ => continue,
            };
            return Some(token);
        }
        None
    }
}

fn lossy_owned(bytes: &[u8]) -> Cow<'static, str> {
    Cow::Owned(String::from_utf8_lossy(bytes).into_owned())
}

fn lossy(bytes: Cow<'_, [u8]>) -> Cow<'_, str> {
    match bytes {
        Cow::Borrowed(b) => String::from_utf8_lossy(b),
        Cow::Owned(v) => Cow::Owned(String::from_utf8_lossy(&v).into_owned()),
    }
}

/// Decode `&name;`: numeric references and the five XML entities.
/// Anything else is passed through as written.
fn resolve_reference(name: &str) -> Cow<'static, str> {
    let numeric = if let Some(hex) = name
        .strip_prefix("#x")
        .or_else(|| name.strip_prefix("#X"))
    {
        u32::from_str_radix(hex, 16).ok()
    } else if let Some(dec) = name.strip_prefix('#') {
        dec.parse::<u32>().ok()
    } else {
        None
    };
    if let Some(ch) = numeric.and_then(char::from_u32) {
        return Cow::Owned(ch.to_string());
    }
    match resolve_predefined_entity(name) {
        Some(text) => Cow::Borrowed(text),
        None => Cow::Owned(format!("&{name};")),
    }
}
