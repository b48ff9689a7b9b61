//! Utility Functions
//!
//! Corresponds to packages/compiler/src/util.ts
//! String helpers, the UTF-8 encoder, `stringify`, forward refs and `Version`.
//! The value visitor lives in `value`, the sync/async wrapper in `sync_async`
//! and the error helpers in `error`.

use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

static DASH_CASE_REGEXP: Lazy<Regex> = Lazy::new(|| Regex::new(r"-+([a-z0-9])").unwrap());

/// Characters with a special meaning in regular expressions
static REGEXP_SPECIAL_CHARS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([.*+?^=!:$\{\}()|\[\]/\\])").unwrap());

/// Convert dash-case to camelCase: `foo-bar-baz` becomes `fooBarBaz`.
pub fn dash_case_to_camel_case(input: &str) -> String {
    DASH_CASE_REGEXP
        .replace_all(input, |caps: &regex::Captures| caps[1].to_uppercase())
        .into_owned()
}

pub fn split_at_colon(input: &str, default_values: &[Option<&str>]) -> Vec<Option<String>> {
    split_at(input, ':', default_values)
}

pub fn split_at_period(input: &str, default_values: &[Option<&str>]) -> Vec<Option<String>> {
    split_at(input, '.', default_values)
}

/// Splits at the first `character`, trimming both halves.
/// Without a match the defaults come back unchanged.
fn split_at(input: &str, character: char, default_values: &[Option<&str>]) -> Vec<Option<String>> {
    match input.split_once(character) {
        Some((head, tail)) => vec![
            Some(head.trim().to_string()),
            Some(tail.trim().to_string()),
        ],
        None => default_values
            .iter()
            .map(|v| v.map(str::to_string))
            .collect(),
    }
}

/// Escape characters that have a special meaning in regular expressions
pub fn escape_regex(s: &str) -> String {
    REGEXP_SPECIAL_CHARS.replace_all(s, r"\${1}").into_owned()
}

pub fn is_defined<T>(val: Option<&T>) -> bool {
    val.is_some()
}

/// `undefined` and `null` are both `None` here, so this only flattens
/// a doubly optional value.
pub fn no_undefined<T>(val: Option<Option<T>>) -> Option<T> {
    val.flatten()
}

/// UTF-8 encode a string through its UTF-16 code units.
pub fn utf8_encode(str: &str) -> Vec<u8> {
    let units: Vec<u16> = str.encode_utf16().collect();
    utf8_encode_utf16(&units)
}

/// UTF-8 encode raw UTF-16 code units.
///
/// Valid surrogate pairs are combined into one code point. Unpaired
/// surrogates are not rejected: they are encoded as their own value in the
/// 3-byte form (WTF-8 style).
pub fn utf8_encode_utf16(units: &[u16]) -> Vec<u8> {
    let mut encoded = Vec::with_capacity(units.len());
    let mut index = 0;

    while index < units.len() {
        let mut code_point = units[index] as u32;

        // see https://mathiasbynens.be/notes/javascript-encoding#surrogate-formulae
        if (0xD800..=0xDBFF).contains(&code_point) {
            if let Some(&low) = units.get(index + 1) {
                let low = low as u32;
                if (0xDC00..=0xDFFF).contains(&low) {
                    index += 1;
                    code_point = ((code_point - 0xD800) << 10) + low - 0xDC00 + 0x10000;
                }
            }
        }

        utf8_encode_code_point(code_point, &mut encoded);
        index += 1;
    }

    encoded
}

/// Append the UTF-8 bytes of one code point to `out`.
///
/// Code points wider than 21 bits produce no bytes at all.
pub fn utf8_encode_code_point(code_point: u32, out: &mut Vec<u8>) {
    if code_point <= 0x7f {
        out.push(code_point as u8);
    } else if code_point <= 0x7ff {
        out.extend_from_slice(&[
            ((code_point >> 6) & 0x1f | 0xc0) as u8,
            (code_point & 0x3f | 0x80) as u8,
        ]);
    } else if code_point <= 0xffff {
        out.extend_from_slice(&[
            (code_point >> 12 | 0xe0) as u8,
            ((code_point >> 6) & 0x3f | 0x80) as u8,
            (code_point & 0x3f | 0x80) as u8,
        ]);
    } else if code_point <= 0x1f_ffff {
        out.extend_from_slice(&[
            ((code_point >> 18) & 0x07 | 0xf0) as u8,
            ((code_point >> 12) & 0x3f | 0x80) as u8,
            ((code_point >> 6) & 0x3f | 0x80) as u8,
            (code_point & 0x3f | 0x80) as u8,
        ]);
    }
}

/// Types that can render themselves as a token name in diagnostics.
pub trait Stringify {
    fn stringify(&self) -> String;
}

/// Render a token for error messages.
///
/// # Examples
///
/// ```
/// use angular_compiler::util::stringify;
///
/// assert_eq!(stringify(&"hello"), "hello");
/// assert_eq!(stringify(&vec![1, 2, 3]), "[1, 2, 3]");
/// assert_eq!(stringify(&None::<&str>), "null");
/// ```
pub fn stringify<T: Stringify + ?Sized>(token: &T) -> String {
    token.stringify()
}

impl Stringify for str {
    fn stringify(&self) -> String {
        self.to_string()
    }
}

impl Stringify for &str {
    fn stringify(&self) -> String {
        (*self).to_string()
    }
}

impl Stringify for String {
    fn stringify(&self) -> String {
        self.clone()
    }
}

impl<T: Stringify> Stringify for Option<T> {
    fn stringify(&self) -> String {
        match self {
            None => "null".to_string(),
            Some(v) => v.stringify(),
        }
    }
}

impl<T: Stringify> Stringify for [T] {
    fn stringify(&self) -> String {
        let parts: Vec<String> = self.iter().map(Stringify::stringify).collect();
        format!("[{}]", parts.join(", "))
    }
}

impl<T: Stringify> Stringify for Vec<T> {
    fn stringify(&self) -> String {
        self.as_slice().stringify()
    }
}

macro_rules! stringify_display {
    ($($ty:ty),*) => {
        $(
            impl Stringify for $ty {
                fn stringify(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

stringify_display!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64, bool, char);

/// Debug rendering cut at the first newline, for tokens without a name.
pub fn stringify_debug<T: fmt::Debug>(value: &T) -> String {
    let rendered = format!("{:?}", value);
    match rendered.split_once('\n') {
        Some((first_line, _)) => first_line.to_string(),
        None => rendered,
    }
}

/// A reference that may be declared before its target exists.
pub enum ForwardRef<T> {
    Resolved(T),
    Deferred(Box<dyn Fn() -> T + Send + Sync>),
}

impl<T> ForwardRef<T> {
    pub fn deferred(f: impl Fn() -> T + Send + Sync + 'static) -> Self {
        ForwardRef::Deferred(Box::new(f))
    }
}

impl<T: fmt::Debug> fmt::Debug for ForwardRef<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ForwardRef::Resolved(value) => f.debug_tuple("Resolved").field(value).finish(),
            ForwardRef::Deferred(_) => f.write_str("Deferred(..)"),
        }
    }
}

/// Lazily retrieves the reference value from a forward ref.
pub fn resolve_forward_ref<T: Clone>(reference: &ForwardRef<T>) -> T {
    match reference {
        ForwardRef::Resolved(value) => value.clone(),
        ForwardRef::Deferred(f) => f(),
    }
}

/// A version split into major/minor/patch parts.
///
/// The patch part keeps everything after the second dot, so
/// `"7.2.1-beta"` has patch `"1-beta"` and `"1.2.3.4"` has patch `"3.4"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Version {
    pub full: String,
    pub major: String,
    pub minor: String,
    pub patch: String,
}

impl Version {
    pub fn new(full: &str) -> Self {
        let mut parts = full.splitn(3, '.');
        Version {
            full: full.to_string(),
            major: parts.next().unwrap_or_default().to_string(),
            minor: parts.next().unwrap_or_default().to_string(),
            patch: parts.next().unwrap_or_default().to_string(),
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full)
    }
}

impl Stringify for Version {
    fn stringify(&self) -> String {
        self.full.clone()
    }
}

// Tests are in test/ directory (matching TypeScript structure)
