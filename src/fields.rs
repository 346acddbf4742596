//! HTTP headers
use std::{borrow::Cow, fmt::Display, io::Write};

use crate::error::ParseError;

mod de;
mod ser;

/// Header value that is usually, but not always, UTF-8 text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Hstring {
    Text(String),
    Opaque(Vec<u8>),
}

impl Hstring {
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Self::Text(text) => text.as_bytes(),
            Self::Opaque(vec) => vec,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        if let Self::Text(v) = self {
            Some(v)
        } else {
            None
        }
    }

    pub fn to_string_lossy(&self) -> Cow<'_, str> {
        match self {
            Self::Text(text) => text.into(),
            Self::Opaque(vec) => String::from_utf8_lossy(vec),
        }
    }
}

impl Default for Hstring {
    fn default() -> Self {
        Self::Text(String::new())
    }
}

impl Display for Hstring {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_string_lossy())
    }
}

impl From<String> for Hstring {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl From<&str> for Hstring {
    fn from(v: &str) -> Self {
        Self::Text(v.to_owned())
    }
}

impl From<Vec<u8>> for Hstring {
    fn from(v: Vec<u8>) -> Self {
        match String::from_utf8(v) {
            Ok(v) => Self::Text(v),
            Err(e) => Self::Opaque(e.into_bytes()),
        }
    }
}

impl From<&[u8]> for Hstring {
    fn from(v: &[u8]) -> Self {
        v.to_vec().into()
    }
}

const INITIAL_CAPACITY: usize = 4;

/// Data structure for HTTP name-value header fields.
///
/// This is an insertion-ordered multimap with case-insensitive names.
/// Appending never coalesces duplicate names, so repeated headers such as
/// `Set-Cookie` stay repeated, and serialization emits the pairs in the
/// order they were appended. Lookups return the first match in insertion
/// order.
///
/// No validation is performed on whether names or values are valid HTTP
/// values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderMap {
    fields: Vec<(String, Hstring)>,
}

impl HeaderMap {
    /// Creates an empty map with room for a few pairs.
    pub fn new() -> Self {
        Self::with_capacity(INITIAL_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            fields: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&mut self) {
        self.fields.clear()
    }

    /// Appends a pair at the end of the map.
    pub fn append<N, V>(&mut self, name: N, value: V)
    where
        N: Into<String>,
        V: Into<Hstring>,
    {
        self.fields.push((name.into(), value.into()))
    }

    /// Returns the value of the first pair matching the name.
    pub fn get(&self, name: &str) -> Option<&Hstring> {
        self.fields
            .iter()
            .find(|(n, _v)| n.eq_ignore_ascii_case(name))
            .map(|(_n, v)| v)
    }

    /// Returns the values of every pair matching the name, in insertion
    /// order.
    pub fn get_all<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Hstring> + 'a {
        self.fields.iter().filter_map(move |(n, v)| {
            if n.eq_ignore_ascii_case(name) {
                Some(v)
            } else {
                None
            }
        })
    }

    pub fn contains_name(&self, name: &str) -> bool {
        self.fields
            .iter()
            .any(|(n, _v)| n.eq_ignore_ascii_case(name))
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter::new(&self.fields)
    }

    /// Parses a header block of `name: value` lines.
    ///
    /// Each line splits on the first `": "` into a name and a verbatim
    /// value. Parsing stops at the first empty line or at the end of
    /// input; any other line that is not a field is a
    /// [`ParseError::MalformedHeader`] error.
    pub fn parse(input: &[u8]) -> Result<Self, ParseError> {
        let (remain, pairs) = crate::parse::fields::field_pairs(input)
            .map_err(|_| malformed_line(input))?;

        if !(remain.is_empty() || remain.starts_with(b"\r\n")) {
            return Err(malformed_line(remain));
        }

        let mut map = Self::with_capacity(pairs.len().max(INITIAL_CAPACITY));

        for pair in pairs {
            let name = String::from_utf8(pair.name.to_vec())?;
            map.append(name, pair.value);
        }

        Ok(map)
    }

    /// Writes each pair as `Name: Value\r\n` in insertion order.
    ///
    /// The blank line separating the header block from the body is not
    /// written; the message serializer appends it.
    pub fn serialize<W: Write>(&self, mut buf: W) -> std::io::Result<()> {
        for (name, value) in self {
            buf.write_all(name.as_bytes())?;
            buf.write_all(b": ")?;
            buf.write_all(value.as_bytes())?;
            buf.write_all(b"\r\n")?;
        }

        Ok(())
    }
}

fn malformed_line(remain: &[u8]) -> ParseError {
    ParseError::MalformedHeader {
        line: crate::error::snippet(crate::parse::first_line(remain)),
    }
}

impl IntoIterator for HeaderMap {
    type Item = (String, Hstring);
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.into_iter()
    }
}

impl<'a> IntoIterator for &'a HeaderMap {
    type Item = (&'a String, &'a Hstring);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<N: Into<String>, V: Into<Hstring>> Extend<(N, V)> for HeaderMap {
    fn extend<T: IntoIterator<Item = (N, V)>>(&mut self, iter: T) {
        self.fields
            .extend(iter.into_iter().map(|(n, v)| (n.into(), v.into())))
    }
}

impl<N: Into<String>, V: Into<Hstring>> FromIterator<(N, V)> for HeaderMap {
    fn from_iter<T: IntoIterator<Item = (N, V)>>(iter: T) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

impl Display for HeaderMap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (name, value) in &self.fields {
            write!(f, "{}: {}\r\n", name, value)?;
        }

        Ok(())
    }
}

pub struct Iter<'a> {
    fields: std::slice::Iter<'a, (String, Hstring)>,
}

impl<'a> Iter<'a> {
    fn new(fields: &'a [(String, Hstring)]) -> Self {
        Self {
            fields: fields.iter(),
        }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a String, &'a Hstring);

    fn next(&mut self) -> Option<Self::Item> {
        self.fields.next().map(|(n, v)| (n, v))
    }
}
