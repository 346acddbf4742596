use serde::{Deserialize, Deserializer, de::Visitor};

use super::{HeaderMap, Hstring};

struct HeaderMapVisitor;

impl<'de> Visitor<'de> for HeaderMapVisitor {
    type Value = HeaderMap;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str("sequence of name-value pairs")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        let mut fields = Vec::new();

        while let Some(item) = seq.next_element()? {
            fields.push(item);
        }

        Ok(HeaderMap { fields })
    }
}

impl<'de> Deserialize<'de> for HeaderMap {
    fn deserialize<D>(deserializer: D) -> Result<HeaderMap, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_seq(HeaderMapVisitor)
    }
}

struct HstringVisitor;

impl<'de> Visitor<'de> for HstringVisitor {
    type Value = Hstring;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str("string or bytes")
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(v.into())
    }

    fn visit_string<E>(self, v: String) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(v.into())
    }

    fn visit_bytes<E>(self, v: &[u8]) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(v.into())
    }

    fn visit_byte_buf<E>(self, v: Vec<u8>) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(v.into())
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        let mut bytes = Vec::new();

        while let Some(b) = seq.next_element::<u8>()? {
            bytes.push(b);
        }

        Ok(bytes.into())
    }
}

impl<'de> Deserialize<'de> for Hstring {
    fn deserialize<D>(deserializer: D) -> Result<Hstring, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(HstringVisitor)
    }
}
