use serde::{Serialize, Serializer, ser::SerializeSeq};

use super::{HeaderMap, Hstring};

impl Serialize for HeaderMap {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.fields.len()))?;

        for item in &self.fields {
            seq.serialize_element(item)?;
        }
        seq.end()
    }
}

impl Serialize for Hstring {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Hstring::Text(text) => serializer.serialize_str(text),
            Hstring::Opaque(bytes) => serializer.serialize_bytes(bytes),
        }
    }
}
