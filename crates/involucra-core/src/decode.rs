//! Case-insensitive JSON payload decoding
//!
//! Clients serialize payloads with whatever casing their stack prefers
//! (camelCase, PascalCase, lower-case); recovered plaintext must still
//! decode into the caller's types. Object keys are therefore matched
//! against the field names the target type declares, ignoring ASCII case,
//! recursively through nested objects and arrays.

use serde::de::{
    DeserializeOwned, DeserializeSeed, Deserializer, IntoDeserializer, MapAccess, SeqAccess,
    Visitor,
};
use serde_json::{Map, Value};

/// Decode a JSON byte payload into `T` with case-insensitive field matching
pub fn from_slice<T: DeserializeOwned>(bytes: &[u8]) -> serde_json::Result<T> {
    let value: Value = serde_json::from_slice(bytes)?;
    T::deserialize(CaseFolding(value))
}

/// Deserializer adapter renaming object keys to the declared struct fields
///
/// Only `deserialize_struct` knows the expected field names; everything else
/// defers to the underlying value while keeping nested values wrapped so the
/// renaming applies at every depth.
struct CaseFolding(Value);

impl<'de> Deserializer<'de> for CaseFolding {
    type Error = serde_json::Error;

    fn deserialize_any<V>(self, visitor: V) -> Result<V::Value, Self::Error>
    where
        V: Visitor<'de>,
    {
        match self.0 {
            Value::Object(map) => visitor.visit_map(FoldedMap::new(map, &[])),
            Value::Array(elements) => visitor.visit_seq(FoldedSeq::new(elements)),
            other => other.deserialize_any(visitor),
        }
    }

    fn deserialize_struct<V>(
        self,
        _name: &'static str,
        fields: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value, Self::Error>
    where
        V: Visitor<'de>,
    {
        match self.0 {
            Value::Object(map) => visitor.visit_map(FoldedMap::new(map, fields)),
            other => other.deserialize_any(visitor),
        }
    }

    fn deserialize_option<V>(self, visitor: V) -> Result<V::Value, Self::Error>
    where
        V: Visitor<'de>,
    {
        if self.0.is_null() {
            visitor.visit_none()
        } else {
            visitor.visit_some(self)
        }
    }

    fn deserialize_newtype_struct<V>(
        self,
        _name: &'static str,
        visitor: V,
    ) -> Result<V::Value, Self::Error>
    where
        V: Visitor<'de>,
    {
        visitor.visit_newtype_struct(self)
    }

    fn deserialize_enum<V>(
        self,
        name: &'static str,
        variants: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value, Self::Error>
    where
        V: Visitor<'de>,
    {
        self.0.deserialize_enum(name, variants, visitor)
    }

    serde::forward_to_deserialize_any! {
        bool i8 i16 i32 i64 i128 u8 u16 u32 u64 u128 f32 f64 char str string
        bytes byte_buf unit unit_struct seq tuple tuple_struct map identifier
        ignored_any
    }
}

struct FoldedMap {
    entries: std::vec::IntoIter<(String, Value)>,
    value: Option<Value>,
}

impl FoldedMap {
    fn new(map: Map<String, Value>, fields: &'static [&'static str]) -> Self {
        let entries: Vec<(String, Value)> = map
            .into_iter()
            .map(|(key, value)| {
                match fields.iter().find(|field| field.eq_ignore_ascii_case(&key)) {
                    Some(field) => ((*field).to_owned(), value),
                    None => (key, value),
                }
            })
            .collect();
        Self {
            entries: entries.into_iter(),
            value: None,
        }
    }
}

impl<'de> MapAccess<'de> for FoldedMap {
    type Error = serde_json::Error;

    fn next_key_seed<K>(&mut self, seed: K) -> Result<Option<K::Value>, Self::Error>
    where
        K: DeserializeSeed<'de>,
    {
        match self.entries.next() {
            Some((key, value)) => {
                self.value = Some(value);
                seed.deserialize(key.into_deserializer()).map(Some)
            }
            None => Ok(None),
        }
    }

    fn next_value_seed<S>(&mut self, seed: S) -> Result<S::Value, Self::Error>
    where
        S: DeserializeSeed<'de>,
    {
        let value = self.value.take().unwrap_or(Value::Null);
        seed.deserialize(CaseFolding(value))
    }

    fn size_hint(&self) -> Option<usize> {
        Some(self.entries.len())
    }
}

struct FoldedSeq {
    elements: std::vec::IntoIter<Value>,
}

impl FoldedSeq {
    fn new(elements: Vec<Value>) -> Self {
        Self {
            elements: elements.into_iter(),
        }
    }
}

impl<'de> SeqAccess<'de> for FoldedSeq {
    type Error = serde_json::Error;

    fn next_element_seed<S>(&mut self, seed: S) -> Result<Option<S::Value>, Self::Error>
    where
        S: DeserializeSeed<'de>,
    {
        match self.elements.next() {
            Some(value) => seed.deserialize(CaseFolding(value)).map(Some),
            None => Ok(None),
        }
    }

    fn size_hint(&self) -> Option<usize> {
        Some(self.elements.len())
    }
}
