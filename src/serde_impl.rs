//! Serde glue called from the impls generated by `define_named_enum!`.

use crate::enumeration::NamedEnum;
use serde::de::{self, Visitor};
use serde::{Deserializer, Serializer};
use std::fmt;
use std::marker::PhantomData;

pub fn serialize<T, S>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
where
    T: NamedEnum,
    S: Serializer,
{
    serializer.serialize_str(value.as_str())
}

pub fn deserialize<'de, T, D>(deserializer: D) -> Result<T, D::Error>
where
    T: NamedEnum,
    D: Deserializer<'de>,
{
    deserializer.deserialize_str(SpellingVisitor(PhantomData))
}

struct SpellingVisitor<T>(PhantomData<T>);

impl<'de, T: NamedEnum> Visitor<'de> for SpellingVisitor<T> {
    type Value = T;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a {} spelling", T::TYPE_NAME)
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<T, E> {
        T::from_name(value).ok_or_else(|| E::unknown_variant(value, T::NAMES))
    }

    fn visit_bytes<E: de::Error>(self, value: &[u8]) -> Result<T, E> {
        match std::str::from_utf8(value) {
            Ok(value) => self.visit_str(value),
            Err(_) => Err(E::invalid_value(de::Unexpected::Bytes(value), &self)),
        }
    }
}
