use crate::enumeration::{Enum, NamedEnum};
use crate::error::UnknownSpellingError;
use std::borrow::Cow;
use std::fmt;

type EnumStringInner<T> = Enum<T, Cow<'static, str>>;

/// Wrapper around a [`NamedEnum`] that also keeps spellings this build does not know about.
///
/// This is for text that may legitimately contain newer or foreign values (e.g., a config file
/// written by a later version). Known spellings resolve to their variant, and anything else is
/// kept as-is instead of being rejected.
///
/// # Example
///
/// ```
/// use spelled_enum::{define_named_enum, EnumString};
///
/// define_named_enum! {
///     pub enum Colour { red, green, blue }
/// }
///
/// // Multiple representations of the same value
/// let from_enum = EnumString::new(Colour::green);
/// let from_str = EnumString::<Colour>::new_from_str("green");
///
/// // Can be compared to the inner enum type and other `EnumString`s
/// assert_eq!(from_enum, Colour::green);
/// assert_eq!(from_str, Colour::green);
/// assert_eq!(from_enum, from_str);
///
/// // Unknown spellings are retained
/// let other = EnumString::<Colour>::new_from_str("purple");
/// assert_eq!(other.known(), None);
/// assert_eq!(other.as_str(), "purple");
/// ```
#[derive(Debug, Clone)]
pub struct EnumString<T>(EnumStringInner<T>);

impl<T> EnumString<T> {
    /// Creates a new value from a known variant.
    pub const fn new(variant: T) -> Self {
        Self(Enum::Known(variant))
    }
}

impl<T: NamedEnum> EnumString<T> {
    /// Creates a new value from a raw string, resolving it if it is a known spelling.
    pub fn new_from_str<S>(value: S) -> Self
    where
        S: Into<Cow<'static, str>>,
    {
        let value = value.into();

        match T::from_name(&value) {
            Some(variant) => Self::new(variant),
            None => {
                tracing::debug!(
                    type_name = T::TYPE_NAME,
                    input = %value,
                    "retaining unknown spelling"
                );
                Self(Enum::Unknown(value))
            }
        }
    }

    /// Returns the string representation.
    pub fn as_str(&self) -> &str {
        match &self.0 {
            Enum::Known(variant) => variant.as_str(),
            Enum::Unknown(value) => value.as_ref(),
        }
    }

    /// Returns the variant, if the spelling was known.
    pub fn known(&self) -> Option<T> {
        match self.0 {
            Enum::Known(variant) => Some(variant),
            Enum::Unknown(_) => None,
        }
    }

    /// Whether the spelling resolved to a variant.
    pub fn is_known(&self) -> bool {
        matches!(self.0, Enum::Known(_))
    }

    /// Converts into the variant, or an error carrying the unknown spelling.
    pub fn into_result(self) -> Result<T, UnknownSpellingError> {
        match self.0 {
            Enum::Known(variant) => Ok(variant),
            Enum::Unknown(value) => Err(UnknownSpellingError::new(T::TYPE_NAME, value)),
        }
    }
}

impl<T: NamedEnum> Default for EnumString<T>
where
    T: Default,
{
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: NamedEnum> From<T> for EnumString<T> {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl<T: NamedEnum> From<&'static str> for EnumString<T> {
    fn from(value: &'static str) -> Self {
        Self::new_from_str(value)
    }
}

impl<T: NamedEnum> From<String> for EnumString<T> {
    fn from(value: String) -> Self {
        Self::new_from_str(value)
    }
}

// `new_from_str` resolves every known spelling, so an `Unknown` never matches a `Known`.
impl<T: NamedEnum> PartialEq for EnumString<T> {
    fn eq(&self, rhs: &Self) -> bool {
        use Enum::{Known, Unknown};

        match (&self.0, &rhs.0) {
            (Known(a), Known(b)) => a == b,
            (Unknown(a), Unknown(b)) => a == b,
            _ => false,
        }
    }
}

impl<T: NamedEnum> Eq for EnumString<T> {}

impl<T: NamedEnum> PartialEq<T> for EnumString<T> {
    fn eq(&self, rhs: &T) -> bool {
        matches!(self.0, Enum::Known(ref value) if value == rhs)
    }
}

impl<T: NamedEnum> PartialEq<str> for EnumString<T> {
    fn eq(&self, rhs: &str) -> bool {
        self.as_str() == rhs
    }
}

impl<T: NamedEnum> PartialEq<&str> for EnumString<T> {
    fn eq(&self, rhs: &&str) -> bool {
        self.as_str() == *rhs
    }
}

impl<T: NamedEnum> fmt::Display for EnumString<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

crate::cfg_feature! {
    #![feature = "serde"]

    impl<T: NamedEnum> serde::Serialize for EnumString<T> {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: serde::Serializer,
        {
            serializer.serialize_str(self.as_str())
        }
    }

    impl<'de, T: NamedEnum> serde::Deserialize<'de> for EnumString<T> {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: serde::Deserializer<'de>,
        {
            let value = <String as serde::Deserialize>::deserialize(deserializer)?;
            Ok(Self::new_from_str(value))
        }
    }
}
