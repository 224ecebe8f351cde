mod define;
mod string;

pub use self::string::EnumString;

use crate::error::UnknownSpellingError;
use crate::table;
use std::fmt;
use std::hash::Hash;

/// Iterator over every variant of a [`NamedEnum`], in declaration order.
pub type VariantIter<T> = std::iter::Copied<std::slice::Iter<'static, T>>;

// Either a known variant or the raw representation it was read from.
#[derive(Debug, Clone)]
pub(crate) enum Enum<T, Repr> {
    Known(T),
    Unknown(Repr),
}

/// Trait implemented by every enum generated with [`define_named_enum!`](crate::define_named_enum).
///
/// Generated types also expose the same items as inherent `const` items and functions. This
/// trait exists for code that is generic over the enum type.
///
/// # Example
///
/// ```
/// use spelled_enum::{define_named_enum, NamedEnum};
///
/// define_named_enum! {
///     pub enum Colour { red, green, blue }
/// }
///
/// fn spellings<T: NamedEnum>() -> Vec<&'static str> {
///     T::iter().map(T::as_str).collect()
/// }
///
/// assert_eq!(spellings::<Colour>(), ["red", "green", "blue"]);
/// ```
pub trait NamedEnum: Copy + Eq + Ord + Hash + fmt::Debug + fmt::Display + 'static {
    /// Name of the generated type, used in error messages.
    const TYPE_NAME: &'static str;

    /// Spelling of every variant, indexed by ordinal.
    const NAMES: &'static [&'static str];

    /// Every variant, indexed by ordinal.
    const VARIANTS: &'static [Self];

    /// Number of variants.
    const TOTAL: usize = Self::VARIANTS.len();

    /// Zero-based position of this variant in its declaration.
    fn ordinal(self) -> usize;

    /// Returns the spelling of this variant.
    fn as_str(self) -> &'static str {
        Self::NAMES[self.ordinal()]
    }

    /// Finds the first variant whose spelling is exactly `name`.
    fn from_name(name: &str) -> Option<Self> {
        table::lookup(Self::NAMES, name).map(|index| Self::VARIANTS[index])
    }

    /// Like [`from_name`](Self::from_name), but returns an error carrying the rejected input.
    fn parse_name(name: &str) -> Result<Self, UnknownSpellingError> {
        Self::from_name(name).ok_or_else(|| {
            tracing::trace!(type_name = Self::TYPE_NAME, input = name, "unknown spelling");
            UnknownSpellingError::new(Self::TYPE_NAME, name)
        })
    }

    /// Returns the variant at `ordinal`, if there is one.
    fn from_ordinal(ordinal: usize) -> Option<Self> {
        Self::VARIANTS.get(ordinal).copied()
    }

    /// Iterates over every variant in declaration order.
    fn iter() -> VariantIter<Self> {
        Self::VARIANTS.iter().copied()
    }
}
