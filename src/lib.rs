//! Define fieldless enums together with their spellings from a single list.
//!
//! The [`define_named_enum!`] macro takes one ordered list of identifiers and expands it into
//! the enum type, a name table indexed by ordinal, conversions in both directions, and a
//! [`Display`](std::fmt::Display) impl that writes the spelling.
//!
//! # Example
//!
//! ```
//! use spelled_enum::define_named_enum;
//!
//! define_named_enum! {
//!     /// Primary colours.
//!     pub enum Colour { red, green, blue }
//! }
//!
//! assert_eq!(Colour::TOTAL, 3);
//! assert_eq!(Colour::NAMES, ["red", "green", "blue"]);
//! assert_eq!(Colour::green.as_str(), "green");
//! assert_eq!(Colour::from_name("blue"), Some(Colour::blue));
//! assert_eq!(Colour::from_name("purple"), None);
//! assert_eq!(format!("{}", Colour::red), "red");
//! ```
//!
//! # Optional features
//!
//! * **`serde`** *(enabled by default)*: generated enums and [`EnumString`] serialize as their
//!   spelling.
#![cfg_attr(docsrs, feature(doc_cfg))]

macro_rules! cfg_feature {
    (
        #![feature = $name:literal]
        $($item:item)*
    ) => {
        $(
            #[cfg(feature = $name)]
            #[cfg_attr(docsrs, doc(cfg(feature = $name)))]
            $item
        )*
    }
}

pub(crate) use cfg_feature;

pub mod enumeration;
pub mod error;
pub mod table;

cfg_feature! {
    #![feature = "serde"]
    #[doc(hidden)]
    pub mod serde_impl;
}

pub use crate::enumeration::{EnumString, NamedEnum, VariantIter};
pub use crate::error::{Error, OrdinalOutOfRangeError, Result, UnknownSpellingError};

#[doc(hidden)]
pub mod __private {
    pub use paste::paste;

    #[cfg(feature = "serde")]
    pub use serde;
}
