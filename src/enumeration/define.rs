/// Defines a fieldless enum together with its name table and conversions.
///
/// The variant list is written once. From it the macro generates:
///
/// * the enum itself (deriving `Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash`),
///   with variant `i` having ordinal `i`
/// * `TOTAL`, the number of variants
/// * `NAMES`, the spelling of every variant indexed by ordinal, and `VARIANTS`, every variant
///   indexed by ordinal
/// * `const fn`s `ordinal`, `as_str`, `from_name` and `from_ordinal`, plus `iter`
/// * [`Display`](std::fmt::Display) (writes the spelling), [`FromStr`](std::str::FromStr),
///   `TryFrom<&str>`, `TryFrom<usize>`, `From<Enum> for usize`, `From<Enum> for &'static str`,
///   `AsRef<str>` and [`NamedEnum`](crate::NamedEnum)
/// * `Serialize`/`Deserialize` as the spelling, when the `serde` feature is enabled
///
/// Lookups by spelling are exact and case-sensitive. If two variants share a spelling (see
/// below), `from_name` returns the earlier one.
///
/// # Example
///
/// ```
/// use spelled_enum::define_named_enum;
///
/// define_named_enum! {
///     /// Primary colours.
///     pub enum Colour { red, green, blue }
/// }
///
/// assert_eq!(Colour::TOTAL, 3);
/// assert_eq!(Colour::blue.ordinal(), 2);
/// assert_eq!(Colour::green.as_str(), "green");
/// assert_eq!(Colour::from_name("blue"), Some(Colour::blue));
/// assert_eq!(Colour::from_name("purple"), None);
/// assert!("purple".parse::<Colour>().is_err());
/// ```
///
/// # Spellings
///
/// By default a variant is spelled exactly like its identifier. A leading
/// `#![spelling = <case>]` derives the spelling from the identifier instead, where `<case>` is
/// one of `verbatim`, `lower`, `upper` or `snake`. A single variant can be given its own
/// spelling with `Variant as spelling`, which takes precedence over the case.
///
/// ```
/// use spelled_enum::define_named_enum;
///
/// define_named_enum! {
///     #![spelling = snake]
///     pub enum LogLevel {
///         Debug,
///         Info,
///         WarnOnce,
///         Error as err,
///     }
/// }
///
/// assert_eq!(LogLevel::NAMES, ["debug", "info", "warn_once", "err"]);
/// assert_eq!(LogLevel::WarnOnce.to_string(), "warn_once");
/// ```
#[macro_export]
macro_rules! define_named_enum {
    (@enum $case:ident;
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident $(as $spelling:ident)?
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[allow(non_camel_case_types)]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant,
            )+
        }

        impl $name {
            /// Number of variants.
            pub const TOTAL: usize = [$(stringify!($variant)),+].len();

            /// Every variant, indexed by ordinal.
            pub const VARIANTS: [Self; $name::TOTAL] = [$(Self::$variant),+];

            /// Spelling of every variant, indexed by ordinal.
            pub const NAMES: [&'static str; $name::TOTAL] = [
                $($crate::define_named_enum!(@spelling $case $variant $($spelling)?)),+
            ];

            /// Zero-based position of this variant in its declaration.
            pub const fn ordinal(self) -> usize {
                self as usize
            }

            /// Returns the spelling of this variant.
            pub const fn as_str(self) -> &'static str {
                Self::NAMES[self as usize]
            }

            /// Finds the first variant whose spelling is exactly `name`.
            pub const fn from_name(name: &str) -> ::core::option::Option<Self> {
                match $crate::table::lookup(&Self::NAMES, name) {
                    ::core::option::Option::Some(index) => {
                        ::core::option::Option::Some(Self::VARIANTS[index])
                    }
                    ::core::option::Option::None => ::core::option::Option::None,
                }
            }

            /// Returns the variant at `ordinal`, if there is one.
            pub const fn from_ordinal(ordinal: usize) -> ::core::option::Option<Self> {
                if ordinal < Self::TOTAL {
                    ::core::option::Option::Some(Self::VARIANTS[ordinal])
                } else {
                    ::core::option::Option::None
                }
            }

            /// Iterates over every variant in declaration order.
            pub fn iter() -> $crate::VariantIter<Self> {
                let variants: &'static [Self] = &Self::VARIANTS;
                variants.iter().copied()
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::core::str::FromStr for $name {
            type Err = $crate::UnknownSpellingError;

            fn from_str(s: &str) -> ::core::result::Result<Self, Self::Err> {
                <Self as $crate::NamedEnum>::parse_name(s)
            }
        }

        impl<'a> ::core::convert::TryFrom<&'a str> for $name {
            type Error = $crate::UnknownSpellingError;

            fn try_from(s: &'a str) -> ::core::result::Result<Self, $crate::UnknownSpellingError> {
                <Self as $crate::NamedEnum>::parse_name(s)
            }
        }

        impl ::core::convert::TryFrom<usize> for $name {
            type Error = $crate::OrdinalOutOfRangeError;

            fn try_from(ordinal: usize) -> ::core::result::Result<Self, $crate::OrdinalOutOfRangeError> {
                Self::from_ordinal(ordinal).ok_or($crate::OrdinalOutOfRangeError {
                    type_name: stringify!($name),
                    ordinal,
                    total: Self::TOTAL,
                })
            }
        }

        impl ::core::convert::From<$name> for usize {
            fn from(value: $name) -> usize {
                value as usize
            }
        }

        impl ::core::convert::From<$name> for &'static str {
            fn from(value: $name) -> &'static str {
                value.as_str()
            }
        }

        impl ::core::convert::AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self.as_str()
            }
        }

        impl $crate::NamedEnum for $name {
            const TYPE_NAME: &'static str = stringify!($name);
            const NAMES: &'static [&'static str] = &$name::NAMES;
            const VARIANTS: &'static [Self] = &$name::VARIANTS;

            fn ordinal(self) -> usize {
                self as usize
            }
        }

        $crate::__impl_serde!($name);
    };

    (@enum $($rest:tt)*) => {
        compile_error!("expected `enum Name { Variant, .. }` with at least one variant");
    };

    (@spelling $case:ident $variant:ident $spelling:ident) => {
        stringify!($spelling)
    };
    (@spelling verbatim $variant:ident) => {
        stringify!($variant)
    };
    (@spelling lower $variant:ident) => {
        $crate::__private::paste!(stringify!([<$variant:lower>]))
    };
    (@spelling upper $variant:ident) => {
        $crate::__private::paste!(stringify!([<$variant:upper>]))
    };
    (@spelling snake $variant:ident) => {
        $crate::__private::paste!(stringify!([<$variant:snake>]))
    };
    (@spelling $case:ident $variant:ident) => {
        compile_error!(concat!(
            "unsupported spelling `",
            stringify!($case),
            "` (expected `verbatim`, `lower`, `upper` or `snake`)"
        ))
    };

    (
        #![spelling = $case:ident]
        $($rest:tt)*
    ) => {
        $crate::define_named_enum!(@enum $case; $($rest)*);
    };

    ($($rest:tt)*) => {
        $crate::define_named_enum!(@enum verbatim; $($rest)*);
    };
}

#[cfg(feature = "serde")]
#[doc(hidden)]
#[macro_export]
macro_rules! __impl_serde {
    ($name:ident) => {
        impl $crate::__private::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> ::core::result::Result<S::Ok, S::Error>
            where
                S: $crate::__private::serde::Serializer,
            {
                $crate::serde_impl::serialize(self, serializer)
            }
        }

        impl<'de> $crate::__private::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> ::core::result::Result<Self, D::Error>
            where
                D: $crate::__private::serde::Deserializer<'de>,
            {
                $crate::serde_impl::deserialize(deserializer)
            }
        }
    };
}

#[cfg(not(feature = "serde"))]
#[doc(hidden)]
#[macro_export]
macro_rules! __impl_serde {
    ($name:ident) => {};
}

#[cfg(test)]
mod tests {
    use crate::error::{OrdinalOutOfRangeError, UnknownSpellingError};
    use crate::NamedEnum;
    use std::convert::TryFrom;
    use std::fmt::Write as _;
    use std::io::Write as _;

    type Result = std::result::Result<(), Box<dyn std::error::Error>>;

    crate::define_named_enum! {
        /// Colours from the demo.
        pub enum Colour { red, green, blue }
    }

    crate::define_named_enum! {
        pub enum Shade {
            Crimson as red,
            Scarlet as red,
            Navy as blue,
        }
    }

    crate::define_named_enum! {
        #![spelling = snake]
        pub(crate) enum LogLevel {
            Debug,
            Info,
            WarnOnce,
            Error as err,
        }
    }

    crate::define_named_enum! {
        #![spelling = upper]
        enum Method { Get, Post, Delete }
    }

    crate::define_named_enum! {
        #![spelling = lower]
        enum Extension { Png, Jpeg }
    }

    crate::define_named_enum! {
        #![spelling = verbatim]
        enum Single { OnlyOne }
    }

    #[test]
    fn colour_scenario() {
        assert_eq!(Colour::red as usize, 0);
        assert_eq!(Colour::green as usize, 1);
        assert_eq!(Colour::blue as usize, 2);

        assert_eq!(Colour::green.as_str(), "green");
        assert_eq!(Colour::from_name("blue"), Some(Colour::blue));
        assert_eq!(Colour::from_name("purple"), None);
    }

    #[test]
    fn count() {
        assert_eq!(Colour::TOTAL, 3);
        assert_eq!(Colour::NAMES.len(), Colour::TOTAL);
        assert_eq!(Colour::VARIANTS.len(), Colour::TOTAL);
        assert_eq!(<Colour as NamedEnum>::TOTAL, 3);
        assert_eq!(Single::TOTAL, 1);
    }

    #[test]
    fn order_is_preserved() {
        assert_eq!(Colour::NAMES, ["red", "green", "blue"]);
        assert_eq!(Colour::VARIANTS, [Colour::red, Colour::green, Colour::blue]);

        for (index, variant) in Colour::iter().enumerate() {
            assert_eq!(variant.ordinal(), index);
            assert_eq!(usize::from(variant), index);
            assert_eq!(variant.as_str(), Colour::NAMES[index]);
        }

        assert!(Colour::red < Colour::green);
        assert!(Colour::green < Colour::blue);
    }

    #[test]
    fn bijection() {
        for variant in Colour::iter() {
            assert_eq!(Colour::from_name(variant.as_str()), Some(variant));
        }

        for name in Colour::NAMES.iter() {
            assert_eq!(Colour::from_name(name).map(Colour::as_str), Some(*name));
        }
    }

    #[test]
    fn lookup_is_exact() {
        assert_eq!(Colour::from_name("Red"), None);
        assert_eq!(Colour::from_name("RED"), None);
        assert_eq!(Colour::from_name("re"), None);
        assert_eq!(Colour::from_name("red "), None);
        assert_eq!(Colour::from_name(""), None);
    }

    #[test]
    fn duplicate_spellings() {
        assert_ne!(Shade::Crimson, Shade::Scarlet);
        assert_eq!(Shade::Crimson.ordinal(), 0);
        assert_eq!(Shade::Scarlet.ordinal(), 1);

        assert_eq!(Shade::Crimson.as_str(), "red");
        assert_eq!(Shade::Scarlet.as_str(), "red");

        assert_eq!(Shade::from_name("red"), Some(Shade::Crimson));
        assert_eq!(Shade::from_name("blue"), Some(Shade::Navy));
        assert_eq!(Shade::from_name("Scarlet"), None);

        assert_eq!(
            crate::table::find_duplicate(&Shade::NAMES),
            Some((0, 1))
        );
        assert_eq!(crate::table::find_duplicate(&Colour::NAMES), None);
    }

    #[test]
    fn spelling_cases() {
        assert_eq!(LogLevel::NAMES, ["debug", "info", "warn_once", "err"]);
        assert_eq!(LogLevel::from_name("warn_once"), Some(LogLevel::WarnOnce));
        assert_eq!(LogLevel::from_name("WarnOnce"), None);
        assert_eq!(LogLevel::from_name("error"), None);

        assert_eq!(Method::NAMES, ["GET", "POST", "DELETE"]);
        assert_eq!(Method::from_name("POST"), Some(Method::Post));

        assert_eq!(Extension::NAMES, ["png", "jpeg"]);
        assert_eq!(Extension::Jpeg.as_str(), "jpeg");

        assert_eq!(Single::OnlyOne.as_str(), "OnlyOne");
    }

    #[test]
    fn from_ordinal() {
        assert_eq!(Colour::from_ordinal(0), Some(Colour::red));
        assert_eq!(Colour::from_ordinal(2), Some(Colour::blue));
        assert_eq!(Colour::from_ordinal(3), None);
        assert_eq!(Colour::from_ordinal(usize::MAX), None);

        assert_eq!(Colour::try_from(1usize), Ok(Colour::green));
        assert_eq!(
            Colour::try_from(Colour::TOTAL),
            Err(OrdinalOutOfRangeError {
                type_name: "Colour",
                ordinal: 3,
                total: 3,
            })
        );
    }

    #[test]
    fn parse() {
        assert_eq!("green".parse::<Colour>(), Ok(Colour::green));
        assert_eq!(Colour::try_from("blue"), Ok(Colour::blue));
        assert_eq!(
            "purple".parse::<Colour>(),
            Err(UnknownSpellingError::new("Colour", "purple"))
        );
        assert_eq!(
            Colour::parse_name("purple"),
            Err(UnknownSpellingError::new("Colour", "purple"))
        );
    }

    #[test]
    fn errors_convert_into_crate_error() {
        fn parse_both(name: &str, ordinal: usize) -> crate::Result<(Colour, Colour)> {
            Ok((name.parse::<Colour>()?, Colour::try_from(ordinal)?))
        }

        assert_eq!(parse_both("red", 2).ok(), Some((Colour::red, Colour::blue)));
        assert!(matches!(
            parse_both("purple", 0),
            Err(crate::Error::UnknownSpelling(_))
        ));
        assert!(matches!(
            parse_both("red", 7),
            Err(crate::Error::OrdinalOutOfRange(_))
        ));
    }

    #[test]
    fn display_writes_spelling_only() -> Result {
        assert_eq!(Colour::green.to_string(), "green");
        assert_eq!(format!("[{}]", Colour::blue), "[blue]");
        assert_eq!(Shade::Scarlet.to_string(), "red");

        let mut text = String::new();
        write!(text, "{}{}", Colour::red, Colour::green)?;
        assert_eq!(text, "redgreen");

        let mut bytes = Vec::new();
        write!(bytes, "colour={}", Colour::blue)?;
        assert_eq!(bytes, b"colour=blue");

        Ok(())
    }

    #[test]
    fn str_conversions() {
        let name: &'static str = Colour::green.into();
        assert_eq!(name, "green");
        assert_eq!(Colour::red.as_ref(), "red");
    }

    #[test]
    fn const_evaluation() {
        const BLUE: Option<Colour> = Colour::from_name("blue");
        const GREEN: &str = Colour::green.as_str();
        const LAST: Option<Colour> = Colour::from_ordinal(Colour::TOTAL - 1);

        assert_eq!(BLUE, Some(Colour::blue));
        assert_eq!(GREEN, "green");
        assert_eq!(LAST, Some(Colour::blue));
    }

    #[test]
    fn generic_over_trait() {
        fn spellings<T: NamedEnum>() -> Vec<&'static str> {
            T::iter().map(T::as_str).collect()
        }

        assert_eq!(spellings::<Colour>(), ["red", "green", "blue"]);
        assert_eq!(spellings::<Shade>(), ["red", "red", "blue"]);
        assert_eq!(<Shade as NamedEnum>::TYPE_NAME, "Shade");
        assert_eq!(<Shade as NamedEnum>::from_name("red"), Some(Shade::Crimson));
    }

    #[test]
    fn shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync + 'static>() {}
        assert_send_sync::<Colour>();

        let handles: Vec<_> = Colour::iter()
            .map(|variant| std::thread::spawn(move || Colour::from_name(variant.as_str())))
            .collect();

        for (handle, variant) in handles.into_iter().zip(Colour::iter()) {
            assert_eq!(handle.join().ok().flatten(), Some(variant));
        }
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde() -> Result {
        use serde_json::json;

        assert_eq!(serde_json::to_value(Colour::green)?, json!("green"));
        assert_eq!(serde_json::to_value(Shade::Scarlet)?, json!("red"));
        assert_eq!(serde_json::to_value(LogLevel::WarnOnce)?, json!("warn_once"));

        assert_eq!(serde_json::from_value::<Colour>(json!("blue"))?, Colour::blue);
        assert_eq!(serde_json::from_value::<Shade>(json!("red"))?, Shade::Crimson);

        let err = serde_json::from_value::<Colour>(json!("purple")).unwrap_err();
        assert!(err.to_string().contains("unknown variant `purple`"));

        assert!(serde_json::from_value::<Colour>(json!(1)).is_err());

        Ok(())
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_in_struct() -> Result {
        use serde::{Deserialize, Serialize};
        use serde_json::json;

        #[derive(Debug, PartialEq, Serialize, Deserialize)]
        struct Palette {
            primary: Colour,
            levels: Vec<LogLevel>,
        }

        let palette = Palette {
            primary: Colour::red,
            levels: vec![LogLevel::Info, LogLevel::Error],
        };

        let value = json!({ "primary": "red", "levels": ["info", "err"] });

        assert_eq!(serde_json::to_value(&palette)?, value);
        assert_eq!(serde_json::from_value::<Palette>(value)?, palette);

        Ok(())
    }
}
