//! Errors returned by the fallible conversions.

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Any error produced by converting into a generated enum.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// The input text is not in the name table.
    #[error(transparent)]
    UnknownSpelling(#[from] UnknownSpellingError),
    /// The ordinal is not below the number of variants.
    #[error(transparent)]
    OrdinalOutOfRange(#[from] OrdinalOutOfRangeError),
}

/// Returned when parsing text that matches no spelling of the target enum.
///
/// # Example
///
/// ```
/// # use spelled_enum::define_named_enum;
/// define_named_enum! {
///     pub enum Colour { red, green, blue }
/// }
///
/// let err = "purple".parse::<Colour>().unwrap_err();
/// assert_eq!(err.type_name, "Colour");
/// assert_eq!(err.input, "purple");
/// assert_eq!(err.to_string(), r#"unknown Colour spelling "purple""#);
/// ```
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown {type_name} spelling {input:?}")]
pub struct UnknownSpellingError {
    pub type_name: &'static str,
    pub input: String,
}

impl UnknownSpellingError {
    pub fn new<S: Into<String>>(type_name: &'static str, input: S) -> Self {
        Self {
            type_name,
            input: input.into(),
        }
    }
}

/// Returned when converting an integer that is not a valid ordinal of the target enum.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("ordinal {ordinal} is out of range for {type_name} (expected less than {total})")]
pub struct OrdinalOutOfRangeError {
    pub type_name: &'static str,
    pub ordinal: usize,
    pub total: usize,
}
