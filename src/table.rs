//! Const helpers over a name table (a slice of spellings indexed by ordinal).

/// Returns the index of the first entry equal to `name`.
///
/// The scan runs from index 0 upward, so when a table holds the same spelling twice only the
/// earlier index is ever returned. Comparison is exact and case-sensitive.
///
/// ```
/// use spelled_enum::table::lookup;
///
/// const NAMES: [&str; 3] = ["red", "red", "blue"];
///
/// assert_eq!(lookup(&NAMES, "red"), Some(0));
/// assert_eq!(lookup(&NAMES, "blue"), Some(2));
/// assert_eq!(lookup(&NAMES, "Blue"), None);
/// ```
pub const fn lookup(names: &[&str], name: &str) -> Option<usize> {
    let mut index = 0;

    while index < names.len() {
        if str_eq(names[index], name) {
            return Some(index);
        }
        index += 1;
    }

    None
}

/// Returns the first pair of indices `(earlier, later)` that share a spelling.
///
/// Generated enums do not reject repeated spellings on their own. This can be used in a const
/// assertion when a table must be unique:
///
/// ```
/// use spelled_enum::{define_named_enum, table::find_duplicate};
///
/// define_named_enum! {
///     pub enum Colour { red, green, blue }
/// }
///
/// const _: () = assert!(find_duplicate(&Colour::NAMES).is_none());
/// ```
pub const fn find_duplicate(names: &[&str]) -> Option<(usize, usize)> {
    let mut earlier = 0;

    while earlier < names.len() {
        let mut later = earlier + 1;

        while later < names.len() {
            if str_eq(names[earlier], names[later]) {
                return Some((earlier, later));
            }
            later += 1;
        }

        earlier += 1;
    }

    None
}

const fn str_eq(a: &str, b: &str) -> bool {
    let (a, b) = (a.as_bytes(), b.as_bytes());

    if a.len() != b.len() {
        return false;
    }

    let mut i = 0;
    while i < a.len() {
        if a[i] != b[i] {
            return false;
        }
        i += 1;
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;

    const NAMES: [&str; 4] = ["red", "green", "blue", "green"];

    #[test]
    fn lookup_first_match() {
        assert_eq!(lookup(&NAMES, "red"), Some(0));
        assert_eq!(lookup(&NAMES, "green"), Some(1));
        assert_eq!(lookup(&NAMES, "blue"), Some(2));
    }

    #[test]
    fn lookup_is_exact() {
        assert_eq!(lookup(&NAMES, "Red"), None);
        assert_eq!(lookup(&NAMES, "re"), None);
        assert_eq!(lookup(&NAMES, "redd"), None);
        assert_eq!(lookup(&NAMES, " red"), None);
        assert_eq!(lookup(&NAMES, ""), None);
        assert_eq!(lookup(&[], "red"), None);
    }

    #[test]
    fn lookup_in_const_context() {
        const BLUE: Option<usize> = lookup(&NAMES, "blue");
        assert_eq!(BLUE, Some(2));
    }

    #[test]
    fn duplicates() {
        assert_eq!(find_duplicate(&NAMES), Some((1, 3)));
        assert_eq!(find_duplicate(&["a", "b", "c"]), None);
        assert_eq!(find_duplicate(&["a", "a", "a"]), Some((0, 1)));
        assert_eq!(find_duplicate(&[]), None);
    }
}
