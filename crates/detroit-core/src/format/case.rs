//! ASCII-only uppercasing

use heapless::String;

use crate::error::{Error, Result};

/// Uppercase ASCII letters in place, leaving every other byte untouched.
pub fn uppercase_in_place(text: &mut str) {
    text.make_ascii_uppercase();
}

/// Copy `text` into a buffer of capacity `N` with ASCII letters uppercased.
///
/// Digits, line breaks and non-ASCII characters pass through unchanged.
pub fn to_uppercase<const N: usize>(text: &str) -> Result<String<N>> {
    let mut out: String<N> = String::new();
    out.push_str(text)
        .map_err(|_| Error::Capacity { capacity: N })?;
    uppercase_in_place(out.as_mut_str());
    Ok(out)
}
