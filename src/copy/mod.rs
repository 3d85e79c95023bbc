//! Built-in site copy.
//!
//! The English strings are the source of truth for the marketing site. They are compiled in
//! rather than loaded from disk.

mod en;

use crate::dictionary::Dictionary;
use crate::error::DictionaryError;

/// Dictionary holding the English site copy.
///
/// # Errors
/// Only if the compiled-in document is not a mapping.
///
/// # Examples
/// ```
/// let copy = copy_dict::copy::english()?;
///
/// assert_eq!(copy.t("site.title"), "Good Morning Technology");
/// assert_eq!(copy.t("forms.emailLabel"), "Email address");
/// # Ok::<(), copy_dict::DictionaryError>(())
/// ```
pub fn english() -> Result<Dictionary, DictionaryError> {
    Dictionary::from_json(en::document())
}
