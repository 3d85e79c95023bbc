//! copy-dict
//!
//! Nested localization dictionary: dotted-path lookup with `{name}` placeholder interpolation.
//!
//! ```
//! use copy_dict::{Dictionary, Vars};
//! use serde_json::json;
//!
//! let dict = Dictionary::from_json(json!({
//!     "site": { "title": "Good Morning Technology" },
//!     "greeting": "Hello {name}"
//! }))?;
//!
//! assert_eq!(dict.t("site.title"), "Good Morning Technology");
//! assert_eq!(dict.t_with("greeting", &Vars::new().with("name", "Kaleb")), "Hello Kaleb");
//! assert_eq!(dict.t("site.subtitle"), "site.subtitle");
//! assert!(!dict.has("site"));
//! # Ok::<(), copy_dict::DictionaryError>(())
//! ```

pub mod config;
pub mod copy;
pub mod dictionary;
pub mod entry;
pub mod error;
pub mod interpolate;
pub mod path;
pub mod resolver;

pub use dictionary::Dictionary;
pub use entry::{
    Entry,
    EntryMap,
};
pub use error::DictionaryError;
pub use interpolate::Vars;
pub use resolver::{
    Miss,
    Resolution,
};
