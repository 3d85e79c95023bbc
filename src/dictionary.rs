//! Caller-facing lookup API.
//!
//! A [`Dictionary`] is built once at startup and shared by reference (or `Arc`) with every
//! consumer. It is never mutated afterwards, so concurrent readers need no locking.

use std::borrow::Cow;
use std::str::FromStr;

use serde_json::Value;

use crate::config::{
    ConfigError,
    DictionarySettings,
    MissingKeyLog,
};
use crate::entry::{
    self,
    Entry,
    EntryMap,
};
use crate::error::DictionaryError;
use crate::interpolate::{
    Vars,
    interpolate,
};
use crate::resolver::{
    self,
    Miss,
    Resolution,
};

/// Immutable string dictionary addressed by dotted paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dictionary {
    /// Root mapping.
    root: EntryMap,
    /// Validated settings.
    settings: DictionarySettings,
}

impl Dictionary {
    /// Wraps `root`, which must be a mapping.
    ///
    /// # Errors
    /// [`DictionaryError::RootNotMapping`] if `root` is a leaf.
    pub fn new(root: Entry) -> Result<Self, DictionaryError> {
        match root {
            Entry::Node(map) => Ok(Self::from_map(map)),
            Entry::Leaf(_) => Err(DictionaryError::RootNotMapping { found: "string" }),
        }
    }

    #[must_use]
    pub fn from_map(root: EntryMap) -> Self {
        let dictionary = Self { root, settings: DictionarySettings::default() };
        tracing::trace!(leaves = dictionary.len(), "Dictionary constructed");
        dictionary
    }

    /// Builds a dictionary from a JSON document whose root is an object.
    ///
    /// See [`Entry::from_json`] for how non-string values are converted.
    ///
    /// # Errors
    /// [`DictionaryError::RootNotMapping`] if the document is not an object.
    pub fn from_json(value: Value) -> Result<Self, DictionaryError> {
        if !value.is_object() {
            return Err(DictionaryError::RootNotMapping { found: entry::json_kind(&value) });
        }
        match Entry::from_json(value) {
            Some(root) => Self::new(root),
            None => Err(DictionaryError::RootNotMapping { found: "null" }),
        }
    }

    /// Parses JSON text, then behaves like [`Dictionary::from_json`].
    ///
    /// # Errors
    /// [`DictionaryError::Parse`] on malformed JSON, or
    /// [`DictionaryError::RootNotMapping`] if the document is not an object.
    pub fn from_json_str(text: &str) -> Result<Self, DictionaryError> {
        let value: Value = serde_json::from_str(text)?;
        Self::from_json(value)
    }

    /// Replaces the settings after validating them.
    ///
    /// # Errors
    /// [`DictionaryError::Config`] if the settings fail validation.
    pub fn with_settings(mut self, settings: DictionarySettings) -> Result<Self, DictionaryError> {
        settings.validate().map_err(ConfigError::ValidationErrors)?;
        self.settings = settings;
        Ok(self)
    }

    #[must_use]
    pub const fn settings(&self) -> &DictionarySettings {
        &self.settings
    }

    #[must_use]
    pub const fn root(&self) -> &EntryMap {
        &self.root
    }

    /// Raw resolution result for `path`.
    #[must_use]
    pub fn resolve(&self, path: &str) -> Resolution<'_> {
        resolver::resolve(&self.root, path, &self.settings.key_separator)
    }

    /// Leaf string at `path`, without interpolation.
    #[must_use]
    pub fn get(&self, path: &str) -> Option<&str> {
        self.resolve(path).found()
    }

    /// Whether `path` resolves to a leaf string. Interior mappings do not count.
    #[must_use]
    pub fn has(&self, path: &str) -> bool {
        self.resolve(path).is_found()
    }

    /// Looks up `path` without variables.
    ///
    /// Returns `path` itself when it does not resolve, so missing copy shows up in the
    /// rendered output instead of blanking it. Placeholders in the leaf are left verbatim.
    #[must_use]
    pub fn t<'a>(&'a self, path: &'a str) -> Cow<'a, str> {
        self.translate(path, None)
    }

    /// Looks up `path` and substitutes `{name}` placeholders from `vars`.
    ///
    /// Unknown placeholders stay as written; substituted values are not expanded again.
    ///
    /// # Examples
    /// ```
    /// use copy_dict::{Dictionary, Vars};
    /// use serde_json::json;
    ///
    /// let dict = Dictionary::from_json(json!({ "hero": { "greeting": "Hello {name}" } }))?;
    ///
    /// assert_eq!(dict.t_with("hero.greeting", &Vars::new().with("name", "Kaleb")), "Hello Kaleb");
    /// assert_eq!(dict.t_with("hero.greeting", &Vars::new()), "Hello {name}");
    /// assert_eq!(dict.t_with("hero", &Vars::new()), "hero");
    /// # Ok::<(), copy_dict::DictionaryError>(())
    /// ```
    #[must_use]
    pub fn t_with<'a>(&'a self, path: &'a str, vars: &Vars) -> Cow<'a, str> {
        self.translate(path, Some(vars))
    }

    /// Shared body of [`Dictionary::t`] and [`Dictionary::t_with`].
    fn translate<'a>(&'a self, path: &'a str, vars: Option<&Vars>) -> Cow<'a, str> {
        match self.resolve(path) {
            Resolution::Found(template) => interpolate(template, vars),
            Resolution::NotFound(miss) => {
                self.report_miss(path, miss);
                Cow::Borrowed(path)
            }
        }
    }

    /// Logs a lookup miss at the configured level.
    fn report_miss(&self, path: &str, miss: Miss) {
        match self.settings.missing_keys {
            MissingKeyLog::Off => {}
            MissingKeyLog::Debug => tracing::debug!(path, ?miss, "Missing translation key"),
            MissingKeyLog::Warn => tracing::warn!(path, ?miss, "Missing translation key"),
        }
    }

    /// Every leaf path that [`Dictionary::t`] can resolve, joined with the key separator, in
    /// depth-first key order. Leaves under keys that are empty or contain the separator are
    /// left out.
    #[must_use]
    pub fn keys(&self) -> Vec<String> {
        entry::leaf_paths(&self.root, &self.settings.key_separator)
    }

    /// Number of addressable leaf strings; always `self.keys().len()`.
    #[must_use]
    pub fn len(&self) -> usize {
        entry::addressable_leaf_count(&self.root, &self.settings.key_separator)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl TryFrom<Entry> for Dictionary {
    type Error = DictionaryError;

    fn try_from(root: Entry) -> Result<Self, Self::Error> {
        Self::new(root)
    }
}

impl TryFrom<Value> for Dictionary {
    type Error = DictionaryError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Self::from_json(value)
    }
}

impl FromStr for Dictionary {
    type Err = DictionaryError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        Self::from_json_str(text)
    }
}

/// Looks up a path with named placeholder values.
///
/// `t!(dict, "path")` is `dict.t("path")`; `t!(dict, "path", name = value, ...)` builds a
/// [`Vars`] from the named arguments and calls [`Dictionary::t_with`].
///
/// # Examples
/// ```
/// use copy_dict::{Dictionary, t};
/// use serde_json::json;
///
/// let dict = Dictionary::from_json(json!({ "cart": "{count} items for {name}" }))?;
///
/// assert_eq!(t!(dict, "cart", count = 3, name = "Kaleb"), "3 items for Kaleb");
/// assert_eq!(t!(dict, "cart"), "{count} items for {name}");
/// # Ok::<(), copy_dict::DictionaryError>(())
/// ```
#[macro_export]
macro_rules! t {
    ($dict:expr, $path:expr $(,)?) => {
        $dict.t($path)
    };
    ($dict:expr, $path:expr, $($name:ident = $value:expr),+ $(,)?) => {
        $dict.t_with($path, &$crate::Vars::new()$(.with(stringify!($name), $value))+)
    };
}
