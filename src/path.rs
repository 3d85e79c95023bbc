//! Dotted path parsing.

use std::str::Split;

/// Default separator between path segments.
pub const DEFAULT_SEPARATOR: &str = ".";

/// A validated, borrowed dictionary path such as `company.socials.twitter`.
///
/// Every segment is non-empty. Paths are built per lookup and never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Path<'a> {
    /// Original path text.
    raw: &'a str,
    /// Separator the segments are split on.
    separator: &'a str,
}

impl<'a> Path<'a> {
    /// Parses `raw` into a path, or `None` if it is empty or has an empty segment
    /// (`""`, `"."`, `"a..b"`, `".a"`, `"a."`).
    ///
    /// # Examples
    /// ```
    /// use copy_dict::path::Path;
    ///
    /// let path = Path::parse("site.title", ".").map(|p| p.segments().collect::<Vec<_>>());
    /// assert_eq!(path, Some(vec!["site", "title"]));
    /// assert!(Path::parse("site..title", ".").is_none());
    /// ```
    #[must_use]
    pub fn parse(raw: &'a str, separator: &'a str) -> Option<Self> {
        if raw.is_empty() || separator.is_empty() {
            return None;
        }
        if raw.split(separator).any(str::is_empty) {
            return None;
        }
        Some(Self { raw, separator })
    }

    #[must_use]
    pub const fn as_str(self) -> &'a str {
        self.raw
    }

    #[must_use]
    pub fn segments(self) -> Split<'a, &'a str> {
        self.raw.split(self.separator)
    }

    #[must_use]
    pub fn depth(self) -> usize {
        self.segments().count()
    }
}
