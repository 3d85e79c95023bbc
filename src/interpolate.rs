//! `{name}` placeholder substitution.
//!
//! A placeholder is `{` + identifier + `}`, where the identifier starts with an ASCII letter
//! or `_` and continues with ASCII letters, digits or `_`. Any other brace is literal text;
//! there is no escape syntax. Substitution is a single pass: inserted values are never
//! scanned again.

use std::borrow::Cow;
use std::collections::{
    BTreeMap,
    HashMap,
};
use std::fmt::Display;

use serde_json::Value;

/// Named values substituted into placeholders.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vars {
    /// Placeholder name to rendered value.
    values: BTreeMap<String, String>,
}

impl Vars {
    #[must_use]
    pub const fn new() -> Self {
        Self { values: BTreeMap::new() }
    }

    /// Adds a variable, builder style.
    ///
    /// # Examples
    /// ```
    /// use copy_dict::Vars;
    ///
    /// let vars = Vars::new().with("name", "Kaleb").with("count", 3);
    /// assert_eq!(vars.get("count"), Some("3"));
    /// ```
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Display) -> Self {
        self.insert(name, value);
        self
    }

    /// Sets a variable, returning the previous value if there was one.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Display) -> Option<String> {
        self.values.insert(name.into(), value.to_string())
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K: Into<String>, V: Display> FromIterator<(K, V)> for Vars {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut vars = Self::new();
        for (name, value) in iter {
            vars.insert(name, value);
        }
        vars
    }
}

impl<K: Into<String>, V: Display, S> From<HashMap<K, V, S>> for Vars {
    fn from(map: HashMap<K, V, S>) -> Self {
        map.into_iter().collect()
    }
}

impl<K: Into<String>, V: Display> From<BTreeMap<K, V>> for Vars {
    fn from(map: BTreeMap<K, V>) -> Self {
        map.into_iter().collect()
    }
}

/// Strings are taken verbatim, other values use their JSON text. `null` entries are
/// skipped so their placeholders stay visible.
impl From<serde_json::Map<String, Value>> for Vars {
    fn from(map: serde_json::Map<String, Value>) -> Self {
        let mut vars = Self::new();
        for (name, value) in map {
            match value {
                Value::Null => {}
                Value::String(text) => {
                    vars.insert(name, text);
                }
                other => {
                    vars.insert(name, other);
                }
            }
        }
        vars
    }
}

/// A slice of a template: literal text or a placeholder token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Piece<'a> {
    /// Literal text, copied as is.
    Text(&'a str),
    /// `raw` is the full token including braces, `name` the identifier inside.
    Placeholder { name: &'a str, raw: &'a str },
}

/// Splits a template into [`Piece`]s, left to right.
#[derive(Debug, Clone)]
struct Pieces<'a> {
    /// Unscanned remainder of the template.
    rest: &'a str,
}

impl<'a> Pieces<'a> {
    /// Starts scanning `template`.
    const fn new(template: &'a str) -> Self {
        Self { rest: template }
    }
}

impl<'a> Iterator for Pieces<'a> {
    type Item = Piece<'a>;

    fn next(&mut self) -> Option<Piece<'a>> {
        if self.rest.is_empty() {
            return None;
        }

        if let Some((name, len)) = placeholder_at(self.rest) {
            let (raw, rest) = self.rest.split_at(len);
            self.rest = rest;
            return Some(Piece::Placeholder { name, raw });
        }

        // A leading '{' that did not open a placeholder is plain text.
        let skip = usize::from(self.rest.starts_with('{'));
        let end = self
            .rest
            .get(skip..)
            .and_then(|tail| tail.find('{'))
            .map_or(self.rest.len(), |offset| offset + skip);
        let (text, rest) = self.rest.split_at(end);
        self.rest = rest;
        Some(Piece::Text(text))
    }
}

/// If `text` starts with a placeholder, returns its name and byte length.
///
/// Scanning stops at the next brace of either kind.
fn placeholder_at(text: &str) -> Option<(&str, usize)> {
    let body = text.strip_prefix('{')?;
    let close = body.find(['{', '}'])?;
    let name = body.get(..close)?;
    let closed = body.get(close..).is_some_and(|rest| rest.starts_with('}'));
    (closed && is_identifier(name)).then_some((name, close + 2))
}

/// ASCII identifier: `[A-Za-z_][A-Za-z0-9_]*`.
fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    chars.next().is_some_and(|first| first.is_ascii_alphabetic() || first == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Substitutes `{name}` tokens in `template` with values from `vars`.
///
/// Tokens without a matching variable are kept verbatim. Borrows `template` when nothing
/// is substituted.
///
/// # Examples
/// ```
/// use copy_dict::Vars;
/// use copy_dict::interpolate::interpolate;
///
/// let vars = Vars::new().with("name", "Kaleb");
/// assert_eq!(interpolate("Hello {name}", Some(&vars)), "Hello Kaleb");
/// assert_eq!(interpolate("Hello {name}", None), "Hello {name}");
/// assert_eq!(interpolate("{name}", Some(&Vars::new().with("name", "{other}"))), "{other}");
/// ```
#[must_use]
pub fn interpolate<'a>(template: &'a str, vars: Option<&Vars>) -> Cow<'a, str> {
    let Some(vars) = vars.filter(|vars| !vars.is_empty()) else {
        return Cow::Borrowed(template);
    };

    let substitutes = Pieces::new(template).any(|piece| match piece {
        Piece::Placeholder { name, .. } => vars.contains(name),
        Piece::Text(_) => false,
    });
    if !substitutes {
        return Cow::Borrowed(template);
    }

    let mut output = String::with_capacity(template.len());
    for piece in Pieces::new(template) {
        match piece {
            Piece::Text(text) => output.push_str(text),
            Piece::Placeholder { name, raw } => output.push_str(vars.get(name).unwrap_or(raw)),
        }
    }
    Cow::Owned(output)
}

/// Placeholder names in `template`, in order of appearance (duplicates kept).
///
/// # Examples
/// ```
/// use copy_dict::interpolate::placeholders;
///
/// assert_eq!(placeholders("{greeting}, {name}! {}"), vec!["greeting", "name"]);
/// ```
#[must_use]
pub fn placeholders(template: &str) -> Vec<&str> {
    Pieces::new(template)
        .filter_map(|piece| match piece {
            Piece::Placeholder { name, .. } => Some(name),
            Piece::Text(_) => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use googletest::prelude::*;
    use rstest::rstest;
    use serde_json::json;

    use super::*;

    #[rstest]
    #[case("Hello {name}", "Hello Kaleb")]
    #[case("{name}", "Kaleb")]
    #[case("{name}{name}", "KalebKaleb")]
    #[case("{name}, meet {friend}", "Kaleb, meet {friend}")]
    #[case("Hi {name}. Call {phone}", "Hi Kaleb. Call (310) 237-6671")]
    #[case("no tokens here", "no tokens here")]
    #[case("", "")]
    fn test_interpolate(#[case] template: &str, #[case] expected: &str) {
        let vars = Vars::new().with("name", "Kaleb").with("phone", "(310) 237-6671");

        assert_eq!(interpolate(template, Some(&vars)), expected);
    }

    #[rstest]
    // Not placeholders: literal braces pass through untouched
    #[case("{")]
    #[case("}")]
    #[case("{}")]
    #[case("{ name }")]
    #[case("{name")]
    #[case("name}")]
    #[case("{na-me}")]
    #[case("{1name}")]
    #[case("{na.me}")]
    #[case("{\"json\": true}")]
    fn test_interpolate_literal_braces(#[case] template: &str) {
        let vars = Vars::new().with("name", "Kaleb").with("na", "x").with("1name", "y");

        assert_eq!(interpolate(template, Some(&vars)), template);
    }

    #[rstest]
    #[case("{{name}}", "{Kaleb}")]
    #[case("{{name}", "{Kaleb")]
    #[case("{ {name}", "{ Kaleb")]
    #[case("a{b{name}c", "a{bKalebc")]
    fn test_interpolate_nested_braces(#[case] template: &str, #[case] expected: &str) {
        let vars = Vars::new().with("name", "Kaleb");

        assert_eq!(interpolate(template, Some(&vars)), expected);
    }

    #[rstest]
    fn test_interpolate_long_run_of_unclosed_braces() {
        let opening = "{".repeat(200_000);
        let template = format!("{opening}{{name}} {{tail");
        let vars = Vars::new().with("name", "Kaleb");

        let output = interpolate(&template, Some(&vars));

        assert_eq!(output, format!("{opening}Kaleb {{tail"));
        assert_eq!(placeholders(&template), ["name"]);
    }

    #[rstest]
    fn test_interpolate_is_single_pass() {
        let vars = Vars::new().with("a", "{b}").with("b", "nope");

        assert_eq!(interpolate("{a}", Some(&vars)), "{b}");
        assert_eq!(interpolate("{a}{b}", Some(&vars)), "{b}nope");
    }

    #[rstest]
    fn test_interpolate_borrows_when_unchanged() {
        let vars = Vars::new().with("other", "x");

        assert!(matches!(interpolate("Hello {name}", None), Cow::Borrowed("Hello {name}")));
        assert!(matches!(interpolate("Hello {name}", Some(&Vars::new())), Cow::Borrowed(_)));
        assert!(matches!(interpolate("Hello {name}", Some(&vars)), Cow::Borrowed(_)));
        assert!(matches!(interpolate("Hello {other}", Some(&vars)), Cow::Owned(_)));
    }

    #[rstest]
    fn test_interpolate_unicode() {
        let vars = Vars::new().with("名前", "x").with("name", "カレブ");

        assert_eq!(interpolate("こんにちは {name} {名前}", Some(&vars)), "こんにちは カレブ {名前}");
    }

    #[rstest]
    #[case("Hello {name}", &["name"])]
    #[case("{a} {b} {a}", &["a", "b", "a"])]
    #[case("{} { x } {_ok} {x1}", &["_ok", "x1"])]
    #[case("plain", &[])]
    fn test_placeholders(#[case] template: &str, #[case] expected: &[&str]) {
        assert_eq!(placeholders(template), expected);
    }

    #[googletest::test]
    fn test_vars_from_iterator_stringifies_values() {
        let vars: Vars = [("count", 3.to_string()), ("name", "Kaleb".to_string())].into_iter().collect();
        let numeric = Vars::new().with("pi", 3.5).with("ok", true).with("n", -2);

        expect_that!(vars.get("count"), some(eq("3")));
        expect_that!(vars.len(), eq(2));
        expect_that!(numeric.get("pi"), some(eq("3.5")));
        expect_that!(numeric.get("ok"), some(eq("true")));
        expect_that!(numeric.get("n"), some(eq("-2")));
    }

    #[googletest::test]
    fn test_vars_from_maps() {
        let from_hash = Vars::from(HashMap::from([("name", "Kaleb")]));
        let from_btree = Vars::from(BTreeMap::from([("year".to_string(), 2025)]));

        expect_that!(from_hash.get("name"), some(eq("Kaleb")));
        expect_that!(from_btree.get("year"), some(eq("2025")));
    }

    #[googletest::test]
    fn test_vars_from_json_map() {
        let json = json!({ "name": "Kaleb", "count": 3, "ok": false, "missing": null });
        let Value::Object(map) = json else {
            unreachable!("json! object literal");
        };

        let vars = Vars::from(map);

        expect_that!(vars.get("name"), some(eq("Kaleb")));
        expect_that!(vars.get("count"), some(eq("3")));
        expect_that!(vars.get("ok"), some(eq("false")));
        expect_that!(vars.contains("missing"), eq(false));
        assert_eq!(interpolate("{name} {missing}", Some(&vars)), "Kaleb {missing}");
    }

    #[rstest]
    fn test_vars_insert_replaces() {
        let mut vars = Vars::new();

        assert_eq!(vars.insert("name", "a"), None);
        assert_eq!(vars.insert("name", "b"), Some("a".to_string()));
        assert_eq!(vars.get("name"), Some("b"));
    }
}
