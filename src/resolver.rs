//! Path resolution against the dictionary tree.

use crate::entry::{
    Entry,
    EntryMap,
};
use crate::path::Path;

/// Outcome of resolving a path: a string leaf or a recoverable miss.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution<'a> {
    Found(&'a str),
    NotFound(Miss),
}

/// Why a path did not resolve to a leaf.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Miss {
    /// Empty path, or a path with an empty segment.
    InvalidPath,
    /// The segment at index `depth` is not a key of the node reached so far.
    MissingKey { depth: usize },
    /// The walk reached a mapping where a leaf was required, or hit a leaf before the
    /// last segment.
    NotALeaf,
}

impl<'a> Resolution<'a> {
    #[must_use]
    pub const fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    #[must_use]
    pub const fn found(self) -> Option<&'a str> {
        match self {
            Self::Found(value) => Some(value),
            Self::NotFound(_) => None,
        }
    }
}

/// Resolves `path` against `root`, segment by segment.
///
/// Only string leaves count as found; a path naming an interior mapping is
/// [`Miss::NotALeaf`] so partial sub-trees never leak out as text.
///
/// # Examples
/// ```
/// use copy_dict::{Entry, EntryMap, Miss, Resolution};
/// use copy_dict::resolver::resolve;
///
/// let root = EntryMap::from([(
///     "site".to_string(),
///     Entry::node([("title", Entry::leaf("Good Morning"))]),
/// )]);
///
/// assert_eq!(resolve(&root, "site.title", "."), Resolution::Found("Good Morning"));
/// assert_eq!(resolve(&root, "site", "."), Resolution::NotFound(Miss::NotALeaf));
/// ```
#[must_use]
pub fn resolve<'a>(root: &'a EntryMap, path: &str, separator: &str) -> Resolution<'a> {
    let Some(path) = Path::parse(path, separator) else {
        return Resolution::NotFound(Miss::InvalidPath);
    };

    let mut current = root;
    let mut segments = path.segments().enumerate().peekable();
    while let Some((depth, segment)) = segments.next() {
        let Some(entry) = current.get(segment) else {
            return Resolution::NotFound(Miss::MissingKey { depth });
        };
        let is_last = segments.peek().is_none();
        match entry {
            Entry::Leaf(value) if is_last => return Resolution::Found(value),
            Entry::Node(child) if !is_last => current = child,
            Entry::Leaf(_) | Entry::Node(_) => return Resolution::NotFound(Miss::NotALeaf),
        }
    }

    // Path::parse guarantees at least one segment, so the loop always returns.
    Resolution::NotFound(Miss::InvalidPath)
}
