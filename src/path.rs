//! Path tokenizer.
//!
//! Turns a raw path string into an ordered list of [`PathComponent`]s. The same
//! tokenizer is used for declared patterns (once, at declaration time) and for request
//! paths (once per match).
//!
//! | segment   | component              |
//! |-----------|------------------------|
//! | `users`   | `Literal("users")`     |
//! | `:id`     | `Binding("id")`        |
//! | `*`       | `Wildcard`             |
//! | `*.txt`   | `Literal("*.txt")`     |
//! | `` (empty)| `Literal("")`          |
//!
//! Exactly one leading `/` is stripped, so both `""` and `"/"` tokenize to an empty
//! list. Empty segments after that are kept: `/user/` is `[user, ""]`, which is what
//! stops `:name` from binding to an empty string.

use smallvec::SmallVec;
use std::borrow::Cow;
use std::fmt;

/// Number of segments stored inline before a tokenized path spills to the heap.
/// Most routes are ≤8 segments deep (e.g. `/org/:org/team/:team/users/:id/edit`).
pub const MAX_INLINE_SEGMENTS: usize = 8;

/// A tokenized path.
pub type Segments<'a> = SmallVec<[PathComponent<'a>; MAX_INLINE_SEGMENTS]>;

/// One `/`-delimited segment of a pattern or a request path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathComponent<'a> {
    /// A fixed segment such as `users`
    Literal(Cow<'a, str>),
    /// A named placeholder (`:id`), stored without the colon
    Binding(Cow<'a, str>),
    /// A catch-all marker that absorbs the rest of the path
    Wildcard,
}

impl<'a> PathComponent<'a> {
    /// Text of the segment: the literal text or the binding name. Empty for wildcards.
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            PathComponent::Literal(text) | PathComponent::Binding(text) => text.as_ref(),
            PathComponent::Wildcard => "",
        }
    }

    /// Detach the component from the string it was tokenized from.
    #[must_use]
    pub fn into_owned(self) -> PathComponent<'static> {
        match self {
            PathComponent::Literal(text) => PathComponent::Literal(Cow::Owned(text.into_owned())),
            PathComponent::Binding(name) => PathComponent::Binding(Cow::Owned(name.into_owned())),
            PathComponent::Wildcard => PathComponent::Wildcard,
        }
    }
}

impl fmt::Display for PathComponent<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathComponent::Literal(text) => f.write_str(text),
            PathComponent::Binding(name) => write!(f, ":{}", name),
            PathComponent::Wildcard => f.write_str("*"),
        }
    }
}

/// Tokenize a path into its components, borrowing from `path`.
#[must_use]
pub fn tokenize(path: &str) -> Segments<'_> {
    let rest = path.strip_prefix('/').unwrap_or(path);
    if rest.is_empty() {
        return Segments::new();
    }
    rest.split('/').map(classify).collect()
}

fn classify(segment: &str) -> PathComponent<'_> {
    if segment == "*" {
        return PathComponent::Wildcard;
    }
    match segment.strip_prefix(':') {
        Some(name) if !name.is_empty() => PathComponent::Binding(Cow::Borrowed(name)),
        _ => PathComponent::Literal(Cow::Borrowed(segment)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lit(s: &str) -> PathComponent<'_> {
        PathComponent::Literal(Cow::Borrowed(s))
    }

    fn bind(s: &str) -> PathComponent<'_> {
        PathComponent::Binding(Cow::Borrowed(s))
    }

    #[test]
    fn test_empty_and_root_paths() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("/").is_empty());
    }

    #[test]
    fn test_literal_and_binding_segments() {
        let segments = tokenize("/users/:id/edit");
        assert_eq!(segments.as_slice(), &[lit("users"), bind("id"), lit("edit")]);
    }

    #[test]
    fn test_trailing_slash_keeps_empty_segment() {
        let segments = tokenize("/user/");
        assert_eq!(segments.as_slice(), &[lit("user"), lit("")]);
    }

    #[test]
    fn test_wildcard_marker() {
        let segments = tokenize("/static/*/ignored");
        assert_eq!(
            segments.as_slice(),
            &[lit("static"), PathComponent::Wildcard, lit("ignored")]
        );
    }

    #[test]
    fn test_star_prefixed_segment_is_literal() {
        assert_eq!(tokenize("/files/*.txt").as_slice(), &[lit("files"), lit("*.txt")]);
        assert_eq!(tokenize("/files/*rest")[1], lit("*rest"));
        assert_eq!(tokenize("/**")[0], lit("**"));
    }

    #[test]
    fn test_bare_colon_is_literal() {
        assert_eq!(tokenize("/:")[0], lit(":"));
    }

    #[test]
    fn test_path_without_leading_slash() {
        assert_eq!(tokenize("users/:id").as_slice(), &[lit("users"), bind("id")]);
    }
}
