use std::fmt;

/// Errors raised while declaring routes or building links.
///
/// Declaration errors (`MalformedTarget`, `InvalidMethod`, `InvalidPattern`) surface
/// while the table is assembled, before any request is served. Link errors
/// (`UnknownLinkTarget`, `MissingBinding`, `IrreversiblePattern`) point at a bug in the
/// calling code and should be propagated, not swallowed.
///
/// A request that matches nothing is not an error: matching returns `None`.
#[derive(Debug, Clone)]
pub enum RouteError {
    /// A `"Controller#action"` string without exactly one `#` separator
    MalformedTarget {
        /// The offending target string
        target: String,
    },
    /// A method string that is neither `ANY` nor a valid HTTP method token
    InvalidMethod {
        /// The offending method string
        method: String,
    },
    /// A regular expression pattern that failed to compile
    InvalidPattern {
        /// The pattern source
        pattern: String,
        /// The compiler error
        source: regex::Error,
    },
    /// `link` was asked for a controller/action pair nothing dispatches to
    UnknownLinkTarget {
        /// Requested controller
        controller: String,
        /// Requested action
        action: String,
    },
    /// `link` was not given a value for a binding the pattern requires
    MissingBinding {
        /// Name of the binding without the leading `:`
        name: String,
        /// Source text of the pattern being filled in
        pattern: String,
    },
    /// `link` resolved to a regex-pattern declaration, which has no segments to fill
    IrreversiblePattern {
        /// Requested controller
        controller: String,
        /// Requested action
        action: String,
    },
}

impl fmt::Display for RouteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteError::MalformedTarget { target } => write!(
                f,
                "malformed route target '{}': expected exactly one '#' as in 'Controller#action'",
                target
            ),
            RouteError::InvalidMethod { method } => {
                write!(f, "invalid route method '{}': expected ANY or an HTTP method", method)
            }
            RouteError::InvalidPattern { pattern, source } => {
                write!(f, "invalid route pattern '{}': {}", pattern, source)
            }
            RouteError::UnknownLinkTarget { controller, action } => {
                write!(f, "no route dispatches to {}#{}", controller, action)
            }
            RouteError::MissingBinding { name, pattern } => {
                write!(f, "no value for binding ':{}' required by '{}'", name, pattern)
            }
            RouteError::IrreversiblePattern { controller, action } => write!(
                f,
                "route for {}#{} uses a regular expression and cannot be linked",
                controller, action
            ),
        }
    }
}

impl std::error::Error for RouteError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RouteError::InvalidPattern { source, .. } => Some(source),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_display_names_the_offending_input() {
        let err = RouteError::MalformedTarget {
            target: "Users".to_string(),
        };
        assert!(err.to_string().contains("'Users'"));

        let err = RouteError::MissingBinding {
            name: "id".to_string(),
            pattern: "/users/:id".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "no value for binding ':id' required by '/users/:id'"
        );
    }

    #[test]
    fn test_invalid_pattern_exposes_source() {
        let source = regex::Regex::new("(").unwrap_err();
        let err = RouteError::InvalidPattern {
            pattern: "(".to_string(),
            source,
        };
        assert!(err.source().is_some());
        assert!(RouteError::InvalidMethod {
            method: "G T".to_string()
        }
        .source()
        .is_none());
    }
}
