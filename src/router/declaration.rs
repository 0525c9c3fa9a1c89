//! Route declarations: what a single entry in the route table says.

use crate::error::RouteError;
use crate::path::{self, PathComponent};
use http::Method;
use regex::Regex;
use std::fmt;
use std::str::FromStr;
use tracing::warn;

/// Which request methods a declaration accepts.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MethodFilter {
    /// Any request method (declared as `ANY`)
    Any,
    /// Exactly this method; comparison is case-sensitive
    Only(Method),
}

/// Shorthand for [`MethodFilter::Any`].
pub const ANY: MethodFilter = MethodFilter::Any;

impl MethodFilter {
    /// Parse a declared method: `ANY` or an HTTP method token.
    ///
    /// Case is preserved, so `"get"` is an extension method distinct from `GET`.
    pub fn parse(method: &str) -> Result<Self, RouteError> {
        if method == "ANY" {
            return Ok(MethodFilter::Any);
        }
        Method::from_bytes(method.as_bytes())
            .map(MethodFilter::Only)
            .map_err(|_| RouteError::InvalidMethod {
                method: method.to_string(),
            })
    }

    /// Whether a request with `method` passes this filter.
    #[inline]
    #[must_use]
    pub fn accepts(&self, method: &Method) -> bool {
        match self {
            MethodFilter::Any => true,
            MethodFilter::Only(expected) => expected == method,
        }
    }
}

impl From<Method> for MethodFilter {
    fn from(method: Method) -> Self {
        MethodFilter::Only(method)
    }
}

impl FromStr for MethodFilter {
    type Err = RouteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MethodFilter::parse(s)
    }
}

impl fmt::Display for MethodFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MethodFilter::Any => f.pad("ANY"),
            MethodFilter::Only(method) => f.pad(method.as_str()),
        }
    }
}

/// The controller/action pair a dispatch declaration hands the request to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Target {
    /// Controller identifier, e.g. `App.Users`
    pub controller: String,
    /// Action identifier, e.g. `show`
    pub action: String,
}

impl Target {
    #[must_use]
    pub fn new(controller: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            controller: controller.into(),
            action: action.into(),
        }
    }
}

impl FromStr for Target {
    type Err = RouteError;

    /// Split `"Controller#action"` on its single `#`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || RouteError::MalformedTarget {
            target: s.to_string(),
        };
        let (controller, action) = s.split_once('#').ok_or_else(malformed)?;
        if controller.is_empty() || action.is_empty() || action.contains('#') {
            return Err(malformed());
        }
        Ok(Target::new(controller, action))
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.controller, self.action)
    }
}

/// A tokenized path pattern together with the text it was declared as.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentPattern {
    source: String,
    components: Vec<PathComponent<'static>>,
}

impl SegmentPattern {
    pub fn new(source: impl Into<String>) -> Self {
        let source = source.into();
        let components: Vec<PathComponent<'static>> = path::tokenize(&source)
            .into_iter()
            .map(PathComponent::into_owned)
            .collect();
        if components.contains(&PathComponent::Wildcard) {
            warn!(
                pattern = %source,
                "Wildcard segment in a declared pattern never matches a concrete request segment"
            );
        }
        Self { source, components }
    }

    /// The pattern as declared, e.g. `/users/:id`.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The tokenized pattern.
    #[must_use]
    pub fn components(&self) -> &[PathComponent<'static>] {
        &self.components
    }
}

impl From<&str> for SegmentPattern {
    fn from(source: &str) -> Self {
        SegmentPattern::new(source)
    }
}

impl From<String> for SegmentPattern {
    fn from(source: String) -> Self {
        SegmentPattern::new(source)
    }
}

/// A dispatch pattern: structural segments, or a regular expression escape hatch
/// matched against the raw request path.
#[derive(Debug, Clone)]
pub enum PathPattern {
    Segments(SegmentPattern),
    Regex(Regex),
}

impl PathPattern {
    /// Compile a regular expression pattern.
    pub fn regex(pattern: &str) -> Result<Self, RouteError> {
        Regex::new(pattern)
            .map(PathPattern::Regex)
            .map_err(|source| RouteError::InvalidPattern {
                pattern: pattern.to_string(),
                source,
            })
    }

    /// Source text of the pattern.
    #[must_use]
    pub fn source(&self) -> &str {
        match self {
            PathPattern::Segments(segments) => segments.source(),
            PathPattern::Regex(regex) => regex.as_str(),
        }
    }
}

impl From<SegmentPattern> for PathPattern {
    fn from(pattern: SegmentPattern) -> Self {
        PathPattern::Segments(pattern)
    }
}

impl From<&str> for PathPattern {
    fn from(source: &str) -> Self {
        PathPattern::Segments(SegmentPattern::new(source))
    }
}

impl From<String> for PathPattern {
    fn from(source: String) -> Self {
        PathPattern::Segments(SegmentPattern::new(source))
    }
}

impl fmt::Display for PathPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathPattern::Segments(segments) => f.write_str(segments.source()),
            PathPattern::Regex(regex) => write!(f, "~{}", regex.as_str()),
        }
    }
}

/// One entry in the route table.
#[derive(Debug, Clone)]
pub enum RouteDeclaration {
    /// Hand matching requests to a controller action
    Dispatch {
        method: MethodFilter,
        pattern: PathPattern,
        target: Target,
    },
    /// Answer matching requests with a redirect to `to`
    Redirect {
        method: MethodFilter,
        pattern: SegmentPattern,
        to: String,
    },
}

impl RouteDeclaration {
    #[must_use]
    pub fn method(&self) -> &MethodFilter {
        match self {
            RouteDeclaration::Dispatch { method, .. } | RouteDeclaration::Redirect { method, .. } => {
                method
            }
        }
    }

    /// Source text of the declared pattern.
    #[must_use]
    pub fn pattern_source(&self) -> &str {
        match self {
            RouteDeclaration::Dispatch { pattern, .. } => pattern.source(),
            RouteDeclaration::Redirect { pattern, .. } => pattern.source(),
        }
    }

    /// Dispatch target, if this is a dispatch declaration.
    #[must_use]
    pub fn target(&self) -> Option<&Target> {
        match self {
            RouteDeclaration::Dispatch { target, .. } => Some(target),
            RouteDeclaration::Redirect { .. } => None,
        }
    }

    /// Redirect location, if this is a redirect declaration.
    #[must_use]
    pub fn redirect_to(&self) -> Option<&str> {
        match self {
            RouteDeclaration::Dispatch { .. } => None,
            RouteDeclaration::Redirect { to, .. } => Some(to),
        }
    }
}

impl fmt::Display for RouteDeclaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteDeclaration::Dispatch {
                method,
                pattern,
                target,
            } => write!(f, "{:<7} {} -> {}", method, pattern, target),
            RouteDeclaration::Redirect {
                method,
                pattern,
                to,
            } => write!(f, "{:<7} {} => {}", method, pattern.source(), to),
        }
    }
}
