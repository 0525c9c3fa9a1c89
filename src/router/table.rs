//! The route table and its composition operators.
//!
//! A table is assembled once at startup by appending declarations, then shared
//! read-only by every request worker. Declaration order is the match priority, so the
//! table is append-only: nothing here sorts, deduplicates or removes entries.
//!
//! ```rust
//! use http::Method;
//! use switchyard::router::{RouteTable, ANY};
//!
//! # fn main() -> Result<(), switchyard::RouteError> {
//! let table = RouteTable::new()
//!     .on(Method::GET, "/", "Home", "index")
//!     .on_target(ANY, "/ping", "Health#check")?
//!     .redirect(Method::GET, "/old", "/new")
//!     .resources("App.Users");
//!
//! assert_eq!(table.len(), 10);
//! # Ok(())
//! # }
//! ```

use super::declaration::{MethodFilter, PathPattern, RouteDeclaration, SegmentPattern, Target};
use super::resource;
use crate::error::RouteError;
use regex::Regex;
use std::fmt;

/// Ordered, append-only list of route declarations.
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    routes: Vec<RouteDeclaration>,
}

/// Declare a dispatch route to `controller`/`action`.
#[must_use]
pub fn on(
    method: impl Into<MethodFilter>,
    path: impl Into<SegmentPattern>,
    controller: impl Into<String>,
    action: impl Into<String>,
) -> RouteDeclaration {
    RouteDeclaration::Dispatch {
        method: method.into(),
        pattern: PathPattern::Segments(path.into()),
        target: Target::new(controller, action),
    }
}

/// Declare a dispatch route from a `"Controller#action"` string.
pub fn on_target(
    method: impl Into<MethodFilter>,
    path: impl Into<SegmentPattern>,
    target: &str,
) -> Result<RouteDeclaration, RouteError> {
    let target: Target = target.parse()?;
    Ok(RouteDeclaration::Dispatch {
        method: method.into(),
        pattern: PathPattern::Segments(path.into()),
        target,
    })
}

/// Declare a dispatch route whose pattern is a regular expression matched against the
/// raw request path.
#[must_use]
pub fn on_regex(
    method: impl Into<MethodFilter>,
    regex: Regex,
    controller: impl Into<String>,
    action: impl Into<String>,
) -> RouteDeclaration {
    RouteDeclaration::Dispatch {
        method: method.into(),
        pattern: PathPattern::Regex(regex),
        target: Target::new(controller, action),
    }
}

/// Declare a redirect from `path` to `to`.
#[must_use]
pub fn redirect(
    method: impl Into<MethodFilter>,
    path: impl Into<SegmentPattern>,
    to: impl Into<String>,
) -> RouteDeclaration {
    RouteDeclaration::Redirect {
        method: method.into(),
        pattern: path.into(),
        to: to.into(),
    }
}

pub use resource::resources;

impl RouteTable {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one declaration.
    #[must_use]
    pub fn push(mut self, declaration: RouteDeclaration) -> Self {
        self.routes.push(declaration);
        self
    }

    /// Append a dispatch route. See [`on`].
    #[must_use]
    pub fn on(
        self,
        method: impl Into<MethodFilter>,
        path: impl Into<SegmentPattern>,
        controller: impl Into<String>,
        action: impl Into<String>,
    ) -> Self {
        self.push(on(method, path, controller, action))
    }

    /// Append a dispatch route from a `"Controller#action"` string. See [`on_target`].
    pub fn on_target(
        self,
        method: impl Into<MethodFilter>,
        path: impl Into<SegmentPattern>,
        target: &str,
    ) -> Result<Self, RouteError> {
        Ok(self.push(on_target(method, path, target)?))
    }

    /// Append a regular-expression dispatch route. See [`on_regex`].
    #[must_use]
    pub fn on_regex(
        self,
        method: impl Into<MethodFilter>,
        regex: Regex,
        controller: impl Into<String>,
        action: impl Into<String>,
    ) -> Self {
        self.push(on_regex(method, regex, controller, action))
    }

    /// Append a redirect. See [`redirect`].
    #[must_use]
    pub fn redirect(
        self,
        method: impl Into<MethodFilter>,
        path: impl Into<SegmentPattern>,
        to: impl Into<String>,
    ) -> Self {
        self.push(redirect(method, path, to))
    }

    /// Append the seven CRUD routes for `controller`. See [`resources`].
    #[must_use]
    pub fn resources(mut self, controller: &str) -> Self {
        self.routes.extend(resources(controller));
        self
    }

    /// Declarations in match order.
    pub fn iter(&self) -> std::slice::Iter<'_, RouteDeclaration> {
        self.routes.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Print all declarations to stdout in match order.
    pub fn dump_routes(&self) {
        print!("{}", self);
    }
}

impl Extend<RouteDeclaration> for RouteTable {
    fn extend<I: IntoIterator<Item = RouteDeclaration>>(&mut self, iter: I) {
        self.routes.extend(iter);
    }
}

impl FromIterator<RouteDeclaration> for RouteTable {
    fn from_iter<I: IntoIterator<Item = RouteDeclaration>>(iter: I) -> Self {
        Self {
            routes: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a RouteTable {
    type Item = &'a RouteDeclaration;
    type IntoIter = std::slice::Iter<'a, RouteDeclaration>;

    fn into_iter(self) -> Self::IntoIter {
        self.routes.iter()
    }
}

impl fmt::Display for RouteTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for route in &self.routes {
            writeln!(f, "{}", route)?;
        }
        Ok(())
    }
}
