//! Router core: structural matching of request paths against the route table.
//!
//! # Algorithm
//!
//! For each declaration, in table order:
//!
//! 1. The method filter must accept the request method (`ANY` accepts everything).
//! 2. A regex pattern must match the raw request path.
//! 3. A segment pattern is compared component by component against the tokenized
//!    request path (see [`structural_match`]).
//!
//! The first declaration passing both checks wins. There is no scoring and no
//! reordering, so an earlier declaration always shadows a later overlapping one.

use super::declaration::{PathPattern, RouteDeclaration};
use super::table::RouteTable;
use crate::path::{self, PathComponent};
use http::Method;
use smallvec::SmallVec;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

/// Maximum number of captured bindings before heap allocation.
/// Most routes have ≤4 bindings (e.g. `/users/:user_id/posts/:id`).
pub const MAX_INLINE_PARAMS: usize = 8;

/// Captured binding values: `(name, value)` in pattern order.
///
/// Each capture copies its name out of the declaration into a fresh `Arc<str>`.
pub type ParamVec = SmallVec<[(Arc<str>, String); MAX_INLINE_PARAMS]>;

/// What the caller should do with a matched request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<'a> {
    /// Invoke `controller`/`action`
    Dispatch { controller: &'a str, action: &'a str },
    /// Redirect the client to `to`
    Redirect { to: &'a str },
}

/// Result of successfully matching a request against the table.
#[derive(Debug, Clone)]
pub struct RouteMatch<'a> {
    /// The winning declaration
    pub declaration: &'a RouteDeclaration,
    /// Index of the declaration in the table
    pub index: usize,
    /// Values captured by the pattern's bindings (or the regex's named groups)
    pub path_params: ParamVec,
}

impl<'a> RouteMatch<'a> {
    /// Get a captured binding by name.
    ///
    /// Uses "last write wins" semantics if a pattern repeats a binding name.
    #[inline]
    #[must_use]
    pub fn get_path_param(&self, name: &str) -> Option<&str> {
        self.path_params
            .iter()
            .rfind(|(k, _)| k.as_ref() == name)
            .map(|(_, v)| v.as_str())
    }

    /// Convert captured bindings into a map.
    /// Note: This allocates - use get_path_param() in hot paths instead
    #[must_use]
    pub fn path_params_map(&self) -> HashMap<String, String> {
        self.path_params
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    /// The dispatch handoff for this match.
    #[must_use]
    pub fn outcome(&self) -> Outcome<'a> {
        match self.declaration {
            RouteDeclaration::Dispatch { target, .. } => Outcome::Dispatch {
                controller: target.controller.as_str(),
                action: target.action.as_str(),
            },
            RouteDeclaration::Redirect { to, .. } => Outcome::Redirect { to: to.as_str() },
        }
    }
}

/// Compare a tokenized request path against a tokenized pattern, left to right.
///
/// Rules, in priority order for each step:
///
/// - both exhausted: match
/// - request head is a wildcard: match, whatever is left of the pattern
/// - request has segments left but the pattern is exhausted: no match
/// - pattern has segments left but the request is exhausted: no match
/// - both heads literal: texts must be equal
/// - pattern head is a binding: request head text must be non-empty
/// - otherwise: no match
///
/// Bound values are appended to `params` as they are accepted; on failure `params`
/// may hold a partial capture and should be discarded.
pub fn structural_match(
    request: &[PathComponent<'_>],
    pattern: &[PathComponent<'_>],
    params: &mut ParamVec,
) -> bool {
    let mut request = request;
    let mut pattern = pattern;
    loop {
        let (req_head, pat_head) = match (request.first(), pattern.first()) {
            (None, None) => return true,
            (Some(PathComponent::Wildcard), _) => return true,
            (Some(_), None) | (None, Some(_)) => return false,
            (Some(req_head), Some(pat_head)) => (req_head, pat_head),
        };

        if let (PathComponent::Literal(req_text), PathComponent::Literal(pat_text)) =
            (req_head, pat_head)
        {
            if req_text != pat_text {
                return false;
            }
        } else if let PathComponent::Binding(name) = pat_head {
            let value = req_head.text();
            if value.is_empty() {
                return false;
            }
            params.push((Arc::from(&**name), value.to_string()));
        } else {
            return false;
        }

        request = &request[1..];
        pattern = &pattern[1..];
    }
}

/// Structural comparison without capturing bindings.
#[must_use]
pub fn components_match(request: &[PathComponent<'_>], pattern: &[PathComponent<'_>]) -> bool {
    let mut scratch = ParamVec::new();
    structural_match(request, pattern, &mut scratch)
}

fn match_declaration(
    declaration: &RouteDeclaration,
    method: &Method,
    raw_path: &str,
    request: &[PathComponent<'_>],
) -> Option<ParamVec> {
    if !declaration.method().accepts(method) {
        return None;
    }
    let segments = match declaration {
        RouteDeclaration::Dispatch {
            pattern: PathPattern::Regex(regex),
            ..
        } => {
            let captures = regex.captures(raw_path)?;
            let params = regex
                .capture_names()
                .flatten()
                .filter_map(|name| {
                    captures
                        .name(name)
                        .map(|m| (Arc::from(name), m.as_str().to_string()))
                })
                .collect();
            return Some(params);
        }
        RouteDeclaration::Dispatch {
            pattern: PathPattern::Segments(segments),
            ..
        } => segments,
        RouteDeclaration::Redirect { pattern, .. } => pattern,
    };

    let mut params = ParamVec::new();
    structural_match(request, segments.components(), &mut params).then_some(params)
}

impl RouteTable {
    /// Match a request and capture its bindings.
    ///
    /// # Returns
    ///
    /// * `Some(RouteMatch)` - the first declaration, in table order, that accepts the
    ///   method and structurally matches the path
    /// * `None` - nothing matched; callers usually answer 404
    #[must_use]
    pub fn route(&self, method: &Method, path: &str) -> Option<RouteMatch<'_>> {
        let request = path::tokenize(path);

        for (index, declaration) in self.iter().enumerate() {
            if let Some(path_params) = match_declaration(declaration, method, path, &request) {
                debug!(
                    method = %method,
                    path = %path,
                    route_index = index,
                    route = %declaration,
                    path_params = ?path_params,
                    "Route matched"
                );
                return Some(RouteMatch {
                    declaration,
                    index,
                    path_params,
                });
            }
        }

        debug!(
            method = %method,
            path = %path,
            routes_count = self.len(),
            "No route matched"
        );
        None
    }

    /// Find the first declaration matching `method` and `path`.
    #[must_use]
    pub fn find(&self, method: &Method, path: &str) -> Option<&RouteDeclaration> {
        self.route(method, path).map(|m| m.declaration)
    }
}

/// Free-standing form of [`RouteTable::find`], argument order as `(path, table, method)`.
#[must_use]
pub fn match_route<'t>(
    path: &str,
    table: &'t RouteTable,
    method: &Method,
) -> Option<&'t RouteDeclaration> {
    table.find(method, path)
}
