//! # Router Module
//!
//! The router module holds the route table and everything that reads it: request
//! matching, resource expansion and reverse routing.
//!
//! ## Overview
//!
//! The router is responsible for:
//! - Building an ordered route table from `on`, `redirect` and `resources` declarations
//! - Matching incoming requests (method + path) to the first declaration that accepts them
//! - Extracting binding values (`:id`) from matched paths
//! - Rebuilding concrete paths from a controller action and binding values
//!
//! ## Architecture
//!
//! The router uses a two-phase approach:
//!
//! 1. **Declaration**: At startup, patterns such as `/users/:id` are tokenized into
//!    [`PathComponent`](crate::path::PathComponent)s and appended to a [`RouteTable`].
//!
//! 2. **Matching**: For each incoming request, the request path is tokenized and
//!    compared against the declarations in table order. The first declaration whose
//!    method filter and pattern both accept the request wins.
//!
//! ## Example
//!
//! ```rust
//! use http::Method;
//! use switchyard::router::RouteTable;
//!
//! let table = RouteTable::new()
//!     .on(Method::GET, "/user/:name", "Users", "show")
//!     .resources("App.Posts");
//!
//! let matched = table.route(&Method::GET, "/user/alice").unwrap();
//! assert_eq!(matched.get_path_param("name"), Some("alice"));
//!
//! let path = table.link("Users", "show", &[("name", "alice")]).unwrap();
//! assert_eq!(path, "/user/alice");
//! ```
//!
//! ## Performance
//!
//! Matching is a linear scan over the table, O(n) in the number of declarations.
//! Patterns are tokenized once at declaration time; request paths are tokenized once
//! per match into stack-allocated segment lists.

mod core;
mod declaration;
mod link;
mod resource;
mod table;

pub use self::core::{
    components_match, match_route, structural_match, Outcome, ParamVec, RouteMatch,
    MAX_INLINE_PARAMS,
};
pub use declaration::{MethodFilter, PathPattern, RouteDeclaration, SegmentPattern, Target, ANY};
pub use link::{link, Bindings};
pub use resource::resource_base;
pub use table::{on, on_regex, on_target, redirect, resources, RouteTable};
