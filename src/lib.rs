//! # switchyard
//!
//! **switchyard** is a declarative HTTP route table for Rust: routes are declared once, in
//! code or in a route file, and the table answers two questions about them:
//!
//! - which declaration does an incoming `(method, path)` hit? ([`RouteTable::find`])
//! - which path reaches a given `Controller#action`? ([`RouteTable::link`])
//!
//! ## Overview
//!
//! A [`RouteTable`] is an ordered, append-only list of [`RouteDeclaration`]s. Matching is
//! **first-match-wins**: the table is scanned in declaration order and the first
//! declaration whose method filter and path pattern both accept the request is returned.
//! Earlier declarations shadow later ones, so order is the only priority mechanism.
//!
//! ## Architecture
//!
//! - **[`path`]** - path tokenizer: `/users/:id` → `[Literal("users"), Binding("id")]`
//! - **[`router`]** - declarations, the table, resource expansion, matching and reverse routing
//! - **[`config`]** - route files (YAML, TOML, JSON) → [`RouteTable`]
//! - **[`hot_reload`]** - watch a route file and atomically publish rebuilt tables
//! - **[`logging`]** - `tracing` subscriber setup
//! - **[`cli`]** - the `switchyard` command-line tool
//! - **[`error`]** - the [`RouteError`] taxonomy
//!
//! ### Request Flow
//!
//! ```text
//! (method, "/users/42/edit")
//!     → path::tokenize            [Literal("users"), Literal("42"), Literal("edit")]
//!     → RouteTable::route         scan declarations in order
//!         → MethodFilter::accepts   ANY or exact method
//!         → structural_match        segment-by-segment comparison
//!     → RouteMatch                declaration + captured bindings { id: "42" }
//!     → RouteMatch::outcome       Dispatch { App.Users, edit } | Redirect { to }
//! ```
//!
//! ## Declaring Routes
//!
//! ```rust
//! use http::Method;
//! use switchyard::{RouteTable, ANY};
//!
//! let table = RouteTable::new()
//!     .on(Method::GET, "/", "Home", "index")
//!     .redirect(ANY, "/home", "/")
//!     .resources("App.Users");
//!
//! let hit = table.route(&Method::PUT, "/users/42").unwrap();
//! assert_eq!(hit.declaration.target().unwrap().action, "update");
//! assert_eq!(hit.get_path_param("id"), Some("42"));
//!
//! let href = table.link("App.Users", "edit", &[("id", 42)]).unwrap();
//! assert_eq!(href, "/users/42/edit");
//! ```
//!
//! `resources("App.Users")` expands to the seven conventional CRUD routes under `/users`,
//! with `/users/new` declared ahead of `/users/:id` so it is not shadowed.
//!
//! ## Route Files
//!
//! ```yaml
//! routes:
//!   - { kind: dispatch, method: GET, path: /, to: "Home#index" }
//!   - { kind: redirect, method: ANY, path: /home, to: / }
//!   - { kind: resources, controller: App.Users }
//! ```
//!
//! ```rust,ignore
//! let table = switchyard::config::load_routes("routes.yaml")?;
//! ```
//!
//! ## Concurrency
//!
//! A built table is immutable and `Send + Sync`; share it behind an `Arc`, or behind an
//! `arc_swap::ArcSwap` when it is hot-reloaded. Matching and linking never mutate it.
//!
//! ## Logging
//!
//! Loading, reloading and match decisions are reported through `tracing`. Binaries call
//! [`logging::init_logging_with_config`]; libraries embedding the table install their own
//! subscriber.

pub mod cli;
pub mod config;
pub mod error;
pub mod hot_reload;
pub mod logging;
pub mod path;
pub mod router;

pub use error::RouteError;
pub use path::{tokenize, PathComponent};
pub use router::{
    match_route, on, on_regex, on_target, redirect, resources, MethodFilter, Outcome,
    PathPattern, RouteDeclaration, RouteMatch, RouteTable, SegmentPattern, Target, ANY,
};
