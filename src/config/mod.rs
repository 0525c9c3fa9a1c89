//! # Route File Module
//!
//! Declarative route files: the same `on` / `redirect` / `resources` declarations a
//! program would write in code, kept in a YAML, TOML or JSON file.
//!
//! ## Data Flow
//!
//! ```text
//! routes.yaml
//!     → load.rs (read + deserialize by file extension)
//!     → RouteFile { routes: [RouteEntry] }
//!     → build.rs (entry → declarations, file order preserved)
//!     → RouteTable (immutable, shared via Arc)
//! ```
//!
//! ## Format
//!
//! ```yaml
//! routes:
//!   - { kind: dispatch, method: GET, path: /, to: "Home#index" }
//!   - { kind: regex, method: ANY, pattern: "^/assets/.+$", to: "Assets#serve" }
//!   - { kind: redirect, method: GET, path: /old, to: /new }
//!   - { kind: resources, controller: App.Users }
//! ```
//!
//! `method` defaults to `GET`. The same structure in TOML is a `[[routes]]` array of
//! tables, in JSON an array of objects.
//!
//! A file with one bad entry is rejected as a whole; the error names the entry index.

mod build;
mod load;
mod types;

pub use build::build_table;
pub use load::{load_routes, parse_routes, RouteFormat, ROUTES_ENV};
pub use types::{RouteEntry, RouteFile};
