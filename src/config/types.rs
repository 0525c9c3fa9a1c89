use serde::{Deserialize, Serialize};

/// Root of a route file.
///
/// `routes` is required: an empty document is rejected rather than read as an empty
/// table. An explicit `routes: []` is accepted.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RouteFile {
    /// Declarations in match order
    pub routes: Vec<RouteEntry>,
}

/// One declaration in a route file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RouteEntry {
    /// `on(method, path, "Controller#action")`
    Dispatch {
        #[serde(default = "default_method")]
        method: String,
        path: String,
        to: String,
    },
    /// A regex-pattern dispatch route
    Regex {
        #[serde(default = "default_method")]
        method: String,
        pattern: String,
        to: String,
    },
    /// `redirect(method, path, to)`
    Redirect {
        #[serde(default = "default_method")]
        method: String,
        path: String,
        to: String,
    },
    /// `resources(controller)`
    Resources { controller: String },
}

fn default_method() -> String {
    "GET".to_string()
}
