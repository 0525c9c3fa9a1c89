//! Resource expansion: one controller name → the seven conventional CRUD routes.
//!
//! ```text
//! GET    /users           index
//! GET    /users/new       new
//! POST   /users           create
//! GET    /users/:id       show
//! GET    /users/:id/edit  edit
//! PUT    /users/:id       update
//! DELETE /users/:id       destroy
//! ```
//!
//! The emission order is part of the contract: matching is first-match-wins, so
//! `/users/new` has to be declared ahead of `/users/:id`.

use super::declaration::{MethodFilter, RouteDeclaration, Target};
use http::Method;
use once_cell::sync::Lazy;
use regex::Regex;

/// Separators accepted between the components of a qualified controller name.
#[allow(clippy::expect_used)]
static NAME_SEPARATOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"::|\.").expect("valid separator regex"));

/// Derive the base URL for a controller.
///
/// The leading namespace component is dropped, the rest is joined with `/` and
/// lowercased: `App.Users` → `/users`, `App.Admin.Users` → `/admin/users`. Both `.`
/// and `::` separate components. A name with no namespace keeps its only component
/// (`Users` → `/users`).
#[must_use]
pub fn resource_base(controller: &str) -> String {
    let components: Vec<&str> = NAME_SEPARATOR
        .split(controller)
        .filter(|c| !c.is_empty())
        .collect();
    let scoped = match components.split_first() {
        Some((_, rest)) if !rest.is_empty() => rest,
        _ => components.as_slice(),
    };
    format!("/{}", scoped.join("/").to_lowercase())
}

/// Expand `controller` into its seven CRUD declarations, in routing order.
#[must_use]
pub fn resources(controller: &str) -> Vec<RouteDeclaration> {
    let base = resource_base(controller);
    let member = format!("{}/:id", base.trim_end_matches('/'));
    let collection_child = |child: &str| format!("{}/{}", base.trim_end_matches('/'), child);

    let plan: [(Method, String, &str); 7] = [
        (Method::GET, base.clone(), "index"),
        (Method::GET, collection_child("new"), "new"),
        (Method::POST, base.clone(), "create"),
        (Method::GET, member.clone(), "show"),
        (Method::GET, format!("{}/edit", member), "edit"),
        (Method::PUT, member.clone(), "update"),
        (Method::DELETE, member, "destroy"),
    ];

    plan.into_iter()
        .map(|(method, path, action)| RouteDeclaration::Dispatch {
            method: MethodFilter::Only(method),
            pattern: path.into(),
            target: Target::new(controller, action),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_base_drops_namespace() {
        assert_eq!(resource_base("App.Users"), "/users");
        assert_eq!(resource_base("App.Admin.Users"), "/admin/users");
        assert_eq!(resource_base("app::BlogPosts"), "/blogposts");
    }

    #[test]
    fn test_resource_base_without_namespace() {
        assert_eq!(resource_base("Users"), "/users");
    }

    #[test]
    fn test_resources_emission_order() {
        let routes = resources("App.Users");
        let summary: Vec<(String, &str, &str)> = routes
            .iter()
            .map(|r| {
                (
                    r.method().to_string(),
                    r.pattern_source(),
                    r.target().map(|t| t.action.as_str()).unwrap_or_default(),
                )
            })
            .collect();

        assert_eq!(
            summary,
            vec![
                ("GET".to_string(), "/users", "index"),
                ("GET".to_string(), "/users/new", "new"),
                ("POST".to_string(), "/users", "create"),
                ("GET".to_string(), "/users/:id", "show"),
                ("GET".to_string(), "/users/:id/edit", "edit"),
                ("PUT".to_string(), "/users/:id", "update"),
                ("DELETE".to_string(), "/users/:id", "destroy"),
            ]
        );
    }

    #[test]
    fn test_resources_keep_qualified_controller() {
        for route in resources("App.Users") {
            assert_eq!(route.target().unwrap().controller, "App.Users");
        }
    }
}
