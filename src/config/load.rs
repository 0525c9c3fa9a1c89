use super::build::build_table;
use super::types::RouteFile;
use crate::router::RouteTable;
use anyhow::Context;
use std::path::Path;
use tracing::info;

/// Environment variable naming the default route file.
pub const ROUTES_ENV: &str = "SWITCHYARD_ROUTES";

/// Serialization format of a route file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteFormat {
    Yaml,
    Toml,
    Json,
}

impl RouteFormat {
    /// Pick a format from the file extension; anything unrecognised is JSON.
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|s| s.to_str())
            .unwrap_or("")
            .to_ascii_lowercase()
            .as_str()
        {
            "yaml" | "yml" => RouteFormat::Yaml,
            "toml" => RouteFormat::Toml,
            _ => RouteFormat::Json,
        }
    }
}

/// Parse route file contents into a table.
pub fn parse_routes(content: &str, format: RouteFormat) -> anyhow::Result<RouteTable> {
    let file: RouteFile = match format {
        RouteFormat::Yaml => serde_yaml::from_str(content)?,
        RouteFormat::Toml => toml::from_str(content)?,
        RouteFormat::Json => serde_json::from_str(content)?,
    };
    build_table(&file)
}

/// Read, parse and build the route table stored at `path`.
pub fn load_routes(path: impl AsRef<Path>) -> anyhow::Result<RouteTable> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read route file {}", path.display()))?;
    let table = parse_routes(&content, RouteFormat::from_path(path))
        .with_context(|| format!("failed to load route file {}", path.display()))?;

    info!(
        path = %path.display(),
        routes_count = table.len(),
        "Route file loaded"
    );
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::Method;

    #[test]
    fn test_format_from_path() {
        assert_eq!(RouteFormat::from_path(Path::new("r.yaml")), RouteFormat::Yaml);
        assert_eq!(RouteFormat::from_path(Path::new("r.YML")), RouteFormat::Yaml);
        assert_eq!(RouteFormat::from_path(Path::new("r.toml")), RouteFormat::Toml);
        assert_eq!(RouteFormat::from_path(Path::new("r.json")), RouteFormat::Json);
        assert_eq!(RouteFormat::from_path(Path::new("routes")), RouteFormat::Json);
    }

    #[test]
    fn test_parse_yaml() {
        let yaml = r#"
routes:
  - { kind: dispatch, method: GET, path: /, to: "Home#index" }
  - { kind: redirect, path: /old, to: /new }
  - kind: resources
    controller: App.Users
"#;
        let table = parse_routes(yaml, RouteFormat::Yaml).unwrap();
        assert_eq!(table.len(), 9);
        assert!(table.find(&Method::GET, "/old").is_some());
        assert!(table.find(&Method::PUT, "/users/1").is_some());
    }

    #[test]
    fn test_parse_toml() {
        let toml = r#"
[[routes]]
kind = "dispatch"
method = "ANY"
path = "/ping"
to = "Health#check"

[[routes]]
kind = "regex"
pattern = "^/assets/(?P<file>.+)$"
to = "Assets#serve"
"#;
        let table = parse_routes(toml, RouteFormat::Toml).unwrap();
        assert_eq!(table.len(), 2);
        assert!(table.find(&Method::DELETE, "/ping").is_some());
        let matched = table.route(&Method::GET, "/assets/a/b.css").unwrap();
        assert_eq!(matched.get_path_param("file"), Some("a/b.css"));
    }

    #[test]
    fn test_parse_json() {
        let json = r#"{"routes":[{"kind":"dispatch","method":"POST","path":"/users","to":"Users#create"}]}"#;
        let table = parse_routes(json, RouteFormat::Json).unwrap();
        assert!(table.find(&Method::POST, "/users").is_some());
        assert!(table.find(&Method::GET, "/users").is_none());
    }

    #[test]
    fn test_parse_explicit_empty_route_list() {
        assert!(parse_routes(r#"{"routes": []}"#, RouteFormat::Json).unwrap().is_empty());
        assert!(parse_routes("routes: []\n", RouteFormat::Yaml).unwrap().is_empty());
        assert!(parse_routes("routes = []\n", RouteFormat::Toml).unwrap().is_empty());
    }

    #[test]
    fn test_empty_document_is_rejected() {
        for format in [RouteFormat::Yaml, RouteFormat::Toml, RouteFormat::Json] {
            assert!(parse_routes("", format).is_err(), "{:?}", format);
        }
        assert!(parse_routes("{}", RouteFormat::Json).is_err());
    }

    #[test]
    fn test_unknown_entry_kind_is_rejected() {
        let yaml = "routes:\n  - { kind: mount, path: /x }\n";
        assert!(parse_routes(yaml, RouteFormat::Yaml).is_err());
    }
}
