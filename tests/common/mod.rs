#![allow(dead_code)]

pub mod temp_files {
    use std::io::Write;
    use tempfile::NamedTempFile;

    /// Write `content` to a fresh temp file ending in `.{ext}`.
    ///
    /// The file is removed when the returned handle drops.
    pub fn create_temp_routes(content: &str, ext: &str) -> NamedTempFile {
        let mut file = tempfile::Builder::new()
            .prefix("switchyard_test_")
            .suffix(&format!(".{}", ext))
            .tempfile()
            .unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    pub fn create_temp_yaml(content: &str) -> NamedTempFile {
        create_temp_routes(content, "yaml")
    }
}

pub mod fixtures {
    /// A small application: home page, a legacy redirect and two resources.
    pub const APP_ROUTES_YAML: &str = r#"
routes:
  - { kind: dispatch, method: GET, path: /, to: "Home#index" }
  - { kind: redirect, method: ANY, path: /home, to: / }
  - { kind: dispatch, method: GET, path: /user/:name, to: "Users#profile" }
  - { kind: regex, method: GET, pattern: "^/assets/(?P<file>.+)$", to: "Assets#serve" }
  - { kind: resources, controller: App.Posts }
  - { kind: resources, controller: App.Admin.Users }
"#;
}
