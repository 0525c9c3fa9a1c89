use arc_swap::ArcSwap;
use http::Method;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use switchyard::{config::load_routes, hot_reload::watch_routes};

mod common;
use common::temp_files;

const ROUTES_V1: &str = r#"
routes:
  - { kind: dispatch, path: /foo, to: "Foo#one" }
"#;

const ROUTES_V2: &str = r#"
routes:
  - { kind: dispatch, path: /foo, to: "Foo#two" }
  - { kind: dispatch, path: /bar, to: "Bar#index" }
"#;

fn action_for(shared: &ArcSwap<switchyard::RouteTable>, path: &str) -> Option<String> {
    shared
        .load()
        .find(&Method::GET, path)
        .and_then(|d| d.target())
        .map(|t| t.action.clone())
}

#[test]
fn test_watch_routes_reload() {
    let file = temp_files::create_temp_yaml(ROUTES_V1);
    let shared = Arc::new(ArcSwap::from_pointee(load_routes(file.path()).unwrap()));
    assert_eq!(action_for(&shared, "/foo").as_deref(), Some("one"));

    let updates: Arc<Mutex<Vec<usize>>> = Arc::new(Mutex::new(Vec::new()));
    let updates_clone = updates.clone();

    let watcher = watch_routes(file.path(), Arc::clone(&shared), move |table| {
        updates_clone.lock().unwrap().push(table.len());
    })
    .expect("watch_routes");

    // allow watcher thread to start
    std::thread::sleep(Duration::from_millis(100));

    std::fs::write(file.path(), ROUTES_V2).unwrap();

    for _ in 0..40 {
        if updates.lock().unwrap().contains(&2) {
            break;
        }
        std::thread::sleep(Duration::from_millis(50));
    }

    assert!(updates.lock().unwrap().contains(&2));
    assert_eq!(action_for(&shared, "/foo").as_deref(), Some("two"));
    assert_eq!(action_for(&shared, "/bar").as_deref(), Some("index"));

    drop(watcher);
}
