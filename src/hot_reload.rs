//! # Hot Reload Module
//!
//! Live reloading of route files. The route table is immutable once built, so a reload
//! never edits the table in place: a new table is built from the file and published with
//! an atomic pointer swap.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use arc_swap::ArcSwap;
//! use std::sync::Arc;
//! use switchyard::{config::load_routes, hot_reload::watch_routes};
//!
//! let shared = Arc::new(ArcSwap::from_pointee(load_routes("routes.yaml")?));
//!
//! let _watcher = watch_routes("routes.yaml", Arc::clone(&shared), |table| {
//!     println!("Reloaded {} routes", table.len());
//! })?;
//!
//! // Request path: one lock-free load per request.
//! let table = shared.load();
//! let hit = table.find(&http::Method::GET, "/users/42");
//! ```
//!
//! ## Reload Process
//!
//! 1. **Detection** - the watcher reports a modify or create event for the file
//! 2. **Load** - the file is read and every entry is turned into declarations
//! 3. **Publish** - the new table replaces the old one in a single swap
//! 4. **Hook** - `on_reload` runs with the table that was just published
//!
//! ## Error Handling
//!
//! A file that fails to read or parse is logged and ignored; the previous table stays
//! active. Readers holding a guard from before the swap keep seeing the old table until
//! they drop it.

use crate::config::load_routes;
use crate::router::RouteTable;
use arc_swap::ArcSwap;
use notify::{Config, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{error, info, warn};

/// Load `path` and publish the result into `shared`.
///
/// Returns the number of declarations in the new table. On error `shared` is left untouched.
pub fn reload_routes(path: impl AsRef<Path>, shared: &ArcSwap<RouteTable>) -> anyhow::Result<usize> {
    let table = load_routes(path)?;
    let count = table.len();
    shared.store(Arc::new(table));
    Ok(count)
}

/// Watch a route file and republish the table when it changes.
///
/// `on_reload` receives each table right after it is published. The returned watcher must
/// be kept alive for as long as reloading should continue.
pub fn watch_routes<P, F>(
    routes_path: P,
    shared: Arc<ArcSwap<RouteTable>>,
    mut on_reload: F,
) -> notify::Result<RecommendedWatcher>
where
    P: AsRef<Path>,
    F: FnMut(&RouteTable) + Send + 'static,
{
    let path: PathBuf = routes_path.as_ref().to_path_buf();
    let watch_path = path.clone();

    let mut watcher = RecommendedWatcher::new(
        move |res: Result<notify::Event, notify::Error>| match res {
            Ok(event) => {
                if !matches!(event.kind, EventKind::Modify(_) | EventKind::Create(_)) {
                    return;
                }
                match reload_routes(&watch_path, &shared) {
                    Ok(count) => {
                        info!(
                            path = %watch_path.display(),
                            routes_count = count,
                            "hot-reload: route table replaced"
                        );
                        let table = shared.load();
                        on_reload(&table);
                    }
                    Err(e) => {
                        let reason = format!("{:#}", e);
                        warn!(
                            path = %watch_path.display(),
                            error = %reason,
                            "hot-reload: keeping previous route table"
                        );
                    }
                }
            }
            Err(e) => error!(error = ?e, "hot-reload: watch error"),
        },
        Config::default(),
    )?;

    watcher.watch(&path, RecursiveMode::NonRecursive)?;
    Ok(watcher)
}
