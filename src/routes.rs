//! Route Table
//!
//! Static mapping from URL paths to views. Every entry is either eager (the
//! view is built when the table is built) or lazy (the view is built on the
//! first visit and reused for every visit after that).
//!
//! The table is generic over the view type: the host server stores rendered
//! HTML page shells, tests store plain strings.
//!
//! # Example
//!
//! ```rust
//! use sparplan::routes::RouteTable;
//!
//! let table = RouteTable::builder()
//!     .eager("/", "home", "Home".to_string())
//!     .lazy("/about", "about", || "About".to_string())
//!     .build()
//!     .unwrap();
//!
//! assert!(!table.is_loaded("/about"));
//! assert_eq!(table.resolve("/about/").map(String::as_str), Some("About"));
//! assert!(table.is_loaded("/about"));
//! assert!(table.resolve("/missing").is_none());
//! ```

use serde::Serialize;
use std::collections::HashSet;
use std::fmt;
use std::sync::OnceLock;
use thiserror::Error;

/// Factory for a lazily built view
pub type LoadFn<V> = Box<dyn Fn() -> V + Send + Sync>;

/// How a route's view is obtained
pub enum ViewLoader<V> {
    /// Built together with the table
    Eager(V),
    /// Built on first resolve, cached afterwards
    Lazy { load: LoadFn<V>, cell: OnceLock<V> },
}

impl<V> ViewLoader<V> {
    pub fn lazy(load: impl Fn() -> V + Send + Sync + 'static) -> Self {
        ViewLoader::Lazy {
            load: Box::new(load),
            cell: OnceLock::new(),
        }
    }

    fn get(&self) -> &V {
        match self {
            ViewLoader::Eager(view) => view,
            ViewLoader::Lazy { load, cell } => cell.get_or_init(|| load()),
        }
    }

    fn is_loaded(&self) -> bool {
        match self {
            ViewLoader::Eager(_) => true,
            ViewLoader::Lazy { cell, .. } => cell.get().is_some(),
        }
    }

    fn is_lazy(&self) -> bool {
        matches!(self, ViewLoader::Lazy { .. })
    }
}

impl<V> fmt::Debug for ViewLoader<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewLoader::Eager(_) => f.write_str("Eager"),
            ViewLoader::Lazy { cell, .. } => f
                .debug_struct("Lazy")
                .field("loaded", &cell.get().is_some())
                .finish(),
        }
    }
}

/// One row of the route table
#[derive(Debug)]
pub struct RouteEntry<V> {
    pub path: String,
    pub name: String,
    pub loader: ViewLoader<V>,
}

/// Summary of an entry, for listings
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteInfo {
    pub path: String,
    pub name: String,
    pub lazy: bool,
    pub loaded: bool,
}

/// Route table construction errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RouteError {
    #[error("Duplicate route path: {0}")]
    DuplicatePath(String),

    #[error("Duplicate route name: {0}")]
    DuplicateName(String),

    #[error("Invalid route path {0:?}: must start with '/'")]
    InvalidPath(String),
}

/// Ordered, immutable path -> view table
#[derive(Debug)]
pub struct RouteTable<V> {
    entries: Vec<RouteEntry<V>>,
}

impl<V> RouteTable<V> {
    pub fn builder() -> RouteTableBuilder<V> {
        RouteTableBuilder {
            entries: Vec::new(),
        }
    }

    /// Resolve a request path to its view, loading it on first access.
    ///
    /// Query string, fragment and a trailing slash are ignored.
    pub fn resolve(&self, path: &str) -> Option<&V> {
        let entry = self.find(path)?;

        if !entry.loader.is_loaded() {
            tracing::debug!(path = %entry.path, name = %entry.name, "Loading lazy route view");
        }

        Some(entry.loader.get())
    }

    /// Look up the entry for a path without loading its view
    pub fn find(&self, path: &str) -> Option<&RouteEntry<V>> {
        let path = normalize_path(path);
        self.entries.iter().find(|e| e.path == path)
    }

    /// Whether the view for `path` has been built yet
    pub fn is_loaded(&self, path: &str) -> bool {
        self.find(path).is_some_and(|e| e.loader.is_loaded())
    }

    pub fn entries(&self) -> &[RouteEntry<V>] {
        &self.entries
    }

    pub fn info(&self) -> Vec<RouteInfo> {
        self.entries
            .iter()
            .map(|e| RouteInfo {
                path: e.path.clone(),
                name: e.name.clone(),
                lazy: e.loader.is_lazy(),
                loaded: e.loader.is_loaded(),
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Builder for [`RouteTable`]
pub struct RouteTableBuilder<V> {
    entries: Vec<RouteEntry<V>>,
}

impl<V> RouteTableBuilder<V> {
    pub fn eager(mut self, path: impl Into<String>, name: impl Into<String>, view: V) -> Self {
        self.entries.push(RouteEntry {
            path: path.into(),
            name: name.into(),
            loader: ViewLoader::Eager(view),
        });
        self
    }

    pub fn lazy(
        mut self,
        path: impl Into<String>,
        name: impl Into<String>,
        load: impl Fn() -> V + Send + Sync + 'static,
    ) -> Self {
        self.entries.push(RouteEntry {
            path: path.into(),
            name: name.into(),
            loader: ViewLoader::lazy(load),
        });
        self
    }

    /// Finish the table. Paths and names must be unique.
    pub fn build(self) -> Result<RouteTable<V>, RouteError> {
        let mut paths = HashSet::new();
        let mut names = HashSet::new();

        for entry in &self.entries {
            if !entry.path.starts_with('/') {
                return Err(RouteError::InvalidPath(entry.path.clone()));
            }
            if !paths.insert(normalize_path(&entry.path)) {
                return Err(RouteError::DuplicatePath(entry.path.clone()));
            }
            if !names.insert(entry.name.as_str()) {
                return Err(RouteError::DuplicateName(entry.name.clone()));
            }
        }

        let entries = self
            .entries
            .into_iter()
            .map(|mut e| {
                e.path = normalize_path(&e.path).to_string();
                e
            })
            .collect();

        Ok(RouteTable { entries })
    }
}

/// Strip query, fragment and a trailing slash (except for the root path)
pub fn normalize_path(path: &str) -> &str {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    let path = &path[..end];

    if path.len() > 1 {
        path.strip_suffix('/').unwrap_or(path)
    } else if path.is_empty() {
        "/"
    } else {
        path
    }
}

// ============ Application routes ============

/// The views of the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AppRoute {
    Home,
    About,
    Login,
    Register,
}

impl AppRoute {
    /// All routes in navigation order
    pub const ALL: [AppRoute; 4] = [
        AppRoute::Home,
        AppRoute::About,
        AppRoute::Login,
        AppRoute::Register,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            AppRoute::Home => "/",
            AppRoute::About => "/about",
            AppRoute::Login => "/login",
            AppRoute::Register => "/register",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            AppRoute::Home => "home",
            AppRoute::About => "about",
            AppRoute::Login => "login",
            AppRoute::Register => "register",
        }
    }

    /// Navigation label
    pub fn label(&self) -> &'static str {
        match self {
            AppRoute::Home => "Sparplan",
            AppRoute::About => "Über",
            AppRoute::Login => "Anmelden",
            AppRoute::Register => "Registrieren",
        }
    }

    /// Document title
    pub fn title(&self) -> &'static str {
        match self {
            AppRoute::Home => "Sparplan-Rechner",
            AppRoute::About => "Über den Sparplan-Rechner",
            AppRoute::Login => "Anmelden - Sparplan-Rechner",
            AppRoute::Register => "Registrieren - Sparplan-Rechner",
        }
    }

    /// Only the home view is built up front
    pub fn is_lazy(&self) -> bool {
        !matches!(self, AppRoute::Home)
    }

    pub fn from_path(path: &str) -> Option<Self> {
        let path = normalize_path(path);
        Self::ALL.into_iter().find(|r| r.path() == path)
    }
}

/// Build the application route table.
///
/// `render` produces the view for a route; it runs immediately for eager
/// routes and on first visit for lazy ones.
pub fn app_table<V, F>(render: F) -> RouteTable<V>
where
    F: Fn(AppRoute) -> V + Clone + Send + Sync + 'static,
{
    let builder = AppRoute::ALL
        .into_iter()
        .fold(RouteTable::builder(), |builder, route| {
            if route.is_lazy() {
                let render = render.clone();
                builder.lazy(route.path(), route.name(), move || render(route))
            } else {
                builder.eager(route.path(), route.name(), render(route))
            }
        });

    match builder.build() {
        Ok(table) => table,
        // AppRoute paths and names are distinct constants
        Err(e) => unreachable!("application route table is invalid: {e}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_normalize_path() {
        assert_eq!(normalize_path("/"), "/");
        assert_eq!(normalize_path(""), "/");
        assert_eq!(normalize_path("/about/"), "/about");
        assert_eq!(normalize_path("/login?next=/"), "/login");
        assert_eq!(normalize_path("/register#form"), "/register");
        assert_eq!(normalize_path("/?x=1"), "/");
    }

    #[test]
    fn test_lazy_view_built_once() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);

        let table = RouteTable::builder()
            .eager("/", "home", "home".to_string())
            .lazy("/about", "about", move || {
                counter.fetch_add(1, Ordering::SeqCst);
                "about".to_string()
            })
            .build()
            .unwrap();

        assert!(table.is_loaded("/"));
        assert!(!table.is_loaded("/about"));
        assert_eq!(calls.load(Ordering::SeqCst), 0);

        assert_eq!(table.resolve("/about").unwrap(), "about");
        assert_eq!(table.resolve("/about").unwrap(), "about");
        assert_eq!(table.resolve("/about/").unwrap(), "about");

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(table.is_loaded("/about"));
    }

    #[test]
    fn test_lazy_view_concurrent_first_visit() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);

        let table = Arc::new(
            RouteTable::builder()
                .lazy("/login", "login", move || {
                    counter.fetch_add(1, Ordering::SeqCst);
                    42u32
                })
                .build()
                .unwrap(),
        );

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let table = Arc::clone(&table);
                std::thread::spawn(move || *table.resolve("/login").unwrap())
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), 42);
        }
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_unmatched_path() {
        let table = RouteTable::builder()
            .eager("/", "home", 1)
            .build()
            .unwrap();

        assert!(table.resolve("/nowhere").is_none());
        assert!(!table.is_loaded("/nowhere"));
    }

    #[test]
    fn test_duplicates_rejected() {
        let err = RouteTable::builder()
            .eager("/a", "a", 1)
            .eager("/a/", "b", 2)
            .build()
            .unwrap_err();
        assert_eq!(err, RouteError::DuplicatePath("/a/".to_string()));

        let err = RouteTable::builder()
            .eager("/a", "same", 1)
            .eager("/b", "same", 2)
            .build()
            .unwrap_err();
        assert_eq!(err, RouteError::DuplicateName("same".to_string()));

        let err = RouteTable::builder().eager("about", "about", 1).build().unwrap_err();
        assert_eq!(err, RouteError::InvalidPath("about".to_string()));
    }

    #[test]
    fn test_app_table() {
        let table = app_table(|route| route.title().to_string());

        assert_eq!(table.len(), 4);
        let paths: Vec<_> = table.entries().iter().map(|e| e.path.as_str()).collect();
        assert_eq!(paths, ["/", "/about", "/login", "/register"]);

        assert!(table.is_loaded("/"));
        for path in ["/about", "/login", "/register"] {
            assert!(!table.is_loaded(path), "{path} loaded early");
        }

        assert_eq!(table.resolve("/login").unwrap(), "Anmelden - Sparplan-Rechner");
        assert!(table.is_loaded("/login"));
        assert!(!table.is_loaded("/register"));

        let info = table.info();
        assert!(!info[0].lazy);
        assert!(info[2].lazy && info[2].loaded);
        assert!(info[3].lazy && !info[3].loaded);
    }

    #[test]
    fn test_app_route_from_path() {
        assert_eq!(AppRoute::from_path("/"), Some(AppRoute::Home));
        assert_eq!(AppRoute::from_path("/register/"), Some(AppRoute::Register));
        assert_eq!(AppRoute::from_path("/admin"), None);
    }
}
