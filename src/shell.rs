//! Page Shells
//!
//! HTML documents served for the application routes. Each shell is the
//! frontend's `index.html` with the route's title and name filled in; the
//! wasm app mounted inside it takes over from there.

use std::path::Path;
use std::sync::Arc;

use crate::routes::{self, AppRoute, RouteTable};

/// Served when the static directory has no `index.html`
pub const DEFAULT_TEMPLATE: &str = include_str!("../assets/index.html");

/// Read `index.html` from the static directory, falling back to the
/// embedded template.
pub fn load_template(static_dir: &Path) -> String {
    let path = static_dir.join("index.html");

    match std::fs::read_to_string(&path) {
        Ok(template) => {
            tracing::info!("Using page template {:?}", path);
            template
        }
        Err(e) => {
            tracing::warn!(
                "No frontend build at {:?} ({}), serving embedded placeholder",
                path,
                e
            );
            DEFAULT_TEMPLATE.to_string()
        }
    }
}

/// Render the shell for one route.
///
/// Replaces the `<title>` contents (or adds a title when the template has
/// none) and tags the document with the route name.
pub fn render_shell(template: &str, route: AppRoute) -> String {
    let meta = format!(
        r#"<meta name="sparplan-route" content="{}" />"#,
        route.name()
    );
    let title = format!("<title>{}</title>", route.title());

    let with_title = match (template.find("<title>"), template.find("</title>")) {
        (Some(start), Some(end)) if start < end => format!(
            "{}{}{}",
            &template[..start],
            title,
            &template[end + "</title>".len()..]
        ),
        _ => insert_into_head(template, &title),
    };

    insert_into_head(&with_title, &meta)
}

fn insert_into_head(document: &str, fragment: &str) -> String {
    match document.find("</head>") {
        Some(pos) => format!("{}    {}\n{}", &document[..pos], fragment, &document[pos..]),
        None => format!("{}\n{}", fragment, document),
    }
}

/// Page table for the server: home rendered now, the rest on first visit.
pub fn page_table(template: impl Into<Arc<str>>) -> RouteTable<String> {
    let template: Arc<str> = template.into();
    routes::app_table(move |route| {
        tracing::debug!(route = route.name(), "Rendering page shell");
        render_shell(&template, route)
    })
}
