//! Static route table for the portfolio views.
//!
//! # Responsibility
//! - Map URL paths to view identifiers, extracting `:param` segments.
//! - Carry per-route metadata (layout, title, access flags).
//!
//! # Invariants
//! - Routes are matched in table order; the catch-all is always last.
//! - `requires_auth`/`requires_admin` are metadata only. Nothing in this
//!   crate enforces them.

use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Layout {
    Public,
    Admin,
}

/// View rendered for a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewId {
    Home,
    About,
    Projects,
    ProjectDetail,
    Blog,
    BlogPost,
    Contact,
    AdminDashboard,
    AdminProjects,
    AdminBlog,
    NotFound,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Route {
    /// Pattern such as `/projects/:id`; `*` matches any remaining path.
    pub path: &'static str,
    pub name: &'static str,
    pub view: ViewId,
    pub layout: Layout,
    pub title: &'static str,
    pub requires_auth: bool,
    pub requires_admin: bool,
}

impl Route {
    const fn public(path: &'static str, name: &'static str, view: ViewId, title: &'static str) -> Self {
        Self {
            path,
            name,
            view,
            layout: Layout::Public,
            title,
            requires_auth: false,
            requires_admin: false,
        }
    }

    const fn admin(path: &'static str, name: &'static str, view: ViewId, title: &'static str) -> Self {
        Self {
            path,
            name,
            view,
            layout: Layout::Admin,
            title,
            requires_auth: true,
            requires_admin: true,
        }
    }

    fn match_path(&self, segments: &[&str]) -> Option<BTreeMap<String, String>> {
        if self.path == "*" {
            return Some(BTreeMap::new());
        }

        let pattern: Vec<&str> = split_segments(self.path);
        if pattern.len() != segments.len() {
            return None;
        }

        let mut params = BTreeMap::new();
        for (expected, actual) in pattern.iter().zip(segments) {
            match expected.strip_prefix(':') {
                Some(name) => {
                    params.insert(name.to_string(), (*actual).to_string());
                }
                None if expected == actual => {}
                None => return None,
            }
        }
        Some(params)
    }
}

/// Result of resolving a path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteMatch<'a> {
    pub route: &'a Route,
    pub params: BTreeMap<String, String>,
}

impl RouteMatch<'_> {
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }
}

const ROUTES: &[Route] = &[
    Route::public("/", "home", ViewId::Home, "Home - Portfolio"),
    Route::public("/about", "about", ViewId::About, "About - Portfolio"),
    Route::public("/projects", "projects", ViewId::Projects, "Projects - Portfolio"),
    Route::public(
        "/projects/:id",
        "project-detail",
        ViewId::ProjectDetail,
        "Project Detail - Portfolio",
    ),
    Route::public("/blog", "blog", ViewId::Blog, "Blog - Portfolio"),
    Route::public("/blog/:slug", "blog-post", ViewId::BlogPost, "Blog Post - Portfolio"),
    Route::public("/contact", "contact", ViewId::Contact, "Contact - Portfolio"),
    Route::admin(
        "/admin/dashboard",
        "admin-dashboard",
        ViewId::AdminDashboard,
        "Dashboard",
    ),
    Route::admin(
        "/admin/projects",
        "admin-projects",
        ViewId::AdminProjects,
        "Admin Projects",
    ),
    Route::admin("/admin/blog", "admin-blog", ViewId::AdminBlog, "Admin Blog"),
    Route::public("*", "not-found", ViewId::NotFound, "404 - Not Found"),
];

/// Ordered route table.
#[derive(Debug, Clone, Copy)]
pub struct RouteTable {
    routes: &'static [Route],
}

impl Default for RouteTable {
    fn default() -> Self {
        Self { routes: ROUTES }
    }
}

impl RouteTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn routes(&self) -> &'static [Route] {
        self.routes
    }

    pub fn by_name(&self, name: &str) -> Option<&'static Route> {
        self.routes.iter().find(|route| route.name == name)
    }

    /// Resolves `path` to the first matching route.
    ///
    /// Query strings, fragments and trailing slashes are ignored. Unmatched
    /// paths resolve to the catch-all `not-found` route.
    pub fn resolve(&self, path: &str) -> RouteMatch<'static> {
        let path = path
            .split(['?', '#'])
            .next()
            .unwrap_or_default();
        let segments = split_segments(path);

        self.routes
            .iter()
            .find_map(|route| {
                route
                    .match_path(&segments)
                    .map(|params| RouteMatch { route, params })
            })
            .unwrap_or_else(|| RouteMatch {
                route: &ROUTES[ROUTES.len() - 1],
                params: BTreeMap::new(),
            })
    }
}

fn split_segments(path: &str) -> Vec<&str> {
    path.split('/').filter(|segment| !segment.is_empty()).collect()
}
