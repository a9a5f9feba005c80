//! Client-side Routes
//!
//! The paths the router shell registers and the view each one renders.

/// Views the shell can render
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AppRoute {
    Login,
    News,
    Preferences,
}

impl AppRoute {
    pub fn label(&self) -> &'static str {
        match self {
            AppRoute::Login => "Login",
            AppRoute::News => "News",
            AppRoute::Preferences => "Preferences",
        }
    }
}

/// Path table used by the shell.
///
/// Several paths may lead to the same view. Paths absent from the table
/// match no route and the shell renders nothing for them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteTable {
    entries: Vec<(String, AppRoute)>,
}

impl RouteTable {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Builder method: register a path
    pub fn route(mut self, path: impl Into<String>, route: AppRoute) -> Self {
        self.entries.push((path.into(), route));
        self
    }

    /// Registered paths in registration order
    pub fn entries(&self) -> impl Iterator<Item = (&str, AppRoute)> {
        self.entries.iter().map(|(p, r)| (p.as_str(), *r))
    }

    /// First path registered for a view, used for links
    pub fn path_for(&self, route: AppRoute) -> Option<&str> {
        self.entries
            .iter()
            .find(|(_, r)| *r == route)
            .map(|(p, _)| p.as_str())
    }

    /// First path that matches the same location as an earlier one.
    ///
    /// The router ignores a trailing slash, so `/news` and `/news/` collide.
    pub fn first_conflict(&self) -> Option<&str> {
        self.entries
            .iter()
            .enumerate()
            .find(|(i, (path, _))| {
                self.entries[..*i]
                    .iter()
                    .any(|(prev, _)| normalize(prev) == normalize(path))
            })
            .map(|(_, (path, _))| path.as_str())
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::new()
    }
}

/// Strip one trailing slash, keeping the root path intact
pub(crate) fn normalize(path: &str) -> &str {
    match path.strip_suffix('/') {
        Some(stripped) if !stripped.is_empty() => stripped,
        _ => path,
    }
}
