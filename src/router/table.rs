use crate::router::error::RouterError;

/// Identifies a renderable screen.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ViewId {
    Home,
    Game,
}

/// One path-to-view binding.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Route {
    pub path: String,
    pub view: ViewId,
}

impl Route {
    pub fn new(path: impl Into<String>, view: ViewId) -> Self {
        Self {
            path: path.into(),
            view,
        }
    }
}

/// Ordered route table, immutable after construction.
///
/// Construction enforces the table invariants: every path is a
/// normalized absolute path and appears exactly once. Lookup walks the
/// table in declaration order.
#[derive(Debug)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    pub fn new(routes: Vec<Route>) -> Result<Self, RouterError> {
        for (i, route) in routes.iter().enumerate() {
            validate_path(&route.path)?;
            if routes[..i].iter().any(|r| r.path == route.path) {
                return Err(RouterError::DuplicatePath {
                    path: route.path.clone(),
                });
            }
        }
        Ok(Self { routes })
    }

    /// The application's fixed table: `/` and `/game`.
    pub fn standard() -> Self {
        Self::new(vec![
            Route::new("/", ViewId::Home),
            Route::new("/game", ViewId::Game),
        ])
        .expect("builtin route table is valid")
    }

    /// First match in declaration order.
    pub fn resolve(&self, path: &str) -> Result<ViewId, RouterError> {
        self.routes
            .iter()
            .find(|route| route.path == path)
            .map(|route| route.view)
            .ok_or_else(|| RouterError::NotFound {
                path: path.to_string(),
            })
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }
}

fn validate_path(path: &str) -> Result<(), RouterError> {
    let invalid = |reason| {
        Err(RouterError::InvalidPath {
            path: path.to_string(),
            reason,
        })
    };
    if path.is_empty() {
        return invalid("path is empty");
    }
    if !path.starts_with('/') {
        return invalid("path must be absolute");
    }
    if path.len() > 1 && path.ends_with('/') {
        return invalid("path must not end with '/'");
    }
    Ok(())
}
