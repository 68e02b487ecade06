//! Routes and the navigation back stack.

use std::fmt;

/// A screen plus its path parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    List,
    /// `details/{itemId}`. `item_id` is `None` when the segment is missing
    /// or not a decimal integer.
    Details { item_id: Option<i64> },
}

impl Route {
    pub const LIST: &'static str = "list";
    pub const DETAILS_PREFIX: &'static str = "details/";

    pub fn details(item_id: i64) -> Self {
        Route::Details {
            item_id: Some(item_id),
        }
    }

    /// Parse a route path. Unknown paths return `None`.
    pub fn parse(path: &str) -> Option<Self> {
        if path == Self::LIST {
            return Some(Route::List);
        }
        let segment = path.strip_prefix(Self::DETAILS_PREFIX)?;
        Some(Route::Details {
            item_id: segment.parse().ok(),
        })
    }

    pub fn path(&self) -> String {
        match self {
            Route::List => Self::LIST.to_string(),
            Route::Details { item_id: Some(id) } => format!("{}{}", Self::DETAILS_PREFIX, id),
            Route::Details { item_id: None } => Self::DETAILS_PREFIX.to_string(),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// Push/pop stack of routes rooted at [`Route::List`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavStack {
    entries: Vec<Route>,
}

impl Default for NavStack {
    fn default() -> Self {
        Self {
            entries: vec![Route::List],
        }
    }
}

impl NavStack {
    pub fn current(&self) -> &Route {
        self.entries.last().unwrap_or(&Route::List)
    }

    pub fn depth(&self) -> usize {
        self.entries.len()
    }

    pub fn push(&mut self, route: Route) {
        self.entries.push(route);
    }

    /// Pop the top route. The root stays; returns `false` when at root.
    pub fn pop(&mut self) -> bool {
        if self.entries.len() <= 1 {
            return false;
        }
        self.entries.pop();
        true
    }
}
