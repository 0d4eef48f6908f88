//! # Navigation Links
//!
//! Targets the finder can link to. The embedding application owns routing;
//! the finder only names the target and its params and asks a `Navigator`
//! for the href.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque documentation version identifier. Never interpreted, only forwarded.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(transparent)]
pub struct VersionTag(pub String);

impl fmt::Display for VersionTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// The logo link.
    Home { version_tag: Option<VersionTag> },
    /// A single page.
    Doc {
        doc_id: String,
        version_tag: Option<VersionTag>,
    },
}

impl Route {
    /// Route name as the router knows it.
    pub fn name(&self) -> &'static str {
        match self {
            Route::Home { .. } => "home",
            Route::Doc { .. } => "doc",
        }
    }

    pub fn version_tag(&self) -> Option<&VersionTag> {
        match self {
            Route::Home { version_tag } | Route::Doc { version_tag, .. } => version_tag.as_ref(),
        }
    }
}

/// Produces navigable hrefs for routes.
pub trait Navigator: Send + Sync {
    fn href(&self, route: &Route) -> String;
}

/// Formats routes as paths under a base path:
/// `/docs`, `/docs/v2`, `/docs/v2/getting-started`.
#[derive(Debug, Clone)]
pub struct PathNavigator {
    base_path: String,
}

impl PathNavigator {
    pub fn new(base_path: impl Into<String>) -> Self {
        let base_path = base_path.into();
        let trimmed = base_path.trim_end_matches('/').to_string();
        Self {
            base_path: trimmed,
        }
    }
}

impl Navigator for PathNavigator {
    fn href(&self, route: &Route) -> String {
        let mut href = self.base_path.clone();
        if let Some(tag) = route.version_tag() {
            href.push('/');
            href.push_str(&tag.0);
        }
        if let Route::Doc { doc_id, .. } = route {
            href.push('/');
            href.push_str(doc_id);
        }
        if href.is_empty() {
            href.push('/');
        }
        href
    }
}
