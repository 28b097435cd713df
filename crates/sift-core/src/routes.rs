//! Static page table mapping URL paths to pages.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum Page {
    /// Landing page: upload and chunk selection.
    Index,
    /// Uploaded datasets.
    Dataset,
    VectorSearch,
    /// Remote model configuration.
    Config,
}

/// One entry of the page table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Route {
    pub path: &'static str,
    pub name: &'static str,
    pub page: Page,
}

pub static ROUTES: [Route; 4] = [
    Route {
        path: "/",
        name: "index",
        page: Page::Index,
    },
    Route {
        path: "/dataset",
        name: "dataset",
        page: Page::Dataset,
    },
    Route {
        path: "/vector-search",
        name: "vectorSearch",
        page: Page::VectorSearch,
    },
    Route {
        path: "/config",
        name: "config",
        page: Page::Config,
    },
];

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown page: {0}")]
pub struct UnknownPage(pub String);

impl Page {
    /// Resolve a request path to its page. Query strings and fragments are
    /// ignored; any other path resolves to `None`.
    #[must_use]
    pub fn resolve(path: &str) -> Option<Self> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        ROUTES
            .iter()
            .find(|route| route.path == path)
            .map(|route| route.page)
    }

    #[must_use]
    pub fn path(self) -> &'static str {
        self.route().path
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        self.route().name
    }

    fn route(self) -> &'static Route {
        match self {
            Self::Index => &ROUTES[0],
            Self::Dataset => &ROUTES[1],
            Self::VectorSearch => &ROUTES[2],
            Self::Config => &ROUTES[3],
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Page {
    type Err = UnknownPage;

    /// Parse a route name (`vectorSearch`) or a path (`/vector-search`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ROUTES
            .iter()
            .find(|route| route.name == s)
            .map(|route| route.page)
            .or_else(|| Self::resolve(s))
            .ok_or_else(|| UnknownPage(s.to_string()))
    }
}
