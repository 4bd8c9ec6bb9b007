use serde::Deserialize;
use serde::Serialize;

use crate::Error;
use crate::Result;

/// An immutable match predicate over path strings.
///
/// A filter is either the match-all sentinel, an exact path, or a path
/// prefix. Paths are normalized on construction: surrounding whitespace is
/// trimmed and a leading slash is prepended when missing, so `"settings"`
/// and `"/settings"` build the same filter.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UriFilter {
    /// `None` marks the match-all sentinel.
    path: Option<String>,
    exact: bool,
}

impl UriFilter {
    /// The sentinel filter accepting every uri.
    pub fn match_all() -> Self {
        Self {
            path: None,
            exact: false,
        }
    }

    /// Builds a filter that matches the given path exactly.
    pub fn exact(path: &str) -> Result<Self> {
        Self::build(path, true)
    }

    /// Builds a filter that matches every uri starting with the given path.
    pub fn prefix(path: &str) -> Result<Self> {
        Self::build(path, false)
    }

    fn build(
        path: &str,
        exact: bool,
    ) -> Result<Self> {
        let trimmed = path.trim();
        if trimmed.is_empty() {
            return Err(Error::InvalidArgument(
                "uri filter path must not be empty".to_string(),
            ));
        }

        let normalized = if trimmed.starts_with('/') {
            trimmed.to_string()
        } else {
            format!("/{trimmed}")
        };

        Ok(Self {
            path: Some(normalized),
            exact,
        })
    }

    pub fn is_match_all(&self) -> bool {
        self.path.is_none()
    }

    /// Tests whether the given uri passes the filter.
    ///
    /// A candidate without a leading slash is compared against the stored
    /// path with its leading slash stripped, mirroring the normalization
    /// applied at construction.
    pub fn is_match(
        &self,
        uri: &str,
    ) -> bool {
        let Some(path) = self.path.as_deref() else {
            return true;
        };

        let comparison = if uri.starts_with('/') {
            path
        } else {
            &path[1..]
        };

        if self.exact {
            uri == comparison
        } else {
            uri.starts_with(comparison)
        }
    }
}

impl Default for UriFilter {
    fn default() -> Self {
        Self::match_all()
    }
}
