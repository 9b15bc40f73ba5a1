//! Identity wrappers and endpoint construction for the console API.

use std::fmt;

use url::Url;

use super::error::ConsoleError;

/// Path prefix of the app-store API group.
pub const API_PREFIX: &str = "kapis/openpitrix.io/v1";

fn validate_segment(kind: &'static str, value: &str) -> Result<String, ConsoleError> {
    let trimmed = value.trim();
    if trimmed.is_empty() || trimmed.contains('/') {
        return Err(ConsoleError::InvalidIdentifier {
            kind,
            value: value.to_owned(),
        });
    }
    Ok(trimmed.to_owned())
}

macro_rules! path_identifier {
    ($(#[$meta:meta])* $name:ident, $kind:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(String);

        impl $name {
            /// Validates that the value is non-blank and usable as a path
            /// segment.
            ///
            /// # Errors
            ///
            /// Returns [`ConsoleError::InvalidIdentifier`] when the value is
            /// blank or contains `/`.
            pub fn new(value: impl AsRef<str>) -> Result<Self, ConsoleError> {
                validate_segment($kind, value.as_ref()).map(Self)
            }

            /// Borrow the identifier value.
            #[must_use]
            pub const fn as_str(&self) -> &str {
                self.0.as_str()
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self.as_str()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

path_identifier!(
    /// Workspace that scopes repository registrations.
    WorkspaceName,
    "workspace"
);
path_identifier!(
    /// Repository identifier (`metadata.name` on the server).
    RepoId,
    "repository id"
);
path_identifier!(
    /// Application identifier.
    AppId,
    "application id"
);
path_identifier!(
    /// Application version identifier.
    VersionId,
    "version id"
);

/// Bearer token wrapper enforcing presence.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    /// Validates that the token is non-empty and trims whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::MissingToken`] when the supplied string is
    /// blank.
    pub fn new(token: impl AsRef<str>) -> Result<Self, ConsoleError> {
        let trimmed = token.as_ref().trim();
        if trimmed.is_empty() {
            return Err(ConsoleError::MissingToken);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the token value.
    #[must_use]
    pub const fn value(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(***)")
    }
}

/// Console server location and derived API base.
///
/// # Example
///
/// ```
/// use apprepo::console::locator::{ConsoleLocator, WorkspaceName};
///
/// let locator = ConsoleLocator::parse("https://console.example.com")
///     .expect("should parse server URL");
/// let workspace = WorkspaceName::new("demo").expect("valid workspace");
/// assert_eq!(
///     locator.repos_url(&workspace).as_str(),
///     "https://console.example.com/kapis/openpitrix.io/v1/workspaces/demo/repos"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleLocator {
    api_base: Url,
}

impl ConsoleLocator {
    /// Parses the console server URL, keeping any path prefix it carries.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::InvalidUrl`] when the input is not an absolute
    /// `http`/`https` URL.
    pub fn parse(input: &str) -> Result<Self, ConsoleError> {
        let mut parsed =
            Url::parse(input.trim()).map_err(|error| ConsoleError::InvalidUrl(error.to_string()))?;

        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ConsoleError::InvalidUrl(format!(
                "unsupported scheme `{}`",
                parsed.scheme()
            )));
        }
        if parsed.host_str().is_none() {
            return Err(ConsoleError::InvalidUrl("URL must include a host".to_owned()));
        }

        parsed.set_query(None);
        parsed.set_fragment(None);
        let prefix = parsed.path().trim_end_matches('/').to_owned();
        parsed.set_path(&format!("{prefix}/{API_PREFIX}/"));

        Ok(Self { api_base: parsed })
    }

    /// API base URL, always ending in `/`.
    #[must_use]
    pub const fn api_base(&self) -> &Url {
        &self.api_base
    }

    fn join(&self, segments: &[&str]) -> Url {
        let mut url = self.api_base.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    /// Collection URL for the workspace's repositories.
    #[must_use]
    pub fn repos_url(&self, workspace: &WorkspaceName) -> Url {
        self.join(&["workspaces", workspace.as_str(), "repos"])
    }

    /// URL of a single repository.
    #[must_use]
    pub fn repo_url(&self, workspace: &WorkspaceName, repo: &RepoId) -> Url {
        self.join(&["workspaces", workspace.as_str(), "repos", repo.as_str()])
    }

    /// Review action URL for an application version.
    #[must_use]
    pub fn review_action_url(&self, app: &AppId, version: &VersionId) -> Url {
        self.join(&["apps", app.as_str(), "versions", version.as_str(), "action"])
    }
}
