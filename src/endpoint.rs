//! # Module: Endpoint Catalog
//!
//! ## Responsibility
//! Names the backend report endpoints and groups them into the fixed sets a
//! dashboard can mount. Exactly one set is mounted at a time; sets are never
//! merged.
//!
//! ## Guarantees
//! - Built-in profiles are static and deterministic (same order every time)
//! - Every path starts with `/`
//!
//! ## NOT Responsible For
//! - Issuing requests (that belongs to `client`)
//! - Validating user-supplied custom sets (that belongs to `config::validation`)

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a logical report, e.g. `"head_coach"` or `"decree"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EndpointId(
    /// The raw identifier.
    pub String,
);

impl EndpointId {
    /// Create a new [`EndpointId`] from any string-like value.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Return the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EndpointId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single backend path returning one report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Endpoint {
    /// Logical report identifier.
    pub id: EndpointId,
    /// Request path relative to the server base URL, e.g. `/api/decree`.
    pub path: String,
    /// Section heading shown above the report.
    #[serde(default)]
    pub title: String,
}

impl Endpoint {
    /// Creates an endpoint with an explicit section title.
    pub fn new(id: &str, path: &str, title: &str) -> Self {
        Self {
            id: EndpointId::new(id),
            path: path.to_string(),
            title: title.to_string(),
        }
    }

    /// Section heading, falling back to the id when no title was configured.
    pub fn display_title(&self) -> &str {
        if self.title.trim().is_empty() {
            self.id.as_str()
        } else {
            &self.title
        }
    }

    /// Joins this endpoint's path onto `base_url`.
    ///
    /// Trailing slashes on the base are ignored so that `http://host/` and
    /// `http://host` produce the same URL.
    pub fn url(&self, base_url: &str) -> String {
        format!("{}{}", base_url.trim_end_matches('/'), self.path)
    }
}

/// Named endpoint set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Profile {
    /// The link set of the shipped web UI plus the health probe.
    #[default]
    Links,
    /// Every individual report endpoint, one request each.
    Full,
    /// A single request to `/api/run/all`.
    Combined,
    /// Endpoints listed explicitly in the config file.
    Custom,
}

impl Profile {
    /// Lowercase profile name as used in config files and on the CLI.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Links => "links",
            Self::Full => "full",
            Self::Combined => "combined",
            Self::Custom => "custom",
        }
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An ordered, fixed collection of endpoints mounted together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointSet {
    profile: Profile,
    endpoints: Vec<Endpoint>,
}

impl EndpointSet {
    /// Returns the built-in set for `profile`.
    ///
    /// [`Profile::Custom`] has no built-in endpoints and yields an empty set;
    /// use [`EndpointSet::custom`] with the configured list instead.
    pub fn for_profile(profile: Profile) -> Self {
        let endpoints = match profile {
            Profile::Links => vec![
                Endpoint::new("head_coach", "/api/run/head_coach", "Head Coach"),
                Endpoint::new("gm", "/api/run/gm", "General Manager"),
                Endpoint::new("waiver", "/api/run/waiver", "Waiver Logic"),
                Endpoint::new("scout", "/api/run/scout", "Scout Logic"),
                Endpoint::new("learning", "/api/run/learning", "Learning"),
                Endpoint::new("decree", "/api/decree", "Council Decree"),
                Endpoint::new("season", "/api/season", "Season Outlook"),
                Endpoint::new("health", "/api/health", "Health"),
            ],
            Profile::Full => vec![
                Endpoint::new("head_coach", "/api/run/head_coach", "Head Coach"),
                Endpoint::new(
                    "general_manager",
                    "/api/run/general_manager",
                    "General Manager",
                ),
                Endpoint::new("waiver", "/api/run/waiver", "Waiver Logic"),
                Endpoint::new("scout", "/api/run/scout", "Scout Logic"),
                Endpoint::new("learning", "/api/run/learning", "Learning"),
                Endpoint::new("defense", "/api/run/defense", "Defense"),
                Endpoint::new("psycho", "/api/run/psycho", "Psycho"),
                Endpoint::new("nightly", "/api/run/nightly", "Nightly"),
                Endpoint::new("trade", "/api/run/trade", "Trade"),
                Endpoint::new("decree", "/api/decree", "Council Decree"),
                Endpoint::new("season", "/api/season", "Season Outlook"),
                Endpoint::new("health", "/api/health", "Health"),
            ],
            Profile::Combined => vec![Endpoint::new("all", "/api/run/all", "All Reports")],
            Profile::Custom => Vec::new(),
        };
        Self { profile, endpoints }
    }

    /// Wraps an explicit endpoint list as a [`Profile::Custom`] set.
    pub fn custom(endpoints: Vec<Endpoint>) -> Self {
        Self {
            profile: Profile::Custom,
            endpoints,
        }
    }

    /// The profile this set was built from.
    pub fn profile(&self) -> Profile {
        self.profile
    }

    /// Endpoints in display order.
    pub fn endpoints(&self) -> &[Endpoint] {
        &self.endpoints
    }

    /// Number of endpoints in the set.
    pub fn len(&self) -> usize {
        self.endpoints.len()
    }

    /// Returns `true` if the set has no endpoints.
    pub fn is_empty(&self) -> bool {
        self.endpoints.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_links_profile_matches_web_ui_links_plus_health() {
        let set = EndpointSet::for_profile(Profile::Links);
        let paths: Vec<&str> = set.endpoints().iter().map(|e| e.path.as_str()).collect();
        assert_eq!(
            paths,
            vec![
                "/api/run/head_coach",
                "/api/run/gm",
                "/api/run/waiver",
                "/api/run/scout",
                "/api/run/learning",
                "/api/decree",
                "/api/season",
                "/api/health",
            ]
        );
    }

    #[test]
    fn test_full_profile_excludes_aggregate() {
        let set = EndpointSet::for_profile(Profile::Full);
        assert_eq!(set.len(), 12);
        assert!(set.endpoints().iter().all(|e| e.path != "/api/run/all"));
        assert!(set
            .endpoints()
            .iter()
            .any(|e| e.path == "/api/run/general_manager"));
    }

    #[test]
    fn test_combined_profile_is_single_request() {
        let set = EndpointSet::for_profile(Profile::Combined);
        assert_eq!(set.len(), 1);
        assert_eq!(set.endpoints()[0].path, "/api/run/all");
    }

    #[test]
    fn test_custom_profile_builtin_is_empty() {
        let set = EndpointSet::for_profile(Profile::Custom);
        assert!(set.is_empty());
        assert_eq!(set.profile(), Profile::Custom);
    }

    #[test]
    fn test_builtin_ids_unique_and_paths_rooted() {
        for profile in [Profile::Links, Profile::Full, Profile::Combined] {
            let set = EndpointSet::for_profile(profile);
            let ids: HashSet<_> = set.endpoints().iter().map(|e| e.id.clone()).collect();
            assert_eq!(ids.len(), set.len(), "duplicate id in {profile}");
            assert!(set.endpoints().iter().all(|e| e.path.starts_with('/')));
        }
    }

    #[test]
    fn test_url_joins_without_double_slash() {
        let ep = Endpoint::new("health", "/api/health", "Health");
        assert_eq!(ep.url("http://localhost:5000/"), "http://localhost:5000/api/health");
        assert_eq!(ep.url("http://localhost:5000"), "http://localhost:5000/api/health");
    }

    #[test]
    fn test_display_title_falls_back_to_id() {
        let ep = Endpoint::new("decree", "/api/decree", "  ");
        assert_eq!(ep.display_title(), "decree");
    }

    #[test]
    fn test_profile_deserializes_lowercase() {
        #[derive(Deserialize)]
        struct Wrap {
            profile: Profile,
        }
        let w: Wrap = toml::from_str("profile = \"combined\"").expect("test: parse");
        assert_eq!(w.profile, Profile::Combined);
    }
}
