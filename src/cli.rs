//! # Module: Command-Line Surface
//!
//! ## Responsibility
//! Connection flags shared by the headless and TUI binaries, and the merge of
//! those flags over the config file.
//!
//! Precedence, highest first: command-line flag, `THANOS_BASE_URL`, config
//! file, built-in default.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Args;
use tracing::info;

use crate::client::{HttpReportSource, ReportSource};
use crate::config::loader::{load_from_file, validate_joined};
use crate::config::DashboardConfig;
use crate::demo::DemoReportSource;
use crate::endpoint::Profile;
use crate::DashboardError;

/// Flags that choose the backend and the endpoint set.
#[derive(Debug, Clone, Default, Args)]
pub struct ConnectArgs {
    /// TOML config file.
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Backend base URL, e.g. http://127.0.0.1:5000.
    #[arg(long, env = "THANOS_BASE_URL", value_name = "URL")]
    pub base_url: Option<String>,

    /// Endpoint set to mount.
    #[arg(long, value_enum)]
    pub profile: Option<Profile>,

    /// Whole-request timeout in milliseconds.
    #[arg(long, value_name = "MS")]
    pub timeout_ms: Option<u64>,

    /// Serve canned reports instead of contacting a backend.
    #[arg(long)]
    pub demo: bool,
}

impl ConnectArgs {
    /// Loads the config file (or defaults) and applies the flags over it.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::Config`] if the file cannot be loaded or the
    /// merged result fails validation.
    pub fn resolve_config(&self) -> Result<DashboardConfig, DashboardError> {
        let mut config = match &self.config {
            Some(path) => load_from_file(path)?,
            None => DashboardConfig::default(),
        };

        if let Some(url) = &self.base_url {
            config.server.base_url = url.clone();
        }
        if let Some(profile) = self.profile {
            config.dashboard.profile = profile;
            if profile != Profile::Custom {
                config.endpoints.clear();
            }
        }
        if let Some(ms) = self.timeout_ms {
            config.server.request_timeout_ms = ms;
        }

        validate_joined(&config)?;
        Ok(config)
    }

    /// Builds the report source the view will mount against.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::Http`] if the HTTP client cannot be built.
    pub fn report_source(
        &self,
        config: &DashboardConfig,
    ) -> Result<Arc<dyn ReportSource>, DashboardError> {
        if self.demo {
            info!("demo mode, no backend contacted");
            return Ok(Arc::new(DemoReportSource::new()));
        }
        let source = HttpReportSource::new(config.server.base_url.clone(), config.timeouts())?;
        Ok(Arc::new(source))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::validation::ConfigError;

    #[test]
    fn test_no_flags_gives_defaults() {
        let cfg = ConnectArgs::default()
            .resolve_config()
            .expect("test: defaults");
        assert_eq!(cfg, DashboardConfig::default());
    }

    #[test]
    fn test_flags_override_file() {
        let dir = tempfile::tempdir().expect("test: tempdir");
        let path = dir.path().join("d.toml");
        std::fs::write(
            &path,
            "[server]\nbase_url = \"http://file:1\"\nrequest_timeout_ms = 500\n",
        )
        .expect("test: write");

        let args = ConnectArgs {
            config: Some(path),
            base_url: Some("http://flag:2".into()),
            profile: Some(Profile::Combined),
            timeout_ms: None,
            demo: false,
        };
        let cfg = args.resolve_config().expect("test: merged");
        assert_eq!(cfg.server.base_url, "http://flag:2");
        assert_eq!(cfg.server.request_timeout_ms, 500);
        assert_eq!(cfg.dashboard.profile, Profile::Combined);
    }

    #[test]
    fn test_builtin_profile_flag_replaces_custom_list() {
        let dir = tempfile::tempdir().expect("test: tempdir");
        let path = dir.path().join("d.toml");
        std::fs::write(
            &path,
            "[dashboard]\nprofile = \"custom\"\n[[endpoints]]\nid = \"x\"\npath = \"/x\"\n",
        )
        .expect("test: write");

        let args = ConnectArgs {
            config: Some(path),
            profile: Some(Profile::Links),
            ..ConnectArgs::default()
        };
        let cfg = args.resolve_config().expect("test: merged");
        assert!(cfg.endpoints.is_empty());
        assert_eq!(cfg.endpoint_set().len(), 8);
    }

    #[test]
    fn test_invalid_override_is_rejected() {
        let args = ConnectArgs {
            timeout_ms: Some(0),
            ..ConnectArgs::default()
        };
        let err = args.resolve_config().unwrap_err();
        assert!(matches!(
            err,
            DashboardError::Config(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_demo_source_origin() {
        let args = ConnectArgs {
            demo: true,
            ..ConnectArgs::default()
        };
        let src = args
            .report_source(&DashboardConfig::default())
            .expect("test: source");
        assert_eq!(src.origin(), "demo");
    }
}
