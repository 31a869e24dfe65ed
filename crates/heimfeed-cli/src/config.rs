//! Configuration file and environment overrides.

use anyhow::{Context, Result};
use heimfeed_core::{DashboardConfig, Team, Viewer};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs::File;
use std::path::Path;

pub const ENV_DASHBOARD_BASE_URL: &str = "HEIMFEED_DASHBOARD_BASE_URL";
pub const ENV_HOST_SUFFIX: &str = "HEIMFEED_HOST_SUFFIX";

#[derive(Serialize, Deserialize, Debug, PartialEq)]
#[serde(default)]
pub struct FeedConfig {
    pub dashboard: DashboardConfig,
    pub viewer: Viewer,
    pub team: Option<Team>,
    /// Filter directive used when `RUST_LOG` is unset.
    pub log_level: String,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            dashboard: DashboardConfig::default(),
            viewer: Viewer::default(),
            team: None,
            log_level: "warn".into(),
        }
    }
}

impl FeedConfig {
    /// Reads the config file, or returns defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let file =
            File::open(path).with_context(|| format!("Failed to open config {}", path.display()))?;
        serde_json::from_reader(file)
            .with_context(|| format!("Failed to parse config {}", path.display()))
    }

    /// Applies `HEIMFEED_*` environment variables on top of the file values.
    pub fn apply_env(&mut self) {
        if let Ok(base_url) = env::var(ENV_DASHBOARD_BASE_URL) {
            self.dashboard.base_url = base_url;
        }
        if let Ok(suffix) = env::var(ENV_HOST_SUFFIX) {
            self.dashboard.host_suffix = suffix;
        }
    }

    /// Applies command line flags, which win over file and environment.
    pub fn apply_flags(
        &mut self,
        uid: Option<String>,
        username: Option<String>,
        team: Option<String>,
    ) {
        if let Some(uid) = uid {
            self.viewer.uid = uid;
        }
        if let Some(username) = username {
            self.viewer.username = username;
        }
        if let Some(slug) = team {
            self.team = Some(Team { slug });
        }
    }
}
