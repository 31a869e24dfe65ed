//! Dashboard links for deployment events.
//!
//! A deployment host has the shape `<app>-<id>.<suffix>`. The app name may
//! itself contain hyphens, so the *last* hyphen separates it from the id.

use crate::error::Result;
use crate::event::{FeedEvent, Team, Viewer};
use crate::feed_debug;
use crate::field::{resolve_field, FieldPath};
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Payload fields carrying the deployment host, in priority order.
static HOST_PATHS: [FieldPath; 2] = [
    FieldPath::from_static("deploymentUrl"),
    FieldPath::from_static("url"),
];

/// Event type that gets a dashboard link.
pub const DEPLOYMENT_TYPE: &str = "deployment";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DashboardConfig {
    /// Host suffix of deployment URLs, without the leading dot.
    pub host_suffix: String,
    /// Origin the dashboard path is appended to.
    pub base_url: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            host_suffix: "now.sh".into(),
            base_url: "https://zeit.co".into(),
        }
    }
}

/// Parts of a deployment host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeploymentHost<'h> {
    pub app: &'h str,
    pub id: &'h str,
}

#[derive(Debug, Clone)]
pub struct DashboardLinker {
    pattern: Regex,
    base_url: String,
}

impl DashboardLinker {
    /// Compiles `^(.+)-([^-]+)\.<suffix>$` for the configured suffix.
    ///
    /// # Errors
    /// Returns [`crate::FeedError::Pattern`] if the pattern does not compile.
    pub fn new(config: &DashboardConfig) -> Result<Self> {
        let pattern = Regex::new(&format!(
            r"^(.+)-([^-]+)\.{}$",
            regex::escape(&config.host_suffix)
        ))?;
        Ok(Self {
            pattern,
            base_url: config.base_url.trim_end_matches('/').to_owned(),
        })
    }

    /// Splits `host` into app and short id, or `None` if it does not match.
    #[must_use]
    pub fn split_host<'h>(&self, host: &'h str) -> Option<DeploymentHost<'h>> {
        let captures = self.pattern.captures(host)?;
        let app = captures.get(1)?.as_str();
        let id = captures.get(2)?.as_str();
        (!app.is_empty() && !id.is_empty()).then_some(DeploymentHost { app, id })
    }

    /// Path and query of the dashboard page for a deployment event.
    ///
    /// The handle is the active team's slug, or the viewer's username when no
    /// team is selected.
    #[must_use]
    pub fn dashboard_path(
        &self,
        event: &FeedEvent,
        viewer: &Viewer,
        team: Option<&Team>,
    ) -> Option<String> {
        if event.r#type != DEPLOYMENT_TYPE {
            return None;
        }
        let host = resolve_field(&event.payload, &HOST_PATHS)?.as_str()?;
        if self.split_host(host).is_none() {
            feed_debug!("deployment host {host:?} has no dashboard page");
            return None;
        }

        let handle = team.map_or(viewer.username.as_str(), |team| team.slug.as_str());
        let query = url::form_urlencoded::Serializer::new(String::new())
            .append_pair("handle", handle)
            .append_pair("userId", &viewer.uid)
            .append_pair("host", host)
            .finish();
        Some(format!("/deployment?{query}"))
    }

    /// Absolute dashboard URL, see [`Self::dashboard_path`].
    #[must_use]
    pub fn dashboard_url(
        &self,
        event: &FeedEvent,
        viewer: &Viewer,
        team: Option<&Team>,
    ) -> Option<String> {
        self.dashboard_path(event, viewer, team)
            .map(|path| format!("{}{path}", self.base_url))
    }
}
