//! Kernbausteine für die Darstellung des Aktivitäts-Feeds.
//!
//! Enthält das Event-Modell, die geordnete Feldauflösung, die Altersangaben
//! der Einträge, Dashboard-Links für Deployments und das Renderer-Trait, das
//! `heimfeed-messages` pro Event-Typ implementiert.

pub mod age;
pub mod dashboard;
pub mod error;
pub mod event;
pub mod field;
#[doc(hidden)]
pub mod log;
pub mod render;

pub use age::{format_age, Age, AgeUnit};
pub use dashboard::{DashboardConfig, DashboardLinker, DeploymentHost};
pub use error::{FeedError, Result};
pub use event::{Created, EventUser, FeedEvent, Team, Viewer};
pub use field::{resolve_field, FieldPath};
pub use render::{MessageContext, MessageRenderer};
