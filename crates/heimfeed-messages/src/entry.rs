//! A rendered feed entry and its interactions.

use crate::kind::EventKind;
use crate::menu::ContextMenu;
use crate::registry::lookup;
use crate::shell::Shell;
use heimfeed_core::{format_age, Age, DashboardLinker, FeedEvent, MessageContext, Team, Viewer};
use time::OffsetDateTime;

/// Everything the presentation layer needs to show one event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedEntry {
    pub kind: EventKind,
    pub message: String,
    /// `None` for missing timestamps and for events a year or older.
    pub age: Option<Age>,
    /// Address without scheme.
    pub address: Option<String>,
    pub identifier: Option<String>,
    pub dashboard_url: Option<String>,
}

impl FeedEntry {
    /// Renders `event`, or returns `None` if its type has no renderer.
    #[must_use]
    pub fn build(
        event: &FeedEvent,
        viewer: &Viewer,
        team: Option<&Team>,
        linker: &DashboardLinker,
        now: OffsetDateTime,
    ) -> Option<Self> {
        let (kind, renderer) = lookup(&event.r#type)?;
        let ctx = MessageContext::new(event, viewer, team);

        Some(Self {
            kind,
            message: renderer.render(&ctx),
            age: format_age(now, event.created_at()),
            address: event.address(),
            identifier: event.identifier(),
            dashboard_url: linker.dashboard_url(event, viewer, team),
        })
    }

    /// Message followed by the age, if there is one.
    #[must_use]
    pub fn caption(&self) -> String {
        match self.age {
            Some(age) => format!("{} {age}", self.message),
            None => self.message.clone(),
        }
    }

    /// Opens the entry's address. Entries without an address ignore clicks.
    pub fn click(&self, shell: &dyn Shell) {
        if let Some(address) = &self.address {
            shell.open_external(&format!("https://{address}"));
        }
    }

    #[must_use]
    pub fn context_menu(&self) -> Option<ContextMenu> {
        ContextMenu::build(
            self.address.as_deref(),
            self.identifier.as_deref(),
            self.dashboard_url.as_deref(),
        )
    }
}

/// Renders whole feeds for one viewer.
#[derive(Debug, Clone)]
pub struct FeedView {
    viewer: Viewer,
    team: Option<Team>,
    linker: DashboardLinker,
}

impl FeedView {
    #[must_use]
    pub fn new(viewer: Viewer, team: Option<Team>, linker: DashboardLinker) -> Self {
        Self {
            viewer,
            team,
            linker,
        }
    }

    #[must_use]
    pub fn entry(&self, event: &FeedEvent, now: OffsetDateTime) -> Option<FeedEntry> {
        FeedEntry::build(event, &self.viewer, self.team.as_ref(), &self.linker, now)
    }

    /// Entries for all displayable events, in feed order.
    #[must_use]
    pub fn entries(&self, events: &[FeedEvent], now: OffsetDateTime) -> Vec<FeedEntry> {
        events
            .iter()
            .filter_map(|event| self.entry(event, now))
            .collect()
    }
}
