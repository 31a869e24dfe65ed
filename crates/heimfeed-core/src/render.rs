use crate::event::{FeedEvent, Team, Viewer};

/// Everything a message renderer may look at.
#[derive(Debug, Clone, Copy)]
pub struct MessageContext<'a> {
    pub event: &'a FeedEvent,
    pub viewer: &'a Viewer,
    pub team: Option<&'a Team>,
}

impl<'a> MessageContext<'a> {
    #[must_use]
    pub fn new(event: &'a FeedEvent, viewer: &'a Viewer, team: Option<&'a Team>) -> Self {
        Self {
            event,
            viewer,
            team,
        }
    }

    /// Whether the viewer triggered the event.
    #[must_use]
    pub fn is_own(&self) -> bool {
        !self.viewer.uid.is_empty() && self.event.user_id.as_deref() == Some(self.viewer.uid.as_str())
    }

    /// "You" for the viewer's own events, otherwise the actor's username.
    #[must_use]
    pub fn display_name(&self) -> String {
        if self.is_own() {
            return "You".into();
        }
        self.event
            .user
            .as_ref()
            .and_then(|user| user.username.clone())
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| "Someone".into())
    }

    /// Shorthand for [`FeedEvent::payload_text`].
    #[must_use]
    pub fn text(&self, dotted: &str) -> Option<String> {
        self.event.payload_text(dotted)
    }
}

/// Formats the one-line description of a feed event.
pub trait MessageRenderer: Send + Sync {
    fn render(&self, ctx: &MessageContext<'_>) -> String;
}
