use super::field_or;
use heimfeed_core::{MessageContext, MessageRenderer};

pub struct TeamMemberAdd;

impl MessageRenderer for TeamMemberAdd {
    fn render(&self, ctx: &MessageContext<'_>) -> String {
        let member = field_or(
            ctx,
            &["invitedUser.username", "invitedEmail"],
            "a new member",
        );
        format!("{} invited {member} to the team", ctx.display_name())
    }
}

pub struct TeamMemberDelete;

impl MessageRenderer for TeamMemberDelete {
    fn render(&self, ctx: &MessageContext<'_>) -> String {
        let member = field_or(ctx, &["deletedUser.username"], "a member");
        format!("{} removed {member} from the team", ctx.display_name())
    }
}

pub struct TeamNameUpdate;

impl MessageRenderer for TeamNameUpdate {
    fn render(&self, ctx: &MessageContext<'_>) -> String {
        match ctx.text("name") {
            Some(name) => format!("{} renamed the team to {name}", ctx.display_name()),
            None => format!("{} renamed the team", ctx.display_name()),
        }
    }
}

pub struct TeamSlugUpdate;

impl MessageRenderer for TeamSlugUpdate {
    fn render(&self, ctx: &MessageContext<'_>) -> String {
        match ctx.text("slug") {
            Some(slug) => format!("{} changed the team URL to {slug}", ctx.display_name()),
            None => format!("{} changed the team URL", ctx.display_name()),
        }
    }
}
