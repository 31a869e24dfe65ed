use super::field_or;
use heimfeed_core::{MessageContext, MessageRenderer};

pub struct Alias;

impl MessageRenderer for Alias {
    fn render(&self, ctx: &MessageContext<'_>) -> String {
        let alias = field_or(ctx, &["alias"], "an alias");
        match ctx.text("deploymentUrl") {
            Some(target) => format!("{} aliased {target} to {alias}", ctx.display_name()),
            None => format!("{} configured {alias}", ctx.display_name()),
        }
    }
}

pub struct AliasDelete;

impl MessageRenderer for AliasDelete {
    fn render(&self, ctx: &MessageContext<'_>) -> String {
        let alias = field_or(ctx, &["alias"], "an alias");
        format!("{} removed the alias {alias}", ctx.display_name())
    }
}

pub struct AliasChown;

impl MessageRenderer for AliasChown {
    fn render(&self, ctx: &MessageContext<'_>) -> String {
        let alias = field_or(ctx, &["alias"], "an alias");
        match ctx.text("newTeam.slug").or_else(|| ctx.text("newUser.username")) {
            Some(owner) => format!("{} moved the alias {alias} to {owner}", ctx.display_name()),
            None => format!("{} changed the owner of {alias}", ctx.display_name()),
        }
    }
}
