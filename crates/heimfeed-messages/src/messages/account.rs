use super::field_or;
use heimfeed_core::{MessageContext, MessageRenderer};

pub struct Username;

impl MessageRenderer for Username {
    fn render(&self, ctx: &MessageContext<'_>) -> String {
        match ctx.text("username") {
            Some(username) => format!("{} set the username to {username}", ctx.display_name()),
            None => format!("{} changed the username", ctx.display_name()),
        }
    }
}

pub struct Login;

impl MessageRenderer for Login {
    fn render(&self, ctx: &MessageContext<'_>) -> String {
        let origin = ctx
            .text("userAgent.os.name")
            .or_else(|| ctx.text("env"));
        match origin {
            Some(origin) => format!("{} logged in from {origin}", ctx.display_name()),
            None => format!("{} logged in", ctx.display_name()),
        }
    }
}

pub struct Plan;

impl MessageRenderer for Plan {
    fn render(&self, ctx: &MessageContext<'_>) -> String {
        let plan = field_or(ctx, &["plan"], "a new");
        format!("{} switched to the {plan} plan", ctx.display_name())
    }
}
