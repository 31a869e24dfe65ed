use super::field_or;
use heimfeed_core::{MessageContext, MessageRenderer};

pub struct SecretAdd;

impl MessageRenderer for SecretAdd {
    fn render(&self, ctx: &MessageContext<'_>) -> String {
        let name = field_or(ctx, &["name"], "a secret");
        format!("{} added the secret {name}", ctx.display_name())
    }
}

pub struct SecretDelete;

impl MessageRenderer for SecretDelete {
    fn render(&self, ctx: &MessageContext<'_>) -> String {
        let name = field_or(ctx, &["name"], "a secret");
        format!("{} removed the secret {name}", ctx.display_name())
    }
}

pub struct SecretRename;

impl MessageRenderer for SecretRename {
    fn render(&self, ctx: &MessageContext<'_>) -> String {
        match (ctx.text("oldName"), ctx.text("newName")) {
            (Some(old), Some(new)) => {
                format!("{} renamed the secret {old} to {new}", ctx.display_name())
            }
            _ => format!("{} renamed a secret", ctx.display_name()),
        }
    }
}
