use heimfeed_core::{MessageContext, MessageRenderer};

pub struct Avatar;

impl MessageRenderer for Avatar {
    fn render(&self, ctx: &MessageContext<'_>) -> String {
        format!("{} updated your avatar", ctx.display_name())
    }
}
