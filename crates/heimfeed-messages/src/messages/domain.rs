use super::field_or;
use heimfeed_core::{MessageContext, MessageRenderer};

pub struct Domain;

impl MessageRenderer for Domain {
    fn render(&self, ctx: &MessageContext<'_>) -> String {
        let name = field_or(ctx, &["name", "domain"], "a domain");
        format!("{} added the domain {name}", ctx.display_name())
    }
}

pub struct DomainBuy;

impl MessageRenderer for DomainBuy {
    fn render(&self, ctx: &MessageContext<'_>) -> String {
        let name = field_or(ctx, &["name", "domain"], "a domain");
        format!("{} bought the domain {name}", ctx.display_name())
    }
}

pub struct DomainDelete;

impl MessageRenderer for DomainDelete {
    fn render(&self, ctx: &MessageContext<'_>) -> String {
        let name = field_or(ctx, &["name", "domain"], "a domain");
        format!("{} removed the domain {name}", ctx.display_name())
    }
}

pub struct Dns;

impl MessageRenderer for Dns {
    fn render(&self, ctx: &MessageContext<'_>) -> String {
        let domain = field_or(ctx, &["domain"], "a domain");
        match ctx.text("type") {
            Some(record) => format!("{} added a {record} record to {domain}", ctx.display_name()),
            None => format!("{} added a DNS record to {domain}", ctx.display_name()),
        }
    }
}

pub struct DnsDelete;

impl MessageRenderer for DnsDelete {
    fn render(&self, ctx: &MessageContext<'_>) -> String {
        let domain = field_or(ctx, &["domain"], "a domain");
        format!("{} removed a DNS record from {domain}", ctx.display_name())
    }
}

pub struct Cert;

impl MessageRenderer for Cert {
    fn render(&self, ctx: &MessageContext<'_>) -> String {
        let cn = field_or(ctx, &["cn"], "a domain");
        format!("{} issued a certificate for {cn}", ctx.display_name())
    }
}

pub struct CertAutorenew;

impl MessageRenderer for CertAutorenew {
    fn render(&self, ctx: &MessageContext<'_>) -> String {
        let cn = field_or(ctx, &["cn"], "a certificate");
        let enabled = ctx
            .event
            .payload
            .get("autoRenew")
            .and_then(serde_json::Value::as_bool)
            .unwrap_or(true);
        let verb = if enabled { "enabled" } else { "disabled" };
        format!("{} {verb} automatic renewal for {cn}", ctx.display_name())
    }
}

pub struct CertDelete;

impl MessageRenderer for CertDelete {
    fn render(&self, ctx: &MessageContext<'_>) -> String {
        let cn = field_or(ctx, &["cn"], "a domain");
        format!("{} deleted the certificate for {cn}", ctx.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use heimfeed_core::{FeedEvent, Viewer};
    use serde_json::json;

    fn render(renderer: &dyn MessageRenderer, payload: serde_json::Value) -> String {
        let viewer = Viewer {
            uid: "u1".into(),
            username: "ada".into(),
        };
        let event: FeedEvent =
            serde_json::from_value(json!({"type": "cert", "userId": "u1", "payload": payload}))
                .expect("event");
        renderer.render(&MessageContext::new(&event, &viewer, None))
    }

    #[test]
    fn dns_names_record_type() {
        let line = render(&Dns, json!({"domain": "example.com", "type": "CNAME"}));
        assert_eq!(line, "You added a CNAME record to example.com");
    }

    #[test]
    fn autorenew_reflects_flag() {
        let line = render(&CertAutorenew, json!({"cn": "example.com", "autoRenew": false}));
        assert_eq!(line, "You disabled automatic renewal for example.com");
        let line = render(&CertAutorenew, json!({"cn": "example.com"}));
        assert_eq!(line, "You enabled automatic renewal for example.com");
    }
}
