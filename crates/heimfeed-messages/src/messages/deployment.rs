use super::field_or;
use heimfeed_core::{MessageContext, MessageRenderer};

const URL_FIELDS: &[&str] = &["url", "deploymentUrl"];

pub struct Deployment;

impl MessageRenderer for Deployment {
    fn render(&self, ctx: &MessageContext<'_>) -> String {
        let url = field_or(ctx, URL_FIELDS, "a deployment");
        format!("{} deployed {url}", ctx.display_name())
    }
}

pub struct DeploymentDelete;

impl MessageRenderer for DeploymentDelete {
    fn render(&self, ctx: &MessageContext<'_>) -> String {
        let url = field_or(ctx, URL_FIELDS, "a deployment");
        format!("{} deleted {url}", ctx.display_name())
    }
}

pub struct DeploymentUnfreeze;

impl MessageRenderer for DeploymentUnfreeze {
    fn render(&self, ctx: &MessageContext<'_>) -> String {
        let url = field_or(ctx, URL_FIELDS, "a deployment");
        format!("{} unfroze {url}", ctx.display_name())
    }
}

pub struct Scale;

impl MessageRenderer for Scale {
    fn render(&self, ctx: &MessageContext<'_>) -> String {
        let url = field_or(ctx, URL_FIELDS, "a deployment");
        let (min, max) = (ctx.text("min"), ctx.text("max"));
        match (min, max) {
            (Some(min), Some(max)) if min == max => {
                format!("{} scaled {url} to {min} instances", ctx.display_name())
            }
            (Some(min), Some(max)) => {
                format!("{} scaled {url} to {min}-{max} instances", ctx.display_name())
            }
            _ => format!("{} scaled {url}", ctx.display_name()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use heimfeed_core::{FeedEvent, Viewer};
    use serde_json::json;

    fn render(renderer: &dyn MessageRenderer, payload: serde_json::Value) -> String {
        let viewer = Viewer::default();
        let event: FeedEvent = serde_json::from_value(json!({
            "type": "deployment",
            "user": {"username": "bob"},
            "payload": payload
        }))
        .expect("event");
        renderer.render(&MessageContext::new(&event, &viewer, None))
    }

    #[test]
    fn deployment_prefers_url_over_deployment_url() {
        let line = render(
            &Deployment,
            json!({"url": "a-1.now.sh", "deploymentUrl": "b-2.now.sh"}),
        );
        assert_eq!(line, "bob deployed a-1.now.sh");
    }

    #[test]
    fn missing_url_reads_naturally() {
        assert_eq!(render(&DeploymentDelete, json!({})), "bob deleted a deployment");
    }

    #[test]
    fn scale_mentions_instance_range() {
        let line = render(&Scale, json!({"url": "a-1.now.sh", "min": 1, "max": 3}));
        assert_eq!(line, "bob scaled a-1.now.sh to 1-3 instances");
        let line = render(&Scale, json!({"url": "a-1.now.sh", "min": 2, "max": 2}));
        assert_eq!(line, "bob scaled a-1.now.sh to 2 instances");
    }
}
