//! Feed entries end to end: dispatch, age, click and context menu.

use heimfeed_core::{DashboardConfig, DashboardLinker, FeedEvent, Team, Viewer};
use heimfeed_messages::menu::{COPY_ADDRESS, COPY_ID, OPEN_IN_DASHBOARD};
use heimfeed_messages::{EventKind, FeedEntry, FeedView, MenuItem, Shell};
use serde_json::json;
use std::cell::RefCell;
use time::macros::datetime;
use time::{Duration, OffsetDateTime};

const NOW: OffsetDateTime = datetime!(2024-06-15 12:00:00 UTC);

#[derive(Default)]
struct RecordingShell {
    calls: RefCell<Vec<String>>,
}

impl Shell for RecordingShell {
    fn open_external(&self, url: &str) {
        self.calls.borrow_mut().push(format!("open {url}"));
    }
    fn write_clipboard(&self, text: &str) {
        self.calls.borrow_mut().push(format!("clipboard {text}"));
    }
    fn notify(&self, title: &str, body: &str) {
        self.calls.borrow_mut().push(format!("notify {title}: {body}"));
    }
}

fn viewer() -> Viewer {
    Viewer {
        uid: "u_1".into(),
        username: "ada".into(),
    }
}

fn view(team: Option<Team>) -> FeedView {
    let linker = DashboardLinker::new(&DashboardConfig::default()).expect("pattern compiles");
    FeedView::new(viewer(), team, linker)
}

fn event(value: serde_json::Value) -> FeedEvent {
    serde_json::from_value(value).expect("Deserialization failed")
}

fn rfc3339(at: OffsetDateTime) -> String {
    at.format(&time::format_description::well_known::Rfc3339)
        .expect("formattable")
}

#[test]
fn avatar_event_one_hour_old() {
    let avatar = event(json!({
        "type": "avatar",
        "created": rfc3339(NOW - Duration::seconds(3600)),
        "userId": "u_1",
        "payload": {}
    }));

    let entry = view(None).entry(&avatar, NOW).expect("avatar is rendered");
    assert_eq!(entry.kind, EventKind::Avatar);
    assert_eq!(entry.message, "You updated your avatar");
    assert_eq!(entry.caption(), "You updated your avatar 1h");
    assert_eq!(entry.context_menu(), None);
}

#[test]
fn unknown_types_are_skipped() {
    let unknown = event(json!({"type": "unknown-type", "payload": {"url": "x.now.sh"}}));
    assert!(view(None).entry(&unknown, NOW).is_none());
}

#[test]
fn old_events_have_no_age() {
    let old = event(json!({"type": "login", "created": "2022-01-01T00:00:00Z"}));
    let entry = view(None).entry(&old, NOW).expect("login is rendered");
    assert_eq!(entry.age, None);
    assert_eq!(entry.caption(), entry.message);
}

#[test]
fn deployment_menu_copies_and_opens_dashboard() {
    let deployment = event(json!({
        "type": "deployment",
        "created": rfc3339(NOW - Duration::seconds(30)),
        "user": {"username": "bob"},
        "payload": {"deploymentId": "dpl_abc", "url": "my-app-abc123.now.sh"}
    }));
    let entry = view(Some(Team { slug: "acme".into() }))
        .entry(&deployment, NOW)
        .expect("deployment is rendered");
    assert_eq!(entry.caption(), "bob deployed my-app-abc123.now.sh 30s");

    let menu = entry.context_menu().expect("menu");
    let labels: Vec<_> = menu
        .items()
        .iter()
        .map(|item| match item {
            MenuItem::Action(action) => action.label(),
            MenuItem::Separator => "---",
        })
        .collect();
    assert_eq!(labels, [COPY_ADDRESS, COPY_ID, "---", OPEN_IN_DASHBOARD]);

    let shell = RecordingShell::default();
    menu.action(COPY_ID).expect("copy id").activate(&shell);
    menu.action(OPEN_IN_DASHBOARD).expect("dashboard").activate(&shell);
    entry.click(&shell);

    assert_eq!(
        shell.calls.into_inner(),
        [
            "clipboard dpl_abc",
            "notify Copied to Clipboard: Your clipboard now contains the selected ID.",
            "open https://zeit.co/deployment?handle=acme&userId=u_1&host=my-app-abc123.now.sh",
            "open https://my-app-abc123.now.sh",
        ]
    );
}

#[test]
fn entries_without_address_ignore_clicks() {
    let entry = FeedEntry::build(
        &event(json!({"type": "plan", "payload": {"plan": "pro"}})),
        &viewer(),
        None,
        &DashboardLinker::new(&DashboardConfig::default()).expect("pattern compiles"),
        NOW,
    )
    .expect("plan is rendered");
    let shell = RecordingShell::default();
    entry.click(&shell);
    assert!(shell.calls.into_inner().is_empty());
}

#[test]
fn fixture_feed_renders_known_events_in_order() {
    let events: Vec<FeedEvent> = include_str!("../../../tests/fixtures/feed.jsonl")
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| FeedEvent::from_json_line(line).expect("fixture line"))
        .collect();
    assert_eq!(events.len(), 5);

    let captions: Vec<String> = view(None)
        .entries(&events, NOW)
        .iter()
        .map(FeedEntry::caption)
        .collect();
    assert_eq!(
        captions,
        [
            "You updated your avatar 1h",
            "bob deployed my-app-abc123.now.sh 30s",
            "You issued a certificate for example.com 3w",
            "You removed carol from the team",
        ]
    );
}
