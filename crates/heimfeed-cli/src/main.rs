//! CLI for heimfeed.
//!
//! Renders activity feed events from a JSONL file or stdin, lists the context
//! menu of a rendered entry and triggers its actions against a console shell
//! that prints the side effects instead of performing them.

mod config;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use config::FeedConfig;
use heimfeed_core::{DashboardLinker, FeedEvent};
use heimfeed_messages::{FeedEntry, FeedView, MenuItem, Shell};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;
use tracing_subscriber::EnvFilter;

/// Pseudo menu label for the entry's click behavior.
const CLICK: &str = "click";

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to a JSON config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Viewer uid (overrides config)
    #[arg(long, global = true)]
    uid: Option<String>,

    /// Viewer username (overrides config)
    #[arg(long, global = true)]
    username: Option<String>,

    /// Slug of the active team (overrides config)
    #[arg(long, global = true)]
    team: Option<String>,

    /// Reference time as RFC 3339 (default: current time)
    #[arg(long, global = true)]
    now: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print one line per displayable event: message, tab, age
    Render {
        /// Input file (default: stdin)
        #[arg(long)]
        path: Option<PathBuf>,
    },
    /// Print the context menu of a rendered entry
    Menu {
        /// 0-based position among rendered entries
        #[arg(long)]
        index: usize,

        /// Input file (default: stdin)
        #[arg(long)]
        path: Option<PathBuf>,
    },
    /// Trigger a menu item (or "click") of a rendered entry
    Action {
        /// 0-based position among rendered entries
        #[arg(long)]
        index: usize,

        /// Menu label, e.g. "Copy ID", or "click"
        #[arg(long)]
        item: String,

        /// Input file (default: stdin)
        #[arg(long)]
        path: Option<PathBuf>,
    },
}

/// Prints side effects to stdout.
struct ConsoleShell;

impl Shell for ConsoleShell {
    fn open_external(&self, url: &str) {
        println!("open {url}");
    }

    fn write_clipboard(&self, text: &str) {
        println!("clipboard {text}");
    }

    fn notify(&self, title: &str, body: &str) {
        println!("notify {title}: {body}");
    }
}

fn init_tracing(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

fn read_events(path: Option<&Path>) -> Result<Vec<FeedEvent>> {
    let reader: Box<dyn BufRead> = match path {
        Some(p) => Box::new(BufReader::new(
            File::open(p).with_context(|| format!("Failed to open input {}", p.display()))?,
        )),
        None => Box::new(BufReader::new(io::stdin())),
    };

    let mut events = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let event = FeedEvent::from_json_line(&line)
            .with_context(|| format!("Invalid event on line {}", idx + 1))?;
        events.push(event);
    }
    tracing::debug!(count = events.len(), "events read");
    Ok(events)
}

fn parse_now(now: Option<&str>) -> Result<OffsetDateTime> {
    match now {
        Some(text) => OffsetDateTime::parse(text, &Rfc3339)
            .with_context(|| format!("Invalid --now timestamp: {text}")),
        None => Ok(OffsetDateTime::now_utc()),
    }
}

fn render_line(entry: &FeedEntry) -> String {
    let age = entry
        .age
        .map_or_else(|| "-".to_string(), |age| age.to_string());
    format!("{}\t{age}", entry.message)
}

fn menu_lines(entry: &FeedEntry) -> Vec<String> {
    match entry.context_menu() {
        Some(menu) => menu
            .items()
            .iter()
            .map(|item| match item {
                MenuItem::Action(action) => action.label().to_string(),
                MenuItem::Separator => "---".to_string(),
            })
            .collect(),
        None => vec!["(no menu)".to_string()],
    }
}

fn run_action(entry: &FeedEntry, item: &str, shell: &dyn Shell) -> Result<()> {
    if item.eq_ignore_ascii_case(CLICK) {
        entry.click(shell);
        return Ok(());
    }
    let menu = entry
        .context_menu()
        .context("Entry has no context menu")?;
    let action = menu
        .action(item)
        .with_context(|| format!("Entry has no menu item {item:?}"))?;
    action.activate(shell);
    Ok(())
}

fn select(entries: Vec<FeedEntry>, index: usize) -> Result<FeedEntry> {
    let count = entries.len();
    entries
        .into_iter()
        .nth(index)
        .with_context(|| format!("No rendered entry at index {index} ({count} rendered)"))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = FeedConfig::load(cli.config.as_deref())?;
    config.apply_env();
    config.apply_flags(cli.uid, cli.username, cli.team);
    init_tracing(&config.log_level);

    let now = parse_now(cli.now.as_deref())?;
    let linker = DashboardLinker::new(&config.dashboard).context("Invalid dashboard config")?;
    let view = FeedView::new(config.viewer, config.team, linker);

    match cli.command {
        Commands::Render { path } => {
            let events = read_events(path.as_deref())?;
            let entries = view.entries(&events, now);
            tracing::info!(
                read = events.len(),
                rendered = entries.len(),
                "feed rendered"
            );
            for entry in &entries {
                println!("{}", render_line(entry));
            }
        }
        Commands::Menu { index, path } => {
            let events = read_events(path.as_deref())?;
            let entry = select(view.entries(&events, now), index)?;
            for line in menu_lines(&entry) {
                println!("{line}");
            }
        }
        Commands::Action { index, item, path } => {
            let events = read_events(path.as_deref())?;
            let entry = select(view.entries(&events, now), index)?;
            run_action(&entry, &item, &ConsoleShell)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use heimfeed_core::{DashboardConfig, Viewer};
    use serde_json::json;
    use std::cell::RefCell;

    #[derive(Default)]
    struct Recorder(RefCell<Vec<String>>);

    impl Shell for Recorder {
        fn open_external(&self, url: &str) {
            self.0.borrow_mut().push(format!("open {url}"));
        }
        fn write_clipboard(&self, text: &str) {
            self.0.borrow_mut().push(format!("clipboard {text}"));
        }
        fn notify(&self, title: &str, _body: &str) {
            self.0.borrow_mut().push(format!("notify {title}"));
        }
    }

    fn entry(event: serde_json::Value) -> FeedEntry {
        let event: FeedEvent = serde_json::from_value(event).unwrap();
        let linker = DashboardLinker::new(&DashboardConfig::default()).unwrap();
        let view = FeedView::new(
            Viewer {
                uid: "u_1".into(),
                username: "ada".into(),
            },
            None,
            linker,
        );
        view.entry(&event, parse_now(Some("2024-06-15T12:00:00Z")).unwrap())
            .unwrap()
    }

    #[test]
    fn render_line_uses_dash_without_age() {
        let e = entry(json!({"type": "login"}));
        assert_eq!(render_line(&e), "Someone logged in\t-");
    }

    #[test]
    fn menu_lines_for_entry_without_menu() {
        let e = entry(json!({"type": "avatar"}));
        assert_eq!(menu_lines(&e), vec!["(no menu)".to_string()]);
    }

    #[test]
    fn run_action_copies_address() {
        let e = entry(json!({"type": "alias", "payload": {"alias": "docs.example.com"}}));
        let shell = Recorder::default();
        run_action(&e, "Copy Address", &shell).unwrap();
        assert_eq!(
            shell.0.into_inner(),
            vec![
                "clipboard https://docs.example.com".to_string(),
                "notify Copied to Clipboard".to_string(),
            ]
        );
    }

    #[test]
    fn run_action_rejects_unknown_item() {
        let e = entry(json!({"type": "alias", "payload": {"alias": "docs.example.com"}}));
        let err = run_action(&e, "Open in Dashboard", &Recorder::default()).unwrap_err();
        assert!(err.to_string().contains("no menu item"));
    }

    #[test]
    fn parse_now_rejects_garbage() {
        assert!(parse_now(Some("noon")).is_err());
    }

    #[test]
    fn select_reports_out_of_range() {
        let err = select(Vec::new(), 3).unwrap_err();
        assert!(err.to_string().contains("index 3"));
    }
}
