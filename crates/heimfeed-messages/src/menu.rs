//! Context menu of a feed entry.

use crate::shell::Shell;

pub const COPY_ADDRESS: &str = "Copy Address";
pub const COPY_ID: &str = "Copy ID";
pub const OPEN_IN_DASHBOARD: &str = "Open in Dashboard";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuAction {
    /// Copies the full `https://` address.
    CopyAddress(String),
    CopyId(String),
    /// Opens the absolute dashboard URL.
    OpenDashboard(String),
}

impl MenuAction {
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            MenuAction::CopyAddress(_) => COPY_ADDRESS,
            MenuAction::CopyId(_) => COPY_ID,
            MenuAction::OpenDashboard(_) => OPEN_IN_DASHBOARD,
        }
    }

    pub fn activate(&self, shell: &dyn Shell) {
        match self {
            MenuAction::CopyAddress(url) => copy_to_clipboard(shell, url, "address"),
            MenuAction::CopyId(id) => copy_to_clipboard(shell, id, "ID"),
            MenuAction::OpenDashboard(url) => shell.open_external(url),
        }
    }
}

fn copy_to_clipboard(shell: &dyn Shell, text: &str, what: &str) {
    shell.write_clipboard(text);
    shell.notify(
        "Copied to Clipboard",
        &format!("Your clipboard now contains the selected {what}."),
    );
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuItem {
    Action(MenuAction),
    Separator,
}

/// Non-empty list of menu items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextMenu {
    items: Vec<MenuItem>,
}

impl ContextMenu {
    /// Builds the menu from the entry's resolved values. Returns `None` when
    /// nothing would be shown.
    #[must_use]
    pub fn build(
        address: Option<&str>,
        identifier: Option<&str>,
        dashboard_url: Option<&str>,
    ) -> Option<Self> {
        let mut items = Vec::new();
        if let Some(address) = address {
            items.push(MenuItem::Action(MenuAction::CopyAddress(format!(
                "https://{address}"
            ))));
        }
        if let Some(id) = identifier {
            items.push(MenuItem::Action(MenuAction::CopyId(id.to_owned())));
        }
        if let Some(url) = dashboard_url {
            if !items.is_empty() {
                items.push(MenuItem::Separator);
            }
            items.push(MenuItem::Action(MenuAction::OpenDashboard(url.to_owned())));
        }
        (!items.is_empty()).then_some(Self { items })
    }

    #[must_use]
    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    /// Action with the given label, if present.
    #[must_use]
    pub fn action(&self, label: &str) -> Option<&MenuAction> {
        self.items.iter().find_map(|item| match item {
            MenuItem::Action(action) if action.label() == label => Some(action),
            _ => None,
        })
    }
}
