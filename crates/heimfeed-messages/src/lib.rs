//! Darstellung einzelner Feed-Einträge.
//!
//! Jeder unterstützte Event-Typ ([`EventKind`]) hat genau einen Renderer, der
//! eine einzeilige Beschreibung erzeugt. [`FeedEntry`] kombiniert diese mit
//! Altersangabe, Adresse, Kennung und Dashboard-Link und beschreibt Klick und
//! Kontextmenü als Daten. Seiteneffekte laufen über das [`Shell`]-Trait des
//! Hosts.

pub mod entry;
pub mod kind;
pub mod menu;
pub mod messages;
pub mod registry;
pub mod shell;

pub use entry::{FeedEntry, FeedView};
pub use kind::EventKind;
pub use menu::{ContextMenu, MenuAction, MenuItem};
pub use registry::{lookup_renderer, renderer_for};
pub use shell::Shell;
