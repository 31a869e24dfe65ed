//! Datenstrukturen für Einträge des Aktivitäts-Feeds.
//!
//! Ein [`FeedEvent`] ist ein einzelner Eintrag, wie ihn die Feed-API liefert:
//! ein Typ-Tag, ein Erstellungszeitpunkt und ein `payload`, dessen Aufbau vom
//! Typ abhängt. Events werden nur gelesen, nie verändert.

use crate::error::Result;
use crate::field::{display_value, lookup, resolve_field, FieldPath};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

/// Kandidaten für die kanonische Kennung eines Events ("Copy ID"),
/// relativ zum `payload` und in absteigender Priorität.
pub static IDENTIFIER_PATHS: [FieldPath; 4] = [
    FieldPath::from_static("deletedUser.username"),
    FieldPath::from_static("slug"),
    FieldPath::from_static("aliasId"),
    FieldPath::from_static("deploymentId"),
];

/// Kandidaten für die Adresse eines Events (Klick, "Copy Address"),
/// relativ zum `payload` und in absteigender Priorität.
pub static ADDRESS_PATHS: [FieldPath; 5] = [
    FieldPath::from_static("cn"),
    FieldPath::from_static("alias"),
    FieldPath::from_static("url"),
    FieldPath::from_static("domain"),
    FieldPath::from_static("deploymentUrl"),
];

/// Ein Eintrag des Aktivitäts-Feeds.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FeedEvent {
    /// Kennung des Eintrags, sofern die API eine liefert.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Typ-Tag, z. B. "avatar" oder "deployment". Bestimmt den Renderer.
    pub r#type: String,
    /// Erstellungszeitpunkt; fehlt er oder ist er unlesbar, entfällt die
    /// Altersangabe.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<Created>,
    /// `uid` des auslösenden Benutzers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    /// Auslösender Benutzer, soweit mitgeliefert.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<EventUser>,
    /// Typabhängige Nutzdaten.
    #[serde(default = "empty_payload")]
    pub payload: Value,
}

fn empty_payload() -> Value {
    Value::Object(Map::new())
}

/// Zeitstempel in einer der beiden Formen, die der Feed liefert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum Created {
    /// Millisekunden seit der Unix-Epoche.
    Millis(i64),
    /// RFC-3339-Text.
    Text(String),
    /// Alles andere (Gleitkommazahlen, Werte jenseits von `i64`, Objekte).
    /// Dekodiert immer; nur endliche Zahlen ergeben einen Zeitpunkt.
    Other(Value),
}

impl Created {
    /// Liefert den Zeitpunkt oder `None`, falls der Wert nicht lesbar ist.
    #[must_use]
    pub fn to_datetime(&self) -> Option<OffsetDateTime> {
        match self {
            Created::Millis(ms) => {
                OffsetDateTime::from_unix_timestamp_nanos(i128::from(*ms) * 1_000_000).ok()
            }
            Created::Text(text) => OffsetDateTime::parse(text, &Rfc3339).ok(),
            Created::Other(value) => {
                let ms = value.as_f64().filter(|ms| ms.is_finite())?;
                #[allow(clippy::cast_possible_truncation)]
                let nanos = (ms * 1_000_000.0) as i128;
                OffsetDateTime::from_unix_timestamp_nanos(nanos).ok()
            }
        }
    }
}

/// Benutzerangaben innerhalb eines Events.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct EventUser {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

/// Der angemeldete Benutzer, für den der Feed dargestellt wird.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Viewer {
    pub uid: String,
    pub username: String,
}

/// Das gerade aktive Team, falls der Feed eines Teams gezeigt wird.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Team {
    pub slug: String,
}

impl FeedEvent {
    /// Dekodiert eine JSONL-Zeile.
    ///
    /// # Errors
    /// Liefert [`crate::FeedError::Json`], wenn die Zeile kein gültiges Event ist.
    pub fn from_json_line(line: &str) -> Result<Self> {
        Ok(serde_json::from_str(line)?)
    }

    /// Erstellungszeitpunkt, sofern vorhanden und lesbar.
    #[must_use]
    pub fn created_at(&self) -> Option<OffsetDateTime> {
        let created = self.created.as_ref()?;
        let parsed = created.to_datetime();
        if parsed.is_none() {
            crate::feed_warn!("unreadable created timestamp {:?} on {} event", created, self.r#type);
        }
        parsed
    }

    /// Kennung für "Copy ID", siehe [`IDENTIFIER_PATHS`].
    #[must_use]
    pub fn identifier(&self) -> Option<String> {
        resolve_field(&self.payload, &IDENTIFIER_PATHS).map(display_value)
    }

    /// Adresse ohne Schema, siehe [`ADDRESS_PATHS`].
    #[must_use]
    pub fn address(&self) -> Option<String> {
        resolve_field(&self.payload, &ADDRESS_PATHS).map(display_value)
    }

    /// Textwert eines Payload-Felds (Punktnotation), falls vorhanden und
    /// nicht leer.
    #[must_use]
    pub fn payload_text(&self, dotted: &str) -> Option<String> {
        lookup(&self.payload, dotted)
            .filter(|value| crate::field::is_truthy(value))
            .map(display_value)
    }
}
