// Data models for card table resources
//
// These structs map to the JSON resources the service returns. Resources are
// remote-owned: we never construct them locally, so deserialization is
// deliberately lenient. Serde ignores extra fields and defaults optional
// ones, making the models robust to server-side additions.

use crate::error::Error;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A kanban board within a bucket (project). Read-only from this surface:
/// card tables are fetched, never created here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardTable {
    pub id: u64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub url: Option<String>,
    /// The columns of the board. The service calls these "lists" in payloads.
    #[serde(default, alias = "lists")]
    pub columns: Vec<Column>,
}

/// A list/stage within a card table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Column {
    pub id: u64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub color: Option<Color>,
    #[serde(default)]
    pub position: Option<i64>,
    #[serde(default)]
    pub on_hold: Option<bool>,
    #[serde(default)]
    pub cards_count: Option<u64>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub url: Option<String>,
}

/// A task within a column.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Card {
    pub id: u64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub due_on: Option<NaiveDate>,
    #[serde(default)]
    pub assignee_ids: Vec<u64>,
    #[serde(default)]
    pub completed: Option<bool>,
    #[serde(default)]
    pub steps: Vec<Step>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub url: Option<String>,
}

/// A sub-task checklist item within a card.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Step {
    pub id: u64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub due_on: Option<NaiveDate>,
    #[serde(default)]
    pub assignee_ids: Vec<u64>,
    #[serde(default)]
    pub completed: Option<bool>,
    #[serde(default)]
    pub position: Option<i64>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// The fixed column color palette the service accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    White,
    Red,
    Orange,
    Yellow,
    Green,
    Blue,
    Aqua,
    Purple,
    Gray,
    Pink,
    Brown,
}

impl Color {
    /// All palette entries, in the order the service documents them.
    pub const ALL: [Color; 11] = [
        Color::White,
        Color::Red,
        Color::Orange,
        Color::Yellow,
        Color::Green,
        Color::Blue,
        Color::Aqua,
        Color::Purple,
        Color::Gray,
        Color::Pink,
        Color::Brown,
    ];

    /// The wire representation of this color.
    pub fn as_str(&self) -> &'static str {
        match self {
            Color::White => "white",
            Color::Red => "red",
            Color::Orange => "orange",
            Color::Yellow => "yellow",
            Color::Green => "green",
            Color::Blue => "blue",
            Color::Aqua => "aqua",
            Color::Purple => "purple",
            Color::Gray => "gray",
            Color::Pink => "pink",
            Color::Brown => "brown",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::ALL
            .iter()
            .copied()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| Error::InvalidParameter(format!("{s} is not a valid color")))
    }
}
