use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier for a todo
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(Uuid);

impl TodoId {
    /// Creates a fresh random id
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for TodoId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One of the four Eisenhower priority buckets, or the unassigned staging list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Quadrant {
    UrgentImportant,
    NotUrgentImportant,
    UrgentNotImportant,
    NotUrgentNotImportant,
    #[default]
    Unassigned,
}

impl Quadrant {
    /// The four priority quadrants, in display order (unassigned excluded)
    pub const PRIORITY: [Quadrant; 4] = [
        Quadrant::UrgentImportant,
        Quadrant::NotUrgentImportant,
        Quadrant::UrgentNotImportant,
        Quadrant::NotUrgentNotImportant,
    ];

    /// All five buckets, priority quadrants first
    pub const ALL: [Quadrant; 5] = [
        Quadrant::UrgentImportant,
        Quadrant::NotUrgentImportant,
        Quadrant::UrgentNotImportant,
        Quadrant::NotUrgentNotImportant,
        Quadrant::Unassigned,
    ];

    /// Short human-readable title for the bucket
    pub fn title(&self) -> &'static str {
        match self {
            Self::UrgentImportant => "Urgent & Important",
            Self::NotUrgentImportant => "Important, Not Urgent",
            Self::UrgentNotImportant => "Urgent, Not Important",
            Self::NotUrgentNotImportant => "Neither Urgent Nor Important",
            Self::Unassigned => "Todo List",
        }
    }

    /// Triage guidance shown under the title
    pub fn guidance(&self) -> &'static str {
        match self {
            Self::UrgentImportant => "Do it now. This is your top priority.",
            Self::NotUrgentImportant => "Schedule it. Goals and long-term growth live here.",
            Self::UrgentNotImportant => "Delegate it. Usually interruptions or other people's emergencies.",
            Self::NotUrgentNotImportant => "Drop or defer it. Avoid sinking time here.",
            Self::Unassigned => "Drag items into a quadrant, or add new ones here.",
        }
    }
}

impl fmt::Display for Quadrant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title())
    }
}

/// A single todo item on the board
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Todo {
    pub id: TodoId,
    pub text: String,
    pub quadrant: Quadrant,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Todo {
    /// Creates a new unassigned todo with already-trimmed text
    pub fn new(text: String) -> Self {
        let now = Utc::now();
        Self {
            id: TodoId::new(),
            text,
            quadrant: Quadrant::Unassigned,
            created_at: Some(now),
            updated_at: Some(now),
        }
    }

    /// Builds a todo directly in a quadrant, used for the seed list
    pub fn in_quadrant(text: &str, quadrant: Quadrant) -> Self {
        let mut todo = Self::new(text.to_string());
        todo.quadrant = quadrant;
        todo
    }

    /// Replaces the text and touches the update stamp
    pub fn set_text(&mut self, text: String) {
        self.text = text;
        self.updated_at = Some(Utc::now());
    }
}
