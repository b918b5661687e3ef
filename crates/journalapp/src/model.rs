//! Core data types.
//!
//! Every persisted type serializes with camelCase field names and RFC 3339
//! timestamps, which keeps backup files readable by older releases of the
//! web client. Optional fields are omitted when absent.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lowest and highest star rating an entry can carry.
pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Amazing,
    Good,
    Okay,
    Bad,
    Terrible,
}

impl Mood {
    pub const ALL: [Mood; 5] = [
        Mood::Amazing,
        Mood::Good,
        Mood::Okay,
        Mood::Bad,
        Mood::Terrible,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::Amazing => "amazing",
            Mood::Good => "good",
            Mood::Okay => "okay",
            Mood::Bad => "bad",
            Mood::Terrible => "terrible",
        }
    }
}

impl std::fmt::Display for Mood {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Mood {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Mood::ALL
            .iter()
            .copied()
            .find(|m| m.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown mood '{}'", s))
    }
}

/// A journal entry as stored in the live collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    pub id: String,
    pub date: DateTime<Utc>,
    pub title: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mood: Option<Mood>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub favorite: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<String>>,
}

impl Entry {
    pub fn from_draft(id: String, draft: EntryDraft) -> Self {
        Self {
            id,
            date: draft.date,
            title: draft.title,
            content: draft.content,
            mood: draft.mood,
            tags: draft.tags,
            favorite: draft.favorite,
            rating: draft.rating,
            images: draft.images,
        }
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Case-insensitive substring match over title, content and tags.
    /// `needle` must already be lowercased.
    pub fn matches_lowercase(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self.content.to_lowercase().contains(needle)
            || self.tags.iter().any(|t| t.to_lowercase().contains(needle))
    }
}

/// An entry before the repository assigns it an id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryDraft {
    pub date: DateTime<Utc>,
    pub title: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mood: Option<Mood>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub favorite: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<String>>,
}

impl EntryDraft {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            date: Utc::now(),
            title: title.into(),
            content: content.into(),
            mood: None,
            tags: Vec::new(),
            favorite: false,
            rating: None,
            images: None,
        }
    }

    pub fn with_date(mut self, date: DateTime<Utc>) -> Self {
        self.date = date;
        self
    }

    pub fn with_mood(mut self, mood: Mood) -> Self {
        self.mood = Some(mood);
        self
    }

    pub fn with_tags<I, T>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_rating(mut self, rating: u8) -> Self {
        self.rating = Some(rating);
        self
    }

    pub fn with_images(mut self, images: Vec<String>) -> Self {
        self.images = Some(images);
        self
    }

    pub fn favorite(mut self) -> Self {
        self.favorite = true;
        self
    }
}

/// Partial update of an entry. `None` leaves the field untouched.
///
/// The nullable fields use a nested option: `Some(None)` clears the value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EntryPatch {
    pub date: Option<DateTime<Utc>>,
    pub title: Option<String>,
    pub content: Option<String>,
    pub mood: Option<Option<Mood>>,
    pub tags: Option<Vec<String>>,
    pub favorite: Option<bool>,
    pub rating: Option<Option<u8>>,
    pub images: Option<Option<Vec<String>>>,
}

impl EntryPatch {
    pub fn favorite(favorite: bool) -> Self {
        Self {
            favorite: Some(favorite),
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn apply_to(self, entry: &mut Entry) {
        if let Some(date) = self.date {
            entry.date = date;
        }
        if let Some(title) = self.title {
            entry.title = title;
        }
        if let Some(content) = self.content {
            entry.content = content;
        }
        if let Some(mood) = self.mood {
            entry.mood = mood;
        }
        if let Some(tags) = self.tags {
            entry.tags = tags;
        }
        if let Some(favorite) = self.favorite {
            entry.favorite = favorite;
        }
        if let Some(rating) = self.rating {
            entry.rating = rating;
        }
        if let Some(images) = self.images {
            entry.images = images;
        }
    }
}

/// A soft-deleted entry waiting in the trash.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeletedEntry {
    pub id: String,
    pub entry: Entry,
    pub deleted_at: DateTime<Utc>,
}

/// The single local account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    #[serde(alias = "password")]
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PinSettings {
    pub enabled: bool,
    #[serde(alias = "pin")]
    pub pin_hash: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Theme {
    #[default]
    CherryPink,
    OceanBlue,
    ForestGreen,
    SunsetOrange,
    Lavender,
}

impl Theme {
    pub const ALL: [Theme; 5] = [
        Theme::CherryPink,
        Theme::OceanBlue,
        Theme::ForestGreen,
        Theme::SunsetOrange,
        Theme::Lavender,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::CherryPink => "cherry-pink",
            Theme::OceanBlue => "ocean-blue",
            Theme::ForestGreen => "forest-green",
            Theme::SunsetOrange => "sunset-orange",
            Theme::Lavender => "lavender",
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Theme::ALL
            .iter()
            .copied()
            .find(|t| t.as_str() == s.trim())
            .ok_or_else(|| format!("unknown theme '{}'", s))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontFamily {
    #[default]
    #[serde(alias = "geist")]
    Default,
    Serif,
    Mono,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl FontFamily {
    pub const ALL: [FontFamily; 3] = [FontFamily::Default, FontFamily::Serif, FontFamily::Mono];

    pub fn as_str(&self) -> &'static str {
        match self {
            FontFamily::Default => "default",
            FontFamily::Serif => "serif",
            FontFamily::Mono => "mono",
        }
    }
}

impl FontSize {
    pub const ALL: [FontSize; 3] = [FontSize::Small, FontSize::Medium, FontSize::Large];

    pub fn as_str(&self) -> &'static str {
        match self {
            FontSize::Small => "small",
            FontSize::Medium => "medium",
            FontSize::Large => "large",
        }
    }
}

impl std::fmt::Display for FontFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::fmt::Display for FontSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for FontFamily {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "geist" => Ok(FontFamily::Default),
            other => FontFamily::ALL
                .iter()
                .copied()
                .find(|f| f.as_str() == other)
                .ok_or_else(|| format!("unknown font family '{}'", s)),
        }
    }
}

impl std::str::FromStr for FontSize {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FontSize::ALL
            .iter()
            .copied()
            .find(|f| f.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown font size '{}'", s))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeSettings {
    pub theme: Theme,
    pub font_family: FontFamily,
    pub font_size: FontSize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_color: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reminder {
    pub id: String,
    pub title: String,
    /// Wall-clock minute, zero padded "HH:MM".
    pub time: String,
    pub enabled: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReminderPatch {
    pub title: Option<String>,
    pub time: Option<String>,
    pub enabled: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShareLink {
    pub id: String,
    /// Weak reference: deleting the entry leaves the link in place.
    pub entry_id: String,
    pub code: String,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
}

impl ShareLink {
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|at| at <= now)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OfflineQueueItem {
    pub id: String,
    pub data: EntryDraft,
    /// Milliseconds since the Unix epoch.
    pub timestamp: i64,
    pub synced: bool,
}
