//! # Rendering
//!
//! Turns API values into terminal text. Every function here is pure: it takes
//! data and returns a `String` (newline terminated), and the command handlers
//! print it. Styling goes through [`super::styles`].

use super::styles;
use chrono::{DateTime, Local, Utc};
use journalapp::api::{Palette, ShareResolution};
use journalapp::commands::theme::presets;
use journalapp::model::{
    DeletedEntry, Entry, OfflineQueueItem, Reminder, ShareLink, ThemeSettings, MAX_RATING,
};
use std::fmt::Write;

/// Listings show this many leading characters of an id.
pub const SHORT_ID_LEN: usize = 8;
pub const FAVORITE_MARKER: &str = "★";

pub fn short_id(id: &str) -> &str {
    match id.char_indices().nth(SHORT_ID_LEN) {
        Some((end, _)) => &id[..end],
        None => id,
    }
}

fn local_date(date: DateTime<Utc>) -> String {
    date.with_timezone(&Local).format("%Y-%m-%d").to_string()
}

fn local_datetime(date: DateTime<Utc>) -> String {
    date.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string()
}

fn stars(rating: u8) -> String {
    let filled = rating.min(MAX_RATING) as usize;
    format!(
        "{}{}",
        "★".repeat(filled),
        "☆".repeat(MAX_RATING as usize - filled)
    )
}

fn tag_list(tags: &[String]) -> String {
    tags.iter()
        .map(|t| styles::tag().apply_to(format!("#{}", t)).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn entry_list(entries: &[Entry]) -> String {
    if entries.is_empty() {
        return format!("{}\n", styles::muted().apply_to("No entries."));
    }
    let mut out = String::new();
    for entry in entries {
        let marker = if entry.favorite { FAVORITE_MARKER } else { " " };
        let _ = write!(
            out,
            "{} {}  {}  {}",
            styles::favorite().apply_to(marker),
            styles::id().apply_to(short_id(&entry.id)),
            styles::muted().apply_to(local_date(entry.date)),
            styles::title().apply_to(&entry.title),
        );
        if let Some(mood) = entry.mood {
            let _ = write!(out, "  {}", styles::muted().apply_to(mood));
        }
        if let Some(rating) = entry.rating {
            let _ = write!(out, "  {}", styles::favorite().apply_to(stars(rating)));
        }
        if !entry.tags.is_empty() {
            let _ = write!(out, "  {}", tag_list(&entry.tags));
        }
        out.push('\n');
    }
    out
}

pub fn full_entry(entry: &Entry) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", styles::title().apply_to(&entry.title));
    let _ = write!(
        out,
        "{}  {}",
        styles::id().apply_to(&entry.id),
        styles::muted().apply_to(local_datetime(entry.date))
    );
    if entry.favorite {
        let _ = write!(out, "  {}", styles::favorite().apply_to(FAVORITE_MARKER));
    }
    out.push('\n');

    let mut meta = Vec::new();
    if let Some(mood) = entry.mood {
        meta.push(format!("mood: {}", mood));
    }
    if let Some(rating) = entry.rating {
        meta.push(format!("rating: {}", stars(rating)));
    }
    if let Some(images) = entry.images.as_ref().filter(|i| !i.is_empty()) {
        meta.push(format!("images: {}", images.len()));
    }
    if !meta.is_empty() {
        let _ = writeln!(out, "{}", styles::muted().apply_to(meta.join("  ")));
    }
    if !entry.tags.is_empty() {
        let _ = writeln!(out, "{}", tag_list(&entry.tags));
    }
    if !entry.content.is_empty() {
        out.push('\n');
        out.push_str(&entry.content);
        if !entry.content.ends_with('\n') {
            out.push('\n');
        }
    }
    out
}

pub fn deleted_list(records: &[DeletedEntry]) -> String {
    if records.is_empty() {
        return format!("{}\n", styles::muted().apply_to("Trash is empty."));
    }
    let mut out = String::new();
    for record in records {
        let _ = writeln!(
            out,
            "{}  {}  {}",
            styles::deleted().apply_to(short_id(&record.id)),
            styles::muted().apply_to(format!("deleted {}", local_date(record.deleted_at))),
            record.entry.title,
        );
    }
    out
}

pub fn tags(tags: &[String]) -> String {
    if tags.is_empty() {
        return format!("{}\n", styles::muted().apply_to("No tags."));
    }
    tags.iter().map(|t| format!("{}\n", t)).collect()
}

fn palette_line(palette: &Palette) -> String {
    format!(
        "primary {}  secondary {}  accent {}",
        palette.primary, palette.secondary, palette.accent
    )
}

pub fn theme(settings: &ThemeSettings) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "theme: {}", styles::title().apply_to(settings.theme));
    let _ = writeln!(
        out,
        "font:  {} ({}, {}px)",
        settings.font_family,
        settings.font_stack(),
        settings.base_font_size_px()
    );
    if let Some(color) = &settings.custom_color {
        let _ = writeln!(out, "custom color: {}", color);
    }
    let _ = writeln!(out, "{}", styles::muted().apply_to(palette_line(&settings.palette())));
    out
}

pub fn theme_presets(current: &ThemeSettings) -> String {
    let mut out = String::new();
    for preset in presets() {
        let marker = if *preset == current.theme { "*" } else { " " };
        let _ = writeln!(
            out,
            "{} {:<14} {}",
            marker,
            preset.as_str(),
            styles::muted().apply_to(palette_line(&preset.palette()))
        );
    }
    out
}

pub fn reminders(reminders: &[Reminder]) -> String {
    if reminders.is_empty() {
        return format!("{}\n", styles::muted().apply_to("No reminders."));
    }
    let mut out = String::new();
    for reminder in reminders {
        let state = if reminder.enabled { "on " } else { "off" };
        let _ = writeln!(
            out,
            "{}  {}  {}  {}",
            styles::id().apply_to(short_id(&reminder.id)),
            reminder.time,
            styles::muted().apply_to(state),
            reminder.title
        );
    }
    out
}

pub fn share_links(
    links: &[ShareLink],
    url_for: impl Fn(&str) -> String,
    now: DateTime<Utc>,
) -> String {
    if links.is_empty() {
        return format!("{}\n", styles::muted().apply_to("No share links."));
    }
    let mut out = String::new();
    for link in links {
        let expiry = match link.expires_at {
            None => "never expires".to_string(),
            Some(_) if link.is_expired_at(now) => "expired".to_string(),
            Some(at) => format!("expires {}", local_datetime(at)),
        };
        let _ = writeln!(
            out,
            "{}  {}  entry {}  {}",
            styles::id().apply_to(short_id(&link.id)),
            url_for(&link.code),
            short_id(&link.entry_id),
            styles::muted().apply_to(expiry)
        );
    }
    out
}

pub fn share_resolution(resolution: &ShareResolution) -> String {
    match resolution {
        ShareResolution::Found { entry, .. } => full_entry(entry),
        ShareResolution::Expired(link) => format!(
            "{}\n",
            styles::warning().apply_to(format!("Share link {} has expired.", link.code))
        ),
        ShareResolution::Orphaned(link) => format!(
            "{}\n",
            styles::warning().apply_to(format!(
                "The entry shared as {} no longer exists.",
                link.code
            ))
        ),
        ShareResolution::Unknown => format!(
            "{}\n",
            styles::warning().apply_to("No entry is shared under that code.")
        ),
    }
}

pub fn offline_status(offline: bool, queue: &[OfflineQueueItem]) -> String {
    let pending: Vec<_> = queue.iter().filter(|i| !i.synced).collect();
    let mut out = String::new();
    let state = if offline {
        styles::warning().apply_to("offline")
    } else {
        styles::success().apply_to("online")
    };
    let _ = writeln!(out, "status: {}", state);
    let _ = writeln!(
        out,
        "queued: {} pending, {} synced",
        pending.len(),
        queue.len() - pending.len()
    );
    for item in pending {
        let queued_at = DateTime::<Utc>::from_timestamp_millis(item.timestamp)
            .map(local_datetime)
            .unwrap_or_default();
        let _ = writeln!(
            out,
            "  {}  {}  {}",
            styles::id().apply_to(short_id(&item.id)),
            styles::muted().apply_to(queued_at),
            item.data.title
        );
    }
    out
}

pub fn success(message: &str) -> String {
    format!("{}\n", styles::success().apply_to(message))
}

pub fn warning(message: &str) -> String {
    format!("{}\n", styles::warning().apply_to(message))
}

#[cfg(test)]
mod tests {
    use super::*;
    use journalapp::model::{EntryDraft, Mood, Theme};

    fn plain() {
        console::set_colors_enabled(false);
    }

    fn entry(id: &str, title: &str) -> Entry {
        Entry::from_draft(id.to_string(), EntryDraft::new(title, "body"))
    }

    #[test]
    fn test_short_id() {
        assert_eq!(short_id("0123456789abcdef"), "01234567");
        assert_eq!(short_id("abc"), "abc");
        assert_eq!(short_id("ééééééééé"), "éééééééé");
    }

    #[test]
    fn test_entry_list_line() {
        plain();
        let mut e = entry("0123456789abcdef", "Day 1");
        e.favorite = true;
        e.mood = Some(Mood::Good);
        e.rating = Some(3);
        e.tags = vec!["work".into()];
        let out = entry_list(&[e]);
        assert!(out.starts_with("★ 01234567  "));
        assert!(out.contains("Day 1"));
        assert!(out.contains("good"));
        assert!(out.contains("★★★☆☆"));
        assert!(out.trim_end().ends_with("#work"));
    }

    #[test]
    fn test_empty_listings() {
        plain();
        assert_eq!(entry_list(&[]), "No entries.\n");
        assert_eq!(deleted_list(&[]), "Trash is empty.\n");
        assert_eq!(tags(&[]), "No tags.\n");
    }

    #[test]
    fn test_full_entry_shows_content() {
        plain();
        let out = full_entry(&entry("abc", "Title"));
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "Title");
        assert!(lines[1].starts_with("abc  "));
        assert_eq!(lines.last(), Some(&"body"));
    }

    #[test]
    fn test_theme_presets_mark_current() {
        plain();
        let current = ThemeSettings {
            theme: Theme::Lavender,
            ..Default::default()
        };
        let out = theme_presets(&current);
        assert_eq!(out.lines().count(), 5);
        assert!(out.lines().any(|l| l.starts_with("* lavender")));
        assert!(out.lines().any(|l| l.starts_with("  cherry-pink")));
    }

    #[test]
    fn test_share_resolution_messages() {
        plain();
        assert_eq!(
            share_resolution(&ShareResolution::Unknown),
            "No entry is shared under that code.\n"
        );
    }
}
