//! # Dispatch
//!
//! [`run`] wires the context from the parsed [`Cli`] and hands the command to
//! [`execute`], which talks to the API and returns the text to print.
//! `execute` is generic over the store so handlers can be tested against an
//! in-memory journal.
//!
//! Unknown ids are reported as errors here (non-zero exit), even though the
//! library treats them as plain `false`/`None`.

use super::render;
use super::setup::{
    Cli, Commands, EditArgs, ListArgs, OfflineCommands, PinCommands, ReminderCommands,
    ShareCommands, ThemeCommands, WriteArgs,
};
use anyhow::{anyhow, bail, Context, Result};
use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};
use journalapp::api::{EntryFilter, JournalApi, SaveOutcome};
use journalapp::commands::export::backup_file_name;
use journalapp::commands::reminders::normalize_time;
use journalapp::init::initialize;
use journalapp::model::{EntryDraft, EntryPatch, ReminderPatch};
use journalapp::store::DataStore;
use std::io::{IsTerminal, Read};

pub fn run(cli: Cli) -> Result<()> {
    let mut ctx = initialize(cli.data_dir).context("failed to open the journal")?;
    let command = cli.command.unwrap_or(Commands::List(ListArgs::default()));
    let output = execute(&mut ctx.api, command, read_piped_stdin)?;
    print!("{}", output);
    Ok(())
}

/// Whole stdin when it is piped, `None` on a terminal.
fn read_piped_stdin() -> std::io::Result<Option<String>> {
    let mut stdin = std::io::stdin();
    if stdin.is_terminal() {
        return Ok(None);
    }
    let mut buf = String::new();
    stdin.read_to_string(&mut buf)?;
    Ok(Some(buf))
}

/// Resolve a user-typed id against `ids`: exact match, else a unique prefix.
fn resolve_id<'a>(
    ids: impl IntoIterator<Item = &'a str>,
    input: &str,
    what: &str,
) -> Result<String> {
    let input = input.trim();
    if input.is_empty() {
        bail!("empty {} id", what);
    }
    let mut candidates = Vec::new();
    for id in ids {
        if id == input {
            return Ok(id.to_string());
        }
        if id.starts_with(input) {
            candidates.push(id);
        }
    }
    match candidates.as_slice() {
        [one] => Ok(one.to_string()),
        [] => bail!("no {} matches '{}'", what, input),
        _ => bail!("'{}' matches {} {}s; use more characters", input, candidates.len(), what),
    }
}

fn entry_id<S: DataStore>(api: &JournalApi<S>, input: &str) -> Result<String> {
    let entries = api.list_entries()?;
    resolve_id(entries.iter().map(|e| e.id.as_str()), input, "entry")
}

fn noon_utc(day: NaiveDate) -> DateTime<Utc> {
    (day.and_time(NaiveTime::MIN) + Duration::hours(12)).and_utc()
}

fn secret<F>(arg: Option<String>, stdin: &mut F, what: &str) -> Result<String>
where
    F: FnMut() -> std::io::Result<Option<String>>,
{
    if let Some(value) = arg {
        return Ok(value);
    }
    match stdin()? {
        Some(text) => Ok(text.lines().next().unwrap_or_default().to_string()),
        None => bail!("{} required (pass it as an argument or pipe it on stdin)", what),
    }
}

pub fn execute<S, F>(api: &mut JournalApi<S>, command: Commands, mut stdin: F) -> Result<String>
where
    S: DataStore,
    F: FnMut() -> std::io::Result<Option<String>>,
{
    match command {
        Commands::Write(args) => write(api, args, &mut stdin),
        Commands::List(args) => list(api, args),
        Commands::Show { id } => {
            let id = entry_id(api, &id)?;
            let entry = api
                .get_entry(&id)?
                .ok_or_else(|| anyhow!("entry {} not found", id))?;
            Ok(render::full_entry(&entry))
        }
        Commands::Edit(args) => edit(api, args),
        Commands::Fav { id } => set_favorite(api, &id, true),
        Commands::Unfav { id } => set_favorite(api, &id, false),
        Commands::Delete { id } => {
            let id = entry_id(api, &id)?;
            match api.trash_entry(&id)? {
                Some(record) => Ok(render::success(&format!(
                    "Moved '{}' to the trash ({})",
                    record.entry.title,
                    render::short_id(&record.id)
                ))),
                None => bail!("entry {} not found", id),
            }
        }
        Commands::Trash => Ok(render::deleted_list(&api.deleted_entries()?)),
        Commands::Restore { id } => {
            let deleted = api.deleted_entries()?;
            let id = resolve_id(deleted.iter().map(|d| d.id.as_str()), &id, "trashed entry")?;
            api.restore_entry(&id)?;
            Ok(render::success("Restored"))
        }
        Commands::Purge { id, all } => {
            if all {
                let count = api.purge_all()?;
                return Ok(render::success(&format!("Purged {} entries", count)));
            }
            let deleted = api.deleted_entries()?;
            let input = id.unwrap_or_default();
            let id = resolve_id(deleted.iter().map(|d| d.id.as_str()), &input, "trashed entry")?;
            api.purge_entry(&id)?;
            Ok(render::success("Purged"))
        }
        Commands::Tags => Ok(render::tags(&api.all_tags()?)),
        Commands::Export { path } => {
            let backup = api.export_snapshot()?;
            match path {
                None => Ok(format!("{}\n", backup)),
                Some(path) => {
                    let path = if path.is_dir() {
                        path.join(backup_file_name(Utc::now().date_naive()))
                    } else {
                        path
                    };
                    std::fs::write(&path, backup)
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    Ok(render::success(&format!("Exported to {}", path.display())))
                }
            }
        }
        Commands::Import { path } => {
            let text = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            if !api.import_snapshot(&text)? {
                bail!("{} is not a valid journal backup", path.display());
            }
            let count = api.list_entries()?.len();
            Ok(render::success(&format!("Imported {} entries", count)))
        }
        Commands::Register { password } => {
            let password = secret(password, &mut stdin, "password")?;
            api.register(&password)?;
            Ok(render::success("Account created"))
        }
        Commands::Login { password } => {
            let password = secret(password, &mut stdin, "password")?;
            if !api.login(&password)? {
                bail!("invalid password");
            }
            Ok(render::success("Password accepted"))
        }
        Commands::Logout => {
            api.logout()?;
            Ok(render::success("Logged out"))
        }
        Commands::Passwd { old, new } => {
            if !api.change_password(&old, &new)? {
                bail!("current password does not match");
            }
            Ok(render::success("Password changed"))
        }
        Commands::Pin { action } => pin(api, action),
        Commands::Theme { action } => theme(api, action.unwrap_or(ThemeCommands::Show)),
        Commands::Reminder { action } => reminder(api, action),
        Commands::Share { action } => share(api, action),
        Commands::Offline { action } => offline(api, action.unwrap_or(OfflineCommands::Status)),
    }
}

fn write<S, F>(api: &mut JournalApi<S>, args: WriteArgs, stdin: &mut F) -> Result<String>
where
    S: DataStore,
    F: FnMut() -> std::io::Result<Option<String>>,
{
    let content = match args.content {
        Some(content) => content,
        None => stdin()?.unwrap_or_default(),
    };
    let mut draft = EntryDraft::new(args.title, content).with_tags(args.tags);
    if let Some(mood) = args.mood {
        draft = draft.with_mood(mood);
    }
    if let Some(rating) = args.rating {
        draft = draft.with_rating(rating);
    }
    if let Some(day) = args.date {
        draft = draft.with_date(noon_utc(day));
    }
    if args.favorite {
        draft = draft.favorite();
    }

    match api.save_entry(draft)? {
        SaveOutcome::Created(entry) => Ok(render::success(&format!(
            "Created entry {}",
            render::short_id(&entry.id)
        ))),
        SaveOutcome::Queued(item) => Ok(render::warning(&format!(
            "Offline: queued draft {} (run `journal offline drain` when back online)",
            render::short_id(&item.id)
        ))),
    }
}

fn list<S: DataStore>(api: &JournalApi<S>, args: ListArgs) -> Result<String> {
    let filter = EntryFilter {
        search_term: args.search,
        favorites_only: args.favorites,
        mood: args.mood,
        rating: args.rating,
        tag: args.tag,
        day: args.on,
    };
    Ok(render::entry_list(&api.filter_entries(&filter)?))
}

fn edit<S: DataStore>(api: &mut JournalApi<S>, args: EditArgs) -> Result<String> {
    let id = entry_id(api, &args.id)?;
    let patch = EntryPatch {
        date: args.date.map(noon_utc),
        title: args.title,
        content: args.content,
        mood: if args.clear_mood { Some(None) } else { args.mood.map(Some) },
        tags: if args.clear_tags {
            Some(Vec::new())
        } else if args.tags.is_empty() {
            None
        } else {
            Some(args.tags)
        },
        favorite: None,
        rating: if args.clear_rating { Some(None) } else { args.rating.map(Some) },
        images: None,
    };
    if patch.is_empty() {
        bail!("nothing to change");
    }
    api.update_entry(&id, patch)?;
    Ok(render::success("Updated"))
}

fn set_favorite<S: DataStore>(api: &mut JournalApi<S>, id: &str, favorite: bool) -> Result<String> {
    let id = entry_id(api, id)?;
    api.update_entry(&id, EntryPatch::favorite(favorite))?;
    Ok(render::success(if favorite {
        "Marked as favorite"
    } else {
        "Unmarked as favorite"
    }))
}

fn pin<S: DataStore>(api: &mut JournalApi<S>, action: PinCommands) -> Result<String> {
    match action {
        PinCommands::Set { pin } => {
            api.set_pin(&pin)?;
            Ok(render::success("PIN set"))
        }
        PinCommands::Check { pin } => {
            if !api.verify_pin(&pin)? {
                bail!("wrong PIN");
            }
            Ok(render::success("Unlocked"))
        }
        PinCommands::Disable => {
            api.disable_pin()?;
            Ok(render::success("PIN disabled"))
        }
        PinCommands::Status => Ok(format!(
            "PIN lock: {}\n",
            if api.is_pin_enabled()? { "on" } else { "off" }
        )),
    }
}

fn theme<S: DataStore>(api: &mut JournalApi<S>, action: ThemeCommands) -> Result<String> {
    match action {
        ThemeCommands::Show => Ok(render::theme(&api.theme()?)),
        ThemeCommands::Presets => Ok(render::theme_presets(&api.theme()?)),
        ThemeCommands::Set {
            theme,
            font,
            size,
            color,
            clear_color,
        } => {
            let mut settings = api.theme()?;
            if let Some(theme) = theme {
                settings.theme = theme;
            }
            if let Some(font) = font {
                settings.font_family = font;
            }
            if let Some(size) = size {
                settings.font_size = size;
            }
            if clear_color {
                settings.custom_color = None;
            } else if color.is_some() {
                settings.custom_color = color;
            }
            api.save_theme(&settings)?;
            Ok(render::theme(&settings))
        }
    }
}

fn reminder<S: DataStore>(api: &mut JournalApi<S>, action: ReminderCommands) -> Result<String> {
    let reminder_id = |api: &JournalApi<S>, input: &str| -> Result<String> {
        let reminders = api.reminders()?;
        resolve_id(reminders.iter().map(|r| r.id.as_str()), input, "reminder")
    };
    match action {
        ReminderCommands::Add { title, time } => {
            let reminder = api.create_reminder(&title, &time)?;
            Ok(render::success(&format!(
                "Reminder {} set for {}",
                render::short_id(&reminder.id),
                reminder.time
            )))
        }
        ReminderCommands::List => Ok(render::reminders(&api.reminders()?)),
        ReminderCommands::Remove { id } => {
            let id = reminder_id(api, &id)?;
            api.delete_reminder(&id)?;
            Ok(render::success("Reminder removed"))
        }
        ReminderCommands::Enable { id } => {
            let id = reminder_id(api, &id)?;
            set_reminder_enabled(api, &id, true)
        }
        ReminderCommands::Disable { id } => {
            let id = reminder_id(api, &id)?;
            set_reminder_enabled(api, &id, false)
        }
        ReminderCommands::Due { at } => {
            let due = match at {
                Some(at) => {
                    let time = NaiveTime::parse_from_str(&normalize_time(&at)?, "%H:%M")?;
                    api.reminders_due_at(time)?
                }
                None => api.reminders_due_now()?,
            };
            Ok(render::reminders(&due))
        }
    }
}

fn set_reminder_enabled<S: DataStore>(
    api: &mut JournalApi<S>,
    id: &str,
    enabled: bool,
) -> Result<String> {
    let patch = ReminderPatch {
        enabled: Some(enabled),
        ..Default::default()
    };
    api.update_reminder(id, patch)?;
    Ok(render::success(if enabled {
        "Reminder enabled"
    } else {
        "Reminder disabled"
    }))
}

fn share<S: DataStore>(api: &mut JournalApi<S>, action: ShareCommands) -> Result<String> {
    match action {
        ShareCommands::Create { id, ttl_hours } => {
            let id = entry_id(api, &id)?;
            let link = match ttl_hours {
                Some(hours) => api.create_share_link(&id, Some(Duration::hours(i64::from(hours))))?,
                None => api.share_entry(&id)?,
            };
            Ok(format!("{}\n", api.share_url(&link.code)))
        }
        ShareCommands::List { entry } => {
            let links = match entry {
                Some(entry) => api.share_links_for(&entry_id(api, &entry)?)?,
                None => api.share_links()?,
            };
            Ok(render::share_links(&links, |code| api.share_url(code), Utc::now()))
        }
        ShareCommands::Remove { id } => {
            let links = api.share_links()?;
            let id = resolve_id(links.iter().map(|l| l.id.as_str()), &id, "share link")?;
            api.delete_share_link(&id)?;
            Ok(render::success("Share link removed"))
        }
        ShareCommands::Open { code } => Ok(render::share_resolution(&api.resolve_share(&code)?)),
    }
}

fn offline<S: DataStore>(api: &mut JournalApi<S>, action: OfflineCommands) -> Result<String> {
    match action {
        OfflineCommands::Status => Ok(render::offline_status(
            api.is_offline()?,
            &api.offline_queue()?,
        )),
        OfflineCommands::On => {
            api.set_online(true)?;
            Ok(render::success("Online"))
        }
        OfflineCommands::Off => {
            api.set_online(false)?;
            Ok(render::warning("Offline: new entries will be queued"))
        }
        OfflineCommands::Drain => {
            let created = api.drain_offline_queue()?;
            Ok(render::success(&format!(
                "Created {} queued entries",
                created.len()
            )))
        }
        OfflineCommands::Clear => {
            api.clear_offline_queue()?;
            Ok(render::success("Offline queue cleared"))
        }
    }
}
