use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use journalapp::commands::share::MAX_TTL_HOURS;
use journalapp::model::{FontFamily, FontSize, Mood, Theme};
use std::path::PathBuf;

/// "0.3.0" for releases, "0.3.0 (dev abc1234)" otherwise.
fn version() -> &'static str {
    use std::sync::OnceLock;
    static VERSION: OnceLock<String> = OnceLock::new();

    VERSION.get_or_init(|| {
        let version = env!("CARGO_PKG_VERSION");
        if env!("JOURNAL_IS_RELEASE") == "true" {
            version.to_string()
        } else {
            format!("{} (dev {})", version, env!("JOURNAL_GIT_HASH"))
        }
    })
}

#[derive(Parser, Debug)]
#[command(
    name = "journal",
    bin_name = "journal",
    version = version(),
    disable_help_subcommand = true
)]
#[command(about = "A private journal for the terminal", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding the journal data (overrides JOURNAL_DATA_DIR)
    #[arg(long, global = true, value_name = "DIR", help_heading = "Options")]
    pub data_dir: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

pub fn parse_cli() -> Cli {
    Cli::parse()
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write a new entry (queued when offline)
    #[command(alias = "new", display_order = 1)]
    Write(WriteArgs),

    /// List entries, newest first
    #[command(alias = "ls", display_order = 2)]
    List(ListArgs),

    /// Show one entry in full
    #[command(alias = "view", display_order = 3)]
    Show {
        /// Entry id (a unique prefix is enough)
        id: String,
    },

    /// Change fields of an entry
    #[command(display_order = 4)]
    Edit(EditArgs),

    /// Mark an entry as favorite
    #[command(display_order = 5)]
    Fav { id: String },

    /// Remove the favorite mark
    #[command(display_order = 6)]
    Unfav { id: String },

    /// Move an entry to the trash
    #[command(alias = "rm", display_order = 7)]
    Delete { id: String },

    /// List trashed entries
    #[command(display_order = 10)]
    Trash,

    /// Bring a trashed entry back
    #[command(display_order = 11)]
    Restore {
        /// Trash record id (a unique prefix is enough)
        id: String,
    },

    /// Permanently remove trashed entries
    #[command(display_order = 12)]
    Purge {
        /// Trash record id
        #[arg(required_unless_present = "all", conflicts_with = "all")]
        id: Option<String>,

        /// Empty the whole trash
        #[arg(long)]
        all: bool,
    },

    /// List every tag in use
    #[command(display_order = 13)]
    Tags,

    /// Write a backup of all entries
    #[command(display_order = 20)]
    Export {
        /// Output file; prints to stdout when omitted
        path: Option<PathBuf>,
    },

    /// Replace all entries with a backup
    #[command(display_order = 21)]
    Import { path: PathBuf },

    /// Create the local account (replaces any existing one)
    #[command(display_order = 30)]
    Register {
        /// Read from stdin when omitted
        password: Option<String>,
    },

    /// Check the account password
    #[command(display_order = 31)]
    Login {
        /// Read from stdin when omitted
        password: Option<String>,
    },

    /// Remove the local account
    #[command(display_order = 32)]
    Logout,

    /// Change the account password
    #[command(display_order = 33)]
    Passwd { old: String, new: String },

    /// Manage the unlock PIN
    #[command(display_order = 34)]
    Pin {
        #[command(subcommand)]
        action: PinCommands,
    },

    /// Show or change appearance settings
    #[command(display_order = 40)]
    Theme {
        #[command(subcommand)]
        action: Option<ThemeCommands>,
    },

    /// Daily writing reminders
    #[command(display_order = 41)]
    Reminder {
        #[command(subcommand)]
        action: ReminderCommands,
    },

    /// Share links to entries
    #[command(display_order = 42)]
    Share {
        #[command(subcommand)]
        action: ShareCommands,
    },

    /// Connectivity and the offline queue
    #[command(display_order = 43)]
    Offline {
        #[command(subcommand)]
        action: Option<OfflineCommands>,
    },
}

#[derive(Args, Debug)]
pub struct WriteArgs {
    pub title: String,

    /// Entry text; read from stdin when omitted and stdin is piped
    #[arg(short, long)]
    pub content: Option<String>,

    #[arg(short, long)]
    pub mood: Option<Mood>,

    /// Tag (repeatable)
    #[arg(short, long = "tag")]
    pub tags: Vec<String>,

    /// Star rating, 1 to 5
    #[arg(short, long)]
    pub rating: Option<u8>,

    #[arg(short, long)]
    pub favorite: bool,

    /// Entry date (YYYY-MM-DD); defaults to now
    #[arg(short, long)]
    pub date: Option<NaiveDate>,
}

#[derive(Args, Debug, Default)]
pub struct ListArgs {
    /// Case-insensitive text search
    #[arg(short, long)]
    pub search: Option<String>,

    /// Only favorites
    #[arg(short, long)]
    pub favorites: bool,

    #[arg(short, long)]
    pub mood: Option<Mood>,

    #[arg(short, long)]
    pub rating: Option<u8>,

    #[arg(short, long)]
    pub tag: Option<String>,

    /// Only entries dated on this day (YYYY-MM-DD)
    #[arg(long)]
    pub on: Option<NaiveDate>,
}

#[derive(Args, Debug)]
pub struct EditArgs {
    pub id: String,

    #[arg(long)]
    pub title: Option<String>,

    #[arg(short, long)]
    pub content: Option<String>,

    #[arg(short, long, conflicts_with = "clear_mood")]
    pub mood: Option<Mood>,

    #[arg(long)]
    pub clear_mood: bool,

    /// Replace all tags (repeatable)
    #[arg(short, long = "tag", conflicts_with = "clear_tags")]
    pub tags: Vec<String>,

    #[arg(long)]
    pub clear_tags: bool,

    #[arg(short, long, conflicts_with = "clear_rating")]
    pub rating: Option<u8>,

    #[arg(long)]
    pub clear_rating: bool,

    #[arg(short, long)]
    pub date: Option<NaiveDate>,
}

#[derive(Subcommand, Debug)]
pub enum PinCommands {
    /// Set a new PIN and enable the lock
    Set { pin: String },
    /// Check a PIN against the lock
    Check { pin: String },
    /// Turn the lock off
    Disable,
    /// Show whether the lock is on
    Status,
}

#[derive(Subcommand, Debug)]
pub enum ThemeCommands {
    /// Show current settings
    Show,
    /// List the preset themes
    Presets,
    /// Change settings
    Set {
        #[arg(long)]
        theme: Option<Theme>,

        #[arg(long)]
        font: Option<FontFamily>,

        #[arg(long)]
        size: Option<FontSize>,

        /// Custom color replacing the preset palette
        #[arg(long, conflicts_with = "clear_color")]
        color: Option<String>,

        #[arg(long)]
        clear_color: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum ReminderCommands {
    /// Add a reminder at HH:MM
    Add { title: String, time: String },
    List,
    Remove { id: String },
    Enable { id: String },
    Disable { id: String },
    /// Reminders due at this minute (or at --at HH:MM)
    Due {
        #[arg(long)]
        at: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum ShareCommands {
    /// Create a share link for an entry
    Create {
        id: String,

        /// Link lifetime in hours (defaults to the configured one)
        #[arg(
            long,
            value_parser = clap::value_parser!(u32).range(1..=i64::from(MAX_TTL_HOURS))
        )]
        ttl_hours: Option<u32>,
    },
    List {
        /// Only links for this entry
        #[arg(long)]
        entry: Option<String>,
    },
    Remove { id: String },
    /// Look up a share code
    Open { code: String },
}

#[derive(Subcommand, Debug)]
pub enum OfflineCommands {
    /// Show connectivity and queued drafts
    Status,
    /// Mark the journal as online
    On,
    /// Mark the journal as offline; new entries get queued
    Off,
    /// Create entries for every queued draft
    Drain,
    /// Drop the queue
    Clear,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("journal").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_write_args() {
        let cli = parse(&[
            "write", "Day 1", "-c", "ok", "-t", "work", "-t", "home", "-m", "Good", "-r", "4",
        ]);
        match cli.command {
            Some(Commands::Write(args)) => {
                assert_eq!(args.title, "Day 1");
                assert_eq!(args.content.as_deref(), Some("ok"));
                assert_eq!(args.tags, vec!["work", "home"]);
                assert_eq!(args.mood, Some(Mood::Good));
                assert_eq!(args.rating, Some(4));
                assert!(!args.favorite);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_global_data_dir_after_subcommand() {
        let cli = parse(&["list", "--data-dir", "/tmp/j", "--favorites"]);
        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/j")));
        assert!(matches!(cli.command, Some(Commands::List(ListArgs { favorites: true, .. }))));
    }

    #[test]
    fn test_purge_needs_id_or_all() {
        assert!(Cli::try_parse_from(["journal", "purge"]).is_err());
        assert!(Cli::try_parse_from(["journal", "purge", "abc", "--all"]).is_err());
        assert!(matches!(
            parse(&["purge", "--all"]).command,
            Some(Commands::Purge { id: None, all: true })
        ));
    }

    #[test]
    fn test_theme_values_parse() {
        let cli = parse(&["theme", "set", "--theme", "ocean-blue", "--font", "serif"]);
        match cli.command {
            Some(Commands::Theme {
                action: Some(ThemeCommands::Set { theme, font, .. }),
            }) => {
                assert_eq!(theme, Some(Theme::OceanBlue));
                assert_eq!(font, Some(FontFamily::Serif));
            }
            other => panic!("unexpected {:?}", other),
        }
        assert!(Cli::try_parse_from(["journal", "theme", "set", "--theme", "neon"]).is_err());
    }

    #[test]
    fn test_share_ttl_range() {
        assert!(matches!(
            parse(&["share", "create", "abc", "--ttl-hours", "48"]).command,
            Some(Commands::Share {
                action: ShareCommands::Create { ttl_hours: Some(48), .. }
            })
        ));
        assert!(
            Cli::try_parse_from(["journal", "share", "create", "abc", "--ttl-hours", "0"]).is_err()
        );
        assert!(
            Cli::try_parse_from(["journal", "share", "create", "abc", "--ttl-hours", "4294967295"])
                .is_err()
        );
    }

    #[test]
    fn test_bad_mood_is_rejected() {
        assert!(Cli::try_parse_from(["journal", "list", "--mood", "meh"]).is_err());
    }
}
