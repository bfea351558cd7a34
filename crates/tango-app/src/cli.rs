use clap::{Args, Parser, Subcommand, ValueEnum};
use tango_config::{ExportFormat, SortBy};
use tango_lang_japanese::PosGroup;

#[derive(Debug, Parser)]
#[command(name = "tango")]
#[command(version, about = "Vocabulary tools for analyzed Japanese articles", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the merged vocabulary of a document as TSV
    Vocabulary(VocabularyArgs),

    /// Print the sentence around one linked text element
    Sentence(SentenceArgs),

    /// Mail the vocabulary of a document as TSV or flashcards
    Export(ExportArgs),

    /// Show or change the stored sort and filter preferences
    Prefs(PrefsArgs),

    /// List recently looked-up words as TSV, newest first
    Recent,
}

/// Sort and filter overrides; anything left out comes from the stored preferences
#[derive(Debug, Args)]
pub struct ViewArgs {
    /// Sort key
    #[arg(long, value_enum)]
    pub sort: Option<SortArg>,

    /// Sort descending
    #[arg(long, conflicts_with = "ascending")]
    pub descending: bool,

    /// Sort ascending
    #[arg(long)]
    pub ascending: bool,

    /// Level key to keep, e.g. ja-JLPT-N3 (repeatable)
    #[arg(long = "level", value_name = "KEY")]
    pub levels: Vec<String>,

    /// Part-of-speech key to keep, e.g. ja-n (repeatable)
    #[arg(long = "pos", value_name = "KEY")]
    pub pos: Vec<String>,

    /// Free-text filter over forms and English definitions
    #[arg(long, default_value = "")]
    pub text: String,
}

#[derive(Debug, Args)]
pub struct VocabularyArgs {
    /// Document key, resolved against the documents directory
    pub document: String,

    #[command(flatten)]
    pub view: ViewArgs,

    /// Print filter counts instead of entries
    #[arg(long)]
    pub facets: bool,
}

#[derive(Debug, Args)]
pub struct SentenceArgs {
    pub document: String,

    /// Position of the selected element
    #[arg(long)]
    pub index: usize,

    /// Look in the title instead of the body
    #[arg(long)]
    pub title: bool,
}

#[derive(Debug, Args)]
pub struct ExportArgs {
    pub document: String,

    #[command(flatten)]
    pub view: ViewArgs,

    /// Overrides the configured format
    #[arg(long, value_enum)]
    pub format: Option<FormatArg>,

    /// Overrides the configured destination address
    #[arg(long)]
    pub email: Option<String>,
}

#[derive(Debug, Args)]
pub struct PrefsArgs {
    #[arg(long, value_enum)]
    pub sort: Option<SortArg>,

    #[arg(long, conflicts_with = "ascending")]
    pub descending: bool,

    #[arg(long)]
    pub ascending: bool,

    /// Select or deselect a level key (repeatable)
    #[arg(long = "toggle-level", value_name = "KEY")]
    pub toggle_levels: Vec<String>,

    /// Select or deselect a part-of-speech key (repeatable)
    #[arg(long = "toggle-pos", value_name = "KEY")]
    pub toggle_pos: Vec<String>,

    /// Select or deselect a part-of-speech group; needs --document
    #[arg(long = "toggle-group", value_enum, requires = "document")]
    pub toggle_groups: Vec<GroupArg>,

    /// Document whose vocabulary supplies the group's tags
    #[arg(long)]
    pub document: Option<String>,

    /// Drop every level and part-of-speech filter
    #[arg(long)]
    pub clear: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum SortArg {
    Level,
    Pos,
}

impl From<SortArg> for SortBy {
    fn from(sort: SortArg) -> Self {
        match sort {
            SortArg::Level => SortBy::Level,
            SortArg::Pos => SortBy::Pos,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum FormatArg {
    Tsv,
    Anki,
}

impl From<FormatArg> for ExportFormat {
    fn from(format: FormatArg) -> Self {
        match format {
            FormatArg::Tsv => ExportFormat::Tsv,
            FormatArg::Anki => ExportFormat::Anki,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum GroupArg {
    Adjectives,
    Adverbs,
    Counters,
    Nouns,
    Particles,
    Verbs,
    Other,
}

impl From<GroupArg> for PosGroup {
    fn from(group: GroupArg) -> Self {
        match group {
            GroupArg::Adjectives => PosGroup::Adjectives,
            GroupArg::Adverbs => PosGroup::Adverbs,
            GroupArg::Counters => PosGroup::Counters,
            GroupArg::Nouns => PosGroup::Nouns,
            GroupArg::Particles => PosGroup::Particles,
            GroupArg::Verbs => PosGroup::Verbs,
            GroupArg::Other => PosGroup::Other,
        }
    }
}

/// Direction from a pair of flags; `None` keeps the stored one
pub fn direction(ascending: bool, descending: bool) -> Option<bool> {
    match (ascending, descending) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}
