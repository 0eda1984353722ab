use crate::credits::EditMode;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "stagegate",
    about = "Decide what a translation stage, stash, contribution or credits page can offer"
)]
pub struct Cli {
    /// Enable verbose debug logging.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Print decisions as JSON instead of text.
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Summarize a stage and list the actions it offers.
    Stage(StageArgs),
    /// Describe saved stashes.
    Stash(StashArgs),
    /// Describe a contribution as seen by a viewer.
    Contribution(ContributionArgs),
    /// Group translator credits per language.
    Credits(CreditsArgs),
    /// Format a unix timestamp as a commit time.
    Timestamp {
        /// Seconds since the unix epoch.
        #[arg(allow_hyphen_values = true)]
        unix: i64,
    },
}

#[derive(Args, Debug)]
pub struct StageArgs {
    /// JSON file holding the stage.
    pub file: PathBuf,
}

#[derive(Args, Debug)]
pub struct StashArgs {
    /// JSON file holding an array of stashes.
    pub file: PathBuf,
}

#[derive(Args, Debug)]
pub struct ContributionArgs {
    /// JSON file holding the contribution.
    pub file: PathBuf,

    /// User id of the viewer.
    #[arg(long)]
    pub viewer: u64,

    /// The viewer may change the contribution language.
    #[arg(long)]
    pub can_change_language: bool,

    /// JSON object mapping language codes to names.
    #[arg(long)]
    pub languages: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct CreditsArgs {
    /// JSON file holding the credits data.
    pub file: PathBuf,

    /// Language the viewer is using.
    #[arg(long, default_value = "en")]
    pub current_lang: String,

    /// Editing state of the page.
    #[arg(long, value_enum, default_value = "denied")]
    pub edit: EditArg,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditArg {
    Denied,
    Off,
    On,
}

impl From<EditArg> for EditMode {
    fn from(arg: EditArg) -> Self {
        match arg {
            EditArg::Denied => EditMode::Denied,
            EditArg::Off => EditMode::Off,
            EditArg::On => EditMode::On,
        }
    }
}

/// Parse CLI arguments.
pub fn parse_args() -> Cli {
    Cli::parse()
}
