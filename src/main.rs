//! geulgyeob CLI
//!
//! Interactive drill for reading overlapping words, plus scripting
//! commands over the saved word list.

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::{Parser, Subcommand};

use geulgyeob::editor::begin_edit;
use geulgyeob::logging::{LogConfig, LogTarget, default_log_file, init_logging};
use geulgyeob::report::format_words;
use geulgyeob::store::{FileStore, WordStore, default_store_dir};
use geulgyeob::types::{DrillConfig, OutputFormat, RevealMode, StageProfile, WordList};

#[derive(Parser)]
#[command(name = "geulgyeob")]
#[command(about = "Drill reading of overlapping, tightly-kerned words")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Stage table to drill with
    #[arg(long, value_enum, default_value = "extended", global = true)]
    profile: ProfileArg,

    /// How a word can be skipped besides stepping through every stage
    #[arg(long, value_enum, default_value = "timed", global = true)]
    reveal: RevealArg,

    /// Delay before a reveal moves to the next word
    #[arg(long, default_value_t = 1000, global = true)]
    reveal_delay_ms: u64,

    /// Directory holding the word list (default: platform data dir)
    #[arg(long, global = true)]
    store_dir: Option<PathBuf>,

    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Log file for the interactive drill
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the interactive drill (default)
    Drill,

    /// Print the saved words
    List {
        /// Output format
        #[arg(long, value_enum, default_value = "human")]
        format: OutputFormatArg,
    },

    /// Append words to the saved list
    Add {
        /// Words to add (blank ones are skipped)
        #[arg(required = true)]
        words: Vec<String>,
    },

    /// Remove a word by its 1-based position
    Remove {
        /// Position as shown by `list`
        index: usize,
    },

    /// Remove every saved word
    Clear {
        /// Skip confirmation prompt
        #[arg(long)]
        force: bool,
    },
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum ProfileArg {
    /// 8 stages
    Classic,
    /// 10 stages
    Extended,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum RevealArg {
    Manual,
    Timed,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormatArg {
    Human,
    Json,
}

impl From<ProfileArg> for StageProfile {
    fn from(arg: ProfileArg) -> Self {
        match arg {
            ProfileArg::Classic => StageProfile::Classic,
            ProfileArg::Extended => StageProfile::Extended,
        }
    }
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Human => OutputFormat::Human,
            OutputFormatArg::Json => OutputFormat::Json,
        }
    }
}

impl Cli {
    fn drill_config(&self) -> DrillConfig {
        let reveal = match self.reveal {
            RevealArg::Manual => RevealMode::Manual,
            RevealArg::Timed => RevealMode::Timed {
                delay: Duration::from_millis(self.reveal_delay_ms),
            },
        };
        DrillConfig {
            profile: self.profile.into(),
            reveal,
            store_dir: self.store_dir.clone().unwrap_or_else(default_store_dir),
        }
    }

    fn log_config(&self, interactive: bool) -> LogConfig {
        let target = match (&self.log_file, interactive) {
            (Some(path), _) => LogTarget::File(path.clone()),
            (None, true) => LogTarget::File(default_log_file()),
            (None, false) => LogTarget::Stderr,
        };
        LogConfig::from_verbosity(self.verbose).with_target(target)
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = cli.drill_config();
    let interactive = matches!(cli.command, None | Some(Commands::Drill));

    if let Err(e) = init_logging(&cli.log_config(interactive)) {
        eprintln!("Warning: {}", e);
    }

    let result = match cli.command {
        None | Some(Commands::Drill) => cmd_drill(config),
        Some(Commands::List { format }) => cmd_list(&config, format.into()),
        Some(Commands::Add { words }) => cmd_add(&config, &words),
        Some(Commands::Remove { index }) => cmd_remove(&config, index),
        Some(Commands::Clear { force }) => cmd_clear(&config, force),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

// ============================================================================
// COMMAND HANDLERS
// ============================================================================

fn open_store(config: &DrillConfig) -> WordStore<FileStore> {
    WordStore::new(FileStore::new(&config.store_dir))
}

fn cmd_drill(config: DrillConfig) -> Result<(), String> {
    geulgyeob::tui::run(config).map_err(|e| e.to_string())
}

fn cmd_list(config: &DrillConfig, format: OutputFormat) -> Result<(), String> {
    let words = open_store(config).load();
    print!("{}", format_words(&words, format));
    Ok(())
}

fn cmd_add(config: &DrillConfig, new_words: &[String]) -> Result<(), String> {
    let mut store = open_store(config);
    let mut draft = begin_edit(&store.load());

    let mut added = 0;
    for word in new_words {
        if draft.add_word(word) {
            added += 1;
        }
    }
    if added == 0 {
        println!("Nothing to add.");
        return Ok(());
    }

    let words = draft.commit();
    store.save(&words).map_err(|e| e.to_string())?;
    println!("Added {} word{} ({} total).", added, if added == 1 { "" } else { "s" }, words.len());
    Ok(())
}

fn cmd_remove(config: &DrillConfig, index: usize) -> Result<(), String> {
    let mut store = open_store(config);
    let mut draft = begin_edit(&store.load());

    // Validate before touching the draft: remove_word treats a bad index as a bug.
    if index == 0 || index > draft.len() {
        return Err(format!(
            "No word at position {} (list has {} word{})",
            index,
            draft.len(),
            if draft.len() == 1 { "" } else { "s" }
        ));
    }

    let removed = draft.remove_word(index - 1).map_err(|e| e.to_string())?;
    store.save(&draft.commit()).map_err(|e| e.to_string())?;
    println!("Removed: {}", removed);
    Ok(())
}

fn cmd_clear(config: &DrillConfig, force: bool) -> Result<(), String> {
    let mut store = open_store(config);
    let count = store.load().len();

    if count == 0 {
        println!("No words saved.");
        return Ok(());
    }

    println!("About to remove {} word{}", count, if count == 1 { "" } else { "s" });

    if !force {
        eprint!("Continue? [y/N] ");

        let mut input = String::new();
        std::io::stdin()
            .read_line(&mut input)
            .map_err(|e| e.to_string())?;

        if !input.trim().eq_ignore_ascii_case("y") {
            println!("Aborted.");
            return Ok(());
        }
    }

    store.save(&WordList::default()).map_err(|e| e.to_string())?;
    println!("Cleared.");
    Ok(())
}
