//! Spellsprout - CLI
//!
//! Spelling practice game with TUI and plain CLI modes.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use spellsprout::{
    adapters::{CommandSpeech, CuePlayer, NullCues, NullSpeech, Speech},
    commands::{preview_word, run_simple},
    core::WordSet,
    output::{print_preview_result, print_set_list},
    session::GameSession,
    wordsets::{self, loader::load_from_file},
};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "spellsprout",
    about = "Spelling practice for early readers: listen, unscramble, fill in the blanks",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word set: 'starter' (default), 'animals', 'everyday', or a path to a word|hint file
    #[arg(short = 'w', long, global = true, default_value = "starter")]
    wordset: String,

    /// Text-to-speech program (default: auto-detect say/espeak/spd-say)
    #[arg(long, global = true)]
    speech_cmd: Option<String>,

    /// Disable speech output entirely
    #[arg(long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (interactive game without TUI)
    Simple,

    /// Show the scramble and blanks puzzles a word would produce
    Preview {
        /// Word to preview
        word: String,

        /// Seed the random source for reproducible output
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// List the built-in word sets
    Sets,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.as_ref().unwrap_or(&Commands::Play);

    match command {
        Commands::Play => run_play_command(&cli),
        Commands::Simple => run_simple_command(&cli),
        Commands::Preview { word, seed } => {
            let result = preview_word(word, *seed).map_err(|e| anyhow::anyhow!(e))?;
            print_preview_result(&result);
            Ok(())
        }
        Commands::Sets => {
            print_set_list(&wordsets::builtin_sets());
            Ok(())
        }
    }
}

/// Build a session holding every built-in set, with the `-w` choice active
///
/// A `-w` value that is not a built-in key is treated as a path to a custom
/// `word|hint` file, which is loaded alongside the built-ins.
fn build_session(wordset: &str) -> Result<GameSession> {
    let mut sets = wordsets::builtin_sets();

    let active = if wordsets::builtin(wordset).is_some() {
        wordset.to_string()
    } else {
        let custom: WordSet = load_from_file(wordset)
            .with_context(|| format!("'{wordset}' is not a built-in set or a readable file"))?;
        let name = custom.name().to_string();
        sets.push(custom);
        name
    };

    let mut session = GameSession::new(sets)?;
    session.switch_word_set(&active)?;
    Ok(session)
}

/// Pick the speech collaborator from the flags and the environment
fn build_speech(cli: &Cli) -> Box<dyn Speech> {
    if cli.quiet {
        return Box::new(NullSpeech);
    }

    if let Some(program) = &cli.speech_cmd {
        return Box::new(CommandSpeech::new(program));
    }

    match CommandSpeech::detect() {
        Some(speech) => {
            info!(program = speech.program(), "using system speech synthesizer");
            Box::new(speech)
        }
        None => {
            warn!("no speech synthesizer found; spelling mode will be silent");
            Box::new(NullSpeech)
        }
    }
}

fn run_play_command(cli: &Cli) -> Result<()> {
    use spellsprout::interactive::{App, run_tui};

    let session = build_session(&cli.wordset)?;
    let app = App::new(session, build_speech(cli), Box::new(NullCues));
    run_tui(app)
}

fn run_simple_command(cli: &Cli) -> Result<()> {
    let mut session = build_session(&cli.wordset)?;
    let speech = build_speech(cli);
    let cues: Box<dyn CuePlayer> = Box::new(NullCues);

    run_simple(&mut session, speech.as_ref(), cues.as_ref()).map_err(|e| anyhow::anyhow!(e))
}
