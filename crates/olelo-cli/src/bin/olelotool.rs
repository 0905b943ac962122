use clap::{Parser, Subcommand};

use olelo_cli::commands::{
    accuracy_ops, audio_ops, lesson_ops, progress_ops, quiz_ops, word_ops,
};

#[derive(Parser)]
#[command(name = "olelotool", about = "Hawaiian pronunciation and lesson diagnostics")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Full pronunciation data for a word
    Say {
        /// Hawaiian word
        word: String,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Syllable breakdown for words (args or stdin lines)
    Syllables {
        words: Vec<String>,
    },

    /// IPA transcription for words (args or stdin lines)
    Ipa {
        words: Vec<String>,
    },

    /// Pronunciation tips for words (args or stdin lines)
    Tips {
        words: Vec<String>,
    },

    /// Run phonetic accuracy cases from a structured TOML corpus
    Accuracy {
        /// Path to the accuracy corpus TOML file
        corpus_file: String,
        /// Filter by tag (only run cases with this tag)
        #[arg(long)]
        tag: Option<String>,
        /// Filter by category (only run cases in this category)
        #[arg(long)]
        category: Option<String>,
        /// Show passing cases too (default: only failures and skips)
        #[arg(long)]
        verbose: bool,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// List the curriculum
    Lessons {
        /// Filter by level (beginner, intermediate, advanced)
        #[arg(long)]
        level: Option<String>,
    },

    /// Show one lesson's details
    Lesson {
        /// Lesson id
        id: u32,
        /// Also print the slide deck
        #[arg(long)]
        deck: bool,
    },

    /// Walk a lesson's slides interactively, answering on stdin
    Quiz {
        /// Lesson id
        id: u32,
        /// Record the result into this progress file
        #[arg(long)]
        progress: Option<String>,
    },

    /// Inspect or update a progress file
    Progress {
        #[command(subcommand)]
        command: ProgressCommand,
    },

    /// Manage native-speaker audio recordings
    Audio {
        #[command(subcommand)]
        command: AudioCommand,
    },
}

#[derive(Subcommand)]
enum ProgressCommand {
    /// Show completion summary
    Show {
        /// Path to the progress file
        file: String,
    },
    /// Record a completed lesson
    Complete {
        /// Path to the progress file
        file: String,
        /// Lesson id
        lesson: u32,
        /// Quiz score percentage
        #[arg(long, default_value = "100")]
        score: u8,
    },
}

#[derive(Subcommand)]
enum AudioCommand {
    /// Report which lexicon entries have recordings in a directory
    Check {
        /// Audio directory
        dir: String,
    },
    /// Download and unpack a zip archive of recordings
    Fetch {
        /// Archive URL
        url: String,
        /// Destination directory
        dir: String,
    },
}

fn main() {
    if let Some(dir) = std::env::var_os("OLELOTOOL_LOG_DIR") {
        olelo_cli::trace_init::init_tracing(std::path::Path::new(&dir));
    }

    let cli = Cli::parse();

    match cli.command {
        Command::Say { word, json } => word_ops::say(&word, json),
        Command::Syllables { words } => word_ops::syllables(&words),
        Command::Ipa { words } => word_ops::ipa_words(&words),
        Command::Tips { words } => word_ops::tips_words(&words),

        Command::Accuracy {
            corpus_file,
            tag,
            category,
            verbose,
            json,
        } => accuracy_ops::run(
            &corpus_file,
            &accuracy_ops::AccuracyOptions {
                tag,
                category,
                verbose,
                json,
            },
        ),

        Command::Lessons { level } => lesson_ops::list(level.as_deref()),
        Command::Lesson { id, deck } => lesson_ops::show(id, deck),
        Command::Quiz { id, progress } => quiz_ops::run(id, progress.as_deref()),

        Command::Progress { command } => match command {
            ProgressCommand::Show { file } => progress_ops::show(&file),
            ProgressCommand::Complete {
                file,
                lesson,
                score,
            } => progress_ops::complete(&file, lesson, score),
        },

        Command::Audio { command } => match command {
            AudioCommand::Check { dir } => audio_ops::check(&dir),
            AudioCommand::Fetch { url, dir } => audio_ops::fetch(&url, &dir),
        },
    }
}
