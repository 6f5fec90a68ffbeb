use clap::{Parser, Subcommand};

use dokaben_cli::commands::{config_ops, flick_ops, replay_ops};
use dokaben_core::fling::GestureSample;

#[derive(Parser)]
#[command(name = "flicktool", about = "Dokaben flick keyboard diagnostics")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show the characters of a row key (all directions unless one is given)
    Resolve {
        /// Row key: a, ka, sa, ..., wa, or its center character
        key: String,
        /// center, left, up, right or down
        direction: Option<String>,
    },
    /// Classify a fling with the configured thresholds
    #[command(allow_negative_numbers = true)]
    Classify {
        start_x: f32,
        start_y: f32,
        end_x: f32,
        end_y: f32,
        velocity_x: f32,
        velocity_y: f32,
    },
    /// Transliterate text into dokaben glyph tokens
    Convert {
        text: String,
    },
    /// Look up a character in the dakuten (or kigou) toggle table
    Dakuten {
        /// Single character
        character: char,
        /// Use the kigou table instead
        #[arg(long)]
        kigou: bool,
    },
    /// Run a JSON-lines event script and print each step's host actions
    Replay {
        /// Path to the script file
        file: String,
        /// Only print the final field text
        #[arg(short, long)]
        quiet: bool,
    },
    /// Print default settings TOML
    SettingsExport,
    /// Validate a settings TOML file
    SettingsValidate {
        /// Path to the settings TOML file
        file: String,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Command::Resolve { key, direction } => flick_ops::resolve_cmd(&key, direction.as_deref()),
        Command::Classify {
            start_x,
            start_y,
            end_x,
            end_y,
            velocity_x,
            velocity_y,
        } => flick_ops::classify_cmd(GestureSample {
            start_x,
            start_y,
            end_x,
            end_y,
            velocity_x,
            velocity_y,
        }),
        Command::Convert { text } => flick_ops::convert_cmd(&text),
        Command::Dakuten { character, kigou } => flick_ops::toggle_cmd(character, kigou),
        Command::Replay { file, quiet } => replay_ops::replay_cmd(&file, quiet),
        Command::SettingsExport => config_ops::settings_export(),
        Command::SettingsValidate { file } => config_ops::settings_validate(&file),
    }
}
