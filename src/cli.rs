//! CLI interface for Tradle.
//!
//! One secret country a day, six guesses to find it. Every subcommand works
//! on a single day: today by default, or the one given with `--day`.
//!
//! Display flags (`--unit`, `--theme`, mode flags) override the config file
//! for one invocation.

mod format;

use clap::{Parser, Subcommand, ValueEnum};

use crate::config::Config;
use crate::game::{DayKey, Game, MAX_GUESSES};
use crate::geography::{DistanceUnit, Earth, Theme};
use crate::model;
use crate::share;
use crate::storage::Storage;

use format::{format_board, format_guess_row};

/// Tradle: guess the country from its exports.
#[derive(Debug, Parser)]
#[command(name = "tradle", after_long_help = HOW_TO_PLAY)]
pub struct Cli {
    /// Play a specific day (`YYYY-MM-DD`) instead of today.
    #[arg(long, global = true)]
    day: Option<String>,

    /// Unit for distances.
    #[arg(long, global = true, value_enum)]
    unit: Option<UnitArg>,

    /// Color theme for the progress squares.
    #[arg(long, global = true, value_enum)]
    theme: Option<ThemeArg>,

    /// Mark the result as played without the export chart.
    ///
    /// Mode flags only switch modes on: a mode enabled in the config file
    /// stays on for every run.
    #[arg(long, global = true)]
    hide_image: bool,

    /// Mark the result as played with the chart rotated.
    /// Stays on if the config file enables it.
    #[arg(long, global = true)]
    rotation: bool,

    /// Play by the April Fools rules: distances and directions are withheld.
    /// Always on for April 1st, and when the config file enables it.
    #[arg(long, global = true)]
    alt_mode: bool,

    #[command(subcommand)]
    pub command: Command,
}

const HOW_TO_PLAY: &str = r#"How to play:
  1. tradle guess Brazil
     → prints the squares, proximity, distance, and direction to the target
  2. Keep guessing until a row reads 100% (or six guesses run out).
  3. tradle share
     → prints the result, ready to paste

Past days:
  tradle --day 2022-04-01 board"#;

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Guess a country by name or two-letter code.
    Guess {
        /// Country name; multiple words are joined (`tradle guess New Zealand`).
        #[arg(required = true, num_args = 1..)]
        country: Vec<String>,
    },

    /// Show the day's guesses so far.
    Board,

    /// Print the day's shareable result. The day must be finished.
    Share,

    /// List every country that can be guessed.
    Countries,
}

/// CLI-facing distance unit, mapped to the domain `DistanceUnit`.
#[derive(Debug, Clone, ValueEnum)]
pub enum UnitArg {
    Km,
    Miles,
}

impl UnitArg {
    fn to_domain(&self) -> DistanceUnit {
        match self {
            Self::Km => DistanceUnit::Km,
            Self::Miles => DistanceUnit::Miles,
        }
    }
}

/// CLI-facing theme, mapped to the domain `Theme`.
#[derive(Debug, Clone, ValueEnum)]
pub enum ThemeArg {
    Light,
    Dark,
}

impl ThemeArg {
    fn to_domain(&self) -> Theme {
        match self {
            Self::Light => Theme::Light,
            Self::Dark => Theme::Dark,
        }
    }
}

impl Cli {
    /// The config with this invocation's overrides applied.
    fn settings(&self, config: Config, day: DayKey) -> Config {
        let mut settings = config;
        if let Some(unit) = &self.unit {
            settings.distance_unit = unit.to_domain();
        }
        if let Some(theme) = &self.theme {
            settings.theme = theme.to_domain();
        }
        settings.modes.hide_image |= self.hide_image;
        settings.modes.rotation |= self.rotation;
        settings.modes.alt_mode |= self.alt_mode || day.is_april_fools();
        settings
    }
}

/// Run the CLI, returning an error message on failure.
pub fn run(config: Config, storage: &Storage) -> Result<(), String> {
    let cli = Cli::parse();

    let day = match cli.day.as_deref() {
        Some(s) => s.parse::<DayKey>().map_err(|e| e.to_string())?,
        None => DayKey::today(),
    };
    let settings = cli.settings(config, day);

    match cli.command {
        Command::Guess { ref country } => cmd_guess(storage, settings, day, &country.join(" ")),
        Command::Board => cmd_board(storage, settings, day),
        Command::Share => cmd_share(storage, settings, day),
        Command::Countries => {
            cmd_countries();
            Ok(())
        }
    }
}

fn load_game(storage: &Storage, day: DayKey) -> Result<Game<'_, Storage>, String> {
    Game::load(storage, day).map_err(|e| format!("failed to load guesses: {e}"))
}

fn cmd_guess(storage: &Storage, settings: Config, day: DayKey, name: &str) -> Result<(), String> {
    let mut game = load_game(storage, day)?;
    let index = game.guesses().len();

    let guess = game.submit(&Earth, name).map_err(|e| e.to_string())?;
    println!("{}", format_guess_row(index, guess, settings));

    if game.is_won() {
        eprintln!(
            "Found it in {}/{MAX_GUESSES}! Run `tradle share` to share your result.",
            game.guesses().len()
        );
    } else if game.is_over() {
        eprintln!("Out of guesses. The answer was {}.", game.target().name);
    } else {
        eprintln!("{} guess(es) left", game.remaining());
    }

    Ok(())
}

fn cmd_board(storage: &Storage, settings: Config, day: DayKey) -> Result<(), String> {
    let game = load_game(storage, day)?;

    println!("{} #{} ({})", share::GAME_NAME, day.day_count(), game.day());
    for line in format_board(game.guesses(), settings) {
        println!("{line}");
    }

    if game.is_won() {
        println!("Solved: {}", game.target().name);
    } else if game.is_over() {
        println!("The answer was {}.", game.target().name);
    }

    Ok(())
}

fn cmd_share(storage: &Storage, settings: Config, day: DayKey) -> Result<(), String> {
    let game = load_game(storage, day)?;
    if !game.is_over() {
        return Err(format!(
            "the game for {day} isn't finished: {} guess(es) left",
            game.remaining()
        ));
    }

    println!(
        "{}",
        share::share_text(game.guesses(), day, settings.modes, settings.theme)
    );
    Ok(())
}

fn cmd_countries() {
    let mut names: Vec<&str> = model::catalog().iter().map(|c| c.name).collect();
    names.sort_unstable();
    for name in names {
        println!("{name}");
    }
}
