//! Command-line front end: one verbose match, a trial batch, or a gauntlet.

use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use log::{LevelFilter, Log, Metadata, Record};

use card_balance_sim::cards::CardCatalog;
use card_balance_sim::core::{MatchConfig, SideMap, SimError, SimResult, TieBreak, TimeoutTiePolicy};
use card_balance_sim::deck::{preset, Deck, DeckConfig, PRESET_NAMES};
use card_balance_sim::engine::{
    AttackEvent, AttackTarget, MatchEngine, MatchObserver, MatchResult, TurnSnapshot,
};
use card_balance_sim::trials::{MatchupStats, TrialRunner};
use card_balance_sim::Side;

#[derive(Parser, Debug)]
#[command(name = "balance-sim", about = "Auto-battler deck balance simulator")]
struct Cli {
    /// Raise log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the standard card catalog and preset decks.
    Cards,
    /// Play one match and print its progress.
    Match {
        /// Side 1 deck: preset name or JSON file.
        deck_a: String,
        /// Side 2 deck: preset name or JSON file.
        deck_b: String,
        /// Only print the result, as JSON.
        #[arg(long)]
        quiet: bool,
        /// Also print every attack.
        #[arg(long)]
        attacks: bool,
        #[command(flatten)]
        engine: EngineArgs,
    },
    /// Play a matchup many times and report win rates.
    Trials {
        deck_a: String,
        deck_b: String,
        #[arg(short, long, default_value_t = 1000)]
        games: usize,
        /// Run matches one at a time.
        #[arg(long)]
        sequential: bool,
        /// Print statistics as JSON.
        #[arg(long)]
        json: bool,
        #[command(flatten)]
        engine: EngineArgs,
    },
    /// Play one deck against several opponents.
    Gauntlet {
        deck: String,
        #[arg(required = true)]
        opponents: Vec<String>,
        #[arg(short, long, default_value_t = 100)]
        games: usize,
        #[arg(long)]
        json: bool,
        #[command(flatten)]
        engine: EngineArgs,
    },
}

#[derive(Args, Debug)]
struct EngineArgs {
    /// Seed for equal-speed ordering.
    #[arg(long, default_value_t = 0)]
    seed: u64,
    /// Order equal-speed units by side and field position instead of randomly.
    #[arg(long)]
    field_order: bool,
    /// Award timeouts with equal HP to side 2 instead of calling a draw.
    #[arg(long)]
    legacy_ties: bool,
    #[arg(long)]
    max_turns: Option<u32>,
    #[arg(long)]
    field_size: Option<usize>,
    #[arg(long)]
    starting_hp: Option<i32>,
    #[arg(long)]
    starting_mana: Option<i32>,
}

impl EngineArgs {
    fn config(&self) -> MatchConfig {
        let defaults = MatchConfig::default();
        let tie_break = if self.field_order {
            TieBreak::FieldOrder
        } else {
            TieBreak::Seeded(self.seed)
        };
        let timeout_tie = if self.legacy_ties {
            TimeoutTiePolicy::Award(Side::Two)
        } else {
            TimeoutTiePolicy::Draw
        };
        MatchConfig::new()
            .with_max_turns(self.max_turns.unwrap_or(defaults.max_turns))
            .with_max_field_size(self.field_size.unwrap_or(defaults.max_field_size))
            .with_starting_hp(self.starting_hp.unwrap_or(defaults.starting_hp))
            .with_starting_mana(self.starting_mana.unwrap_or(defaults.starting_mana))
            .with_tie_break(tie_break)
            .with_timeout_tie(timeout_tie)
    }
}

/// Minimal stderr backend for the `log` facade.
struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("[{:<5} {}] {}", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}

/// Prints turn-by-turn progress in the style of a match log.
struct ProgressPrinter<'a> {
    names: SideMap<&'a str>,
    field_size: usize,
    attacks: bool,
}

impl MatchObserver for ProgressPrinter<'_> {
    fn on_turn_start(&mut self, turn: u32, mana: i32) {
        println!("\n--- Turn {turn} ({mana} mana) ---");
    }

    fn on_deployed(&mut self, snapshot: &TurnSnapshot) {
        for side in Side::BOTH {
            println!(
                "{}: {}/{} field, {} HP, {} in deck",
                self.names[side],
                snapshot.field_sizes[side],
                self.field_size,
                snapshot.hp[side],
                snapshot.remaining[side],
            );
        }
    }

    fn on_attack(&mut self, event: &AttackEvent) {
        if !self.attacks {
            return;
        }
        match &event.target {
            AttackTarget::Unit { name, hp_after } => println!(
                "  {} {} hits {name} for {} ({hp_after} left)",
                self.names[event.side], event.attacker, event.damage
            ),
            AttackTarget::Player { hp_after } => println!(
                "  {} {} hits {} for {} ({hp_after} HP left)",
                self.names[event.side],
                event.attacker,
                self.names[event.side.opponent()],
                event.damage
            ),
        }
    }

    fn on_finish(&mut self, result: &MatchResult) {
        match result.winner {
            Some(side) => println!(
                "\n{} WINS on turn {} ({})",
                self.names[side], result.turn, result.reason
            ),
            None => println!("\nDRAW on turn {} ({})", result.turn, result.reason),
        }
    }
}

fn load_deck(arg: &str, catalog: &CardCatalog) -> SimResult<Deck> {
    let config = match preset(arg) {
        Some(config) => config,
        None if std::path::Path::new(arg).exists() => DeckConfig::load(arg)?,
        None => {
            return Err(SimError::InvalidConfiguration(format!(
                "'{arg}' is neither a deck file nor a preset ({})",
                PRESET_NAMES.join(", ")
            )))
        }
    };
    Deck::build(&config, catalog)
}

fn print_matchup(a: &Deck, b: &Deck, stats: &MatchupStats) {
    println!("{} vs {}", a.name(), b.name());
    println!("Record: {}-{}-{}", stats.wins_a, stats.wins_b, stats.draws);
    println!(
        "Win Rate: {:.1}% / {:.1}%",
        stats.win_rate_a,
        stats.win_rate_b()
    );
    println!("Avg Game Length: {:.1} turns", stats.avg_turns);
    println!(
        "Endings: {} lethal, {} deck-out, {} timeout",
        stats.reasons.player_hp, stats.reasons.deck_out, stats.reasons.timeout
    );
}

fn to_json<T: serde::Serialize>(value: &T) -> SimResult<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

fn run(cli: Cli) -> SimResult<()> {
    let catalog = CardCatalog::standard();

    match cli.command {
        Command::Cards => {
            let mut cards: Vec<_> = catalog.iter().collect();
            cards.sort_by(|a, b| a.cost.cmp(&b.cost).then_with(|| a.name.cmp(&b.name)));

            println!("{} cards:", catalog.len());
            for card in cards {
                println!(
                    "  {:<10} hp {:>4}  atk {:>4}  spd {:>3}  cost {:>2}",
                    card.name, card.hp, card.attack, card.speed, card.cost
                );
            }
            println!("presets: {}", PRESET_NAMES.join(", "));
        }
        Command::Match {
            deck_a,
            deck_b,
            quiet,
            attacks,
            engine,
        } => {
            let (a, b) = (load_deck(&deck_a, &catalog)?, load_deck(&deck_b, &catalog)?);
            let engine = MatchEngine::new(engine.config())?;

            if quiet {
                println!("{}", to_json(&engine.simulate(&a, &b))?);
            } else {
                for deck in [&a, &b] {
                    println!(
                        "{} ({}, {}): {} cards, {} total mana",
                        deck.name(),
                        deck.flavor(),
                        deck.strategy(),
                        deck.len(),
                        deck.total_cost()
                    );
                }
                let mut printer = ProgressPrinter {
                    names: SideMap::from_pair(a.name(), b.name()),
                    field_size: engine.config().max_field_size,
                    attacks,
                };
                engine.simulate_observed(&a, &b, engine.config().tie_break, &mut printer);
            }
        }
        Command::Trials {
            deck_a,
            deck_b,
            games,
            sequential,
            json,
            engine,
        } => {
            let (a, b) = (load_deck(&deck_a, &catalog)?, load_deck(&deck_b, &catalog)?);
            let runner = TrialRunner::new(engine.config())?.with_parallel(!sequential);
            let stats = runner.run_matchup(&a, &b, games)?;

            if json {
                println!("{}", to_json(&stats)?);
            } else {
                print_matchup(&a, &b, &stats);
            }
        }
        Command::Gauntlet {
            deck,
            opponents,
            games,
            json,
            engine,
        } => {
            let deck = load_deck(&deck, &catalog)?;
            let opponents = opponents
                .iter()
                .map(|arg| load_deck(arg, &catalog))
                .collect::<SimResult<Vec<_>>>()?;
            let runner = TrialRunner::new(engine.config())?;
            let stats = runner.run_gauntlet(&deck, &opponents, games)?;

            if json {
                println!("{}", to_json(&stats)?);
            } else {
                for record in &stats.matchups {
                    println!(
                        "vs {:<20} {:>5.1}% ({} games)",
                        record.opponent, record.stats.win_rate_a, record.stats.games
                    );
                }
                println!(
                    "{}: {}/{} wins ({:.1}%)",
                    deck.name(),
                    stats.wins,
                    stats.games,
                    stats.win_rate
                );
            }
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
