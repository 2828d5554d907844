//! Terminal front end: deal a game and play it on stdin/stdout.
//!
//! Example:
//!   cargo run -- --seed 12345
//!   cargo run -- --game "#1,234,567" --free-hints

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::{LevelFilter, Log, Metadata, Record};

use klondike_rules::display::render_snapshot;
use klondike_rules::{
    Dealer, EntryStep, GameState, MoveEntry, NumberedDealer, RulesConfig, ShuffledDealer,
};

#[derive(Parser, Debug)]
#[command(name = "klondike_rules", about = "Play Klondike patience in the terminal")]
struct Args {
    /// Shuffle with this seed for a reproducible deal.
    #[arg(long, conflicts_with = "game")]
    seed: Option<u64>,

    /// Deal a numbered game (any integer below 52!).
    #[arg(long)]
    game: Option<String>,

    /// JSON file with rule settings.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Hints do not count as moves.
    #[arg(long)]
    free_hints: bool,

    /// Undo takes back the move it undoes instead of counting as one.
    #[arg(long)]
    undo_refunds: bool,

    /// Print each snapshot as JSON instead of drawing the board.
    #[arg(long)]
    json: bool,

    /// Log engine activity to stderr.
    #[arg(short, long)]
    verbose: bool,
}

/// Minimal `log` sink that writes to stderr.
struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("[{}] {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

fn load_config(args: &Args) -> Result<RulesConfig> {
    let mut cfg = match &args.config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            RulesConfig::from_json_str(&text)
                .with_context(|| format!("parsing config {}", path.display()))?
        }
        None => RulesConfig::default(),
    };
    if args.free_hints {
        cfg.hint_costs_move = false;
    }
    if args.undo_refunds {
        cfg.undo_costs_move = false;
    }
    Ok(cfg)
}

fn new_game(args: &Args, cfg: RulesConfig) -> Result<GameState> {
    let mut dealer: Box<dyn Dealer> = match (&args.game, args.seed) {
        (Some(number), _) => Box::new(
            NumberedDealer::parse(number).with_context(|| format!("game number {number:?}"))?,
        ),
        (None, Some(seed)) => Box::new(ShuffledDealer::from_seed(seed)),
        (None, None) => Box::new(ShuffledDealer::from_entropy()),
    };
    Ok(GameState::new(dealer.build(), cfg))
}

fn show(game: &GameState, json: bool, out: &mut impl Write) -> Result<()> {
    let snap = game.snapshot();
    if json {
        writeln!(out, "{}", serde_json::to_string(&snap)?)?;
    } else {
        writeln!(out, "{}", render_snapshot(&snap))?;
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.verbose && log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(LevelFilter::Debug);
    }

    let cfg = load_config(&args)?;
    let mut game = new_game(&args, cfg)?;
    let mut entry = MoveEntry::new();

    let stdin = io::stdin();
    let mut out = io::stdout().lock();

    show(&game, args.json, &mut out)?;
    writeln!(out, "Commands: O open stock, R turn stock over, H hint, C undo")?;
    write!(out, "{}", entry.prompt().text())?;
    out.flush()?;

    for line in stdin.lock().lines() {
        let line = line.context("reading stdin")?;
        for token in line.split_whitespace() {
            match entry.feed(token) {
                Ok(EntryStep::Pending(_)) => {}
                Ok(EntryStep::Ready(input)) => {
                    // Errors are already in the snapshot message.
                    let _ = game.submit(input);
                    show(&game, args.json, &mut out)?;
                }
                Err(err) => writeln!(out, "{err}")?,
            }
            if game.is_won() {
                return Ok(());
            }
        }
        write!(out, "{}", entry.prompt().text())?;
        out.flush()?;
    }
    Ok(())
}
