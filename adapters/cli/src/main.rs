#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Command-line adapter that plays Hunt the Wumpus on a simulated watch face.

mod keys;
mod settings;
mod terminal;

use std::{
    io::{self, BufRead, Write},
    path::PathBuf,
    thread,
};

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;
use wumpus_core::{Hazard, Phase};
use wumpus_face::{FaceEvent, WumpusFace};
use wumpus_world::{query, SeededRandom};

use crate::{
    keys::{parse_keys, KeyAction},
    settings::Settings,
    terminal::TerminalHost,
};

/// Upper bound on ticks delivered automatically after one input line.
const MAX_FEEDBACK_TICKS: usize = 64;

#[derive(Debug, Parser)]
#[command(name = "wumpus")]
#[command(about = "Hunt the Wumpus on a simulated two-button watch face")]
struct Args {
    /// Seed for a reproducible game.
    #[arg(long)]
    seed: Option<u64>,
    /// TOML settings file providing defaults for the other flags.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Keys to play instead of reading stdin: a/A cycle, b/B confirm, `.` tick, q quit.
    #[arg(long)]
    script: Option<String>,
    /// Sleep between ticks at the rate the face requests.
    #[arg(long)]
    realtime: bool,
    /// Print the hazard layout after every input line.
    #[arg(long)]
    reveal: bool,
}

#[derive(Clone, Copy, Debug)]
struct Options {
    realtime: bool,
    reveal: bool,
}

/// Entry point for the Hunt the Wumpus command-line interface.
fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let settings = match &args.config {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };
    let options = Options {
        realtime: args.realtime || settings.realtime,
        reveal: args.reveal || settings.reveal,
    };
    let rng = args
        .seed
        .or(settings.seed)
        .map_or_else(SeededRandom::from_entropy, SeededRandom::from_seed);

    let stdout = io::stdout();
    let mut session = Session::new(TerminalHost::new(stdout.lock()), rng, options);
    session.start()?;

    match args.script {
        Some(script) => {
            let actions = parse_keys(&script).context("invalid --script")?;
            let _ = session.play(&actions)?;
        }
        None => {
            for line in io::stdin().lock().lines() {
                let line = line.context("failed to read input")?;
                let actions = match parse_keys(&line) {
                    Ok(actions) => actions,
                    Err(error) => {
                        tracing::warn!(%error, "ignoring input line");
                        continue;
                    }
                };
                if !session.play(&actions)? {
                    break;
                }
            }
        }
    }

    session.finish()
}

struct Session<W: Write> {
    face: WumpusFace,
    host: TerminalHost<W>,
    rng: SeededRandom,
    options: Options,
}

impl<W: Write> Session<W> {
    fn new(host: TerminalHost<W>, rng: SeededRandom, options: Options) -> Self {
        Self {
            face: WumpusFace::setup(),
            host,
            rng,
            options,
        }
    }

    fn start(&mut self) -> Result<()> {
        self.face.activate(&mut self.host, &mut self.rng)?;
        self.host.present()?;
        self.settle()?;
        self.reveal()
    }

    /// Plays the actions of one input line; returns `false` once quit is requested.
    fn play(&mut self, actions: &[KeyAction]) -> Result<bool> {
        for action in actions {
            match *action {
                KeyAction::Quit => return Ok(false),
                KeyAction::Event(event) => self.dispatch(event)?,
            }
        }
        self.settle()?;
        self.reveal()?;
        Ok(true)
    }

    fn finish(&mut self) -> Result<()> {
        self.face.resign(&mut self.host)?;
        self.host.present()
    }

    fn dispatch(&mut self, event: FaceEvent) -> Result<()> {
        let _ = self.face.handle(event, &mut self.host, &mut self.rng)?;
        self.host.present()?;
        if self.options.realtime && event == FaceEvent::Tick {
            thread::sleep(self.host.tick_interval());
        }
        Ok(())
    }

    /// Delivers ticks until melodies, the LED flash and bat transport have run out.
    fn settle(&mut self) -> Result<()> {
        for _ in 0..MAX_FEEDBACK_TICKS {
            let busy = self.face.world().map_or(false, |world| {
                !query::stays_resident(world) || query::phase(world) == Phase::BatTransport
            });
            if !busy {
                break;
            }
            self.dispatch(FaceEvent::Tick)?;
        }
        Ok(())
    }

    fn reveal(&mut self) -> Result<()> {
        if !self.options.reveal {
            return Ok(());
        }
        let Some(world) = self.face.world() else {
            return Ok(());
        };
        let rooms = |wanted: Hazard| {
            query::hazards(world)
                .iter()
                .filter(|(_, hazard)| *hazard == Some(wanted))
                .map(|(room, _)| room.number().to_string())
                .collect::<Vec<_>>()
                .join(" ")
        };
        let line = format!(
            "  cave: you {}, wumpus {}, bats {}, pits {}, arrows {}",
            query::player_room(world).number(),
            rooms(Hazard::Wumpus),
            rooms(Hazard::Bat),
            rooms(Hazard::Pitfall),
            query::arrows_remaining(world),
        );
        writeln!(self.host.writer(), "{line}").context("failed to write cave layout")
    }
}
