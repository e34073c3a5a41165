//! Session Simulator Binary
//!
//! Plays a whole two-part session with randomly answering participants
//! and prints every participant's final statement.

use clap::Parser;
use colored::Colorize;
use lossworlds::*;
use lossworlds::payoff::Submissions;
use lossworlds::session::Config;
use lossworlds::session::Session;
use lossworlds::survey::Choices;
use lossworlds::survey::Part;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about = "Simulate a two-part loss-domain survey session", long_about = None)]
struct Args {
    #[arg(short, long, help = "Participants, a multiple of three")]
    participants: Option<usize>,
    #[arg(short, long, help = "Seed for choices and draws")]
    seed: Option<u64>,
    #[arg(short, long, help = "JSON session config, otherwise read from the environment")]
    config: Option<PathBuf>,
    #[arg(short, long, help = "Write the ledger snapshot here")]
    output: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    log();
    let args = Args::parse();
    let config = match args.config {
        Some(ref path) => Config::from_file(path)?,
        None => Config::from_env()?,
    };
    let config = match args.participants {
        Some(n) => config.with_participants(n)?,
        None => config,
    };
    let ref mut rng = match args.seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_rng(&mut rand::rng()),
    };
    log::info!("{}", config.table());
    let mut session = Session::new(config)?;
    for part in Part::all() {
        if part == Part::Two {
            session.treat()?;
        }
        let submissions = session
            .participants()
            .map(|id| (id, Choices::sample(rng)))
            .collect::<Submissions>();
        for round in session.play(part, &submissions, rng)? {
            println!("{}", round);
        }
    }
    let mut statements = session.statements()?.into_iter();
    for group in session.groups() {
        print!("{}", group.to_string().bold());
        for (_, statement) in statements.by_ref().take(N) {
            let money = format!("{:.2} {}", statement.money(), REAL_WORLD_CURRENCY_CODE);
            println!("{} {}", statement.role().to_string().cyan(), money.green());
            println!("{}", statement);
        }
    }
    if let Some(ref path) = args.output {
        session.into_ledger().save(path)?;
    }
    Ok(())
}
