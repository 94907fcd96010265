//! Replay Binary
//!
//! Feeds a file of channel messages through a tracker with a simulated clock
//! and prints every decision. One message per line; an `edit:` prefix marks
//! the line as an edit of an earlier message. Nothing is persisted.

use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;
use std::time::SystemTime;
use suitseer::config::Config;
use suitseer::predict::Policy;
use suitseer::tracker::Ledger;
use suitseer::tracker::Tracker;
use suitseer::tracker::Update;
use suitseer::*;

#[derive(Debug, Parser)]
#[command(author, version, about = "replay a message log through the tracker", long_about = None)]
struct Settings {
    /// Message log to replay.
    input: PathBuf,
    /// JSON configuration file.
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long)]
    policy: Option<Policy>,
    /// Simulated seconds between consecutive lines.
    #[arg(long, default_value_t = 60)]
    interval: u64,
}

fn main() -> anyhow::Result<()> {
    log()?;
    let settings = Settings::parse();
    let mut config = match &settings.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    config.policy = settings.policy.unwrap_or(config.policy);
    let mut tracker = Tracker::new(config, Ledger::memory());
    let text = std::fs::read_to_string(&settings.input)?;
    let step = Duration::from_secs(settings.interval);
    let mut now = SystemTime::UNIX_EPOCH;
    let mut receipt = 0;
    let (mut opened, mut won, mut lost) = (0, 0, 0);
    for line in text.lines().map(str::trim).filter(|l| !l.is_empty()) {
        now += step;
        let update = match line.strip_prefix("edit:") {
            Some(rest) => Update::edit(rest.trim(), 0),
            None => Update::new(line, 0),
        };
        let decision = tracker.ingest(&update, now);
        if decision.is_empty() {
            continue;
        }
        if let Some(post) = &decision.opened {
            receipt += 1;
            opened += 1;
            tracker.bind(post.target, receipt);
        }
        for edit in decision.edits() {
            match edit.text.ends_with('❌') {
                true => lost += 1,
                false => won += 1,
            }
        }
        println!("{:<40} {}", line, decision);
    }
    println!(
        "opened {} · won {} · lost {} · pending {}",
        opened,
        won,
        lost,
        tracker.pending().count()
    );
    Ok(())
}
