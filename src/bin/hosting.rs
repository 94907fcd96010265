//! Hosting Binary
//!
//! Receives channel updates on a webhook, runs them through the tracker and
//! delivers announcements through the Telegram Bot API.
//!
//! Environment: BOT_TOKEN (omit for a dry run that only logs), BIND_ADDR.

use clap::Parser;
use std::path::PathBuf;
use suitseer::config::Config;
use suitseer::hosting::Courier;
use suitseer::hosting::Desk;
use suitseer::hosting::Journal;
use suitseer::hosting::Server;
use suitseer::hosting::Telegram;
use suitseer::predict::Policy;
use suitseer::tracker::Ledger;
use suitseer::tracker::Tracker;
use suitseer::*;

#[derive(Debug, Parser)]
#[command(author, version, about = "suit prediction webhook host", long_about = None)]
struct Settings {
    /// JSON configuration file; flags below override it.
    #[arg(long)]
    config: Option<PathBuf>,
    /// File holding the last prediction time.
    #[arg(long, default_value = LEDGER_FILE)]
    ledger: PathBuf,
    #[arg(long)]
    cooldown: Option<u64>,
    #[arg(long)]
    offset: Option<RoundNo>,
    #[arg(long)]
    policy: Option<Policy>,
    #[arg(long)]
    position: Option<Position>,
    #[arg(long, allow_negative_numbers = true)]
    destination: Option<ChatId>,
    #[arg(long)]
    trigger: Option<String>,
}

impl Settings {
    fn config(&self) -> anyhow::Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::load(path)?,
            None => Config::default(),
        };
        config.cooldown = self.cooldown.unwrap_or(config.cooldown);
        config.offset = self.offset.unwrap_or(config.offset);
        config.policy = self.policy.unwrap_or(config.policy);
        config.position = self.position.unwrap_or(config.position);
        config.destination = self.destination.unwrap_or(config.destination);
        config.trigger = self.trigger.clone().or(config.trigger);
        config.validate()?;
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    log()?;
    kys();
    let settings = Settings::parse();
    let config = settings.config()?;
    log::info!("[hosting] {:?}", config);
    let courier: Box<dyn Courier> = match std::env::var("BOT_TOKEN") {
        Ok(token) => Box::new(Telegram::new(&token)?),
        Err(_) => {
            log::warn!("[hosting] BOT_TOKEN unset, deliveries are only logged");
            Box::new(Journal::default())
        }
    };
    let bind = std::env::var("BIND_ADDR").unwrap_or_else(|_| String::from("0.0.0.0:8080"));
    let tracker = Tracker::new(config, Ledger::at(&settings.ledger));
    Server::run(Desk::new(tracker, courier), &bind).await
}
