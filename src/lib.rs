//! Suit prediction and verification over a broadcast stream of card rounds.
//!
//! Each incoming message describes one round: a `#N<digits>` round tag and one
//! or more parenthesized groups of suit glyphs. The tracker decides when to
//! announce a prediction for a future round's dominant suit, then resolves it
//! against the rounds that follow.
//!
//! ## Pipeline
//!
//! - [`parse`]: round number and suit groups from raw text
//! - [`classify`]: excluded, provisional, finalized or unmarked
//! - [`predict`]: opening predictions under a suit policy and a cooldown
//! - [`verify`]: resolving pending predictions over a forward window
//! - [`tracker`]: the single owner of all mutable state
//!
//! The [`hosting`] module (feature `server`) wires the tracker to a webhook
//! and a delivery channel.
pub mod cards;
pub mod classify;
pub mod config;
pub mod parse;
pub mod predict;
pub mod tracker;
pub mod verify;

#[cfg(feature = "server")]
pub mod hosting;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Round number as announced by the `#N` tag.
pub type RoundNo = u64;
/// Chat or channel identifier (negative for channels).
pub type ChatId = i64;
/// Identifier of a delivered message within its chat.
pub type MessageId = i64;
/// Identifier of a human sender, used by the admin allow-list.
pub type UserId = i64;
/// Card position inside the first group (1-based).
pub type Position = u8;

// ============================================================================
// VERIFICATION WINDOW
// ============================================================================
/// Furthest round past the target that may still settle a prediction.
pub const LOOKAHEAD: RoundNo = 3;
/// Occurrences of the predicted suit in the first group needed to win.
pub const WIN_THRESHOLD: usize = 3;
/// Rounds past the window a late final edit may still take before an
/// undecided prediction expires as lost.
pub const EXPIRY_MARGIN: RoundNo = 2;

// ============================================================================
// PREDICTION PARAMETERS
// ============================================================================
/// Seconds between two opened predictions unless reconfigured.
pub const COOLDOWN_DEFAULT: u64 = 30;
/// Smallest cooldown an operator may set.
pub const COOLDOWN_MIN: u64 = 30;
/// Largest cooldown an operator may set.
pub const COOLDOWN_MAX: u64 = 600;
/// Rounds between source and target for the first-suit policy.
pub const OFFSET_DEFAULT: RoundNo = 2;
pub const OFFSET_MIN: RoundNo = 1;
pub const OFFSET_MAX: RoundNo = 50;
/// Offset when the missing suit is a club or a diamond.
pub const OFFSET_MISSING_MINOR: RoundNo = 4;
/// Offset when the missing suit is a spade or a heart.
pub const OFFSET_MISSING_MAJOR: RoundNo = 2;
/// Card occurrences each of the first two groups must hold for the missing-suit policy.
pub const MISSING_GROUP_CARDS: usize = 2;

// ============================================================================
// BOUNDED MEMORY
// ============================================================================
/// Processed message digests kept before the set is wiped.
pub const SEEN_CAPACITY: usize = 1024;
/// Provisional rounds remembered while waiting for their final edit.
pub const DRAFT_CAPACITY: usize = 256;

// ============================================================================
// PERSISTENCE
// ============================================================================
/// Default file holding the last prediction timestamp.
pub const LEDGER_FILE: &str = ".last_prediction_time";

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "server")]
pub fn log() -> anyhow::Result<()> {
    std::fs::create_dir_all("logs")?;
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)?
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time))?,
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file])?;
    Ok(())
}

/// Register Ctrl+C handler for immediate (non-graceful) termination.
#[cfg(feature = "server")]
pub fn kys() {
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            println!();
            log::warn!("violent interrupt received, exiting immediately");
            std::process::exit(0);
        }
    });
}
