use std::path::Path;
use std::path::PathBuf;
use std::time::Duration;
use std::time::SystemTime;

/// Durable home of the last-prediction timestamp.
///
/// The file holds fractional seconds since the epoch as plain text; `0`
/// stands for "never". A ledger without a path keeps nothing.
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    path: Option<PathBuf>,
}

impl Ledger {
    pub fn memory() -> Self {
        Self { path: None }
    }
    pub fn at(path: impl AsRef<Path>) -> Self {
        Self {
            path: Some(path.as_ref().to_path_buf()),
        }
    }
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
    /// Missing, unreadable or zero stamps all read as `None`.
    pub fn load(&self) -> Option<SystemTime> {
        let path = self.path.as_ref()?;
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) => {
                log::debug!("[ledger] nothing at {}: {}", path.display(), e);
                return None;
            }
        };
        match text.trim().parse::<f64>() {
            Ok(secs) if secs.is_finite() && secs > 0. => {
                Some(SystemTime::UNIX_EPOCH + Duration::from_secs_f64(secs))
            }
            Ok(_) => None,
            Err(e) => {
                log::warn!("[ledger] unreadable stamp in {}: {}", path.display(), e);
                None
            }
        }
    }
    pub fn save(&self, last: Option<SystemTime>) -> anyhow::Result<()> {
        let Some(path) = self.path.as_ref() else {
            return Ok(());
        };
        let secs = last
            .and_then(|t| t.duration_since(SystemTime::UNIX_EPOCH).ok())
            .map(|d| d.as_secs_f64())
            .unwrap_or(0.);
        std::fs::write(path, secs.to_string())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_keeps_nothing() {
        let ledger = Ledger::memory();
        assert!(ledger.save(Some(SystemTime::now())).is_ok());
        assert_eq!(ledger.load(), None);
    }

    #[test]
    fn survives_restart() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(crate::LEDGER_FILE);
        let stamp = SystemTime::UNIX_EPOCH + Duration::from_millis(1_700_000_000_250);
        Ledger::at(&path).save(Some(stamp)).unwrap();
        let loaded = Ledger::at(&path).load().unwrap();
        let drift = loaded
            .duration_since(stamp)
            .unwrap_or_else(|e| e.duration());
        assert!(drift < Duration::from_millis(1));
    }

    #[test]
    fn zero_means_never() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(crate::LEDGER_FILE);
        let ledger = Ledger::at(&path);
        ledger.save(None).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "0");
        assert_eq!(ledger.load(), None);
    }

    #[test]
    fn garbage_reads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(crate::LEDGER_FILE);
        std::fs::write(&path, "yesterday").unwrap();
        assert_eq!(Ledger::at(&path).load(), None);
        assert_eq!(Ledger::at(dir.path().join("absent")).load(), None);
    }
}
