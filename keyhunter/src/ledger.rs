//! The previous-winners ledger: an append-only list of names.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// Errors touching the winners file.
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("failed to access winners file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Append-and-list storage for winner names. No uniqueness, no ordering beyond append order.
pub trait OutcomeLedger {
    /// Record a name. Blank names are skipped.
    fn append(&mut self, name: &str) -> Result<(), LedgerError>;

    /// All names recorded so far. A ledger that was never written is empty.
    fn list_all(&self) -> Result<Vec<String>, LedgerError>;
}

/// Winners stored in a UTF-8 text file, one name per line.
///
/// The file is opened, appended and closed on every write, and read whole on
/// every listing.
#[derive(Debug, Clone)]
pub struct WinnersFile {
    path: PathBuf,
}

impl WinnersFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> LedgerError {
        LedgerError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

/// Keep each entry on a single line. Blank names have no entry.
fn entry_line(name: &str) -> Option<String> {
    let line = name
        .lines()
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    if line.is_empty() {
        debug!("blank winner name, nothing recorded");
        None
    } else {
        Some(line)
    }
}

impl OutcomeLedger for WinnersFile {
    fn append(&mut self, name: &str) -> Result<(), LedgerError> {
        let Some(line) = entry_line(name) else {
            return Ok(());
        };
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| self.io_error(e))?;
        writeln!(file, "{}", line).map_err(|e| self.io_error(e))?;
        info!(path = %self.path.display(), "winner recorded");
        Ok(())
    }

    fn list_all(&self) -> Result<Vec<String>, LedgerError> {
        match std::fs::read_to_string(&self.path) {
            Ok(text) => Ok(text
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(str::to_string)
                .collect()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(self.io_error(e)),
        }
    }
}

/// A ledger kept in memory, for embedding the game without touching disk.
#[derive(Debug, Clone, Default)]
pub struct MemoryLedger {
    names: Vec<String>,
}

impl MemoryLedger {
    pub fn new() -> Self {
        Self::default()
    }
}

impl OutcomeLedger for MemoryLedger {
    fn append(&mut self, name: &str) -> Result<(), LedgerError> {
        self.names.extend(entry_line(name));
        Ok(())
    }

    fn list_all(&self) -> Result<Vec<String>, LedgerError> {
        Ok(self.names.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_lists_empty() {
        let dir = tempfile::tempdir().unwrap();
        let ledger = WinnersFile::new(dir.path().join("winners.txt"));
        assert!(ledger.list_all().unwrap().is_empty());
    }

    #[test]
    fn test_append_then_list() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("winners.txt");
        let mut ledger = WinnersFile::new(&path);

        ledger.append("Ada").unwrap();
        ledger.append("Grace").unwrap();
        ledger.append("Ada").unwrap();

        assert_eq!(ledger.list_all().unwrap(), vec!["Ada", "Grace", "Ada"]);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "Ada\nGrace\nAda\n");
    }

    #[test]
    fn test_appends_to_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("winners.txt");
        std::fs::write(&path, "Oisin\n\n").unwrap();

        let mut ledger = WinnersFile::new(&path);
        ledger.append("Conor").unwrap();
        assert_eq!(ledger.list_all().unwrap(), vec!["Oisin", "Conor"]);
    }

    #[test]
    fn test_names_stay_on_one_line() {
        let mut ledger = MemoryLedger::new();
        ledger.append("  Ada\nLovelace ").unwrap();
        assert_eq!(ledger.list_all().unwrap(), vec!["Ada Lovelace"]);
    }

    #[test]
    fn test_blank_names_are_skipped_by_both_ledgers() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("winners.txt");
        let mut file = WinnersFile::new(&path);
        let mut memory = MemoryLedger::new();

        for name in ["", "  ", " \n ", "Grace"] {
            file.append(name).unwrap();
            memory.append(name).unwrap();
        }

        assert_eq!(file.list_all().unwrap(), vec!["Grace"]);
        assert_eq!(memory.list_all().unwrap(), file.list_all().unwrap());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "Grace\n");
    }

    #[test]
    fn test_unreadable_path_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let ledger = WinnersFile::new(dir.path());
        assert!(ledger.list_all().is_err());
    }
}
