//! Per-agent interaction counts and their plain-text export.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use super::error::Result;

/// First line of the exported log.
pub const LOG_HEADER: &str = "Log de Interacoes por Agente:";

/// Separator written under the header.
pub const LOG_SEPARATOR: &str = "----------------------------------------------";

/// Interaction counts keyed by agent name, iterated in name order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InteractionLedger {
    counts: BTreeMap<String, u32>,
}

impl InteractionLedger {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one interaction for `agent`, creating the entry on first use.
    pub fn record(&mut self, agent: &str) {
        *self.counts.entry(agent.to_owned()).or_insert(0) += 1;
    }

    /// Number of interactions recorded for `agent`.
    pub fn count(&self, agent: &str) -> u32 {
        self.counts.get(agent).copied().unwrap_or(0)
    }

    /// Sum of all recorded interactions.
    pub fn total(&self) -> u64 {
        self.counts.values().map(|&n| u64::from(n)).sum()
    }

    /// Number of agents with an entry.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Returns `true` if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Entries in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.counts.iter().map(|(name, &n)| (name.as_str(), n))
    }

    /// Writes the header and one line per entry to `out`.
    pub fn write_log<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out, "{LOG_HEADER}")?;
        writeln!(out, "{LOG_SEPARATOR}")?;
        for (name, n) in self.iter() {
            writeln!(out, "{name} interagiu {n} vezes.")?;
        }
        Ok(())
    }

    /// Writes the log to `path`, replacing any existing file.
    pub fn export(&self, path: impl AsRef<Path>) -> Result<()> {
        let mut out = BufWriter::new(File::create(path)?);
        self.write_log(&mut out)?;
        out.flush()?;
        Ok(())
    }
}

impl FromIterator<(String, u32)> for InteractionLedger {
    fn from_iter<T: IntoIterator<Item = (String, u32)>>(iter: T) -> Self {
        Self {
            counts: iter.into_iter().collect(),
        }
    }
}
