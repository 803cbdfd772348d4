//! Batch run tally.

use std::fmt;

/// Per-item outcomes of a batch run.
///
/// One item's failure never stops the batch; it is recorded here and
/// the run moves on to the next item.
#[derive(Debug, Default)]
pub struct RunReport {
    succeeded: Vec<String>,
    failed: Vec<(String, String)>,
}

impl RunReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_success(&mut self, name: &str) {
        self.succeeded.push(name.to_string());
    }

    pub fn record_failure(&mut self, name: &str, reason: String) {
        self.failed.push((name.to_string(), reason));
    }

    pub fn total(&self) -> usize {
        self.succeeded.len() + self.failed.len()
    }

    pub fn all_ok(&self) -> bool {
        self.failed.is_empty()
    }

    pub fn succeeded(&self) -> &[String] {
        &self.succeeded
    }

    pub fn failed(&self) -> &[(String, String)] {
        &self.failed
    }
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", "=".repeat(60))?;
        writeln!(f, "FINAL REPORT")?;
        writeln!(f, "{}", "=".repeat(60))?;
        writeln!(f, "Items run: {}", self.total())?;
        writeln!(f, "Succeeded: {}", self.succeeded.len())?;
        writeln!(f, "Failed:    {}", self.failed.len())?;
        for (name, reason) in &self.failed {
            writeln!(f, "  {name}: {reason}")?;
        }
        Ok(())
    }
}
