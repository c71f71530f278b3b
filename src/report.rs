use crate::scenario::Outcome;
use log::debug;
use std::io::Write;
use std::path::Path;

pub const LOG_HEADER: &str = "=== Server Log ===";
pub const LOG_FOOTER: &str = "=== End Server Log ===";
pub const NO_LOG: &str = "No log file found";

/// Everything a run prints to stdout, in order: the scenario notice, the
/// subject server's captured output and the score line.
#[derive(Debug)]
pub struct Report {
    pub lab: String,
    pub outcome: Outcome,
    pub server_log: Option<String>,
}

impl Report {
    pub fn new(lab: &str, outcome: Outcome, log_path: &Path) -> Self {
        Report {
            lab: lab.to_string(),
            outcome,
            server_log: read_server_log(log_path),
        }
    }

    pub fn score(&self) -> f64 {
        self.outcome.score() * 100.0
    }

    /// `{"scores": {"lab4": 100.00}}`, the line the grade collator reads.
    pub fn score_line(&self) -> String {
        format!("{{\"scores\": {{\"{}\": {:.2}}}}}", self.lab, self.score())
    }

    pub fn write_to(&self, out: &mut impl Write) -> std::io::Result<()> {
        if let Some(notice) = self.outcome.notice() {
            writeln!(out, "{notice}")?;
        }

        writeln!(out, "{LOG_HEADER}")?;
        match &self.server_log {
            Some(log) => writeln!(out, "{log}")?,
            None => writeln!(out, "{NO_LOG}")?,
        }
        writeln!(out, "{LOG_FOOTER}")?;

        writeln!(out, "{}", self.score_line())?;
        out.flush()
    }
}

fn read_server_log(log_path: &Path) -> Option<String> {
    match std::fs::read(log_path) {
        Ok(bytes) => Some(String::from_utf8_lossy(&bytes).into_owned()),
        Err(err) => {
            debug!("Could not read {}: {err}", log_path.display());
            None
        }
    }
}
