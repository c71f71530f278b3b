use crate::error::{CheckerError, Result};
use log::{debug, info, warn};
use std::fs::File;
use std::path::Path;
use std::process::{Child, Command, Stdio};

/// The server under test, running as a child of the checker with its stdout
/// and stderr both written to one log file.
///
/// The child is stopped by `stop`, or when the handle is dropped, so a run
/// that aborts halfway still tears the server down.
pub struct SubjectServer {
    program: String,
    child: Option<Child>,
}

impl SubjectServer {
    pub fn start(program: &str, args: &[String], log_path: &Path) -> Result<Self> {
        let log_error = |source| CheckerError::LogFile {
            path: log_path.display().to_string(),
            source,
        };

        let stdout = File::create(log_path).map_err(log_error)?;
        let stderr = stdout.try_clone().map_err(log_error)?;

        let child = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(stdout)
            .stderr(stderr)
            .spawn()
            .map_err(|source| CheckerError::Spawn {
                program: program.to_string(),
                source,
            })?;

        info!(
            "Started subject server {program} (pid {}), output in {}",
            child.id(),
            log_path.display()
        );

        Ok(SubjectServer {
            program: program.to_string(),
            child: Some(child),
        })
    }

    pub fn is_running(&mut self) -> bool {
        match &mut self.child {
            Some(child) => matches!(child.try_wait(), Ok(None)),
            None => false,
        }
    }

    /// Kills and reaps the child. Best-effort: failures are only logged.
    /// Calling it again is a no-op.
    pub fn stop(&mut self) {
        let Some(mut child) = self.child.take() else {
            return;
        };

        match child.try_wait() {
            Ok(Some(status)) => {
                debug!("Subject server {} had already exited: {status}", self.program);
                return;
            }
            Ok(None) => {}
            Err(err) => warn!("Could not query subject server {}: {err}", self.program),
        }

        if let Err(err) = child.kill() {
            warn!("Could not kill subject server {}: {err}", self.program);
        }

        match child.wait() {
            Ok(status) => debug!("Subject server {} stopped: {status}", self.program),
            Err(err) => warn!("Could not reap subject server {}: {err}", self.program),
        }
    }
}

impl Drop for SubjectServer {
    fn drop(&mut self) {
        self.stop();
    }
}
