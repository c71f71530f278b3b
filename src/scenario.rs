use crate::connection::{Connection, Transport};
use crate::error::{CheckerError, Result};
use crate::status_line::{success_marker, StatusLine};
use log::{debug, info, warn};

pub const TIMEOUT_NOTICE: &str = "Timeout reached";
pub const MISMATCH_NOTICE: &str =
    "[problem] Please realize this week's task on the basis of last week.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Every connection answered with `HTTP/1.1 200 OK`.
    Passed,
    /// Every connection answered, at least one without the success marker.
    Mismatch,
    /// The run deadline expired before all answers were in.
    TimedOut,
}

impl Outcome {
    pub fn score(&self) -> f64 {
        match self {
            Outcome::Passed => 1.0,
            Outcome::Mismatch => 0.5,
            Outcome::TimedOut => 0.0,
        }
    }

    /// Line printed to the grader ahead of the server log.
    pub fn notice(&self) -> Option<&'static str> {
        match self {
            Outcome::Passed => None,
            Outcome::Mismatch => Some(MISMATCH_NOTICE),
            Outcome::TimedOut => Some(TIMEOUT_NOTICE),
        }
    }
}

/// Sends `request` on all three connections, then reads one chunk from each,
/// in order. A deadline expiry anywhere in between scores as `TimedOut`; any
/// other fault is returned.
pub fn evaluate<S: Transport>(
    request: &[u8],
    connections: &mut [Connection<S>; 3],
) -> Result<Outcome> {
    match exchange(request, connections) {
        Ok(responses) => Ok(judge(&responses)),
        Err(err) if err.is_timeout() => {
            warn!("Subject server did not answer in time: {err}");
            Ok(Outcome::TimedOut)
        }
        Err(err) => Err(err),
    }
}

fn exchange<S: Transport>(
    request: &[u8],
    connections: &mut [Connection<S>; 3],
) -> Result<Vec<String>> {
    for (index, connection) in connections.iter_mut().enumerate() {
        connection.send(request)?;
        debug!("Sent {} request bytes on connection {}", request.len(), index + 1);
    }

    let mut responses = Vec::with_capacity(connections.len());

    for (index, connection) in connections.iter_mut().enumerate() {
        let chunk = connection.read_chunk()?;
        let response = String::from_utf8(chunk).map_err(|err| CheckerError::Decode {
            connection: index + 1,
            source: err.utf8_error(),
        })?;

        match StatusLine::parse(&response) {
            Some(status_line) => info!("Connection {}: {status_line}", index + 1),
            None if response.is_empty() => {
                info!("Connection {}: closed without answering", index + 1)
            }
            None => info!(
                "Connection {}: no status line in {} bytes",
                index + 1,
                response.len()
            ),
        }

        responses.push(response);
    }

    Ok(responses)
}

fn judge(responses: &[String]) -> Outcome {
    let marker = success_marker();

    if responses.iter().all(|response| response.contains(&marker)) {
        Outcome::Passed
    } else {
        Outcome::Mismatch
    }
}
