use crate::checker_config::CheckerConfig;
use crate::connection::Connection;
use crate::deadline::Deadline;
use crate::error::{CheckerError, Result};
use crate::report::Report;
use crate::request::REQUEST;
use crate::scenario::{self, Outcome};
use crate::subject::SubjectServer;
use log::{debug, info, warn};
use std::net::{SocketAddr, ToSocketAddrs};

pub struct Checker {
    config: CheckerConfig,
}

impl Checker {
    pub fn new(config: Option<CheckerConfig>) -> Self {
        Checker {
            config: config.unwrap_or_default(),
        }
    }

    /// One grading run: start the subject server, let it settle, run the
    /// scenario under the deadline, stop the server and collect its log.
    ///
    /// The subject server is stopped on every path, including when the run
    /// fails with an error.
    pub fn run(&self) -> Result<Report> {
        let config = &self.config;

        let mut subject =
            SubjectServer::start(&config.server, &config.server_args, &config.log_path)?;

        debug!("Waiting {:?} for the subject server to bind", config.settle);
        std::thread::sleep(config.settle);

        if !subject.is_running() {
            warn!("Subject server {} exited before the scenario started", config.server);
        }

        let deadline = Deadline::after(config.timeout);
        let outcome = self.exercise(deadline);

        subject.stop();

        let outcome = outcome?;
        info!("Outcome {outcome:?}, score {:.2}", outcome.score() * 100.0);

        Ok(Report::new(&config.lab, outcome, &config.log_path))
    }

    fn exercise(&self, deadline: Deadline) -> Result<Outcome> {
        let addr = self.resolve()?;

        let mut connections = match connect_all(&addr, deadline) {
            Ok(connections) => connections,
            Err(err) if err.is_timeout() => {
                warn!("Could not connect to {addr} in time: {err}");
                return Ok(Outcome::TimedOut);
            }
            Err(err) => return Err(err),
        };

        let outcome = scenario::evaluate(REQUEST.as_bytes(), &mut connections);

        debug!("Closing connections to {addr}");
        drop(connections);

        outcome
    }

    fn resolve(&self) -> Result<SocketAddr> {
        let host = &self.config.host;
        let addrs = (host.as_str(), self.config.port)
            .to_socket_addrs()
            .map_err(|source| CheckerError::Resolve {
                host: host.clone(),
                source: Some(source),
            })?
            .collect::<Vec<SocketAddr>>();

        let addr = addrs
            .iter()
            .find(|addr| addr.is_ipv4())
            .or(addrs.first())
            .copied()
            .ok_or_else(|| CheckerError::Resolve {
                host: host.clone(),
                source: None,
            })?;

        debug!("{host} resolved to {addr}");

        Ok(addr)
    }
}

fn connect_all(addr: &SocketAddr, deadline: Deadline) -> Result<[Connection; 3]> {
    Ok([
        Connection::open(addr, deadline)?,
        Connection::open(addr, deadline)?,
        Connection::open(addr, deadline)?,
    ])
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::checker_config::CheckerConfigBuilder;

    #[test]
    fn resolves_localhost_to_loopback() {
        let checker = Checker::new(Some(
            CheckerConfigBuilder::new().host("localhost").port(9999).get(),
        ));

        let addr = checker.resolve().unwrap();

        assert!(addr.ip().is_loopback());
        assert_eq!(addr.port(), 9999);
    }

    #[test]
    fn unresolvable_host_is_an_error() {
        let checker = Checker::new(Some(
            CheckerConfigBuilder::new().host("no-such-host.invalid").get(),
        ));

        assert!(matches!(checker.resolve(), Err(CheckerError::Resolve { .. })));
    }
}
