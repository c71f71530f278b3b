use std::path::PathBuf;
use std::time::Duration;

pub struct CheckerConfig {
    pub host: String,
    pub port: u16,
    /// Subject server executable, started with `server_args`.
    pub server: String,
    pub server_args: Vec<String>,
    pub log_path: PathBuf,
    /// Pause between starting the subject server and the first connect.
    pub settle: Duration,
    /// Budget for connecting, sending and receiving on all three connections.
    pub timeout: Duration,
    /// Key of the score in the final JSON line.
    pub lab: String,
}

impl Default for CheckerConfig {
    fn default() -> Self {
        CheckerConfig {
            host: String::from("127.0.0.1"),
            port: 9999,
            server: String::from("./liso_server"),
            server_args: vec![],
            log_path: PathBuf::from("test.log"),
            settle: Duration::from_secs(2),
            timeout: Duration::from_secs(5),
            lab: String::from("lab4"),
        }
    }
}

pub struct CheckerConfigBuilder {
    checker_config: CheckerConfig,
}

#[allow(clippy::new_without_default)]
impl CheckerConfigBuilder {
    pub fn new() -> Self {
        CheckerConfigBuilder {
            checker_config: CheckerConfig::default(),
        }
    }

    pub fn host(mut self, host: &str) -> Self {
        self.checker_config.host = host.to_string();

        self
    }

    pub fn port(mut self, port: u16) -> Self {
        self.checker_config.port = port;

        self
    }

    pub fn server(mut self, server: &str) -> Self {
        self.checker_config.server = server.to_string();

        self
    }

    pub fn server_args(mut self, args: &[&str]) -> Self {
        self.checker_config.server_args = args.iter().map(|arg| arg.to_string()).collect();

        self
    }

    pub fn log_path(mut self, log_path: impl Into<PathBuf>) -> Self {
        self.checker_config.log_path = log_path.into();

        self
    }

    pub fn settle(mut self, settle: Duration) -> Self {
        self.checker_config.settle = settle;

        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.checker_config.timeout = timeout;

        self
    }

    pub fn lab(mut self, lab: &str) -> Self {
        self.checker_config.lab = lab.to_string();

        self
    }

    pub fn get(self) -> CheckerConfig {
        self.checker_config
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn defaults_match_the_lab_setup() {
        let config = CheckerConfigBuilder::new().get();

        assert_eq!(config.server, "./liso_server");
        assert!(config.server_args.is_empty());
        assert_eq!(config.log_path, PathBuf::from("test.log"));
        assert_eq!(config.settle, Duration::from_secs(2));
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.lab, "lab4");
    }

    #[test]
    fn builder_overrides_fields() {
        let config = CheckerConfigBuilder::new()
            .host("localhost")
            .port(8080)
            .server("sh")
            .server_args(&["-c", "exec sleep 30"])
            .timeout(Duration::from_millis(300))
            .get();

        assert_eq!(config.host, "localhost");
        assert_eq!(config.port, 8080);
        assert_eq!(config.server_args, vec!["-c", "exec sleep 30"]);
        assert_eq!(config.timeout, Duration::from_millis(300));
    }
}
