use clap::error::ErrorKind;
use clap::Parser;
use lab_checker::checker::Checker;
use lab_checker::checker_config::{CheckerConfig, CheckerConfigBuilder};
use log::{debug, LevelFilter};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(name = "checker", version)]
#[command(about = "Grades a lab HTTP server with three concurrent GET requests")]
struct Args {
    /// Host the subject server listens on
    host: String,

    /// Port the subject server listens on
    port: u16,

    /// Subject server executable
    #[arg(long, default_value = "./liso_server")]
    server: String,

    /// Argument for the subject server, may be repeated
    #[arg(long = "server-arg", allow_hyphen_values = true)]
    server_args: Vec<String>,

    /// File receiving the subject server's stdout and stderr
    #[arg(long, default_value = "test.log")]
    log_file: PathBuf,

    #[arg(long, default_value = "2000")]
    settle_ms: u64,

    #[arg(long, default_value = "5000")]
    timeout_ms: u64,

    /// Key of the score in the JSON line
    #[arg(long, default_value = "lab4")]
    lab: String,
}

impl Args {
    fn into_config(self) -> CheckerConfig {
        let server_args = self
            .server_args
            .iter()
            .map(String::as_str)
            .collect::<Vec<&str>>();

        CheckerConfigBuilder::new()
            .host(&self.host)
            .port(self.port)
            .server(&self.server)
            .server_args(&server_args)
            .log_path(self.log_file)
            .settle(Duration::from_millis(self.settle_ms))
            .timeout(Duration::from_millis(self.timeout_ms))
            .lab(&self.lab)
            .get()
    }
}

fn main() -> ExitCode {
    pretty_env_logger::formatted_timed_builder()
        .filter_level(LevelFilter::Warn)
        .parse_default_env()
        .init();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.exit()
        }
        Err(err) => {
            let _ = err.print();
            return ExitCode::from(1);
        }
    };

    debug!("{args:?}");

    let checker = Checker::new(Some(args.into_config()));

    let report = match checker.run() {
        Ok(report) => report,
        Err(err) => {
            eprintln!("checker: {err}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(err) = report.write_to(&mut std::io::stdout().lock()) {
        eprintln!("checker: could not print report: {err}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn host_and_port_are_required() {
        let err = Args::try_parse_from(["checker", "127.0.0.1"]).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn port_must_fit_u16() {
        let err = Args::try_parse_from(["checker", "127.0.0.1", "70000"]).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::ValueValidation);
    }

    #[test]
    fn defaults_to_the_lab_setup() {
        let config = Args::try_parse_from(["checker", "127.0.0.1", "9999"])
            .unwrap()
            .into_config();

        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 9999);
        assert_eq!(config.server, "./liso_server");
        assert_eq!(config.log_path, PathBuf::from("test.log"));
        assert_eq!(config.settle, Duration::from_secs(2));
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.lab, "lab4");
    }

    #[test]
    fn server_args_keep_their_order() {
        let config = Args::try_parse_from([
            "checker",
            "localhost",
            "8080",
            "--server",
            "sh",
            "--server-arg",
            "-c",
            "--server-arg",
            "exec ./liso_server 8080",
        ])
        .unwrap()
        .into_config();

        assert_eq!(config.server, "sh");
        assert_eq!(config.server_args, vec!["-c", "exec ./liso_server 8080"]);
    }
}
