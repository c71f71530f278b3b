mod subject;

pub mod checker;
pub mod checker_config;
pub mod connection;
pub mod deadline;
pub mod error;
pub mod http_version;
pub mod report;
pub mod request;
pub mod response_status_code;
pub mod scenario;
pub mod status_line;

#[cfg(test)]
mod test;
