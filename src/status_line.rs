use crate::http_version::HttpVersion;
use crate::response_status_code::ResponseStatusCode;
use std::fmt::{Display, Formatter};

#[derive(Debug, PartialEq)]
pub struct StatusLine {
    pub version: HttpVersion,
    pub code: u16,
    pub reason: String,
}

impl StatusLine {
    pub fn new(version: HttpVersion, status: ResponseStatusCode) -> Self {
        StatusLine {
            version,
            code: status.code(),
            reason: status.to_string(),
        }
    }

    /// Reads the status line at the start of a response chunk. Returns `None`
    /// when the chunk doesn't begin with something shaped like one.
    pub fn parse(response: &str) -> Option<Self> {
        let line = response.lines().next()?;
        let mut parts = line.splitn(3, ' ');

        let version = parts.next()?.parse::<HttpVersion>().ok()?;
        let code = parts
            .next()
            .filter(|code| code.len() == 3)?
            .parse::<u16>()
            .ok()?;
        let reason = parts.next().unwrap_or_default().trim_end().to_string();

        Some(StatusLine {
            version,
            code,
            reason,
        })
    }

    pub fn status(&self) -> Option<ResponseStatusCode> {
        ResponseStatusCode::try_from(self.code).ok()
    }
}

impl Display for StatusLine {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}", self.version, self.code, self.reason)
    }
}

/// The text every response must contain to count as a success:
/// `HTTP/1.1 200 OK`.
pub fn success_marker() -> String {
    StatusLine::new(HttpVersion::Http1_1, ResponseStatusCode::Ok).to_string()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn success_marker_is_http11_200() {
        assert_eq!(success_marker(), "HTTP/1.1 200 OK");
    }

    #[test]
    fn parses_status_line_of_a_chunk() {
        let line = StatusLine::parse("HTTP/1.1 400 Bad Request\r\n\r\n").unwrap();

        assert_eq!(line.version, HttpVersion::Http1_1);
        assert_eq!(line.code, 400);
        assert_eq!(line.reason, "Bad Request");
        assert_eq!(line.status(), Some(ResponseStatusCode::BadRequest));
    }

    #[test]
    fn keeps_unknown_codes() {
        let line = StatusLine::parse("HTTP/1.0 418 I'm a teapot\r\n").unwrap();

        assert_eq!(line.code, 418);
        assert_eq!(line.status(), None);
        assert_eq!(line.to_string(), "HTTP/1.0 418 I'm a teapot");
    }

    #[test]
    fn rejects_chunks_without_status_line() {
        assert_eq!(StatusLine::parse(""), None);
        assert_eq!(StatusLine::parse("GET / HTTP/1.1\r\n"), None);
        assert_eq!(StatusLine::parse("HTTP/1.1 2000 OK\r\n"), None);
    }
}
