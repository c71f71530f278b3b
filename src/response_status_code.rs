use std::fmt::{Display, Formatter};

/// Status codes a lab subject server is expected to answer with.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ResponseStatusCode {
    Ok = 200,
    BadRequest = 400,
    NotFound = 404,
    RequestTimeout = 408,
    InternalServerError = 500,
    NotImplemented = 501,
    ServiceUnavailable = 503,
    HttpVersionNotSupported = 505,
}

impl ResponseStatusCode {
    pub fn code(&self) -> u16 {
        *self as u16
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.code())
    }
}

impl TryFrom<u16> for ResponseStatusCode {
    type Error = u16;

    fn try_from(code: u16) -> Result<Self, u16> {
        match code {
            200 => Ok(ResponseStatusCode::Ok),
            400 => Ok(ResponseStatusCode::BadRequest),
            404 => Ok(ResponseStatusCode::NotFound),
            408 => Ok(ResponseStatusCode::RequestTimeout),
            500 => Ok(ResponseStatusCode::InternalServerError),
            501 => Ok(ResponseStatusCode::NotImplemented),
            503 => Ok(ResponseStatusCode::ServiceUnavailable),
            505 => Ok(ResponseStatusCode::HttpVersionNotSupported),
            other => Err(other),
        }
    }
}

/// Canonical reason phrase, e.g. `OK` or `Bad Request`.
impl Display for ResponseStatusCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let reason = match self {
            ResponseStatusCode::Ok => "OK",
            ResponseStatusCode::BadRequest => "Bad Request",
            ResponseStatusCode::NotFound => "Not Found",
            ResponseStatusCode::RequestTimeout => "Request Timeout",
            ResponseStatusCode::InternalServerError => "Internal Server Error",
            ResponseStatusCode::NotImplemented => "Not Implemented",
            ResponseStatusCode::ServiceUnavailable => "Service Unavailable",
            ResponseStatusCode::HttpVersionNotSupported => "HTTP Version Not Supported",
        };

        write!(f, "{}", reason)
    }
}
