/// The request sent on every connection.
///
/// The `Accept`, `User-Agent` and `Accept-Encoding` headers run into each
/// other without CRLF. Existing subject servers are graded against exactly
/// these bytes, so keep them as they are.
pub const REQUEST: &str = concat!(
    "GET / HTTP/1.1\r\n",
    "Host: www.cs.cmu.edu\r\n",
    "Connection: keep-alive\r\n",
    "Accept: text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8",
    "User-Agent: Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) ",
    "Chrome/39.0.2171.99 Safari/537.36",
    "Accept-Encoding: gzip, deflate, sdch\r\n",
    "Accept-Language: en-US,en;q=0.8\r\n",
    "\r\n",
);

#[cfg(test)]
mod test {
    use super::REQUEST;

    #[test]
    fn is_a_single_get_terminated_by_an_empty_line() {
        assert!(REQUEST.starts_with("GET / HTTP/1.1\r\n"));
        assert!(REQUEST.ends_with("\r\n\r\n"));
        assert_eq!(REQUEST.matches("\r\n\r\n").count(), 1);
    }

    #[test]
    fn keeps_run_together_headers() {
        assert!(REQUEST.contains("q=0.8User-Agent: Mozilla/5.0"));
        assert!(REQUEST.contains("Safari/537.36Accept-Encoding: gzip"));
        assert_eq!(REQUEST.split("\r\n").count(), 7);
    }
}
