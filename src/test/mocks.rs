use crate::connection::Transport;
use std::io::{Read, Write};
use std::time::Duration;

pub struct MockTransport {
    pub(crate) read_buf: Vec<u8>,
    pub(crate) write_buf: Vec<u8>,
    bound: Option<Duration>,
    read_fault: Option<std::io::ErrorKind>,
}

impl MockTransport {
    pub fn replying(reply: &[u8]) -> Self {
        MockTransport {
            read_buf: reply.to_vec(),
            write_buf: vec![],
            bound: None,
            read_fault: None,
        }
    }

    /// Accepts writes, but every read fails with `kind`, the way a socket
    /// whose read timeout elapsed does.
    pub fn failing_reads(kind: std::io::ErrorKind) -> Self {
        MockTransport {
            read_fault: Some(kind),
            ..MockTransport::replying(b"")
        }
    }

    pub fn written(&self) -> &[u8] {
        &self.write_buf
    }

    pub fn last_bound(&self) -> Option<Duration> {
        self.bound
    }
}

impl Read for MockTransport {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        if let Some(kind) = self.read_fault {
            return Err(kind.into());
        }

        let mut read_buf_slice = self.read_buf.as_slice();
        let res = read_buf_slice.read(buf);
        self.read_buf = read_buf_slice.to_vec();

        res
    }
}

impl Write for MockTransport {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.write_buf.extend_from_slice(buf);

        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl Transport for MockTransport {
    fn bound_by(&mut self, timeout: Duration) -> std::io::Result<()> {
        self.bound = Some(timeout);

        Ok(())
    }
}
