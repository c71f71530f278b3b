use crate::deadline::Deadline;
use log::debug;
use std::io::{Read, Write};
use std::net::{SocketAddr, TcpStream};
use std::time::Duration;

pub const CHUNK_SIZE: usize = 1024;

/// Byte stream the scenario talks to. `bound_by` limits the next blocking
/// call to `timeout`.
pub trait Transport: Read + Write {
    fn bound_by(&mut self, timeout: Duration) -> std::io::Result<()>;
}

impl Transport for TcpStream {
    fn bound_by(&mut self, timeout: Duration) -> std::io::Result<()> {
        self.set_read_timeout(Some(timeout))?;
        self.set_write_timeout(Some(timeout))
    }
}

pub struct Connection<S: Transport = TcpStream> {
    stream: S,
    deadline: Deadline,
}

impl Connection<TcpStream> {
    pub fn open(addr: &SocketAddr, deadline: Deadline) -> std::io::Result<Self> {
        let stream = TcpStream::connect_timeout(addr, deadline.remaining()?)?;
        debug!("Connected to {addr} from {:?}", stream.local_addr().ok());

        Ok(Connection::new(stream, deadline))
    }
}

impl<S: Transport> Connection<S> {
    pub fn new(stream: S, deadline: Deadline) -> Self {
        Connection { stream, deadline }
    }

    pub fn send(&mut self, bytes: &[u8]) -> std::io::Result<()> {
        self.stream.bound_by(self.deadline.remaining()?)?;
        self.stream.write_all(bytes)?;
        self.stream.flush()
    }

    /// A single read of at most `CHUNK_SIZE` bytes. Whatever the first read
    /// yields is the whole answer; a peer that closed gives an empty chunk.
    pub fn read_chunk(&mut self) -> std::io::Result<Vec<u8>> {
        self.stream.bound_by(self.deadline.remaining()?)?;

        let mut stream_buf: [u8; CHUNK_SIZE] = [0; CHUNK_SIZE];
        let n = self.stream.read(stream_buf.as_mut_slice())?;

        Ok(stream_buf[..n].to_vec())
    }

    #[cfg(test)]
    pub(crate) fn stream(&self) -> &S {
        &self.stream
    }
}
