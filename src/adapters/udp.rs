//! UDP fast path.
//!
//! One datagram = one full RGBW update, applied without a reply.  The
//! socket is a plain `std::net::UdpSocket`: ESP-IDF exposes lwIP through
//! the std networking API, so the same code runs on target and host.

use std::io;
use std::net::{SocketAddr, UdpSocket};

use log::{debug, info, warn};

/// Receive buffer size.  Larger than any valid datagram, so an oversized
/// one arrives with a wrong length instead of being silently truncated
/// to a valid one.
pub const RECV_BUFFER_LEN: usize = 64;

pub struct DatagramServer {
    socket: UdpSocket,
    buf: [u8; RECV_BUFFER_LEN],
}

impl DatagramServer {
    /// Listen on `port` on every interface.
    pub fn bind(port: u16) -> io::Result<Self> {
        Self::bind_addr(SocketAddr::from(([0, 0, 0, 0], port)))
    }

    pub fn bind_addr(addr: SocketAddr) -> io::Result<Self> {
        let socket = UdpSocket::bind(addr)?;
        info!("UDP: listening on {}", socket.local_addr()?);
        Ok(Self {
            socket,
            buf: [0; RECV_BUFFER_LEN],
        })
    }

    pub fn local_addr(&self) -> io::Result<SocketAddr> {
        self.socket.local_addr()
    }

    /// Block for one datagram and hand it to `apply`.  Returns what
    /// `apply` returned.
    pub fn poll_once<F>(&mut self, mut apply: F) -> io::Result<bool>
    where
        F: FnMut(&[u8]) -> bool,
    {
        let (len, peer) = self.socket.recv_from(&mut self.buf)?;
        let applied = apply(&self.buf[..len]);
        if applied {
            debug!("UDP: applied {} bytes from {}", len, peer);
        }
        Ok(applied)
    }

    /// Serve forever.  Receive errors are logged and the loop continues.
    pub fn run<F>(&mut self, mut apply: F) -> !
    where
        F: FnMut(&[u8]) -> bool,
    {
        loop {
            if let Err(e) = self.poll_once(&mut apply) {
                warn!("UDP: recv failed: {}", e);
            }
        }
    }
}
