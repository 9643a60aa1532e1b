//! Byte sinks the client writes frames to.
//!
//! The strip is write-only: a transport accepts a frame for transmission and
//! reports whether it was accepted, nothing more. Connection setup (BLE
//! pairing, UART bridging, ...) happens before a transport is handed over.

use std::future::Future;
use std::io;
use std::net::SocketAddr;

use bytes::Bytes;
use futures::channel::mpsc::{self, UnboundedReceiver, UnboundedSender};
use log::debug;

use crate::runtime::{AsyncUdpSocket, UdpSocket};

/// Anything that can queue a raw frame for transmission.
pub trait Transport: Send {
    /// Hand one frame to the link. Resolves once the frame has been accepted,
    /// not once the device has applied it.
    fn send(&mut self, frame: Bytes) -> impl Future<Output = io::Result<()>> + Send;
}

/// Frames pushed into an in-process queue.
///
/// The receiving half is drained by whatever owns the radio link, typically a
/// task writing to the UART characteristic.
///
/// # Example
///
/// ```
/// use futures::StreamExt;
/// use illumi_led::{LightClient, QueueTransport};
///
/// # futures::executor::block_on(async {
/// let (transport, frames) = QueueTransport::new();
/// let mut client = LightClient::new(transport);
/// client.turn_off().await.unwrap();
/// drop(client);
///
/// let frames: Vec<_> = frames.collect().await;
/// assert_eq!(&frames.last().unwrap()[..], &[0x5A, 0x01, 0x02, 0x00]);
/// # });
/// ```
#[derive(Debug, Clone)]
pub struct QueueTransport {
    tx: UnboundedSender<Bytes>,
}

impl QueueTransport {
    pub fn new() -> (Self, UnboundedReceiver<Bytes>) {
        let (tx, rx) = mpsc::unbounded();
        (QueueTransport { tx }, rx)
    }
}

impl Transport for QueueTransport {
    async fn send(&mut self, frame: Bytes) -> io::Result<()> {
        self.tx
            .unbounded_send(frame)
            .map_err(|_| io::Error::new(io::ErrorKind::BrokenPipe, "frame queue closed"))
    }
}

/// Frames sent as single UDP datagrams to a serial bridge.
///
/// An optional convenience adapter, not the strip's native link. The strip
/// itself is reached over a BLE UART service; this only suits setups where a
/// UART-over-network bridge forwards each datagram verbatim to that link.
pub struct UdpTransport {
    socket: UdpSocket,
    bridge: SocketAddr,
}

impl UdpTransport {
    /// Bind an ephemeral local socket and connect it to `bridge`.
    pub async fn connect(bridge: SocketAddr) -> io::Result<Self> {
        let local = if bridge.is_ipv4() { "0.0.0.0:0" } else { "[::]:0" };
        let socket = UdpSocket::bind(local).await?;
        socket.connect(&bridge.to_string()).await?;
        debug!("udp transport {} -> {}", socket.local_addr()?, bridge);
        Ok(UdpTransport { socket, bridge })
    }

    pub fn bridge(&self) -> SocketAddr {
        self.bridge
    }
}

impl Transport for UdpTransport {
    async fn send(&mut self, frame: Bytes) -> io::Result<()> {
        let written = self.socket.send(&frame).await?;
        if written != frame.len() {
            return Err(io::Error::new(
                io::ErrorKind::WriteZero,
                format!("short write: {written} of {} bytes", frame.len()),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::StreamExt;

    #[tokio::test]
    async fn test_queue_transport_preserves_order() {
        let (mut transport, rx) = QueueTransport::new();
        transport.send(Bytes::from_static(&[1])).await.unwrap();
        transport.send(Bytes::from_static(&[2])).await.unwrap();
        drop(transport);

        let frames: Vec<Bytes> = rx.collect().await;
        assert_eq!(frames, vec![Bytes::from_static(&[1]), Bytes::from_static(&[2])]);
    }

    #[tokio::test]
    async fn test_queue_transport_closed() {
        let (mut transport, rx) = QueueTransport::new();
        drop(rx);
        let err = transport.send(Bytes::from_static(&[1])).await.unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }

    #[tokio::test]
    async fn test_udp_transport_sends_datagrams() {
        let bridge = std::net::UdpSocket::bind("127.0.0.1:0").unwrap();
        let mut transport = UdpTransport::connect(bridge.local_addr().unwrap())
            .await
            .unwrap();

        transport
            .send(Bytes::from_static(&[0x5A, 0x01, 0x02, 0xFF]))
            .await
            .unwrap();

        let mut buf = [0u8; 16];
        let n = bridge.recv(&mut buf).unwrap();
        assert_eq!(&buf[..n], &[0x5A, 0x01, 0x02, 0xFF]);
    }
}
