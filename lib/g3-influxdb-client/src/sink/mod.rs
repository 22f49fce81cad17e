/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::io;
use std::net::{SocketAddr, TcpStream};

#[cfg(test)]
mod buf;
#[cfg(test)]
pub(crate) use buf::BufSinkRecorder;
#[cfg(test)]
use buf::BufLineProtocolSink;

mod tcp;
use tcp::TcpLineProtocolSink;

enum LineProtocolSinkIo {
    #[cfg(test)]
    Buf(BufLineProtocolSink),
    Tcp(TcpLineProtocolSink),
}

/// The raw connection to the server, no framing is done here.
pub(crate) struct LineProtocolSink {
    io: LineProtocolSinkIo,
}

impl LineProtocolSink {
    #[cfg(test)]
    pub(crate) fn buf(recorder: BufSinkRecorder) -> Self {
        LineProtocolSink {
            io: LineProtocolSinkIo::Buf(BufLineProtocolSink::new(recorder)),
        }
    }

    pub(crate) fn tcp(peer: SocketAddr, stream: TcpStream) -> Self {
        LineProtocolSink {
            io: LineProtocolSinkIo::Tcp(TcpLineProtocolSink::new(peer, stream)),
        }
    }

    /// Send all of `msg`, blocking until the OS accepts it
    pub(crate) fn write(&mut self, msg: &[u8]) -> io::Result<()> {
        match &mut self.io {
            #[cfg(test)]
            LineProtocolSinkIo::Buf(s) => s.write(msg),
            LineProtocolSinkIo::Tcp(s) => s.write(msg),
        }
    }

    /// Release the connection, calling it again is a no-op
    pub(crate) fn close(&mut self) -> io::Result<()> {
        match &mut self.io {
            #[cfg(test)]
            LineProtocolSinkIo::Buf(s) => s.close(),
            LineProtocolSinkIo::Tcp(s) => s.close(),
        }
    }
}
