/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::io::{self, Write};
use std::net::{Shutdown, SocketAddr, TcpStream};

use log::debug;

pub(super) struct TcpLineProtocolSink {
    peer: SocketAddr,
    stream: Option<TcpStream>,
}

impl TcpLineProtocolSink {
    pub(super) fn new(peer: SocketAddr, stream: TcpStream) -> Self {
        TcpLineProtocolSink {
            peer,
            stream: Some(stream),
        }
    }

    pub(super) fn write(&mut self, msg: &[u8]) -> io::Result<()> {
        match &mut self.stream {
            Some(stream) => stream.write_all(msg),
            None => Err(io::Error::new(
                io::ErrorKind::NotConnected,
                format!("connection to {} has been closed", self.peer),
            )),
        }
    }

    pub(super) fn close(&mut self) -> io::Result<()> {
        let Some(stream) = self.stream.take() else {
            return Ok(());
        };
        debug!("closing influxdb tcp connection to {}", self.peer);
        match stream.shutdown(Shutdown::Both) {
            Ok(_) => Ok(()),
            // the peer may have gone first
            Err(e) if e.kind() == io::ErrorKind::NotConnected => Ok(()),
            Err(e) => Err(e),
        }
    }
}
