/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::net::TcpStream;

use log::debug;

use crate::{BatchWriter, InfluxdbClientError, InfluxdbTcpClient, LineProtocolSink, addr};

#[cfg(feature = "yaml")]
mod yaml;

/// A payload size that is reasonable for TCP packets travelling over the internet
pub const DEFAULT_TCP_PAYLOAD_SIZE: usize = 512;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InfluxdbTcpClientConfig {
    addr: String,
    payload_size: usize,
}

impl InfluxdbTcpClientConfig {
    /// `addr` should be of the form "host:port" or "[ipv6-host%zone]:port"
    pub fn new<T: Into<String>>(addr: T) -> Self {
        InfluxdbTcpClientConfig {
            addr: addr.into(),
            payload_size: DEFAULT_TCP_PAYLOAD_SIZE,
        }
    }

    #[inline]
    pub fn addr(&self) -> &str {
        &self.addr
    }

    pub fn set_addr<T: Into<String>>(&mut self, addr: T) {
        self.addr = addr.into();
    }

    #[inline]
    pub fn payload_size(&self) -> usize {
        self.payload_size
    }

    /// Set the max size of each write to the connection, 0 means the default
    pub fn set_payload_size(&mut self, size: usize) {
        self.payload_size = if size == 0 {
            DEFAULT_TCP_PAYLOAD_SIZE
        } else {
            size
        };
    }

    /// Resolve the address and connect to it
    pub fn build(&self) -> Result<InfluxdbTcpClient, InfluxdbClientError> {
        let addrs = addr::resolve(&self.addr).map_err(|e| InfluxdbClientError::ResolveFailed {
            addr: self.addr.clone(),
            source: e,
        })?;
        if addrs.is_empty() {
            return Err(InfluxdbClientError::NoAddressResolved(self.addr.clone()));
        }

        let stream =
            TcpStream::connect(addrs.as_slice()).map_err(|e| InfluxdbClientError::ConnectFailed {
                addr: self.addr.clone(),
                source: e,
            })?;
        let peer = stream.peer_addr().unwrap_or(addrs[0]);
        debug!("influxdb tcp client connected to {peer}");

        let sink = LineProtocolSink::tcp(peer, stream);
        let writer = BatchWriter::new(sink, self.payload_size);
        Ok(InfluxdbTcpClient::new(peer, writer))
    }
}
