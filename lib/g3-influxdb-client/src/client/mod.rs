/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::net::SocketAddr;
use std::time::Duration;

use log::debug;

use g3_line_protocol::BatchPoints;

use crate::{BatchWriter, InfluxdbClientError, RecordBatch};

mod query;
pub use query::{ChunkedResponse, Query, QueryResult, Response};

/// Operations shared by all InfluxDB client transports.
pub trait InfluxdbClient {
    fn write(&mut self, bp: &mut BatchPoints) -> Result<(), InfluxdbClientError>;

    fn query(&self, query: &Query) -> Result<Response, InfluxdbClientError>;

    fn query_as_chunk(&self, query: &Query) -> Result<ChunkedResponse, InfluxdbClientError>;

    /// Returns the round trip time and the server version
    fn ping(&self, timeout: Duration) -> Result<(Duration, String), InfluxdbClientError>;

    fn close(&mut self) -> Result<(), InfluxdbClientError>;
}

/// Write-only client over a single TCP connection.
///
/// All writes go through `&mut self`, there is no internal locking. Callers
/// that publish from multiple threads should wrap it in a `Mutex`, or use one
/// client per thread, as interleaved writes would corrupt the line framing.
///
/// Each write to the connection is at most `payload_size` bytes, except that
/// a single point without timestamp is never split and may exceed the limit.
pub struct InfluxdbTcpClient {
    peer: SocketAddr,
    writer: BatchWriter,
}

impl InfluxdbTcpClient {
    pub(crate) fn new(peer: SocketAddr, writer: BatchWriter) -> Self {
        InfluxdbTcpClient { peer, writer }
    }

    #[inline]
    pub fn peer_addr(&self) -> SocketAddr {
        self.peer
    }

    #[inline]
    pub fn payload_size(&self) -> usize {
        self.writer.payload_size()
    }

    /// Write any kind of record batch, timestamps are rounded in place
    pub fn write_batch<B: RecordBatch>(
        &mut self,
        batch: &mut B,
    ) -> Result<(), InfluxdbClientError> {
        self.writer.write(batch)
    }
}

impl InfluxdbClient for InfluxdbTcpClient {
    fn write(&mut self, bp: &mut BatchPoints) -> Result<(), InfluxdbClientError> {
        self.write_batch(bp)
    }

    fn query(&self, _query: &Query) -> Result<Response, InfluxdbClientError> {
        Err(InfluxdbClientError::QueryNotSupported)
    }

    fn query_as_chunk(&self, _query: &Query) -> Result<ChunkedResponse, InfluxdbClientError> {
        Err(InfluxdbClientError::QueryNotSupported)
    }

    fn ping(&self, _timeout: Duration) -> Result<(Duration, String), InfluxdbClientError> {
        Ok((Duration::ZERO, String::new()))
    }

    fn close(&mut self) -> Result<(), InfluxdbClientError> {
        debug!("closing influxdb tcp client for {}", self.peer);
        self.writer.close().map_err(InfluxdbClientError::CloseFailed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LineProtocolSink;
    use crate::sink::BufSinkRecorder;
    use g3_line_protocol::{FieldValue, Point};
    use std::net::{IpAddr, Ipv4Addr};

    fn buf_client(recorder: &BufSinkRecorder) -> InfluxdbTcpClient {
        let peer = SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), 8089);
        let writer = BatchWriter::new(LineProtocolSink::buf(recorder.clone()), 512);
        InfluxdbTcpClient::new(peer, writer)
    }

    fn batch() -> BatchPoints {
        let mut bp = BatchPoints::default();
        bp.add_point(
            Point::new(
                "cpu",
                [("host", "a")],
                [("idle", FieldValue::from(0.5f64))],
                Some(10),
            )
            .unwrap(),
        );
        bp
    }

    #[test]
    fn query_unsupported() {
        let recorder = BufSinkRecorder::default();
        let client = buf_client(&recorder);
        let q = Query::new("SHOW DATABASES", "", "");
        let e = client.query(&q).unwrap_err();
        assert!(matches!(e, InfluxdbClientError::QueryNotSupported));
        assert_eq!(e.to_string(), "querying via TCP is not supported");

        let mut q = q;
        q.chunked = true;
        q.chunk_size = 100;
        assert!(matches!(
            client.query_as_chunk(&q),
            Err(InfluxdbClientError::QueryNotSupported)
        ));
        assert_eq!(recorder.attempts(), 0);
    }

    #[test]
    fn ping_noop() {
        let recorder = BufSinkRecorder::default();
        let client = buf_client(&recorder);
        let (rtt, version) = client.ping(Duration::from_secs(1)).unwrap();
        assert_eq!(rtt, Duration::ZERO);
        assert!(version.is_empty());
        assert_eq!(recorder.attempts(), 0);
    }

    #[test]
    fn write_and_close() {
        let recorder = BufSinkRecorder::default();
        let mut client = buf_client(&recorder);
        assert_eq!(client.payload_size(), 512);
        assert_eq!(client.peer_addr().port(), 8089);

        client.write(&mut batch()).unwrap();
        assert_eq!(recorder.writes(), [b"cpu,host=a idle=0.5 10\n".to_vec()]);

        client.close().unwrap();
        assert!(recorder.is_closed());
        assert!(client.write(&mut batch()).is_err());
    }

    #[test]
    fn boxed_client() {
        let recorder = BufSinkRecorder::default();
        let mut client: Box<dyn InfluxdbClient> = Box::new(buf_client(&recorder));
        client.write(&mut batch()).unwrap();
        assert!(client.ping(Duration::ZERO).is_ok());
        client.close().unwrap();
        assert_eq!(recorder.writes(), [b"cpu,host=a idle=0.5 10\n".to_vec()]);
        assert!(recorder.is_closed());
    }

    #[test]
    fn chunked_response_order() {
        let first = Response {
            results: vec![QueryResult {
                statement_id: 0,
                ..Default::default()
            }],
            error: None,
        };
        let second = Response {
            error: Some("partial".to_string()),
            ..Default::default()
        };
        let mut chunks = ChunkedResponse::new([first.clone(), second.clone()]);
        assert_eq!(chunks.next(), Some(first));
        assert_eq!(chunks.next(), Some(second));
        assert_eq!(chunks.next(), None);
    }
}
