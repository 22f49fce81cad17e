/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

mod error;
pub use error::InfluxdbClientError;

mod record;
pub use record::{LineRecord, RecordBatch};

mod addr;

mod sink;
use sink::LineProtocolSink;

mod writer;
use writer::BatchWriter;

mod client;
pub use client::{
    ChunkedResponse, InfluxdbClient, InfluxdbTcpClient, Query, QueryResult, Response,
};

mod config;
pub use config::{DEFAULT_TCP_PAYLOAD_SIZE, InfluxdbTcpClientConfig};
