/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum InfluxdbClientError {
    #[error("failed to resolve address {addr}: {source}")]
    ResolveFailed { addr: String, source: io::Error },
    #[error("no socket address resolved from {0}")]
    NoAddressResolved(String),
    #[error("failed to connect to {addr}: {source}")]
    ConnectFailed { addr: String, source: io::Error },
    #[error("write failed: {0}")]
    WriteFailed(io::Error),
    #[error("close failed: {0}")]
    CloseFailed(io::Error),
    #[error("querying via TCP is not supported")]
    QueryNotSupported,
}
