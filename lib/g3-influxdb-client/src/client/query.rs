/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::collections::VecDeque;

#[derive(Clone, Debug, Default)]
pub struct Query {
    pub command: String,
    pub database: String,
    pub retention_policy: String,
    pub precision: String,
    pub chunked: bool,
    pub chunk_size: usize,
}

impl Query {
    pub fn new(command: &str, database: &str, precision: &str) -> Self {
        Query {
            command: command.to_string(),
            database: database.to_string(),
            precision: precision.to_string(),
            ..Default::default()
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QueryResult {
    pub statement_id: usize,
    pub messages: Vec<String>,
    pub error: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Response {
    pub results: Vec<QueryResult>,
    pub error: Option<String>,
}

/// Responses of a chunked query, in the order the server sent them.
#[derive(Debug, Default)]
pub struct ChunkedResponse {
    chunks: VecDeque<Response>,
}

impl ChunkedResponse {
    pub fn new<I>(chunks: I) -> Self
    where
        I: IntoIterator<Item = Response>,
    {
        ChunkedResponse {
            chunks: chunks.into_iter().collect(),
        }
    }
}

impl Iterator for ChunkedResponse {
    type Item = Response;

    fn next(&mut self) -> Option<Response> {
        self.chunks.pop_front()
    }
}
