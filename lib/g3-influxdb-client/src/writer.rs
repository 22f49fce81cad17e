/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::io;

use log::warn;

use g3_line_protocol::precision;

use crate::{InfluxdbClientError, LineProtocolSink, LineRecord, RecordBatch};

pub(crate) struct BatchWriter {
    payload_size: usize,
    sink: LineProtocolSink,
}

/// Buffer that lives for a single write call.
struct SendBuffer<'a> {
    payload_size: usize,
    buf: Vec<u8>,
    sink: &'a mut LineProtocolSink,
    delayed_error: Option<io::Error>,
}

impl SendBuffer<'_> {
    /// Flush before appending `n` more bytes if they would not fit.
    ///
    /// Nothing is flushed if the buffer is empty. The error of this flush is
    /// kept and the remaining records are still sent.
    fn check(&mut self, n: usize) {
        if !self.buf.is_empty() && self.buf.len() + n > self.payload_size {
            if let Err(e) = self.sink.write(&self.buf) {
                warn!(
                    "failed to send {} bytes of line protocol data: {e}",
                    self.buf.len()
                );
                self.delayed_error = Some(e);
            }
            self.buf.clear();
        }
    }

    fn append<R: LineRecord>(&mut self, record: &R) {
        record.append_serialized(&mut self.buf);
        self.buf.push(b'\n');
    }

    fn finish(self) -> Result<(), InfluxdbClientError> {
        if !self.buf.is_empty() {
            self.sink
                .write(&self.buf)
                .map_err(InfluxdbClientError::WriteFailed)?;
        }
        match self.delayed_error {
            Some(e) => Err(InfluxdbClientError::WriteFailed(e)),
            None => Ok(()),
        }
    }
}

impl BatchWriter {
    pub(crate) fn new(sink: LineProtocolSink, payload_size: usize) -> Self {
        BatchWriter {
            payload_size: payload_size.max(1),
            sink,
        }
    }

    #[inline]
    pub(crate) fn payload_size(&self) -> usize {
        self.payload_size
    }

    /// Send all records of the batch, in order, as newline terminated lines.
    ///
    /// Each transport write is at most `payload_size` bytes, except for a
    /// record without timestamp that is larger than `payload_size` by itself,
    /// as such records are never split.
    pub(crate) fn write<B: RecordBatch>(
        &mut self,
        batch: &mut B,
    ) -> Result<(), InfluxdbClientError> {
        let unit = precision::parse_unit(batch.precision());
        let mut buf = SendBuffer {
            payload_size: self.payload_size,
            buf: Vec::with_capacity(self.payload_size),
            sink: &mut self.sink,
            delayed_error: None,
        };

        for record in batch.records_mut() {
            if let Some(unit) = unit {
                record.round(unit);
            }
            let record_size = record.serialized_size() + 1;

            buf.check(record_size);

            if !record.has_time() || record_size <= self.payload_size {
                buf.append(&*record);
                continue;
            }

            // reserve one byte for the newline of each split record
            for sub in record.split(self.payload_size - 1) {
                buf.check(sub.serialized_size() + 1);
                buf.append(&sub);
            }
        }

        buf.finish()
    }

    pub(crate) fn close(&mut self) -> io::Result<()> {
        self.sink.close()
    }
}
