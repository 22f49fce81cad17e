/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::time::Duration;

use g3_line_protocol::{BatchPoints, Point};

/// A record that knows how to render itself as one line of the wire format.
pub trait LineRecord: Sized {
    /// Round the timestamp in place to the nearest multiple of `unit`
    fn round(&mut self, unit: Duration);

    /// Records without a timestamp take the server time on arrival
    fn has_time(&self) -> bool;

    /// Serialized length in bytes, not including the line separator
    fn serialized_size(&self) -> usize;

    /// Append the serialized bytes, without the line separator
    fn append_serialized(&self, buf: &mut Vec<u8>);

    /// Split into records each of which serializes to at most `max_size` bytes
    fn split(&self, max_size: usize) -> Vec<Self>;
}

/// An ordered group of records sharing the same precision tag.
pub trait RecordBatch {
    type Record: LineRecord;

    fn precision(&self) -> &str;

    fn records_mut(&mut self) -> &mut [Self::Record];
}

impl LineRecord for Point {
    fn round(&mut self, unit: Duration) {
        Point::round(self, unit)
    }

    fn has_time(&self) -> bool {
        self.time().is_some()
    }

    fn serialized_size(&self) -> usize {
        Point::serialized_size(self)
    }

    fn append_serialized(&self, buf: &mut Vec<u8>) {
        Point::append_serialized(self, buf)
    }

    fn split(&self, max_size: usize) -> Vec<Self> {
        Point::split(self, max_size)
    }
}

impl RecordBatch for BatchPoints {
    type Record = Point;

    fn precision(&self) -> &str {
        BatchPoints::precision(self)
    }

    fn records_mut(&mut self) -> &mut [Point] {
        self.points_mut()
    }
}
