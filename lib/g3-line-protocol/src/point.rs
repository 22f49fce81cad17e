/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::collections::BTreeMap;
use std::fmt;
use std::time::Duration;

use bytes::Bytes;
use smallvec::SmallVec;

use crate::{FieldValue, PointError, escape};

pub const MAX_KEY_LENGTH: usize = 65535;

/// A single line protocol record.
///
/// The series key and the field set are kept in their encoded form, so the
/// serialized size is known without rendering the whole line, and splitting
/// only slices the shared buffers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Point {
    key: Bytes,
    fields: Bytes,
    /// exclusive end offset of each encoded field in `fields`
    field_ends: SmallVec<[usize; 8]>,
    /// unix timestamp in nanoseconds, server time will be used if absent
    time: Option<i64>,
}

impl Point {
    /// Build a point, tags and fields are sorted by key.
    ///
    /// Tags with empty values are dropped. For duplicated keys the last one wins.
    pub fn new<T, TK, TV, F, FK>(
        measurement: &str,
        tags: T,
        fields: F,
        time: Option<i64>,
    ) -> Result<Self, PointError>
    where
        T: IntoIterator<Item = (TK, TV)>,
        TK: AsRef<str>,
        TV: AsRef<str>,
        F: IntoIterator<Item = (FK, FieldValue)>,
        FK: AsRef<str>,
    {
        if measurement.is_empty() {
            return Err(PointError::EmptyMeasurement);
        }
        check_line_break("measurement", measurement)?;

        let mut tag_map = BTreeMap::new();
        for (k, v) in tags {
            let k = k.as_ref();
            if k.is_empty() {
                return Err(PointError::EmptyTagKey);
            }
            let v = v.as_ref();
            check_line_break("tag key", k)?;
            check_line_break("tag value", v)?;
            tag_map.insert(k.to_string(), v.to_string());
        }

        let mut field_map = BTreeMap::new();
        for (k, v) in fields {
            let k = k.as_ref();
            if k.is_empty() {
                return Err(PointError::EmptyFieldKey);
            }
            check_line_break("field key", k)?;
            if !v.is_finite() {
                return Err(PointError::NonFiniteFloat(k.to_string()));
            }
            field_map.insert(k.to_string(), v);
        }
        if field_map.is_empty() {
            return Err(PointError::NoFields);
        }

        let mut key = Vec::with_capacity(measurement.len() + tag_map.len() * 16);
        escape::append_measurement(&mut key, measurement);
        for (k, v) in tag_map.iter().filter(|(_, v)| !v.is_empty()) {
            key.push(b',');
            escape::append_tag(&mut key, k);
            key.push(b'=');
            escape::append_tag(&mut key, v);
        }
        if key.len() > MAX_KEY_LENGTH {
            return Err(PointError::KeyTooLong(key.len()));
        }

        let mut encoded = Vec::with_capacity(field_map.len() * 16);
        let mut field_ends = SmallVec::with_capacity(field_map.len());
        for (k, v) in field_map.iter() {
            if !encoded.is_empty() {
                encoded.push(b',');
            }
            escape::append_tag(&mut encoded, k);
            encoded.push(b'=');
            v.append_to(&mut encoded);
            field_ends.push(encoded.len());
        }

        Ok(Point {
            key: Bytes::from(key),
            fields: Bytes::from(encoded),
            field_ends,
            time,
        })
    }

    #[inline]
    pub fn time(&self) -> Option<i64> {
        self.time
    }

    pub fn set_time(&mut self, time: Option<i64>) {
        self.time = time;
    }

    /// The escaped measurement name with its sorted tags
    #[inline]
    pub fn key(&self) -> &[u8] {
        self.key.as_ref()
    }

    #[inline]
    pub fn field_count(&self) -> usize {
        self.field_ends.len()
    }

    /// Byte length of the line, without the trailing newline
    pub fn serialized_size(&self) -> usize {
        let size = self.key.len() + 1 + self.fields.len();
        match self.time {
            Some(t) => size + 1 + itoa::Buffer::new().format(t).len(),
            None => size,
        }
    }

    pub fn append_serialized(&self, buf: &mut Vec<u8>) {
        buf.extend_from_slice(&self.key);
        buf.push(b' ');
        buf.extend_from_slice(&self.fields);
        if let Some(t) = self.time {
            let mut buffer = itoa::Buffer::new();
            buf.push(b' ');
            buf.extend_from_slice(buffer.format(t).as_bytes());
        }
    }

    /// Round the timestamp to the nearest multiple of `unit` since the unix epoch.
    ///
    /// Halfway values are rounded up. The timestamp is left as is if the
    /// result would be out of range.
    pub fn round(&mut self, unit: Duration) {
        let Some(t) = self.time else {
            return;
        };
        let Ok(d) = i128::try_from(unit.as_nanos()) else {
            return;
        };
        if d == 0 {
            return;
        }

        let t = i128::from(t);
        let r = t.rem_euclid(d);
        let rounded = if r + r < d { t - r } else { t + (d - r) };
        if let Ok(v) = i64::try_from(rounded) {
            self.time = Some(v);
        }
    }

    /// Split into points whose serialized size is not larger than `size`.
    ///
    /// The split happens at field boundaries, each new point keeps the key
    /// and the timestamp. A single field that can not fit travels alone in
    /// its own point, which is still larger than `size`. Points without a
    /// timestamp are never split.
    pub fn split(&self, size: usize) -> Vec<Point> {
        if self.time.is_none() || self.serialized_size() <= size {
            return vec![self.clone()];
        }

        let time_len = self.serialized_size() - self.key.len() - self.fields.len() - 2;
        let budget = size as isize - (self.key.len() + time_len + 2) as isize;

        let mut points = Vec::new();
        let mut first = 0;
        for (i, &end) in self.field_ends.iter().enumerate() {
            if i > first && (end - self.field_start(first)) as isize > budget {
                points.push(self.sub_point(first, i));
                first = i;
            }
        }
        points.push(self.sub_point(first, self.field_ends.len()));
        points
    }

    fn field_start(&self, index: usize) -> usize {
        if index == 0 {
            0
        } else {
            self.field_ends[index - 1] + 1
        }
    }

    fn sub_point(&self, first: usize, last: usize) -> Point {
        let start = self.field_start(first);
        let end = self.field_ends[last - 1];
        Point {
            key: self.key.clone(),
            fields: self.fields.slice(start..end),
            field_ends: self.field_ends[first..last]
                .iter()
                .map(|e| e - start)
                .collect(),
            time: self.time,
        }
    }
}

/// Line breaks can not be escaped outside of string field values
fn check_line_break(what: &str, s: &str) -> Result<(), PointError> {
    if s.bytes().any(|b| b == b'\n' || b == b'\r') {
        Err(PointError::LineBreak(format!("{what} {s:?}")))
    } else {
        Ok(())
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut buf = Vec::with_capacity(self.serialized_size());
        self.append_serialized(&mut buf);
        f.write_str(&String::from_utf8_lossy(&buf))
    }
}
