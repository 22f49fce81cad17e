/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

const MEASUREMENT_SPECIAL: &[u8] = b", ";
const TAG_SPECIAL: &[u8] = b",= ";

pub(crate) fn append_measurement(buf: &mut Vec<u8>, name: &str) {
    append_escaped(buf, name, MEASUREMENT_SPECIAL);
}

/// Used for tag keys, tag values and field keys.
pub(crate) fn append_tag(buf: &mut Vec<u8>, s: &str) {
    append_escaped(buf, s, TAG_SPECIAL);
}

pub(crate) fn append_string_value(buf: &mut Vec<u8>, s: &str) {
    buf.push(b'"');
    for b in s.bytes() {
        if b == b'"' || b == b'\\' {
            buf.push(b'\\');
        }
        buf.push(b);
    }
    buf.push(b'"');
}

fn append_escaped(buf: &mut Vec<u8>, s: &str, special: &[u8]) {
    for b in s.bytes() {
        if special.contains(&b) {
            buf.push(b'\\');
        }
        buf.push(b);
    }
}
