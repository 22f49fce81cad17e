/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::time::Duration;

/// Get the time unit for a precision tag such as "s" or "ms".
///
/// Returns `None` for an empty or unknown tag.
pub fn parse_unit(precision: &str) -> Option<Duration> {
    match precision {
        "ns" => Some(Duration::from_nanos(1)),
        "us" | "\u{00B5}s" | "\u{03BC}s" => Some(Duration::from_micros(1)),
        "ms" => Some(Duration::from_millis(1)),
        "s" => Some(Duration::from_secs(1)),
        "m" => Some(Duration::from_secs(60)),
        "h" => Some(Duration::from_secs(3600)),
        _ => None,
    }
}
