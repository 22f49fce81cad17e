/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

mod error;
pub use error::{BatchPointsError, PointError};

mod escape;

mod field;
pub use field::FieldValue;

mod point;
pub use point::{MAX_KEY_LENGTH, Point};

pub mod precision;

mod batch;
pub use batch::{BatchPoints, BatchPointsConfig};
