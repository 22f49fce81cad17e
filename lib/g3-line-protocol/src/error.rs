/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use thiserror::Error;

use crate::MAX_KEY_LENGTH;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PointError {
    #[error("measurement name should not be empty")]
    EmptyMeasurement,
    #[error("at least one field is required")]
    NoFields,
    #[error("tag key should not be empty")]
    EmptyTagKey,
    #[error("field key should not be empty")]
    EmptyFieldKey,
    #[error("field {0} has a non-finite float value")]
    NonFiniteFloat(String),
    #[error("{0} contains a line break")]
    LineBreak(String),
    #[error("series key length {0} exceeds the max limit {max}", max = MAX_KEY_LENGTH)]
    KeyTooLong(usize),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BatchPointsError {
    #[error("invalid precision {0}")]
    InvalidPrecision(String),
}
