/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use crate::{BatchPointsError, Point, precision};

#[derive(Clone, Debug, Default)]
pub struct BatchPointsConfig {
    /// time unit tag of the batch, empty means no rounding
    pub precision: String,
    pub database: String,
    pub retention_policy: String,
    pub write_consistency: String,
}

/// Points that will be sent together, sharing the same precision.
#[derive(Clone, Debug, Default)]
pub struct BatchPoints {
    points: Vec<Point>,
    precision: String,
    database: String,
    retention_policy: String,
    write_consistency: String,
}

fn check_precision(precision: &str) -> Result<(), BatchPointsError> {
    if !precision.is_empty() && precision::parse_unit(precision).is_none() {
        return Err(BatchPointsError::InvalidPrecision(precision.to_string()));
    }
    Ok(())
}

impl BatchPoints {
    pub fn new(config: BatchPointsConfig) -> Result<Self, BatchPointsError> {
        check_precision(&config.precision)?;
        Ok(BatchPoints {
            points: Vec::new(),
            precision: config.precision,
            database: config.database,
            retention_policy: config.retention_policy,
            write_consistency: config.write_consistency,
        })
    }

    pub fn add_point(&mut self, point: Point) {
        self.points.push(point);
    }

    pub fn add_points<I>(&mut self, points: I)
    where
        I: IntoIterator<Item = Point>,
    {
        self.points.extend(points);
    }

    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    #[inline]
    pub fn points_mut(&mut self) -> &mut [Point] {
        &mut self.points
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[inline]
    pub fn precision(&self) -> &str {
        &self.precision
    }

    pub fn set_precision(&mut self, precision: &str) -> Result<(), BatchPointsError> {
        check_precision(precision)?;
        self.precision = precision.to_string();
        Ok(())
    }

    #[inline]
    pub fn database(&self) -> &str {
        &self.database
    }

    pub fn set_database(&mut self, database: &str) {
        self.database = database.to_string();
    }

    #[inline]
    pub fn retention_policy(&self) -> &str {
        &self.retention_policy
    }

    pub fn set_retention_policy(&mut self, rp: &str) {
        self.retention_policy = rp.to_string();
    }

    #[inline]
    pub fn write_consistency(&self) -> &str {
        &self.write_consistency
    }

    pub fn set_write_consistency(&mut self, wc: &str) {
        self.write_consistency = wc.to_string();
    }
}
