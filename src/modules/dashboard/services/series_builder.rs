use std::collections::HashMap;

use chrono::{NaiveDate, NaiveTime};

use crate::core::{AppError, Result};
use crate::modules::dashboard::models::{BucketTotals, EarningSeries};
use crate::modules::orders::models::{EarningBucket, EarningRange, Granularity};

/// Contiguous run of calendar buckets ending with the bucket that contains "today"
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeriesWindow {
    granularity: Granularity,
    buckets: Vec<NaiveDate>,
}

impl SeriesWindow {
    /// Build a window of `count` buckets whose last bucket contains `today`
    pub fn ending_at(granularity: Granularity, today: NaiveDate, count: u32) -> Result<Self> {
        if count == 0 {
            return Err(AppError::validation("window must contain at least one bucket"));
        }

        let last = granularity.bucket_start(today);
        let first = granularity
            .sub(last, count - 1)
            .ok_or_else(|| out_of_range(granularity, count))?;

        let buckets = (0..count)
            .map(|step| granularity.add(first, step))
            .collect::<Option<Vec<_>>>()
            .ok_or_else(|| out_of_range(granularity, count))?;

        Ok(Self {
            granularity,
            buckets,
        })
    }

    pub fn granularity(&self) -> Granularity {
        self.granularity
    }

    /// Bucket start dates in ascending order
    pub fn buckets(&self) -> &[NaiveDate] {
        &self.buckets
    }

    /// Timestamps covered by the window: first bucket midnight up to the start of
    /// the bucket after the last one
    pub fn range(&self) -> Result<EarningRange> {
        let first = self.buckets[0];
        let last = self.buckets[self.buckets.len() - 1];
        let after_last = self
            .granularity
            .add(last, 1)
            .ok_or_else(|| out_of_range(self.granularity, self.buckets.len() as u32))?;

        Ok(EarningRange::new(
            first.and_time(NaiveTime::MIN),
            after_last.and_time(NaiveTime::MIN),
        ))
    }

    /// Lay aggregated rows onto the window, zero-filling buckets without data.
    ///
    /// Rows outside the window are ignored.
    pub fn fill(&self, rows: Vec<EarningBucket>) -> EarningSeries {
        let mut by_bucket: HashMap<NaiveDate, BucketTotals> = HashMap::with_capacity(rows.len());
        for row in rows {
            let entry = by_bucket
                .entry(self.granularity.bucket_start(row.bucket))
                .or_default();
            entry.total += row.total;
            entry.orders += row.orders;
        }

        let mut series = EarningSeries::with_capacity(self.buckets.len());
        for bucket in &self.buckets {
            let totals = by_bucket.get(bucket).copied().unwrap_or_default();
            series.push(self.granularity.label(*bucket), totals);
        }

        series
    }
}

fn out_of_range(granularity: Granularity, count: u32) -> AppError {
    AppError::validation(format!(
        "{:?} window of {} buckets falls outside the supported calendar",
        granularity, count
    ))
}
