use chrono::{Datelike, Months, NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Calendar granularity of an earnings aggregation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    Day,
    Month,
}

impl Granularity {
    /// First date of the bucket containing `date`
    pub fn bucket_start(&self, date: NaiveDate) -> NaiveDate {
        match self {
            Granularity::Day => date,
            // Day 1 exists in every month
            Granularity::Month => date.with_day(1).unwrap_or(date),
        }
    }

    /// Step `count` buckets forward from a bucket start
    pub fn add(&self, start: NaiveDate, count: u32) -> Option<NaiveDate> {
        match self {
            Granularity::Day => start.checked_add_days(chrono::Days::new(count.into())),
            Granularity::Month => start.checked_add_months(Months::new(count)),
        }
    }

    /// Step `count` buckets backward from a bucket start
    pub fn sub(&self, start: NaiveDate, count: u32) -> Option<NaiveDate> {
        match self {
            Granularity::Day => start.checked_sub_days(chrono::Days::new(count.into())),
            Granularity::Month => start.checked_sub_months(Months::new(count)),
        }
    }

    /// Chart label for a bucket: "08 Jan" for days, "Jan 2024" for months
    pub fn label(&self, start: NaiveDate) -> String {
        match self {
            Granularity::Day => start.format("%d %b").to_string(),
            Granularity::Month => start.format("%b %Y").to_string(),
        }
    }

    /// SQL expression yielding the bucket start DATE for an order's effective timestamp
    pub(crate) fn bucket_sql(&self) -> &'static str {
        match self {
            Granularity::Day => "DATE(COALESCE(paid_at, created_at))",
            Granularity::Month => {
                "CAST(DATE_FORMAT(COALESCE(paid_at, created_at), '%Y-%m-01') AS DATE)"
            }
        }
    }
}

/// Half-open range of local timestamps `[start, end)`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EarningRange {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl EarningRange {
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, instant: NaiveDateTime) -> bool {
        instant >= self.start && instant < self.end
    }
}

/// Paid-order totals for one calendar bucket, as returned by the store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct EarningBucket {
    /// First date of the bucket
    pub bucket: NaiveDate,
    pub total: Decimal,
    pub orders: i64,
}

impl EarningBucket {
    pub fn new(bucket: NaiveDate, total: Decimal, orders: i64) -> Self {
        Self {
            bucket,
            total,
            orders,
        }
    }
}
