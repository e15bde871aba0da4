// Property-based tests for earning window construction and gap-filling
//
// - Every window has exactly the requested number of buckets
// - Buckets are contiguous, ascending and end with the bucket holding "today"
// - Filling always yields aligned labels/data/orders, zero where no rows exist

use chrono::{Datelike, NaiveDate};
use proptest::prelude::*;
use rust_decimal::Decimal;

use seller_dashboard::dashboard::services::SeriesWindow;
use seller_dashboard::orders::{EarningBucket, Granularity};

fn today_strategy() -> impl Strategy<Value = NaiveDate> {
    // 2000-01-01 .. roughly 2060
    (0i64..22_000).prop_map(|offset| {
        NaiveDate::from_ymd_opt(2000, 1, 1).unwrap() + chrono::Duration::days(offset)
    })
}

proptest! {
    #[test]
    fn test_daily_window_has_exactly_d_buckets(
        today in today_strategy(),
        days in 1u32..=366u32
    ) {
        let window = SeriesWindow::ending_at(Granularity::Day, today, days).unwrap();
        let buckets = window.buckets();

        prop_assert_eq!(buckets.len(), days as usize);
        prop_assert_eq!(*buckets.last().unwrap(), today);

        for pair in buckets.windows(2) {
            prop_assert_eq!(pair[1] - pair[0], chrono::Duration::days(1));
        }
    }

    #[test]
    fn test_monthly_window_has_exactly_m_buckets(
        today in today_strategy(),
        months in 1u32..=120u32
    ) {
        let window = SeriesWindow::ending_at(Granularity::Month, today, months).unwrap();
        let buckets = window.buckets();

        prop_assert_eq!(buckets.len(), months as usize);

        let last = *buckets.last().unwrap();
        prop_assert_eq!((last.year(), last.month(), last.day()), (today.year(), today.month(), 1));

        for pair in buckets.windows(2) {
            prop_assert_eq!(pair[0].day(), 1);
            let index = |d: NaiveDate| d.year() * 12 + d.month() as i32;
            prop_assert_eq!(index(pair[1]) - index(pair[0]), 1);
        }
    }

    #[test]
    fn test_range_covers_every_bucket_and_nothing_after_today(
        today in today_strategy(),
        days in 1u32..=90u32
    ) {
        let window = SeriesWindow::ending_at(Granularity::Day, today, days).unwrap();
        let range = window.range().unwrap();

        for bucket in window.buckets() {
            prop_assert!(range.contains(bucket.and_hms_opt(0, 0, 0).unwrap()));
            prop_assert!(range.contains(bucket.and_hms_opt(23, 59, 59).unwrap()));
        }
        let tomorrow = today.succ_opt().unwrap().and_hms_opt(0, 0, 0).unwrap();
        prop_assert!(!range.contains(tomorrow));
    }

    #[test]
    fn test_fill_is_aligned_and_zero_filled(
        today in today_strategy(),
        days in 1u32..=60u32,
        hits in proptest::collection::vec((0u32..60, 1i64..10_000, 1i64..5), 0..20)
    ) {
        let window = SeriesWindow::ending_at(Granularity::Day, today, days).unwrap();

        // Rows at distinct offsets back from today; some fall outside the window
        let mut seen = std::collections::HashSet::new();
        let rows: Vec<EarningBucket> = hits
            .into_iter()
            .filter(|(back, _, _)| seen.insert(*back))
            .map(|(back, amount, orders)| {
                let day = today - chrono::Duration::days(back as i64);
                EarningBucket::new(day, Decimal::from(amount), orders)
            })
            .collect();

        let series = window.fill(rows.clone());

        prop_assert_eq!(series.labels.len(), days as usize);
        prop_assert_eq!(series.data.len(), days as usize);
        prop_assert_eq!(series.orders.len(), days as usize);

        for (i, bucket) in window.buckets().iter().enumerate() {
            match rows.iter().find(|r| r.bucket == *bucket) {
                Some(row) => {
                    prop_assert_eq!(series.data[i], row.total);
                    prop_assert_eq!(series.orders[i], row.orders);
                }
                None => {
                    prop_assert_eq!(series.data[i], Decimal::ZERO);
                    prop_assert_eq!(series.orders[i], 0);
                }
            }
        }
    }
}

#[test]
fn test_labels_follow_chart_formats() {
    let today = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();

    let daily = SeriesWindow::ending_at(Granularity::Day, today, 3).unwrap().fill(vec![]);
    assert_eq!(daily.labels, vec!["08 Jan", "09 Jan", "10 Jan"]);

    let monthly = SeriesWindow::ending_at(Granularity::Month, today, 3).unwrap().fill(vec![]);
    assert_eq!(monthly.labels, vec!["Nov 2023", "Dec 2023", "Jan 2024"]);
}
