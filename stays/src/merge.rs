//! Canonicalisation of committed intervals.

use chrono::NaiveDate;
use tracing::trace;

use crate::Interval;

/// Coalesce closed spans into sorted, disjoint, non-adjacent intervals.
///
/// Spans are `(start, end)` pairs with `start <= end`. Two spans merge when
/// they overlap or when the second starts on the day after the first ends.
pub fn merge_spans<I>(spans: I) -> Vec<Interval>
where
    I: IntoIterator<Item = (NaiveDate, NaiveDate)>,
{
    let mut spans: Vec<(NaiveDate, NaiveDate)> = spans.into_iter().collect();
    spans.sort();

    let input_len = spans.len();
    let mut merged = Vec::with_capacity(input_len);
    let mut spans = spans.into_iter();

    let Some((mut cur_start, mut cur_end)) = spans.next() else {
        return merged;
    };

    for (start, end) in spans {
        if start <= next_day(cur_end) {
            cur_end = cur_end.max(end);
        } else {
            merged.push(Interval::new(cur_start, Some(cur_end)));
            cur_start = start;
            cur_end = end;
        }
    }
    merged.push(Interval::new(cur_start, Some(cur_end)));

    trace!(input = input_len, output = merged.len(), "Merged intervals");
    merged
}

// Saturates at the last representable date.
fn next_day(date: NaiveDate) -> NaiveDate {
    date.succ_opt().unwrap_or(date)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Days;
    use proptest::prelude::*;

    fn day(n: u64) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .checked_add_days(Days::new(n))
            .unwrap()
    }

    fn span(a: u64, b: u64) -> (NaiveDate, NaiveDate) {
        (day(a), day(b))
    }

    fn interval(a: u64, b: u64) -> Interval {
        Interval::new(day(a), Some(day(b)))
    }

    fn as_spans(intervals: &[Interval]) -> Vec<(NaiveDate, NaiveDate)> {
        intervals
            .iter()
            .map(|i| (i.start(), i.end().unwrap()))
            .collect()
    }

    #[test]
    fn test_empty_input() {
        assert!(merge_spans(Vec::<(NaiveDate, NaiveDate)>::new()).is_empty());
    }

    #[test]
    fn test_adjacent_spans_merge() {
        assert_eq!(merge_spans([span(1, 3), span(4, 6)]), vec![interval(1, 6)]);
    }

    #[test]
    fn test_overlapping_spans_merge() {
        assert_eq!(merge_spans([span(1, 5), span(3, 8)]), vec![interval(1, 8)]);
    }

    #[test]
    fn test_contained_span_is_absorbed() {
        assert_eq!(merge_spans([span(1, 10), span(3, 4)]), vec![interval(1, 10)]);
    }

    #[test]
    fn test_gap_of_one_day_stays_separate() {
        assert_eq!(
            merge_spans([span(1, 2), span(4, 5)]),
            vec![interval(1, 2), interval(4, 5)]
        );
    }

    #[test]
    fn test_output_is_sorted() {
        assert_eq!(
            merge_spans([span(9, 10), span(1, 2), span(5, 6)]),
            vec![interval(1, 2), interval(5, 6), interval(9, 10)]
        );
    }

    #[test]
    fn test_equal_starts_do_not_panic() {
        assert_eq!(
            merge_spans([span(1, 4), span(1, 2), span(1, 4)]),
            vec![interval(1, 4)]
        );
    }

    #[test]
    fn test_last_representable_date() {
        let max = NaiveDate::MAX;
        let before = max.pred_opt().unwrap();
        assert_eq!(
            merge_spans([(before, max), (max, max)]),
            vec![Interval::new(before, Some(max))]
        );
    }

    fn arb_spans() -> impl Strategy<Value = Vec<(NaiveDate, NaiveDate)>> {
        prop::collection::vec((0u64..60, 0u64..6), 0..20).prop_map(|raw| {
            raw.into_iter()
                .map(|(start, len)| span(start, start + len))
                .collect()
        })
    }

    proptest! {
        #[test]
        fn prop_merge_is_idempotent(spans in arb_spans()) {
            let once = merge_spans(spans);
            let twice = merge_spans(as_spans(&once));
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn prop_merged_intervals_are_disjoint_and_non_adjacent(spans in arb_spans()) {
            let merged = merge_spans(spans);
            for pair in merged.windows(2) {
                prop_assert!(next_day(pair[0].end().unwrap()) < pair[1].start());
            }
        }

        #[test]
        fn prop_merge_preserves_covered_days(spans in arb_spans()) {
            let merged = merge_spans(spans.clone());
            for n in 0u64..70 {
                let covered = spans.iter().any(|(s, e)| *s <= day(n) && day(n) <= *e);
                let kept = merged.iter().any(|i| i.contains(day(n)).unwrap());
                prop_assert_eq!(covered, kept);
            }
        }
    }
}
