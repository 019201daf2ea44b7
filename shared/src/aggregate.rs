//! Running totals over the full donation collection for the summary cards.

use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::donation::Record;

/// Cumulative totals up to and including the record at `index`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub index: usize,
    pub cumulative_count: usize,
    pub cumulative_amount: f64,
}

/// One point per record, in collection order
pub fn derive_series<R: Record>(collection: &[R]) -> Vec<SeriesPoint> {
    collection
        .iter()
        .enumerate()
        .scan(0.0_f64, |running, (index, record)| {
            *running += record.amount();
            Some(SeriesPoint {
                index,
                cumulative_count: index + 1,
                cumulative_amount: *running,
            })
        })
        .collect()
}

/// Sum of all amounts, 0 for an empty collection
pub fn total_amount<R: Record>(collection: &[R]) -> f64 {
    collection
        .iter()
        .fold(0.0, |total, record| total + record.amount())
}

/// Caches the last series, keyed by the collection's `Rc` identity.
///
/// There is no incremental update: a new snapshot is always a full
/// recompute, even when its contents are equal to the previous one.
#[derive(Debug)]
pub struct SeriesMemo<R> {
    source: Option<Rc<[R]>>,
    series: Rc<[SeriesPoint]>,
    total: f64,
}

impl<R> Default for SeriesMemo<R> {
    fn default() -> Self {
        Self {
            source: None,
            series: Rc::from(Vec::new()),
            total: 0.0,
        }
    }
}

impl<R: Record> SeriesMemo<R> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Series for `collection`, recomputed unless it is the cached snapshot
    pub fn series(&mut self, collection: &Rc<[R]>) -> Rc<[SeriesPoint]> {
        self.refresh(collection);
        self.series.clone()
    }

    pub fn total(&mut self, collection: &Rc<[R]>) -> f64 {
        self.refresh(collection);
        self.total
    }

    fn refresh(&mut self, collection: &Rc<[R]>) {
        if let Some(source) = &self.source {
            if Rc::ptr_eq(source, collection) {
                return;
            }
        }

        let series = derive_series(collection);
        self.total = series.last().map_or(0.0, |point| point.cumulative_amount);
        self.series = Rc::from(series);
        self.source = Some(collection.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::donation::Donation;
    use serde_json::json;
    use std::cell::Cell;

    fn donations(amounts: &[serde_json::Value]) -> Vec<Donation> {
        amounts
            .iter()
            .enumerate()
            .map(|(i, amount)| {
                serde_json::from_value(json!({ "_id": format!("d{}", i), "amount": amount }))
                    .unwrap()
            })
            .collect()
    }

    #[test]
    fn test_series_with_bad_amount() {
        let data = donations(&[json!(100), json!("bad"), json!(50)]);
        let series = derive_series(&data);

        let pairs: Vec<(usize, f64)> = series
            .iter()
            .map(|p| (p.cumulative_count, p.cumulative_amount))
            .collect();
        assert_eq!(pairs, vec![(1, 100.0), (2, 100.0), (3, 150.0)]);
        assert_eq!(total_amount(&data), 150.0);
    }

    #[test]
    fn test_series_empty() {
        let data: Vec<Donation> = Vec::new();
        assert!(derive_series(&data).is_empty());
        assert_eq!(total_amount(&data), 0.0);
    }

    #[test]
    fn test_series_counts_and_prefix_sums() {
        let data = donations(&[
            json!(10),
            json!("20.5"),
            json!(null),
            json!(-5),
            json!(true),
            json!(""),
            json!(3.25),
        ]);
        let series = derive_series(&data);
        assert_eq!(series.len(), data.len());

        let mut expected = 0.0;
        for (i, point) in series.iter().enumerate() {
            expected += data[i].amount();
            assert_eq!(point.index, i);
            assert_eq!(point.cumulative_count, i + 1);
            assert!((point.cumulative_amount - expected).abs() < 1e-9);
        }
        assert!((total_amount(&data) - 29.75).abs() < 1e-9);
    }

    struct Counted<'a> {
        reads: &'a Cell<usize>,
        amount: f64,
    }

    impl Record for Counted<'_> {
        fn record_id(&self) -> &str {
            "counted"
        }

        fn amount(&self) -> f64 {
            self.reads.set(self.reads.get() + 1);
            self.amount
        }
    }

    #[test]
    fn test_memo_short_circuits_on_same_reference() {
        let reads = Cell::new(0);
        let snapshot: Rc<[Counted<'_>]> = Rc::from(vec![
            Counted { reads: &reads, amount: 1.0 },
            Counted { reads: &reads, amount: 2.0 },
        ]);

        let mut memo = SeriesMemo::new();
        assert_eq!(memo.total(&snapshot), 3.0);
        assert_eq!(reads.get(), 2);

        let series = memo.series(&snapshot);
        assert_eq!(series.len(), 2);
        assert_eq!(reads.get(), 2);

        let copy: Rc<[Counted<'_>]> = Rc::from(vec![
            Counted { reads: &reads, amount: 1.0 },
            Counted { reads: &reads, amount: 2.0 },
        ]);
        assert_eq!(memo.total(&copy), 3.0);
        assert_eq!(reads.get(), 4);
    }
}
