use core_types::SortDirection;
use rust_decimal::Decimal;
use std::cmp::Ordering;
use std::fmt::Debug;

/// The value a record yields for one of its sortable columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortValue<'a> {
    Number(Decimal),
    Text(&'a str),
}

impl Ord for SortValue<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (SortValue::Number(a), SortValue::Number(b)) => a.cmp(b),
            (SortValue::Text(a), SortValue::Text(b)) => a.cmp(b),
            // A column never mixes kinds; numbers first keeps the order total regardless.
            (SortValue::Number(_), SortValue::Text(_)) => Ordering::Less,
            (SortValue::Text(_), SortValue::Number(_)) => Ordering::Greater,
        }
    }
}

impl PartialOrd for SortValue<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A record whose columns can drive the ordering of a list.
///
/// `Field` is a closed set, so asking for a column the record does not have cannot compile.
pub trait Sortable {
    type Field: Copy + Eq + Debug;

    fn sort_value(&self, field: Self::Field) -> SortValue<'_>;
}

/// The rule that determines the order of the displayed rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortMode<F> {
    /// Load order, as received from the source.
    Original,
    ByField(F, SortDirection),
}

impl<F> Default for SortMode<F> {
    fn default() -> Self {
        SortMode::Original
    }
}

/// Computes the permutation of canonical indices for `mode`.
///
/// The sort is stable, so rows with equal keys keep their canonical relative order in
/// either direction and repeated sorts are reproducible.
pub fn order<R: Sortable>(records: &[R], mode: SortMode<R::Field>) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..records.len()).collect();

    if let SortMode::ByField(field, direction) = mode {
        indices.sort_by(|&a, &b| {
            let ordering = records[a].sort_value(field).cmp(&records[b].sort_value(field));
            match direction {
                SortDirection::Ascending => ordering,
                SortDirection::Descending => ordering.reverse(),
            }
        });
    }

    indices
}

/// Orders `records` according to `mode`, borrowing the canonical elements.
///
/// For `SortMode::Original` the result references every canonical element in place.
pub fn apply<R: Sortable>(records: &[R], mode: SortMode<R::Field>) -> Vec<&R> {
    order(records, mode).into_iter().map(|i| &records[i]).collect()
}
