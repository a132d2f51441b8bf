use crate::core::event::{EventKey, EventSet};
use clap::ValueEnum;

/// Resolution of several calls from one sample that fall into the same event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DuplicatePolicy {
    /// The call seen last overwrites earlier ones
    Last,
    /// The call seen first is kept
    First,
    /// Magnitudes are added
    Sum,
    /// The largest magnitude is kept
    Max,
}

impl DuplicatePolicy {
    fn resolve(&self, current: Option<i64>, incoming: i64) -> i64 {
        match (self, current) {
            (_, None) => incoming,
            (DuplicatePolicy::Last, Some(_)) => incoming,
            (DuplicatePolicy::First, Some(prev)) => prev,
            (DuplicatePolicy::Sum, Some(prev)) => prev.saturating_add(incoming),
            (DuplicatePolicy::Max, Some(prev)) => prev.max(incoming),
        }
    }
}

/// Samples x events matrix, stored row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix {
    pub samples: Vec<String>,
    pub columns: Vec<EventKey>,
    values: Vec<f64>,
}

impl DistanceMatrix {
    pub fn new(samples: Vec<String>, columns: Vec<EventKey>) -> Self {
        let values = vec![0.0; samples.len() * columns.len()];
        Self {
            samples,
            columns,
            values,
        }
    }

    /// Builds the un-normalized matrix. Columns follow the order of `event_sets`, then
    /// event creation order; cells without a member stay 0.
    pub fn from_events(
        samples: Vec<String>,
        event_sets: &[EventSet],
        policy: DuplicatePolicy,
    ) -> Self {
        let columns: Vec<EventKey> = event_sets.iter().flat_map(|set| set.keys()).collect();
        let mut matrix = Self::new(samples, columns);

        let n_samples = matrix.samples.len();
        let mut col = 0;
        for event in event_sets.iter().flat_map(|set| set.events()) {
            let mut cells: Vec<Option<i64>> = vec![None; n_samples];
            for member in &event.members {
                let cell = &mut cells[member.sample];
                *cell = Some(policy.resolve(*cell, member.magnitude));
            }
            for (row, cell) in cells.into_iter().enumerate() {
                if let Some(value) = cell {
                    matrix.set(row, col, value as f64);
                }
            }
            col += 1;
        }
        matrix
    }

    pub fn n_rows(&self) -> usize {
        self.samples.len()
    }

    pub fn n_cols(&self) -> usize {
        self.columns.len()
    }

    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.values[row * self.n_cols() + col]
    }

    pub fn set(&mut self, row: usize, col: usize, value: f64) {
        let n_cols = self.n_cols();
        self.values[row * n_cols + col] = value;
    }

    pub fn row(&self, row: usize) -> &[f64] {
        let n_cols = self.n_cols();
        &self.values[row * n_cols..(row + 1) * n_cols]
    }

    pub fn column(&self, col: usize) -> Vec<f64> {
        (0..self.n_rows()).map(|row| self.get(row, col)).collect()
    }

    /// Scales every column to sum to 1. Columns summing to 0 are left untouched and
    /// their indices returned.
    pub fn normalize_columns(&mut self) -> Vec<usize> {
        let mut zero_sum_columns = Vec::new();
        for col in 0..self.n_cols() {
            let total: f64 = self.column(col).iter().sum();
            if total == 0.0 {
                zero_sum_columns.push(col);
                continue;
            }
            for row in 0..self.n_rows() {
                let value = self.get(row, col) / total;
                self.set(row, col, value);
            }
        }
        zero_sum_columns
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::svtype::SvType;
    use approx::assert_relative_eq;

    fn samples(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_normalize_columns() {
        let key = EventKey {
            sv_type: SvType::DELETION,
            anchor: 1000,
        };
        let mut matrix = DistanceMatrix::new(samples(&["a", "b", "c"]), vec![key]);
        matrix.set(0, 0, 5.0);
        matrix.set(1, 0, 10.0);
        matrix.set(2, 0, 5.0);

        assert!(matrix.normalize_columns().is_empty());
        let column = matrix.column(0);
        assert_relative_eq!(column[0], 0.25);
        assert_relative_eq!(column[1], 0.5);
        assert_relative_eq!(column[2], 0.25);
        assert_relative_eq!(column.iter().sum::<f64>(), 1.0);
    }

    #[test]
    fn test_zero_sum_column_is_left_as_is() {
        let columns = vec![
            EventKey {
                sv_type: SvType::DELETION,
                anchor: 10,
            },
            EventKey {
                sv_type: SvType::DELETION,
                anchor: 500,
            },
        ];
        let mut matrix = DistanceMatrix::new(samples(&["a", "b"]), columns);
        matrix.set(0, 0, 0.0);
        matrix.set(0, 1, 4.0);
        matrix.set(1, 1, 4.0);

        assert_eq!(matrix.normalize_columns(), vec![0]);
        assert_eq!(matrix.column(0), vec![0.0, 0.0]);
        assert_eq!(matrix.column(1), vec![0.5, 0.5]);
    }

    #[test]
    fn test_from_events_layout() {
        let mut del = EventSet::new(SvType::DELETION, 50);
        del.add(0, 1000, 200);
        del.add(1, 1020, 100);
        del.add(1, 3000, 50);
        let mut ins = EventSet::new(SvType::INSERTION, 50);
        ins.add(1, 5000, 1);

        let matrix =
            DistanceMatrix::from_events(samples(&["s1", "s2"]), &[del, ins], DuplicatePolicy::Last);
        let labels: Vec<String> = matrix.columns.iter().map(|k| k.to_string()).collect();
        assert_eq!(labels, vec!["DEL:1000", "DEL:3000", "INS:5000"]);
        assert_eq!(matrix.row(0), &[200.0, 0.0, 0.0]);
        assert_eq!(matrix.row(1), &[100.0, 50.0, 1.0]);
    }

    #[test]
    fn test_duplicate_policies() {
        let build = |policy| {
            let mut del = EventSet::new(SvType::DELETION, 50);
            del.add(0, 1000, 30);
            del.add(0, 1010, 10);
            del.add(0, 990, 20);
            DistanceMatrix::from_events(samples(&["s1"]), &[del], policy).get(0, 0)
        };
        assert_eq!(build(DuplicatePolicy::Last), 20.0);
        assert_eq!(build(DuplicatePolicy::First), 30.0);
        assert_eq!(build(DuplicatePolicy::Sum), 60.0);
        assert_eq!(build(DuplicatePolicy::Max), 30.0);
    }

    #[test]
    fn test_sum_policy_saturates() {
        let mut del = EventSet::new(SvType::DELETION, 50);
        del.add(0, 1000, i64::MAX);
        del.add(0, 1010, 5);
        let matrix = DistanceMatrix::from_events(samples(&["s1"]), &[del], DuplicatePolicy::Sum);
        assert_eq!(matrix.get(0, 0), i64::MAX as f64);
    }

    #[test]
    fn test_empty_event_sets() {
        let del = EventSet::new(SvType::DELETION, 50);
        let mut matrix =
            DistanceMatrix::from_events(samples(&["s1"]), &[del], DuplicatePolicy::Last);
        assert_eq!(matrix.n_cols(), 0);
        assert!(matrix.normalize_columns().is_empty());
        assert!(matrix.row(0).is_empty());
    }
}
