use crate::{constants::JD, dataset::Dataset, ephem_errors::EphemError};

/// Indices of the stored samples straddling a query time.
///
/// * `low == high`: the query time is exactly a stored timestamp.
/// * `high == low + 1`: `rows[low].jd < t < rows[high].jd`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bracket {
    pub low: usize,
    pub high: usize,
}

impl Bracket {
    pub fn is_exact(&self) -> bool {
        self.low == self.high
    }
}

/// Read-only time index over a borrowed [`Dataset`].
///
/// The store never copies nor mutates the rows, so any number of stores (and threads)
/// can share the same dataset.
#[derive(Debug, Clone, Copy)]
pub struct TimeIndexedStore<'a> {
    dataset: &'a Dataset,
}

impl<'a> TimeIndexedStore<'a> {
    pub fn new(dataset: &'a Dataset) -> Self {
        TimeIndexedStore { dataset }
    }

    pub fn dataset(&self) -> &'a Dataset {
        self.dataset
    }

    /// First and last stored Julian dates.
    pub fn span(&self) -> (JD, JD) {
        (self.dataset.first_jd(), self.dataset.last_jd())
    }

    pub fn contains(&self, target_jd: JD) -> bool {
        let (first, last) = self.span();
        first <= target_jd && target_jd <= last
    }

    /// Find the tightest pair of samples around `target_jd` by binary search.
    ///
    /// Arguments
    /// ---------
    /// * `target_jd` : query time (Julian Date)
    ///
    /// Returns
    /// -------
    /// * A [`Bracket`] with `rows[low].jd <= target_jd <= rows[high].jd`
    /// * [`EphemError::OutOfRange`] outside of the stored grid (or for NaN); the store
    ///   never extrapolates.
    pub fn bracket(&self, target_jd: JD) -> Result<Bracket, EphemError> {
        if !self.contains(target_jd) {
            let (first, last) = self.span();
            return Err(EphemError::OutOfRange {
                target: target_jd,
                first,
                last,
            });
        }

        let rows = self.dataset.rows();
        // first index whose timestamp is >= target
        let high = rows.partition_point(|row| row.julian_date < target_jd);

        if rows[high].julian_date == target_jd {
            return Ok(Bracket {
                low: high,
                high,
            });
        }

        Ok(Bracket {
            low: high - 1,
            high,
        })
    }
}

#[cfg(test)]
mod time_index_test {
    use super::*;
    use crate::{dataset::SampleRow, schema::Schema};

    fn grid(jds: &[f64]) -> Dataset {
        Dataset::new(
            Schema::moon(),
            jds.iter()
                .map(|jd| SampleRow::new(*jd, vec![0.0; 6]))
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn test_bracket_inside() {
        let dataset = grid(&[10.0, 10.25, 11.0, 13.5, 20.0]);
        let store = TimeIndexedStore::new(&dataset);

        assert_eq!(store.bracket(10.1), Ok(Bracket { low: 0, high: 1 }));
        assert_eq!(store.bracket(12.0), Ok(Bracket { low: 2, high: 3 }));
        assert_eq!(store.bracket(19.999), Ok(Bracket { low: 3, high: 4 }));
    }

    #[test]
    fn test_bracket_exact() {
        let dataset = grid(&[10.0, 10.25, 11.0, 13.5, 20.0]);
        let store = TimeIndexedStore::new(&dataset);

        for (i, jd) in [10.0, 10.25, 11.0, 13.5, 20.0].iter().enumerate() {
            let bracket = store.bracket(*jd).unwrap();
            assert!(bracket.is_exact());
            assert_eq!(bracket.low, i);
        }
    }

    #[test]
    fn test_bracket_out_of_range() {
        let dataset = grid(&[10.0, 11.0]);
        let store = TimeIndexedStore::new(&dataset);

        assert_eq!(
            store.bracket(9.999),
            Err(EphemError::OutOfRange {
                target: 9.999,
                first: 10.0,
                last: 11.0
            })
        );
        assert!(store.bracket(11.0 + 1e-9).unwrap_err().is_out_of_range());
        assert!(store.bracket(f64::NAN).unwrap_err().is_out_of_range());
        assert!(store.bracket(f64::INFINITY).unwrap_err().is_out_of_range());
    }

    #[test]
    fn test_single_row() {
        let dataset = grid(&[10.0]);
        let store = TimeIndexedStore::new(&dataset);
        assert_eq!(store.bracket(10.0), Ok(Bracket { low: 0, high: 0 }));
        assert!(store.bracket(10.5).is_err());
    }
}
