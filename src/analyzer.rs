use itertools::Itertools;

use crate::die::DieLike;
use crate::error::{ConfigError, Error, LookupError};
use crate::game::Game;
use crate::table::ResultsTable;
use crate::util::{count_map, distinct_permutations, increment, Count, CountMap};
use crate::value::Face;
use crate::Result;

/// Read-only statistics over a snapshot of one play.
///
/// The snapshot is taken at construction; later plays on the source game
/// are not seen. Combination and permutation counts iterate in
/// lexicographic key order.
#[derive(Debug, Clone)]
pub struct Analyzer<T>
where
    T: Face,
{
    table: ResultsTable<T>,
}

impl<T> Analyzer<T>
where
    T: Face,
{
    pub fn new<D>(game: &Game<D>) -> Result<Self>
    where
        D: DieLike<Face = T>,
    {
        let table = game.wide().map_err(|e| match e {
            Error::State(_) => Error::Config(ConfigError::Unplayed),
            e => e,
        })?;
        tracing::debug!(
            "Analyzer snapshot of {} rolls x {} dice",
            table.num_rolls(),
            table.num_dice()
        );
        Ok(Self::from_table(table))
    }

    #[must_use]
    pub fn from_table(table: ResultsTable<T>) -> Self {
        Self { table }
    }

    #[must_use]
    pub fn table(&self) -> &ResultsTable<T> {
        &self.table
    }

    /// Distinct faces seen anywhere in the table, ascending.
    #[must_use]
    pub fn faces(&self) -> Vec<T> {
        self.table.iter().flatten().cloned().sorted().dedup().collect()
    }

    /// Number of rolls on which every die shows the same face.
    #[must_use]
    pub fn jackpot_count(&self) -> Count {
        self.table.iter().filter(|row| row.iter().all_equal()).count()
    }

    /// How many dice show `face` on each roll, indexed by roll number.
    pub fn face_counts_per_roll(&self, face: &T) -> Result<Vec<Count>> {
        if !self.table.iter().flatten().any(|x| x == face) {
            return Err(LookupError::new(face).into());
        }
        Ok(self
            .table
            .iter()
            .map(|row| row.iter().filter(|x| *x == face).count())
            .collect())
    }

    /// Per roll, the count of every observed face (zeros included).
    #[must_use]
    pub fn face_counts(&self) -> Vec<CountMap<T>> {
        let faces = self.faces();
        self.table
            .iter()
            .map(|row| {
                let mut counts = faces.iter().map(|f| (f.clone(), 0)).collect::<CountMap<_>>();
                for x in row {
                    if let Some(c) = counts.get_mut(x) {
                        *c += 1;
                    }
                }
                counts
            })
            .collect()
    }

    /// Rolls grouped by their sorted outcomes.
    #[must_use]
    pub fn combination_counts(&self) -> CountMap<Vec<T>> {
        let mut counts = count_map();
        for row in &self.table {
            increment(&mut counts, row.iter().cloned().sorted().collect_vec());
        }
        counts
    }

    /// Each roll adds one to every distinct ordering of its outcomes, so a roll
    /// of `(3, 3, 5)` counts towards `(3, 3, 5)`, `(3, 5, 3)` and `(5, 3, 3)`.
    #[must_use]
    pub fn permutation_counts(&self) -> CountMap<Vec<T>> {
        let mut counts = count_map();
        for row in &self.table {
            let perms = distinct_permutations(row);
            tracing::trace!("{} orderings of {:?}", perms.len(), row);
            for p in perms {
                increment(&mut counts, p);
            }
        }
        counts
    }
}
