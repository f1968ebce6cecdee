use std::fmt;
use std::slice::ChunksExact;
use std::str::FromStr;

use crate::error::{ConfigError, Error};
use crate::value::Face;
use crate::Result;

/// Outcomes of one play in wide form: one row per roll, one column per die.
///
/// Stored row-major, so `values[roll * num_dice + die]` is the face shown by
/// `die` on `roll`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultsTable<T>
where
    T: Face,
{
    values: Vec<T>,
    num_dice: usize,
}

/// One cell of the narrow form.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct NarrowRow<T>
where
    T: Face,
{
    pub roll: usize,
    pub die: usize,
    pub outcome: T,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Form {
    #[default]
    Wide,
    Narrow,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Results<T>
where
    T: Face,
{
    Wide(ResultsTable<T>),
    Narrow(Vec<NarrowRow<T>>),
}

impl<T> ResultsTable<T>
where
    T: Face,
{
    /// Assembles a table from per-die outcome columns. All columns must have
    /// the same length.
    pub fn from_columns(columns: Vec<Vec<T>>) -> Result<Self> {
        let num_dice = columns.len();
        let rolls = columns.first().map_or(0, Vec::len);
        if let Some((die, col)) = columns.iter().enumerate().find(|(_, c)| c.len() != rolls) {
            return Err(ConfigError::RaggedColumn {
                die,
                expected: rolls,
                got: col.len(),
            }
            .into());
        }

        let mut columns = columns.into_iter().map(Vec::into_iter).collect::<Vec<_>>();
        let mut values = Vec::with_capacity(rolls * num_dice);
        for _ in 0..rolls {
            for col in &mut columns {
                values.extend(col.next());
            }
        }
        Ok(Self { values, num_dice })
    }

    pub fn from_rows<I, R>(rows: I) -> Result<Self>
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = T>,
    {
        let mut values = Vec::new();
        let mut num_dice = None;
        for (roll, row) in rows.into_iter().enumerate() {
            let start = values.len();
            values.extend(row);
            let width = values.len() - start;
            if width == 0 {
                return Err(ConfigError::EmptyRow { roll }.into());
            }
            match num_dice {
                None => num_dice = Some(width),
                Some(n) if n != width => {
                    return Err(ConfigError::RaggedRow {
                        roll,
                        expected: n,
                        got: width,
                    }
                    .into())
                }
                Some(_) => {}
            }
        }
        Ok(Self {
            values,
            num_dice: num_dice.unwrap_or(0),
        })
    }

    #[must_use]
    pub fn num_rolls(&self) -> usize {
        if self.num_dice == 0 {
            0
        } else {
            self.values.len() / self.num_dice
        }
    }

    #[must_use]
    pub fn num_dice(&self) -> usize {
        self.num_dice
    }

    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.num_rolls(), self.num_dice)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[must_use]
    pub fn row(&self, roll: usize) -> Option<&[T]> {
        let start = roll.checked_mul(self.num_dice)?;
        self.values.get(start..start + self.num_dice)
    }

    #[must_use]
    pub fn get(&self, roll: usize, die: usize) -> Option<&T> {
        if die >= self.num_dice {
            return None;
        }
        self.row(roll).map(|r| &r[die])
    }

    #[must_use]
    pub fn column(&self, die: usize) -> Option<Vec<T>> {
        (die < self.num_dice).then(|| self.iter().map(|r| r[die].clone()).collect())
    }

    pub fn iter(&self) -> ChunksExact<'_, T> {
        // chunk size must be non-zero; an empty table has no rows either way
        self.values.chunks_exact(self.num_dice.max(1))
    }

    #[must_use]
    pub fn rows(&self) -> Vec<Vec<T>> {
        self.iter().map(<[T]>::to_vec).collect()
    }

    /// Reshapes into one row per (roll, die) pair, ordered by roll then die.
    #[must_use]
    pub fn to_narrow(&self) -> Vec<NarrowRow<T>> {
        self.iter()
            .enumerate()
            .flat_map(|(roll, row)| {
                row.iter().enumerate().map(move |(die, outcome)| NarrowRow {
                    roll,
                    die,
                    outcome: outcome.clone(),
                })
            })
            .collect()
    }
}

impl<'a, T> IntoIterator for &'a ResultsTable<T>
where
    T: Face,
{
    type Item = &'a [T];
    type IntoIter = ChunksExact<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> Results<T>
where
    T: Face,
{
    #[must_use]
    pub fn form(&self) -> Form {
        match self {
            Results::Wide(_) => Form::Wide,
            Results::Narrow(_) => Form::Narrow,
        }
    }

    #[must_use]
    pub fn into_wide(self) -> Option<ResultsTable<T>> {
        match self {
            Results::Wide(t) => Some(t),
            Results::Narrow(_) => None,
        }
    }

    #[must_use]
    pub fn into_narrow(self) -> Option<Vec<NarrowRow<T>>> {
        match self {
            Results::Wide(_) => None,
            Results::Narrow(rows) => Some(rows),
        }
    }
}

impl FromStr for Form {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "wide" => Ok(Form::Wide),
            "narrow" => Ok(Form::Narrow),
            _ => Err(ConfigError::InvalidForm(s.to_owned()).into()),
        }
    }
}

impl fmt::Display for Form {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Form::Wide => f.write_str("wide"),
            Form::Narrow => f.write_str("narrow"),
        }
    }
}
