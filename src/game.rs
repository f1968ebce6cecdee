use itertools::Itertools;
use rand::{thread_rng, RngCore};

use crate::die::{Die, DieLike};
use crate::error::{ConfigError, StateError};
use crate::table::{Form, NarrowRow, Results, ResultsTable};
use crate::{Result, MIN_DICE, MIN_ROLLS};

/// A set of dice sharing one face set, plus the outcome of the most recent play.
#[derive(Debug, Clone)]
pub struct Game<D = Die>
where
    D: DieLike,
{
    dice: Vec<D>,
    last_play: Option<ResultsTable<D::Face>>,
}

impl<D> Game<D>
where
    D: DieLike,
{
    pub fn new(dice: Vec<D>) -> Result<Self> {
        if dice.len() < MIN_DICE {
            return Err(ConfigError::TooFewDice {
                min: MIN_DICE,
                got: dice.len(),
            }
            .into());
        }
        let faces = Self::face_set(&dice[0]);
        if let Some(i) = dice.iter().skip(1).position(|d| Self::face_set(d) != faces) {
            return Err(ConfigError::FaceMismatch { die: i + 1 }.into());
        }
        tracing::debug!("Game configured with {} dice, faces {:?}", dice.len(), faces);
        Ok(Self {
            dice,
            last_play: None,
        })
    }

    #[must_use]
    pub fn dice(&self) -> &[D] {
        &self.dice
    }

    #[must_use]
    pub fn num_dice(&self) -> usize {
        self.dice.len()
    }

    /// The shared face set, in the first die's order.
    #[must_use]
    pub fn faces(&self) -> &[D::Face] {
        self.dice[0].faces()
    }

    #[must_use]
    pub fn has_played(&self) -> bool {
        self.last_play.is_some()
    }

    pub fn play(&mut self, rolls: usize) -> Result<()> {
        let mut rng = thread_rng();
        self.play_rng(rolls, &mut rng)
    }

    /// Rolls every die `rolls` times and replaces the previous results.
    pub fn play_rng<G>(&mut self, rolls: usize, rng: &mut G) -> Result<()>
    where
        G: RngCore,
    {
        if rolls < MIN_ROLLS {
            return Err(ConfigError::TooFewRolls {
                min: MIN_ROLLS,
                got: rolls,
            }
            .into());
        }
        let columns = self
            .dice
            .iter()
            .map(|die| die.roll_rng(rolls, &mut *rng))
            .collect_vec();
        let table = ResultsTable::from_columns(columns)?;
        tracing::debug!("Played {} rolls of {} dice", rolls, self.dice.len());
        self.last_play = Some(table);
        Ok(())
    }

    /// Copy of the last play's results in the requested form.
    pub fn results(&self, form: Form) -> Result<Results<D::Face>> {
        let table = self.last_play.as_ref().ok_or(StateError::NotPlayed)?;
        Ok(match form {
            Form::Wide => Results::Wide(table.clone()),
            Form::Narrow => Results::Narrow(table.to_narrow()),
        })
    }

    pub fn wide(&self) -> Result<ResultsTable<D::Face>> {
        self.last_play
            .clone()
            .ok_or_else(|| StateError::NotPlayed.into())
    }

    pub fn narrow(&self) -> Result<Vec<NarrowRow<D::Face>>> {
        self.last_play
            .as_ref()
            .map(ResultsTable::to_narrow)
            .ok_or_else(|| StateError::NotPlayed.into())
    }

    fn face_set(die: &D) -> Vec<D::Face> {
        die.faces().iter().cloned().sorted().collect()
    }
}
