use bon::bon;
use itertools::Itertools;
use rand::{thread_rng, Rng, RngCore};

use crate::error::{ConfigError, LookupError};
use crate::util::Weight;
use crate::value::{DefaultFace, Face};
use crate::Result;

/// A source of outcomes drawn from a fixed face set.
pub trait DieLike {
    type Face: Face;

    fn faces(&self) -> &[Self::Face];

    fn roll_rng<G>(&self, n: usize, rng: &mut G) -> Vec<Self::Face>
    where
        G: RngCore;

    fn roll(&self, n: usize) -> Vec<Self::Face> {
        let mut rng = thread_rng();
        self.roll_rng(n, &mut rng)
    }
}

/// A die with integer weights per face. A face with weight `w` comes up with
/// probability `w / denom`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Die<T = DefaultFace>
where
    T: Face,
{
    faces: Vec<T>,
    weights: Vec<Weight>,
    denom: Weight,
}

impl Die {
    pub fn numeric(size: DefaultFace) -> Result<Self> {
        Die::uniform(1..=size)
    }

    /// Fair die with faces `1..=size`, `size` must be positive.
    pub(crate) fn standard(size: u8) -> Self {
        assert_ne!(size, 0);
        Self {
            faces: (1..=DefaultFace::from(size)).collect(),
            weights: vec![1; usize::from(size)],
            denom: Weight::from(size),
        }
    }
}

#[bon]
impl<T> Die<T>
where
    T: Face,
{
    #[builder]
    pub fn new(faces: Vec<T>, weights: Option<Vec<Weight>>) -> Result<Self> {
        if faces.is_empty() {
            return Err(ConfigError::NoFaces.into());
        }
        let dup = faces
            .iter()
            .sorted()
            .tuple_windows::<(_, _)>()
            .find(|(a, b)| a == b);
        if let Some((face, _)) = dup {
            return Err(ConfigError::DuplicateFace(format!("{face:?}")).into());
        }
        let weights = weights.unwrap_or_else(|| vec![1; faces.len()]);
        if weights.len() != faces.len() {
            return Err(ConfigError::WeightCount {
                expected: faces.len(),
                got: weights.len(),
            }
            .into());
        }
        let denom = Self::total(&weights)?;
        Ok(Self {
            faces,
            weights,
            denom,
        })
    }

    pub fn uniform<I>(faces: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
    {
        Self::builder().faces(faces.into_iter().collect()).build()
    }

    #[must_use]
    pub fn denom(&self) -> Weight {
        self.denom
    }

    #[must_use]
    pub fn weights(&self) -> &[Weight] {
        &self.weights
    }

    #[must_use]
    pub fn weight(&self, face: &T) -> Option<Weight> {
        self.position(face).map(|i| self.weights[i])
    }

    pub fn change_weight(&mut self, face: &T, weight: Weight) -> Result<()> {
        let i = self.position(face).ok_or_else(|| LookupError::new(face))?;
        let mut weights = self.weights.clone();
        weights[i] = weight;
        self.denom = Self::total(&weights)?;
        self.weights = weights;
        Ok(())
    }

    /// Faces paired with their current weights, in face order.
    #[must_use]
    pub fn show(&self) -> Vec<(T, Weight)> {
        self.faces
            .iter()
            .cloned()
            .zip(self.weights.iter().copied())
            .collect()
    }

    #[must_use]
    pub fn probabilities(&self) -> Vec<f64> {
        self.weights
            .iter()
            .map(|w| *w as f64 / self.denom as f64)
            .collect_vec()
    }

    #[must_use]
    pub fn sample_rng<G>(&self, rng: &mut G) -> &T
    where
        G: RngCore,
    {
        let x = rng.gen_range(0..self.denom);
        let mut pos = 0;
        for (face, w) in self.faces.iter().zip(&self.weights) {
            pos += w;
            if x < pos {
                return face;
            }
        }
        unreachable!()
    }

    fn position(&self, face: &T) -> Option<usize> {
        self.faces.iter().position(|f| f == face)
    }

    fn total(weights: &[Weight]) -> Result<Weight> {
        let denom = weights
            .iter()
            .try_fold(0 as Weight, |acc, w| acc.checked_add(*w))
            .ok_or(ConfigError::WeightOverflow)?;
        if denom == 0 {
            return Err(ConfigError::ZeroWeights.into());
        }
        Ok(denom)
    }
}

impl<T> DieLike for Die<T>
where
    T: Face,
{
    type Face = T;

    fn faces(&self) -> &[T] {
        &self.faces
    }

    fn roll_rng<G>(&self, n: usize, rng: &mut G) -> Vec<T>
    where
        G: RngCore,
    {
        (0..n).map(|_| self.sample_rng(&mut *rng).clone()).collect()
    }
}
