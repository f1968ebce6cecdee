use std::fmt::Debug;

pub type DefaultFace = i32;

/// Anything that can be printed on a die face and compared.
pub trait Face: Sized + Send + Sync + Debug + Clone + PartialEq + Eq + PartialOrd + Ord {}

impl<T> Face for T where T: Sized + Send + Sync + Debug + Clone + PartialEq + Eq + PartialOrd + Ord {}
