mod analyzer;
pub mod defs;
mod die;
mod error;
mod game;
pub mod print;
mod table;
pub mod util;
mod value;

pub use analyzer::Analyzer;
pub use die::{Die, DieLike};
pub use error::{ConfigError, Error, ErrorKind, LookupError, StateError};
pub use game::Game;
pub use table::{Form, NarrowRow, Results, ResultsTable};
pub use util::{Count, CountMap, Weight};
pub use value::{DefaultFace, Face};

pub type Result<T> = ::core::result::Result<T, Error>;

const MIN_DICE: usize = 2;
const MIN_ROLLS: usize = 1;
