pub mod countdown;
pub mod derive;
pub mod dots;
pub mod progress;
pub mod reference;

pub use derive::{DerivedState, compute_derived};
