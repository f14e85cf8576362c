pub mod analyzer;
pub mod episode;
pub mod opponents;
pub mod policy;
pub mod rng;
pub mod state;

pub use episode::*;
pub use rng::*;
pub use state::*;
