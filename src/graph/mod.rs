pub mod traits;
pub mod village;
pub mod sample;

pub use traits::{Graph, MutableGraph};
pub use village::VillageGraph;
