mod assistant;

pub use assistant::*;
