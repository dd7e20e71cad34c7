pub mod collision;
pub mod movement;
pub mod serve;

pub use collision::*;
pub use movement::*;
pub use serve::*;
