mod scenepoint;
mod mapper;
mod selector;
mod staging;
mod dragtracker;

pub use scenepoint::*;
pub use mapper::*;
pub use selector::*;
pub use staging::*;
pub use dragtracker::*;
