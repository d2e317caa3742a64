pub mod speakers;
pub mod loader;

pub use speakers::*;
pub use loader::*;
