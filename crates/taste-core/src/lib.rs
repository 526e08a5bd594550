pub mod bucket;
pub mod color;
pub mod constants;
pub mod mapper;
pub mod params;

pub use bucket::*;
pub use color::*;
pub use constants::*;
pub use mapper::*;
pub use params::*;
