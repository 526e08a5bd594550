pub mod aggregate;
pub mod service;
pub mod store;

pub use aggregate::*;
pub use service::*;
pub use store::*;
