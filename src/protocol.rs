pub mod kernel;
pub mod transaction;
