pub mod customer;
pub mod validation;

pub use customer::*;
pub use validation::*;
