pub mod customer_service;

pub use customer_service::{CustomerServiceImpl, ServiceConfig};

#[cfg(test)]
pub mod test_utils;
