pub mod repo_impl;
pub mod create;
pub mod find_by_id;
pub mod find_all;
pub mod exist_by_id;
pub mod update;
pub mod delete_by_id;
#[cfg(test)]
pub mod test_utils;

pub use repo_impl::CustomerRepositoryImpl;
