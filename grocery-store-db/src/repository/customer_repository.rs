use crate::models::customer::CustomerModel;

use super::{Create, DeleteById, ExistById, FindAll, FindById, Update};

/// Storage gateway consumed by the customer service.
///
/// Blanket-implemented for anything providing the individual operations, so
/// a backend only implements the per-operation traits.
pub trait CustomerRepository:
    Create<CustomerModel>
    + FindById<CustomerModel>
    + FindAll<CustomerModel>
    + ExistById
    + Update<CustomerModel>
    + DeleteById
{
}

impl<R> CustomerRepository for R where
    R: Create<CustomerModel>
        + FindById<CustomerModel>
        + FindAll<CustomerModel>
        + ExistById
        + Update<CustomerModel>
        + DeleteById
{
}
