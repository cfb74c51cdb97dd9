//! Service layer for customers and products.
//! - Customers go through a `CustomerRepository` (sea-orm or in-memory).
//! - Products are served from the static catalog in `models`.
//! - Not-found is a `ServiceError` variant the HTTP layer matches on.

pub mod errors;
pub mod customer;
pub mod product;
#[cfg(test)]
pub mod test_support;
