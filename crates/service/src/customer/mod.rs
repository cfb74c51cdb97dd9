pub mod repository;
pub mod service;
#[cfg(any(test, feature = "memory"))]
pub mod memory;

pub use repository::{CustomerRepository, SeaOrmCustomerRepository};
pub use service::CustomerService;
#[cfg(any(test, feature = "memory"))]
pub use memory::InMemoryCustomerRepository;
