use std::sync::Arc;

use service::customer::{CustomerRepository, CustomerService};
use service::product::ProductService;

/// Services built once at startup and shared by every handler.
#[derive(Clone)]
pub struct AppState {
    pub customers: CustomerService,
    pub products: ProductService,
}

impl AppState {
    pub fn new(customer_repo: Arc<dyn CustomerRepository>) -> Self {
        Self {
            customers: CustomerService::new(customer_repo),
            products: ProductService::new(),
        }
    }
}
