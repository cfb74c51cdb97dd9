use models::product::{self, Product};
use tracing::{info, instrument, warn};

use crate::errors::ServiceError;

/// Read-only access to the product catalog. Lookups scan the five seeded
/// entries and never block.
#[derive(Clone, Copy)]
pub struct ProductService {
    catalog: &'static [Product],
}

impl Default for ProductService {
    fn default() -> Self { Self::new() }
}

impl ProductService {
    pub fn new() -> Self { Self { catalog: product::catalog() } }

    #[instrument(skip(self))]
    pub fn list_all(&self) -> &'static [Product] {
        info!("listing all products");
        info!(count = self.catalog.len(), "products listed");
        self.catalog
    }

    #[instrument(skip(self))]
    pub fn get_by_id(&self, id: i32) -> Result<&'static Product, ServiceError> {
        info!("looking up product");
        match self.catalog.iter().find(|p| p.id == id) {
            Some(p) => {
                info!(name = %p.name, "product found");
                Ok(p)
            }
            None => {
                warn!("product not found");
                Err(ServiceError::product_not_found(id))
            }
        }
    }
}
