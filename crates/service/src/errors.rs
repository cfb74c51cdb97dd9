use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{entity} con ID {id} no encontrado")]
    NotFound { entity: &'static str, id: i32 },
    #[error("database error: {0}")]
    Db(String),
}

impl ServiceError {
    pub fn customer_not_found(id: i32) -> Self { Self::NotFound { entity: "Cliente", id } }
    pub fn product_not_found(id: i32) -> Self { Self::NotFound { entity: "Producto", id } }

    pub fn is_not_found(&self) -> bool { matches!(self, Self::NotFound { .. }) }
}

impl From<sea_orm::DbErr> for ServiceError {
    fn from(e: sea_orm::DbErr) -> Self { Self::Db(e.to_string()) }
}
