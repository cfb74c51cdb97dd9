use async_trait::async_trait;
use models::customer;
use sea_orm::{
    prelude::DateTimeWithTimeZone, ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait,
    NotSet, QueryOrder, Set, Unchanged,
};

use crate::errors::ServiceError;

/// Persistence for customer rows. `get`/`update`/`delete` report absence in
/// their return value; classifying it as not-found is the service's job.
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<customer::Model>, ServiceError>;
    async fn get(&self, id: i32) -> Result<Option<customer::Model>, ServiceError>;
    /// Insert a new row; the store assigns the id.
    async fn insert(&self, fields: customer::CustomerFields, registered_at: DateTimeWithTimeZone) -> Result<customer::Model, ServiceError>;
    /// Overwrite every column of an existing row. `None` if the id is gone.
    async fn update(&self, model: customer::Model) -> Result<Option<customer::Model>, ServiceError>;
    /// `false` if nothing was deleted.
    async fn delete(&self, id: i32) -> Result<bool, ServiceError>;
}

/// SeaORM-backed repository implementation.
#[derive(Clone)]
pub struct SeaOrmCustomerRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmCustomerRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

#[async_trait]
impl CustomerRepository for SeaOrmCustomerRepository {
    async fn list(&self) -> Result<Vec<customer::Model>, ServiceError> {
        Ok(customer::Entity::find()
            .order_by_asc(customer::Column::Id)
            .all(&self.db)
            .await?)
    }

    async fn get(&self, id: i32) -> Result<Option<customer::Model>, ServiceError> {
        Ok(customer::Entity::find_by_id(id).one(&self.db).await?)
    }

    async fn insert(&self, fields: customer::CustomerFields, registered_at: DateTimeWithTimeZone) -> Result<customer::Model, ServiceError> {
        let am = customer::ActiveModel {
            id: NotSet,
            name: Set(fields.name),
            email: Set(fields.email),
            phone: Set(fields.phone),
            registered_at: Set(registered_at),
        };
        Ok(am.insert(&self.db).await?)
    }

    async fn update(&self, model: customer::Model) -> Result<Option<customer::Model>, ServiceError> {
        let am = customer::ActiveModel {
            id: Unchanged(model.id),
            name: Set(model.name),
            email: Set(model.email),
            phone: Set(model.phone),
            registered_at: Set(model.registered_at),
        };
        match am.update(&self.db).await {
            Ok(updated) => Ok(Some(updated)),
            Err(DbErr::RecordNotUpdated) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn delete(&self, id: i32) -> Result<bool, ServiceError> {
        let res = customer::Entity::delete_by_id(id).exec(&self.db).await?;
        Ok(res.rows_affected > 0)
    }
}
