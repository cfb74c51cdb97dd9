use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use models::customer;
use sea_orm::prelude::DateTimeWithTimeZone;
use tokio::sync::RwLock;

use super::repository::CustomerRepository;
use crate::errors::ServiceError;

#[derive(Default)]
struct Table {
    rows: BTreeMap<i32, customer::Model>,
    last_id: i32,
}

/// Customer store kept in process memory. Ids start at 1 and are never
/// reused, matching a serial column.
#[derive(Clone, Default)]
pub struct InMemoryCustomerRepository {
    inner: Arc<RwLock<Table>>,
}

impl InMemoryCustomerRepository {
    pub fn new() -> Self { Self::default() }
}

#[async_trait]
impl CustomerRepository for InMemoryCustomerRepository {
    async fn list(&self) -> Result<Vec<customer::Model>, ServiceError> {
        let table = self.inner.read().await;
        Ok(table.rows.values().cloned().collect())
    }

    async fn get(&self, id: i32) -> Result<Option<customer::Model>, ServiceError> {
        let table = self.inner.read().await;
        Ok(table.rows.get(&id).cloned())
    }

    async fn insert(&self, fields: customer::CustomerFields, registered_at: DateTimeWithTimeZone) -> Result<customer::Model, ServiceError> {
        let mut table = self.inner.write().await;
        table.last_id += 1;
        let model = customer::Model {
            id: table.last_id,
            name: fields.name,
            email: fields.email,
            phone: fields.phone,
            registered_at,
        };
        table.rows.insert(model.id, model.clone());
        Ok(model)
    }

    async fn update(&self, model: customer::Model) -> Result<Option<customer::Model>, ServiceError> {
        let mut table = self.inner.write().await;
        match table.rows.get_mut(&model.id) {
            Some(row) => {
                *row = model.clone();
                Ok(Some(model))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, id: i32) -> Result<bool, ServiceError> {
        let mut table = self.inner.write().await;
        Ok(table.rows.remove(&id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(name: &str) -> customer::CustomerFields {
        customer::CustomerFields { name: name.into(), email: "m@x.com".into(), phone: String::new(), registered_at: None }
    }

    #[tokio::test]
    async fn ids_are_not_reused_after_delete() {
        let repo = InMemoryCustomerRepository::new();
        let now = chrono::Utc::now().into();
        let a = repo.insert(fields("A"), now).await.unwrap();
        let b = repo.insert(fields("B"), now).await.unwrap();
        assert_eq!((a.id, b.id), (1, 2));

        assert!(repo.delete(b.id).await.unwrap());
        let c = repo.insert(fields("C"), now).await.unwrap();
        assert_eq!(c.id, 3);

        let names: Vec<_> = repo.list().await.unwrap().into_iter().map(|m| m.name).collect();
        assert_eq!(names, vec!["A", "C"]);
    }

    #[tokio::test]
    async fn update_of_missing_row_is_none() {
        let repo = InMemoryCustomerRepository::new();
        let ghost = customer::Model {
            id: 42,
            name: "Ghost".into(),
            email: "g@x.com".into(),
            phone: String::new(),
            registered_at: chrono::Utc::now().into(),
        };
        assert!(repo.update(ghost).await.unwrap().is_none());
        assert!(repo.list().await.unwrap().is_empty());
    }
}
