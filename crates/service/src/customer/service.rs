use std::sync::Arc;

use chrono::Utc;
use models::customer;
use tracing::{error, info, instrument, warn};

use super::repository::CustomerRepository;
use crate::errors::ServiceError;

/// Customer use cases on top of a repository.
///
/// Each operation logs what it is about to do and how it ended. Errors are
/// returned as produced; nothing is retried or swallowed.
#[derive(Clone)]
pub struct CustomerService {
    repo: Arc<dyn CustomerRepository>,
}

impl CustomerService {
    pub fn new(repo: Arc<dyn CustomerRepository>) -> Self { Self { repo } }

    #[instrument(skip(self))]
    pub async fn list_all(&self) -> Result<Vec<customer::Model>, ServiceError> {
        info!("listing all customers");
        match self.repo.list().await {
            Ok(list) => {
                info!(count = list.len(), "customers listed");
                Ok(list)
            }
            Err(e) => {
                error!(err = %e, "list customers failed");
                Err(e)
            }
        }
    }

    #[instrument(skip(self))]
    pub async fn get_by_id(&self, id: i32) -> Result<customer::Model, ServiceError> {
        info!("looking up customer");
        match self.repo.get(id).await {
            Ok(Some(c)) => {
                info!(name = %c.name, "customer found");
                Ok(c)
            }
            Ok(None) => {
                warn!("customer not found");
                Err(ServiceError::customer_not_found(id))
            }
            Err(e) => {
                error!(err = %e, "get customer failed");
                Err(e)
            }
        }
    }

    /// Persist a new customer. Any caller-supplied registration time is
    /// replaced with the current time.
    #[instrument(skip(self, input), fields(name = %input.name, email = %input.email))]
    pub async fn create(&self, input: customer::CustomerFields) -> Result<customer::Model, ServiceError> {
        info!("creating customer");
        let registered_at = Utc::now().into();
        match self.repo.insert(input, registered_at).await {
            Ok(c) => {
                info!(id = c.id, "customer created");
                Ok(c)
            }
            Err(e) => {
                error!(err = %e, "create customer failed");
                Err(e)
            }
        }
    }

    /// Overwrite an existing customer. Name, email and phone are replaced
    /// wholesale; `registered_at` is replaced only when the caller sent one.
    #[instrument(skip(self, input))]
    pub async fn update(&self, id: i32, input: customer::CustomerFields) -> Result<customer::Model, ServiceError> {
        info!("updating customer");
        let existing = match self.repo.get(id).await {
            Ok(Some(c)) => c,
            Ok(None) => {
                warn!("customer to update not found");
                return Err(ServiceError::customer_not_found(id));
            }
            Err(e) => {
                error!(err = %e, "update customer failed");
                return Err(e);
            }
        };

        let model = customer::Model {
            id,
            name: input.name,
            email: input.email,
            phone: input.phone,
            registered_at: input.registered_at.unwrap_or(existing.registered_at),
        };
        match self.repo.update(model).await {
            Ok(Some(c)) => {
                info!("customer updated");
                Ok(c)
            }
            // deleted between the lookup and the write
            Ok(None) => {
                warn!("customer to update not found");
                Err(ServiceError::customer_not_found(id))
            }
            Err(e) => {
                error!(err = %e, "update customer failed");
                Err(e)
            }
        }
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        info!("deleting customer");
        match self.repo.delete(id).await {
            Ok(true) => {
                info!("customer deleted");
                Ok(())
            }
            Ok(false) => {
                warn!("customer to delete not found");
                Err(ServiceError::customer_not_found(id))
            }
            Err(e) => {
                error!(err = %e, "delete customer failed");
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::customer::InMemoryCustomerRepository;
    use chrono::{Duration, TimeZone};

    fn service() -> CustomerService {
        CustomerService::new(Arc::new(InMemoryCustomerRepository::new()))
    }

    fn fields(name: &str, email: &str) -> customer::CustomerFields {
        customer::CustomerFields {
            name: name.into(),
            email: email.into(),
            phone: "555-1000".into(),
            registered_at: None,
        }
    }

    #[tokio::test]
    async fn list_is_empty_initially() {
        assert!(service().list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn create_stamps_server_time_and_ignores_caller_value() {
        let svc = service();
        let mut f = fields("Ana", "ana@x.com");
        let bogus = Utc.with_ymd_and_hms(1999, 1, 1, 0, 0, 0).unwrap();
        f.registered_at = Some(bogus.into());

        let before = Utc::now();
        let created = svc.create(f).await.unwrap();
        let after = Utc::now();

        assert!(created.id > 0);
        assert!(created.registered_at >= before - Duration::milliseconds(1));
        assert!(created.registered_at <= after + Duration::milliseconds(1));
    }

    #[tokio::test]
    async fn create_then_get_round_trips() {
        let svc = service();
        let created = svc.create(fields("Ana", "ana@x.com")).await.unwrap();
        let fetched = svc.get_by_id(created.id).await.unwrap();
        assert_eq!(fetched, created);
        assert_eq!(fetched.name, "Ana");
        assert_eq!(fetched.phone, "555-1000");
    }

    #[tokio::test]
    async fn created_ids_are_unique() {
        let svc = service();
        let a = svc.create(fields("A", "a@x.com")).await.unwrap();
        let b = svc.create(fields("B", "b@x.com")).await.unwrap();
        assert_ne!(a.id, b.id);
        assert_eq!(svc.list_all().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn missing_ids_are_not_found_everywhere() {
        let svc = service();
        assert!(svc.get_by_id(7).await.unwrap_err().is_not_found());
        assert!(svc.update(7, fields("X", "x@x.com")).await.unwrap_err().is_not_found());
        let err = svc.delete(7).await.unwrap_err();
        assert_eq!(err.to_string(), "Cliente con ID 7 no encontrado");
    }

    #[tokio::test]
    async fn update_overwrites_fields_and_keeps_registration_when_omitted() {
        let svc = service();
        let created = svc.create(fields("Ana", "ana@x.com")).await.unwrap();

        let mut f = fields("Ana María", "anam@x.com");
        f.phone = String::new();
        let updated = svc.update(created.id, f).await.unwrap();
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.name, "Ana María");
        assert_eq!(updated.email, "anam@x.com");
        assert_eq!(updated.phone, "");
        assert_eq!(updated.registered_at, created.registered_at);
    }

    #[tokio::test]
    async fn update_writes_caller_registration_time() {
        let svc = service();
        let created = svc.create(fields("Ana", "ana@x.com")).await.unwrap();
        let when = Utc.with_ymd_and_hms(2020, 5, 1, 12, 0, 0).unwrap();
        let mut f = fields("Ana", "ana@x.com");
        f.registered_at = Some(when.into());
        let updated = svc.update(created.id, f).await.unwrap();
        assert_eq!(updated.registered_at, when);
    }

    #[tokio::test]
    async fn second_delete_is_not_found() {
        let svc = service();
        let created = svc.create(fields("Ana", "ana@x.com")).await.unwrap();
        svc.delete(created.id).await.unwrap();
        for _ in 0..2 {
            assert!(svc.delete(created.id).await.unwrap_err().is_not_found());
        }
    }
}
