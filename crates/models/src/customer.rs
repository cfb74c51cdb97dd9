use sea_orm::entity::prelude::*;
use serde::{de::IgnoredAny, Deserialize, Deserializer, Serialize};

use crate::errors::ValidationErrors;

pub const NAME_MAX_LEN: usize = 100;
pub const EMAIL_MAX_LEN: usize = 100;
pub const PHONE_MAX_LEN: usize = 20;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "clientes")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_name = "nombre")]
    #[serde(rename = "nombre")]
    pub name: String,
    pub email: String,
    #[sea_orm(column_name = "telefono")]
    #[serde(rename = "telefono")]
    pub phone: String,
    #[sea_orm(column_name = "fecha_registro")]
    #[serde(rename = "fechaRegistro")]
    pub registered_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Body accepted by create and update.
///
/// Everything is optional on the wire so that a missing `nombre` is reported
/// as a field error rather than a JSON parse failure. `id` defaults to 0 like
/// an absent integer would. `fechaRegistro` never fails the request: a value
/// that is not a recognizable timestamp is treated as absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CustomerInput {
    #[serde(default)]
    pub id: i32,
    #[serde(rename = "nombre", default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(rename = "telefono", default)]
    pub phone: Option<String>,
    #[serde(rename = "fechaRegistro", default, deserialize_with = "lenient_timestamp")]
    pub registered_at: Option<DateTimeWithTimeZone>,
}

fn lenient_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTimeWithTimeZone>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Other(IgnoredAny),
    }

    Ok(match Option::<Raw>::deserialize(deserializer)? {
        Some(Raw::Text(text)) => parse_timestamp(&text),
        Some(Raw::Other(_)) | None => None,
    })
}

/// RFC 3339 with an offset, or a local `YYYY-MM-DDTHH:MM:SS[.fff]` taken as UTC.
fn parse_timestamp(text: &str) -> Option<DateTimeWithTimeZone> {
    let text = text.trim();
    if let Ok(ts) = DateTimeWithTimeZone::parse_from_rfc3339(text) {
        return Some(ts);
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| ChronoDateTime::parse_from_str(text, fmt).ok())
        .map(|naive| naive.and_utc().fixed_offset())
}

/// Input that passed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct CustomerFields {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub registered_at: Option<DateTimeWithTimeZone>,
}

impl CustomerInput {
    /// Check required fields and length limits, collecting every failure.
    pub fn validate(&self) -> Result<CustomerFields, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        let name = required(&mut errors, "nombre", self.name.as_deref(), NAME_MAX_LEN);
        let email = required(&mut errors, "email", self.email.as_deref(), EMAIL_MAX_LEN);
        let phone = self.phone.clone().unwrap_or_default();
        check_len(&mut errors, "telefono", &phone, PHONE_MAX_LEN);

        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(CustomerFields { name, email, phone, registered_at: self.registered_at })
    }
}

fn required(errors: &mut ValidationErrors, field: &str, value: Option<&str>, max: usize) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => {
            check_len(errors, field, v, max);
            v.to_string()
        }
        _ => {
            errors.add(field, format!("El campo {field} es obligatorio."));
            String::new()
        }
    }
}

fn check_len(errors: &mut ValidationErrors, field: &str, value: &str, max: usize) {
    if value.chars().count() > max {
        errors.add(field, format!("El campo {field} no puede superar los {max} caracteres."));
    }
}
