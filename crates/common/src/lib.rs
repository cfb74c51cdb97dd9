//! Pieces shared by every crate in the workspace: tracing setup and the
//! small wire types that are not tied to a resource.

pub mod types;
pub mod utils;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_type_ok() {
        let h = types::Health { status: "ok" };
        assert_eq!(h.status, "ok");
    }

    #[test]
    fn message_body_serializes_with_mensaje_key() {
        let body = types::MessageBody::new("Cliente con ID 4 no encontrado");
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json, serde_json::json!({"mensaje": "Cliente con ID 4 no encontrado"}));
    }

    #[test]
    fn log_format_parses_json_case_insensitively() {
        assert_eq!(utils::logging::LogFormat::parse("JSON"), utils::logging::LogFormat::Json);
        assert_eq!(utils::logging::LogFormat::parse("compact"), utils::logging::LogFormat::Compact);
        assert_eq!(utils::logging::LogFormat::parse(""), utils::logging::LogFormat::Compact);
    }
}
