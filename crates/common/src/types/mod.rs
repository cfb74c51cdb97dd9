use serde::Serialize;

#[derive(Serialize, Debug)]
pub struct Health {
    pub status: &'static str,
}

/// Single-message JSON body used by every error response.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct MessageBody {
    pub mensaje: String,
}

impl MessageBody {
    pub fn new(mensaje: impl Into<String>) -> Self {
        Self { mensaje: mensaje.into() }
    }
}
