use serde::Serialize;

/// Liveness payload served at `/api/health`.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Health {
    pub status: &'static str,
    pub service: &'static str,
}

impl Health {
    pub fn up() -> Self {
        Self { status: "UP", service: crate::SERVICE_NAME }
    }
}
