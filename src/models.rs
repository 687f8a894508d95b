use serde::Serialize;
use utoipa::ToSchema;

pub const SERVICE_NAME: &str = "qiskit-api";

/// Liveness payload returned by `GET /`.
#[derive(Serialize, ToSchema, Debug, Clone, Copy, PartialEq, Eq)]
pub struct HealthStatus {
    #[schema(example = "ok")]
    pub status: &'static str,
    #[schema(example = "qiskit-api")]
    pub service: &'static str,
}

impl HealthStatus {
    pub fn ok() -> Self {
        Self {
            status: "ok",
            service: SERVICE_NAME,
        }
    }
}
