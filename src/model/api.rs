use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct ErrorDto {
    pub error: String,
}

/// Plain acknowledgement body used by endpoints that only report success.
#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct MessageDto {
    pub message: String,
}

impl MessageDto {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct HealthDto {
    pub status: String,
    pub service: String,
}

/// `?page=N` query string accepted by every paginated listing.
#[derive(Deserialize, Debug, Clone, Copy, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PageQuery {
    /// One-based page number. Defaults to 1.
    #[serde(default = "default_page")]
    pub page: i64,
}

pub fn default_page() -> i64 {
    1
}
