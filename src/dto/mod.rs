use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BookingRequest {
    /// Guest name
    pub name: String,
    /// Contact phone number
    pub phone: String,
    /// Free-form note about the stay
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ContactRequest {
    /// Sender name
    pub name: String,
    /// Sender email address
    pub email: String,
    /// Inquiry text
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SendEmailResponse {
    /// Confirmation text
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Description of what went wrong
    pub detail: String,
}
