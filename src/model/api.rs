use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

/// One failed field check inside a validation error.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct FieldErrorDto {
    /// Name of the offending field, or `body` for whole-payload problems.
    pub field: String,
    pub message: String,
}

impl FieldErrorDto {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Error envelope returned by every failing request.
#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ErrorDto {
    /// Always `"error"`.
    pub status: String,
    pub status_code: u16,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<FieldErrorDto>>,
    /// Error chain, only present outside production.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stack: Option<String>,
}

/// Success envelope wrapping every non-empty response body.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct SuccessDto<T> {
    /// Always `"success"`.
    pub status: String,
    pub data: T,
}

impl<T> SuccessDto<T> {
    pub fn new(data: T) -> Self {
        Self {
            status: "success".to_string(),
            data,
        }
    }
}

/// Deserializes a present field (including an explicit `null`) as `Some`.
///
/// Paired with `#[serde(default)]` this distinguishes an absent field (`None`) from
/// one cleared with `null` (`Some(None)`) in partial updates.
pub fn present<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    T::deserialize(deserializer).map(Some)
}
