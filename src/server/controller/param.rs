use serde::Deserialize;

use crate::server::{error::AppError, model::user::UserType, util::parse::parse_limit};

/// Query parameters of `GET /api/users`.
///
/// Kept as raw strings so a bad value becomes a validation error in the standard
/// envelope rather than an extractor rejection.
#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct UserListParam {
    pub user_type: Option<String>,
}

impl UserListParam {
    pub fn user_type(&self) -> Result<Option<UserType>, AppError> {
        match self.user_type.as_deref().filter(|v| !v.is_empty()) {
            None => Ok(None),
            Some(raw) => UserType::parse(raw).map(Some).ok_or_else(|| {
                AppError::invalid_field(
                    "userType",
                    "Expected one of: startup, investor, partner, admin",
                )
            }),
        }
    }
}

/// Optional `limit` query parameter of the activity feeds.
#[derive(Deserialize, Debug, Default)]
pub struct LimitParam {
    pub limit: Option<String>,
}

impl LimitParam {
    pub fn limit(&self) -> Result<Option<u64>, AppError> {
        parse_limit(self.limit.as_deref())
    }
}
