use crate::server::error::AppError;

/// Parses a path segment into a record id.
///
/// # Arguments
/// - `field` - Parameter name reported back on failure
/// - `value` - Raw path segment
///
/// # Returns
/// - `Ok(i32)` - Positive id
/// - `Err(AppError::Validation)` - Segment is not a positive integer
pub fn parse_id(field: &str, value: &str) -> Result<i32, AppError> {
    value
        .parse::<i32>()
        .ok()
        .filter(|id| *id > 0)
        .ok_or_else(|| AppError::invalid_field(field, "Expected a positive integer id"))
}

/// Parses an optional `limit` query parameter.
///
/// # Returns
/// - `Ok(None)` - Parameter absent or empty
/// - `Ok(Some(n))` - Positive row limit
/// - `Err(AppError::Validation)` - Value is not a positive integer
pub fn parse_limit(value: Option<&str>) -> Result<Option<u64>, AppError> {
    match value.map(str::trim).filter(|v| !v.is_empty()) {
        None => Ok(None),
        Some(raw) => raw
            .parse::<u64>()
            .ok()
            .filter(|limit| *limit > 0)
            .map(Some)
            .ok_or_else(|| AppError::invalid_field("limit", "Expected a positive integer")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_positive_ids() {
        assert_eq!(parse_id("id", "42").unwrap(), 42);
    }

    #[test]
    fn rejects_non_numeric_and_non_positive_ids() {
        assert!(parse_id("id", "abc").is_err());
        assert!(parse_id("id", "0").is_err());
        assert!(parse_id("id", "-3").is_err());
        assert!(parse_id("id", "99999999999").is_err());
    }

    #[test]
    fn parses_optional_limit() {
        assert_eq!(parse_limit(None).unwrap(), None);
        assert_eq!(parse_limit(Some("")).unwrap(), None);
        assert_eq!(parse_limit(Some("5")).unwrap(), Some(5));
        assert!(parse_limit(Some("0")).is_err());
        assert!(parse_limit(Some("ten")).is_err());
    }
}
