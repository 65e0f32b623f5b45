//! Input validation helpers
//!
//! Centralized validation glue for request payloads. Structural rules live on
//! the DTOs as `validator` derive attributes; this module flattens the
//! resulting errors into a single [`AppError::Validation`].

use validator::Validate;

use crate::utils::AppError;

/// Run derive-based validation on a payload and flatten failures into one
/// 400-mapped error.
pub fn validate_payload<T: Validate>(payload: &T) -> Result<(), AppError> {
    payload.validate().map_err(|errs| {
        let mut parts: Vec<String> = errs
            .field_errors()
            .iter()
            .map(|(field, errors)| {
                let detail = errors
                    .first()
                    .and_then(|e| e.message.as_ref())
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| "is invalid".to_string());
                format!("{field} {detail}")
            })
            .collect();
        parts.sort();
        if parts.is_empty() {
            // Nested (list/struct) failures are not flattened by field_errors
            return AppError::Validation(errs.to_string());
        }
        AppError::Validation(parts.join("; "))
    })
}

/// Parse a guest-count query parameter.
///
/// 拒绝非数字和小于 1 的值 (原型接受字符串查询参数)
pub fn parse_guests(raw: &str) -> Result<i32, AppError> {
    let guests: i32 = raw
        .trim()
        .parse()
        .map_err(|_| AppError::validation("Number of guests must be a positive integer."))?;
    if guests < 1 {
        return Err(AppError::validation(
            "Number of guests must be a positive integer.",
        ));
    }
    Ok(guests)
}
