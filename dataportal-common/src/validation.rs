use crate::error::{ErrorCode, PortalError, Result};
use crate::{ELEVATOR_NO_MAX_LEN, MANAGEMENT_CODE_MAX_LEN, MAX_DATE_YEAR, MAX_NUM_OF_ROWS, MIN_DATE_YEAR};

/// Service key must be non-empty after trimming whitespace.
pub fn validate_service_key(service_key: &str) -> Result<()> {
    if service_key.trim().is_empty() {
        return Err(PortalError::validation_with_code(
            ErrorCode::InvalidServiceKey,
            "Service key is required. Please provide the authentication key issued from Public Data Portal.",
            Some("serviceKey".to_string()),
        ));
    }
    Ok(())
}

/// Page numbers start at 1.
pub fn validate_page_no(page_no: u32) -> Result<()> {
    if page_no < 1 {
        return Err(PortalError::validation_with_code(
            ErrorCode::InvalidPageNumber,
            "Page number must be an integer greater than or equal to 1.",
            Some("pageNo".to_string()),
        ));
    }
    Ok(())
}

/// Rows per page must be in `[1, 1000]`.
pub fn validate_num_of_rows(num_of_rows: u32) -> Result<()> {
    if !(1..=MAX_NUM_OF_ROWS).contains(&num_of_rows) {
        return Err(PortalError::validation_with_code(
            ErrorCode::InvalidParameter,
            "Number of rows per page must be an integer between 1 and 1000.",
            Some("numOfRows".to_string()),
        ));
    }
    Ok(())
}

/// Dates are `YYYYMMDD`: exactly 8 ASCII digits with year in `[1900, 2100]`,
/// month in `[1, 12]` and day in `[1, 31]`.
///
/// Deliberately no day-of-month cross-check against the month: the upstream
/// portal accepts `"20240230"`, and this client mirrors that leniency.
pub fn validate_date_format(date: &str, field_name: &str) -> Result<()> {
    if date.len() != 8 || !date.bytes().all(|b| b.is_ascii_digit()) {
        return Err(PortalError::validation_with_code(
            ErrorCode::InvalidDateFormat,
            format!("{} must be in YYYYMMDD format. (e.g., 20240101)", field_name),
            Some(field_name.to_string()),
        ));
    }

    // All-digit 8-byte input, so these slices parse cleanly.
    let year: u32 = date[0..4].parse().unwrap_or(0);
    let month: u32 = date[4..6].parse().unwrap_or(0);
    let day: u32 = date[6..8].parse().unwrap_or(0);

    if !(MIN_DATE_YEAR..=MAX_DATE_YEAR).contains(&year) {
        return Err(PortalError::validation_with_code(
            ErrorCode::InvalidDateFormat,
            format!(
                "Invalid year in {}. Year must be between 1900 and 2100.",
                field_name
            ),
            Some(field_name.to_string()),
        ));
    }
    if !(1..=12).contains(&month) {
        return Err(PortalError::validation_with_code(
            ErrorCode::InvalidDateFormat,
            format!(
                "Invalid month in {}. Month must be between 01 and 12.",
                field_name
            ),
            Some(field_name.to_string()),
        ));
    }
    if !(1..=31).contains(&day) {
        return Err(PortalError::validation_with_code(
            ErrorCode::InvalidDateFormat,
            format!(
                "Invalid day in {}. Day must be between 01 and 31.",
                field_name
            ),
            Some(field_name.to_string()),
        ));
    }
    Ok(())
}

/// Elevator unique numbers are at most 12 characters. The field itself is
/// optional; callers only validate a value that is present.
pub fn validate_elevator_no(elevator_no: &str) -> Result<()> {
    if elevator_no.chars().count() > ELEVATOR_NO_MAX_LEN {
        return Err(PortalError::invalid_elevator_number(
            "Elevator unique number must be 12 characters or less.",
            Some(elevator_no.to_string()),
        ));
    }
    Ok(())
}

/// Management codes must be non-empty after trimming and at most 100 characters.
pub fn validate_management_code(management_code: &str) -> Result<()> {
    if management_code.trim().is_empty() {
        return Err(PortalError::invalid_management_code(
            "Management code is required. Pass a site management code or an elevator management code.",
            None,
        ));
    }
    if management_code.chars().count() > MANAGEMENT_CODE_MAX_LEN {
        return Err(PortalError::invalid_management_code(
            "Management code must be 100 characters or less.",
            Some(management_code.to_string()),
        ));
    }
    Ok(())
}

/// The start date must not be later than the end date. Lexicographic
/// comparison is sound because both are fixed-width `YYYYMMDD` strings.
pub fn validate_date_range(start_date: &str, end_date: &str, start_field: &str) -> Result<()> {
    if start_date > end_date {
        return Err(PortalError::validation_with_code(
            ErrorCode::InvalidDateFormat,
            format!("{} must not be later than the end date.", start_field),
            Some(start_field.to_string()),
        ));
    }
    Ok(())
}
