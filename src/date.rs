//! Date format validation.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::InvalidDateFormat;

/// `YYYY-M(M)-D(D)` with years 1900 to 2099.
///
/// Only the shape is checked, so `2021-02-31` passes.
static DATE: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"^(19|20)[0-9][0-9]-(0?[1-9]|1[012])-(0?[1-9]|[12][0-9]|3[01])$")
		.expect("date pattern is valid")
});

/// Checks that `date` looks like an ISO 8601 calendar date (`YYYY-MM-DD`).
///
/// Month and day may omit their leading zero. The check is syntactic, it does not know how many
/// days a month has.
pub fn validate_date_format(date: &str) -> Result<(), InvalidDateFormat> {
	if DATE.is_match(date) {
		Ok(())
	} else {
		Err(InvalidDateFormat { date: date.to_owned() })
	}
}
