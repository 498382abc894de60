//! Error types.

/// A date that is not in `YYYY-MM-DD` form.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("the specified date {date:?} is invalid, please use ISO 8601 notation (e.g. YYYY-MM-DD)")]
pub struct InvalidDateFormat {
	/// The rejected input.
	pub date: String,
}

/// A currency code missing from the [supported list](crate::currency::list::ARRAY).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("the specified currency code {code:?} is not currently supported")]
pub struct UnsupportedCurrency {
	/// The rejected input.
	pub code: String,
}

/// A rejected [`Query`](crate::Query) mutation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
	/// See [`InvalidDateFormat`].
	#[error(transparent)]
	InvalidDateFormat(#[from] InvalidDateFormat),
	/// See [`UnsupportedCurrency`].
	#[error(transparent)]
	UnsupportedCurrency(#[from] UnsupportedCurrency),
}

/// An error from sending a request.
#[derive(Debug, thiserror::Error)]
pub enum Error {
	/// HTTP error: connection failure, non-success status or body read failure.
	#[error("http error: {0}")]
	HttpError(#[from] reqwest::Error),
	/// The response body is not valid UTF-8.
	#[error("the response body is not valid UTF-8: {0}")]
	InvalidUtf8(#[from] std::string::FromUtf8Error),
}
