//! [`Report`]

use crate::error::ValidationError;

/// Receives the validation errors of rejected [`Query`](crate::Query) mutations.
///
/// Reports only happen when the query has [debug](crate::Query::debug) enabled.
pub trait Report {
	/// Handles a rejected input.
	fn report(&self, error: &ValidationError);
}

/// Reports through [`tracing`] at the error level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingReport;

impl Report for TracingReport {
	fn report(&self, error: &ValidationError) {
		tracing::error!(%error, "rejected query parameter");
	}
}

/// Ignore validation errors.
#[derive(Debug, Default, Clone, Copy)]
pub struct ReportIgnore;

impl Report for ReportIgnore {
	#[inline] fn report(&self, _: &ValidationError) {}
}

impl<F: Fn(&ValidationError)> Report for F {
	#[inline] fn report(&self, error: &ValidationError) { self(error) }
}
