//! The [`Query`] builder.

mod url;

use serde::Serialize;

use crate::{
	currency::{self, validate_currency},
	date::validate_date_format,
	error::ValidationError,
	report::{Report, TracingReport},
};

/// The query parameters of a [`Query`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Params {
	/// The currency the rates are expressed in.
	pub base: String,
	/// The date, or the start of the date range.
	pub date_from: Option<String>,
	/// The end of the date range.
	pub date_to: Option<String>,
	/// The requested currencies, in request order.
	pub symbols: Vec<String>,
}

impl Default for Params {
	fn default() -> Self {
		Self {
			base: currency::DEFAULT_BASE.to_owned(),
			date_from: None,
			date_to: None,
			symbols: Vec::new(),
		}
	}
}

/// The endpoint shape a [`Query`] resolves to.
#[derive(Debug, Hash, Clone, Copy, PartialEq, Eq)]
pub enum Mode<'a> {
	/// `/latest`
	Latest,
	/// `/<date>`
	Historical(&'a str),
	/// `/history?start_at=<start>&end_at=<end>`
	Range {
		/// `start_at`
		start: &'a str,
		/// `end_at`
		end: &'a str,
	},
}

/// An exchange rates query.
///
/// Every setter validates its input first. Invalid input leaves the query unchanged and, when
/// [`debug`](Query::debug) is on, goes to the query's [`Report`]er.
///
/// # Examples
/// ```
/// # use exchangeratesapi::{Query, currency::list::*};
/// let mut query = Query::new();
/// query.set_base_currency(USD).add_target_currency(GBP).add_target_currency(JPY);
/// assert_eq!(query.build_query(), "/latest?base=USD&symbols=GBP%2CJPY");
/// ```
#[derive(Debug, Clone)]
pub struct Query<R = TracingReport> {
	params: Params,
	debug: bool,
	reporter: R,
}

impl Query {
	/// Creates a new [`Query`] for the latest `EUR` rates of all currencies.
	pub fn new() -> Self {
		Self {
			params: Params::default(),
			debug: false,
			reporter: TracingReport,
		}
	}
}

impl Default for Query {
	#[inline] fn default() -> Self { Self::new() }
}

impl<R> Query<R> {
	/// Sets the reporter of rejected inputs.
	pub fn with_reporter<R2: Report>(self, reporter: R2) -> Query<R2> {
		Query {
			params: self.params,
			debug: self.debug,
			reporter,
		}
	}

	/// Sets whether rejected inputs are reported.
	pub fn debug(&mut self, debug: bool) -> &mut Self {
		self.debug = debug;
		self
	}

	/// Gets whether rejected inputs are reported.
	#[inline] pub fn is_debug(&self) -> bool { self.debug }

	/// Gets the query parameters.
	#[inline] pub fn params(&self) -> &Params { &self.params }

	/// Gets the base currency.
	#[inline] pub fn base_currency(&self) -> &str { &self.params.base }

	/// Gets the start date.
	#[inline] pub fn date_from(&self) -> Option<&str> { self.params.date_from.as_deref() }

	/// Gets the end date.
	#[inline] pub fn date_to(&self) -> Option<&str> { self.params.date_to.as_deref() }

	/// Gets the target currencies.
	#[inline] pub fn symbols(&self) -> &[String] { &self.params.symbols }

	/// Gets the target currencies joined by `delimiter`.
	pub fn symbols_joined(&self, delimiter: &str) -> String {
		self.params.symbols.join(delimiter)
	}

	/// Gets the supported currencies.
	#[inline] pub fn supported_currencies(&self) -> &'static [&'static str] { currency::supported() }

	/// Gets the supported currencies joined by `delimiter`.
	#[inline] pub fn supported_currencies_joined(&self, delimiter: &str) -> String {
		currency::supported_joined(delimiter)
	}

	/// Resolves the endpoint shape.
	///
	/// The end date only counts when there is a start date.
	pub fn mode(&self) -> Mode<'_> {
		match (self.date_from(), self.date_to()) {
			(Some(start), Some(end)) => Mode::Range { start, end },
			(Some(date), None) => Mode::Historical(date),
			(None, _) => Mode::Latest,
		}
	}

	/// Clears the start date.
	pub fn remove_date_from(&mut self) -> &mut Self {
		self.params.date_from = None;
		self
	}

	/// Clears the end date.
	pub fn remove_date_to(&mut self) -> &mut Self {
		self.params.date_to = None;
		self
	}

	/// Removes the first occurrence of `code` from the target currencies.
	pub fn remove_target_currency(&mut self, code: &str) -> &mut Self {
		if let Some(i) = self.params.symbols.iter().position(|symbol| symbol == code) {
			self.params.symbols.remove(i);
		}
		self
	}
}

impl<R: Report> Query<R> {
	/// Passes through the outcome of a validation, reporting the error if debugging.
	fn accept<E: Into<ValidationError>>(&self, result: Result<(), E>) -> bool {
		match result {
			Ok(()) => true,
			Err(error) => {
				if self.debug {
					self.reporter.report(&error.into());
				}
				false
			}
		}
	}

	/// Sets the base currency.
	pub fn set_base_currency(&mut self, code: &str) -> &mut Self {
		if self.accept(validate_currency(code)) {
			self.params.base = code.to_owned();
		}
		self
	}

	/// Sets the start date, or the single date if there is no end date.
	pub fn add_date_from(&mut self, date: &str) -> &mut Self {
		if self.accept(validate_date_format(date)) {
			self.params.date_from = Some(date.to_owned());
		}
		self
	}

	/// Sets the end date.
	pub fn add_date_to(&mut self, date: &str) -> &mut Self {
		if self.accept(validate_date_format(date)) {
			self.params.date_to = Some(date.to_owned());
		}
		self
	}

	/// Appends a target currency.
	///
	/// Duplicates are kept.
	pub fn add_target_currency(&mut self, code: &str) -> &mut Self {
		if self.accept(validate_currency(code)) {
			self.params.symbols.push(code.to_owned());
		}
		self
	}
}
