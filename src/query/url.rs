use ::url::form_urlencoded;

use super::{Mode, Query};
use crate::{currency, API_URL};

impl<R> Query<R> {
	/// Builds the path and query string of the request, e.g. `/latest?symbols=USD`.
	pub fn build_query(&self) -> String {
		let mut params = form_urlencoded::Serializer::new(String::new());
		let mut path = match self.mode() {
			Mode::Latest => String::from("/latest"),
			Mode::Historical(date) => format!("/{date}"),
			Mode::Range { start, end } => {
				params.append_pair("start_at", start);
				params.append_pair("end_at", end);
				String::from("/history")
			}
		};
		if self.params.base != currency::DEFAULT_BASE {
			params.append_pair("base", &self.params.base);
		}
		if !self.params.symbols.is_empty() {
			params.append_pair("symbols", &self.symbols_joined(","));
		}

		let params = params.finish();
		if !params.is_empty() {
			path.push('?');
			path.push_str(&params);
		}
		path
	}

	/// Builds the full request URL against [`API_URL`].
	#[inline] pub fn url(&self) -> String { self.url_at(API_URL) }

	/// Builds the full request URL against another host.
	///
	/// Trailing slashes of `base_url` are dropped since query paths start with one.
	pub fn url_at(&self, base_url: &str) -> String {
		let base_url = base_url.trim_end_matches('/');
		let query = self.build_query();
		let mut url = String::with_capacity(base_url.len() + query.len());
		url.push_str(base_url);
		url.push_str(&query);
		url
	}
}

#[cfg(test)]
mod test {
	use super::*;
	use crate::currency::list::*;

	#[test]
	fn test_latest() {
		assert_eq!(Query::new().build_query(), "/latest");
	}

	#[test]
	fn test_historical() {
		let mut query = Query::new();
		query.add_date_from("2020-05-01");
		assert_eq!(query.build_query(), "/2020-05-01");
	}

	#[test]
	fn test_range() {
		let mut query = Query::new();
		query.add_date_from("2020-05-01").add_date_to("2020-05-10");
		assert_eq!(query.build_query(), "/history?start_at=2020-05-01&end_at=2020-05-10");
		query.set_base_currency(USD).add_target_currency(GBP).add_target_currency(JPY);
		assert_eq!(
			query.build_query(),
			"/history?start_at=2020-05-01&end_at=2020-05-10&base=USD&symbols=GBP%2CJPY",
		);
	}

	#[test]
	fn test_latest_with_params() {
		let mut query = Query::new();
		query.set_base_currency(USD).add_target_currency(GBP).add_target_currency(JPY);
		assert_eq!(query.build_query(), "/latest?base=USD&symbols=GBP%2CJPY");
	}

	#[test]
	fn test_historical_with_params() {
		let mut query = Query::new();
		query.add_date_from("2020-5-1").add_target_currency(ILS).set_base_currency(CHF);
		assert_eq!(query.build_query(), "/2020-5-1?base=CHF&symbols=ILS");
	}

	#[test]
	fn test_default_base_omitted() {
		let mut query = Query::new();
		query.set_base_currency(EUR);
		assert_eq!(query.build_query(), "/latest");
		query.add_target_currency(USD);
		assert_eq!(query.build_query(), "/latest?symbols=USD");
		query.add_date_from("2020-05-01");
		assert_eq!(query.build_query(), "/2020-05-01?symbols=USD");
		query.add_date_to("2020-05-10");
		assert_eq!(query.build_query(), "/history?start_at=2020-05-01&end_at=2020-05-10&symbols=USD");
		query.set_base_currency(USD).set_base_currency(EUR);
		assert!(!query.build_query().contains("base="));
	}

	#[test]
	fn test_end_date_alone_ignored() {
		let mut query = Query::new();
		query.add_date_to("2020-05-10");
		assert_eq!(query.build_query(), "/latest");
		query.add_target_currency(USD);
		assert_eq!(query.build_query(), "/latest?symbols=USD");
	}

	#[test]
	fn test_invalid_date_keeps_mode() {
		let mut query = Query::new();
		query.add_date_from("not-a-date");
		assert_eq!(query.date_from(), None);
		assert_eq!(query.build_query(), "/latest");
	}

	#[test]
	fn test_build_is_repeatable() {
		let mut query = Query::new();
		query.add_target_currency(USD).add_date_from("2020-05-01");
		assert_eq!(query.build_query(), query.build_query());
	}

	#[test]
	fn test_url() {
		let mut query = Query::new();
		assert_eq!(query.url(), "https://api.exchangeratesapi.io/latest");
		query.add_target_currency(USD);
		assert_eq!(query.url(), "https://api.exchangeratesapi.io/latest?symbols=USD");
	}

	#[test]
	fn test_url_at_trailing_slash() {
		let mut query = Query::new();
		query.add_date_from("2020-05-01");
		assert_eq!(query.url_at("http://localhost:8080"), "http://localhost:8080/2020-05-01");
		assert_eq!(query.url_at("http://localhost:8080/"), "http://localhost:8080/2020-05-01");
		assert_eq!(query.url_at("http://localhost:8080//"), "http://localhost:8080/2020-05-01");
		assert_eq!(query.url_at(&format!("{API_URL}/")), query.url());
	}
}
