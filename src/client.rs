//! Blocking HTTP [`Client`].

use std::borrow::Cow;

use crate::{error::Error, Query, API_URL};

/// Sends [`Query`] requests and returns the response bodies unaltered.
#[derive(Debug, Clone)]
pub struct Client {
	http: reqwest::blocking::Client,
	base_url: Cow<'static, str>,
}

impl Default for Client {
	#[inline] fn default() -> Self { Self::new() }
}

impl Client {
	/// Creates a new [`Client`] for [`API_URL`].
	pub fn new() -> Self { Self::from_http(reqwest::blocking::Client::new()) }

	/// Creates a new [`Client`] for [`API_URL`] on top of a configured HTTP client.
	pub fn from_http(http: reqwest::blocking::Client) -> Self {
		Self { http, base_url: Cow::Borrowed(API_URL) }
	}

	/// Points the client at another host, e.g. a mirror or a test server.
	///
	/// Trailing slashes are dropped since query paths start with one.
	pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
		let mut base_url = base_url.into();
		base_url.truncate(base_url.trim_end_matches('/').len());
		self.base_url = Cow::Owned(base_url);
		self
	}

	/// Gets the base URL queries are sent to.
	#[inline] pub fn base_url(&self) -> &str { &self.base_url }

	/// Sends the query.
	///
	/// Fails with [`Error::InvalidUtf8`] if the body is not UTF-8, see [`Client::fetch_bytes`].
	pub fn fetch<R>(&self, query: &Query<R>) -> Result<String, Error> {
		self.get(&query.url_at(&self.base_url))
	}

	/// Sends the query and returns the body bytes.
	pub fn fetch_bytes<R>(&self, query: &Query<R>) -> Result<Vec<u8>, Error> {
		self.get_bytes(&query.url_at(&self.base_url))
	}

	/// Sends a GET request to a full URL.
	///
	/// The body is not transcoded, it must be valid UTF-8.
	#[tracing::instrument(skip(self), err)]
	pub fn get(&self, url: &str) -> Result<String, Error> {
		let body = self.send(url)?.bytes()?;
		Ok(String::from_utf8(body.to_vec())?)
	}

	/// Sends a GET request to a full URL and returns the body bytes.
	#[tracing::instrument(skip(self), err)]
	pub fn get_bytes(&self, url: &str) -> Result<Vec<u8>, Error> {
		Ok(self.send(url)?.bytes()?.to_vec())
	}

	fn send(&self, url: &str) -> Result<reqwest::blocking::Response, Error> {
		let response = self.http.get(url).send()?;
		tracing::debug!(status = %response.status(), "received response");
		Ok(response.error_for_status()?)
	}
}
