//! [exchangeratesapi.io](https://exchangeratesapi.io/) API library.
//!
//! Build a [`Query`], then send it with a [`Client`]:
//! ```no_run
//! # use exchangeratesapi::{Client, Query, currency::list::*};
//! let mut query = Query::new();
//! query.add_date_from("2020-05-01").add_date_to("2020-05-10").add_target_currency(USD);
//! let _body = Client::new().fetch(&query)?;
//! # Ok::<(), exchangeratesapi::Error>(())
//! ```

#![deny(missing_docs)]

pub mod client;
pub mod currency;
pub mod date;
pub mod error;
pub mod query;
pub mod report;

pub use client::Client;
pub use currency::validate_currency;
pub use date::validate_date_format;
pub use error::{Error, InvalidDateFormat, UnsupportedCurrency, ValidationError};
pub use query::{Mode, Params, Query};
pub use report::{Report, ReportIgnore, TracingReport};

/// The API host. [`Query::build_query`] paths are appended to it.
pub const API_URL: &str = "https://api.exchangeratesapi.io";
