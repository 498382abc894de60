//! Supported currency codes.

use crate::error::UnsupportedCurrency;

pub mod list {
	//! The supported currency codes, in the order the API documents them.

	macro_rules! defcurrencies {
		($($id:ident),* $(,)?) => {
			$(
				#[doc = concat!("The `", stringify!($id), "` currency code.")]
				pub const $id: &str = stringify!($id);
			)*

			/// All supported currency codes.
			pub const ARRAY: [&str; [$(stringify!($id)),*].len()] = [$($id),*];
		};
	}

	// BHP is not an ISO 4217 code but the API list carries it, so it is accepted as-is.
	defcurrencies!(
		USD, GBP, EUR, JPY, BGN, CZK, DKK, HUF, PLN, RON,
		SEK, CHF, ISK, NOK, HRK, RUB, TRY, AUD, BRL, CAD,
		CNY, HKD, IDR, ILS, INR, KRW, MXN, MYR, NZD, BHP,
		SGD, THB, ZAR,
	);
}

/// The default base currency of the API.
pub const DEFAULT_BASE: &str = list::EUR;

/// Gets the supported currency codes.
#[inline] pub fn supported() -> &'static [&'static str] { &list::ARRAY }

/// Gets the supported currency codes joined by `delimiter`.
pub fn supported_joined(delimiter: &str) -> String { list::ARRAY.join(delimiter) }

/// Checks that `code` is one of the [supported currencies](list::ARRAY).
///
/// The comparison is exact: `usd` is not `USD`.
pub fn validate_currency(code: &str) -> Result<(), UnsupportedCurrency> {
	if list::ARRAY.iter().any(|&supported| supported == code) {
		Ok(())
	} else {
		Err(UnsupportedCurrency { code: code.to_owned() })
	}
}
