use clap::Parser;
use exchangeratesapi::{currency, Client, Query};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
pub struct Cli {
	/// Base currency.
	#[clap(long)]
	base: Option<String>,
	/// Date, or start of the range (YYYY-MM-DD).
	#[clap(long)]
	from: Option<String>,
	/// End of the range (YYYY-MM-DD).
	#[clap(long)]
	to: Option<String>,
	/// Log rejected parameters.
	#[clap(long)]
	debug: bool,
	/// List the supported currencies and exit.
	#[clap(long)]
	list: bool,
	/// Target currencies.
	currencies: Vec<String>,
}

fn main() {
	tracing_subscriber::fmt()
		.with_env_filter(EnvFilter::from_default_env())
		.init();
	let cli = Cli::parse();

	if cli.list {
		println!("{}", currency::supported_joined(" "));
		return;
	}

	let mut query = Query::new();
	query.debug(cli.debug);
	if let Some(base) = &cli.base { query.set_base_currency(base); }
	if let Some(from) = &cli.from { query.add_date_from(from); }
	if let Some(to) = &cli.to { query.add_date_to(to); }
	for currency in &cli.currencies { query.add_target_currency(currency); }

	eprintln!("GET {}", query.url());
	match Client::new().fetch(&query) {
		Ok(body) => println!("{body}"),
		Err(error) => {
			eprintln!("{error}");
			std::process::exit(1);
		}
	}
}
