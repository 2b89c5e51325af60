use clap::{ArgAction, Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "catview", bin_name = "catview", version)]
#[command(about = "Browse, filter and edit a remote product catalog", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// More log output on stderr (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Initial filter values. Empty or omitted means no constraint.
#[derive(Args, Debug, Default, Clone)]
pub struct FilterArgs {
    /// Only products of this brand (exact match)
    #[arg(long)]
    pub brand: Option<String>,

    /// Only products in this category (exact match)
    #[arg(long)]
    pub category: Option<String>,

    /// Maximum price
    #[arg(long, visible_alias = "max-price")]
    pub price: Option<String>,

    /// Minimum rating
    #[arg(long, visible_alias = "min-rating")]
    pub rating: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch the catalog and print the filtered table
    #[command(alias = "ls")]
    List(FilterArgs),

    /// Print the distinct values of a field (brand or category)
    #[command(alias = "opts")]
    Options {
        /// Field name
        field: String,
    },

    /// Interactive session: delete, rename and filter until you quit
    #[command(alias = "sh")]
    Shell(FilterArgs),

    /// Print the cached snapshot of the last fetch
    Cached {
        /// Wait this long before reading the cache
        #[arg(long, default_value_t = 0)]
        delay_ms: u64,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (endpoint, timeout-secs, cache-enabled, cache-ttl-secs)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
