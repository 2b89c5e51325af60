//! # CLI Layer
//!
//! One possible UI client for catview. This is the only code that touches
//! stdout/stderr, reads the environment, or decides exit codes.
//!
//! - `run()`: parse arguments, set up logging and context, dispatch
//! - `init_context()`: resolve paths and config, pick the product source
//! - `handle_*()`: call the API and print the result
//!
//! Environment:
//! - `CATVIEW_HOME`: keep config and cache under this directory
//! - `CATVIEW_SOURCE_JSON`: read products from this file instead of the endpoint
//! - `CATVIEW_LOG`: tracing filter directive, overrides `-v`

use super::args::{Cli, Commands, FilterArgs};
use super::print::{print_config, print_messages, print_options, print_table};
use super::{logging, shell};
use catview::api::{CatalogApi, CatviewPaths, ConfigAction};
use catview::cache::fs::FileCache;
use catview::config::CatviewConfig;
use catview::error::{CatviewError, Result};
use catview::model::FilterField;
use catview::source::file::FileSource;
use catview::source::http::HttpSource;
use catview::source::{ProductService, ProductSource};
use clap::Parser;
use directories::ProjectDirs;
use std::io::IsTerminal;
use std::time::Duration;

const HOME_ENV: &str = "CATVIEW_HOME";
const SOURCE_JSON_ENV: &str = "CATVIEW_SOURCE_JSON";

type AppApi = CatalogApi<Box<dyn ProductSource>, FileCache>;

struct AppContext {
    api: AppApi,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let mut ctx = init_context()?;

    match cli.command {
        Some(Commands::List(filters)) => handle_list(&mut ctx, filters),
        Some(Commands::Options { field }) => handle_options(&mut ctx, &field),
        Some(Commands::Shell(filters)) => handle_shell(&mut ctx, filters),
        Some(Commands::Cached { delay_ms }) => handle_cached(&ctx, delay_ms),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        None => handle_list(&mut ctx, FilterArgs::default()),
    }
}

fn resolve_paths() -> Result<CatviewPaths> {
    if let Some(home) = std::env::var_os(HOME_ENV) {
        return Ok(CatviewPaths::under(home));
    }
    let dirs = ProjectDirs::from("com", "catview", "catview")
        .ok_or_else(|| CatviewError::Config("Could not determine config dir".to_string()))?;
    Ok(CatviewPaths {
        config: dirs.config_dir().to_path_buf(),
        cache: dirs.cache_dir().to_path_buf(),
    })
}

fn init_context() -> Result<AppContext> {
    let paths = resolve_paths()?;
    let config = CatviewConfig::load(&paths.config).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "unreadable config, using defaults");
        CatviewConfig::default()
    });

    let source: Box<dyn ProductSource> = match std::env::var_os(SOURCE_JSON_ENV) {
        Some(path) => Box::new(FileSource::new(path)),
        None => Box::new(HttpSource::new(
            config.endpoint.clone(),
            Duration::from_secs(config.timeout_secs),
        )),
    };

    let service = ProductService::new(source, FileCache::new(&paths.cache))
        .with_cache_enabled(config.cache_enabled)
        .with_cache_ttl(config.cache_ttl_secs.map(Duration::from_secs));

    Ok(AppContext {
        api: CatalogApi::new(service, paths),
    })
}

fn apply_filters(ctx: &mut AppContext, filters: FilterArgs) {
    let pairs = [
        (FilterField::Brand, filters.brand),
        (FilterField::Category, filters.category),
        (FilterField::Price, filters.price),
        (FilterField::Rating, filters.rating),
    ];
    for (field, value) in pairs {
        if let Some(value) = value {
            ctx.api.set_filter(field, &value);
        }
    }
}

fn handle_list(ctx: &mut AppContext, filters: FilterArgs) -> Result<()> {
    let loaded = ctx.api.load();
    apply_filters(ctx, filters);
    let result = ctx.api.rows();
    print_table(&result.listed_products);
    print_messages(&loaded.messages);
    print_messages(&result.messages);
    Ok(())
}

fn handle_options(ctx: &mut AppContext, field: &str) -> Result<()> {
    let field: FilterField = field.parse()?;
    let loaded = ctx.api.load();
    let result = ctx.api.options(field)?;
    print_options(&result.options);
    print_messages(&loaded.messages);
    Ok(())
}

fn handle_shell(ctx: &mut AppContext, filters: FilterArgs) -> Result<()> {
    let loaded = ctx.api.load();
    print_messages(&loaded.messages);
    apply_filters(ctx, filters);

    let stdin = std::io::stdin();
    let interactive = stdin.is_terminal();
    if interactive {
        println!("Type 'help' for commands.");
    }
    let mut stdout = std::io::stdout();
    shell::run_session(&mut ctx.api, stdin.lock(), &mut stdout, interactive)
}

fn handle_cached(ctx: &AppContext, delay_ms: u64) -> Result<()> {
    let result = ctx.api.cached(Duration::from_millis(delay_ms))?;
    print_table(&result.listed_products);
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let result = ctx.api.config(action)?;
    if result.messages.is_empty() {
        if let Some(config) = &result.config {
            print_config(config);
        }
    }
    print_messages(&result.messages);
    Ok(())
}
