//! # API Facade
//!
//! The API layer is a **thin facade** over the view orchestrator, the product
//! service and the command functions. Every UI (the CLI table, the
//! interactive shell) goes through it.
//!
//! It dispatches, turns outcomes into [`CmdMessage`]s and returns
//! [`CmdResult`] values. It never prints.
//!
//! `CatalogApi<S, C>` is generic over the product source and the snapshot
//! cache:
//! - Production: `CatalogApi<HttpSource, FileCache>` (or `FileSource` offline)
//! - Testing: `CatalogApi<StaticSource, MemoryCache>`

use crate::cache::SnapshotCache;
use crate::commands;
use crate::error::Result;
use crate::model::{FilterField, ProductId};
use crate::source::{ProductService, ProductSource};
use crate::view::{Catalog, LoadState};
use std::time::Duration;

pub struct CatalogApi<S: ProductSource, C: SnapshotCache> {
    service: ProductService<S, C>,
    catalog: Catalog,
    paths: commands::CatviewPaths,
}

impl<S: ProductSource, C: SnapshotCache> CatalogApi<S, C> {
    pub fn new(service: ProductService<S, C>, paths: commands::CatviewPaths) -> Self {
        Self {
            service,
            catalog: Catalog::new(),
            paths,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn catalog_mut(&mut self) -> &mut Catalog {
        &mut self.catalog
    }

    pub fn service(&self) -> &ProductService<S, C> {
        &self.service
    }

    /// Fetches the product list into the session. A failed fetch is not an
    /// error here: the view moves to `Failed` and the result carries a warning.
    pub fn load(&mut self) -> CmdResult {
        let ticket = self.catalog.begin_load();
        let fetched = self.service.fetch();
        self.catalog.finish_load(ticket, fetched);

        let mut result = self.rows();
        if let LoadState::Failed(reason) = self.catalog.state().load_state() {
            result.add_message(CmdMessage::warning(format!(
                "Could not load products: {}",
                reason
            )));
        }
        result
    }

    /// The current rows and criteria.
    pub fn rows(&self) -> CmdResult {
        let state = self.catalog.state();
        let mut result = CmdResult::default()
            .with_listed_products(state.rows().to_vec())
            .with_criteria(state.criteria().clone());
        if let Some(e) = state.filter_error() {
            result.add_message(CmdMessage::error(e.to_string()));
        }
        result
    }

    pub fn delete(&mut self, id: ProductId) -> CmdResult {
        let outcome = self.catalog.delete(id);
        let mut result = self.rows();
        if outcome == commands::Outcome::Applied {
            result.add_message(CmdMessage::success(format!("Product {} deleted", id)));
        }
        result
    }

    pub fn edit_title(&mut self, id: ProductId, text: &str) -> CmdResult {
        let outcome = self.catalog.edit_title(id, text);
        let mut result = self.rows();
        if outcome == commands::Outcome::Applied {
            result.add_message(CmdMessage::success(format!("Product {} renamed", id)));
        }
        result
    }

    pub fn set_filter(&mut self, field: FilterField, value: &str) -> CmdResult {
        self.catalog.set_filter(field, value);
        self.rows()
    }

    pub fn reset_filters(&mut self) -> CmdResult {
        self.catalog.reset_filters();
        self.rows()
    }

    pub fn options(&self, field: FilterField) -> Result<CmdResult> {
        let values = self.catalog.state().options(field)?;
        Ok(CmdResult::default().with_options(values))
    }

    /// Reads the last snapshot after `delay`, without touching the session.
    pub fn cached(&self, delay: Duration) -> Result<CmdResult> {
        let snapshot = self.service.read_cached_snapshot(delay)?;
        let age = snapshot.age().to_std().unwrap_or_default();
        let mut result = CmdResult::default().with_listed_products(snapshot.products);
        result.add_message(CmdMessage::info(format!(
            "Snapshot saved {}",
            timeago::Formatter::new().convert(age)
        )));
        Ok(result)
    }

    pub fn config(&self, action: ConfigAction) -> Result<CmdResult> {
        commands::config::run(&self.paths, action)
    }

    pub fn paths(&self) -> &commands::CatviewPaths {
        &self.paths
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CatviewPaths, CmdMessage, CmdResult, MessageLevel, Outcome};
