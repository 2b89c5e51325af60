//! # View Orchestrator
//!
//! [`Catalog`] owns the session state: the canonical list, the active
//! criteria and the rows derived from them. Every trigger (load, delete,
//! edit, filter change, reset) ends in [`Catalog::recompute`], which rebuilds
//! the rows from the canonical list. The previous rows are never patched.
//!
//! ## Load lifecycle
//!
//! ```text
//! Loading ──ok──▶ Ready
//!    └────err───▶ Failed
//! ```
//!
//! A load is split into [`Catalog::begin_load`] and [`Catalog::finish_load`]
//! so that a result arriving after [`Catalog::teardown`], or after a newer
//! load started, is dropped instead of overwriting state.
//!
//! ## Observers
//!
//! Rendering surfaces register with [`Catalog::subscribe`] and receive the
//! [`ViewState`] after every recompute.

use crate::commands::{delete, filter, options, update, Outcome};
use crate::error::{CatviewError, Result};
use crate::model::{FilterCriteria, FilterField, Product, ProductId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    Ready,
    Failed(String),
}

/// Everything a rendering surface needs to draw the table.
#[derive(Debug)]
pub struct ViewState {
    load: LoadState,
    canonical: Vec<Product>,
    criteria: FilterCriteria,
    rows: Vec<Product>,
    filter_error: Option<CatviewError>,
}

impl ViewState {
    fn new() -> Self {
        Self {
            load: LoadState::Loading,
            canonical: Vec::new(),
            criteria: FilterCriteria::default(),
            rows: Vec::new(),
            filter_error: None,
        }
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load
    }

    pub fn canonical(&self) -> &[Product] {
        &self.canonical
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    /// The filtered view.
    pub fn rows(&self) -> &[Product] {
        &self.rows
    }

    /// Set when a numeric criterion could not be parsed (the rows are then empty).
    pub fn filter_error(&self) -> Option<&CatviewError> {
        self.filter_error.as_ref()
    }

    pub fn options(&self, field: FilterField) -> Result<Vec<String>> {
        options::distinct_sorted_values(&self.canonical, field)
    }
}

/// Ties a fetch result to the load that asked for it.
#[derive(Debug, PartialEq, Eq)]
#[must_use]
pub struct LoadTicket {
    generation: u64,
}

pub type Listener = Box<dyn FnMut(&ViewState)>;

pub struct Catalog {
    state: ViewState,
    generation: u64,
    torn_down: bool,
    listeners: Vec<Listener>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

impl Catalog {
    pub fn new() -> Self {
        Self {
            state: ViewState::new(),
            generation: 0,
            torn_down: false,
            listeners: Vec::new(),
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    pub fn subscribe(&mut self, listener: impl FnMut(&ViewState) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Marks a load as in flight. Any earlier ticket becomes stale.
    pub fn begin_load(&mut self) -> LoadTicket {
        self.generation += 1;
        self.state.load = LoadState::Loading;
        LoadTicket {
            generation: self.generation,
        }
    }

    /// Applies a fetch result. Returns `false` when the result was discarded.
    pub fn finish_load(&mut self, ticket: LoadTicket, result: Result<Vec<Product>>) -> bool {
        if self.torn_down || ticket.generation != self.generation {
            tracing::debug!(
                ticket = ticket.generation,
                current = self.generation,
                torn_down = self.torn_down,
                "discarding stale load result"
            );
            return false;
        }

        match result {
            Ok(products) => {
                tracing::debug!(count = products.len(), "catalog ready");
                self.state.canonical = products;
                self.state.load = LoadState::Ready;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to load products");
                self.state.canonical.clear();
                self.state.load = LoadState::Failed(e.to_string());
            }
        }
        self.recompute();
        true
    }

    /// Ends the session. Pending loads are dropped and listeners released.
    pub fn teardown(&mut self) {
        self.torn_down = true;
        self.listeners.clear();
    }

    fn ignoring_after_teardown(&self, trigger: &str) -> bool {
        if self.torn_down {
            tracing::debug!(trigger, "ignoring trigger after teardown");
        }
        self.torn_down
    }

    pub fn delete(&mut self, id: ProductId) -> Outcome {
        if self.ignoring_after_teardown("delete") {
            return Outcome::Ignored;
        }
        let (next, outcome) = delete::delete_by_id(&self.state.canonical, id);
        if outcome == Outcome::NotFound {
            tracing::debug!(id, "delete: no such product");
        }
        self.state.canonical = next;
        self.recompute();
        outcome
    }

    pub fn edit_title(&mut self, id: ProductId, text: &str) -> Outcome {
        if self.ignoring_after_teardown("edit") {
            return Outcome::Ignored;
        }
        let (next, outcome) = update::edit_title(&self.state.canonical, id, text);
        if outcome == Outcome::NotFound {
            tracing::debug!(id, "edit: no such product");
        }
        self.state.canonical = next;
        self.recompute();
        outcome
    }

    pub fn set_filter(&mut self, field: FilterField, value: impl Into<String>) {
        if self.ignoring_after_teardown("set_filter") {
            return;
        }
        self.state.criteria = self.state.criteria.with(field, value);
        self.recompute();
    }

    pub fn reset_filters(&mut self) {
        if self.ignoring_after_teardown("reset_filters") {
            return;
        }
        self.state.criteria = FilterCriteria::default();
        self.recompute();
    }

    /// Rebuilds the rows from the canonical list and current criteria, then notifies listeners.
    pub fn recompute(&mut self) {
        match filter::try_filter(&self.state.canonical, &self.state.criteria) {
            Ok(rows) => {
                self.state.rows = rows;
                self.state.filter_error = None;
            }
            Err(e) => {
                tracing::warn!(error = %e, "filter excludes all rows");
                self.state.rows = Vec::new();
                self.state.filter_error = Some(e);
            }
        }

        for listener in &mut self.listeners {
            listener(&self.state);
        }
    }
}
