use crate::config::CatviewConfig;
use crate::model::{FilterCriteria, Product};
use std::path::PathBuf;

pub mod config;
pub mod delete;
pub mod filter;
pub mod options;
pub mod update;

#[derive(Debug, Clone)]
pub struct CatviewPaths {
    pub config: PathBuf,
    pub cache: PathBuf,
}

impl CatviewPaths {
    /// Lays out config and cache under a single root, used for `CATVIEW_HOME`.
    pub fn under(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        Self {
            config: root.join("config"),
            cache: root.join("cache"),
        }
    }
}

/// Result of a mutation against the canonical list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Applied,
    NotFound,
    /// The session was torn down; nothing changed.
    Ignored,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub listed_products: Vec<Product>,
    pub options: Vec<String>,
    pub criteria: Option<FilterCriteria>,
    pub config: Option<CatviewConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_products(mut self, products: Vec<Product>) -> Self {
        self.listed_products = products;
        self
    }

    pub fn with_options(mut self, options: Vec<String>) -> Self {
        self.options = options;
        self
    }

    pub fn with_criteria(mut self, criteria: FilterCriteria) -> Self {
        self.criteria = Some(criteria);
        self
    }

    pub fn with_config(mut self, config: CatviewConfig) -> Self {
        self.config = Some(config);
        self
    }
}
