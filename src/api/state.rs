//! Application state for the Payroll Liquidation Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::{PayrollRules, RulesLoader};

/// Shared application state.
///
/// Contains resources that are shared across all request handlers,
/// such as the loaded jurisdiction rules.
#[derive(Clone)]
pub struct AppState {
    /// The loaded jurisdiction rules.
    rules: Arc<RulesLoader>,
}

impl AppState {
    /// Creates a new application state with the given rules loader.
    pub fn new(rules: RulesLoader) -> Self {
        Self {
            rules: Arc::new(rules),
        }
    }

    /// Returns a reference to the loaded jurisdiction rules.
    pub fn rules(&self) -> &PayrollRules {
        self.rules.rules()
    }
}
