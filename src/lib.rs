pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod service;

use service::CodeService;
use std::{collections::HashSet, sync::Arc};

#[derive(Clone)]
pub struct AppState {
    pub codes: Arc<dyn CodeService>,
    pub tokens: Arc<HashSet<String>>,
}

impl AppState {
    pub fn new(codes: Arc<dyn CodeService>, tokens: impl IntoIterator<Item = String>) -> Self {
        Self {
            codes,
            tokens: Arc::new(tokens.into_iter().collect()),
        }
    }
}
