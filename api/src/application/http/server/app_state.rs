use std::sync::Arc;

use dietwatch_core::application::DietwatchService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: DietwatchService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: DietwatchService) -> Self {
        Self { args, service }
    }
}
