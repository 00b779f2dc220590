use std::sync::Arc;

use crate::entry::application::ports::incoming::use_cases::{CreateEntryUseCase, EditEntryUseCase};

#[derive(Clone)]
pub struct EntryUseCases {
    pub create: Arc<dyn CreateEntryUseCase + Send + Sync>,
    pub edit: Arc<dyn EditEntryUseCase + Send + Sync>,
}
