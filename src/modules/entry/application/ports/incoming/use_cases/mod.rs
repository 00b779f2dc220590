mod create_entry_use_case;
mod edit_entry_use_case;

pub use create_entry_use_case::{CreateEntryError, CreateEntryUseCase};
pub use edit_entry_use_case::{EditEntryError, EditEntryUseCase, EntryEditContext};
