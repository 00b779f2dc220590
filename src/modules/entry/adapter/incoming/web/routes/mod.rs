pub mod create_entry;
pub mod edit_entry_form;
pub mod new_entry_form;
pub mod update_entry;

pub use create_entry::create_entry_handler;
pub use edit_entry_form::{edit_entry_form_handler, EditEntryView};
pub use new_entry_form::{new_entry_form_handler, EntryFormView, NewEntryView};
pub use update_entry::update_entry_handler;
