pub mod entities;
pub mod entry_form;
