pub mod api;
pub mod form;
