pub mod entities;
pub mod registration_form;
