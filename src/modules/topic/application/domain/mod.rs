pub mod entities;
pub mod policies;
pub mod topic_form;
