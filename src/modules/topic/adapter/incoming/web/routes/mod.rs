pub mod create_topic;
pub mod get_topic;
pub mod get_topics;
pub mod new_topic_form;

pub use create_topic::{create_topic_handler, TopicFormView};
pub use get_topic::get_topic_handler;
pub use get_topics::get_topics_handler;
pub use new_topic_form::new_topic_form_handler;
