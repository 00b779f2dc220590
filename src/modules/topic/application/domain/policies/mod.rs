mod ownership_guard;

pub use ownership_guard::{ensure_topic_access, TopicAccessDenied};
