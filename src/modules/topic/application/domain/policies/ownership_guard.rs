use crate::auth::application::domain::entities::Requester;
use crate::topic::application::domain::entities::Topic;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("Requester may not access this topic")]
pub struct TopicAccessDenied;

/// The owner and any superuser may act on a topic. Everyone else, guests
/// included, is denied.
pub fn ensure_topic_access(requester: &Requester, topic: &Topic) -> Result<(), TopicAccessDenied> {
    match requester {
        Requester::Account {
            is_superuser: true, ..
        } => Ok(()),
        Requester::Account { user_id, .. } if *user_id == topic.owner => Ok(()),
        _ => Err(TopicAccessDenied),
    }
}
