use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

use crate::auth::application::domain::entities::{Account, UserId};
use crate::auth::application::ports::outgoing::{
    CreateAccountData, UserQuery, UserQueryError, UserRepository, UserRepositoryError,
};
use crate::entry::application::domain::entities::Entry;
use crate::entry::application::ports::outgoing::{
    CreateEntryData, EntryQuery, EntryQueryError, EntryRepository, EntryRepositoryError,
};
use crate::topic::application::domain::entities::Topic;
use crate::topic::application::ports::outgoing::{
    CreateTopicData, TopicQuery, TopicQueryError, TopicRepository, TopicRepositoryError,
};

#[derive(Default)]
struct Tables {
    accounts: Vec<Account>,
    topics: Vec<Topic>,
    entries: Vec<Entry>,
    ticks: i64,
}

impl Tables {
    /// Every write gets a distinct, strictly later timestamp.
    fn next_timestamp(&mut self) -> DateTime<Utc> {
        self.ticks += 1;
        DateTime::<Utc>::UNIX_EPOCH + Duration::days(20_000) + Duration::seconds(self.ticks)
    }
}

/// Accounts, topics and entries held in memory, behind every outgoing port.
/// Clones share the same tables.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    tables: Arc<Mutex<Tables>>,
}

impl InMemoryStore {
    fn lock(&self) -> MutexGuard<'_, Tables> {
        self.tables.lock().unwrap()
    }

    pub fn insert_account(&self, username: &str, password_hash: &str, is_superuser: bool) -> Account {
        let mut tables = self.lock();
        let account = Account {
            id: Uuid::new_v4(),
            username: username.to_string(),
            password_hash: password_hash.to_string(),
            is_superuser,
            date_joined: tables.next_timestamp(),
        };
        tables.accounts.push(account.clone());
        account
    }

    pub fn account_by_username(&self, username: &str) -> Option<Account> {
        self.lock()
            .accounts
            .iter()
            .find(|a| a.username == username)
            .cloned()
    }

    pub fn account_count(&self) -> usize {
        self.lock().accounts.len()
    }

    pub fn insert_topic(&self, owner: UserId, text: &str) -> Topic {
        let mut tables = self.lock();
        let topic = Topic {
            id: Uuid::new_v4(),
            owner,
            text: text.to_string(),
            date_added: tables.next_timestamp(),
        };
        tables.topics.push(topic.clone());
        topic
    }

    pub fn topic_count(&self) -> usize {
        self.lock().topics.len()
    }

    pub fn topics_of(&self, owner: UserId) -> Vec<Topic> {
        self.lock()
            .topics
            .iter()
            .filter(|t| t.owner == owner)
            .cloned()
            .collect()
    }

    pub fn insert_entry(&self, topic_id: Uuid, text: &str) -> Entry {
        let mut tables = self.lock();
        let entry = Entry {
            id: Uuid::new_v4(),
            topic_id,
            text: text.to_string(),
            date_added: tables.next_timestamp(),
        };
        tables.entries.push(entry.clone());
        entry
    }

    pub fn entry_count_for(&self, topic_id: Uuid) -> usize {
        self.lock()
            .entries
            .iter()
            .filter(|e| e.topic_id == topic_id)
            .count()
    }

    pub fn entry(&self, entry_id: Uuid) -> Option<Entry> {
        self.lock().entries.iter().find(|e| e.id == entry_id).cloned()
    }
}

#[async_trait]
impl UserQuery for InMemoryStore {
    async fn find_by_id(&self, user_id: Uuid) -> Result<Option<Account>, UserQueryError> {
        Ok(self.lock().accounts.iter().find(|a| a.id == user_id).cloned())
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<Account>, UserQueryError> {
        Ok(self.account_by_username(username))
    }
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn create_account(&self, data: CreateAccountData) -> Result<Account, UserRepositoryError> {
        if self.account_by_username(&data.username).is_some() {
            return Err(UserRepositoryError::UserAlreadyExists);
        }
        Ok(self.insert_account(&data.username, &data.password_hash, data.is_superuser))
    }

    async fn promote_to_superuser(
        &self,
        user_id: Uuid,
        password_hash: String,
    ) -> Result<Account, UserRepositoryError> {
        let mut tables = self.lock();
        let account = tables
            .accounts
            .iter_mut()
            .find(|a| a.id == user_id)
            .ok_or(UserRepositoryError::UserNotFound)?;

        account.is_superuser = true;
        account.password_hash = password_hash;
        Ok(account.clone())
    }
}

#[async_trait]
impl TopicQuery for InMemoryStore {
    async fn list_all(&self) -> Result<Vec<Topic>, TopicQueryError> {
        let mut topics = self.lock().topics.clone();
        topics.sort_by_key(|t| t.date_added);
        Ok(topics)
    }

    async fn list_by_owner(&self, owner: UserId) -> Result<Vec<Topic>, TopicQueryError> {
        let mut topics = self.topics_of(owner);
        topics.sort_by_key(|t| t.date_added);
        Ok(topics)
    }

    async fn find_by_id(&self, topic_id: Uuid) -> Result<Option<Topic>, TopicQueryError> {
        Ok(self.lock().topics.iter().find(|t| t.id == topic_id).cloned())
    }
}

#[async_trait]
impl TopicRepository for InMemoryStore {
    async fn create_topic(&self, data: CreateTopicData) -> Result<Topic, TopicRepositoryError> {
        Ok(self.insert_topic(data.owner, &data.text))
    }
}

#[async_trait]
impl EntryQuery for InMemoryStore {
    async fn entries_for_topic(&self, topic_id: Uuid) -> Result<Vec<Entry>, EntryQueryError> {
        let mut entries: Vec<Entry> = self
            .lock()
            .entries
            .iter()
            .filter(|e| e.topic_id == topic_id)
            .cloned()
            .collect();
        entries.sort_by(|a, b| b.date_added.cmp(&a.date_added));
        Ok(entries)
    }

    async fn find_by_id(&self, entry_id: Uuid) -> Result<Option<Entry>, EntryQueryError> {
        Ok(self.entry(entry_id))
    }
}

#[async_trait]
impl EntryRepository for InMemoryStore {
    async fn create_entry(&self, data: CreateEntryData) -> Result<Entry, EntryRepositoryError> {
        Ok(self.insert_entry(data.topic_id, &data.text))
    }

    async fn update_text(
        &self,
        entry_id: Uuid,
        text: String,
    ) -> Result<Entry, EntryRepositoryError> {
        let mut tables = self.lock();
        let entry = tables
            .entries
            .iter_mut()
            .find(|e| e.id == entry_id)
            .ok_or(EntryRepositoryError::EntryNotFound)?;

        entry.text = text;
        Ok(entry.clone())
    }
}
