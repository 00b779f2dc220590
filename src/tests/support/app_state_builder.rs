use std::sync::Arc;

use actix_web::web;

use crate::auth::application::ports::outgoing::{PasswordHasher, TokenProvider};
use crate::auth::application::use_cases::{
    login_user::{ILoginUserUseCase, LoginUserUseCase},
    register_user::RegisterUserUseCase,
};
use crate::entry::application::entry_use_cases::EntryUseCases;
use crate::entry::application::services::{CreateEntryService, EditEntryService};
use crate::tests::support::in_memory::InMemoryStore;
use crate::tests::support::stubs::{FakePasswordHasher, FakeTokenProvider};
use crate::topic::application::ports::incoming::use_cases::GetTopicsUseCase;
use crate::topic::application::services::{CreateTopicService, GetTopicService, GetTopicsService};
use crate::topic::application::topic_use_cases::TopicUseCases;
use crate::AppState;

/// Builds an `AppState` whose use cases are the real services running over
/// an `InMemoryStore`. Individual use cases can be swapped for test doubles.
#[derive(Default)]
pub struct TestAppStateBuilder {
    store: InMemoryStore,
    login_user: Option<Arc<dyn ILoginUserUseCase + Send + Sync>>,
    get_topics: Option<Arc<dyn GetTopicsUseCase + Send + Sync>>,
}

impl TestAppStateBuilder {
    pub fn with_store(store: InMemoryStore) -> Self {
        Self {
            store,
            ..Self::default()
        }
    }

    pub fn with_login_user(mut self, uc: impl ILoginUserUseCase + Send + Sync + 'static) -> Self {
        self.login_user = Some(Arc::new(uc));
        self
    }

    pub fn with_get_topics(mut self, uc: impl GetTopicsUseCase + Send + Sync + 'static) -> Self {
        self.get_topics = Some(Arc::new(uc));
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        let store = self.store;
        let hasher: Arc<dyn PasswordHasher + Send + Sync> = Arc::new(FakePasswordHasher);
        let tokens: Arc<dyn TokenProvider + Send + Sync> = Arc::new(FakeTokenProvider);

        web::Data::new(AppState {
            register_user_use_case: Arc::new(RegisterUserUseCase::new(
                store.clone(),
                store.clone(),
                Arc::clone(&hasher),
                Arc::clone(&tokens),
            )),
            login_user_use_case: self.login_user.unwrap_or_else(|| {
                Arc::new(LoginUserUseCase::new(
                    store.clone(),
                    Arc::clone(&hasher),
                    Arc::clone(&tokens),
                ))
            }),
            topic: TopicUseCases {
                create: Arc::new(CreateTopicService::new(store.clone())),
                get_list: self
                    .get_topics
                    .unwrap_or_else(|| Arc::new(GetTopicsService::new(store.clone()))),
                get_single: Arc::new(GetTopicService::new(store.clone(), store.clone())),
            },
            entry: EntryUseCases {
                create: Arc::new(CreateEntryService::new(store.clone(), store.clone())),
                edit: Arc::new(EditEntryService::new(store.clone(), store.clone(), store)),
            },
        })
    }
}
