use std::sync::Arc;

use deptest_core::identity::{Clock, IdGenerator, SystemClock, Timestamp, UuidGenerator};
use deptest_core::ordering::order_for_listing;
use deptest_core::resources::{
    CreatePostRequest, CreateUserRequest, Post, PostListing, User, UserListing,
};
use deptest_core::store::{Record, ResourceStore};
use deptest_core::transform::{
    CommonMarkRenderer, Doubler, HandlebarsEngine, Hasher, HmacTokenSigner, JsonSerializer,
    MarkdownRenderer, Memoizer, PercentDecoder, RandomShuffler, Serializer, Sha256Hasher,
    Shuffler, TemplateEngine, TokenSigner, UriDecoder, UrlParser, WhatwgUrlParser,
};
use deptest_core::validation::ValidationError;
use parking_lot::Mutex;

use super::external::{ExternalSource, HttpSource};
use crate::prelude::*;

pub type SharedContext = Arc<AppContext>;

/// Settings the context is built from
#[derive(Debug, Clone)]
pub struct ContextConfig {
    pub jwt_secret: String,
    pub external_url: String,
}

/// One implementation per transformation endpoint
#[derive(Clone)]
pub struct Collaborators {
    pub hasher: Arc<dyn Hasher>,
    pub markdown: Arc<dyn MarkdownRenderer>,
    pub template: Arc<dyn TemplateEngine>,
    pub serializer: Arc<dyn Serializer>,
    pub tokens: Arc<dyn TokenSigner>,
    pub url_parser: Arc<dyn UrlParser>,
    pub decoder: Arc<dyn UriDecoder>,
    pub shuffler: Arc<dyn Shuffler>,
    pub memo: Arc<dyn Memoizer<i64, i64>>,
}

impl Collaborators {
    pub fn new(jwt_secret: &str) -> Self {
        Self {
            hasher: Arc::new(Sha256Hasher),
            markdown: Arc::new(CommonMarkRenderer),
            template: Arc::new(HandlebarsEngine::new()),
            serializer: Arc::new(JsonSerializer),
            tokens: Arc::new(HmacTokenSigner::new(jwt_secret)),
            url_parser: Arc::new(WhatwgUrlParser),
            decoder: Arc::new(PercentDecoder),
            shuffler: Arc::new(RandomShuffler),
            memo: Arc::new(Doubler::new()),
        }
    }
}

/// Process-wide state: the two collections plus everything handlers delegate to.
///
/// Each store sits behind its own mutex. Id, timestamp and insert happen under
/// that lock so ids stay unique and `createdAt` follows insertion order.
pub struct AppContext {
    users: Mutex<ResourceStore<User>>,
    posts: Mutex<ResourceStore<Post>>,
    ids: Arc<dyn IdGenerator>,
    clock: Arc<dyn Clock>,
    pub collaborators: Collaborators,
    pub external: Arc<dyn ExternalSource>,
}

impl AppContext {
    pub fn new(config: &ContextConfig) -> Self {
        Self::with_parts(
            Collaborators::new(&config.jwt_secret),
            Arc::new(HttpSource::new(&config.external_url)),
        )
    }

    pub fn with_parts(collaborators: Collaborators, external: Arc<dyn ExternalSource>) -> Self {
        Self {
            users: Mutex::new(ResourceStore::new()),
            posts: Mutex::new(ResourceStore::new()),
            ids: Arc::new(UuidGenerator),
            clock: Arc::new(SystemClock::new()),
            collaborators,
            external,
        }
    }

    #[cfg(test)]
    pub fn with_ids(mut self, ids: Arc<dyn IdGenerator>) -> Self {
        self.ids = ids;
        self
    }

    #[cfg(test)]
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn create_user(&self, request: CreateUserRequest) -> Result<User, ApiError> {
        self.create(&self.users, request, User::create)
    }

    pub fn get_user(&self, id: &str) -> Result<User, ApiError> {
        self.users
            .lock()
            .get_by_id(id)
            .ok_or_else(|| ApiError::NotFound("User not found.".to_string()))
    }

    pub fn list_users(&self) -> UserListing {
        let users = order_for_listing(self.users.lock().list_all());
        UserListing {
            total: users.len(),
            users,
        }
    }

    pub fn create_post(&self, request: CreatePostRequest) -> Result<Post, ApiError> {
        self.create(&self.posts, request, Post::create)
    }

    pub fn get_post(&self, id: &str) -> Result<Post, ApiError> {
        self.posts
            .lock()
            .get_by_id(id)
            .ok_or_else(|| ApiError::NotFound("Post not found.".to_string()))
    }

    pub fn list_posts(&self) -> PostListing {
        let posts = order_for_listing(self.posts.lock().list_all());
        PostListing {
            total: posts.len(),
            posts,
        }
    }

    fn create<T, P, F>(
        &self,
        store: &Mutex<ResourceStore<T>>,
        request: P,
        build: F,
    ) -> Result<T, ApiError>
    where
        T: Record,
        F: FnOnce(P, String, Timestamp) -> Result<T, ValidationError>,
    {
        let mut store = store.lock();
        let record = build(request, self.ids.generate(), self.clock.now())?;

        Ok(store.insert(record)?)
    }
}
