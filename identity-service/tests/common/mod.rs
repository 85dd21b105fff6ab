use std::sync::Arc;
use std::sync::RwLock;

use async_trait::async_trait;
use auth::Authenticator;
use auth::PasswordHasher;
use auth::TokenConfig;
use chrono::Utc;
use identity_service::domain::authentication::service::AuthService;
use identity_service::domain::errors::AppError;
use identity_service::domain::user::models::User;
use identity_service::domain::user::models::UserId;
use identity_service::domain::user::ports::UserRepository;
use identity_service::inbound::http::router::create_router;

pub const TEST_EMAIL: &str = "jdoe@example.com";
pub const TEST_PASSWORD: &str = "pass_word!";

/// Test application that spawns a real server
pub struct TestApp {
    pub address: String,
    pub users: Arc<InMemoryUserRepository>,
    pub authenticator: Authenticator,
    pub api_client: reqwest::Client,
}

/// User store kept in memory for the lifetime of one test
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: RwLock<Vec<User>>,
}

impl InMemoryUserRepository {
    pub fn insert(&self, user: User) {
        self.users.write().unwrap().push(user);
    }

    pub fn remove(&self, id: &UserId) {
        self.users.write().unwrap().retain(|user| &user.id != id);
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        Ok(self
            .users
            .read()
            .unwrap()
            .iter()
            .find(|user| user.email == email)
            .cloned())
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, AppError> {
        Ok(self
            .users
            .read()
            .unwrap()
            .iter()
            .find(|user| &user.id == id)
            .cloned())
    }
}

pub fn test_user(id: i64, email: &str, password: &str) -> User {
    User {
        id: UserId::new(id).expect("Invalid user id"),
        user_name: "jdoe".to_string(),
        email: email.to_string(),
        first_name: "John".to_string(),
        last_name: "Doe".to_string(),
        status: true,
        role: "user".to_string(),
        password_hash: PasswordHasher::with_cost(4)
            .hash(password)
            .expect("Failed to hash password"),
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

impl TestApp {
    /// Spawn the application in a background task with one seeded user
    pub async fn spawn() -> Self {
        // Use random port (0 = OS assigns)
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let users = Arc::new(InMemoryUserRepository::default());
        users.insert(test_user(1, TEST_EMAIL, TEST_PASSWORD));

        let authenticator = Authenticator::with_password_hasher(
            TokenConfig::for_tests(),
            PasswordHasher::with_cost(4),
        );

        let auth_service = Arc::new(AuthService::new(
            Arc::clone(&users),
            authenticator.clone(),
        ));
        let router = create_router(auth_service);

        // Spawn server in background
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            users,
            authenticator,
            api_client: reqwest::Client::new(),
        }
    }

    /// Helper to make GET request
    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(&format!("{}{}", self.address, path))
    }

    /// Helper to make POST request
    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(&format!("{}{}", self.address, path))
    }

    /// Helper to make GET request with Bearer token
    pub fn get_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.get(path).bearer_auth(token)
    }
}
