use std::net::SocketAddr;
use std::sync::Arc;

use chrono::Utc;
use ::common::YouTubeResolver;
use reqwest::Client;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use serde_json::{Value, json};

use server::config::{
    AppConfig, AuthConfig, CorsConfig, DatabaseConfig, LedgerConfig, ServerConfig,
};
use server::entity::{submission, user};
use server::ledger::{Ledger, Principal};
use server::state::AppState;

pub const PASSWORD: &str = "pass1234";

pub mod routes {
    pub const REGISTER: &str = "/api/v1/auth/register";
    pub const LOGIN: &str = "/api/v1/auth/login";
    pub const ME: &str = "/api/v1/auth/me";

    pub const CATEGORIES: &str = "/api/v1/catalog/categories";
    pub const COUNTRIES: &str = "/api/v1/catalog/countries";

    pub fn country(code: &str) -> String {
        format!("/api/v1/catalog/countries/{code}")
    }

    pub fn counts(code: &str) -> String {
        format!("/api/v1/countries/{code}/counts")
    }

    pub fn videos(code: &str, category: &str) -> String {
        format!("/api/v1/countries/{code}/videos/{category}")
    }

    pub fn random_video(code: &str, category: &str) -> String {
        format!("/api/v1/countries/{code}/videos/{category}/random")
    }

    pub const SUBMISSIONS: &str = "/api/v1/submissions";
    pub const MY_SUBMISSIONS: &str = "/api/v1/submissions/mine";

    pub fn slot(code: &str, category: &str) -> String {
        format!("/api/v1/submissions/slot?country={code}&category={category}")
    }

    pub fn submission(id: i32) -> String {
        format!("/api/v1/submissions/{id}")
    }

    pub fn flags(submission_id: i32) -> String {
        format!("/api/v1/submissions/{submission_id}/flags")
    }

    pub fn my_flag(submission_id: i32) -> String {
        format!("/api/v1/submissions/{submission_id}/flags/mine")
    }

    pub const MODERATION_QUEUE: &str = "/api/v1/moderation/submissions";
    pub const MODERATION_FLAGS: &str = "/api/v1/moderation/flags";

    pub fn approve(id: i32) -> String {
        format!("/api/v1/moderation/submissions/{id}/approve")
    }

    pub fn reject(id: i32) -> String {
        format!("/api/v1/moderation/submissions/{id}/reject")
    }

    pub fn dismiss_flag(id: i32) -> String {
        format!("/api/v1/moderation/flags/{id}")
    }
}

/// A running test server backed by its own in-memory SQLite database.
pub struct TestApp {
    pub addr: SocketAddr,
    pub client: Client,
    pub db: DatabaseConnection,
    pub config: Arc<AppConfig>,
}

/// Parsed HTTP response for test assertions.
pub struct TestResponse {
    pub status: u16,
    /// Raw response body as text.
    pub text: String,
    /// Parsed JSON body, or `Null` if the response is not valid JSON.
    pub body: Value,
}

impl TestApp {
    pub async fn spawn() -> Self {
        // A single connection keeps the in-memory database alive and shared.
        let database = DatabaseConfig {
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
            min_connections: 1,
            connect_timeout: None,
            idle_timeout: None,
            sqlx_logging: false,
        };

        let db = server::database::init_db(&database)
            .await
            .expect("Failed to initialize test database");
        server::seed::seed_role_permissions(&db)
            .await
            .expect("Failed to seed roles");
        server::seed::ensure_indexes(&db)
            .await
            .expect("Failed to create indexes");

        let config = Arc::new(AppConfig {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 0,
                cors: CorsConfig {
                    allow_origins: vec![],
                    max_age: 3600,
                },
            },
            database,
            auth: AuthConfig {
                jwt_secret: "test-secret-for-integration-tests".to_string(),
                token_ttl_hours: 1,
            },
            ledger: LedgerConfig::default(),
        });

        let state = AppState {
            db: db.clone(),
            config: config.clone(),
            resolver: Arc::new(YouTubeResolver),
        };

        let app = server::build_router(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind to random port");
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            addr,
            client: Client::new(),
            db,
            config,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// Ledger over the test database, for assertions below the HTTP layer.
    pub fn ledger<'a>(&'a self, resolver: &'a YouTubeResolver) -> Ledger<'a, DatabaseConnection> {
        Ledger::new(&self.db, resolver, &self.config.ledger)
    }

    pub async fn post_with_token(&self, path: &str, body: &Value, token: &str) -> TestResponse {
        let res = self
            .client
            .post(self.url(path))
            .header("Authorization", format!("Bearer {token}"))
            .json(body)
            .send()
            .await
            .expect("Failed to send POST request");

        TestResponse::from_response(res).await
    }

    pub async fn post_without_token(&self, path: &str, body: &Value) -> TestResponse {
        let res = self
            .client
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .expect("Failed to send POST request");

        TestResponse::from_response(res).await
    }

    pub async fn get_with_token(&self, path: &str, token: &str) -> TestResponse {
        let res = self
            .client
            .get(self.url(path))
            .header("Authorization", format!("Bearer {token}"))
            .send()
            .await
            .expect("Failed to send GET request");

        TestResponse::from_response(res).await
    }

    pub async fn get_without_token(&self, path: &str) -> TestResponse {
        let res = self
            .client
            .get(self.url(path))
            .send()
            .await
            .expect("Failed to send GET request");

        TestResponse::from_response(res).await
    }

    pub async fn patch_with_token(&self, path: &str, body: &Value, token: &str) -> TestResponse {
        let res = self
            .client
            .patch(self.url(path))
            .header("Authorization", format!("Bearer {token}"))
            .json(body)
            .send()
            .await
            .expect("Failed to send PATCH request");

        TestResponse::from_response(res).await
    }

    pub async fn delete_with_token(&self, path: &str, token: &str) -> TestResponse {
        let res = self
            .client
            .delete(self.url(path))
            .header("Authorization", format!("Bearer {token}"))
            .send()
            .await
            .expect("Failed to send DELETE request");

        TestResponse::from_response(res).await
    }

    /// Register a user and log in, returning the auth token.
    pub async fn create_authenticated_user(&self, email: &str) -> String {
        let body = json!({ "email": email, "password": PASSWORD });

        let reg = self.post_without_token(routes::REGISTER, &body).await;
        assert_eq!(reg.status, 201, "Registration failed: {}", reg.text);

        self.login(email).await
    }

    /// Register a user with a specific role, then log in and return the auth token.
    pub async fn create_user_with_role(&self, email: &str, role: &str) -> String {
        let body = json!({ "email": email, "password": PASSWORD });

        let reg = self.post_without_token(routes::REGISTER, &body).await;
        assert_eq!(reg.status, 201, "Registration failed: {}", reg.text);

        let db_user = user::Entity::find()
            .filter(user::Column::Email.eq(email))
            .one(&self.db)
            .await
            .expect("DB query failed")
            .expect("User not found after registration");

        let mut active: user::ActiveModel = db_user.into();
        active.role = Set(role.to_string());
        user::Entity::update(active)
            .exec(&self.db)
            .await
            .expect("Failed to update user role");

        self.login(email).await
    }

    async fn login(&self, email: &str) -> String {
        let body = json!({ "email": email, "password": PASSWORD });
        let res = self.post_without_token(routes::LOGIN, &body).await;
        assert_eq!(res.status, 200, "Login failed: {}", res.text);

        res.body["token"]
            .as_str()
            .expect("Login response should contain a token")
            .to_string()
    }

    /// Insert a user row directly and return it as a ledger principal.
    pub async fn insert_principal(&self, email: &str) -> Principal {
        let model = user::ActiveModel {
            email: Set(email.to_string()),
            password: Set("unused".to_string()),
            role: Set("member".to_string()),
            created_at: Set(Utc::now()),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .expect("Failed to insert user");

        Principal::new(model.id, model.email).expect("valid principal")
    }

    /// Submit a video over HTTP and return the new submission id.
    pub async fn submit(&self, token: &str, country: &str, category: &str, url: &str) -> i32 {
        let res = self
            .post_with_token(
                routes::SUBMISSIONS,
                &json!({
                    "country_code": country,
                    "category": category,
                    "source_url": url,
                }),
                token,
            )
            .await;
        assert_eq!(res.status, 201, "submit failed: {}", res.text);
        res.id()
    }

    /// Approve a submission as the given moderator.
    pub async fn approve(&self, moderator_token: &str, id: i32) {
        let res = self
            .post_with_token(&routes::approve(id), &json!({}), moderator_token)
            .await;
        assert_eq!(res.status, 200, "approve failed: {}", res.text);
    }

    /// Read a submission's status straight from the database.
    pub async fn stored_status(&self, id: i32) -> String {
        submission::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .expect("DB query failed")
            .expect("submission should exist")
            .status
            .to_string()
    }
}

impl TestResponse {
    pub async fn from_response(res: reqwest::Response) -> Self {
        let status = res.status().as_u16();
        let text = res.text().await.unwrap_or_default();
        let body = serde_json::from_str(&text).unwrap_or(Value::Null);
        Self { status, text, body }
    }

    pub fn id(&self) -> i32 {
        self.body["id"]
            .as_i64()
            .expect("response body should contain 'id'") as i32
    }
}
