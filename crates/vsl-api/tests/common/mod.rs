use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use serde::Deserialize;
use tempfile::TempDir;
use tower::ServiceExt;
use vsl_api::{config::Environment, router, state::ApiState};

/// Test state builder: every build gets its own SQLite file in a temp directory
pub struct TestStateBuilder {
    seeded: bool,
    max_connections: u32,
}

impl TestStateBuilder {
    pub fn new() -> Self {
        Self {
            seeded: false,
            max_connections: 5,
        }
    }

    /// Load the demo dataset after applying the schema
    pub fn seeded(mut self) -> Self {
        self.seeded = true;
        self
    }

    pub async fn build(self) -> anyhow::Result<TestState> {
        let dir = tempfile::tempdir()?;
        let database_url = format!("sqlite://{}", dir.path().join("test.db").display());

        let pool = vsl_db::create_pool(&database_url, self.max_connections).await?;
        vsl_db::ensure_schema(&pool).await?;
        if self.seeded {
            vsl_db::seed::seed(&pool).await?;
        }

        Ok(TestState {
            state: ApiState {
                pool,
                environment: Environment::Development,
            },
            _dir: dir,
        })
    }
}

impl Default for TestStateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Built state. Keeps the temp directory alive as long as the state is used.
pub struct TestState {
    pub state: ApiState,
    _dir: TempDir,
}

impl TestState {
    pub fn pool(&self) -> &sqlx::SqlitePool {
        &self.state.pool
    }

    pub fn client(&self) -> TestClient {
        TestClient::new(router::router().with_state(self.state.clone()))
    }
}

/// Helper to make requests to the test app
pub struct TestClient {
    router: Router,
}

impl TestClient {
    pub fn new(router: Router) -> Self {
        Self { router }
    }

    /// Send a request and get the response
    pub async fn request(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Failed to execute request");

        let status = response.status();
        let body_bytes = response
            .into_body()
            .collect()
            .await
            .expect("Failed to read response body")
            .to_bytes();

        TestResponse {
            status,
            body: body_bytes.to_vec(),
        }
    }

    pub async fn get(&self, uri: &str) -> TestResponse {
        let request = Request::builder()
            .method("GET")
            .uri(uri)
            .body(Body::empty())
            .expect("Failed to build request");

        self.request(request).await
    }

    pub async fn delete(&self, uri: &str) -> TestResponse {
        let request = Request::builder()
            .method("DELETE")
            .uri(uri)
            .body(Body::empty())
            .expect("Failed to build request");

        self.request(request).await
    }

    pub async fn post_json<T: serde::Serialize>(&self, uri: &str, body: &T) -> TestResponse {
        self.send_json("POST", uri, body).await
    }

    pub async fn put_json<T: serde::Serialize>(&self, uri: &str, body: &T) -> TestResponse {
        self.send_json("PUT", uri, body).await
    }

    /// Send a POST with a raw body labelled as JSON
    pub async fn post_raw(&self, uri: &str, body: &'static str) -> TestResponse {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body))
            .expect("Failed to build request");

        self.request(request).await
    }

    async fn send_json<T: serde::Serialize>(
        &self,
        method: &str,
        uri: &str,
        body: &T,
    ) -> TestResponse {
        let json_body = serde_json::to_string(body).expect("Failed to serialize body");

        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(json_body))
            .expect("Failed to build request");

        self.request(request).await
    }
}

/// Test response wrapper
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Vec<u8>,
}

impl TestResponse {
    pub fn text(&self) -> String {
        String::from_utf8(self.body.clone()).expect("Response body is not valid UTF-8")
    }

    pub fn json<T: for<'de> Deserialize<'de>>(&self) -> T {
        serde_json::from_slice(&self.body).expect("Failed to parse JSON response")
    }

    pub fn assert_status(&self, expected: StatusCode) {
        assert_eq!(
            self.status,
            expected,
            "Expected status {}, got {}. Body: {}",
            expected,
            self.status,
            self.text()
        );
    }
}

/// Direct store helpers for assertions the API does not expose
pub mod db {
    use sqlx::SqlitePool;

    pub async fn count_memberships(
        pool: &SqlitePool,
        project_id: &str,
        user_id: i64,
    ) -> anyhow::Result<i64> {
        let count = sqlx::query_scalar(
            // language=SQLite
            r#"
            SELECT COUNT(*) FROM project_members WHERE project_id = ? AND user_id = ?
            "#,
        )
        .bind(project_id)
        .bind(user_id)
        .fetch_one(pool)
        .await?;

        Ok(count)
    }

    pub async fn count_projects(pool: &SqlitePool, project_id: &str) -> anyhow::Result<i64> {
        let count = sqlx::query_scalar("SELECT COUNT(*) FROM projects WHERE id = ?")
            .bind(project_id)
            .fetch_one(pool)
            .await?;

        Ok(count)
    }

    /// Make any membership insert for `user_id` abort
    pub async fn fail_memberships_for(pool: &SqlitePool, user_id: i64) -> anyhow::Result<()> {
        sqlx::raw_sql(&format!(
            r#"
            CREATE TRIGGER fail_membership BEFORE INSERT ON project_members
            WHEN NEW.user_id = {user_id}
            BEGIN
                SELECT RAISE(ABORT, 'membership insert rejected');
            END;
            "#
        ))
        .execute(pool)
        .await?;

        Ok(())
    }
}
