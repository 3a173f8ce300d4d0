use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Serialize, Deserialize)]
pub struct CreateUserRequest {
    pub name: String,
}

/// Status and `message` of a `POST /users` reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiReply {
    pub status: StatusCode,
    pub message: String,
}

#[derive(Deserialize)]
struct MessageBody {
    message: String,
}

pub struct UsersClient {
    client: Client,
    base_url: String,
}

impl UsersClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// `GET /ping`, returning the body text.
    pub async fn ping(&self) -> Result<String, reqwest::Error> {
        self.client
            .get(format!("{}/ping", self.base_url))
            .send()
            .await?
            .error_for_status()?
            .text()
            .await
    }

    /// `GET /users`.
    pub async fn list_users(&self) -> Result<Vec<String>, reqwest::Error> {
        self.client
            .get(format!("{}/users", self.base_url))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
    }

    /// `POST /users` with `{"name": name}`.
    ///
    /// Rejections (403) are returned as `Ok`, with the server's message.
    pub async fn create_user(&self, name: &str) -> Result<ApiReply, reqwest::Error> {
        let resp = self
            .client
            .post(format!("{}/users", self.base_url))
            .json(&CreateUserRequest {
                name: name.to_string(),
            })
            .send()
            .await?;
        Self::reply(resp).await
    }

    /// `POST /users` with an arbitrary JSON body.
    pub async fn create_user_raw(&self, body: Value) -> Result<ApiReply, reqwest::Error> {
        let resp = self
            .client
            .post(format!("{}/users", self.base_url))
            .json(&body)
            .send()
            .await?;
        Self::reply(resp).await
    }

    async fn reply(resp: reqwest::Response) -> Result<ApiReply, reqwest::Error> {
        let status = resp.status();
        let body: MessageBody = resp.json().await?;
        Ok(ApiReply {
            status,
            message: body.message,
        })
    }

    /// Underlying HTTP client, for requests the SDK does not model.
    pub fn http(&self) -> &Client {
        &self.client
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}
