//! HTTP client helpers (REST).

use crate::app::preferences::{clear_token, load_token, redirect_to_login};
use crate::core::http::{ApiError, ResponseKind, bearer_header, classify_body};
use crate::core::models::{Board, MoveCardRequest};
use gloo::console;
use gloo_net::http::Request;
use serde::Serialize;
use serde::de::DeserializeOwned;

#[derive(Clone, Debug)]
pub(crate) struct ApiClient {
    pub(crate) base_url: String,
}

impl ApiClient {
    pub(crate) fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    fn authorize(request: Request) -> Request {
        let request = request.header("Accept", "application/json");
        match bearer_header(load_token().as_deref()) {
            Some(value) => request.header("Authorization", &value),
            None => request,
        }
    }

    /// Send a prepared request and return the body when there is one.
    async fn send(&self, request: Request) -> Result<Option<String>, ApiError> {
        let response = Self::authorize(request)
            .send()
            .await
            .map_err(|err| ApiError::Network(err.to_string()))?;
        let status = response.status();
        let reason = response.status_text();
        let body = response.text().await.map_err(|err| err.to_string());
        match classify_body(status, &reason, body) {
            Ok((ResponseKind::Content, body)) => Ok(Some(body)),
            Ok((ResponseKind::NoContent, _)) => Ok(None),
            Err(ApiError::Unauthorized) => {
                console::warn!("api session rejected; redirecting to login");
                clear_token();
                redirect_to_login();
                Err(ApiError::Unauthorized)
            }
            Err(err) => Err(err),
        }
    }

    fn decode<T: DeserializeOwned>(body: Option<String>) -> Result<T, ApiError> {
        let body = body.ok_or_else(|| ApiError::Decode("empty response".to_string()))?;
        serde_json::from_str(&body).map_err(|err| ApiError::Decode(err.to_string()))
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let body = self.send(Request::get(&self.url(path))).await?;
        Self::decode(body)
    }

    pub(crate) async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let request = Request::post(&self.url(path))
            .json(body)
            .map_err(|err| ApiError::Decode(err.to_string()))?;
        Self::decode(self.send(request).await?)
    }

    pub(crate) async fn put_json<B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<Option<String>, ApiError> {
        let request = Request::put(&self.url(path))
            .json(body)
            .map_err(|err| ApiError::Decode(err.to_string()))?;
        self.send(request).await
    }

    pub(crate) async fn fetch_board(&self, board_id: &str) -> Result<Board, ApiError> {
        self.get_json(&format!("/boards/{board_id}")).await
    }

    pub(crate) async fn move_card(
        &self,
        card_id: &str,
        column_id: &str,
        position: usize,
    ) -> Result<(), ApiError> {
        let body = MoveCardRequest {
            column_id: column_id.to_string(),
            position,
        };
        self.put_json(&format!("/cards/{card_id}/move"), &body)
            .await?;
        Ok(())
    }

    /// End the session server-side (best effort), then drop the token and leave.
    pub(crate) async fn logout(&self) {
        if let Err(err) = self
            .post_json::<_, serde_json::Value>("/auth/logout", &serde_json::json!({}))
            .await
        {
            console::debug!("logout request failed", err.to_string());
        }
        clear_token();
        redirect_to_login();
    }
}
