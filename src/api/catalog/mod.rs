use crate::api::models::*;
use crate::config::ServerConfig;
use once_cell::sync::Lazy;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Mutex;

static HTTP_CLIENT: Lazy<reqwest::Client> = Lazy::new(reqwest::Client::new);

// Session lookups memoized per server; a cached None means "not signed in",
// network failures are never cached.
static SESSION_USERS: Lazy<Mutex<HashMap<String, Option<User>>>> =
    Lazy::new(|| Mutex::new(HashMap::new()));

/// Client for the catalog REST API.
#[derive(Clone)]
pub struct CatalogClient {
    pub config: ServerConfig,
}

impl CatalogClient {
    pub fn new(config: ServerConfig) -> Self {
        Self { config }
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}/api/{}", self.config.base_url.trim_end_matches('/'), path)
    }

    fn page_query(offset: u32, limit: u32, sort: &str) -> String {
        format!(
            "offset={}&limit={}&sort={}",
            offset,
            limit,
            urlencoding::encode(sort)
        )
    }

    async fn get_json<T: DeserializeOwned>(&self, url: String) -> Result<T, String> {
        let response = HTTP_CLIENT
            .get(&url)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        parse_json(response).await
    }
}

async fn parse_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, String> {
    let status = response.status();
    if !status.is_success() {
        let body = response.json::<ApiError>().await.unwrap_or_default();
        return Err(error_message(status.as_u16(), body));
    }
    response.json::<T>().await.map_err(|e| e.to_string())
}

fn error_message(status: u16, body: ApiError) -> String {
    if body.message.trim().is_empty() {
        format!("request failed with status {}", status)
    } else {
        body.message
    }
}

include!("account.rs");
include!("songs.rs");
include!("playlists.rs");
include!("response.rs");

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> CatalogClient {
        CatalogClient::new(ServerConfig {
            base_url: "http://localhost:8080/".into(),
        })
    }

    #[test]
    fn api_url_trims_trailing_slash() {
        assert_eq!(
            client().api_url("songs/42"),
            "http://localhost:8080/api/songs/42"
        );
    }

    #[test]
    fn page_query_encodes_sort() {
        assert_eq!(
            CatalogClient::page_query(0, 100, "name"),
            "offset=0&limit=100&sort=name"
        );
        assert_eq!(
            CatalogClient::page_query(30, 30, "vote count"),
            "offset=30&limit=30&sort=vote%20count"
        );
    }

    #[test]
    fn page_parses_spring_style_totals() {
        let page: Page<Song> = serde_json::from_str(
            r#"{"content": [{"catalogId": 1, "title": "One"}], "totalElements": 57}"#,
        )
        .unwrap();
        assert_eq!(page.content.len(), 1);
        assert_eq!(page.total, 57);

        let bare: Page<Song> = serde_json::from_str(r#"{"content": []}"#).unwrap();
        assert!(bare.content.is_empty());
        assert_eq!(bare.total, 0);
    }

    #[test]
    fn error_message_prefers_server_text() {
        let body: ApiError = serde_json::from_str(r#"{"message": "song not found"}"#).unwrap();
        assert_eq!(error_message(404, body), "song not found");
        assert_eq!(
            error_message(500, ApiError::default()),
            "request failed with status 500"
        );
    }
}
