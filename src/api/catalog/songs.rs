impl CatalogClient {
    pub async fn songs(&self, offset: u32, limit: u32, sort: &str) -> Result<Page<Song>, String> {
        let url = format!(
            "{}?{}",
            self.api_url("songs"),
            Self::page_query(offset, limit, sort)
        );
        self.get_json(url).await
    }

    pub async fn song(&self, catalog_id: i64) -> Result<Song, String> {
        self.get_json(self.api_url(&format!("songs/{catalog_id}")))
            .await
    }

    /// Submit the user's vote for a song. Score 0 retracts an existing vote.
    /// The response body is the refreshed song.
    pub async fn vote_song(&self, catalog_id: i64, score: i32) -> Result<Song, String> {
        let url = self.api_url(&format!("songs/{catalog_id}/vote"));
        let response = HTTP_CLIENT
            .put(&url)
            .json(&VoteBody { score })
            .send()
            .await
            .map_err(|e| e.to_string())?;
        parse_json(response).await
    }

    pub async fn add_comment(&self, catalog_id: i64, text: &str) -> Result<Song, String> {
        let url = self.api_url(&format!("songs/{catalog_id}/comments"));
        let response = HTTP_CLIENT
            .post(&url)
            .json(&CommentBody {
                text: text.to_string(),
            })
            .send()
            .await
            .map_err(|e| e.to_string())?;
        parse_json(response).await
    }

    pub async fn remove_comment(&self, catalog_id: i64, comment_id: i64) -> Result<Song, String> {
        let url = self.api_url(&format!("songs/{catalog_id}/comments/{comment_id}"));
        let response = HTTP_CLIENT
            .delete(&url)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        parse_json(response).await
    }
}
