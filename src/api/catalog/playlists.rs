impl CatalogClient {
    pub async fn playlists(
        &self,
        offset: u32,
        limit: u32,
        sort: &str,
    ) -> Result<Page<Playlist>, String> {
        let url = format!(
            "{}?{}",
            self.api_url("playlists"),
            Self::page_query(offset, limit, sort)
        );
        self.get_json(url).await
    }

    pub async fn playlist(&self, playlist_id: i64) -> Result<Playlist, String> {
        self.get_json(self.api_url(&format!("playlists/{playlist_id}")))
            .await
    }

    pub async fn playlist_songs(&self, playlist_id: i64) -> Result<Vec<PlaylistSong>, String> {
        self.get_json(self.api_url(&format!("playlists/{playlist_id}/songs")))
            .await
    }

    /// Fetch a playlist together with its entries.
    pub async fn playlist_with_songs(
        &self,
        playlist_id: i64,
    ) -> Result<(Playlist, Vec<PlaylistSong>), String> {
        let playlist = self.playlist(playlist_id).await?;
        let songs = self.playlist_songs(playlist_id).await?;
        Ok((playlist, songs))
    }

    pub async fn create_playlist(&self, name: &str) -> Result<Playlist, String> {
        let response = HTTP_CLIENT
            .post(&self.api_url("playlists"))
            .json(&CreatePlaylistBody {
                name: name.to_string(),
            })
            .send()
            .await
            .map_err(|e| e.to_string())?;
        parse_json(response).await
    }

    /// Add a song to a playlist; the response body is the refreshed song.
    pub async fn add_song_to_playlist(
        &self,
        playlist_id: i64,
        catalog_id: i64,
    ) -> Result<Song, String> {
        let url = self.api_url(&format!("playlists/{playlist_id}/songs/{catalog_id}"));
        let response = HTTP_CLIENT
            .post(&url)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        parse_json(response).await
    }

    pub async fn remove_song_from_playlist(
        &self,
        playlist_id: i64,
        catalog_id: i64,
    ) -> Result<Song, String> {
        let url = self.api_url(&format!("playlists/{playlist_id}/songs/{catalog_id}"));
        let response = HTTP_CLIENT
            .delete(&url)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        parse_json(response).await
    }
}
