impl CatalogClient {
    /// Resolve the signed-in user, memoized per server for the session.
    pub async fn session_user(&self) -> Result<Option<User>, String> {
        let cache_key = self.config.base_url.clone();
        if let Ok(cache) = SESSION_USERS.lock() {
            if let Some(known) = cache.get(&cache_key) {
                return Ok(known.clone());
            }
        }

        let response = HTTP_CLIENT
            .get(&self.api_url("user/me"))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        let user = match response.status().as_u16() {
            401 | 404 => None,
            _ => Some(parse_json::<User>(response).await?),
        };

        if let Ok(mut cache) = SESSION_USERS.lock() {
            cache.insert(cache_key, user.clone());
        }
        Ok(user)
    }
}
