/// One page of a listing endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct Page<T> {
    #[serde(default)]
    pub content: Vec<T>,
    #[serde(default, alias = "totalElements")]
    pub total: u64,
}

#[derive(Debug, Default, Deserialize)]
struct ApiError {
    #[serde(default)]
    message: String,
}

#[derive(Debug, Serialize)]
struct VoteBody {
    score: i32,
}

#[derive(Debug, Serialize)]
struct CommentBody {
    text: String,
}

#[derive(Debug, Serialize)]
struct CreatePlaylistBody {
    name: String,
}
