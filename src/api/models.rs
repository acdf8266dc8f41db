use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct User {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SongVote {
    #[serde(default)]
    pub id: i64,
    // +1 or -1; a retracted vote is deleted server-side, never stored as 0.
    #[serde(default)]
    pub score: i32,
    #[serde(default)]
    pub user: User,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SongComment {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub user: User,
    #[serde(default, alias = "createdAt")]
    pub created: Option<DateTime<Utc>>,
}

impl SongComment {
    pub fn created_display(&self) -> String {
        match &self.created {
            Some(when) => when.format("%b %e, %Y").to_string(),
            None => String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Playlist {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub name: String,
    // Client-side only: whether the song currently in focus is a member.
    #[serde(skip)]
    pub is_selected: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Song {
    #[serde(default, alias = "catalogId")]
    pub catalog_id: i64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub artist: String,
    #[serde(default)]
    pub album: String,
    #[serde(default, alias = "durationSecs")]
    pub duration_secs: Option<u32>,
    #[serde(default)]
    pub votes: Vec<SongVote>,
    #[serde(default)]
    pub comments: Vec<SongComment>,
    #[serde(default)]
    pub playlists: Vec<Playlist>,
}

impl Song {
    pub fn vote_score(&self) -> i32 {
        self.votes.iter().map(|v| v.score).sum()
    }

    pub fn duration_display(&self) -> String {
        match self.duration_secs {
            Some(secs) => format_duration(secs),
            None => String::new(),
        }
    }
}

/// One song's membership in one playlist, as playlist pages list entries and
/// membership events report them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaylistSong {
    pub playlist: Playlist,
    pub song: Song,
}

impl PlaylistSong {
    pub fn new(playlist: Playlist, song: Song) -> Self {
        Self { playlist, song }
    }
}

pub fn format_duration(seconds: u32) -> String {
    let mins = seconds / 60;
    let secs = seconds % 60;
    format!("{}:{:02}", mins, secs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_duration_pads_seconds() {
        assert_eq!(format_duration(0), "0:00");
        assert_eq!(format_duration(59), "0:59");
        assert_eq!(format_duration(61), "1:01");
        assert_eq!(format_duration(754), "12:34");
    }

    #[test]
    fn song_parses_camel_case_fields() {
        let song: Song = serde_json::from_str(
            r#"{
                "catalogId": 42,
                "title": "Harvest Moon",
                "artist": "Neil Young",
                "album": "Harvest Moon",
                "durationSecs": 303,
                "votes": [{"id": 1, "score": 1, "user": {"id": 7, "name": "ada"}}],
                "comments": [],
                "playlists": [{"id": 3, "name": "Evening"}]
            }"#,
        )
        .unwrap();
        assert_eq!(song.catalog_id, 42);
        assert_eq!(song.duration_secs, Some(303));
        assert_eq!(song.votes[0].user.name, "ada");
        assert!(!song.playlists[0].is_selected);
        assert_eq!(song.vote_score(), 1);
    }

    #[test]
    fn song_tolerates_missing_collections() {
        let song: Song = serde_json::from_str(r#"{"catalog_id": 9, "title": "Sparse"}"#).unwrap();
        assert_eq!(song.catalog_id, 9);
        assert_eq!(song.album, "");
        assert!(song.votes.is_empty());
        assert!(song.comments.is_empty());
        assert!(song.playlists.is_empty());
        assert_eq!(song.duration_display(), "");
    }

    #[test]
    fn playlist_selection_never_round_trips() {
        let mut playlist = Playlist {
            id: 5,
            name: "Morning".into(),
            is_selected: true,
        };
        let json = serde_json::to_string(&playlist).unwrap();
        assert!(!json.contains("is_selected"));
        playlist = serde_json::from_str(&json).unwrap();
        assert!(!playlist.is_selected);
    }

    #[test]
    fn comment_created_display_handles_missing_timestamp() {
        let comment: SongComment = serde_json::from_str(
            r#"{"id": 1, "text": "great tune", "user": {"id": 2, "name": "lin"}}"#,
        )
        .unwrap();
        assert_eq!(comment.created_display(), "");

        let dated: SongComment = serde_json::from_str(
            r#"{"id": 2, "text": "again", "user": {"id": 2, "name": "lin"},
                "createdAt": "2026-03-09T18:30:00Z"}"#,
        )
        .unwrap();
        assert_eq!(dated.created_display(), "Mar  9, 2026");
    }
}
