//! Song rows with the per-song action cluster embedded in each one.

use dioxus::prelude::*;

use crate::api::models::{Playlist, PlaylistSong, Song, SongComment, SongVote};
use crate::components::{AppView, Icon, SongActions};

/// One renderable entry: a bare song, or a song paired with the playlist
/// entry it came from.
#[derive(Debug, Clone, PartialEq)]
pub enum SongRow {
    Song(Song),
    PlaylistEntry(PlaylistSong),
}

impl SongRow {
    pub fn song(&self) -> &Song {
        match self {
            SongRow::Song(song) => song,
            SongRow::PlaylistEntry(entry) => &entry.song,
        }
    }

    /// Stable row key. Playlist entries key by the nested song so a song
    /// keeps its identity when a list switches between the two shapes.
    pub fn key(&self) -> i64 {
        self.song().catalog_id
    }
}

#[component]
pub fn SongList(
    rows: Vec<SongRow>,
    #[props(default)] playlist: Option<Playlist>,
    #[props(default = false)] show_duration: bool,
    #[props(default = true)] show_votes: bool,
    #[props(default = true)] show_comments: bool,
    #[props(default = true)] show_playlists: bool,
    #[props(default = false)] show_remove: bool,
    on_vote_added: EventHandler<SongVote>,
    on_vote_removed: EventHandler<SongVote>,
    on_comment_added: EventHandler<SongComment>,
    on_comment_removed: EventHandler<SongComment>,
    on_playlist_added: EventHandler<PlaylistSong>,
    on_playlist_removed: EventHandler<PlaylistSong>,
    on_song_removed: EventHandler<Song>,
) -> Element {
    rsx! {
        div { class: "song-list",
            for row in rows.iter() {
                SongListRow {
                    key: "{row.key()}",
                    song: row.song().clone(),
                    playlist: playlist.clone(),
                    show_duration,
                    show_votes,
                    show_comments,
                    show_playlists,
                    show_remove,
                    on_vote_added: move |vote| on_vote_added.call(vote),
                    on_vote_removed: move |vote| on_vote_removed.call(vote),
                    on_comment_added: move |comment| on_comment_added.call(comment),
                    on_comment_removed: move |comment| on_comment_removed.call(comment),
                    on_playlist_added: move |entry| on_playlist_added.call(entry),
                    on_playlist_removed: move |entry| on_playlist_removed.call(entry),
                    on_song_removed: move |song| on_song_removed.call(song),
                }
            }
        }
    }
}

#[component]
fn SongListRow(
    song: Song,
    #[props(default)] playlist: Option<Playlist>,
    show_duration: bool,
    show_votes: bool,
    show_comments: bool,
    show_playlists: bool,
    show_remove: bool,
    on_vote_added: EventHandler<SongVote>,
    on_vote_removed: EventHandler<SongVote>,
    on_comment_added: EventHandler<SongComment>,
    on_comment_removed: EventHandler<SongComment>,
    on_playlist_added: EventHandler<PlaylistSong>,
    on_playlist_removed: EventHandler<PlaylistSong>,
    on_song_removed: EventHandler<Song>,
) -> Element {
    let catalog_id = song.catalog_id;

    rsx! {
        div { class: "song-row",
            div {
                class: "song-row-main",
                onclick: move |_| {
                    navigator().push(AppView::SongDetailView { catalog_id });
                },
                div { class: "song-row-art",
                    Icon { name: "music".to_string(), class: "icon-sm".to_string() }
                }
                div { class: "song-row-info",
                    p { class: "song-row-title", "{song.title}" }
                    p { class: "song-row-artist", "{song.artist}" }
                }
                div { class: "song-row-album", "{song.album}" }
                if show_duration {
                    span { class: "song-row-duration", "{song.duration_display()}" }
                }
            }
            SongActions {
                song: song.clone(),
                playlist: playlist.clone(),
                show_votes,
                show_comments,
                show_playlists,
                show_remove,
                on_vote_added: move |vote| on_vote_added.call(vote),
                on_vote_removed: move |vote| on_vote_removed.call(vote),
                on_comment_added: move |comment| on_comment_added.call(comment),
                on_comment_removed: move |comment| on_comment_removed.call(comment),
                on_playlist_added: move |entry| on_playlist_added.call(entry),
                on_playlist_removed: move |entry| on_playlist_removed.call(entry),
                on_song_removed: move |song| on_song_removed.call(song),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn song(catalog_id: i64) -> Song {
        Song {
            catalog_id,
            ..Default::default()
        }
    }

    #[test]
    fn bare_song_rows_key_by_their_own_catalog_id() {
        let row = SongRow::Song(song(42));
        assert_eq!(row.key(), 42);
        assert_eq!(row.song().catalog_id, 42);
    }

    #[test]
    fn playlist_entry_rows_key_by_the_nested_song() {
        let playlist = Playlist {
            id: 7,
            name: "Evening".into(),
            is_selected: false,
        };
        let row = SongRow::PlaylistEntry(PlaylistSong::new(playlist, song(99)));
        assert_eq!(row.key(), 99);
        assert_eq!(row.song().catalog_id, 99);
    }
}
