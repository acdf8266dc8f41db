//! Routes for the app's views.

use dioxus::prelude::*;

use super::AppShell;
use super::views::{PlaylistDetailView, PlaylistsView, SongDetailView, SongsView};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum AppView {
    #[layout(AppShell)]
    #[route("/")]
    SongsView {},
    #[route("/songs/:catalog_id")]
    SongDetailView { catalog_id: i64 },
    #[route("/playlists")]
    PlaylistsView {},
    #[route("/playlists/:playlist_id")]
    PlaylistDetailView { playlist_id: i64 },
}
