use crate::api::catalog::CatalogClient;
use crate::api::models::{PlaylistSong, Song};
use crate::components::{Icon, SongList, SongRow};
use dioxus::prelude::*;
use tracing::warn;

#[component]
pub fn PlaylistDetailView(playlist_id: i64) -> Element {
    let client = use_context::<CatalogClient>();
    let mut reload = use_signal(|| 0usize);

    let playlist_data = use_resource({
        let client = client.clone();
        move || {
            let client = client.clone();
            let _reload = reload();
            async move { client.playlist_with_songs(playlist_id).await }
        }
    });

    // The row-level remove control only reports; the backend call happens here.
    let on_song_removed = {
        let client = client.clone();
        move |song: Song| {
            let client = client.clone();
            spawn(async move {
                match client
                    .remove_song_from_playlist(playlist_id, song.catalog_id)
                    .await
                {
                    Ok(_) => reload.set(reload() + 1),
                    Err(err) => warn!("playlist remove failed: {err}"),
                }
            });
        }
    };

    // Rows can also leave or rejoin this playlist through their membership menu.
    let on_membership_changed = move |entry: PlaylistSong| {
        if entry.playlist.id == playlist_id {
            reload.set(reload() + 1);
        }
    };

    rsx! {
        div { class: "page",
            {
                match playlist_data() {
                    Some(Ok((playlist, entries))) => rsx! {
                        header { class: "playlist-hero",
                            div { class: "playlist-hero-art",
                                Icon { name: "playlist".to_string(), class: "icon-lg".to_string() }
                            }
                            div { class: "playlist-hero-info",
                                h1 { class: "page-title", "{playlist.name}" }
                                if entries.len() == 1 {
                                    p { class: "playlist-hero-count", "1 song" }
                                } else {
                                    p { class: "playlist-hero-count", "{entries.len()} songs" }
                                }
                            }
                        }
                        if entries.is_empty() {
                            div { class: "empty-state",
                                Icon { name: "music".to_string(), class: "icon-lg".to_string() }
                                p { "Nothing in this playlist yet" }
                            }
                        } else {
                            SongList {
                                rows: entries.iter().map(|entry| SongRow::PlaylistEntry(entry.clone())).collect::<Vec<_>>(),
                                playlist: playlist.clone(),
                                show_duration: true,
                                show_remove: true,
                                on_vote_added: |_| {},
                                on_vote_removed: |_| {},
                                on_comment_added: |_| {},
                                on_comment_removed: |_| {},
                                on_playlist_added: on_membership_changed.clone(),
                                on_playlist_removed: on_membership_changed.clone(),
                                on_song_removed: on_song_removed.clone(),
                            }
                        }
                    },
                    Some(Err(err)) => rsx! {
                        div { class: "error-state", "Failed to load playlist: {err}" }
                    },
                    None => rsx! {
                        div { class: "loading-state",
                            Icon { name: "loader".to_string(), class: "icon-lg".to_string() }
                        }
                    },
                }
            }
        }
    }
}
