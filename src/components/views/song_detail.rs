use crate::api::catalog::CatalogClient;
use crate::components::{Icon, SongActions};
use dioxus::prelude::*;

#[component]
pub fn SongDetailView(catalog_id: i64) -> Element {
    let client = use_context::<CatalogClient>();
    let mut reload = use_signal(|| 0usize);

    let song = use_resource({
        let client = client.clone();
        move || {
            let client = client.clone();
            let _reload = reload();
            async move { client.song(catalog_id).await }
        }
    });

    rsx! {
        div { class: "page",
            {
                match song() {
                    Some(Ok(song)) => rsx! {
                        header { class: "song-hero",
                            div { class: "song-hero-art",
                                Icon { name: "music".to_string(), class: "icon-lg".to_string() }
                            }
                            div { class: "song-hero-info",
                                h1 { class: "page-title", "{song.title}" }
                                p { class: "song-hero-artist", "{song.artist}" }
                                p { class: "song-hero-album", "{song.album}" }
                                div { class: "song-hero-meta",
                                    if !song.duration_display().is_empty() {
                                        span { class: "song-hero-duration",
                                            Icon { name: "clock".to_string(), class: "icon-sm".to_string() }
                                            "{song.duration_display()}"
                                        }
                                    }
                                    span { class: "song-hero-score", "Score {song.vote_score()}" }
                                }
                            }
                        }
                        SongActions {
                            song: song.clone(),
                            on_vote_added: move |_| reload.set(reload() + 1),
                            on_vote_removed: move |_| reload.set(reload() + 1),
                            on_comment_added: move |_| reload.set(reload() + 1),
                            on_comment_removed: move |_| reload.set(reload() + 1),
                            on_playlist_added: move |_| reload.set(reload() + 1),
                            on_playlist_removed: move |_| reload.set(reload() + 1),
                            on_song_removed: |_| {},
                        }
                    },
                    Some(Err(err)) => rsx! {
                        div { class: "error-state", "Failed to load song: {err}" }
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
