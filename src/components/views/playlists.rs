use crate::api::catalog::CatalogClient;
use crate::api::models::Playlist;
use crate::components::{AppView, Icon, PlaylistModalController};
use dioxus::prelude::*;

const PLAYLIST_PAGE_LIMIT: u32 = 100;

#[component]
pub fn PlaylistsView() -> Element {
    let client = use_context::<CatalogClient>();
    let modal = use_context::<PlaylistModalController>();

    // Refetch whenever the prompt reports another created playlist.
    let created = use_memo({
        let modal = modal.clone();
        move || modal.created()
    });
    let playlists = use_resource({
        let client = client.clone();
        move || {
            let client = client.clone();
            let _created = created();
            async move { client.playlists(0, PLAYLIST_PAGE_LIMIT, "name").await }
        }
    });

    let on_create = {
        let mut modal = modal.clone();
        move |_: MouseEvent| modal.open()
    };

    rsx! {
        div { class: "page",
            header { class: "page-header",
                h1 { class: "page-title", "Playlists" }
            }

            {
                match playlists() {
                    Some(Ok(page)) if !page.content.is_empty() => rsx! {
                        div { class: "playlist-grid",
                            for playlist in page.content.iter() {
                                PlaylistCard {
                                    key: "{playlist.id}",
                                    playlist: playlist.clone(),
                                    onclick: {
                                        let playlist_id = playlist.id;
                                        move |_| {
                                            navigator().push(AppView::PlaylistDetailView { playlist_id });
                                        }
                                    },
                                }
                            }
                            button { class: "playlist-card create", onclick: on_create,
                                Icon { name: "plus".to_string(), class: "icon-lg".to_string() }
                                span { class: "playlist-card-name", "New playlist" }
                            }
                        }
                    },
                    Some(Ok(_)) => rsx! {
                        div { class: "empty-state",
                            Icon { name: "playlist".to_string(), class: "icon-lg".to_string() }
                            h2 { "No playlists yet" }
                            p { "Name one and start collecting songs" }
                            button { class: "playlist-card create", onclick: on_create,
                                Icon { name: "plus".to_string(), class: "icon-sm".to_string() }
                                span { "New playlist" }
                            }
                        }
                    },
                    Some(Err(err)) => rsx! {
                        div { class: "error-state", "Failed to load playlists: {err}" }
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

#[component]
fn PlaylistCard(playlist: Playlist, onclick: EventHandler<MouseEvent>) -> Element {
    rsx! {
        button {
            class: "playlist-card",
            onclick: move |e| onclick.call(e),
            div { class: "playlist-card-art",
                Icon { name: "playlist".to_string(), class: "icon-lg".to_string() }
            }
            span { class: "playlist-card-name", "{playlist.name}" }
        }
    }
}
