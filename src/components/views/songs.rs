use crate::api::catalog::CatalogClient;
use crate::api::models::SongVote;
use crate::components::{Icon, SongList, SongRow};
use dioxus::prelude::*;

#[component]
pub fn SongsView() -> Element {
    let client = use_context::<CatalogClient>();
    let mut sort_by = use_signal(|| "title".to_string());
    let mut limit = use_signal(|| 30u32);
    let mut reload = use_signal(|| 0usize);

    let songs = use_resource({
        let client = client.clone();
        move || {
            let client = client.clone();
            let sort = sort_by();
            let limit = limit();
            let _reload = reload();
            async move { client.songs(0, limit, &sort).await }
        }
    });

    // Votes only change the ordering when the list is sorted by them.
    let on_vote_changed = move |_: SongVote| {
        if sort_by() == "votes" {
            reload.set(reload() + 1);
        }
    };

    rsx! {
        div { class: "page",
            header { class: "page-header",
                h1 { class: "page-title", "Songs" }
                div { class: "sort-picker",
                    span { class: "sort-label", "Sort:" }
                    select {
                        value: sort_by,
                        oninput: move |e| sort_by.set(e.value()),
                        option { value: "title", "A-Z" }
                        option { value: "votes", "Top voted" }
                        option { value: "created", "Newest" }
                    }
                }
            }

            {
                match songs() {
                    Some(Ok(page)) => rsx! {
                        if page.content.is_empty() {
                            div { class: "empty-state",
                                Icon { name: "music".to_string(), class: "icon-lg".to_string() }
                                p { "No songs in the catalog yet" }
                            }
                        } else {
                            SongList {
                                rows: page.content.iter().map(|song| SongRow::Song(song.clone())).collect::<Vec<_>>(),
                                on_vote_added: on_vote_changed.clone(),
                                on_vote_removed: on_vote_changed.clone(),
                                on_comment_added: |_| {},
                                on_comment_removed: |_| {},
                                on_playlist_added: |_| {},
                                on_playlist_removed: |_| {},
                                on_song_removed: |_| {},
                            }
                            if (page.content.len() as u64) < page.total {
                                button {
                                    class: "view-more",
                                    onclick: move |_| limit.set(limit() + 30),
                                    "View more"
                                }
                            }
                        }
                    },
                    Some(Err(err)) => rsx! {
                        div { class: "error-state", "Failed to load songs: {err}" }
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
