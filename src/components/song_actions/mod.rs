//! Per-song vote, comment, playlist membership, and remove controls.

use crate::api::catalog::CatalogClient;
use crate::api::models::*;
use crate::components::{Icon, PlaylistModalController};
use dioxus::prelude::*;
use tracing::warn;

// Derived vote state and the cached playlist menu.
include!("state.rs");

#[component]
pub fn SongActions(
    song: ReadSignal<Song>,
    #[props(default)] playlist: Option<Playlist>,
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
    let client = use_context::<CatalogClient>();
    let modal = use_context::<PlaylistModalController>();
    let mut user = use_signal(|| None::<User>);
    let mut refreshed = use_signal(|| None::<Song>);
    let mut busy = use_signal(|| false);
    let mut comment_text = use_signal(String::new);
    let comments_open = use_signal(|| false);
    let mut menu_open = use_signal(|| false);
    let mut playlist_cache = use_signal(PlaylistCache::default);

    // Resolve the signed-in user once; the client memoizes per server.
    use_effect({
        let client = client.clone();
        move || {
            let client = client.clone();
            spawn(async move {
                match client.session_user().await {
                    Ok(found) => user.set(found),
                    Err(err) => warn!("user lookup failed: {err}"),
                }
            });
        }
    });

    // A new input song supersedes any local refresh and settles the busy flag.
    use_effect(move || {
        let _ = song();
        refreshed.set(None);
        busy.set(false);
    });

    // A playlist created through the prompt outdates any loaded menu page.
    let created = use_memo({
        let modal = modal.clone();
        move || modal.created()
    });
    use_effect(move || {
        let _ = created();
        let loaded = !playlist_cache.peek().is_unloaded();
        if loaded {
            playlist_cache.with_mut(|cache| cache.invalidate());
        }
    });

    // The song in focus: a mutation response wins until the input changes.
    let current = use_memo(move || refreshed().unwrap_or_else(|| song()));
    let view = use_memo(move || VoteView::derive(user().as_ref(), Some(&current())));

    let on_vote = {
        let client = client.clone();
        move |direction: VoteDirection| {
            let Some(me) = user() else {
                return;
            };
            let client = client.clone();
            let song_now = current();
            let previous = view().vote;
            let score = next_vote_score(previous.as_ref(), direction);
            busy.set(true);
            spawn(async move {
                match client.vote_song(song_now.catalog_id, score).await {
                    Ok(updated) => {
                        let fresh = updated.votes.iter().find(|v| v.user.id == me.id).cloned();
                        refreshed.set(Some(updated));
                        busy.set(false);
                        match vote_event(score, fresh, previous) {
                            Some(VoteEvent::Added(vote)) => on_vote_added.call(vote),
                            Some(VoteEvent::Removed(vote)) => on_vote_removed.call(vote),
                            None => {}
                        }
                    }
                    Err(err) => {
                        warn!("vote failed: {err}");
                        busy.set(false);
                    }
                }
            });
        }
    };

    let submit_comment = {
        let client = client.clone();
        move |_evt: MouseEvent| {
            let text = comment_text().trim().to_string();
            if text.is_empty() {
                return;
            }
            let Some(me) = user() else {
                return;
            };
            let client = client.clone();
            let song_now = current();
            busy.set(true);
            spawn(async move {
                match client.add_comment(song_now.catalog_id, &text).await {
                    Ok(updated) => {
                        let added = updated.comments.iter().find(|c| c.user.id == me.id).cloned();
                        comment_text.set(String::new());
                        refreshed.set(Some(updated));
                        busy.set(false);
                        if let Some(comment) = added {
                            on_comment_added.call(comment);
                        }
                    }
                    Err(err) => {
                        warn!("comment failed: {err}");
                        busy.set(false);
                    }
                }
            });
        }
    };

    let remove_comment = {
        let client = client.clone();
        move |comment: SongComment| {
            let client = client.clone();
            let song_now = current();
            busy.set(true);
            spawn(async move {
                match client.remove_comment(song_now.catalog_id, comment.id).await {
                    Ok(updated) => {
                        refreshed.set(Some(updated));
                        busy.set(false);
                        on_comment_removed.call(comment);
                    }
                    Err(err) => {
                        warn!("comment removal failed: {err}");
                        busy.set(false);
                    }
                }
            });
        }
    };

    let toggle_menu = {
        let client = client.clone();
        move |_evt: MouseEvent| {
            let opening = !menu_open();
            menu_open.set(opening);
            if !opening {
                return;
            }
            let song_now = current();
            if playlist_cache().is_unloaded() {
                let client = client.clone();
                spawn(async move {
                    match client
                        .playlists(0, PLAYLIST_MENU_LIMIT, PLAYLIST_MENU_SORT)
                        .await
                    {
                        Ok(page) => {
                            playlist_cache.with_mut(|cache| cache.load(page.content, &song_now))
                        }
                        Err(err) => warn!("playlist menu fetch failed: {err}"),
                    }
                });
            } else {
                playlist_cache.with_mut(|cache| cache.mark_selected(&song_now));
            }
        }
    };

    let toggle_membership = {
        let client = client.clone();
        move |entry: Playlist| {
            let client = client.clone();
            let song_now = current();
            let was_selected = entry.is_selected;
            busy.set(true);
            spawn(async move {
                let result = if was_selected {
                    client
                        .remove_song_from_playlist(entry.id, song_now.catalog_id)
                        .await
                } else {
                    client
                        .add_song_to_playlist(entry.id, song_now.catalog_id)
                        .await
                };
                match result {
                    Ok(updated) => {
                        playlist_cache.with_mut(|cache| cache.set_selected(entry.id, !was_selected));
                        refreshed.set(Some(updated.clone()));
                        busy.set(false);
                        let mut chosen = entry;
                        chosen.is_selected = !was_selected;
                        let pair = PlaylistSong::new(chosen, updated);
                        if was_selected {
                            on_playlist_removed.call(pair);
                        } else {
                            on_playlist_added.call(pair);
                        }
                    }
                    Err(err) => {
                        warn!("playlist update failed: {err}");
                        busy.set(false);
                    }
                }
            });
        }
    };

    let open_create = {
        let mut modal = modal.clone();
        move |_evt: MouseEvent| {
            menu_open.set(false);
            modal.open();
        }
    };

    let song_view = current();
    let vote_view = view();
    let signed_in = user().is_some();
    let my_id = user().map(|u| u.id);
    let up_count = song_view.votes.iter().filter(|v| v.score > 0).count();
    let down_count = song_view.votes.iter().filter(|v| v.score < 0).count();
    let remove_title = match &playlist {
        Some(p) => format!("Remove from {}", p.name),
        None => "Remove".to_string(),
    };

    rsx! {
        div { class: "song-actions",
            div { class: "action-cluster",
                if show_votes {
                    button {
                        class: if vote_view.voted_up() { "action-button vote active" } else { "action-button vote" },
                        aria_label: "Vote up",
                        title: "{vote_view.up_voters}",
                        disabled: !signed_in,
                        onclick: {
                            let mut on_vote = on_vote.clone();
                            move |evt: MouseEvent| {
                                evt.stop_propagation();
                                on_vote(VoteDirection::Up);
                            }
                        },
                        Icon { name: "arrow-up".to_string(), class: "icon-sm".to_string() }
                        span { class: "action-count", "{up_count}" }
                    }
                    button {
                        class: if vote_view.voted_down() { "action-button vote active" } else { "action-button vote" },
                        aria_label: "Vote down",
                        title: "{vote_view.down_voters}",
                        disabled: !signed_in,
                        onclick: {
                            let mut on_vote = on_vote.clone();
                            move |evt: MouseEvent| {
                                evt.stop_propagation();
                                on_vote(VoteDirection::Down);
                            }
                        },
                        Icon { name: "arrow-down".to_string(), class: "icon-sm".to_string() }
                        span { class: "action-count", "{down_count}" }
                    }
                }
                if show_comments {
                    button {
                        class: if comments_open() { "action-button active" } else { "action-button" },
                        aria_label: "Comments",
                        onclick: {
                            let mut comments_open = comments_open.clone();
                            move |evt: MouseEvent| {
                                evt.stop_propagation();
                                comments_open.set(!comments_open());
                            }
                        },
                        Icon { name: "comment".to_string(), class: "icon-sm".to_string() }
                        span { class: "action-count", "{song_view.comments.len()}" }
                    }
                }
                if show_playlists {
                    div { class: "playlist-menu-anchor",
                        button {
                            class: if menu_open() { "action-button active" } else { "action-button" },
                            aria_label: "Playlists",
                            onclick: {
                                let mut toggle_menu = toggle_menu.clone();
                                move |evt: MouseEvent| {
                                    evt.stop_propagation();
                                    toggle_menu(evt);
                                }
                            },
                            Icon { name: "playlist".to_string(), class: "icon-sm".to_string() }
                        }
                        if menu_open() {
                            div { class: "playlist-menu",
                                if playlist_cache().is_unloaded() {
                                    div { class: "menu-loading",
                                        Icon { name: "loader".to_string(), class: "icon-sm".to_string() }
                                    }
                                } else {
                                    for entry in playlist_cache().entries().to_vec() {
                                        button {
                                            key: "{entry.id}",
                                            class: if entry.is_selected { "menu-item selected" } else { "menu-item" },
                                            onclick: {
                                                let mut toggle_membership = toggle_membership.clone();
                                                let entry = entry.clone();
                                                move |evt: MouseEvent| {
                                                    evt.stop_propagation();
                                                    toggle_membership(entry.clone());
                                                }
                                            },
                                            Icon {
                                                name: if entry.is_selected { "check".to_string() } else { "plus".to_string() },
                                                class: "icon-sm".to_string(),
                                            }
                                            span { "{entry.name}" }
                                        }
                                    }
                                    button {
                                        class: "menu-item create",
                                        onclick: {
                                            let mut open_create = open_create.clone();
                                            move |evt: MouseEvent| {
                                                evt.stop_propagation();
                                                open_create(evt);
                                            }
                                        },
                                        Icon { name: "plus".to_string(), class: "icon-sm".to_string() }
                                        span { "New playlist" }
                                    }
                                }
                            }
                        }
                    }
                }
                if show_remove {
                    button {
                        class: "action-button remove",
                        aria_label: "Remove song",
                        title: "{remove_title}",
                        onclick: move |evt: MouseEvent| {
                            evt.stop_propagation();
                            on_song_removed.call(current());
                        },
                        Icon { name: "trash".to_string(), class: "icon-sm".to_string() }
                    }
                }
                if busy() {
                    span { class: "busy-spinner",
                        Icon { name: "loader".to_string(), class: "icon-sm".to_string() }
                    }
                }
            }
            if show_comments && comments_open() {
                div { class: "comment-panel",
                    for comment in song_view.comments.clone() {
                        div { key: "{comment.id}", class: "comment-row",
                            div { class: "comment-meta",
                                span { class: "comment-author", "{comment.user.name}" }
                                span { class: "comment-date", "{comment.created_display()}" }
                            }
                            p { class: "comment-text", "{comment.text}" }
                            if my_id == Some(comment.user.id) {
                                button {
                                    class: "action-button remove",
                                    aria_label: "Delete comment",
                                    onclick: {
                                        let mut remove_comment = remove_comment.clone();
                                        let comment = comment.clone();
                                        move |evt: MouseEvent| {
                                            evt.stop_propagation();
                                            remove_comment(comment.clone());
                                        }
                                    },
                                    Icon { name: "trash".to_string(), class: "icon-sm".to_string() }
                                }
                            }
                        }
                    }
                    div { class: "comment-compose",
                        input {
                            class: "comment-input",
                            placeholder: "Add a comment",
                            value: comment_text,
                            disabled: !signed_in,
                            onclick: move |evt: MouseEvent| evt.stop_propagation(),
                            oninput: move |e| comment_text.set(e.value()),
                        }
                        button {
                            class: "action-button",
                            disabled: !signed_in,
                            onclick: {
                                let mut submit_comment = submit_comment.clone();
                                move |evt: MouseEvent| {
                                    evt.stop_propagation();
                                    submit_comment(evt);
                                }
                            },
                            "Post"
                        }
                    }
                }
            }
        }
    }
}
