//! Name prompt for creating a playlist, opened from song menus and the
//! playlists page. The prompt owns the create call; openers watch the
//! creation count to refresh whatever they cache.

use crate::api::catalog::CatalogClient;
use crate::components::Icon;
use dioxus::prelude::*;
use tracing::warn;

/// Prompt state as plain data, mutated only through the controller.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PlaylistModalState {
    open: bool,
    created: usize,
}

impl PlaylistModalState {
    fn open(&mut self) {
        self.open = true;
    }

    fn close(&mut self) {
        self.open = false;
    }

    fn record_created(&mut self) {
        self.created += 1;
    }
}

#[derive(Clone, PartialEq)]
pub struct PlaylistModalController {
    state: Signal<PlaylistModalState>,
}

impl PlaylistModalController {
    pub fn new(state: Signal<PlaylistModalState>) -> Self {
        Self { state }
    }

    pub fn open(&mut self) {
        self.state.with_mut(|state| state.open());
    }

    pub fn close(&mut self) {
        self.state.with_mut(|state| state.close());
    }

    pub fn is_open(&self) -> bool {
        (self.state)().open
    }

    /// Count of playlists created through the prompt since startup.
    pub fn created(&self) -> usize {
        (self.state)().created
    }

    fn record_created(&mut self) {
        self.state.with_mut(|state| state.record_created());
    }
}

/// Rendered once by the shell over whatever page opened the prompt.
#[component]
pub fn PlaylistNameModal() -> Element {
    let client = use_context::<CatalogClient>();
    let controller = use_context::<PlaylistModalController>();
    let mut name = use_signal(String::new);

    if !controller.is_open() {
        return rsx! {};
    }

    let submit = {
        let client = client.clone();
        let controller = controller.clone();
        move |_| {
            let typed = name().trim().to_string();
            if typed.is_empty() {
                return;
            }
            name.set(String::new());
            let client = client.clone();
            let mut controller = controller.clone();
            controller.close();
            spawn(async move {
                match client.create_playlist(&typed).await {
                    Ok(_) => controller.record_created(),
                    Err(err) => warn!("playlist create failed: {err}"),
                }
            });
        }
    };

    let cancel = {
        let mut controller = controller.clone();
        move |_| {
            name.set(String::new());
            controller.close();
        }
    };

    rsx! {
        div { class: "modal-backdrop",
            onclick: {
                let mut cancel = cancel.clone();
                move |evt: MouseEvent| cancel(evt)
            },
            div { class: "modal-card",
                onclick: move |evt: MouseEvent| evt.stop_propagation(),
                h2 { class: "modal-title", "New playlist" }
                input {
                    class: "modal-input",
                    placeholder: "Playlist name",
                    value: name,
                    autofocus: true,
                    oninput: move |e| name.set(e.value()),
                }
                div { class: "modal-actions",
                    button {
                        class: "action-button",
                        onclick: {
                            let mut cancel = cancel.clone();
                            move |evt: MouseEvent| cancel(evt)
                        },
                        "Cancel"
                    }
                    button {
                        class: "action-button primary",
                        disabled: name().trim().is_empty(),
                        onclick: {
                            let mut submit = submit.clone();
                            move |evt: MouseEvent| submit(evt)
                        },
                        Icon { name: "plus".to_string(), class: "icon-sm".to_string() }
                        span { "Create" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_opens_and_closes() {
        let mut state = PlaylistModalState::default();
        assert!(!state.open);

        state.open();
        assert!(state.open);

        state.close();
        assert!(!state.open);
        assert_eq!(state.created, 0);
    }

    #[test]
    fn creations_accumulate_across_prompts() {
        let mut state = PlaylistModalState::default();

        state.open();
        state.close();
        state.record_created();
        assert_eq!(state.created, 1);

        state.open();
        state.close();
        state.record_created();
        assert_eq!(state.created, 2);
    }
}
