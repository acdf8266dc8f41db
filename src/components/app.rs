use crate::api::catalog::CatalogClient;
use crate::api::models::User;
use crate::components::{
    AppView, Icon, PlaylistModalController, PlaylistModalState, PlaylistNameModal,
};
use crate::config::ServerConfig;
use dioxus::prelude::*;
use tracing::warn;

#[component]
pub fn AppShell() -> Element {
    let client = use_hook(|| CatalogClient::new(ServerConfig::load()));
    let mut user = use_signal(|| None::<User>);
    let modal_state = use_signal(PlaylistModalState::default);
    let modal = PlaylistModalController::new(modal_state);

    // Provide state via context
    use_context_provider(|| client.clone());
    use_context_provider(|| modal.clone());

    // Resolve the signed-in user for the header badge.
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

    let route = use_route::<AppView>();
    let songs_active = matches!(
        route,
        AppView::SongsView {} | AppView::SongDetailView { .. }
    );
    let playlists_active = matches!(
        route,
        AppView::PlaylistsView {} | AppView::PlaylistDetailView { .. }
    );

    rsx! {
        div { class: "app-shell",
            header { class: "app-header",
                span { class: "app-brand", "Songboard" }
                nav { class: "app-nav",
                    button {
                        class: if songs_active { "nav-link active" } else { "nav-link" },
                        onclick: move |_| {
                            navigator().push(AppView::SongsView {});
                        },
                        Icon { name: "music".to_string(), class: "icon-sm".to_string() }
                        span { "Songs" }
                    }
                    button {
                        class: if playlists_active { "nav-link active" } else { "nav-link" },
                        onclick: move |_| {
                            navigator().push(AppView::PlaylistsView {});
                        },
                        Icon { name: "playlist".to_string(), class: "icon-sm".to_string() }
                        span { "Playlists" }
                    }
                }
                div { class: "app-user",
                    {
                        match user() {
                            Some(me) => rsx! {
                                span { class: "app-user-name", "{me.name}" }
                            },
                            None => rsx! {
                                span { class: "app-user-name signed-out", "Not signed in" }
                            },
                        }
                    }
                }
            }

            // Main scrollable content
            main { class: "main-scroll",
                div { class: "page-shell", Outlet::<AppView> {} }
            }
        }

        PlaylistNameModal {}
    }
}
