//! The components module contains all shared components for our app.

mod app;
mod app_view;
mod icons;
mod playlist_modal;
mod song_actions;
mod song_list;
mod views;

pub use app::*;
pub use app_view::*;
pub use icons::*;
pub use playlist_modal::*;
pub use song_actions::*;
pub use song_list::*;
// Views are reached through the router.
