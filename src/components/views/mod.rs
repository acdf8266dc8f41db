mod playlist_detail;
mod playlists;
mod song_detail;
mod songs;

pub use playlist_detail::*;
pub use playlists::*;
pub use song_detail::*;
pub use songs::*;
