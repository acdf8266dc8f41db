// Derived vote state and the cached playlist menu.

/// How many playlists the membership menu pulls on its one fetch.
pub const PLAYLIST_MENU_LIMIT: u32 = 100;
pub const PLAYLIST_MENU_SORT: &str = "name";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoteDirection {
    Up,
    Down,
}

impl VoteDirection {
    pub fn score(self) -> i32 {
        match self {
            Self::Up => 1,
            Self::Down => -1,
        }
    }
}

/// The score to submit when a vote button is pressed: pressing the side the
/// user already voted retracts it (0), anything else casts that side.
pub fn next_vote_score(current: Option<&SongVote>, direction: VoteDirection) -> i32 {
    match current {
        Some(vote) if vote.score == direction.score() => 0,
        _ => direction.score(),
    }
}

/// What a finished vote submission reports to the host.
#[derive(Debug, Clone, PartialEq)]
pub enum VoteEvent {
    /// A nonzero score landed; carries the refreshed vote record.
    Added(SongVote),
    /// A retraction landed; carries the vote as it stood before.
    Removed(SongVote),
}

/// Decides the event for a submitted score: nonzero scores report the vote
/// the refreshed song came back with, a retraction reports the prior vote.
/// Nothing is reported when the relevant record is missing.
pub fn vote_event(
    score: i32,
    refreshed: Option<SongVote>,
    previous: Option<SongVote>,
) -> Option<VoteEvent> {
    if score != 0 {
        refreshed.map(VoteEvent::Added)
    } else {
        previous.map(VoteEvent::Removed)
    }
}

/// Everything the vote controls render, recomputed from (user, song).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct VoteView {
    /// The signed-in user's own vote, if any.
    pub vote: Option<SongVote>,
    /// Voter names joined with ", ", in the order the server listed them.
    pub up_voters: String,
    pub down_voters: String,
}

impl VoteView {
    pub fn derive(user: Option<&User>, song: Option<&Song>) -> Self {
        let (Some(user), Some(song)) = (user, song) else {
            return Self::default();
        };
        Self {
            vote: song.votes.iter().find(|v| v.user.id == user.id).cloned(),
            up_voters: joined_voter_names(&song.votes, 1),
            down_voters: joined_voter_names(&song.votes, -1),
        }
    }

    pub fn voted_up(&self) -> bool {
        matches!(&self.vote, Some(vote) if vote.score == 1)
    }

    pub fn voted_down(&self) -> bool {
        matches!(&self.vote, Some(vote) if vote.score == -1)
    }
}

fn joined_voter_names(votes: &[SongVote], score: i32) -> String {
    votes
        .iter()
        .filter(|v| v.score == score)
        .map(|v| v.user.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Playlist menu state: fetched once per component instance, selection flags
/// recomputed against the song each time the menu opens, reset by a create.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum PlaylistCache {
    #[default]
    Unloaded,
    Loaded(Vec<Playlist>),
}

impl PlaylistCache {
    pub fn is_unloaded(&self) -> bool {
        matches!(self, Self::Unloaded)
    }

    pub fn entries(&self) -> &[Playlist] {
        match self {
            Self::Unloaded => &[],
            Self::Loaded(entries) => entries,
        }
    }

    pub fn load(&mut self, playlists: Vec<Playlist>, song: &Song) {
        *self = Self::Loaded(playlists);
        self.mark_selected(song);
    }

    pub fn mark_selected(&mut self, song: &Song) {
        if let Self::Loaded(entries) = self {
            for entry in entries.iter_mut() {
                entry.is_selected = song.playlists.iter().any(|p| p.id == entry.id);
            }
        }
    }

    pub fn set_selected(&mut self, playlist_id: i64, selected: bool) {
        if let Self::Loaded(entries) = self {
            if let Some(entry) = entries.iter_mut().find(|p| p.id == playlist_id) {
                entry.is_selected = selected;
            }
        }
    }

    /// Drop the cached page; the next menu open refetches.
    pub fn invalidate(&mut self) {
        *self = Self::Unloaded;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: i64, name: &str) -> User {
        User {
            id,
            name: name.into(),
        }
    }

    fn vote(id: i64, score: i32, voter: User) -> SongVote {
        SongVote {
            id,
            score,
            user: voter,
        }
    }

    fn song_with_votes(votes: Vec<SongVote>) -> Song {
        Song {
            catalog_id: 1,
            title: "Fixture".into(),
            votes,
            ..Default::default()
        }
    }

    fn playlist(id: i64, name: &str) -> Playlist {
        Playlist {
            id,
            name: name.into(),
            is_selected: false,
        }
    }

    #[test]
    fn pressing_a_fresh_side_casts_it() {
        assert_eq!(next_vote_score(None, VoteDirection::Up), 1);
        assert_eq!(next_vote_score(None, VoteDirection::Down), -1);

        let up = vote(1, 1, user(7, "ada"));
        assert_eq!(next_vote_score(Some(&up), VoteDirection::Down), -1);
        let down = vote(1, -1, user(7, "ada"));
        assert_eq!(next_vote_score(Some(&down), VoteDirection::Up), 1);
    }

    #[test]
    fn pressing_the_same_side_retracts() {
        let up = vote(1, 1, user(7, "ada"));
        assert_eq!(next_vote_score(Some(&up), VoteDirection::Up), 0);
        let down = vote(2, -1, user(7, "ada"));
        assert_eq!(next_vote_score(Some(&down), VoteDirection::Down), 0);
    }

    #[test]
    fn switching_sides_reports_added_with_the_refreshed_vote() {
        let song = song_with_votes(vec![
            vote(1, 1, user(7, "ada")),
            vote(2, -1, user(8, "lin")),
        ]);
        let me = user(7, "ada");
        let view = VoteView::derive(Some(&me), Some(&song));

        let score = next_vote_score(view.vote.as_ref(), VoteDirection::Down);
        assert_eq!(score, -1);

        let refreshed = vote(1, -1, me);
        assert_eq!(
            vote_event(score, Some(refreshed.clone()), view.vote),
            Some(VoteEvent::Added(refreshed))
        );
    }

    #[test]
    fn retracting_reports_removed_with_the_prior_vote() {
        let prior = vote(1, 1, user(7, "ada"));
        let score = next_vote_score(Some(&prior), VoteDirection::Up);
        assert_eq!(score, 0);

        assert_eq!(
            vote_event(score, None, Some(prior.clone())),
            Some(VoteEvent::Removed(prior))
        );
    }

    #[test]
    fn no_event_without_a_vote_to_report() {
        assert_eq!(vote_event(1, None, None), None);
        assert_eq!(vote_event(0, None, None), None);
    }

    #[test]
    fn derive_finds_own_vote_and_joins_names_in_order() {
        let song = song_with_votes(vec![
            vote(1, 1, user(7, "ada")),
            vote(2, -1, user(8, "lin")),
            vote(3, 1, user(9, "maya")),
        ]);
        let me = user(7, "ada");
        let view = VoteView::derive(Some(&me), Some(&song));

        assert_eq!(view.vote.as_ref().map(|v| v.id), Some(1));
        assert!(view.voted_up());
        assert!(!view.voted_down());
        assert_eq!(view.up_voters, "ada, maya");
        assert_eq!(view.down_voters, "lin");
    }

    #[test]
    fn derive_without_own_vote_keeps_the_tallies() {
        let song = song_with_votes(vec![vote(1, 1, user(8, "lin"))]);
        let me = user(7, "ada");
        let view = VoteView::derive(Some(&me), Some(&song));

        assert!(view.vote.is_none());
        assert_eq!(view.up_voters, "lin");
        assert_eq!(view.down_voters, "");
    }

    #[test]
    fn derive_clears_when_user_or_song_is_absent() {
        let song = song_with_votes(vec![vote(1, 1, user(7, "ada"))]);
        let me = user(7, "ada");

        assert_eq!(VoteView::derive(None, Some(&song)), VoteView::default());
        assert_eq!(VoteView::derive(Some(&me), None), VoteView::default());
    }

    #[test]
    fn cache_marks_membership_on_load_and_reopen() {
        let mut song = song_with_votes(Vec::new());
        song.playlists = vec![playlist(3, "Evening")];

        let mut cache = PlaylistCache::default();
        assert!(cache.is_unloaded());
        assert!(cache.entries().is_empty());

        cache.load(vec![playlist(3, "Evening"), playlist(4, "Gym")], &song);
        assert!(!cache.is_unloaded());
        assert!(cache.entries()[0].is_selected);
        assert!(!cache.entries()[1].is_selected);

        // A different song in focus re-flags the same cached page.
        song.playlists = vec![playlist(4, "Gym")];
        cache.mark_selected(&song);
        assert!(!cache.entries()[0].is_selected);
        assert!(cache.entries()[1].is_selected);
    }

    #[test]
    fn cache_flips_one_entry_after_a_mutation() {
        let song = song_with_votes(Vec::new());
        let mut cache = PlaylistCache::default();
        cache.load(vec![playlist(3, "Evening")], &song);

        cache.set_selected(3, true);
        assert!(cache.entries()[0].is_selected);
        cache.set_selected(3, false);
        assert!(!cache.entries()[0].is_selected);
    }

    #[test]
    fn invalidate_forces_a_refetch() {
        let song = song_with_votes(Vec::new());
        let mut cache = PlaylistCache::default();
        cache.load(vec![playlist(3, "Evening")], &song);

        cache.invalidate();
        assert!(cache.is_unloaded());
        assert!(cache.entries().is_empty());
    }
}
