//! Static mood media catalog.
//!
//! Each category maps to a curated playlist and cover image that the
//! presentation layer shows once a quiz completes. Lookups that miss the
//! catalog fall back to a default playlist rather than failing.

use super::MoodCategory;

/// A mood's display name and associated media.
#[derive(Debug, Clone)]
pub struct MoodMedia {
    /// Category this entry belongs to
    pub mood: MoodCategory,
    /// Display name
    pub name: &'static str,
    /// Curated playlist for the mood
    pub playlist_url: &'static str,
    /// Playlist cover image
    pub cover: &'static str,
}

/// Playlist served when a mood has no catalog entry.
pub const DEFAULT_PLAYLIST_URL: &str = "https://open.spotify.com/playlist/default";

/// Cover served when a mood has no catalog entry.
pub const DEFAULT_COVER: &str = "/static/default_cover.svg";

pub const MEDIA_EXCITED: MoodMedia = MoodMedia {
    mood: MoodCategory::Excited,
    name: "Excited",
    playlist_url: "https://open.spotify.com/playlist/37i9dQZF1DX0vHZ8elq0UK",
    cover: "/static/covers/excited.svg",
};

pub const MEDIA_HAPPY: MoodMedia = MoodMedia {
    mood: MoodCategory::Happy,
    name: "Happy",
    playlist_url: "https://open.spotify.com/playlist/37i9dQZF1DXdPec7aLTmlC",
    cover: "/static/covers/happy.svg",
};

pub const MEDIA_PEACEFUL: MoodMedia = MoodMedia {
    mood: MoodCategory::Peaceful,
    name: "Peaceful",
    playlist_url: "https://open.spotify.com/playlist/37i9dQZF1DWZqd5JICZI0u",
    cover: "/static/covers/peaceful.svg",
};

pub const MEDIA_ANXIOUS: MoodMedia = MoodMedia {
    mood: MoodCategory::Anxious,
    name: "Anxious",
    playlist_url: "https://open.spotify.com/playlist/37i9dQZF1DWXe9gFZP0gtP",
    cover: "/static/covers/anxious.svg",
};

pub const MEDIA_SAD: MoodMedia = MoodMedia {
    mood: MoodCategory::Sad,
    name: "Sad",
    playlist_url: "https://open.spotify.com/playlist/37i9dQZF1DX7qK8ma5wgG1",
    cover: "/static/covers/sad.svg",
};

pub const MEDIA_FRUSTRATED: MoodMedia = MoodMedia {
    mood: MoodCategory::Frustrated,
    name: "Frustrated",
    playlist_url: "https://open.spotify.com/playlist/37i9dQZF1DX3YSRoSdA634",
    cover: "/static/covers/frustrated.svg",
};

pub const MEDIA_HOPELESS: MoodMedia = MoodMedia {
    mood: MoodCategory::Hopeless,
    name: "Hopeless",
    playlist_url: "https://open.spotify.com/playlist/37i9dQZF1DWSqBruwoIXkA",
    cover: "/static/covers/hopeless.svg",
};

/// Full catalog, in band order.
pub const MOOD_MEDIA: &[MoodMedia] = &[
    MEDIA_EXCITED,
    MEDIA_HAPPY,
    MEDIA_PEACEFUL,
    MEDIA_ANXIOUS,
    MEDIA_SAD,
    MEDIA_FRUSTRATED,
    MEDIA_HOPELESS,
];

/// Look up the catalog entry for a mood.
pub fn media_for(mood: MoodCategory) -> Option<&'static MoodMedia> {
    MOOD_MEDIA.iter().find(|m| m.mood == mood)
}
