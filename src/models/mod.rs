use serde::Deserialize;

/// Base URL for anime detail pages on MyAnimeList.
pub const MAL_ANIME_URL: &str = "https://myanimelist.net/anime";

/// Response envelope for the Jikan recommendations endpoint.
///
/// A body without a `data` key deserializes to an empty list, which the
/// fetcher reports the same way as an explicitly empty feed.
#[derive(Debug, Clone, Deserialize)]
pub struct RecommendationsResponse {
    #[serde(default)]
    pub data: Vec<RecommendationRecord>,
}

/// One recommendation: an ordered pair of anime presented as "if you watched
/// the first, watch the second".
#[derive(Debug, Clone, Deserialize)]
pub struct RecommendationRecord {
    pub entry: Vec<AnimeEntry>,
}

impl RecommendationRecord {
    /// The anime the recommendation starts from.
    ///
    /// The API contract guarantees at least two entries per record; a shorter
    /// `entry` array is a broken upstream payload and panics here rather than
    /// producing a half-empty panel.
    pub fn lead(&self) -> &AnimeEntry {
        &self.entry[0]
    }

    /// The anime recommended as the follow-up watch.
    pub fn followup(&self) -> &AnimeEntry {
        &self.entry[1]
    }
}

/// A single anime's identifying data: MyAnimeList id, display title, poster.
#[derive(Debug, Clone, Deserialize)]
pub struct AnimeEntry {
    pub mal_id: u64,
    pub title: String,
    pub images: EntryImages,
}

impl AnimeEntry {
    /// MyAnimeList detail page for this entry.
    pub fn detail_url(&self) -> String {
        format!("{}/{}", MAL_ANIME_URL, self.mal_id)
    }

    /// Poster URL, hotlinked straight from the API response.
    pub fn poster_url(&self) -> &str {
        &self.images.jpg.image_url
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct EntryImages {
    pub jpg: JpgImage,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JpgImage {
    pub image_url: String,
}
