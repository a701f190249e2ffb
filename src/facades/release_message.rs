//! Formats the releases from every instance into one Discord message.

use chrono::NaiveDate;
use releasebot_arr_api::{EpisodeRelease, InstanceReleases, MovieRelease};
use releasebot_discord_client::message::{
    markdown_link, MessageData, MessageDataBuilder, MessageDataPart, SectionHeadingLevel,
};
use tracing::debug;

const TMDB_MOVIE_URL: &str = "https://www.themoviedb.org/movie/";
const TVDB_SERIES_URL: &str = "https://thetvdb.com/series/";
const NO_RELEASES: &str = "No monitored content is being released today.";

/// Build the notification for `today` from per-instance results given in configured order.
///
/// Movies and TV sections are only present when they have content; instances without releases
/// are left out. Episodes are grouped by series within each instance, series in the order they
/// first appear. When nothing at all is releasing, a short notice is sent instead.
pub fn build_release_message(today: NaiveDate, results: &[InstanceReleases]) -> MessageData {
    let mut builder = MessageDataBuilder::new();
    builder.add_heading(
        &SectionHeadingLevel::One,
        &format!("Media Releases for {}", today.format("%Y-%m-%d")),
    );
    builder.break_character();

    let has_movies = add_movies(&mut builder, results);
    let has_episodes = add_episodes(&mut builder, results);
    if !has_movies && !has_episodes {
        builder.add_line(NO_RELEASES);
        builder.break_character();
    }

    let failed: Vec<&str> = results
        .iter()
        .filter(|r| r.failed)
        .map(|r| r.label.as_str())
        .collect();
    if !failed.is_empty() {
        builder.add_line(&format!("*Could not check: {}*", failed.join(", ")));
    }

    let message = builder.to_message_data();
    debug!(characters = message.char_count(), "Built release message.");
    message
}

fn add_movies(builder: &mut MessageDataBuilder, results: &[InstanceReleases]) -> bool {
    let with_movies: Vec<(&str, Vec<&MovieRelease>)> = results
        .iter()
        .map(|r| (r.label.as_str(), r.movies().collect::<Vec<_>>()))
        .filter(|(_, movies)| !movies.is_empty())
        .collect();
    if with_movies.is_empty() {
        return false;
    }

    builder.add_heading(&SectionHeadingLevel::Two, "Movies");
    builder.break_character();
    for (label, movies) in with_movies {
        builder.add_heading(&SectionHeadingLevel::Three, label);
        for movie in movies {
            builder.add_list_item(0, &format_movie(movie));
        }
        builder.break_character();
    }

    true
}

fn format_movie(movie: &MovieRelease) -> String {
    let mut result = String::from(&movie.title);
    if let Some(year) = movie.year {
        result.push_str(&format!(" ({})", year));
    }
    result.push_str(" - ");
    result.push_str(movie.release_type.as_ref());
    if let Some(tmdb_id) = movie.tmdb_id {
        result.push_str(" - ");
        result.push_str(&markdown_link(
            "TMDB",
            &format!("{}{}", TMDB_MOVIE_URL, tmdb_id),
        ));
    }

    result
}

fn add_episodes(builder: &mut MessageDataBuilder, results: &[InstanceReleases]) -> bool {
    let with_episodes: Vec<(&str, Vec<SeriesEpisodes>)> = results
        .iter()
        .map(|r| (r.label.as_str(), group_by_series(r.episodes())))
        .filter(|(_, series)| !series.is_empty())
        .collect();
    if with_episodes.is_empty() {
        return false;
    }

    builder.add_heading(&SectionHeadingLevel::Two, "TV Shows");
    builder.break_character();
    for (label, series) in with_episodes {
        builder.add_heading(&SectionHeadingLevel::Three, label);
        for s in series {
            builder.add_message_part(s);
        }
        builder.break_character();
    }

    true
}

/// One series heading with the episodes beneath it.
struct SeriesEpisodes<'a> {
    title: &'a str,
    tvdb_id: Option<u32>,
    episodes: Vec<&'a EpisodeRelease>,
}

impl SeriesEpisodes<'_> {
    /// Series are told apart by TVDB id; the title is only used when either id is unknown.
    fn is_same_series(&self, episode: &EpisodeRelease) -> bool {
        match (self.tvdb_id, episode.tvdb_id) {
            (Some(id), Some(other)) => id == other,
            _ => self.title == episode.series_title,
        }
    }
}

impl MessageDataPart for SeriesEpisodes<'_> {
    fn to_markdown(&self, break_character: &str) -> String {
        let mut result = format!("- **{}**", self.title);
        if let Some(tvdb_id) = self.tvdb_id {
            result.push_str(" - ");
            result.push_str(&markdown_link(
                "TVDB",
                &format!("{}{}", TVDB_SERIES_URL, tvdb_id),
            ));
        }
        result.push_str(break_character);

        for episode in &self.episodes {
            result.push_str(&format!(
                "  - S{:0>2}E{:0>2} - {} ({}){}",
                episode.season_number,
                episode.episode_number,
                episode.episode_title,
                episode.air_date.format("%Y-%m-%d"),
                break_character
            ));
        }

        result
    }
}

fn group_by_series<'a>(
    episodes: impl Iterator<Item = &'a EpisodeRelease>,
) -> Vec<SeriesEpisodes<'a>> {
    let mut series: Vec<SeriesEpisodes<'a>> = Vec::new();
    for episode in episodes {
        match series.iter_mut().find(|s| s.is_same_series(episode)) {
            Some(s) => {
                s.tvdb_id = s.tvdb_id.or(episode.tvdb_id);
                s.episodes.push(episode);
            }
            None => series.push(SeriesEpisodes {
                title: &episode.series_title,
                tvdb_id: episode.tvdb_id,
                episodes: vec![episode],
            }),
        }
    }

    series
}
