use chrono::Duration;
use releasebot_arr_api::{
    fetch_for_date, fetch_today, ArrType, EpisodeRelease, FetchError, InstanceConfig,
    MovieRelease, Release, ReleaseClock, ReleaseType,
};
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

mod common;

const UTC: ReleaseClock = ReleaseClock::Zone(chrono_tz::UTC);

#[tokio::test]
async fn radarr_fetch_returns_only_movies_released_today() {
    // Arrange
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v3/calendar"))
        .and(header("X-Api-Key", common::API_KEY))
        .and(query_param("start", "2024-03-14"))
        .and(query_param("end", "2024-03-17"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "id": 1,
                "title": "Dune: Part Two",
                "year": 2024,
                "tmdbId": 693134,
                "monitored": true,
                "inCinemas": "2024-03-01T00:00:00Z",
                "digitalRelease": "2024-03-15T00:00:00Z"
            },
            {
                "id": 2,
                "title": "Tomorrow's Movie",
                "year": 2024,
                "tmdbId": 2,
                "monitored": true,
                "digitalRelease": "2024-03-16T00:00:00Z"
            },
            {
                "id": 3,
                "title": "Unmonitored Movie",
                "year": 2024,
                "tmdbId": 3,
                "monitored": false,
                "digitalRelease": "2024-03-15T00:00:00Z"
            }
        ])))
        .expect(1)
        .mount(&server)
        .await;
    let instance = common::instance(&server, "Movies", ArrType::Radarr);

    // Act
    let actual = fetch_for_date(&common::client(), &instance, &UTC, common::today()).await;

    // Assert
    assert!(!actual.failed);
    assert_eq!("Movies", actual.label);
    assert_eq!(
        vec![Release::Movie(MovieRelease {
            title: String::from("Dune: Part Two"),
            year: Some(2024),
            release_type: ReleaseType::Digital,
            tmdb_id: Some(693134),
            instance_label: String::from("Movies"),
        })],
        actual.releases
    );
}

#[tokio::test]
async fn sonarr_fetch_returns_episodes_in_calendar_order() {
    // Arrange
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v3/calendar"))
        .and(query_param("includeSeries", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "id": 10,
                "seriesId": 1,
                "seasonNumber": 2,
                "episodeNumber": 5,
                "title": "Second",
                "airDate": "2024-03-15",
                "monitored": true,
                "series": { "id": 1, "title": "Foo", "tvdbId": 1234 }
            },
            {
                "id": 9,
                "seriesId": 1,
                "seasonNumber": 2,
                "episodeNumber": 4,
                "title": "First",
                "airDate": "2024-03-15",
                "monitored": true,
                "series": { "id": 1, "title": "Foo", "tvdbId": 1234 }
            },
            {
                "id": 11,
                "seriesId": 2,
                "seasonNumber": 1,
                "episodeNumber": 1,
                "title": "Not Today",
                "airDate": "2024-03-16",
                "monitored": true,
                "series": { "id": 2, "title": "Bar", "tvdbId": 99 }
            }
        ])))
        .mount(&server)
        .await;
    let instance = common::instance(&server, "TV", ArrType::Sonarr);

    // Act
    let actual = fetch_for_date(&common::client(), &instance, &UTC, common::today()).await;

    // Assert
    let titles: Vec<&str> = actual
        .episodes()
        .map(|e| e.episode_title.as_str())
        .collect();
    assert_eq!(vec!["Second", "First"], titles);
    assert_eq!(0, actual.movies().count());
}

#[tokio::test]
async fn sonarr_fetch_looks_up_missing_series_once() {
    // Arrange
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v3/calendar"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "id": 1,
                "seriesId": 5,
                "seasonNumber": 1,
                "episodeNumber": 1,
                "title": "Pilot",
                "airDate": "2024-03-15"
            },
            {
                "id": 2,
                "seriesId": 5,
                "seasonNumber": 1,
                "episodeNumber": 2,
                "title": "Second",
                "airDate": "2024-03-15"
            }
        ])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v3/series/5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 5,
            "title": "Looked Up",
            "tvdbId": 555
        })))
        .expect(1)
        .mount(&server)
        .await;
    let instance = common::instance(&server, "TV", ArrType::Sonarr);

    // Act
    let actual = fetch_for_date(&common::client(), &instance, &UTC, common::today()).await;

    // Assert
    let episodes: Vec<&EpisodeRelease> = actual.episodes().collect();
    assert_eq!(2, episodes.len());
    assert!(episodes
        .iter()
        .all(|e| e.series_title == "Looked Up" && e.tvdb_id == Some(555)));
}

#[tokio::test]
async fn sonarr_fetch_keeps_episodes_when_series_lookup_fails() {
    // Arrange
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v3/calendar"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "id": 1,
                "seriesId": 5,
                "seasonNumber": 1,
                "episodeNumber": 1,
                "title": "Pilot",
                "airDate": "2024-03-15",
                "seriesTitle": "Fallback Title"
            }
        ])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v3/series/5"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    let instance = common::instance(&server, "TV", ArrType::Sonarr);

    // Act
    let actual = fetch_for_date(&common::client(), &instance, &UTC, common::today()).await;

    // Assert
    assert!(!actual.failed);
    let episode = actual.episodes().next().unwrap();
    assert_eq!("Fallback Title", episode.series_title);
}

#[tokio::test]
async fn fetch_returns_failed_empty_result_given_error_status() {
    // Arrange
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v3/calendar"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;
    let instance = common::instance(&server, "Movies", ArrType::Radarr);

    // Act
    let actual = fetch_for_date(&common::client(), &instance, &UTC, common::today()).await;

    // Assert
    assert!(actual.failed);
    assert!(actual.is_empty());
    assert_eq!("Movies", actual.label);
}

#[tokio::test]
async fn fetch_returns_failed_empty_result_given_invalid_body() {
    // Arrange
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v3/calendar"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>login</html>"))
        .mount(&server)
        .await;
    let instance = common::instance(&server, "TV", ArrType::Sonarr);

    // Act
    let actual = fetch_for_date(&common::client(), &instance, &UTC, common::today()).await;

    // Assert
    assert!(actual.failed);
    assert!(actual.is_empty());
}

#[tokio::test]
async fn sonarr_fetch_asks_for_a_day_either_side_and_keeps_late_evening_episodes() {
    // Arrange
    let new_york = ReleaseClock::Zone(chrono_tz::America::New_York);
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v3/calendar"))
        .and(query_param("start", "2024-03-14"))
        .and(query_param("end", "2024-03-17"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "id": 1,
                "seriesId": 1,
                "seasonNumber": 1,
                "episodeNumber": 1,
                "title": "Yesterday",
                "airDate": "2024-03-14",
                "airDateUtc": "2024-03-15T02:00:00Z",
                "series": { "id": 1, "title": "Foo", "tvdbId": 1 }
            },
            {
                "id": 2,
                "seriesId": 1,
                "seasonNumber": 1,
                "episodeNumber": 2,
                "title": "Prime Time",
                "airDate": "2024-03-15",
                "airDateUtc": "2024-03-16T01:00:00Z",
                "series": { "id": 1, "title": "Foo", "tvdbId": 1 }
            }
        ])))
        .expect(1)
        .mount(&server)
        .await;
    let instance = common::instance(&server, "TV", ArrType::Sonarr);

    // Act
    let actual = fetch_for_date(&common::client(), &instance, &new_york, common::today()).await;

    // Assert
    assert!(!actual.failed);
    let titles: Vec<&str> = actual
        .episodes()
        .map(|e| e.episode_title.as_str())
        .collect();
    assert_eq!(vec!["Prime Time"], titles);
}

#[tokio::test]
async fn fetch_returns_failed_empty_result_given_unreachable_instance() {
    // Arrange
    let instance = InstanceConfig::new("Gone", common::refused_url(), common::API_KEY, ArrType::Radarr);

    // Act
    let actual = fetch_for_date(&common::client(), &instance, &UTC, common::today()).await;

    // Assert
    assert!(actual.failed);
    assert!(actual.is_empty());
}

#[tokio::test]
async fn radarr_calendar_returns_request_error_given_refused_connection() {
    // Arrange
    let instance = InstanceConfig::new("Gone", common::refused_url(), common::API_KEY, ArrType::Radarr);
    let today = common::today();

    // Act
    let actual = common::client()
        .radarr_calendar(&instance, today, today + Duration::days(1))
        .await;

    // Assert
    assert!(matches!(actual, Err(FetchError::Request { .. })));
}

#[tokio::test]
async fn fetch_today_queries_calendar_around_current_date() {
    // Arrange
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v3/calendar"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;
    let instance = common::instance(&server, "Movies", ArrType::Radarr);
    let before = UTC.today();

    // Act
    let actual = fetch_today(&common::client(), &instance, &UTC).await;

    // Assert
    let after = UTC.today();
    assert!(!actual.failed);
    assert!(actual.is_empty());
    let requests = server.received_requests().await.unwrap();
    let start = requests[0]
        .url
        .query_pairs()
        .find(|(k, _)| k == "start")
        .map(|(_, v)| v.into_owned())
        .unwrap();
    let expected: Vec<String> = [before, after]
        .iter()
        .map(|d| (*d - Duration::days(1)).format("%Y-%m-%d").to_string())
        .collect();
    assert!(expected.contains(&start));
}
