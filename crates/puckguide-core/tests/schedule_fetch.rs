//! Schedule client tests against a mock HTTP server.

use chrono::NaiveDate;
use puckguide_core::{FetchError, ScheduleClient};

fn date(s: &str) -> NaiveDate {
    s.parse().unwrap()
}

fn week_body(days: &[(&str, u64)]) -> String {
    let days: Vec<String> = days
        .iter()
        .map(|(d, id)| {
            format!(
                r#"{{
                    "date": "{d}",
                    "games": [{{
                        "id": {id},
                        "venue": {{ "default": "Amalie Arena" }},
                        "startTimeUTC": "{d}T23:00:00Z",
                        "awayTeam": {{
                            "id": 6,
                            "commonName": {{ "default": "Bruins" }},
                            "placeName": {{ "default": "Boston" }},
                            "abbrev": "BOS"
                        }},
                        "homeTeam": {{
                            "id": 14,
                            "commonName": {{ "default": "Lightning" }},
                            "placeName": {{ "default": "Tampa Bay" }},
                            "abbrev": "TBL"
                        }}
                    }}]
                }}"#
            )
        })
        .collect();
    format!(r#"{{ "gameWeek": [{}] }}"#, days.join(","))
}

#[tokio::test]
async fn test_window_paginates_by_last_day_seen() {
    let mut server = mockito::Server::new_async().await;

    let first = server
        .mock("GET", "/v1/schedule/2024-01-01")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(week_body(&[("2024-01-01", 2023020001), ("2024-01-06", 2023020002)]))
        .create_async()
        .await;
    // Cursor advances to the day after the last day of the first response
    let second = server
        .mock("GET", "/v1/schedule/2024-01-07")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(week_body(&[("2024-01-08", 2023020003)]))
        .create_async()
        .await;

    let client = ScheduleClient::new(server.url());
    let days = client.fetch_window(date("2024-01-01"), 2).await.unwrap();

    first.assert_async().await;
    second.assert_async().await;

    assert_eq!(days.len(), 3);
    assert_eq!(days[0].date, date("2024-01-01"));
    assert_eq!(days[2].date, date("2024-01-08"));
    assert_eq!(days[2].games[0].id, 2023020003);
}

#[tokio::test]
async fn test_window_stops_when_week_missing() {
    let mut server = mockito::Server::new_async().await;

    let _m1 = server
        .mock("GET", "/v1/schedule/2024-06-01")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(week_body(&[("2024-06-01", 2023030411)]))
        .create_async()
        .await;
    // Season over: no gameWeek in the follow-up response
    let _m2 = server
        .mock("GET", "/v1/schedule/2024-06-02")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{ "numberOfGames": 0 }"#)
        .create_async()
        .await;

    let client = ScheduleClient::new(server.url());
    let days = client.fetch_window(date("2024-06-01"), 5).await.unwrap();
    assert_eq!(days.len(), 1);
}

#[tokio::test]
async fn test_bad_status_is_fatal() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("GET", "/v1/schedule/2024-01-01")
        .with_status(503)
        .create_async()
        .await;

    let client = ScheduleClient::new(server.url());
    let err = client.fetch_window(date("2024-01-01"), 2).await.unwrap_err();
    match err {
        FetchError::BadStatus { status, .. } => assert_eq!(status, 503),
        other => panic!("expected BadStatus, got {other}"),
    }
}

#[tokio::test]
async fn test_malformed_body_is_fatal() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("GET", "/v1/schedule/2024-01-01")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{ "gameWeek": [{ "date": "not-a-date" }] }"#)
        .create_async()
        .await;

    let client = ScheduleClient::new(server.url());
    let err = client.fetch_week(date("2024-01-01")).await.unwrap_err();
    assert!(matches!(err, FetchError::MalformedBody { .. }));
}

#[tokio::test]
async fn test_trailing_slash_in_base_url_tolerated() {
    let mut server = mockito::Server::new_async().await;
    let m = server
        .mock("GET", "/v1/schedule/2024-01-01")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{ "gameWeek": [] }"#)
        .create_async()
        .await;

    let client = ScheduleClient::new(format!("{}/", server.url()));
    client.fetch_week(date("2024-01-01")).await.unwrap();
    m.assert_async().await;
}
