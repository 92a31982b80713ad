//! Test utilities and shared test helpers for Yamato.
//!
//! Fixtures mirror real tracker responses; the one-shot responder lets the
//! stats client be exercised end to end without leaving the loopback interface.

use std::sync::Once;

static INIT: Once = Once::new();

/// Initialize logging for tests with a sensible default configuration.
/// This function is safe to call multiple times and will only initialize once.
pub fn init_test_logging() {
    INIT.call_once(|| {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug"));

        let _ = tracing_subscriber::fmt()
            .with_test_writer()
            .with_env_filter(filter)
            .try_init();
    });
}

/// Tracker API response bodies.
pub mod tracker_fixtures {
    /// Display values carried by the `na / 2017-pre1 / squad` entry of [`player_json`],
    /// in the order the overview embed shows them.
    pub const NA_SQUAD_DISPLAY_VALUES: [&str; 7] =
        ["120", "2.50", "8.3%", "10", "1,834", "24.5%", "412.8m"];

    /// A profile with two stats entries for the same season and mode.
    pub fn player_json() -> &'static str {
        r#"{
            "pubgTrackerId": 123456,
            "accountId": "account.0123456789abcdef",
            "platform": 5,
            "nickName": "playerA",
            "avatar": "https://steamcdn-a.akamaihd.net/avatars/ab/abcdef_full.jpg",
            "steamName": "playerA",
            "steamId": "76561198000000000",
            "lastUpdated": "2017-08-01T12:34:56.1234567Z",
            "timePlayed": 360000,
            "stats": [
                {
                    "region": "na",
                    "season": "2017-pre1",
                    "mode": "squad",
                    "stats": [
                        {"label": "Rounds Played", "field": "RoundsPlayed", "category": "Performance", "valueDec": 120.0, "value": "120", "displayValue": "120"},
                        {"label": "K/D Ratio", "field": "KillDeathRatio", "category": "Performance", "valueDec": 2.5, "value": "2.5", "displayValue": "2.50"},
                        {"label": "Win %", "field": "WinRatio", "category": "Performance", "valueDec": 8.3, "value": "8.3", "displayValue": "8.3%"},
                        {"label": "Wins", "field": "Wins", "category": "Performance", "valueDec": 10.0, "value": "10", "displayValue": "10"},
                        {"label": "Rating", "field": "Rating", "category": "Skill Rating", "valueDec": 1834.0, "value": "1834", "displayValue": "1,834"},
                        {"label": "Headshot Kill Ratio", "field": "HeadshotKillRatio", "category": "Combat", "valueDec": 24.5, "value": "24.5", "displayValue": "24.5%"},
                        {"label": "Longest Kill", "field": "LongestKill", "category": "Combat", "valueDec": 412.8, "value": "412.8", "displayValue": "412.8m"},
                        {"label": "Kills", "field": "Kills", "category": "Combat", "valueDec": 300.0, "value": "300", "displayValue": "300"}
                    ]
                },
                {
                    "region": "eu",
                    "season": "2017-pre1",
                    "mode": "squad",
                    "stats": [
                        {"label": "Rounds Played", "field": "RoundsPlayed", "category": "Performance", "valueDec": 4.0, "value": "4", "displayValue": "4"}
                    ]
                }
            ]
        }"#
    }

    /// Three matches out of chronological order, using both timestamp layouts.
    pub fn match_history_json() -> &'static str {
        r#"[
            {
                "Id": 1, "Updated": "2017-08-01T10:00:00.00", "UpdatedJS": "Tue Aug 01 2017",
                "Season": 1, "SeasonDisplay": "Early Access Season #1",
                "Match": 3, "MatchDisplay": "Squad", "Region": 1, "RegionDisplay": "North America",
                "Rounds": 2, "Wins": 0, "Kills": 3, "Assists": 1, "Top10": 1,
                "Rating": 1800.5, "RatingChange": -4.5, "RatingRank": 1000, "RatingRankChange": -10,
                "Kd": 1.5, "Damage": 420, "TimeSurvived": 1234.5,
                "WinRating": 1500, "WinRank": 900, "WinRatingChange": 2, "WinRatingRankChange": 3,
                "KillRating": 1200, "KillRank": 800, "KillRatingChange": 1, "KillRatingRankChange": 5,
                "MoveDistance": 3456.7
            },
            {
                "Id": 2, "Updated": "2017-08-02T09:00:00Z", "UpdatedJS": "Wed Aug 02 2017",
                "Season": 1, "SeasonDisplay": "Early Access Season #1",
                "Match": 3, "MatchDisplay": "Squad", "Region": 1, "RegionDisplay": "North America",
                "Rounds": 1, "Wins": 1, "Kills": 7, "Assists": 2, "Top10": 1,
                "Rating": 1834.0, "RatingChange": 33.5, "RatingRank": 950, "RatingRankChange": 50,
                "Kd": 7.0, "Damage": 880, "TimeSurvived": 1800.0,
                "WinRating": 1540, "WinRank": 850, "WinRatingChange": 40, "WinRatingRankChange": 50,
                "KillRating": 1250, "KillRank": 780, "KillRatingChange": 50, "KillRatingRankChange": 20,
                "MoveDistance": 5123.4
            },
            {
                "Id": 3, "Updated": "2017-07-31T23:59:59+09:00", "UpdatedJS": "Mon Jul 31 2017",
                "Season": 1, "SeasonDisplay": "Early Access Season #1",
                "Match": 1, "MatchDisplay": "Solo", "Region": 1, "RegionDisplay": "North America",
                "Rounds": 1, "Wins": 0, "Kills": 0, "Assists": 0, "Top10": 0,
                "Rating": 1805.0, "RatingChange": -1.0, "RatingRank": 1010, "RatingRankChange": -2,
                "Kd": 0.0, "Damage": 35, "TimeSurvived": 120.0,
                "WinRating": 1498, "WinRank": 905, "WinRatingChange": -2, "WinRatingRankChange": -1,
                "KillRating": 1199, "KillRank": 801, "KillRatingChange": -1, "KillRatingRankChange": -1,
                "MoveDistance": 210.0
            }
        ]"#
    }

    /// Steam identity lookup response.
    pub fn steam_info_json() -> &'static str {
        r#"{
            "AccountId": "account.0123456789abcdef",
            "Nickname": "playerA",
            "AvatarUrl": "https://steamcdn-a.akamaihd.net/avatars/ab/abcdef_full.jpg",
            "SteamId": "76561198000000000",
            "SteamName": "playerA",
            "State": "1",
            "InviteAllow": "all"
        }"#
    }
}

/// A loopback HTTP responder that answers exactly one request.
pub mod http_fixtures {
    use tokio::{
        io::{AsyncReadExt, AsyncWriteExt},
        net::TcpListener,
        sync::oneshot,
    };

    /// The raw request line and headers received by [`OneShotServer`].
    #[derive(Debug, Clone)]
    pub struct CapturedRequest {
        /// e.g. `GET /v2/profile/pc/playerA?region=na HTTP/1.1`
        pub request_line: String,
        /// Header names are lower-cased.
        pub headers: Vec<(String, String)>,
    }

    impl CapturedRequest {
        fn parse(raw: &str) -> Self {
            let mut lines = raw.split("\r\n");
            let request_line = lines.next().unwrap_or_default().to_string();
            let headers = lines
                .take_while(|line| !line.is_empty())
                .filter_map(|line| line.split_once(':'))
                .map(|(name, value)| (name.trim().to_ascii_lowercase(), value.trim().to_string()))
                .collect();
            Self {
                request_line,
                headers,
            }
        }

        /// Request target (path and query) from the request line.
        pub fn target(&self) -> &str {
            self.request_line.split(' ').nth(1).unwrap_or_default()
        }

        /// HTTP method from the request line.
        pub fn method(&self) -> &str {
            self.request_line.split(' ').next().unwrap_or_default()
        }

        /// First header value with the given (case-insensitive) name.
        pub fn header(&self, name: &str) -> Option<&str> {
            let name = name.to_ascii_lowercase();
            self.headers
                .iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| value.as_str())
        }
    }

    /// Handle to a responder spawned by [`serve_once`].
    pub struct OneShotServer {
        /// Base URL ending in `/v2/`, shaped like the production tracker base.
        pub base_url: String,
        captured: oneshot::Receiver<CapturedRequest>,
    }

    impl OneShotServer {
        /// Waits for the captured request; `None` if nothing connected.
        pub async fn request(self) -> Option<CapturedRequest> {
            self.captured.await.ok()
        }
    }

    /// Serves a single response with the given status and JSON body.
    pub async fn serve_once(
        status: u16,
        body: impl Into<String>,
    ) -> std::io::Result<OneShotServer> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let body = body.into();
        let (tx, rx) = oneshot::channel();

        tokio::spawn(async move {
            let Ok((mut stream, _)) = listener.accept().await else {
                return;
            };

            let mut buf = Vec::new();
            let mut chunk = [0u8; 1024];
            loop {
                match stream.read(&mut chunk).await {
                    Ok(0) | Err(_) => break,
                    Ok(n) => {
                        buf.extend_from_slice(&chunk[..n]);
                        if buf.windows(4).any(|w| w == b"\r\n\r\n") {
                            break;
                        }
                    }
                }
            }

            let captured = CapturedRequest::parse(&String::from_utf8_lossy(&buf));
            let reason = if status == 200 { "OK" } else { "Error" };
            let response = format!(
                "HTTP/1.1 {status} {reason}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            let _ = stream.write_all(response.as_bytes()).await;
            let _ = stream.shutdown().await;
            let _ = tx.send(captured);
        });

        Ok(OneShotServer {
            base_url: format!("http://{addr}/v2/"),
            captured: rx,
        })
    }

    /// A base URL nothing listens on, for connection failure paths.
    pub async fn unreachable_base_url() -> std::io::Result<String> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        drop(listener);
        Ok(format!("http://{addr}/v2/"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_logging_multiple_calls() {
        init_test_logging();
        init_test_logging();
    }

    #[test]
    fn test_fixtures_are_valid_json() {
        for body in [
            tracker_fixtures::player_json(),
            tracker_fixtures::match_history_json(),
            tracker_fixtures::steam_info_json(),
        ] {
            assert!(serde_json::from_str::<serde_json::Value>(body).is_ok());
        }
    }

    #[tokio::test]
    async fn test_serve_once_captures_request() {
        use tokio::io::{AsyncReadExt, AsyncWriteExt};

        let server = http_fixtures::serve_once(200, "{}").await.unwrap();
        let addr = server
            .base_url
            .trim_start_matches("http://")
            .trim_end_matches("/v2/")
            .to_string();

        let mut stream = tokio::net::TcpStream::connect(addr).await.unwrap();
        stream
            .write_all(b"GET /v2/search?steamId=1 HTTP/1.1\r\nHost: x\r\nTRN-Api-Key: k\r\n\r\n")
            .await
            .unwrap();
        let mut response = String::new();
        stream.read_to_string(&mut response).await.unwrap();
        assert!(response.starts_with("HTTP/1.1 200 OK"));
        assert!(response.ends_with("{}"));

        let captured = server.request().await.unwrap();
        assert_eq!(captured.method(), "GET");
        assert_eq!(captured.target(), "/v2/search?steamId=1");
        assert_eq!(captured.header("trn-api-key"), Some("k"));
    }
}
