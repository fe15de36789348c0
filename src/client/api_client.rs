use reqwest::{Client, Url};
use thiserror::Error;

use crate::models::{Game, TeamStats};

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid base URL: {0}")]
    InvalidUrl(String),
}

#[derive(Debug, Clone)]
pub struct DashboardClient {
    http: Client,
    base_url: Url,
}

impl DashboardClient {
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        Self::with_http(Client::new(), base_url)
    }

    pub fn with_http(http: Client, base_url: &str) -> Result<Self, ClientError> {
        let base_url = Url::parse(base_url).map_err(|e| ClientError::InvalidUrl(e.to_string()))?;
        if base_url.cannot_be_a_base() {
            return Err(ClientError::InvalidUrl(base_url.to_string()));
        }
        Ok(Self { http, base_url })
    }

    /// Fetch the games currently in progress.
    pub async fn fetch_scores(&self) -> Result<Vec<Game>, ClientError> {
        let url = self.endpoint(&["api", "scores"])?;
        let resp = self.http.get(url).send().await?.error_for_status()?;

        let games: Vec<Game> = resp.json().await?;
        Ok(games)
    }

    /// Fetch a team's aggregates. The name is percent-encoded as a single
    /// path segment, so names with spaces or slashes are safe.
    pub async fn fetch_team_stats(&self, team: &str) -> Result<TeamStats, ClientError> {
        let url = self.endpoint(&["api", "stats", team])?;
        let resp = self.http.get(url).send().await?.error_for_status()?;

        let stats: TeamStats = resp.json().await?;
        Ok(stats)
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, ClientError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ClientError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_encodes_team_segment() {
        let client = DashboardClient::new("http://localhost:8000").unwrap();
        let url = client.endpoint(&["api", "stats", "Trail Blazers/West"]).unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:8000/api/stats/Trail%20Blazers%2FWest"
        );
    }

    #[test]
    fn test_endpoint_keeps_base_path_prefix() {
        let client = DashboardClient::new("http://example.com/dashboard/").unwrap();
        let url = client.endpoint(&["api", "scores"]).unwrap();
        assert_eq!(url.as_str(), "http://example.com/dashboard/api/scores");
    }

    #[test]
    fn test_rejects_non_base_url() {
        assert!(matches!(
            DashboardClient::new("mailto:ops@example.com"),
            Err(ClientError::InvalidUrl(_))
        ));
        assert!(DashboardClient::new("not a url").is_err());
    }
}
