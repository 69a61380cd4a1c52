use reqwest::{Response, StatusCode, Url};
use types_rs::voting::{Candidate, DashboardData, Voter};

use crate::result::{Error, Result};

pub const CANDIDATES_PATH: &str = "/candidatos";
pub const VOTERS_PATH: &str = "/votantes";

/// A client for the candidate and voter service.
#[derive(Debug, Clone)]
pub struct Client {
    base_url: Url,
    http: reqwest::Client,
}

impl Client {
    /// Create a new client with the given base URL.
    ///
    /// # Example
    ///
    /// ```
    /// # use voting_dashboard_client::Client;
    /// let base_url = "http://localhost:3000".parse().unwrap();
    /// let client = Client::new(base_url);
    /// ```
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            http: reqwest::Client::new(),
        }
    }

    /// Create a new client to connect to the service running on localhost.
    pub fn localhost() -> Self {
        Self::new(
            "http://localhost:3000"
                .parse()
                .expect("hardcoded URL is valid"),
        )
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Get all candidates.
    pub async fn get_candidates(&self) -> Result<Vec<Candidate>> {
        let response = self.get(CANDIDATES_PATH).await?;
        let response = ensure_success(response, |status_code| Error::CandidatesFetch {
            status_code,
        })?;
        Ok(response.json().await?)
    }

    /// Get all voters.
    pub async fn get_voters(&self) -> Result<Vec<Voter>> {
        let response = self.get(VOTERS_PATH).await?;
        let response =
            ensure_success(response, |status_code| Error::VotersFetch { status_code })?;
        Ok(response.json().await?)
    }

    /// Get candidates and voters, requesting both at once.
    ///
    /// The candidates response is checked first, so if both requests fail
    /// the candidates error is the one returned. Neither body is decoded
    /// until both statuses are known to be successful.
    ///
    /// # Example
    ///
    /// ```
    /// # use voting_dashboard_client::Client;
    /// # async {
    /// # let client = Client::localhost();
    /// let data = client.get_dashboard().await.unwrap();
    /// println!("{} candidates", data.candidates.len());
    /// # };
    /// ```
    pub async fn get_dashboard(&self) -> Result<DashboardData> {
        let (candidates, voters) =
            futures::join!(self.get(CANDIDATES_PATH), self.get(VOTERS_PATH));

        let candidates = ensure_success(candidates?, |status_code| Error::CandidatesFetch {
            status_code,
        })?;
        let voters = ensure_success(voters?, |status_code| Error::VotersFetch { status_code })?;

        let data = DashboardData {
            candidates: candidates.json().await?,
            voters: voters.json().await?,
        };
        log::debug!(
            "fetched {} candidates and {} voters from {}",
            data.candidates.len(),
            data.voters.len(),
            self.base_url
        );
        Ok(data)
    }

    async fn get(&self, path: &str) -> Result<Response> {
        let url = self.base_url.join(path)?;
        log::debug!("GET {url}");
        Ok(self.http.get(url).send().await?)
    }
}

fn ensure_success(response: Response, error: impl FnOnce(StatusCode) -> Error) -> Result<Response> {
    let status_code = response.status();
    if status_code.is_success() {
        Ok(response)
    } else {
        log::warn!("{} responded with {status_code}", response.url());
        Err(error(status_code))
    }
}

#[cfg(test)]
mod tests {
    use axum::{http::StatusCode as ServerStatus, routing::get, Json, Router};
    use pretty_assertions::assert_eq;
    use types_rs::voting::{seed_candidates, seed_voters};

    use super::*;

    async fn serve(router: Router) -> Url {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{addr}").parse().unwrap()
    }

    fn healthy_router() -> Router {
        Router::new()
            .route(CANDIDATES_PATH, get(|| async { Json(seed_candidates()) }))
            .route(VOTERS_PATH, get(|| async { Json(seed_voters()) }))
    }

    #[tokio::test]
    async fn test_get_dashboard() {
        let client = Client::new(serve(healthy_router()).await);
        let data = client.get_dashboard().await.unwrap();
        assert_eq!(data, DashboardData::seed());
    }

    #[tokio::test]
    async fn test_get_candidates_and_voters_separately() {
        let client = Client::new(serve(healthy_router()).await);
        assert_eq!(client.get_candidates().await.unwrap(), seed_candidates());
        assert_eq!(client.get_voters().await.unwrap(), seed_voters());
    }

    #[tokio::test]
    async fn test_candidates_failure() {
        let router = Router::new()
            .route(
                CANDIDATES_PATH,
                get(|| async { ServerStatus::INTERNAL_SERVER_ERROR }),
            )
            .route(VOTERS_PATH, get(|| async { Json(seed_voters()) }));
        let client = Client::new(serve(router).await);

        let error = client.get_dashboard().await.unwrap_err();
        assert!(matches!(
            error,
            Error::CandidatesFetch { status_code } if status_code == StatusCode::INTERNAL_SERVER_ERROR
        ));
        assert_eq!(error.user_message(), "Erro ao carregar candidatos");
    }

    #[tokio::test]
    async fn test_voters_failure() {
        let router = Router::new()
            .route(CANDIDATES_PATH, get(|| async { Json(seed_candidates()) }))
            .route(VOTERS_PATH, get(|| async { ServerStatus::NOT_FOUND }));
        let client = Client::new(serve(router).await);

        let error = client.get_dashboard().await.unwrap_err();
        assert!(matches!(error, Error::VotersFetch { .. }));
        assert_eq!(error.user_message(), "Erro ao carregar votantes");
    }

    #[tokio::test]
    async fn test_candidates_error_wins_when_both_fail() {
        // no routes at all, so both requests get a 404
        let client = Client::new(serve(Router::new()).await);

        let error = client.get_dashboard().await.unwrap_err();
        assert!(matches!(
            error,
            Error::CandidatesFetch { status_code } if status_code == StatusCode::NOT_FOUND
        ));
    }

    #[tokio::test]
    async fn test_malformed_body() {
        let router = Router::new()
            .route(CANDIDATES_PATH, get(|| async { "not json" }))
            .route(VOTERS_PATH, get(|| async { Json(seed_voters()) }));
        let client = Client::new(serve(router).await);

        let error = client.get_dashboard().await.unwrap_err();
        assert!(matches!(error, Error::Reqwest(_)));
        assert!(!error.user_message().is_empty());
    }

    #[tokio::test]
    async fn test_unreachable_service() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = Client::new(format!("http://{addr}").parse().unwrap());
        let error = client.get_candidates().await.unwrap_err();
        assert!(matches!(error, Error::Reqwest(_)));
    }

    #[test]
    fn test_localhost() {
        assert_eq!(
            Client::localhost().base_url().as_str(),
            "http://localhost:3000/"
        );
    }
}
