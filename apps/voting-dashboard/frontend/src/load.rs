//! Loading the dashboard data from its [`DataSource`].

use types_rs::voting::DashboardData;
use voting_dashboard_client::Client;

use crate::config::DataSource;

/// What the dashboard currently shows. Exactly one of the loading
/// indicator, the error message, or the tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    Failed(String),
    Loaded(DashboardData),
}

impl LoadState {
    /// The state right after mount. Seed data is assigned immediately, so
    /// only an API source starts out loading.
    pub fn initial(source: &DataSource) -> Self {
        match source {
            DataSource::Seed => {
                log::debug!("using seed dashboard data");
                Self::Loaded(DashboardData::seed())
            }
            DataSource::Api(_) => Self::Loading,
        }
    }

    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}

/// Loads the dashboard from `source`. Never returns [`LoadState::Loading`].
pub async fn load(source: &DataSource) -> LoadState {
    match source {
        DataSource::Seed => LoadState::initial(source),
        DataSource::Api(base_url) => match Client::new(base_url.clone()).get_dashboard().await {
            Ok(data) => {
                log::info!(
                    "loaded {} candidates and {} voters",
                    data.candidates.len(),
                    data.voters.len()
                );
                LoadState::Loaded(data)
            }
            Err(err) => {
                log::error!("failed to load dashboard from {base_url}: {err:?}");
                LoadState::Failed(err.user_message())
            }
        },
    }
}
