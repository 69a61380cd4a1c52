mod voting_dashboard_page;

pub use voting_dashboard_page::{
    candidate_status_color, voter_status_color, DashboardView, DashboardViewProps,
    VotingDashboardPage, VotingDashboardPageProps,
};
