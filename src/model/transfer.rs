use serde::Serialize;

/// A recorded player move between two teams.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Transfer {
    /// Date as formatted by the site.
    pub transfer_date: Option<String>,
    pub player_name: Option<String>,
    pub player_role: Option<String>,
    pub team_from: TransferTeam,
    pub team_to: TransferTeam,
}

/// One side of a transfer.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TransferTeam {
    pub name: Option<String>,
    pub logo: Option<String>,
}
