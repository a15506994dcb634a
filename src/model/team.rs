use serde::Serialize;

/// A team card from the teams overview page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamSummary {
    pub team_url: String,
    pub team_logo: String,
    pub team_name: String,
}

/// Team profile data from a single team page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamDetail {
    pub team_logo: Option<String>,
    pub team_name: Option<String>,
    pub social_media: SocialMedia,
    pub roster: Vec<RosterPlayer>,
}

/// Social media links of a team. Platforms without an icon on the page stay `None`
/// and are left out of the serialized output.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SocialMedia {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub facebook: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub youtube: Option<String>,
}

/// A member of a team's roster.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RosterPlayer {
    pub player_image: Option<String>,
    pub player_name: Option<String>,
    pub player_role: Option<String>,
}
