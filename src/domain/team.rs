use serde::{Deserialize, Serialize};
use url::Url;

/// One row of the league's team table.
///
/// `league_conference` and `conference_division` are carried-forward values:
/// they appear in the source table once per group (as banner rows) and every
/// team row inherits the most recently seen pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Team {
    pub league_conference: String,
    pub conference_division: String,
    pub team_name: String,
    pub team_url: Url,
}
