use scraper::Html;
use tracing::{debug, info, warn};
use url::Url;

use crate::domain::PlayerRef;
use crate::error::Result;
use crate::html;

const ROSTER_ANCHOR: &str = "Current_roster";

/// Extract the players listed on a team page.
///
/// Roster tables carry the player link in the first header cell of each data
/// row. Rows without one (spacer rows, legend rows) are skipped.
pub fn extract(doc: &Html, base: &Url) -> Result<Vec<PlayerRef>> {
    let Some(anchor) = html::section_anchor(doc, ROSTER_ANCHOR) else {
        warn!("team page has no '{}' section", ROSTER_ANCHOR);
        return Ok(Vec::new());
    };
    let Some(table) = html::table_after(doc, anchor) else {
        warn!("no table follows the '{}' section", ROSTER_ANCHOR);
        return Ok(Vec::new());
    };

    let mut players = Vec::new();

    for (index, row) in html::rows(&table).enumerate() {
        if index == 0 {
            continue;
        }

        let Some(cell) = html::header_cells(&row).next() else {
            continue;
        };
        let Some((href, player_name)) = html::first_link(&cell) else {
            debug!("roster row {} has no player link, skipping", index);
            continue;
        };

        match base.join(&href) {
            Ok(player_url) => players.push(PlayerRef {
                player_url,
                player_name,
            }),
            Err(e) => warn!("unresolvable player link {:?}: {}", href, e),
        }
    }

    info!("found {} players on {}", players.len(), base);
    Ok(players)
}
