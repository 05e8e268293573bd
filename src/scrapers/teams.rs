use scraper::Html;
use tracing::{debug, info, warn};
use url::Url;

use crate::domain::Team;
use crate::error::Result;
use crate::html::{self, Banner};

const TEAMS_ANCHOR: &str = "Teams";

/// Extract the league's teams, grouped by conference and division.
///
/// The grouping values are carried forward through the walk: a conference
/// banner row or a division banner cell updates the accumulators, and every
/// following team row inherits them. Team rows seen before any banner have
/// no defined grouping and are skipped.
pub fn extract(doc: &Html, base: &Url) -> Result<Vec<Team>> {
    let Some(anchor) = html::section_anchor(doc, TEAMS_ANCHOR) else {
        warn!("league page has no '{}' section", TEAMS_ANCHOR);
        return Ok(Vec::new());
    };
    let Some(table) = html::table_after(doc, anchor) else {
        warn!("no table follows the '{}' section", TEAMS_ANCHOR);
        return Ok(Vec::new());
    };

    let mut teams = Vec::new();
    let mut conference: Option<String> = None;
    let mut division: Option<String> = None;

    for (index, row) in html::rows(&table).enumerate() {
        // Row 0 is the column header row.
        if index == 0 {
            continue;
        }

        match html::banner(&row) {
            Some(Banner::Conference(name)) => conference = Some(name),
            Some(Banner::Division(name)) => division = Some(name),
            None => {}
        }

        // A division banner row also carries its group's first team, so the
        // data cells are read regardless of the banner above.
        let Some(cell) = html::data_cells(&row).next() else {
            continue;
        };
        let Some((href, team_name)) = html::first_link(&cell) else {
            debug!("row {} has no team link, skipping", index);
            continue;
        };

        let (Some(league_conference), Some(conference_division)) =
            (conference.clone(), division.clone())
        else {
            warn!("team row before any grouping banner, skipping {}", team_name);
            continue;
        };

        match base.join(&href) {
            Ok(team_url) => teams.push(Team {
                league_conference,
                conference_division,
                team_name,
                team_url,
            }),
            Err(e) => warn!("unresolvable team link {:?}: {}", href, e),
        }
    }

    info!("collected {} teams", teams.len());
    Ok(teams)
}
