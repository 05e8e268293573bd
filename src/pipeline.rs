//! Orchestration of the league → teams → players fan-out.
//!
//! Failure boundaries: an unreachable league page aborts the run, an
//! unreachable roster page drops that team, an unreachable player page drops
//! that player. Everything below the fetch boundary is best-effort per item
//! inside the extractors.

use scraper::Html;
use tracing::{error, info, warn};
use url::Url;

use crate::domain::{PlayerProfile, PlayerRef, Team};
use crate::error::Result;
use crate::fetch::PageFetcher;
use crate::scrapers;

#[derive(Debug, Default)]
pub struct RunStats {
    pub teams: usize,
    pub teams_skipped: usize,
    pub players: usize,
    pub players_skipped: usize,
}

pub struct RunOutput {
    pub teams: Vec<Team>,
    pub players: Vec<PlayerProfile>,
    pub stats: RunStats,
}

pub struct Pipeline<'a> {
    fetcher: &'a dyn PageFetcher,
}

impl<'a> Pipeline<'a> {
    pub fn new(fetcher: &'a dyn PageFetcher) -> Self {
        Self { fetcher }
    }

    pub async fn run(&self, league_url: &Url) -> Result<RunOutput> {
        info!("Step 1: collecting teams from {}", league_url);
        let body = self.fetcher.fetch(league_url).await?;
        let teams = {
            let doc = Html::parse_document(&body);
            scrapers::teams::extract(&doc, league_url)?
        };

        let mut stats = RunStats {
            teams: teams.len(),
            ..RunStats::default()
        };
        let mut players = Vec::new();

        info!("Step 2: collecting rosters for {} teams", teams.len());
        for team in &teams {
            let roster = match self.fetch_roster(team).await {
                Ok(roster) => roster,
                Err(e) => {
                    error!("skipping {}: {}", team.team_name, e);
                    stats.teams_skipped += 1;
                    continue;
                }
            };

            for player in roster {
                match self.fetch_profile(&player).await {
                    Some(profile) => players.push(profile),
                    None => stats.players_skipped += 1,
                }
            }
        }

        stats.players = players.len();
        Ok(RunOutput {
            teams,
            players,
            stats,
        })
    }

    async fn fetch_roster(&self, team: &Team) -> Result<Vec<PlayerRef>> {
        let body = self.fetcher.fetch(&team.team_url).await?;
        let doc = Html::parse_document(&body);
        scrapers::roster::extract(&doc, &team.team_url)
    }

    async fn fetch_profile(&self, player: &PlayerRef) -> Option<PlayerProfile> {
        match self.fetcher.fetch(&player.player_url).await {
            Ok(body) => {
                let doc = Html::parse_document(&body);
                Some(scrapers::profile::extract(&doc, player))
            }
            Err(e) => {
                warn!("skipping {}: {}", player.player_name, e);
                None
            }
        }
    }
}
