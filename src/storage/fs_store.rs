//! JSON persistence with archival.
//!
//! One document per team and per player, under `data/json/team` and
//! `data/json/player`. An existing output directory is moved into
//! `data/archive/` with a timestamp before a new run writes anything, so
//! repeated runs never mix stale and fresh records.

use chrono::Local;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use url::Url;

use crate::domain::{PlayerProfile, Team};
use crate::error::Result;

const JSON_DIR: &str = "json";
const ARCHIVE_DIR: &str = "archive";
const TEAM_DIR: &str = "team";
const PLAYER_DIR: &str = "player";

pub struct FileSystemStore {
    data_dir: PathBuf,
}

impl FileSystemStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn save_teams(&self, teams: &[Team]) -> Result<()> {
        let dir = self.fresh_dir(TEAM_DIR)?;
        for team in teams {
            self.write_json_file(&dir, &team_file_name(&team.team_name), team)?;
        }
        info!("wrote {} teams", teams.len());
        Ok(())
    }

    pub fn save_players(&self, players: &[PlayerProfile]) -> Result<()> {
        let dir = self.fresh_dir(PLAYER_DIR)?;
        for player in players {
            self.write_json_file(&dir, &player_file_name(&player.player_url), player)?;
        }
        info!("wrote {} players", players.len());
        Ok(())
    }

    fn write_json_file<T: Serialize>(&self, dir: &Path, key: &str, data: &T) -> Result<()> {
        let path = dir.join(format!("{key}.json"));
        fs::write(path, serde_json::to_string_pretty(data)?)?;
        Ok(())
    }

    /// Archive any previous output under this name, then create it empty.
    fn fresh_dir(&self, name: &str) -> Result<PathBuf> {
        let dir = self.data_dir.join(JSON_DIR).join(name);
        self.archive_existing(&dir)?;
        fs::create_dir_all(&dir)?;
        Ok(dir)
    }

    fn archive_existing(&self, dir: &Path) -> Result<()> {
        if !dir.exists() {
            return Ok(());
        }

        let archive_dir = self.data_dir.join(ARCHIVE_DIR);
        fs::create_dir_all(&archive_dir)?;

        let base_name = dir
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "output".to_string());
        let time_stamp = Local::now().format("%Y-%m-%d-%H-%M-%S");
        let target = archive_dir.join(format!("{time_stamp}_{base_name}"));

        fs::rename(dir, &target)?;
        debug!("moved {:?} to {:?}", dir, target);
        Ok(())
    }
}

/// Filesystem-safe key for a team: lower-cased name, spaces to underscores.
pub fn team_file_name(team_name: &str) -> String {
    team_name.to_lowercase().replace(' ', "_")
}

/// Filesystem-safe key for a player: the trailing path segment of the
/// source URL, lower-cased.
pub fn player_file_name(player_url: &Url) -> String {
    player_url
        .path_segments()
        .and_then(|segments| segments.last())
        .filter(|segment| !segment.is_empty())
        .unwrap_or("player")
        .to_lowercase()
}
