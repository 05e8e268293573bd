mod fs_store;

pub use fs_store::{player_file_name, team_file_name, FileSystemStore};
