mod player;
mod team;

pub use player::{AttributeValue, CareerStatistic, PlayerProfile, PlayerRef, SeasonTotals};
pub use team::Team;
