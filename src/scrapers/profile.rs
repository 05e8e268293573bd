use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};
use tracing::{debug, warn};

use crate::domain::{AttributeValue, CareerStatistic, PlayerProfile, PlayerRef, SeasonTotals};
use crate::html;
use crate::normalize;

const STATISTICS_ANCHOR: &str = "Career_statistics";

static INFOBOX: Lazy<Selector> = Lazy::new(|| Selector::parse("table.infobox.vcard").unwrap());
static BDAY: Lazy<Selector> = Lazy::new(|| Selector::parse("span.bday").unwrap());

// Career-statistics column map. The coupling is positional: a layout change
// on the source side mis-maps every field, so it is declared once here.
const SEASON_COL: usize = 0;
const TEAM_COL: usize = 1;
const LEAGUE_COL: usize = 2;
const REGULAR_SEASON_START: usize = 3;
const PLAYOFF_SEASON_START: usize = 8;
const STAT_COLUMN_COUNT: usize = 13;

/// Career-statistics rows plus the indices of rows that could not be mapped
/// (short rows, spanning rows with stray cells).
#[derive(Debug, Default)]
pub struct StatsOutcome {
    pub rows: Vec<CareerStatistic>,
    pub skipped: Vec<usize>,
}

/// Extract a player's profile: infobox attributes plus career statistics.
///
/// This never fails wholesale. Fields that cannot be derived are omitted,
/// unmappable statistics rows are skipped, and a missing or unusable
/// statistics table leaves `career_statistics` absent.
pub fn extract(doc: &Html, player: &PlayerRef) -> PlayerProfile {
    let mut profile = PlayerProfile::new(player);

    extract_infobox(doc, &mut profile);

    match extract_statistics(doc) {
        Some(outcome) => {
            if !outcome.skipped.is_empty() {
                warn!(
                    "{}: skipped statistics rows {:?}",
                    player.player_name, outcome.skipped
                );
            }
            profile.career_statistics = Some(outcome.rows);
        }
        None => debug!("{}: no usable career statistics", player.player_name),
    }

    profile
}

fn extract_infobox(doc: &Html, profile: &mut PlayerProfile) {
    let Some(infobox) = doc.select(&INFOBOX).next() else {
        warn!("{}: no infobox found", profile.player_name);
        return;
    };

    for row in html::rows(&infobox) {
        let Some(label_cell) = html::header_cells(&row).next() else {
            continue;
        };
        let name = normalize::clean_attribute_name(html::cell_text(&label_cell).trim());

        let Some(value_cell) = html::data_cells(&row).next() else {
            continue;
        };

        // An attribute lands in the bag only when a value was derived;
        // there are no null placeholders.
        if let Some(value) = attribute_value(doc, &name, &value_cell, &profile.player_name) {
            profile.attributes.insert(name, value);
        }
    }
}

fn attribute_value(
    doc: &Html,
    name: &str,
    cell: &ElementRef,
    player_name: &str,
) -> Option<AttributeValue> {
    match name {
        // The machine-readable date lives in a dedicated bday element, not
        // in the human-readable cell text.
        "born" => doc
            .select(&BDAY)
            .next()
            .and_then(|el| normalize::parse_birth_date(&html::cell_text(&el)))
            .map(AttributeValue::Date),
        "height" | "weight" => match normalize::parse_metric(&html::cell_text(cell)) {
            Ok(value) => Some(AttributeValue::Integer(value)),
            Err(e) => {
                warn!("{}: {}: {}", player_name, name, e);
                None
            }
        },
        _ => Some(AttributeValue::Text(normalize::clean_attribute_value(
            &html::cell_text(cell),
        ))),
    }
}

fn extract_statistics(doc: &Html) -> Option<StatsOutcome> {
    let anchor = html::section_anchor(doc, STATISTICS_ANCHOR)?;
    let table = html::table_after(doc, anchor)?;

    let mut outcome = StatsOutcome::default();

    for (index, row) in html::rows(&table).enumerate() {
        let cells: Vec<ElementRef> = html::data_cells(&row).collect();

        // Header and banner rows carry no data cells.
        if cells.is_empty() {
            continue;
        }
        if cells.len() < STAT_COLUMN_COUNT {
            outcome.skipped.push(index);
            continue;
        }

        let text = |col: usize| normalize::clean_attribute_value(html::cell_text(&cells[col]).trim());

        outcome.rows.push(CareerStatistic {
            season: text(SEASON_COL),
            team: text(TEAM_COL),
            league: text(LEAGUE_COL),
            regular_season: season_totals(&cells, REGULAR_SEASON_START),
            playoff_season: season_totals(&cells, PLAYOFF_SEASON_START),
        });
    }

    Some(outcome)
}

fn season_totals(cells: &[ElementRef], start: usize) -> SeasonTotals {
    let stat = |offset: usize| normalize::clean_statistic_number(&html::cell_text(&cells[start + offset]));

    SeasonTotals {
        games_played: stat(0),
        goals: stat(1),
        assists: stat(2),
        points: stat(3),
        penalty_minutes: stat(4),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use url::Url;

    fn player() -> PlayerRef {
        PlayerRef {
            player_url: Url::parse("https://en.wikipedia.org/wiki/Test_Player").unwrap(),
            player_name: "Test Player".into(),
        }
    }

    const INFOBOX_HTML: &str = "<table class=\"infobox vcard\">\
        <tr><th colspan=\"2\">Test Player</th></tr>\
        <tr><th>Born</th><td><span class=\"bday\">1987-08-07</span> (age 38)</td></tr>\
        <tr><th>Height</th><td>6 ft 2 in (188\u{a0}cm)</td></tr>\
        <tr><th>Weight</th><td>200 lb (91\u{a0}kg; 14 st 4 lb)</td></tr>\
        <tr><th>Position</th><td>Centre\n</td></tr>\
        <tr><th>Shoots</th><td>Left</td></tr>\
        </table>";

    fn stats_row(season: &str, team: &str, gp: &str) -> String {
        let mut row = format!("<tr><td>{season}</td><td>{team}</td><td>NHL</td>");
        row.push_str(&format!("<td>{gp}</td>"));
        for _ in 0..4 {
            row.push_str("<td>10</td>");
        }
        for _ in 0..5 {
            row.push_str("<td>\u{2014}</td>");
        }
        row.push_str("</tr>");
        row
    }

    fn profile_page(extra: &str) -> Html {
        Html::parse_document(&format!(
            "<html><body>{INFOBOX_HTML}\
             <h2><span id=\"Career_statistics\">Career statistics</span></h2>\
             <table>\
             <tr><th>Season</th><th>Team</th><th>League</th></tr>\
             {}{extra}</body></html>",
            stats_row("2005\u{2013}06", "Pittsburgh Penguins", "81"),
        ))
    }

    #[test]
    fn extracts_typed_and_generic_attributes() {
        let doc = profile_page("</table>");
        let profile = extract(&doc, &player());

        assert_eq!(
            profile.attributes.get("born"),
            Some(&AttributeValue::Date(
                chrono::NaiveDate::from_ymd_opt(1987, 8, 7).unwrap()
            ))
        );
        assert_eq!(
            profile.attributes.get("height"),
            Some(&AttributeValue::Integer(188))
        );
        assert_eq!(
            profile.attributes.get("weight"),
            Some(&AttributeValue::Integer(91))
        );
        assert_eq!(
            profile.attributes.get("position"),
            Some(&AttributeValue::Text("Centre".into()))
        );
        assert_eq!(
            profile.attributes.get("shoots"),
            Some(&AttributeValue::Text("Left".into()))
        );
    }

    #[test]
    fn statistics_rows_are_mapped_positionally() {
        let doc = profile_page("</table>");
        let profile = extract(&doc, &player());

        let stats = profile.career_statistics.expect("statistics");
        assert_eq!(stats.len(), 1);
        assert_eq!(stats[0].season, "2005-06");
        assert_eq!(stats[0].team, "Pittsburgh Penguins");
        assert_eq!(stats[0].regular_season.games_played, Some(81));
        // Placeholder dashes in the playoff columns become absent values.
        assert_eq!(stats[0].playoff_season, SeasonTotals::default());
    }

    #[test]
    fn short_rows_are_skipped_and_reported() {
        let doc = profile_page(
            "<tr><td>2006\u{2013}07</td><td>incomplete row</td></tr>\
             </table>",
        );

        let outcome = extract_statistics(&doc).expect("statistics table");
        assert_eq!(outcome.rows.len(), 1);
        // Row 0 is the header; row 1 is the full row; row 2 is short.
        assert_eq!(outcome.skipped, vec![2]);
    }

    #[test]
    fn missing_statistics_table_leaves_field_absent() {
        let doc = Html::parse_document(&format!("<html><body>{INFOBOX_HTML}</body></html>"));
        let profile = extract(&doc, &player());

        assert!(profile.career_statistics.is_none());
        // The profile itself is still produced.
        assert!(profile.attributes.contains_key("position"));
    }

    #[test]
    fn malformed_height_is_omitted_not_fatal() {
        let doc = Html::parse_document(
            "<html><body><table class=\"infobox vcard\">\
             <tr><th>Height</th><td>188 cm</td></tr>\
             <tr><th>Shoots</th><td>Left</td></tr>\
             </table></body></html>",
        );
        let profile = extract(&doc, &player());

        assert!(!profile.attributes.contains_key("height"));
        assert_eq!(
            profile.attributes.get("shoots"),
            Some(&AttributeValue::Text("Left".into()))
        );
    }
}
