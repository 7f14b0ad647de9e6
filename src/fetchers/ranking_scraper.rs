use anyhow::{Context, Result};
use log::{info, warn};
use regex::Regex;
use scraper::{ElementRef, Html, Selector};

use crate::config::{DivisionSource, ScraperSettings};
use crate::domain::{Division, PlayerRecord};
use crate::http::PacedClient;

/// Trend texts the site shows for an unchanged rating
const NO_CHANGE_MARKERS: [&str; 2] = ["Keine Veränderung", "No change"];

struct RowSelectors {
    rows: Selector,
    rank: Selector,
    name_link: Selector,
    club: Selector,
    city: Selector,
    games: Selector,
    badge: Selector,
    value: Selector,
    hint: Selector,
}

impl RowSelectors {
    fn compile() -> Result<Self> {
        Ok(Self {
            rows: selector("table#rgx-main-table tbody tr")?,
            rank: selector("td.pos-col")?,
            name_link: selector("div.player-name a")?,
            club: selector("span.player-club.hide-on-med-and-down")?,
            city: selector("span.player-club.hide-on-large-only")?,
            games: selector("td.games-col")?,
            badge: selector("div.rgx-badge")?,
            value: selector("span.rgx-value")?,
            hint: selector("span.hint")?,
        })
    }
}

fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| anyhow::anyhow!("Invalid selector {}: {:?}", css, e))
}

/// Scraper for the division ranking tables
pub struct RankingScraper {
    client: PacedClient,
    parser: RankingParser,
    base_url: String,
}

impl RankingScraper {
    pub fn new(settings: &ScraperSettings) -> Result<Self> {
        Ok(Self {
            client: PacedClient::new(settings)?,
            parser: RankingParser::new()?,
            base_url: settings.base_url.to_string(),
        })
    }

    /// Fetch and parse one division's ranking page
    pub async fn scrape_division(&mut self, source: &DivisionSource) -> Result<Vec<PlayerRecord>> {
        let url = source.url(&self.base_url);
        info!("Scraping {} rankings from {}", source.division, url);

        let html = self.client.get_text(&url).await?;
        let players = self
            .parser
            .parse(&html, source.division)
            .with_context(|| format!("Failed to parse {} ranking page", source.division))?;

        info!("  → Parsed {} {} players", players.len(), source.division);
        Ok(players)
    }
}

/// Turns a ranking page into player records, in table order
pub struct RankingParser {
    selectors: RowSelectors,
    history_regex: Regex,
    digits_regex: Regex,
    trend_regex: Regex,
}

impl RankingParser {
    pub fn new() -> Result<Self> {
        Ok(Self {
            selectors: RowSelectors::compile()?,
            history_regex: Regex::new(r"show_history\((\d+),")
                .context("Failed to compile history regex")?,
            digits_regex: Regex::new(r"\d+").context("Failed to compile digits regex")?,
            trend_regex: Regex::new(r"([+-]?\d+)").context("Failed to compile trend regex")?,
        })
    }

    pub fn parse(&self, html: &str, division: Division) -> Result<Vec<PlayerRecord>> {
        let document = Html::parse_document(html);
        let rows: Vec<ElementRef> = document.select(&self.selectors.rows).collect();

        if rows.is_empty() {
            anyhow::bail!("Ranking table has no rows");
        }

        let mut players = Vec::with_capacity(rows.len());
        for (position, row) in rows.into_iter().enumerate() {
            match self.parse_row(row, division, position + 1) {
                Some(player) => players.push(player),
                None => warn!("Skipping {} row {} without player link/id", division, position + 1),
            }
        }

        Ok(players)
    }

    fn parse_row(&self, row: ElementRef, division: Division, position: usize) -> Option<PlayerRecord> {
        let s = &self.selectors;

        let link = row.select(&s.name_link).next()?;
        let name = element_text(&link);
        let player_id = self.parse_player_id(link.value().attr("onclick").unwrap_or(""))?;

        let rank = first_text(row, &s.rank)
            .map(|t| t.replace('.', ""))
            .and_then(|t| t.trim().parse::<u32>().ok())
            .filter(|&r| r > 0)
            .unwrap_or(position as u32);

        let games = first_text(row, &s.games)
            .and_then(|t| t.parse::<u32>().ok())
            .unwrap_or(0);

        let badge = row.select(&s.badge).next();
        let pro_status = badge.is_some_and(|b| b.value().classes().any(|c| c == "pro-div"));
        let value = badge.and_then(|b| b.select(&s.value).next());

        let elo_rating = value
            .map(|v| element_text(&v))
            .and_then(|t| self.digits_regex.find(&t).and_then(|m| m.as_str().parse().ok()))
            .unwrap_or(0);

        let trend_text = value
            .and_then(|v| v.select(&s.hint).next())
            .and_then(|h| h.value().attr("data-content"))
            .unwrap_or("");

        Some(PlayerRecord {
            name,
            player_id,
            rank,
            club: first_text(row, &s.club),
            city: first_text(row, &s.city),
            games,
            elo_rating,
            division,
            trend_90_days: self.parse_trend(trend_text),
            pro_status,
            exists_in_both_divisions: false,
        })
    }

    fn parse_player_id(&self, onclick: &str) -> Option<i64> {
        let captures = self.history_regex.captures(onclick)?;
        captures.get(1)?.as_str().parse().ok()
    }

    fn parse_trend(&self, text: &str) -> i64 {
        if NO_CHANGE_MARKERS.iter().any(|m| text.contains(m)) {
            return 0;
        }
        self.trend_regex
            .captures(text)
            .and_then(|c| c.get(1))
            .and_then(|m| m.as_str().parse().ok())
            .unwrap_or(0)
    }
}

fn element_text(element: &ElementRef) -> String {
    element.text().collect::<String>().trim().to_string()
}

fn first_text(row: ElementRef, selector: &Selector) -> Option<String> {
    row.select(selector)
        .next()
        .map(|e| element_text(&e))
        .filter(|t| !t.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r##"
<html><body>
<table id="rgx-main-table">
  <thead><tr><th>#</th></tr></thead>
  <tbody>
    <tr>
      <td class="bebas bold pos-col">1.</td>
      <td>
        <div class="player-name"><a href="#elo-history" class="modal-trigger bebas" onclick="show_history(265, 1)">Paul Siemer</a></div>
        <span class="player-club hide-on-med-and-down">1. Roundnet Club Köln</span>
        <span class="player-club hide-on-large-only">Köln</span>
      </td>
      <td class="bebas games-col hide-on-small-only"> 267 </td>
      <td><div class="rgx-badge pro-div"><span class="rgx-value">2104<span class="hint" data-content="+26 Punkte in den letzten 90 Tagen"></span></span></div></td>
    </tr>
    <tr>
      <td class="bebas bold pos-col">2.</td>
      <td>
        <div class="player-name"><a onclick="show_history(190, 1)">Jonas Berg</a></div>
      </td>
      <td class="bebas games-col hide-on-small-only">n/a</td>
      <td><div class="rgx-badge"><span class="rgx-value">1988<span class="hint" data-content="Keine Veränderung"></span></span></div></td>
    </tr>
    <tr>
      <td class="bebas bold pos-col">3.</td>
      <td><div class="player-name">Ghost Row</div></td>
    </tr>
    <tr>
      <td class="bebas bold pos-col"></td>
      <td>
        <div class="player-name"><a onclick="show_history(77, 1)">Max Weber</a></div>
      </td>
      <td class="bebas games-col hide-on-small-only">12</td>
      <td><div class="rgx-badge"><span class="rgx-value">1500<span class="hint" data-content="-10 Punkte"></span></span></div></td>
    </tr>
  </tbody>
</table>
</body></html>
"##;

    fn parse(html: &str) -> Result<Vec<PlayerRecord>> {
        RankingParser::new().unwrap().parse(html, Division::Open)
    }

    #[test]
    fn parses_full_row() {
        let players = parse(PAGE).unwrap();
        let paul = &players[0];

        assert_eq!(paul.name, "Paul Siemer");
        assert_eq!(paul.player_id, 265);
        assert_eq!(paul.rank, 1);
        assert_eq!(paul.club.as_deref(), Some("1. Roundnet Club Köln"));
        assert_eq!(paul.city.as_deref(), Some("Köln"));
        assert_eq!(paul.games, 267);
        assert_eq!(paul.elo_rating, 2104);
        assert_eq!(paul.trend_90_days, 26);
        assert!(paul.pro_status);
        assert_eq!(paul.division, Division::Open);
        assert!(!paul.exists_in_both_divisions);
    }

    #[test]
    fn missing_fields_fall_back() {
        let players = parse(PAGE).unwrap();
        let jonas = &players[1];

        assert_eq!(jonas.club, None);
        assert_eq!(jonas.city, None);
        assert_eq!(jonas.games, 0);
        assert_eq!(jonas.trend_90_days, 0);
        assert!(!jonas.pro_status);
    }

    #[test]
    fn rows_without_id_are_skipped_and_rank_falls_back_to_position() {
        let players = parse(PAGE).unwrap();
        assert_eq!(players.len(), 3);

        let max = &players[2];
        assert_eq!(max.name, "Max Weber");
        assert_eq!(max.rank, 4);
        assert_eq!(max.trend_90_days, -10);
    }

    #[test]
    fn page_without_table_is_an_error() {
        assert!(parse("<html><body><p>Wartung</p></body></html>").is_err());
    }
}
