pub mod ranking_scraper;

pub use ranking_scraper::{RankingParser, RankingScraper};
