use crate::domain::Division;

/// Ranking page to scrape for one division
///
/// Pages live under `{base_url}/ranking/rg-index/{index}`, where the index
/// is the same one the site's history charts take.
#[derive(Debug, Clone)]
pub struct DivisionSource {
    pub division: Division,
    pub path: String,
}

impl DivisionSource {
    pub fn new(division: Division) -> Self {
        Self {
            division,
            path: format!("/ranking/rg-index/{}", division.index()),
        }
    }

    pub fn url(&self, base_url: &str) -> String {
        format!("{}{}", base_url.trim_end_matches('/'), self.path)
    }
}

/// Ranking pages in combined directory order
pub fn get_division_sources() -> Vec<DivisionSource> {
    vec![
        DivisionSource::new(Division::Open),
        DivisionSource::new(Division::Women),
    ]
}
