use serde::Deserialize;

pub const DEFAULT_TREND_LIMIT: usize = 7;
pub const MAX_TREND_LIMIT: usize = 365;

#[derive(Debug, Deserialize)]
pub struct TrendQuery {
    pub limit: Option<usize>,
}

impl TrendQuery {
    pub fn limit(&self) -> usize {
        self.limit.unwrap_or(DEFAULT_TREND_LIMIT).clamp(1, MAX_TREND_LIMIT)
    }
}
