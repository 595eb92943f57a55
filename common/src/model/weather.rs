use serde::{Deserialize, Serialize};

/// One 3-hour forecast slot, reduced to the fields the dashboard renders.
/// `date` is epoch milliseconds so the client formats it in its own locale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastEntry {
    pub date: i64,
    pub temperature: i32,
    pub description: String,
    pub icon: String,
    pub humidity: u32,
    pub rainfall: f64,
}

/// Forecast response for `GET /api/weather`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherReport {
    pub location: String,
    pub forecast: Vec<ForecastEntry>,
    pub alerts: Vec<String>,
}
