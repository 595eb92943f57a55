//! OpenWeather forecast adapter.
//!
//! Unlike the AI adapters there is no canned fallback here: inventing weather
//! would be worse than admitting the service is down, so provider failures
//! propagate as errors and the route answers with a generic 500.

use common::model::weather::{ForecastEntry, WeatherReport};
use serde::Deserialize;

use super::ProviderError;

const DEFAULT_ENDPOINT: &str = "https://api.openweathermap.org/data/2.5/forecast";

/// Rainfall above this many millimetres per 3-hour slot triggers an alert.
const HEAVY_RAIN_THRESHOLD_MM: f64 = 5.0;

/// Number of forecast slots returned to the dashboard.
const FORECAST_ENTRIES: usize = 7;

/// Forecast adapter over the OpenWeather 5-day/3-hour API.
#[derive(Clone)]
pub struct WeatherService {
    client: reqwest::Client,
    api_key: String,
    endpoint: String,
}

#[derive(Deserialize)]
struct ForecastDto {
    list: Vec<SlotDto>,
    city: CityDto,
}

#[derive(Deserialize)]
struct CityDto {
    name: String,
}

#[derive(Deserialize)]
struct SlotDto {
    dt: i64,
    main: SlotMainDto,
    weather: Vec<SlotWeatherDto>,
    rain: Option<RainDto>,
}

#[derive(Deserialize)]
struct SlotMainDto {
    temp: f64,
    humidity: u32,
}

#[derive(Deserialize)]
struct SlotWeatherDto {
    description: String,
    icon: String,
}

#[derive(Deserialize)]
struct RainDto {
    #[serde(rename = "3h")]
    three_hour: Option<f64>,
}

impl WeatherService {
    pub fn new(api_key: String) -> Self {
        Self::with_endpoint(api_key, DEFAULT_ENDPOINT.to_string())
    }

    /// Endpoint override used by tests to simulate an unreachable provider.
    pub fn with_endpoint(api_key: String, endpoint: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            endpoint,
        }
    }

    /// Fetches the forecast for a coordinate pair in metric units.
    pub async fn forecast(&self, lat: f64, lon: f64) -> Result<WeatherReport, ProviderError> {
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("lat", lat.to_string()),
                ("lon", lon.to_string()),
                ("appid", self.api_key.clone()),
                ("units", "metric".to_string()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::Status(status));
        }

        let dto: ForecastDto = response
            .json()
            .await
            .map_err(|e| ProviderError::Decode(e.to_string()))?;

        Ok(build_report(dto))
    }
}

/// Reduces the raw provider payload to the dashboard's shape: the first seven
/// slots, epoch-millisecond dates, rounded temperatures, and a heavy-rain
/// alert for every slot above the threshold.
fn build_report(dto: ForecastDto) -> WeatherReport {
    let forecast: Vec<ForecastEntry> = dto
        .list
        .into_iter()
        .take(FORECAST_ENTRIES)
        .map(|slot| ForecastEntry {
            date: slot.dt * 1000,
            temperature: slot.main.temp.round() as i32,
            description: slot
                .weather
                .first()
                .map(|w| w.description.clone())
                .unwrap_or_default(),
            icon: slot
                .weather
                .first()
                .map(|w| w.icon.clone())
                .unwrap_or_default(),
            humidity: slot.main.humidity,
            rainfall: slot.rain.and_then(|r| r.three_hour).unwrap_or(0.0),
        })
        .collect();

    let alerts = forecast
        .iter()
        .filter(|entry| entry.rainfall > HEAVY_RAIN_THRESHOLD_MM)
        .map(|entry| {
            format!(
                "⚠️ Heavy rainfall expected on {}. Consider protecting crops.",
                entry.date
            )
        })
        .collect();

    WeatherReport {
        location: dto.city.name,
        forecast,
        alerts,
    }
}
