use axum::Json;
use chrono::{Days, Local, NaiveDate};
use rand::Rng;
use serde::ser::{Serialize, SerializeStruct, Serializer};

pub const SUMMARIES: [&str; 10] = [
    "Freezing",
    "Bracing",
    "Chilly",
    "Cool",
    "Mild",
    "Warm",
    "Balmy",
    "Hot",
    "Sweltering",
    "Scorching",
];

#[derive(Debug, Clone, PartialEq)]
pub struct WeatherForecast {
    pub date: NaiveDate,
    pub temperature_c: i32,
    pub summary: Option<&'static str>,
}

impl WeatherForecast {
    pub fn new(date: NaiveDate, temperature_c: i32, summary: Option<&'static str>) -> Self {
        WeatherForecast {
            date,
            temperature_c,
            summary,
        }
    }

    /// Derived on every read, never stored. The divisor 0.5556 and the
    /// truncating cast are load-bearing: clients assert these exact integers,
    /// and for some inputs they differ by one from `c * 1.8 + 32`.
    pub fn temperature_f(&self) -> i32 {
        32 + (self.temperature_c as f64 / 0.5556) as i32
    }
}

// temperatureF is a pure function of temperatureC, so serialization computes
// it instead of carrying a field that could drift out of sync.
impl Serialize for WeatherForecast {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("WeatherForecast", 4)?;
        state.serialize_field("date", &self.date)?;
        state.serialize_field("temperatureC", &self.temperature_c)?;
        state.serialize_field("temperatureF", &self.temperature_f())?;
        state.serialize_field("summary", &self.summary)?;
        state.end()
    }
}

/// Five days of made-up weather, starting tomorrow. The random source and the
/// reference date are passed in so tests can pin both.
pub fn generate_forecast(rng: &mut impl Rng, today: NaiveDate) -> Vec<WeatherForecast> {
    (1..=5u64)
        .map(|index| {
            WeatherForecast::new(
                today + Days::new(index),
                rng.random_range(-20..55),
                Some(SUMMARIES[rng.random_range(0..SUMMARIES.len())]),
            )
        })
        .collect()
}

pub async fn get_weather_forecast() -> Json<Vec<WeatherForecast>> {
    let mut rng = rand::rng();
    Json(generate_forecast(&mut rng, Local::now().date_naive()))
}
