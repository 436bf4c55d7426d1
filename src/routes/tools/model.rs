use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct Weather {
    pub city: String,
    pub temperature: &'static str,
    pub feels_like: &'static str,
    pub description: &'static str,
    pub humidity: &'static str,
    pub wind_speed: &'static str,
    pub pressure: &'static str,
    pub visibility: &'static str,
    pub uv_index: &'static str,
    pub sunrise: &'static str,
    pub sunset: &'static str,
}

impl Weather {
    pub fn demo(city: &str) -> Self {
        Self {
            city: city.to_string(),
            temperature: "22°C",
            feels_like: "20°C",
            description: "Partly cloudy",
            humidity: "65%",
            wind_speed: "15 km/h",
            pressure: "1013 hPa",
            visibility: "10 km",
            uv_index: "5",
            sunrise: "06:30",
            sunset: "18:45",
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ShortLink {
    pub original_url: String,
    pub short_url: String,
    pub short_id: String,
    pub clicks: u64,
    pub created_at: String,
}

#[derive(Debug, Serialize)]
pub struct ExpandedLink {
    pub short_url: String,
    pub original_url: &'static str,
    pub created_at: String,
    pub clicks: u64,
}

#[derive(Debug, Serialize)]
pub struct QrCode {
    pub text: String,
    pub size: String,
    pub qr_url: String,
    pub format: &'static str,
}
