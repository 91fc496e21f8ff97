use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Clone)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub log_level: String,
    pub openweather_api_key: Option<String>,
    pub foursquare_api_key: Option<String>,
    pub openweather_base_url: String,
    pub foursquare_base_url: String,
    pub cities_path: PathBuf,
    pub request_timeout_secs: u64,
    pub poi_radius_m: u32,
    pub poi_limit: u32,
    /// When true, batch endpoints answer 200 with whichever items
    /// succeeded instead of failing the whole batch.
    pub partial_results: bool,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("bind_addr", &self.bind_addr)
            .field("log_level", &self.log_level)
            .field(
                "openweather_api_key",
                &self.openweather_api_key.as_ref().map(|_| "[redacted]"),
            )
            .field(
                "foursquare_api_key",
                &self.foursquare_api_key.as_ref().map(|_| "[redacted]"),
            )
            .field("openweather_base_url", &self.openweather_base_url)
            .field("foursquare_base_url", &self.foursquare_base_url)
            .field("cities_path", &self.cities_path)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("poi_radius_m", &self.poi_radius_m)
            .field("poi_limit", &self.poi_limit)
            .field("partial_results", &self.partial_results)
            .finish()
    }
}
