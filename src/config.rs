use std::env;

/// Runtime configuration, sourced entirely from the environment.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub api_key: String,
    pub base_url: String,
    pub enable_cors: bool,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let port = env::var("PORT")
            .ok()
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(3000);

        let api_key = env::var("OPENWEATHER_API_KEY").unwrap_or_default();

        let base_url = env::var("OPENWEATHER_BASE_URL")
            .unwrap_or_else(|_| "https://api.openweathermap.org/data/2.5/weather".to_string());

        let enable_cors = env::var("ENABLE_CORS")
            .map(|value| parse_bool(&value))
            .unwrap_or(true);

        Self {
            port,
            api_key,
            base_url,
            enable_cors,
        }
    }
}

fn parse_bool(value: &str) -> bool {
    !matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "0" | "false" | "off" | "no"
    )
}

#[cfg(test)]
mod tests {
    use super::parse_bool;

    #[test]
    fn cors_flag_accepts_common_spellings() {
        assert!(parse_bool("true"));
        assert!(parse_bool("1"));
        assert!(!parse_bool("false"));
        assert!(!parse_bool("0"));
        assert!(!parse_bool("OFF"));
    }
}
