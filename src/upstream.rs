use reqwest::{Client, StatusCode};
use serde_json::Value;
use thiserror::Error;

/// The ways a weather lookup can fail, decided once per kind:
/// upstream-reported failures keep their status code and get a fixed
/// message, everything local maps to 500 and surfaces its own message.
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("Failed to fetch weather data")]
    Status(StatusCode),

    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    #[error(transparent)]
    Decode(#[from] serde_json::Error),
}

impl UpstreamError {
    /// Status code the caller should see for this failure.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Status(code) => *code,
            Self::Transport(_) | Self::Decode(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Client for the OpenWeatherMap current-weather endpoint.
#[derive(Debug, Clone)]
pub struct WeatherClient {
    http: Client,
    base_url: String,
    api_key: String,
}

impl WeatherClient {
    pub fn new(base_url: String, api_key: String) -> Self {
        Self {
            http: Client::new(),
            base_url,
            api_key,
        }
    }

    /// Forwards the city to the weather API and returns its JSON body
    /// verbatim. A missing city is rendered as an empty `q` parameter and
    /// still sent; the upstream decides what to make of it.
    pub async fn fetch(&self, city: Option<&str>) -> Result<Value, UpstreamError> {
        let response = self
            .http
            .get(&self.base_url)
            .query(&[
                ("q", city.unwrap_or_default()),
                ("appid", self.api_key.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            // The upstream's own error body is discarded.
            return Err(UpstreamError::Status(status));
        }

        let body = response.text().await?;
        let json = serde_json::from_str(&body)?;
        Ok(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upstream_status_failure_uses_fixed_message() {
        let err = UpstreamError::Status(StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "Failed to fetch weather data");
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn decode_failure_maps_to_internal_error_and_keeps_its_message() {
        let err: UpstreamError = serde_json::from_str::<Value>("not json").unwrap_err().into();
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!err.to_string().is_empty());
    }
}
