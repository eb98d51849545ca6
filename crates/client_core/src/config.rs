use std::{fs, io, path::Path, time::Duration};

use anyhow::{Context, Result};
use serde::Deserialize;
use url::Url;

pub const SETTINGS_FILE: &str = "lottery.toml";
const DEFAULT_ENDPOINT_URL: &str = "http://127.0.0.1:8080/message";
const DEFAULT_ACCESS_PASSWORD: &str = "powerball";
const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub endpoint_url: Url,
    pub access_password: String,
    pub request_timeout: Duration,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            endpoint_url: Url::parse(DEFAULT_ENDPOINT_URL).expect("default endpoint url is valid"),
            access_password: DEFAULT_ACCESS_PASSWORD.into(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileSettings {
    endpoint_url: Option<String>,
    access_password: Option<String>,
    request_timeout_secs: Option<u64>,
}

/// Defaults, then `lottery.toml` in the working directory, then environment.
pub fn load_settings() -> Result<Settings> {
    load_settings_from(Path::new(SETTINGS_FILE), |name| std::env::var(name).ok())
}

pub fn load_settings_from(
    file: &Path,
    env: impl Fn(&str) -> Option<String>,
) -> Result<Settings> {
    let mut settings = Settings::default();

    let file_cfg = match fs::read_to_string(file) {
        Ok(raw) => toml::from_str::<FileSettings>(&raw)
            .with_context(|| format!("invalid settings file '{}'", file.display()))?,
        Err(err) if err.kind() == io::ErrorKind::NotFound => FileSettings::default(),
        Err(err) => {
            return Err(err).with_context(|| format!("failed to read '{}'", file.display()))
        }
    };

    if let Some(v) = file_cfg.endpoint_url {
        settings.endpoint_url = parse_endpoint_url(&v)?;
    }
    if let Some(v) = file_cfg.access_password {
        settings.access_password = v;
    }
    if let Some(secs) = file_cfg.request_timeout_secs {
        apply_timeout_secs(&mut settings, secs);
    }

    for name in ["LOTTERY_ENDPOINT_URL", "APP__ENDPOINT_URL"] {
        if let Some(v) = env(name) {
            settings.endpoint_url =
                parse_endpoint_url(&v).with_context(|| format!("invalid {name}"))?;
        }
    }
    for name in ["LOTTERY_ACCESS_PASSWORD", "APP__ACCESS_PASSWORD"] {
        if let Some(v) = env(name) {
            settings.access_password = v;
        }
    }
    if let Some(v) = env("APP__REQUEST_TIMEOUT_SECS") {
        match v.trim().parse::<u64>() {
            Ok(secs) => apply_timeout_secs(&mut settings, secs),
            Err(err) => tracing::warn!("ignoring APP__REQUEST_TIMEOUT_SECS={v:?}: {err}"),
        }
    }

    Ok(settings)
}

pub fn parse_endpoint_url(raw: &str) -> Result<Url> {
    let url = Url::parse(raw.trim()).with_context(|| format!("invalid endpoint url '{raw}'"))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => anyhow::bail!("endpoint url must use http or https, got '{other}'"),
    }
}

fn apply_timeout_secs(settings: &mut Settings, secs: u64) {
    if secs == 0 {
        tracing::warn!("ignoring zero request timeout");
        return;
    }
    settings.request_timeout = Duration::from_secs(secs);
}
