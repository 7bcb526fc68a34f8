use clap::Parser;
use config::{Config, Environment, File, FileFormat};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use url::Url;

/// Prefix for environment overrides, e.g. `NOERR_SERVER__PORT=8080`.
pub const ENV_PREFIX: &str = "NOERR";

/// Config file picked up from the working directory when none is named.
const CWD_CONFIG: &str = "config.yaml";

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Config file path
    #[arg(short, long, env = "CONFIG_FILE")]
    pub config: Option<String>,

    /// Port to listen on
    #[arg(long, env = "PORT")]
    pub port: Option<u16>,

    /// Address to bind
    #[arg(long, env = "HOST")]
    pub host: Option<String>,

    /// Directory served under /static
    #[arg(long, env = "STATIC_DIR")]
    pub static_dir: Option<PathBuf>,

    /// Endpoint contact submissions are forwarded to
    #[arg(long, env = "FORMS_ENDPOINT")]
    pub forms_endpoint: Option<String>,

    /// Emit logs as JSON lines
    #[arg(long, env = "LOG_JSON")]
    pub log_json: Option<bool>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub site: SiteConfig,
    pub forms: FormsConfig,
    pub limits: LimitsConfig,
    pub log: LogConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub host: String,
    pub timeout_disabled: bool,
}

/// Site-wide details rendered into the page.
#[derive(Debug, Deserialize, Clone)]
pub struct SiteConfig {
    pub static_dir: PathBuf,
    /// Display form, e.g. `+1 (717) 242-0566`.
    pub phone: String,
    pub email: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct FormsConfig {
    /// Empty means submissions are only logged.
    pub endpoint: String,
    pub form_name: String,
    pub timeout_secs: u64,
}

impl FormsConfig {
    /// Parsed endpoint, `None` when unset.
    pub fn endpoint_url(&self) -> Result<Option<Url>, url::ParseError> {
        let raw = self.endpoint.trim();
        if raw.is_empty() {
            return Ok(None);
        }
        Url::parse(raw).map(Some)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.max(1))
    }
}

/// Token bucket for `POST /contact`.
#[derive(Debug, Deserialize, Clone)]
pub struct LimitsConfig {
    pub contact_per_second: f64,
    pub contact_burst: f64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LogConfig {
    pub json: bool,
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from_args(std::env::args())
    }

    pub fn load_from_args<I, T>(args: I) -> Result<Self, config::ConfigError>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let cli =
            Cli::try_parse_from(args).map_err(|e| config::ConfigError::Message(e.to_string()))?;

        // 1. Defaults
        let mut builder = Config::builder()
            .set_default("server.port", 3000)?
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.timeout_disabled", false)?
            .set_default("site.static_dir", "static")?
            .set_default("site.phone", "+1 (717) 242-0566")?
            .set_default("site.email", "info@noerr.com")?
            .set_default("forms.endpoint", "")?
            .set_default("forms.form_name", crate::contact::FORM_NAME)?
            .set_default("forms.timeout_secs", 10)?
            .set_default("limits.contact_per_second", 0.2)?
            .set_default("limits.contact_burst", 5.0)?
            .set_default("log.json", false)?;

        // 2. Config file: explicit path must exist, ./config.yaml is optional
        if let Some(path) = &cli.config {
            builder = builder.add_source(File::new(path, FileFormat::Yaml).required(true));
        } else if Path::new(CWD_CONFIG).exists() {
            builder = builder.add_source(File::new(CWD_CONFIG, FileFormat::Yaml).required(false));
        }

        // 3. Environment, e.g. NOERR_FORMS__ENDPOINT
        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        // 4. CLI flags (and their clap env fallbacks) win
        if let Some(port) = cli.port {
            builder = builder.set_override("server.port", port)?;
        }
        if let Some(host) = cli.host {
            builder = builder.set_override("server.host", host)?;
        }
        if let Some(dir) = cli.static_dir {
            builder = builder.set_override("site.static_dir", dir.to_string_lossy().into_owned())?;
        }
        if let Some(endpoint) = cli.forms_endpoint {
            builder = builder.set_override("forms.endpoint", endpoint)?;
        }
        if let Some(json) = cli.log_json {
            builder = builder.set_override("log.json", json)?;
        }

        let config: Self = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), config::ConfigError> {
        self.forms
            .endpoint_url()
            .map_err(|e| config::ConfigError::Message(format!("forms.endpoint: {e}")))?;
        if self.limits.contact_per_second <= 0.0 || self.limits.contact_burst < 1.0 {
            return Err(config::ConfigError::Message(
                "limits: contact_per_second must be > 0 and contact_burst >= 1".to_string(),
            ));
        }
        Ok(())
    }

    /// `host:port` for the listener.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forms_endpoint_url() {
        let mut forms = FormsConfig {
            endpoint: "  ".to_string(),
            form_name: "contact".to_string(),
            timeout_secs: 0,
        };
        assert_eq!(forms.endpoint_url().unwrap(), None);
        assert_eq!(forms.timeout(), Duration::from_secs(1));

        forms.endpoint = "https://forms.example.com/submit".to_string();
        assert_eq!(
            forms.endpoint_url().unwrap().unwrap().as_str(),
            "https://forms.example.com/submit"
        );

        forms.endpoint = "not a url".to_string();
        assert!(forms.endpoint_url().is_err());
    }
}
