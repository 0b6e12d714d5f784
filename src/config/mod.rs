//! Deployment configuration loading and validation.
//!
//! A deployment config is a flat record of constants (proxy URLs, branding,
//! support contact) read once at startup. It can be written as YAML, JSON
//! or as the `config.js` script the dashboard front-end consumes.

mod checks;
mod error;
mod fields;
mod format;
mod palette;
mod proxy;

pub use error::ConfigError;
pub use format::SourceFormat;
pub use palette::Palette;
pub use proxy::UserAppProxy;

use serde::Serialize;
use serde_json::Value;
use std::{fs, path::Path};
use tracing::{debug, info};

use fields::FieldReader;

/// Deployment-specific constants for one dashboard installation.
///
/// Every field is always declared in the source record; nullable fields
/// are `None` when the record says `null`, meaning "use the built-in
/// default".
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeploymentConfig {
    /// Verbose client-side logging.
    pub show_debug_msgs: bool,
    /// Endpoint of the CORS-relaying proxy.
    pub cloud_cors_proxy_url: String,
    /// Cloud API host to user-app proxy host, in declaration order.
    pub clouds_with_user_app_proxy: Vec<UserAppProxy>,
    /// Base path segment for routing (e.g. "exosphere").
    pub url_path_prefix: String,
    pub palette: Option<Palette>,
    /// URL or asset reference.
    pub logo: Option<String>,
    /// URL or asset reference.
    pub favicon: Option<String>,
    pub app_title: Option<String>,
    /// Login UI shown by default (e.g. "openstack").
    pub default_login_view: Option<String>,
    pub about_app_markdown: Option<String>,
    pub support_info_markdown: Option<String>,
    /// Address issue reports are sent to.
    pub user_support_email: String,
}

impl DeploymentConfig {
    /// Load and validate a deployment config file.
    ///
    /// The format is chosen from the file extension: `.yaml`/`.yml`,
    /// `.json` or `.js`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let format = SourceFormat::from_path(path)?;
        let content = fs::read_to_string(path)?;

        let config = Self::from_source(&content, format)?;

        info!(
            path = %path.display(),
            format = %format,
            proxies = config.clouds_with_user_app_proxy.len(),
            "Loaded deployment config"
        );

        Ok(config)
    }

    /// Parse and validate a deployment config from its source text.
    pub fn from_source(content: &str, format: SourceFormat) -> Result<Self, ConfigError> {
        let value = format.parse(content)?;
        debug!(format = %format, "Parsed deployment config source");
        Self::from_value(value)
    }

    /// Build and validate a deployment config from a generic record.
    pub fn from_value(value: Value) -> Result<Self, ConfigError> {
        let mut fields = FieldReader::new(value)?;

        let config = Self {
            show_debug_msgs: fields.required("showDebugMsgs")?,
            cloud_cors_proxy_url: fields.required("cloudCorsProxyUrl")?,
            clouds_with_user_app_proxy: fields.required("cloudsWithUserAppProxy")?,
            url_path_prefix: fields.required("urlPathPrefix")?,
            palette: fields.nullable("palette")?,
            logo: fields.nullable("logo")?,
            favicon: fields.nullable("favicon")?,
            app_title: fields.nullable("appTitle")?,
            default_login_view: fields.nullable("defaultLoginView")?,
            about_app_markdown: fields.nullable("aboutAppMarkdown")?,
            support_info_markdown: fields.nullable("supportInfoMarkdown")?,
            user_support_email: fields.required("userSupportEmail")?,
        };
        fields.finish();

        config.validate()?;

        Ok(config)
    }

    /// The record as a generic value, with every field present.
    pub fn to_value(&self) -> Result<Value, ConfigError> {
        Ok(serde_json::to_value(self)?)
    }

    /// Proxy host serving user applications for the given cloud API host.
    pub fn user_app_proxy(&self, cloud_host: &str) -> Option<&str> {
        self.clouds_with_user_app_proxy
            .iter()
            .find(|proxy| proxy.cloud_host().eq_ignore_ascii_case(cloud_host))
            .map(UserAppProxy::proxy_host)
    }

    /// Validate field contents beyond their types.
    fn validate(&self) -> Result<(), ConfigError> {
        checks::check_http_url(&self.cloud_cors_proxy_url)
            .map_err(|e| ConfigError::validation("cloudCorsProxyUrl", e))?;

        proxy::check_proxies(&self.clouds_with_user_app_proxy)
            .map_err(|e| ConfigError::validation("cloudsWithUserAppProxy", e))?;

        checks::check_path_prefix(&self.url_path_prefix)
            .map_err(|e| ConfigError::validation("urlPathPrefix", e))?;

        let branding = [
            ("logo", &self.logo),
            ("favicon", &self.favicon),
            ("appTitle", &self.app_title),
            ("defaultLoginView", &self.default_login_view),
        ];
        for (field, value) in branding {
            if let Some(value) = value {
                checks::check_not_blank(value).map_err(|e| ConfigError::validation(field, e))?;
            }
        }

        checks::check_email(&self.user_support_email)
            .map_err(|e| ConfigError::validation("userSupportEmail", e))?;

        Ok(())
    }
}
