//! Rendering a deployment config into the `config.js` script served to the
//! dashboard front-end.

use crate::config::{ConfigError, DeploymentConfig};

/// Renders `config` as `'use strict'` followed by `var config = { ... };`.
///
/// The object literal is pretty-printed JSON with fields in declaration
/// order, so the output loads back through [`SourceFormat::ConfigJs`].
///
/// [`SourceFormat::ConfigJs`]: crate::config::SourceFormat::ConfigJs
pub fn to_config_js(config: &DeploymentConfig) -> Result<String, ConfigError> {
    let literal = serde_json::to_string_pretty(config)?;
    Ok(format!("'use strict'\n\nvar config = {};\n", literal))
}
