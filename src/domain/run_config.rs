//! The persisted run configuration.

use serde::{Deserialize, Serialize};
use serde_json::ser::{PrettyFormatter, Serializer};

use super::error::AppError;
use super::schema::Schema;

/// Schemas selected for a run, optionally with the origin they were discovered in.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunConfig {
    /// Absent when schema paths were supplied explicitly instead of discovered.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schemas_origin: Option<String>,
    pub selected_schemas: Vec<Schema>,
}

impl RunConfig {
    pub fn new(schemas_origin: Option<String>, selected_schemas: Vec<Schema>) -> Self {
        Self { schemas_origin, selected_schemas }
    }

    /// Render as tab-indented JSON, the on-disk format of the run-control file.
    pub fn to_pretty_json(&self) -> Result<String, AppError> {
        let mut buf = Vec::new();
        let mut serializer = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"\t"));
        self.serialize(&mut serializer)?;
        String::from_utf8(buf).map_err(|e| AppError::config_error(e.to_string()))
    }

    pub fn from_json(content: &str) -> Result<Self, AppError> {
        Ok(serde_json::from_str(content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pretty_json_uses_tab_indentation() {
        let config = RunConfig::new(Some("/srv/specs".into()), vec![Schema::new("a.yaml", 1234)]);
        let json = config.to_pretty_json().unwrap();
        assert_eq!(
            json,
            "{\n\t\"schemasOrigin\": \"/srv/specs\",\n\t\"selectedSchemas\": [\n\t\t{\n\t\t\t\"path\": \"a.yaml\",\n\t\t\t\"port\": 1234\n\t\t}\n\t]\n}"
        );
    }

    #[test]
    fn origin_is_omitted_when_absent() {
        let config = RunConfig::new(None, vec![Schema::new("p", 1)]);
        let json = config.to_pretty_json().unwrap();
        assert!(!json.contains("schemasOrigin"));
    }

    #[test]
    fn parses_config_without_origin() {
        let config = RunConfig::from_json(r#"{"selectedSchemas":[{"path":"p","port":1}]}"#).unwrap();
        assert_eq!(config, RunConfig::new(None, vec![Schema::new("p", 1)]));
    }

    #[test]
    fn rejects_out_of_range_ports() {
        assert!(RunConfig::from_json(r#"{"selectedSchemas":[{"path":"p","port":70000}]}"#).is_err());
    }

    #[test]
    fn rejects_null_document() {
        assert!(RunConfig::from_json("null").is_err());
    }
}
