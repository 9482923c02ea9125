use crate::error::MelodyforgeError;
use serde::{Deserialize, Serialize};

/// Trait for configuration sections
pub trait ConfigSection: Serialize + for<'de> Deserialize<'de> + Default + Clone {
    fn section_name() -> &'static str;
    fn validate(&self) -> Result<(), MelodyforgeError>;
    fn to_manifest(&self) -> ConfigManifest;
}

/// Configuration manifest for UI generation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigManifest {
    pub section: String,
    pub fields: Vec<FieldManifest>,
}

impl ConfigManifest {
    pub fn field(&self, name: &str) -> Option<&FieldManifest> {
        self.fields.iter().find(|f| f.name == name)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldManifest {
    pub name: String,
    pub label: String,
    pub field_type: String,
    pub default: serde_json::Value,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub description: String,
}

impl FieldManifest {
    /// Integer field with an inclusive range
    pub fn integer(name: &str, label: &str, default: u64, min: u64, max: u64, description: &str) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            field_type: "integer".to_string(),
            default: serde_json::json!(default),
            min: Some(min as f64),
            max: Some(max as f64),
            description: description.to_string(),
        }
    }

    pub fn float(name: &str, label: &str, default: f64, min: f64, max: f64, description: &str) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            field_type: "float".to_string(),
            default: serde_json::json!(default),
            min: Some(min),
            max: Some(max),
            description: description.to_string(),
        }
    }

    pub fn boolean(name: &str, label: &str, default: bool, description: &str) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            field_type: "boolean".to_string(),
            default: serde_json::json!(default),
            min: None,
            max: None,
            description: description.to_string(),
        }
    }
}
