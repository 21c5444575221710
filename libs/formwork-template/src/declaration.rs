// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Declaration types that a template document accumulates
//!
//! Property and output values are converted to their structural form at
//! insertion time, so a value the serializer cannot represent (a non-finite
//! float, a map with non-string keys) is rejected where it is supplied
//! rather than at render time.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::TemplateError;

/// A declared infrastructure resource: a type identifier plus properties
#[derive(Clone, Debug, Serialize)]
pub struct Resource {
    #[serde(rename = "Type")]
    type_id: String,
    #[serde(rename = "Properties", skip_serializing_if = "Map::is_empty")]
    properties: Map<String, Value>,
}

impl Resource {
    /// Create a resource declaration of the given type, with no properties
    pub fn new(type_id: impl Into<String>) -> Self {
        Self {
            type_id: type_id.into(),
            properties: Map::new(),
        }
    }

    /// Attach a property value, replacing any previous value for the name
    pub fn with_property(
        mut self,
        name: impl Into<String>,
        value: impl Serialize,
    ) -> Result<Self, TemplateError> {
        let name = name.into();
        let value = serde_json::to_value(value).map_err(|source| TemplateError::Value {
            name: name.clone(),
            source,
        })?;
        self.properties.insert(name, value);
        Ok(self)
    }

    pub fn type_id(&self) -> &str {
        &self.type_id
    }

    pub fn properties(&self) -> &Map<String, Value> {
        &self.properties
    }
}

/// A template parameter: a typed input slot the deployment tooling fills in
#[derive(Clone, Debug, Serialize)]
pub struct Parameter {
    #[serde(rename = "Type")]
    type_id: String,
    #[serde(rename = "Description", skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(rename = "Default", skip_serializing_if = "Option::is_none")]
    default: Option<Value>,
}

impl Parameter {
    pub fn new(type_id: impl Into<String>) -> Self {
        Self {
            type_id: type_id.into(),
            description: None,
            default: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_default(mut self, value: impl Serialize) -> Result<Self, TemplateError> {
        let value = serde_json::to_value(value).map_err(|source| TemplateError::Value {
            name: "Default".to_string(),
            source,
        })?;
        self.default = Some(value);
        Ok(self)
    }

    pub fn type_id(&self) -> &str {
        &self.type_id
    }
}

/// A template output: a named value surfaced after deployment
#[derive(Clone, Debug, Serialize)]
pub struct Output {
    #[serde(rename = "Description", skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(rename = "Value")]
    value: Value,
}

impl Output {
    pub fn new(value: impl Serialize) -> Result<Self, TemplateError> {
        let value = serde_json::to_value(value).map_err(|source| TemplateError::Value {
            name: "Value".to_string(),
            source,
        })?;
        Ok(Self {
            description: None,
            value,
        })
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn value(&self) -> &Value {
        &self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_builder() {
        let resource = Resource::new("AWS::S3::Bucket")
            .with_property("BucketName", "artifact-drop")
            .and_then(|r| r.with_property("VersioningConfiguration", serde_json::json!({"Status": "Enabled"})))
            .expect("properties should convert");

        assert_eq!(resource.type_id(), "AWS::S3::Bucket");
        assert_eq!(
            resource.properties().get("BucketName"),
            Some(&Value::String("artifact-drop".to_string()))
        );
    }

    #[test]
    fn test_property_replaces_previous_value() {
        let resource = Resource::new("AWS::EC2::Instance")
            .with_property("ImageId", "ami-old")
            .and_then(|r| r.with_property("ImageId", "ami-new"))
            .expect("properties should convert");

        assert_eq!(
            resource.properties().get("ImageId"),
            Some(&Value::String("ami-new".to_string()))
        );
        assert_eq!(resource.properties().len(), 1);
    }

    #[test]
    fn test_non_finite_property_rejected() {
        let err = Resource::new("AWS::EC2::Instance")
            .with_property("Weight", f64::NAN)
            .expect_err("NaN has no structural representation");

        match err {
            TemplateError::Value { name, .. } => assert_eq!(name, "Weight"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_output_value_conversion() {
        let output = Output::new(42).expect("integers convert");
        assert_eq!(output.value(), &Value::from(42));

        Output::new(f64::INFINITY).expect_err("infinity has no structural representation");
    }
}
