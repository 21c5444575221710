// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! The template document and its canonical render

use std::collections::BTreeMap;

use serde::ser::{Serialize, SerializeStruct, Serializer};
use serde_json::Value;

use crate::declaration::{Output, Parameter, Resource};
use crate::error::TemplateError;

/// Format version stamped into every rendered document
pub const FORMAT_VERSION: &str = "2010-09-09";

/// Mutable, in-memory description of a set of declared resources
///
/// Declarations are add-only: sections accumulate entries and are never
/// replaced wholesale. Logical IDs must be non-empty ASCII alphanumerics and
/// unique within their section; violations are rejected at insertion.
///
/// The sections are `BTreeMap`s, so the canonical render lists entries in
/// sorted logical-ID order regardless of insertion order.
#[derive(Clone, Debug, Default)]
pub struct TemplateDocument {
    description: Option<String>,
    parameters: BTreeMap<String, Parameter>,
    resources: BTreeMap<String, Resource>,
    outputs: BTreeMap<String, Output>,
}

impl TemplateDocument {
    /// Create an empty document
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the document description, replacing any previous one
    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = Some(description.into());
    }

    /// Declare a parameter under the given logical ID
    pub fn add_parameter(
        &mut self,
        id: impl Into<String>,
        parameter: Parameter,
    ) -> Result<(), TemplateError> {
        insert_declared(&mut self.parameters, id.into(), parameter)
    }

    /// Declare a resource under the given logical ID
    pub fn add_resource(
        &mut self,
        id: impl Into<String>,
        resource: Resource,
    ) -> Result<(), TemplateError> {
        insert_declared(&mut self.resources, id.into(), resource)
    }

    /// Declare an output under the given logical ID
    pub fn add_output(&mut self, id: impl Into<String>, output: Output) -> Result<(), TemplateError> {
        insert_declared(&mut self.outputs, id.into(), output)
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn parameters(&self) -> &BTreeMap<String, Parameter> {
        &self.parameters
    }

    pub fn resources(&self) -> &BTreeMap<String, Resource> {
        &self.resources
    }

    pub fn outputs(&self) -> &BTreeMap<String, Output> {
        &self.outputs
    }

    pub fn resource(&self, id: &str) -> Option<&Resource> {
        self.resources.get(id)
    }

    /// True when nothing has been declared yet
    pub fn is_empty(&self) -> bool {
        self.description.is_none()
            && self.parameters.is_empty()
            && self.resources.is_empty()
            && self.outputs.is_empty()
    }

    /// Render the document to its canonical text form
    ///
    /// Four-space-indented JSON with a fixed section order and sorted map
    /// keys. Deterministic: the same document state renders to
    /// byte-identical output.
    pub fn render(&self) -> Result<String, TemplateError> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut ser)?;
        Ok(String::from_utf8(buf)?)
    }

    /// Structural form of the document, for callers that post-process
    pub fn to_value(&self) -> Result<Value, TemplateError> {
        Ok(serde_json::to_value(self)?)
    }
}

fn insert_declared<T>(
    section: &mut BTreeMap<String, T>,
    id: String,
    declaration: T,
) -> Result<(), TemplateError> {
    if id.is_empty() || !id.bytes().all(|b| b.is_ascii_alphanumeric()) {
        return Err(TemplateError::InvalidLogicalId(id));
    }
    if section.contains_key(&id) {
        return Err(TemplateError::DuplicateLogicalId(id));
    }
    section.insert(id, declaration);
    Ok(())
}

impl Serialize for TemplateDocument {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        // Version and Resources always render; the other sections only when
        // populated. Section order is fixed here, not alphabetical.
        let mut fields = 2;
        if self.description.is_some() {
            fields += 1;
        }
        if !self.parameters.is_empty() {
            fields += 1;
        }
        if !self.outputs.is_empty() {
            fields += 1;
        }

        let mut doc = serializer.serialize_struct("TemplateDocument", fields)?;
        doc.serialize_field("AWSTemplateFormatVersion", FORMAT_VERSION)?;
        if let Some(description) = &self.description {
            doc.serialize_field("Description", description)?;
        }
        if !self.parameters.is_empty() {
            doc.serialize_field("Parameters", &self.parameters)?;
        }
        doc.serialize_field("Resources", &self.resources)?;
        if !self.outputs.is_empty() {
            doc.serialize_field("Outputs", &self.outputs)?;
        }
        doc.end()
    }
}
