// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Loading declaration files into a template document
//!
//! The on-disk format mirrors the rendered sections: optional `Description`,
//! then `Parameters`, `Resources` and `Outputs` keyed by logical ID.
//! Declarations feed through the library's add methods so logical-ID and
//! value validation applies to file input exactly as it does to API input.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};
use formwork_template::{Output, Parameter, Resource, TemplateDocument};
use serde::Deserialize;
use serde_json::{Map, Value};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct DeclarationFile {
    #[serde(rename = "Description")]
    description: Option<String>,
    #[serde(rename = "Parameters", default)]
    parameters: BTreeMap<String, ParameterDecl>,
    #[serde(rename = "Resources", default)]
    resources: BTreeMap<String, ResourceDecl>,
    #[serde(rename = "Outputs", default)]
    outputs: BTreeMap<String, OutputDecl>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ParameterDecl {
    #[serde(rename = "Type")]
    type_id: String,
    #[serde(rename = "Description")]
    description: Option<String>,
    #[serde(rename = "Default")]
    default: Option<Value>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ResourceDecl {
    #[serde(rename = "Type")]
    type_id: String,
    #[serde(rename = "Properties", default)]
    properties: Map<String, Value>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct OutputDecl {
    #[serde(rename = "Value")]
    value: Value,
    #[serde(rename = "Description")]
    description: Option<String>,
}

/// Read a declaration file and add its contents to `document`
pub fn apply_to(document: &mut TemplateDocument, path: &Path) -> Result<()> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let file: DeclarationFile = serde_json::from_str(&text)
        .with_context(|| format!("failed to parse {}", path.display()))?;

    if let Some(description) = file.description {
        document.set_description(description);
    }
    for (id, decl) in file.parameters {
        let mut parameter = Parameter::new(decl.type_id);
        if let Some(description) = decl.description {
            parameter = parameter.with_description(description);
        }
        if let Some(default) = decl.default {
            parameter = parameter.with_default(default)?;
        }
        document.add_parameter(id, parameter)?;
    }
    for (id, decl) in file.resources {
        let mut resource = Resource::new(decl.type_id);
        for (name, value) in decl.properties {
            resource = resource.with_property(name, value)?;
        }
        document.add_resource(id, resource)?;
    }
    for (id, decl) in file.outputs {
        let mut output = Output::new(decl.value)?;
        if let Some(description) = decl.description {
            output = output.with_description(description);
        }
        document.add_output(id, output)?;
    }
    Ok(())
}
