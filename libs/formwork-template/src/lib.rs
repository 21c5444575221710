// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! In-memory infrastructure template documents
//!
//! A [`TemplateDocument`] is a mutable, add-only description of a set of
//! declared resources, parameters and outputs. It renders to a canonical
//! text form: JSON with four-space indentation, a fixed section order, and
//! map keys in sorted order. The render is a pure structural serialization —
//! no timestamps or generated identifiers — so the same document state
//! always produces byte-identical output.
//!
//! # Example
//!
//! ```
//! use formwork_template::{Resource, TemplateDocument};
//!
//! # fn main() -> Result<(), formwork_template::TemplateError> {
//! let mut doc = TemplateDocument::new();
//! doc.set_description("Edge cache fleet");
//! doc.add_resource(
//!     "CacheNode",
//!     Resource::new("AWS::EC2::Instance").with_property("ImageId", "ami-0abcd1234")?,
//! )?;
//! let text = doc.render()?;
//! assert!(text.contains("CacheNode"));
//! # Ok(())
//! # }
//! ```

pub mod declaration;
pub mod document;
pub mod error;

pub use declaration::{Output, Parameter, Resource};
pub use document::{FORMAT_VERSION, TemplateDocument};
pub use error::TemplateError;
