//! # jsonhome
//!
//! Model, build and serialize JSON Home (`application/json-home`) resource
//! discovery documents.
//!
//! A [`Document`] maps link-relation names to [`Resource`]s. Each resource
//! carries either a direct URI or an RFC 6570 URI template plus variable
//! descriptions, and advisory hints such as allowed HTTP methods, accepted
//! media types and documentation links. The whole document round-trips
//! to and from JSON.
//!
//! ## Example
//!
//! ```
//! use jsonhome::{Document, Resource, Variables};
//!
//! let mut doc = Document::new();
//! doc.add_resource(
//!     "http://example.com/rel/widgets",
//!     Resource::builder()
//!         .uri("/widgets{/widget_id}")
//!         .uri_vars([("widget_id", "http://example.com/param/widget_id")])
//!         .allow_get(true)
//!         .accept_post(["application/json"]),
//! )?;
//!
//! let mut vars = Variables::new();
//! vars.insert("widget_id".to_owned(), "1".to_owned());
//! assert_eq!(doc.get_uri("http://example.com/rel/widgets", &vars)?, "/widgets/1");
//!
//! let text = doc.to_json()?;
//! assert_eq!(Document::from_json(&text)?, doc);
//! # Ok::<(), jsonhome::Error>(())
//! ```

pub mod builder;
pub mod document;
pub mod error;
pub mod resource;

mod template;

pub use builder::ResourceBuilder;
pub use document::Document;
pub use error::{Error, Result};
pub use resource::{Hints, Method, Resource};

use std::collections::BTreeMap;

/// The media type of a JSON Home document.
pub const MEDIA_TYPE: &str = "application/json-home";

/// Template variable bindings, used both to resolve a resource URI and to
/// describe the variables of a URI template.
pub type Variables = BTreeMap<String, String>;
