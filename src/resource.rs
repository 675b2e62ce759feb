//! The resource model for JSON Home documents.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::builder::ResourceBuilder;
use crate::{error::Error, template, Result, Variables};

/// HTTP methods that can be hinted as allowed on a resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Method {
    Delete,
    Get,
    Head,
    Options,
    Patch,
    Post,
    Put,
}

impl Method {
    /// Every method, in canonical order.
    pub const ALL: [Method; 7] = [
        Method::Delete,
        Method::Get,
        Method::Head,
        Method::Options,
        Method::Patch,
        Method::Post,
        Method::Put,
    ];

    /// The canonical uppercase token used in the `allow` hint.
    pub const fn as_str(self) -> &'static str {
        match self {
            Method::Delete => "DELETE",
            Method::Get => "GET",
            Method::Head => "HEAD",
            Method::Options => "OPTIONS",
            Method::Patch => "PATCH",
            Method::Post => "POST",
            Method::Put => "PUT",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Additional hint information defined by a resource.
///
/// Hints allow clients to find relevant information about interacting with a
/// resource beforehand, as a means of optimising communications and
/// advertising available behaviours. They are not a contract and are to be
/// taken as advisory only: the runtime behaviour of the resource always
/// overrides hinted information.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Hints {
    /// HTTP methods the client can expect to use with the resource;
    /// equivalent to the `Allow` HTTP response header.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow: Option<Vec<String>>,

    /// PATCH request formats accepted by the resource; equivalent to the
    /// `Accept-Patch` HTTP response header.
    #[serde(rename = "accept-patch", skip_serializing_if = "Option::is_none")]
    pub accept_patch: Option<Vec<String>>,

    /// POST request formats accepted by the resource.
    #[serde(rename = "accept-post", skip_serializing_if = "Option::is_none")]
    pub accept_post: Option<Vec<String>>,

    /// Preferences supported by the resource. A preference can be ignored by
    /// the server.
    #[serde(rename = "accept-prefer", skip_serializing_if = "Option::is_none")]
    pub accept_prefer: Option<Vec<String>>,

    /// Range-specifiers available for the resource; equivalent to the
    /// `Accept-Ranges` HTTP response header.
    #[serde(rename = "accept-ranges", skip_serializing_if = "Option::is_none")]
    pub accept_ranges: Option<Vec<String>>,

    /// The location of human-readable documentation for the resource.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub docs: Option<String>,

    /// Hint members this library does not model, preserved so that documents
    /// from newer peers round-trip losslessly.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Hints {
    /// Returns `true` if no hint member is set.
    pub fn is_empty(&self) -> bool {
        self.allow.is_none()
            && self.accept_patch.is_none()
            && self.accept_post.is_none()
            && self.accept_prefer.is_none()
            && self.accept_ranges.is_none()
            && self.docs.is_none()
            && self.extra.is_empty()
    }
}

/// One resource that exists within a JSON Home document.
///
/// A resource carries either a direct URI (`href`) or an RFC 6570 URI
/// template (`href-template`) plus variable descriptions (`href-vars`),
/// and optional advisory [`Hints`].
///
/// Absent containers are never materialized by read accessors: `allow()`,
/// the `accept_*()` accessors and `href_vars()` return empty defaults when
/// the underlying member is missing, and only the `*_mut` accessors and
/// setters create it. A resource that is only ever read serializes exactly
/// as it was parsed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    #[serde(skip_serializing_if = "Option::is_none")]
    href: Option<String>,

    #[serde(rename = "href-template", skip_serializing_if = "Option::is_none")]
    href_template: Option<String>,

    #[serde(rename = "href-vars", skip_serializing_if = "Option::is_none")]
    href_vars: Option<Variables>,

    #[serde(skip_serializing_if = "Option::is_none")]
    hints: Option<Hints>,

    #[serde(flatten)]
    extra: Map<String, Value>,
}

fn empty_vars() -> &'static Variables {
    static EMPTY: Variables = Variables::new();
    &EMPTY
}

impl Resource {
    /// Creates an empty resource.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a builder for creating a resource with multiple attributes in
    /// one go.
    pub fn builder() -> ResourceBuilder {
        ResourceBuilder::default()
    }

    /// A direct URI link to the resource.
    pub fn href(&self) -> Option<&str> {
        self.href.as_deref()
    }

    pub fn set_href(&mut self, href: impl Into<String>) {
        self.href = Some(href.into());
    }

    /// An RFC 6570 template from which the resource URI can be determined.
    pub fn href_template(&self) -> Option<&str> {
        self.href_template.as_deref()
    }

    pub fn set_href_template(&mut self, template: impl Into<String>) {
        self.href_template = Some(template.into());
    }

    /// Template variable names mapped to URIs describing their meaning.
    pub fn href_vars(&self) -> &Variables {
        self.href_vars.as_ref().unwrap_or(empty_vars())
    }

    pub fn href_vars_mut(&mut self) -> &mut Variables {
        self.href_vars.get_or_insert_with(Variables::new)
    }

    /// The advisory hints defined by the resource, if any.
    pub fn hints(&self) -> Option<&Hints> {
        self.hints.as_ref()
    }

    /// The advisory hints, materialized if absent.
    pub fn hints_mut(&mut self) -> &mut Hints {
        self.hints.get_or_insert_with(Hints::default)
    }

    /// The `allow` hint, or an empty slice if it was never set.
    pub fn allow(&self) -> &[String] {
        self.hints
            .as_ref()
            .and_then(|h| h.allow.as_deref())
            .unwrap_or(&[])
    }

    /// The `allow` hint, materialized if absent.
    pub fn allow_mut(&mut self) -> &mut Vec<String> {
        self.hints_mut().allow.get_or_insert_with(Vec::new)
    }

    /// The `accept-patch` hint, or an empty slice if it was never set.
    pub fn accept_patch(&self) -> &[String] {
        self.hints
            .as_ref()
            .and_then(|h| h.accept_patch.as_deref())
            .unwrap_or(&[])
    }

    /// The `accept-patch` hint, materialized if absent.
    pub fn accept_patch_mut(&mut self) -> &mut Vec<String> {
        self.hints_mut().accept_patch.get_or_insert_with(Vec::new)
    }

    /// The `accept-post` hint, or an empty slice if it was never set.
    pub fn accept_post(&self) -> &[String] {
        self.hints
            .as_ref()
            .and_then(|h| h.accept_post.as_deref())
            .unwrap_or(&[])
    }

    /// The `accept-post` hint, materialized if absent.
    pub fn accept_post_mut(&mut self) -> &mut Vec<String> {
        self.hints_mut().accept_post.get_or_insert_with(Vec::new)
    }

    /// The `accept-prefer` hint, or an empty slice if it was never set.
    pub fn accept_prefer(&self) -> &[String] {
        self.hints
            .as_ref()
            .and_then(|h| h.accept_prefer.as_deref())
            .unwrap_or(&[])
    }

    /// The `accept-prefer` hint, materialized if absent.
    pub fn accept_prefer_mut(&mut self) -> &mut Vec<String> {
        self.hints_mut().accept_prefer.get_or_insert_with(Vec::new)
    }

    /// The `accept-ranges` hint, or an empty slice if it was never set.
    pub fn accept_ranges(&self) -> &[String] {
        self.hints
            .as_ref()
            .and_then(|h| h.accept_ranges.as_deref())
            .unwrap_or(&[])
    }

    /// The `accept-ranges` hint, materialized if absent.
    pub fn accept_ranges_mut(&mut self) -> &mut Vec<String> {
        self.hints_mut().accept_ranges.get_or_insert_with(Vec::new)
    }

    /// The location of human-readable documentation for the resource.
    pub fn docs(&self) -> Option<&str> {
        self.hints.as_ref().and_then(|h| h.docs.as_deref())
    }

    pub fn set_docs(&mut self, docs: impl Into<String>) {
        self.hints_mut().docs = Some(docs.into());
    }

    /// Resource members this library does not model, preserved for round
    /// trips.
    pub fn extra(&self) -> &Map<String, Value> {
        &self.extra
    }

    pub fn extra_mut(&mut self) -> &mut Map<String, Value> {
        &mut self.extra
    }

    /// Tests whether an HTTP method can be used with this resource.
    ///
    /// Three-valued: returns `None` if the resource defines no `allow` hint
    /// at all, otherwise whether `method` matches an entry
    /// case-insensitively.
    pub fn is_allowed(&self, method: &str) -> Option<bool> {
        let allow = self.hints.as_ref()?.allow.as_ref()?;
        Some(allow.iter().any(|m| m.eq_ignore_ascii_case(method)))
    }

    /// [`Resource::is_allowed`] for a known [`Method`].
    pub fn allowed(&self, method: Method) -> Option<bool> {
        self.is_allowed(method.as_str())
    }

    /// Marks an HTTP method as allowed or not in the `allow` hint.
    ///
    /// Allowing appends the canonical uppercase token unless a
    /// case-insensitive match is already present. Disallowing removes any
    /// case-insensitive match; when no `allow` hint exists there is nothing
    /// to remove and the list is not materialized.
    pub fn set_allowed(&mut self, method: Method, allowed: bool) {
        match (self.allowed(method), allowed) {
            (Some(true), true) | (None, false) | (Some(false), false) => {}
            (_, true) => self.allow_mut().push(method.as_str().to_owned()),
            (Some(true), false) => {
                if let Some(allow) = self.hints.as_mut().and_then(|h| h.allow.as_mut()) {
                    allow.retain(|m| !m.eq_ignore_ascii_case(method.as_str()));
                }
            }
        }
    }

    /// Resolves the URI for this resource.
    ///
    /// A direct `href` is returned unchanged and `variables` are ignored.
    /// Otherwise `href-template` is expanded against `variables` per
    /// RFC 6570. Fails with [`Error::MissingValues`] when neither is set.
    pub fn get_uri(&self, variables: &Variables) -> Result<String> {
        if let Some(href) = &self.href {
            return Ok(href.clone());
        }

        if let Some(href_template) = &self.href_template {
            return template::expand(href_template, variables);
        }

        Err(Error::MissingValues(
            "couldn't determine href from values in resource".to_owned(),
        ))
    }

    /// Sets the URI of this resource from a URI or URI template string.
    ///
    /// When `uri` references template variables, every referenced name must
    /// have a binding in `variables` (its describing URI); exactly the
    /// referenced subset is kept as `href-vars` and any previous `href` is
    /// cleared. When `uri` references no variables it is stored as a direct
    /// `href` and any previous template state is cleared.
    pub fn set_uri(&mut self, uri: &str, variables: &Variables) -> Result<()> {
        let names = template::variable_names(uri)?;

        if names.is_empty() {
            self.href = Some(uri.to_owned());
            self.href_template = None;
            self.href_vars = None;
            return Ok(());
        }

        let mut vars = Variables::new();
        let mut missing = Vec::new();
        for name in names {
            match variables.get(&name) {
                Some(value) => {
                    vars.insert(name, value.clone());
                }
                None => missing.push(name),
            }
        }

        if !missing.is_empty() {
            return Err(Error::MissingValues(format!(
                "no URI given for template variable(s): {}",
                missing.join(", ")
            )));
        }

        self.href = None;
        self.href_template = Some(uri.to_owned());
        self.href_vars = Some(vars);
        Ok(())
    }
}
