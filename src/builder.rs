//! Builder for creating resources with multiple attributes in one go.

use std::collections::BTreeMap;

use crate::resource::Method;
use crate::{error::Error, Resource, Result, Variables};

/// A factory for [`Resource`] values.
///
/// The URI of the built resource must be given exactly one way: a direct
/// [`href`](Self::href), an explicit [`href_template`](Self::href_template)
/// plus [`href_vars`](Self::href_vars), or a [`uri`](Self::uri) string that
/// is stored as a direct link or as a template depending on whether it
/// references any variables.
///
/// ## Example
///
/// ```
/// use jsonhome::Resource;
///
/// let resource = Resource::builder()
///     .uri("/widgets{/widget_id}")
///     .uri_vars([("widget_id", "https://example.com/param/widget_id")])
///     .accept_patch(["application/json-patch+json"])
///     .allow_get(true)
///     .build()?;
///
/// assert_eq!(resource.href_template(), Some("/widgets{/widget_id}"));
/// assert_eq!(resource.allow(), ["GET", "PATCH"]);
/// # Ok::<(), jsonhome::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ResourceBuilder {
    uri: Option<String>,
    uri_vars: Variables,
    href: Option<String>,
    href_template: Option<String>,
    href_vars: Variables,
    docs: Option<String>,
    allow: BTreeMap<Method, bool>,
    accept_patch: Vec<String>,
    accept_post: Vec<String>,
    accept_prefer: Vec<String>,
    accept_ranges: Vec<String>,
}

impl ResourceBuilder {
    /// A URI or URI template for the resource; see [`Resource::set_uri`].
    pub fn uri(mut self, uri: impl Into<String>) -> Self {
        self.uri = Some(uri.into());
        self
    }

    /// Variable descriptions consumed when [`uri`](Self::uri) is a template.
    /// Entries for variables the template does not reference are silently
    /// dropped; the whole set is ignored when `uri` is a direct link.
    pub fn uri_vars<K, V, I>(mut self, vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.uri_vars
            .extend(vars.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// A direct URI link to the resource.
    pub fn href(mut self, href: impl Into<String>) -> Self {
        self.href = Some(href.into());
        self
    }

    /// An RFC 6570 template from which the resource URI is determined.
    pub fn href_template(mut self, template: impl Into<String>) -> Self {
        self.href_template = Some(template.into());
        self
    }

    /// Template variable names mapped to URIs describing their meaning,
    /// stored as given.
    pub fn href_vars<K, V, I>(mut self, vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.href_vars
            .extend(vars.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// The location of human-readable documentation for the resource.
    pub fn docs(mut self, docs: impl Into<String>) -> Self {
        self.docs = Some(docs.into());
        self
    }

    /// Allows or disallows an HTTP method on the resource.
    pub fn allow(mut self, method: Method, allowed: bool) -> Self {
        self.allow.insert(method, allowed);
        self
    }

    /// Allows or disallows the DELETE method on the resource.
    pub fn allow_delete(self, allowed: bool) -> Self {
        self.allow(Method::Delete, allowed)
    }

    /// Allows or disallows the GET method on the resource.
    pub fn allow_get(self, allowed: bool) -> Self {
        self.allow(Method::Get, allowed)
    }

    /// Allows or disallows the HEAD method on the resource.
    pub fn allow_head(self, allowed: bool) -> Self {
        self.allow(Method::Head, allowed)
    }

    /// Allows or disallows the OPTIONS method on the resource.
    pub fn allow_options(self, allowed: bool) -> Self {
        self.allow(Method::Options, allowed)
    }

    /// Allows or disallows the PATCH method on the resource.
    pub fn allow_patch(self, allowed: bool) -> Self {
        self.allow(Method::Patch, allowed)
    }

    /// Allows or disallows the POST method on the resource.
    pub fn allow_post(self, allowed: bool) -> Self {
        self.allow(Method::Post, allowed)
    }

    /// Allows or disallows the PUT method on the resource.
    pub fn allow_put(self, allowed: bool) -> Self {
        self.allow(Method::Put, allowed)
    }

    /// PATCH request formats accepted by the resource. Implies
    /// `allow_patch(true)` unless an allow flag for PATCH is given
    /// explicitly.
    pub fn accept_patch<I>(mut self, formats: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.accept_patch.extend(formats.into_iter().map(Into::into));
        self
    }

    /// POST request formats accepted by the resource. Implies
    /// `allow_post(true)` unless an allow flag for POST is given explicitly.
    pub fn accept_post<I>(mut self, formats: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.accept_post.extend(formats.into_iter().map(Into::into));
        self
    }

    /// Preferences supported by the resource.
    pub fn accept_prefer<I>(mut self, preferences: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.accept_prefer
            .extend(preferences.into_iter().map(Into::into));
        self
    }

    /// Range-specifiers available for the resource.
    pub fn accept_ranges<I>(mut self, ranges: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.accept_ranges.extend(ranges.into_iter().map(Into::into));
        self
    }

    /// Builds the resource.
    ///
    /// Fails with [`Error::ConflictingUri`] when the URI is specified more
    /// than one way, and with [`Error::MissingValues`] when
    /// [`uri`](Self::uri) is a template referencing variables that
    /// [`uri_vars`](Self::uri_vars) does not cover.
    pub fn build(self) -> Result<Resource> {
        let mut allow = self.allow;

        // SHOULD-level consistency from the JSON Home draft: advertising
        // accepted PATCH/POST formats implies the method is allowed.
        if !self.accept_patch.is_empty() {
            allow.entry(Method::Patch).or_insert(true);
        }
        if !self.accept_post.is_empty() {
            allow.entry(Method::Post).or_insert(true);
        }

        let template_given = self.href_template.is_some() || !self.href_vars.is_empty();
        let ways = [self.uri.is_some(), self.href.is_some(), template_given];
        if ways.iter().filter(|&&given| given).count() > 1 {
            return Err(Error::ConflictingUri(
                "URI must be set via exactly one of uri, href or href_template".to_owned(),
            ));
        }

        let mut resource = Resource::new();

        if let Some(uri) = &self.uri {
            resource.set_uri(uri, &self.uri_vars)?;
        }
        if let Some(href) = self.href {
            resource.set_href(href);
        }
        if let Some(href_template) = self.href_template {
            resource.set_href_template(href_template);
        }
        if !self.href_vars.is_empty() {
            *resource.href_vars_mut() = self.href_vars;
        }
        if let Some(docs) = self.docs {
            resource.set_docs(docs);
        }

        // BTreeMap iteration applies the flags in canonical method order so
        // the resulting allow list is deterministic.
        for (method, allowed) in allow {
            resource.set_allowed(method, allowed);
        }

        if !self.accept_patch.is_empty() {
            resource.accept_patch_mut().extend(self.accept_patch);
        }
        if !self.accept_post.is_empty() {
            resource.accept_post_mut().extend(self.accept_post);
        }
        if !self.accept_prefer.is_empty() {
            resource.accept_prefer_mut().extend(self.accept_prefer);
        }
        if !self.accept_ranges.is_empty() {
            resource.accept_ranges_mut().extend(self.accept_ranges);
        }

        Ok(resource)
    }
}
