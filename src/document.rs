//! The document model: a mapping from link relations to resources.

use std::collections::btree_map::{BTreeMap, Entry};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{error::Error, Resource, ResourceBuilder, Result, Variables};

/// A model of a JSON Home document that can be built up, queried and
/// serialized.
///
/// A document maps link-relation names to the [`Resource`]s it owns. Each
/// relation is unique: inserting a second resource under an existing relation
/// fails without touching the document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    resources: BTreeMap<String, Resource>,
}

impl Document {
    /// Creates an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of resources in the document.
    pub fn len(&self) -> usize {
        self.resources.len()
    }

    /// Returns `true` if the document contains no resources.
    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }

    /// Returns `true` if a resource is registered under `relation`.
    pub fn contains(&self, relation: &str) -> bool {
        self.resources.contains_key(relation)
    }

    /// The resource registered under `relation`, if any.
    pub fn get(&self, relation: &str) -> Option<&Resource> {
        self.resources.get(relation)
    }

    pub fn get_mut(&mut self, relation: &str) -> Option<&mut Resource> {
        self.resources.get_mut(relation)
    }

    /// Iterates over the registered relation names.
    pub fn relations(&self) -> impl Iterator<Item = &str> {
        self.resources.keys().map(String::as_str)
    }

    /// Iterates over `(relation, resource)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Resource)> {
        self.resources.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Inserts `resource` under `relation`.
    ///
    /// Fails with [`Error::ResourceAlreadyExists`] if the relation is taken;
    /// the existing entry is left untouched.
    pub fn insert(&mut self, relation: impl Into<String>, resource: Resource) -> Result<()> {
        match self.resources.entry(relation.into()) {
            Entry::Occupied(entry) => Err(Error::ResourceAlreadyExists(entry.key().clone())),
            Entry::Vacant(entry) => {
                entry.insert(resource);
                Ok(())
            }
        }
    }

    /// Builds a resource and adds it to the document.
    ///
    /// Returns a mutable reference to the freshly inserted resource so the
    /// caller can perform additional manipulation in place.
    ///
    /// ```
    /// use jsonhome::{Document, Resource};
    ///
    /// let mut doc = Document::new();
    /// doc.add_resource("widgets", Resource::builder().href("/widgets"))?;
    /// assert_eq!(doc.get("widgets").and_then(|r| r.href()), Some("/widgets"));
    /// # Ok::<(), jsonhome::Error>(())
    /// ```
    pub fn add_resource(
        &mut self,
        relation: impl Into<String>,
        builder: ResourceBuilder,
    ) -> Result<&mut Resource> {
        let resource = builder.build()?;
        match self.resources.entry(relation.into()) {
            Entry::Occupied(entry) => Err(Error::ResourceAlreadyExists(entry.key().clone())),
            Entry::Vacant(entry) => Ok(entry.insert(resource)),
        }
    }

    /// Resolves the URI of the resource registered under `relation`.
    ///
    /// Fails with [`Error::UnknownResource`] when the relation is absent,
    /// otherwise delegates to [`Resource::get_uri`].
    pub fn get_uri(&self, relation: &str, variables: &Variables) -> Result<String> {
        let resource = self
            .get(relation)
            .ok_or_else(|| Error::UnknownResource(relation.to_owned()))?;
        resource.get_uri(variables)
    }

    /// Converts the document into a plain JSON value in json-home format.
    pub fn to_value(&self) -> Result<Value> {
        Ok(serde_json::to_value(self)?)
    }

    /// Serializes the document as a compact JSON string.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Serializes the document as a pretty-printed JSON string.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Creates a document from deserialized json-home data, as received from
    /// a remote service.
    ///
    /// Fails when `value` has no `resources` member.
    pub fn from_value(value: Value) -> Result<Self> {
        Ok(serde_json::from_value(value)?)
    }

    /// Creates a document from a json-home JSON string.
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = (&'a String, &'a Resource);
    type IntoIter = std::collections::btree_map::Iter<'a, String, Resource>;

    fn into_iter(self) -> Self::IntoIter {
        self.resources.iter()
    }
}
