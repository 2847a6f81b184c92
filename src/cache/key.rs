//! Hierarchical query keys
//!
//! A key is a plain sequence of segments. Equality and prefix tests are
//! structural, so invalidating `["vendors"]` reaches every key built from the
//! `vendors` key space.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

/// One segment of a [`QueryKey`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(untagged)]
pub enum KeySegment {
    Str(String),
    Num(i64),
    /// Small structured filter; absent fields are simply not present
    Filter(BTreeMap<String, String>),
}

impl From<&str> for KeySegment {
    fn from(s: &str) -> Self {
        KeySegment::Str(s.to_string())
    }
}

impl From<String> for KeySegment {
    fn from(s: String) -> Self {
        KeySegment::Str(s)
    }
}

impl From<i64> for KeySegment {
    fn from(n: i64) -> Self {
        KeySegment::Num(n)
    }
}

impl From<BTreeMap<String, String>> for KeySegment {
    fn from(map: BTreeMap<String, String>) -> Self {
        KeySegment::Filter(map)
    }
}

impl fmt::Display for KeySegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeySegment::Str(s) => write!(f, "{}", s),
            KeySegment::Num(n) => write!(f, "{}", n),
            KeySegment::Filter(map) => {
                let fields: Vec<String> = map.iter().map(|(k, v)| format!("{}={}", k, v)).collect();
                write!(f, "{{{}}}", fields.join(","))
            }
        }
    }
}

/// Build a filter segment from key/value pairs, dropping `None` values.
pub fn filter<'a, I>(fields: I) -> KeySegment
where
    I: IntoIterator<Item = (&'a str, Option<String>)>,
{
    KeySegment::Filter(
        fields
            .into_iter()
            .filter_map(|(k, v)| v.map(|v| (k.to_string(), v)))
            .collect(),
    )
}

/// Structural identifier of a cacheable read.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize)]
pub struct QueryKey(Vec<KeySegment>);

impl QueryKey {
    pub fn new(segments: Vec<KeySegment>) -> Self {
        Self(segments)
    }

    /// Extend the key by one segment
    pub fn with(mut self, segment: impl Into<KeySegment>) -> Self {
        self.0.push(segment.into());
        self
    }

    /// Domain root (first segment)
    pub fn domain(&self) -> Option<&KeySegment> {
        self.0.first()
    }

    /// Whether `prefix` is a leading subsequence of this key (non-strict)
    pub fn starts_with(&self, prefix: &QueryKey) -> bool {
        self.0.starts_with(&prefix.0)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.0.iter().map(ToString::to_string).collect();
        write!(f, "[{}]", parts.join("/"))
    }
}

/// Key builders for one domain root.
///
/// Every key produced here starts with [`KeySpace::root`], which is what makes
/// whole-domain invalidation work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeySpace {
    root: &'static str,
}

impl KeySpace {
    pub const fn new(root: &'static str) -> Self {
        Self { root }
    }

    /// `[root]`
    pub fn root(&self) -> QueryKey {
        QueryKey::new(vec![self.root.into()])
    }

    /// `[root, "list"]`: prefix of every list key
    pub fn lists(&self) -> QueryKey {
        self.root().with("list")
    }

    /// `[root, "list", {filters}]`
    pub fn list(&self, filters: &str) -> QueryKey {
        self.lists()
            .with(filter([("filters", Some(filters.to_string()))]))
    }

    /// `[root, "detail"]`: prefix of every detail key
    pub fn details(&self) -> QueryKey {
        self.root().with("detail")
    }

    /// `[root, "detail", id]`
    pub fn detail(&self, id: &str) -> QueryKey {
        self.details().with(id)
    }

    /// `[root, parent, parent_id]`: children of one parent resource
    pub fn by_parent(&self, parent: KeySpace, parent_id: &str) -> QueryKey {
        self.root().with(parent.root).with(parent_id)
    }

    /// `[root, scope, id]`: per-identifier derived reads
    pub fn scoped(&self, scope: &str, id: &str) -> QueryKey {
        self.root().with(scope).with(id)
    }
}

/// Vendor domain
pub const VENDORS: KeySpace = KeySpace::new("vendors");

/// Product domain; products are children of vendors
pub const PRODUCTS: KeySpace = KeySpace::new("products");

/// Assessment analysis domain
pub const ASSESSMENT_ANALYSIS: KeySpace = KeySpace::new("assessment-analysis");

/// Scope of analysis results within [`ASSESSMENT_ANALYSIS`]
pub const RESULTS_SCOPE: &str = "results";

/// Scope of not-implemented items within [`ASSESSMENT_ANALYSIS`]
pub const NOT_IMPLEMENTED_SCOPE: &str = "not-implemented";
