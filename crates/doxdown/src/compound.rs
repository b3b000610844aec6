//! The documentation tree handed to the renderer.
//!
//! A [`Compound`] is one node of parsed API documentation: the index, a page,
//! a group, a namespace, a class or a struct. Compounds are built by an
//! external parser and are read-only from the renderer's point of view.
//!
//! Every field is always serialized, even when empty. Templates are compiled
//! with strict undefined handling, so a missing field would otherwise turn a
//! harmless `{% if briefdescription %}` into a render error.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// The category of a [`Compound`].
///
/// Only the first six variants can be rendered. Anything else the parser
/// produces (`file`, `dir`, `union`, ...) is kept verbatim in [`Kind::Other`]
/// so diagnostics can name it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Kind {
    Index,
    Page,
    Group,
    Namespace,
    Class,
    Struct,
    Other(String),
}

impl Kind {
    /// The kind as it appears in the source documentation.
    pub fn as_str(&self) -> &str {
        match self {
            Kind::Index => "index",
            Kind::Page => "page",
            Kind::Group => "group",
            Kind::Namespace => "namespace",
            Kind::Class => "class",
            Kind::Struct => "struct",
            Kind::Other(other) => other,
        }
    }
}

impl From<&str> for Kind {
    fn from(value: &str) -> Self {
        match value {
            "index" => Kind::Index,
            "page" => Kind::Page,
            "group" => Kind::Group,
            "namespace" => Kind::Namespace,
            "class" => Kind::Class,
            "struct" => Kind::Struct,
            other => Kind::Other(other.to_string()),
        }
    }
}

impl From<String> for Kind {
    fn from(value: String) -> Self {
        Kind::from(value.as_str())
    }
}

impl From<Kind> for String {
    fn from(kind: Kind) -> Self {
        match kind {
            Kind::Other(other) => other,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A documented member of a compound (function, variable, typedef, ...).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Member {
    pub kind: String,
    pub name: String,
    pub refid: String,
    /// Declaration as it should appear in a code span, e.g. `int size() const`.
    pub proto: String,
    pub briefdescription: String,
    pub detaileddescription: String,
}

impl Member {
    pub fn new(kind: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_refid(mut self, refid: impl Into<String>) -> Self {
        self.refid = refid.into();
        self
    }

    pub fn with_proto(mut self, proto: impl Into<String>) -> Self {
        self.proto = proto.into();
        self
    }

    pub fn with_brief(mut self, text: impl Into<String>) -> Self {
        self.briefdescription = text.into();
        self
    }

    pub fn with_detailed(mut self, text: impl Into<String>) -> Self {
        self.detaileddescription = text.into();
        self
    }
}

/// Child compounds keyed by name.
///
/// Lookup is by name; iteration follows insertion order, which is the order
/// children appear in rendered lists. Serializes as a map so templates can
/// write both `compounds["Foo"]` and `{% for name, child in compounds|items %}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Children {
    entries: IndexMap<String, Compound>,
}

impl Children {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a child under `name`.
    ///
    /// Replacing an existing name keeps the original position.
    pub fn insert(&mut self, name: impl Into<String>, compound: Compound) {
        self.entries.insert(name.into(), compound);
    }

    pub fn get(&self, name: &str) -> Option<&Compound> {
        self.entries.get(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Compound)> {
        self.entries
            .iter()
            .map(|(name, compound)| (name.as_str(), compound))
    }

    pub fn values(&self) -> impl Iterator<Item = &Compound> {
        self.entries.values()
    }

    /// Returns the child when there is exactly one.
    pub fn only(&self) -> Option<&Compound> {
        match self.entries.len() {
            1 => self.entries.values().next(),
            _ => None,
        }
    }
}

/// A node of the documentation tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Compound {
    pub kind: Kind,
    #[serde(default)]
    pub name: String,
    /// Qualified display name, e.g. `net::http::Client`.
    #[serde(default)]
    pub fullname: String,
    #[serde(default)]
    pub refid: String,
    #[serde(default)]
    pub briefdescription: String,
    #[serde(default)]
    pub detaileddescription: String,
    #[serde(default)]
    pub compounds: Children,
    #[serde(default)]
    pub members: Vec<Member>,
}

impl Compound {
    /// Creates a compound whose `fullname` defaults to `name`.
    pub fn new(kind: impl Into<Kind>, name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            kind: kind.into(),
            fullname: name.clone(),
            name,
            refid: String::new(),
            briefdescription: String::new(),
            detaileddescription: String::new(),
            compounds: Children::new(),
            members: Vec::new(),
        }
    }

    pub fn with_fullname(mut self, fullname: impl Into<String>) -> Self {
        self.fullname = fullname.into();
        self
    }

    pub fn with_refid(mut self, refid: impl Into<String>) -> Self {
        self.refid = refid.into();
        self
    }

    pub fn with_brief(mut self, text: impl Into<String>) -> Self {
        self.briefdescription = text.into();
        self
    }

    pub fn with_detailed(mut self, text: impl Into<String>) -> Self {
        self.detaileddescription = text.into();
        self
    }

    /// Adds a child keyed by its own name.
    pub fn with_child(mut self, child: Compound) -> Self {
        self.compounds.insert(child.name.clone(), child);
        self
    }

    pub fn with_member(mut self, member: Member) -> Self {
        self.members.push(member);
        self
    }
}
