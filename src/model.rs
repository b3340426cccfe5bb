//! The contract model read by the backend.
//!
//! All types here are owned and constructed by the external DSL parser; the
//! backend treats a [`Context`] as an immutable input tree for the duration
//! of one generation pass. Ordering is load-bearing throughout: `Vec` fields
//! preserve declaration order, and the generator derives serialization-slot
//! numbers and constructor-parameter order from it.

/// Marker suffix that denotes an array type descriptor (e.g. `byte[]`).
pub const ARRAY_MARKER: &str = "[]";

/// Root of one compilation unit.
#[derive(Debug, Clone, Default)]
pub struct Context {
    /// Import statements. May contain duplicates and arrive in any order;
    /// the generator deduplicates and sorts them at emission time.
    pub using: Vec<String>,
    /// Namespace the unit is emitted into.
    pub current_namespace: String,
    /// Extern/partial-class qualifier, available to the class-name template.
    pub current_extern: String,
    /// Record declarations, in declaration order.
    pub contracts: Vec<Message>,
    /// Entity groupings, in declaration order.
    pub entities: Vec<Entity>,
}

impl Context {
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            current_namespace: namespace.into(),
            ..Self::default()
        }
    }
}

/// One data-record declaration (a.k.a. contract).
#[derive(Debug, Clone)]
pub struct Message {
    pub name: String,
    /// Fields, in declaration order. Determines both slot numbering and
    /// constructor-parameter ordering.
    pub members: Vec<Member>,
    /// Role modifiers, in declaration order.
    pub modifiers: Vec<Modifier>,
    /// Free-form display-format template (without surrounding quotes), if the
    /// declaration carries one. Rewritten into a positional template by the
    /// generator.
    pub string_representation: Option<String>,
    /// COM-interop metadata, if interop bindings were requested.
    pub interop: Option<InteropData>,
}

impl Message {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            members: Vec::new(),
            modifiers: Vec::new(),
            string_representation: None,
            interop: None,
        }
    }

    /// Members whose type descriptor is an array shape, in declaration order.
    pub fn array_members(&self) -> Vec<&Member> {
        self.members.iter().filter(|m| m.is_array()).collect()
    }
}

/// A named grouping of messages by the roles they play for it.
///
/// Entities are a derived grouping, not an owning container: many messages
/// may reference the same entity via their modifiers.
#[derive(Debug, Clone)]
pub struct Entity {
    pub name: String,
    /// Messages that play a role for this entity, in declaration order.
    pub messages: Vec<Message>,
}

impl Entity {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            messages: Vec::new(),
        }
    }

    /// Entities named `default` are suppressed from interface generation.
    pub fn is_default(&self) -> bool {
        self.name == "default"
    }
}

/// One field of a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    /// Name as written in the DSL source.
    pub dsl_name: String,
    /// Canonical (cased) name.
    pub name: String,
    /// Opaque type descriptor. Array types end in [`ARRAY_MARKER`]; anything
    /// else is passed through verbatim, not validated.
    pub ty: String,
}

impl Member {
    pub fn new(dsl_name: impl Into<String>, name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            dsl_name: dsl_name.into(),
            name: name.into(),
            ty: ty.into(),
        }
    }

    pub fn is_array(&self) -> bool {
        self.ty.ends_with(ARRAY_MARKER)
    }
}

/// A (role identifier, interface name) pair attached to a message.
///
/// The identifier tags the message as command-like (`?`) or event-like (`!`)
/// for its entity; the interface name is contributed as a base interface of
/// the generated record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Modifier {
    pub identifier: String,
    pub interface: String,
}

impl Modifier {
    pub fn new(identifier: impl Into<String>, interface: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            interface: interface.into(),
        }
    }
}

/// Opaque attribute text for COM-interop bindings, emitted verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InteropData {
    /// Attribute block for the generated interop interface.
    pub interface_attribute: String,
    /// Attribute block for the generated implementation class.
    pub class_attribute: String,
}

impl InteropData {
    pub fn new(interface_attribute: impl Into<String>, class_attribute: impl Into<String>) -> Self {
        Self {
            interface_attribute: interface_attribute.into(),
            class_attribute: class_attribute.into(),
        }
    }
}
