//! Flattened node model surfaced by the tree walker.
//!
//! Only the node kinds the extraction engine reasons about get their own
//! variant. Everything else the walker reports is carried as `Node::Other`
//! with its span and a kind label, so the engine still observes it as "the
//! previous node" without the model having to mirror the full grammar.

use swc_common::{BytePos, Span};
use swc_ecma_ast::{ObjectLit, Prop, PropName, PropOrSpread};

/// A single node as observed by the extraction engine.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// A statically known string: a string literal or a template literal
    /// without substitutions.
    StringLiteral { span: Span, value: String },
    /// An identifier in any position (binding, reference or property name).
    Identifier { span: Span, name: String },
    /// An object literal expression.
    ObjectLiteral { span: Span, shape: ObjectShape },
    /// A bare offset reported when a call expression's argument list closes.
    Numeric(BytePos),
    /// A JSX element.
    Element(TemplatedElement),
    /// Any other expression or statement.
    Other { kind: &'static str, span: Span },
}

impl Node {
    /// Source span of the node. A `Numeric` node is an empty span at its offset.
    pub fn span(&self) -> Span {
        match self {
            Node::StringLiteral { span, .. }
            | Node::Identifier { span, .. }
            | Node::ObjectLiteral { span, .. }
            | Node::Other { span, .. } => *span,
            Node::Numeric(pos) => Span::new(*pos, *pos),
            Node::Element(element) => element.span,
        }
    }

    /// Whether this node is an identifier with exactly the given name.
    pub fn is_identifier_named(&self, expected: &str) -> bool {
        matches!(self, Node::Identifier { name, .. } if name == expected)
    }
}

/// Whether an object literal's property names can be enumerated statically.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ObjectShape {
    /// Every property is a plain identifier-keyed property. Names are kept in
    /// declaration order.
    Simple(Vec<String>),
    /// At least one property is spread, computed, or keyed by a literal.
    Complex,
}

impl ObjectShape {
    pub fn of(object: &ObjectLit) -> Self {
        let mut names = Vec::with_capacity(object.props.len());
        for prop in &object.props {
            let PropOrSpread::Prop(prop) = prop else {
                return ObjectShape::Complex;
            };
            let key = match &**prop {
                Prop::Shorthand(ident) => Some(ident.sym.to_string()),
                Prop::KeyValue(kv) => ident_key(&kv.key),
                Prop::Method(method) => ident_key(&method.key),
                Prop::Getter(getter) => ident_key(&getter.key),
                Prop::Setter(setter) => ident_key(&setter.key),
                Prop::Assign(_) => None,
            };
            match key {
                Some(name) => names.push(name),
                None => return ObjectShape::Complex,
            }
        }
        ObjectShape::Simple(names)
    }
}

fn ident_key(key: &PropName) -> Option<String> {
    match key {
        PropName::Ident(ident) => Some(ident.sym.to_string()),
        _ => None,
    }
}

/// A JSX element reduced to its tag name and named attributes.
#[derive(Debug, Clone, PartialEq)]
pub struct TemplatedElement {
    pub span: Span,
    /// Tag name; member and namespaced names are joined (`a.b`, `ns:name`).
    pub tag: String,
    /// Named attributes in source order. Spread attributes are dropped.
    pub attributes: Vec<Attribute>,
}

impl TemplatedElement {
    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        self.attributes.iter().find(|attr| attr.name == name)
    }

    pub fn has_attribute(&self, name: &str) -> bool {
        self.attribute(name).is_some()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Attribute {
    pub name: String,
    pub value: AttributeValue,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AttributeValue {
    /// Bare attribute: `<Trans count />`.
    Absent,
    /// `name="text"`.
    StringLiteral(String),
    /// `name={{ ... }}`.
    Object(ObjectShape),
    /// Any other expression container or element value.
    Expression,
}
