//! Pre-order tree walker that reports each node to a callback.
//!
//! The walker keeps no history between nodes; callers that need to know
//! what came before must remember it themselves.

use swc_common::Spanned;
use swc_ecma_ast::{
    CallExpr, Expr, Ident, IdentName, JSXAttrName, JSXAttrOrSpread, JSXAttrValue, JSXElement,
    JSXElementName, JSXExpr, JSXMemberExpr, JSXObject, Lit, Module, ObjectLit, Stmt, Str, Tpl,
};
use swc_ecma_visit::{Visit, VisitWith};

use super::node::{Attribute, AttributeValue, Node, ObjectShape, TemplatedElement};

/// Walk a module, invoking `on_node` once per reported node in a stable,
/// depth-first pre-order.
///
/// Besides ordinary nodes, a `Node::Numeric` carrying the call's end offset
/// is reported after the arguments of every call expression.
pub fn walk_module<F>(module: &Module, on_node: F)
where
    F: FnMut(Node),
{
    let mut walker = NodeWalker { on_node };
    module.visit_with(&mut walker);
}

struct NodeWalker<F> {
    on_node: F,
}

impl<F: FnMut(Node)> NodeWalker<F> {
    fn emit(&mut self, node: Node) {
        (self.on_node)(node);
    }
}

impl<F: FnMut(Node)> Visit for NodeWalker<F> {
    fn visit_stmt(&mut self, node: &Stmt) {
        self.emit(Node::Other {
            kind: "Statement",
            span: node.span(),
        });
        node.visit_children_with(self);
    }

    fn visit_expr(&mut self, node: &Expr) {
        // These kinds are reported by their dedicated visitors below.
        if let Some(kind) = other_expr_kind(node) {
            self.emit(Node::Other {
                kind,
                span: node.span(),
            });
        }
        node.visit_children_with(self);
    }

    fn visit_call_expr(&mut self, node: &CallExpr) {
        node.visit_children_with(self);
        self.emit(Node::Numeric(node.span.hi));
    }

    fn visit_lit(&mut self, node: &Lit) {
        // String literals are reported through `visit_str`.
        if !matches!(node, Lit::Str(_)) {
            self.emit(Node::Other {
                kind: lit_kind(node),
                span: node.span(),
            });
        }
        node.visit_children_with(self);
    }

    fn visit_str(&mut self, node: &Str) {
        let emitted = match node.value.as_str() {
            Some(value) => Node::StringLiteral {
                span: node.span,
                value: value.to_string(),
            },
            None => Node::Other {
                kind: "StringLiteral",
                span: node.span,
            },
        };
        self.emit(emitted);
    }

    fn visit_tpl(&mut self, node: &Tpl) {
        let emitted = match static_template_value(node) {
            Some(value) => Node::StringLiteral {
                span: node.span,
                value,
            },
            None => Node::Other {
                kind: "TemplateLiteral",
                span: node.span,
            },
        };
        self.emit(emitted);
        node.visit_children_with(self);
    }

    fn visit_ident(&mut self, node: &Ident) {
        self.emit(Node::Identifier {
            span: node.span,
            name: node.sym.to_string(),
        });
    }

    fn visit_ident_name(&mut self, node: &IdentName) {
        self.emit(Node::Identifier {
            span: node.span,
            name: node.sym.to_string(),
        });
    }

    fn visit_object_lit(&mut self, node: &ObjectLit) {
        self.emit(Node::ObjectLiteral {
            span: node.span,
            shape: ObjectShape::of(node),
        });
        node.visit_children_with(self);
    }

    fn visit_jsx_element(&mut self, node: &JSXElement) {
        self.emit(Node::Element(templated_element(node)));
        node.visit_children_with(self);
    }
}

/// Kind label for expressions that have no dedicated node variant, or `None`
/// for the ones reported by a more specific visitor.
fn other_expr_kind(expr: &Expr) -> Option<&'static str> {
    let kind = match expr {
        Expr::Lit(_) | Expr::Ident(_) | Expr::Object(_) | Expr::Tpl(_) | Expr::JSXElement(_) => {
            return None;
        }
        Expr::Call(_) => "CallExpression",
        Expr::New(_) => "NewExpression",
        Expr::Member(_) => "MemberExpression",
        Expr::OptChain(_) => "OptionalChain",
        Expr::Paren(_) => "ParenthesizedExpression",
        Expr::Arrow(_) => "ArrowFunction",
        Expr::Fn(_) => "FunctionExpression",
        Expr::Array(_) => "ArrayExpression",
        Expr::Bin(_) => "BinaryExpression",
        Expr::Cond(_) => "ConditionalExpression",
        Expr::Assign(_) => "AssignmentExpression",
        Expr::Seq(_) => "SequenceExpression",
        Expr::Unary(_) => "UnaryExpression",
        Expr::Await(_) => "AwaitExpression",
        Expr::TaggedTpl(_) => "TaggedTemplate",
        Expr::JSXFragment(_) => "JSXFragment",
        _ => "Expression",
    };
    Some(kind)
}

fn lit_kind(lit: &Lit) -> &'static str {
    match lit {
        Lit::Num(_) => "NumericLiteral",
        Lit::Bool(_) => "BooleanLiteral",
        Lit::Null(_) => "NullLiteral",
        Lit::BigInt(_) => "BigIntLiteral",
        Lit::Regex(_) => "RegExpLiteral",
        _ => "Literal",
    }
}

/// Value of a template literal without substitutions, e.g. `` `home.title` ``.
fn static_template_value(tpl: &Tpl) -> Option<String> {
    if !tpl.exprs.is_empty() {
        return None;
    }
    let [quasi] = tpl.quasis.as_slice() else {
        return None;
    };
    quasi
        .cooked
        .as_ref()
        .and_then(|cooked| cooked.as_str())
        .map(str::to_string)
}

fn templated_element(node: &JSXElement) -> TemplatedElement {
    let attributes = node
        .opening
        .attrs
        .iter()
        .filter_map(|attr| match attr {
            JSXAttrOrSpread::JSXAttr(attr) => Some(Attribute {
                name: match &attr.name {
                    JSXAttrName::Ident(ident) => ident.sym.to_string(),
                    JSXAttrName::JSXNamespacedName(ns) => format!("{}:{}", ns.ns.sym, ns.name.sym),
                },
                value: attribute_value(attr.value.as_ref()),
            }),
            JSXAttrOrSpread::SpreadElement(_) => None,
        })
        .collect();

    TemplatedElement {
        span: node.span,
        tag: element_name(&node.opening.name),
        attributes,
    }
}

fn attribute_value(value: Option<&JSXAttrValue>) -> AttributeValue {
    match value {
        None => AttributeValue::Absent,
        Some(JSXAttrValue::Str(s)) => match s.value.as_str() {
            Some(value) => AttributeValue::StringLiteral(value.to_string()),
            None => AttributeValue::Expression,
        },
        Some(JSXAttrValue::JSXExprContainer(container)) => match &container.expr {
            JSXExpr::Expr(expr) => match &**expr {
                Expr::Object(object) => AttributeValue::Object(ObjectShape::of(object)),
                _ => AttributeValue::Expression,
            },
            JSXExpr::JSXEmptyExpr(_) => AttributeValue::Expression,
        },
        Some(_) => AttributeValue::Expression,
    }
}

fn element_name(name: &JSXElementName) -> String {
    match name {
        JSXElementName::Ident(ident) => ident.sym.to_string(),
        JSXElementName::JSXMemberExpr(member) => member_name(member),
        JSXElementName::JSXNamespacedName(ns) => format!("{}:{}", ns.ns.sym, ns.name.sym),
    }
}

fn member_name(member: &JSXMemberExpr) -> String {
    let object_name = match &member.obj {
        JSXObject::Ident(ident) => ident.sym.to_string(),
        JSXObject::JSXMemberExpr(nested) => member_name(nested),
    };
    format!("{}.{}", object_name, member.prop.sym)
}
