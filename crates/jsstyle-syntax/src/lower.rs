//! Lowering of the Tree-sitter concrete syntax tree into statements.
//!
//! Only the statement structure the checkers need survives: declarations,
//! bodies that can be descended into and the span of every statement.
//! Expressions are opaque; nothing inside an initializer is lowered.

use jsstyle_core::{
    ClassDeclaration, ControlKeyword, ControlStatement, DeclarationKind, Declarator,
    FunctionDeclaration, Identifier, MethodDefinition, Program, Statement,
    StatementKind, VariableDeclaration,
};
use tree_sitter::Node;

use crate::position::node_span;

const COMMENT_KINDS: &[&str] = &["comment", "html_comment", "hash_bang_line"];

/// Converts syntax nodes into the statement tree of `jsstyle-core`.
pub(crate) struct Lowerer<'src> {
    source: &'src str,
}

impl<'src> Lowerer<'src> {
    pub(crate) const fn new(source: &'src str) -> Self {
        Self { source }
    }

    /// Lowers the `program` root node.
    pub(crate) fn program(&self, root: Node<'_>) -> Program {
        Program::new(self.statements(root))
    }

    fn text(&self, node: Node<'_>) -> &'src str {
        self.source.get(node.byte_range()).unwrap_or_default()
    }

    /// Lowers every named, non-comment child of `parent`.
    fn statements(&self, parent: Node<'_>) -> Vec<Statement> {
        let mut cursor = parent.walk();
        parent
            .named_children(&mut cursor)
            .filter_map(|child| self.statement(child))
            .collect()
    }

    /// Lowers the statement found in a body position.
    ///
    /// Blocks are unwrapped so `if (a) { x; }` and `if (a) x;` both yield the
    /// inner statements directly.
    fn branch(&self, node: Option<Node<'_>>) -> Vec<Statement> {
        match node {
            Some(block) if block.kind() == "statement_block" => self.statements(block),
            Some(single) => self.statement(single).into_iter().collect(),
            None => Vec::new(),
        }
    }

    fn statement(&self, node: Node<'_>) -> Option<Statement> {
        let kind = node.kind();
        if COMMENT_KINDS.contains(&kind) {
            return None;
        }

        let lowered = match kind {
            "lexical_declaration" | "variable_declaration" => {
                StatementKind::Variable(self.variable(node))
            }
            "function_declaration" | "generator_function_declaration" => {
                StatementKind::Function(self.function(node))
            }
            "class_declaration" => StatementKind::Class(self.class(node)),
            "statement_block" => StatementKind::Block(self.statements(node)),
            "if_statement" => self.if_statement(node),
            "for_statement" => self.control(node, ControlKeyword::For),
            "for_in_statement" => self.control(node, ControlKeyword::ForIn),
            "while_statement" => self.control(node, ControlKeyword::While),
            "do_statement" => self.control(node, ControlKeyword::DoWhile),
            "with_statement" => self.control(node, ControlKeyword::With),
            "labeled_statement" => self.control(node, ControlKeyword::Labeled),
            "try_statement" => self.try_statement(node),
            "switch_statement" => self.switch_statement(node),
            "export_statement" => return Some(self.export(node)),
            "expression_statement" => StatementKind::Expression,
            "return_statement" => StatementKind::Return,
            "throw_statement" => StatementKind::Throw,
            "break_statement" => StatementKind::Break,
            "continue_statement" => StatementKind::Continue,
            "import_statement" => StatementKind::Import,
            "debugger_statement" => StatementKind::Debugger,
            "empty_statement" => StatementKind::Empty,
            other => StatementKind::Other(other.to_owned()),
        };

        Some(Statement::new(lowered, node_span(node)))
    }

    fn variable(&self, node: Node<'_>) -> VariableDeclaration {
        let kind = if node.kind() == "variable_declaration" {
            DeclarationKind::Var
        } else {
            let mut cursor = node.walk();
            let keyword = node
                .children(&mut cursor)
                .next()
                .map(|first| self.text(first));
            match keyword {
                Some("const") => DeclarationKind::Const,
                _ => DeclarationKind::Let,
            }
        };

        let mut declarators = Vec::new();
        let mut cursor = node.walk();
        for declarator in node
            .named_children(&mut cursor)
            .filter(|child| child.kind() == "variable_declarator")
        {
            if let Some(pattern) = declarator.child_by_field_name("name") {
                self.bindings(pattern, &mut declarators);
            }
        }

        VariableDeclaration { kind, declarators }
    }

    /// Flattens a binding pattern into the identifiers it binds.
    fn bindings(&self, pattern: Node<'_>, out: &mut Vec<Declarator>) {
        match pattern.kind() {
            "identifier" | "shorthand_property_identifier_pattern" => {
                out.push(Declarator {
                    id: self.identifier(pattern),
                });
            }
            "pair_pattern" => {
                if let Some(value) = pattern.child_by_field_name("value") {
                    self.bindings(value, out);
                }
            }
            "assignment_pattern" | "object_assignment_pattern" => {
                if let Some(left) = pattern.child_by_field_name("left") {
                    self.bindings(left, out);
                }
            }
            _ => {
                let mut cursor = pattern.walk();
                for child in pattern.named_children(&mut cursor) {
                    self.bindings(child, out);
                }
            }
        }
    }

    fn identifier(&self, node: Node<'_>) -> Identifier {
        Identifier::new(self.text(node), node_span(node))
    }

    fn function(&self, node: Node<'_>) -> FunctionDeclaration {
        FunctionDeclaration {
            id: node
                .child_by_field_name("name")
                .map(|name| self.identifier(name)),
            body: self.branch(node.child_by_field_name("body")),
        }
    }

    fn class(&self, node: Node<'_>) -> ClassDeclaration {
        let members = node
            .child_by_field_name("body")
            .map(|body| self.class_members(body))
            .unwrap_or_default();
        ClassDeclaration {
            id: node
                .child_by_field_name("name")
                .map(|name| self.identifier(name)),
            members,
        }
    }

    fn class_members(&self, body: Node<'_>) -> Vec<Statement> {
        let mut members = Vec::new();
        let mut cursor = body.walk();
        for member in body.named_children(&mut cursor) {
            let span = node_span(member);
            let kind = match member.kind() {
                comment if COMMENT_KINDS.contains(&comment) => continue,
                "method_definition" => StatementKind::Method(MethodDefinition {
                    body: self.branch(member.child_by_field_name("body")),
                }),
                "field_definition" => {
                    // The terminating `;` of a field is a sibling in the class body.
                    let field_span = match member.next_sibling() {
                        Some(next) if next.kind() == ";" => {
                            span.extended_to(node_span(next).end())
                        }
                        _ => span,
                    };
                    members.push(Statement::new(
                        StatementKind::Field,
                        field_span,
                    ));
                    continue;
                }
                "class_static_block" => {
                    let block = member
                        .child_by_field_name("body")
                        .or_else(|| named_child_of_kind(member, "statement_block"));
                    StatementKind::StaticBlock(self.branch(block))
                }
                other => StatementKind::Other(other.to_owned()),
            };
            members.push(Statement::new(kind, span));
        }
        members
    }

    fn control(&self, node: Node<'_>, keyword: ControlKeyword) -> StatementKind {
        StatementKind::Control(ControlStatement {
            keyword,
            body: self.branch(node.child_by_field_name("body")),
        })
    }

    fn if_statement(&self, node: Node<'_>) -> StatementKind {
        let mut body = self.branch(node.child_by_field_name("consequence"));
        if let Some(else_clause) = node.child_by_field_name("alternative") {
            let mut cursor = else_clause.walk();
            let alternative = else_clause
                .named_children(&mut cursor)
                .find(|child| !COMMENT_KINDS.contains(&child.kind()));
            body.extend(self.branch(alternative));
        }
        StatementKind::Control(ControlStatement {
            keyword: ControlKeyword::If,
            body,
        })
    }

    fn try_statement(&self, node: Node<'_>) -> StatementKind {
        let mut body = self.branch(node.child_by_field_name("body"));
        for clause in ["handler", "finalizer"] {
            if let Some(part) = node.child_by_field_name(clause) {
                body.extend(self.branch(part.child_by_field_name("body")));
            }
        }
        StatementKind::Control(ControlStatement {
            keyword: ControlKeyword::Try,
            body,
        })
    }

    fn switch_statement(&self, node: Node<'_>) -> StatementKind {
        let mut body = Vec::new();
        if let Some(switch_body) = node.child_by_field_name("body") {
            let mut cursor = switch_body.walk();
            for case in switch_body.named_children(&mut cursor) {
                let value_id = case.child_by_field_name("value").map(|value| value.id());
                let mut case_cursor = case.walk();
                body.extend(
                    case.named_children(&mut case_cursor)
                        .filter(|child| Some(child.id()) != value_id)
                        .filter_map(|child| self.statement(child)),
                );
            }
        }
        StatementKind::Control(ControlStatement {
            keyword: ControlKeyword::Switch,
            body,
        })
    }

    /// Lowers `export` to the declaration it wraps, when it wraps one.
    fn export(&self, node: Node<'_>) -> Statement {
        if let Some(declaration) = node.child_by_field_name("declaration") {
            if let Some(lowered) = self.statement(declaration) {
                return lowered;
            }
        }

        // `export default function () {}` and `export default class {}`.
        if let Some(value) = node.child_by_field_name("value") {
            let kind = match value.kind() {
                "function" | "function_expression" | "generator_function" => {
                    Some(StatementKind::Function(self.function(value)))
                }
                "class" => Some(StatementKind::Class(self.class(value))),
                _ => None,
            };
            if let Some(kind) = kind {
                return Statement::new(kind, node_span(value));
            }
        }

        Statement::new(StatementKind::Export, node_span(node))
    }
}

fn named_child_of_kind<'tree>(node: Node<'tree>, kind: &str) -> Option<Node<'tree>> {
    let mut cursor = node.walk();
    node.named_children(&mut cursor)
        .find(|child| child.kind() == kind)
}
