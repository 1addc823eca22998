//! Lowered statement tree for one JavaScript program.
//!
//! The tree keeps only what the checkers inspect: declaration names,
//! statement spans, and the statements nested inside bodies. Each
//! [`StatementKind`] variant states whether it owns a nested statement list
//! through [`StatementKind::nested_body`]; traversals stop where that
//! accessor returns `None`.

use std::fmt;

use crate::span::Span;

/// Root of a parsed program.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Program {
    /// Top-level statements in source order.
    pub body: Vec<Statement>,
}

impl Program {
    /// Creates a program from its top-level statements.
    #[must_use]
    pub const fn new(body: Vec<Statement>) -> Self {
        Self { body }
    }

    /// Returns the top-level statements.
    #[must_use]
    pub fn body(&self) -> &[Statement] {
        &self.body
    }
}

/// A statement or class member together with its source span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    /// What the statement is.
    pub kind: StatementKind,
    /// Where the statement sits in the source.
    pub span: Span,
}

impl Statement {
    /// Creates a statement.
    #[must_use]
    pub const fn new(kind: StatementKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// Returns the statements nested inside this one, if it has a body.
    #[must_use]
    pub fn nested_body(&self) -> Option<&[Self]> {
        self.kind.nested_body()
    }
}

/// The closed set of statement shapes the checkers understand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatementKind {
    /// `var`, `let` or `const` declaration.
    Variable(VariableDeclaration),
    /// Function or generator declaration.
    Function(FunctionDeclaration),
    /// Class declaration.
    Class(ClassDeclaration),
    /// Method inside a class body.
    Method(MethodDefinition),
    /// `static { ... }` block inside a class body.
    StaticBlock(Vec<Statement>),
    /// Field definition inside a class body.
    Field,
    /// Braced block statement.
    Block(Vec<Statement>),
    /// Control-flow statement owning one or more sub-statements.
    Control(ControlStatement),
    /// Expression statement.
    Expression,
    /// `return` statement.
    Return,
    /// `throw` statement.
    Throw,
    /// `break` statement.
    Break,
    /// `continue` statement.
    Continue,
    /// `import` declaration.
    Import,
    /// `export` without an inline declaration.
    Export,
    /// `debugger` statement.
    Debugger,
    /// Lone `;`.
    Empty,
    /// Grammar node kind without a dedicated variant.
    Other(String),
}

impl StatementKind {
    /// Returns the nested statement list, or `None` for leaf statements.
    #[must_use]
    pub fn nested_body(&self) -> Option<&[Statement]> {
        match self {
            Self::Function(function) => Some(&function.body),
            Self::Class(class) => Some(&class.members),
            Self::Method(method) => Some(&method.body),
            Self::StaticBlock(body) | Self::Block(body) => Some(body),
            Self::Control(control) => Some(&control.body),
            Self::Variable(_)
            | Self::Field
            | Self::Expression
            | Self::Return
            | Self::Throw
            | Self::Break
            | Self::Continue
            | Self::Import
            | Self::Export
            | Self::Debugger
            | Self::Empty
            | Self::Other(_) => None,
        }
    }

    /// Returns an ESTree-style type name, used in logs and test output.
    #[must_use]
    pub fn type_name(&self) -> &str {
        match self {
            Self::Variable(_) => "VariableDeclaration",
            Self::Function(_) => "FunctionDeclaration",
            Self::Class(_) => "ClassDeclaration",
            Self::Method(_) => "MethodDefinition",
            Self::StaticBlock(_) => "StaticBlock",
            Self::Field => "PropertyDefinition",
            Self::Block(_) => "BlockStatement",
            Self::Control(control) => control.keyword.type_name(),
            Self::Expression => "ExpressionStatement",
            Self::Return => "ReturnStatement",
            Self::Throw => "ThrowStatement",
            Self::Break => "BreakStatement",
            Self::Continue => "ContinueStatement",
            Self::Import => "ImportDeclaration",
            Self::Export => "ExportDeclaration",
            Self::Debugger => "DebuggerStatement",
            Self::Empty => "EmptyStatement",
            Self::Other(kind) => kind,
        }
    }
}

/// A name bound by a declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identifier {
    /// The identifier text.
    pub name: String,
    /// Location of the identifier.
    pub span: Span,
}

impl Identifier {
    /// Creates an identifier.
    #[must_use]
    pub fn new(name: impl Into<String>, span: Span) -> Self {
        Self {
            name: name.into(),
            span,
        }
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Binding keyword of a variable declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeclarationKind {
    /// Legacy mutable binding.
    Var,
    /// Block-scoped mutable binding.
    Let,
    /// Non-reassignable binding.
    Const,
}

impl DeclarationKind {
    /// Returns the keyword as written in source.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Var => "var",
            Self::Let => "let",
            Self::Const => "const",
        }
    }
}

impl fmt::Display for DeclarationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `var`/`let`/`const` declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableDeclaration {
    /// The binding keyword.
    pub kind: DeclarationKind,
    /// Declared names in source order, one per bound identifier.
    pub declarators: Vec<Declarator>,
}

/// One bound name of a variable declaration.
///
/// Destructuring patterns produce one declarator per bound identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declarator {
    /// The bound identifier.
    pub id: Identifier,
}

/// Function or generator declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionDeclaration {
    /// Function name; absent for `export default function () {}`.
    pub id: Option<Identifier>,
    /// Statements of the function body.
    pub body: Vec<Statement>,
}

/// Class declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassDeclaration {
    /// Class name; absent for `export default class {}`.
    pub id: Option<Identifier>,
    /// Methods, fields and static blocks in source order.
    pub members: Vec<Statement>,
}

/// Method inside a class body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodDefinition {
    /// Statements of the method body.
    pub body: Vec<Statement>,
}

/// Keyword introducing a [`ControlStatement`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlKeyword {
    /// `if`, including any `else` branches.
    If,
    /// `for (;;)`.
    For,
    /// `for (... in ...)` and `for (... of ...)`.
    ForIn,
    /// `while`.
    While,
    /// `do ... while`.
    DoWhile,
    /// `try`, including `catch` and `finally`.
    Try,
    /// `switch`, including every case.
    Switch,
    /// `with`.
    With,
    /// `label: statement`.
    Labeled,
}

impl ControlKeyword {
    /// Returns an ESTree-style type name.
    #[must_use]
    pub const fn type_name(self) -> &'static str {
        match self {
            Self::If => "IfStatement",
            Self::For => "ForStatement",
            Self::ForIn => "ForInStatement",
            Self::While => "WhileStatement",
            Self::DoWhile => "DoWhileStatement",
            Self::Try => "TryStatement",
            Self::Switch => "SwitchStatement",
            Self::With => "WithStatement",
            Self::Labeled => "LabeledStatement",
        }
    }
}

/// Control-flow statement with its sub-statements flattened in source order.
///
/// A braced branch contributes its inner statements; an unbraced branch
/// contributes the single statement it guards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlStatement {
    /// The introducing keyword.
    pub keyword: ControlKeyword,
    /// Statements from every branch, case or handler.
    pub body: Vec<Statement>,
}
