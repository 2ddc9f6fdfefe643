use crate::annotation::Annotation;
use crate::code::CodeFragment;
use crate::error::Error;
use crate::modifier::Modifiers;
use crate::parameter::Parameter;
use crate::statement::Statement;

static EMPTY_CODE: CodeFragment = CodeFragment::empty();

/// The single body representation a declaration carries. Keeping this a sum
/// type makes "fragment body with leftover statements" unrepresentable.
#[derive(Debug, PartialEq)]
enum Body {
    Fragment(CodeFragment),
    Statements(Vec<Statement>),
}

/// Declaration of one method in a generated-source tree: name, return type,
/// modifier flags, parameters, annotations and a body. Instances are
/// produced by [`MethodDeclaration::method`] and are immutable afterwards,
/// except for the append-only annotation list.
#[derive(Debug, PartialEq)]
pub struct MethodDeclaration {
    name: String,
    return_type: String,
    modifiers: Modifiers,
    parameters: Vec<Parameter>,
    annotations: Vec<Annotation>,
    body: Body,
}

impl MethodDeclaration {
    /// Starts a builder for a method with the given name. The name is fixed
    /// for the lifetime of the builder; everything else has a default.
    pub fn method(name: impl Into<String>) -> Builder {
        Builder::new(name.into())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The declared return type as a raw name, not type-checked.
    pub fn return_type(&self) -> &str {
        &self.return_type
    }

    pub fn modifiers(&self) -> Modifiers {
        self.modifiers
    }

    /// Parameters in declaration order.
    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    /// The body fragment. Declarations built from legacy statement bodies
    /// report an empty fragment here.
    pub fn code(&self) -> &CodeFragment {
        match &self.body {
            Body::Fragment(code) => code,
            Body::Statements(_) => &EMPTY_CODE,
        }
    }

    /// The legacy statement body. Declarations built from a code fragment
    /// report an empty slice here.
    #[deprecated(note = "statement bodies are superseded by code fragments, use code() instead")]
    pub fn statements(&self) -> &[Statement] {
        match &self.body {
            Body::Fragment(_) => &[],
            Body::Statements(statements) => statements,
        }
    }

    /// Appends one annotation. Annotations are kept in insertion order and
    /// duplicates are preserved.
    pub fn annotate(&mut self, annotation: Annotation) {
        self.annotations.push(annotation);
    }

    pub fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }
}

/// Builder for a [`MethodDeclaration`]. Configuration calls chain by value;
/// a terminal body call consumes the builder, so a finished declaration can
/// never share state with it.
#[derive(Debug)]
pub struct Builder {
    name: String,
    return_type: String,
    modifiers: Modifiers,
    parameters: Vec<Parameter>,
}

impl Builder {
    fn new(name: String) -> Self {
        Builder {
            name,
            return_type: "void".to_string(),
            modifiers: Modifiers::PUBLIC,
            parameters: Vec::new(),
        }
    }

    pub fn modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    pub fn returning(mut self, return_type: impl Into<String>) -> Self {
        self.return_type = return_type.into();
        self
    }

    /// Replaces the parameter list. Last call wins.
    pub fn parameters(mut self, parameters: Vec<Parameter>) -> Self {
        self.parameters = parameters;
        self
    }

    /// Finalizes the declaration with a pre-rendered body fragment.
    pub fn body(self, code: CodeFragment) -> Result<MethodDeclaration, Error> {
        self.finish(Body::Fragment(code))
    }

    /// Finalizes the declaration with a legacy statement body.
    #[deprecated(note = "statement bodies are superseded by code fragments, use body() instead")]
    pub fn statement_body(self, statements: Vec<Statement>) -> Result<MethodDeclaration, Error> {
        self.finish(Body::Statements(statements))
    }

    fn finish(self, body: Body) -> Result<MethodDeclaration, Error> {
        if self.name.is_empty() {
            return Err(Error::EmptyMethodName);
        }

        Ok(MethodDeclaration {
            name: self.name,
            return_type: self.return_type,
            modifiers: self.modifiers,
            parameters: self.parameters,
            annotations: Vec::new(),
            body,
        })
    }
}
