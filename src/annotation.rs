/// A named attribute of an annotation. Values are stored as raw text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotationAttribute {
    pub name: String,
    pub value: String,
}

impl AnnotationAttribute {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// An annotation attached to a declaration, rendered as a language
/// annotation or decorator in the output source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Annotation {
    pub name: String,
    pub attributes: Vec<AnnotationAttribute>,
}

impl Annotation {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
        }
    }

    pub fn with_attributes(
        name: impl Into<String>,
        attributes: Vec<AnnotationAttribute>,
    ) -> Self {
        Self {
            name: name.into(),
            attributes,
        }
    }
}
