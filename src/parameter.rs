/// A single parameter of a method declaration: a name plus the raw type name
/// as it should appear in the output source. Neither is type-checked here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    pub name: String,
    pub parameter_type: String,
}

impl Parameter {
    pub fn new(name: impl Into<String>, parameter_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parameter_type: parameter_type.into(),
        }
    }
}
