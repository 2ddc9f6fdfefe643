use std::fmt::{Display, Formatter};

/// An opaque, already-formatted piece of body code. This layer stores it as
/// text; layout and grammar are the renderer's concern.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CodeFragment(String);

impl CodeFragment {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub const fn empty() -> Self {
        Self(String::new())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Display for CodeFragment {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        write!(f, "{}", self.0)
    }
}
