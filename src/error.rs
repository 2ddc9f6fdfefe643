use std::fmt::{Display, Formatter};

#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    EmptyMethodName,
    UnrecognizedModifier(String),
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        match self {
            Self::EmptyMethodName => {
                write!(f, "Method declarations require a non-empty name")
            }
            Self::UnrecognizedModifier(name) => write!(f, "Unrecognized modifier {name}"),
        }
    }
}

impl std::error::Error for Error {}
