use crate::code::CodeFragment;

/// A structured body statement, superseded by pre-rendered code fragments.
/// The type stays public because existing declaration trees still contain
/// statement bodies; new code should attach a [`CodeFragment`] instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    Expression(CodeFragment),
    Return(CodeFragment),
}
