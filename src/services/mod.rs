// Service layer: validation, line rewriting, catalog operations, digests

pub mod catalog;
pub mod digest;
pub mod rewriter;
pub mod validator;
