//! CLI command implementations.

pub(crate) mod emit;
pub(crate) mod show;
pub(crate) mod validate;

pub(crate) use emit::EmitArgs;
pub(crate) use show::ShowArgs;
pub(crate) use validate::ValidateArgs;
