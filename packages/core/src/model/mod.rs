//! Data model shared by capture and replay
//!
//! Values, declared types, recorded steps and chains.

pub mod chain;
pub mod step;
pub mod types;
pub mod value;

pub use chain::InvocationChain;
pub use step::InvocationStep;
pub use types::{MethodSignature, SubjectKind, TypeDescriptor, TypeRef};
pub use value::Value;
