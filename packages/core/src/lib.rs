//! # chainrec core
//!
//! Record a method chain once against a placeholder, replay it against any
//! number of real objects.
//!
//! ## Features
//!
//! - **Placeholders per subject type**, driven by declared [`TypeDescriptor`]s
//! - **Recursive capture** through every proxyable return type
//! - **Leaf defaults** that terminate a chain at primitive or sealed types
//! - **Weak chain registry** keyed by terminal placeholder identity
//! - **Pure replay** with null short-circuiting and step-level errors
//! - **Comparator and converter adapters** for collection code
//!
//! ## Usage
//!
//! ```
//! use std::sync::Arc;
//! use chainrec_core::prelude::*;
//!
//! #[derive(Debug)]
//! struct Person {
//!     age: i64,
//! }
//!
//! impl Subject for Person {
//!     fn descriptor() -> TypeDescriptor {
//!         TypeDescriptor::new("Person").getter("getAge", TypeRef::Int)
//!     }
//!
//!     fn type_name(&self) -> &str {
//!         "Person"
//!     }
//!
//!     fn invoke(&self, call: &MethodCall<'_>) -> Result<Value, InvokeError> {
//!         match call.method() {
//!             "getAge" => Ok(self.age.into()),
//!             _ => Err(call.unknown(self.type_name())),
//!         }
//!     }
//! }
//!
//! let stats = Arc::new(LambdaStats::new());
//! let config = LambdaConfig::default();
//! let mut factory = PlaceholderFactory::new(config.clone(), Arc::clone(&stats));
//! factory.register::<Person>();
//! let factory = Arc::new(factory);
//! let registry = ChainRegistry::new(&config, stats);
//!
//! let person = factory.capture_type::<Person>(registry.id()).unwrap();
//! let age = registry.close(person.get("getAge").unwrap()).unwrap();
//!
//! let value = extract_value(&age, &Value::object(Person { age: 30 })).unwrap();
//! assert_eq!(value, Value::Int(30));
//! ```

#![deny(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]

pub mod adapters;
pub mod config;
pub mod error;
pub mod model;
pub mod proxy;
pub mod registry;
pub mod replay;
pub mod subject;
pub mod telemetry;

pub mod prelude;

pub use crate::adapters::{compare, compare_with, convert, extract_value};
pub use crate::error::{LambdaError, LambdaResult};
pub use crate::model::{InvocationChain, InvocationStep, TypeDescriptor, TypeRef, Value};
pub use crate::subject::Subject;
