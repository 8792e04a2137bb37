//! chainrec Public API
//!
//! Record a method chain once against a placeholder, then replay it against
//! any number of real objects to extract, compare or convert values.
//!
//! ```
//! use chainrec::{Lambda, MethodCall, Subject, TypeDescriptor, TypeRef, Value, InvokeError};
//!
//! #[derive(Debug)]
//! struct Person {
//!     name: String,
//! }
//!
//! impl Subject for Person {
//!     fn descriptor() -> TypeDescriptor {
//!         TypeDescriptor::new("Person").getter("getName", TypeRef::Str)
//!     }
//!
//!     fn type_name(&self) -> &str {
//!         "Person"
//!     }
//!
//!     fn invoke(&self, call: &MethodCall<'_>) -> Result<Value, InvokeError> {
//!         match call.method() {
//!             "getName" => Ok(self.name.as_str().into()),
//!             _ => Err(call.unknown(self.type_name())),
//!         }
//!     }
//! }
//!
//! let lambda = Lambda::builder().register::<Person>().build().unwrap();
//!
//! let person = lambda.capture::<Person>().unwrap();
//! let name = lambda.handle_of(person.get("getName").unwrap()).unwrap();
//!
//! let ada = Value::object(Person { name: "Ada".into() });
//! assert_eq!(lambda.extract_value(&name, &ada).unwrap(), Value::from("Ada"));
//! ```

#![deny(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]

pub mod builder;

// Re-export all public API components
pub use builder::*;

pub use chainrec_core::prelude::*;
pub use chainrec_core::{adapters, config, error, model, proxy, registry, replay, subject, telemetry};
