//! chainrec prelude
//!
//! The types needed to describe subjects, capture chains and replay them.

// Describing subjects
pub use crate::model::{MethodSignature, SubjectKind, TypeDescriptor, TypeRef, Value};
pub use crate::subject::{MethodCall, Subject};

// Capture
pub use crate::proxy::{CaptureId, Captured, LeafCapture, Placeholder, PlaceholderFactory};

// Closed chains
pub use crate::model::{InvocationChain, InvocationStep};
pub use crate::registry::{ArgumentHandle, ChainRegistry};

// Replay and adapters
pub use crate::adapters::{
    ArgumentComparator, ArgumentConverter, ArgumentExtractor, compare, compare_with, convert, extract_value, into_typed,
};
pub use crate::replay::{ReplayEngine, ReplayOutcome};

// Errors, configuration and statistics
pub use crate::config::LambdaConfig;
pub use crate::error::{ErrorKind, InvokeError, LambdaError, LambdaResult};
pub use crate::telemetry::{LambdaStats, LambdaStatsSnapshot};
