//! Argument handles: owning references to closed chains

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use serde::Serialize;

use super::RegistryId;
use crate::model::{InvocationChain, TypeRef};
use crate::proxy::CaptureId;

/// Identity of the terminal placeholder a chain was closed from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct TerminalKey {
    pub capture: CaptureId,
    pub depth: usize,
}

impl TerminalKey {
    #[must_use]
    pub fn new(capture: CaptureId, depth: usize) -> Self {
        Self { capture, depth }
    }
}

/// Opaque token for a closed invocation chain
///
/// The handle owns the chain; the registry only keeps a weak entry for it,
/// so dropping every clone of the handle releases the chain.
#[derive(Clone)]
pub struct ArgumentHandle {
    registry: RegistryId,
    key: TerminalKey,
    chain: Arc<InvocationChain>,
}

impl ArgumentHandle {
    pub(crate) fn new(registry: RegistryId, key: TerminalKey, chain: Arc<InvocationChain>) -> Self {
        Self { registry, key, chain }
    }

    #[must_use]
    pub fn registry(&self) -> RegistryId {
        self.registry
    }

    #[must_use]
    pub fn key(&self) -> TerminalKey {
        self.key
    }

    #[must_use]
    pub fn capture_id(&self) -> CaptureId {
        self.key.capture
    }

    #[must_use]
    pub fn chain(&self) -> &InvocationChain {
        &self.chain
    }

    #[must_use]
    pub fn root_type(&self) -> &TypeRef {
        self.chain.root_type()
    }

    /// Declared type of the extracted value
    #[must_use]
    pub fn return_type(&self) -> &TypeRef {
        self.chain.return_type()
    }

    /// Dotted property path of the chain, e.g. `address.city`
    #[must_use]
    pub fn property_path(&self) -> String {
        self.chain.property_path()
    }
}

impl PartialEq for ArgumentHandle {
    fn eq(&self, other: &Self) -> bool {
        self.registry == other.registry && self.key == other.key
    }
}

impl Eq for ArgumentHandle {}

impl Hash for ArgumentHandle {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.registry.hash(state);
        self.key.hash(state);
    }
}

impl fmt::Debug for ArgumentHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArgumentHandle")
            .field("capture", &self.key.capture)
            .field("depth", &self.key.depth)
            .field("chain", &format_args!("{}", self.chain))
            .finish()
    }
}

impl fmt::Display for ArgumentHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.chain, f)
    }
}
