//! Call context supplied by the host environment.
//!
//! The reference host passes caller identity and block height ambiently;
//! here both are explicit parameters so the ledger is reproducible and
//! testable without a host runtime.

use agora_types::{Address, BlockHeight};

/// Identity and clock of the current call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallContext {
    /// Account invoking the operation
    pub caller: Address,
    /// Current height on the host's monotonic clock
    pub current_height: BlockHeight,
}

impl CallContext {
    /// Create a new call context.
    pub fn new(caller: Address, current_height: BlockHeight) -> Self {
        Self {
            caller,
            current_height,
        }
    }
}
