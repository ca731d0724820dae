//! Adapters Layer (Driven Adapters)
//!
//! Implementations of the outbound ports.
//!
//! | Port | Mock (Testing) | Production |
//! |------|----------------|------------|
//! | `KeySource` | `FixedKeySource` | `OsKeySource` |
//! | `KeyedHasher` | test-local mocks | `SipHash24` (domain) |

pub mod key_source;

pub use key_source::{FixedKeySource, OsKeySource};
