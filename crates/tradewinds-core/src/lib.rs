//! tradewinds-core — resource descriptors for the trading-agent stack.
//!
//! Every cloud resource the stack declares is an immutable, serializable
//! record. Cross-references between records are explicit [`LogicalId`]
//! fields rather than shared builder state, so a [`Stack`] can be
//! assembled by pure functions and handed to an external provisioning
//! engine as a single value.

pub mod compute;
pub mod error;
pub mod function;
pub mod iam;
pub mod ids;
pub mod network;
pub mod schedule;
pub mod stack;
pub mod storage;

pub use compute::*;
pub use error::{CoreError, CoreResult};
pub use function::*;
pub use iam::*;
pub use ids::LogicalId;
pub use network::*;
pub use schedule::*;
pub use stack::*;
pub use storage::*;
