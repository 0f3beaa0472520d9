//! tradewinds-synth — turns a stack into one deployable unit.
//!
//! Synthesis checks reference integrity and renders every descriptor
//! into a single JSON template document. Topological ordering, diffing,
//! and provisioning are the external engine's job; the template simply
//! carries the descriptors in assembly order with all cross-references
//! left as logical ids for the engine to resolve.

pub mod error;
pub mod template;

pub use error::{SynthError, SynthResult};
pub use template::{Template, synthesize};

use tradewinds_core::{LogicalId, ResourceKind, Stack};

/// Verify that every cross-reference in the stack resolves to an
/// existing resource of the expected kind, including both ends of every
/// grant edge.
pub fn check_references(stack: &Stack) -> SynthResult<()> {
    let expect = |from: &str, id: &LogicalId, kind: ResourceKind| {
        match stack.get(id) {
            None => Err(SynthError::DanglingReference {
                from: from.to_string(),
                to: id.to_string(),
            }),
            Some(found) if found.kind() != kind => Err(SynthError::KindMismatch {
                id: id.to_string(),
                expected: kind,
                found: found.kind(),
            }),
            Some(_) => Ok(()),
        }
    };

    for (id, resource) in stack.iter() {
        for (target, kind) in resource.references() {
            expect(id.as_str(), &target, kind)?;
        }
    }
    for grant in stack.grants() {
        expect("grant", &grant.role, ResourceKind::Role)?;
        expect("grant", &grant.table, ResourceKind::Table)?;
    }
    Ok(())
}
