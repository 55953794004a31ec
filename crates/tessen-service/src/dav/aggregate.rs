use tessen_rfc::rfc::dav::core::{Multistatus, StatusResponse};

use super::resource::ChildOutcome;

/// ## Summary
/// Builds the multistatus body for a partially failed collection delete.
///
/// One `DAV:response` per outcome, in input order; nothing is merged or dropped.
#[must_use]
pub fn aggregate(outcomes: Vec<ChildOutcome>) -> Multistatus {
    let mut multistatus = Multistatus::new();
    for outcome in outcomes {
        multistatus.add_response(StatusResponse::new(outcome.href, outcome.status));
    }
    multistatus
}
