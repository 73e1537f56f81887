use lift_core::FloorId;
use thiserror::Error;

/// Why a [`FloorRequest`][crate::FloorRequest] could not be created.
///
/// These are usage errors for direct callers of `FloorRequest::new`.  The
/// building's request wrapper logs and absorbs them so a bad random draw
/// never halts a run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    #[error("illegal request by {rider}: no target floor")]
    NoTarget { rider: String },

    #[error("{floor} is not accessible by {rider}")]
    InaccessibleFloor { rider: String, floor: FloorId },
}

pub type RequestResult<T> = Result<T, RequestError>;
