// Parameter validation
//
// Every operation runs its required string arguments through the same guard
// before composing a path, so the error message format stays uniform across
// the whole surface. Validation is synchronous and has no side effects.

use crate::error::{Error, Result};

/// Reject blank values among named required parameters.
///
/// A value is blank when it is empty or whitespace-only. The first blank
/// parameter wins; its error message is `"{name} cannot be blank"`.
pub(crate) fn require_present(params: &[(&str, &str)]) -> Result<()> {
    for (name, value) in params {
        if value.trim().is_empty() {
            return Err(Error::InvalidParameter(format!("{name} cannot be blank")));
        }
    }
    Ok(())
}

/// Reject positions below the resource-specific floor.
///
/// Columns start at 1, steps at 0; the caller passes the floor that applies.
pub(crate) fn require_min_position(position: i64, floor: i64) -> Result<()> {
    if position < floor {
        return Err(Error::InvalidParameter(format!(
            "position must be greater than or equal to {floor}"
        )));
    }
    Ok(())
}
