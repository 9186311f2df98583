use super::error::SimulationError;

/// Page identifiers are single digits, so a simulation with more frames than
/// distinct pages can never fault after warm-up.
pub const MAX_MARCOS: usize = 10;

/// Strips whitespace from a reference string without further validation.
pub fn sanitize_referencias(referencias: &str) -> String {
    referencias.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Validates a reference string and frame count, returning the ordered page
/// identifiers.
///
/// Whitespace is stripped first; what remains must be non-empty ASCII digits.
/// The frame count must be between 1 and [`MAX_MARCOS`].
pub fn parse_references(referencias: &str, marcos: usize) -> Result<Vec<u8>, SimulationError> {
    let clean = sanitize_referencias(referencias);

    if clean.is_empty() {
        return Err(SimulationError::InvalidInput(
            "the reference string must not be empty".to_string(),
        ));
    }
    if !clean.bytes().all(|b| b.is_ascii_digit()) {
        return Err(SimulationError::InvalidInput(
            "the reference string must contain only digits (0-9)".to_string(),
        ));
    }
    if marcos == 0 {
        return Err(SimulationError::InvalidInput(
            "the frame count must be at least 1".to_string(),
        ));
    }
    if marcos > MAX_MARCOS {
        return Err(SimulationError::InvalidInput(format!(
            "the frame count must not exceed {}",
            MAX_MARCOS
        )));
    }

    Ok(clean.bytes().map(|b| b - b'0').collect())
}
