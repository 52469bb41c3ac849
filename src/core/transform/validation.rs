use super::TransformRequest;
use crate::core::error::ValidationError;

/// Check a request before any stage runs. The first failing rule wins.
pub fn validate(request: &TransformRequest) -> Result<(), ValidationError> {
    if request.source.is_empty() {
        return Err(ValidationError::MissingSource);
    }

    if request.find.is_empty() != request.replace.is_empty() {
        return Err(ValidationError::UnpairedReplacement);
    }

    if request.cut_enabled && request.cut_marker.is_empty() {
        return Err(ValidationError::MissingCutMarker);
    }

    if !request.has_replacement()
        && !request.cut_enabled
        && !request.convert_slashes
        && !request.trim_lines
    {
        return Err(ValidationError::NoModifications);
    }

    Ok(())
}
