use snvscore_core::errors::ValidationError;

///
/// Build the variant sequence: a copy of `sequence` with the base at
/// `offset` replaced by `alternative`.
///
/// Sequences are plain ASCII nucleotides, so offsets are byte offsets.
///
/// # Arguments
///
/// - sequence: the reference window
/// - offset: 0-based position of the variant inside the window
/// - alternative: the substituted base
///
pub fn build_variant_sequence(
    sequence: &str,
    offset: usize,
    alternative: char,
) -> Result<String, ValidationError> {
    if offset >= sequence.len() {
        return Err(ValidationError::Range {
            offset,
            len: sequence.len(),
        });
    }
    if !alternative.is_ascii() {
        return Err(ValidationError::InvalidBase(alternative.to_string()));
    }

    let mut bases = sequence.as_bytes().to_vec();
    bases[offset] = alternative as u8;

    String::from_utf8(bases).map_err(|_| ValidationError::InvalidBase(alternative.to_string()))
}
