use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

use crate::consts::VALID_BASES;
use crate::errors::ValidationError;

///
/// Parse a single nucleotide. Case-insensitive, normalised to upper case.
///
pub fn parse_base(base: &str) -> Result<char, ValidationError> {
    let mut chars = base.trim().chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if VALID_BASES.contains(&c.to_ascii_uppercase()) => {
            Ok(c.to_ascii_uppercase())
        }
        _ => Err(ValidationError::InvalidBase(base.to_string())),
    }
}

/// The wire shape of a variant request, before validation.
#[derive(Deserialize)]
struct RawVariantRequest {
    variant_position: u64,
    alternative: String,
    genome: String,
    chromosome: String,
}

///
/// A single nucleotide substitution to score: a 1-based position on a
/// chromosome of a reference genome, and the alternative base.
///
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawVariantRequest")]
pub struct VariantRequest {
    #[serde(rename = "variant_position")]
    pub position: u64,
    pub alternative: char,
    pub genome: String,
    pub chromosome: String,
}

impl VariantRequest {
    pub fn new(
        position: u64,
        alternative: &str,
        genome: &str,
        chromosome: &str,
    ) -> Result<Self, ValidationError> {
        if position == 0 {
            return Err(ValidationError::InvalidPosition(position));
        }
        let alternative = parse_base(alternative)?;

        Ok(VariantRequest {
            position,
            alternative,
            genome: genome.to_string(),
            chromosome: chromosome.to_string(),
        })
    }
}

impl TryFrom<RawVariantRequest> for VariantRequest {
    type Error = ValidationError;

    fn try_from(raw: RawVariantRequest) -> Result<Self, Self::Error> {
        VariantRequest::new(
            raw.variant_position,
            &raw.alternative,
            &raw.genome,
            &raw.chromosome,
        )
    }
}

impl Display for VariantRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}>{} ({})",
            self.chromosome, self.position, self.alternative, self.genome
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("A", 'A')]
    #[case("g", 'G')]
    #[case(" t ", 'T')]
    fn test_parse_base(#[case] input: &str, #[case] expected: char) {
        assert_eq!(parse_base(input).unwrap(), expected);
    }

    #[rstest]
    #[case("")]
    #[case("N")]
    #[case("AG")]
    #[case("x")]
    fn test_parse_base_invalid(#[case] input: &str) {
        assert_eq!(
            parse_base(input).unwrap_err(),
            ValidationError::InvalidBase(input.to_string())
        );
    }

    #[test]
    fn test_request_rejects_position_zero() {
        let err = VariantRequest::new(0, "G", "hg38", "chr17").unwrap_err();
        assert_eq!(err, ValidationError::InvalidPosition(0));
    }

    #[test]
    fn test_request_from_json() {
        let json = r#"{"variant_position": 43119628, "alternative": "g", "genome": "hg38", "chromosome": "chr17"}"#;
        let request: VariantRequest = serde_json::from_str(json).unwrap();

        assert_eq!(request.position, 43119628);
        assert_eq!(request.alternative, 'G');
        assert_eq!(request.to_string(), "chr17:43119628>G (hg38)");
    }

    #[test]
    fn test_request_from_json_invalid_base() {
        let json = r#"{"variant_position": 10, "alternative": "Z", "genome": "hg38", "chromosome": "chr1"}"#;
        let result: Result<VariantRequest, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }
}
