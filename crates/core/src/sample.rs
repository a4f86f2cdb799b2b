//! Sample: a physical specimen record with geometric bounds.

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// A persisted sample, attached to its owning account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub id: i64,
    pub sample_label: String,
    pub proposal_number: String,
    pub inner_diameter: f64,
    pub outer_diameter: f64,
    pub owner_id: i64,
}

/// Payload for registering a new sample under an account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewSample {
    pub sample_label: String,
    pub proposal_number: String,
    pub inner_diameter: f64,
    pub outer_diameter: f64,
}

impl NewSample {
    /// Check the geometric invariant: the inner diameter must be strictly
    /// smaller than the outer diameter.
    pub fn validate(&self) -> DomainResult<()> {
        if self.inner_diameter >= self.outer_diameter {
            return Err(DomainError::invalid_input(
                "Inner diameter must be lesser than outer diameter",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(inner: f64, outer: f64) -> NewSample {
        NewSample {
            sample_label: "S1".to_string(),
            proposal_number: "P1".to_string(),
            inner_diameter: inner,
            outer_diameter: outer,
        }
    }

    #[test]
    fn ordered_diameters_are_valid() {
        assert!(sample(3.0, 5.0).validate().is_ok());
    }

    #[test]
    fn inverted_diameters_are_rejected() {
        let err = sample(5.0, 3.0).validate().unwrap_err();
        assert_eq!(
            err,
            DomainError::InvalidInput(
                "Inner diameter must be lesser than outer diameter".to_string()
            )
        );
    }

    #[test]
    fn equal_diameters_are_rejected() {
        assert!(sample(4.0, 4.0).validate().is_err());
    }
}
