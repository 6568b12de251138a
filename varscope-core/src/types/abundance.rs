use crate::error::StructuralError;
use serde::{Deserialize, Serialize};

/// One lineage and its point-estimate abundance fraction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AbundanceRecord {
    pub lineage: String,
    pub fraction: f64,
}

impl AbundanceRecord {
    pub fn new(lineage: impl Into<String>, fraction: f64) -> Self {
        Self {
            lineage: lineage.into(),
            fraction,
        }
    }
}

/// Point-estimate table of a single sample.
///
/// Holds the lineage codes and their fractions as parallel sequences, exactly
/// as the demix output lists them. Fractions are passed through untouched;
/// they are not required to sum to one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PointEstimates {
    records: Vec<AbundanceRecord>,
}

impl PointEstimates {
    /// Zip two parallel sequences, failing if their lengths differ
    pub fn from_parallel(
        lineages: Vec<String>,
        abundances: Vec<f64>,
    ) -> Result<Self, StructuralError> {
        if lineages.len() != abundances.len() {
            return Err(StructuralError::LengthMismatch {
                lineages: lineages.len(),
                abundances: abundances.len(),
            });
        }

        let records = lineages
            .into_iter()
            .zip(abundances)
            .map(|(lineage, fraction)| AbundanceRecord { lineage, fraction })
            .collect();

        Ok(Self { records })
    }

    pub fn records(&self) -> &[AbundanceRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Sum of all fractions, in input order
    pub fn total_fraction(&self) -> f64 {
        self.records.iter().map(|r| r.fraction).sum()
    }
}

impl From<Vec<AbundanceRecord>> for PointEstimates {
    fn from(records: Vec<AbundanceRecord>) -> Self {
        Self { records }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_parallel() {
        let estimates = PointEstimates::from_parallel(
            vec!["B.1.617.2".to_string(), "AY.4".to_string()],
            vec![0.6, 0.1],
        )
        .unwrap();

        assert_eq!(estimates.len(), 2);
        assert_eq!(estimates.records()[0], AbundanceRecord::new("B.1.617.2", 0.6));
        assert_eq!(estimates.records()[1], AbundanceRecord::new("AY.4", 0.1));
        assert!((estimates.total_fraction() - 0.7).abs() < 1e-12);
    }

    #[test]
    fn test_from_parallel_length_mismatch() {
        let err = PointEstimates::from_parallel(
            vec!["BA.1".to_string(), "BA.2".to_string(), "BA.3".to_string()],
            vec![0.5, 0.5],
        )
        .unwrap_err();

        assert_eq!(
            err,
            StructuralError::LengthMismatch {
                lineages: 3,
                abundances: 2
            }
        );
    }

    #[test]
    fn test_empty_estimates() {
        let estimates = PointEstimates::from_parallel(Vec::new(), Vec::new()).unwrap();
        assert!(estimates.is_empty());
        assert_eq!(estimates.total_fraction(), 0.0);
    }
}
