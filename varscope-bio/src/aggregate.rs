/// Per display name aggregation of point estimates and bootstrap percentiles
use crate::taxonomy::NameResolver;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use varscope_core::{
    AbundanceRecord, AggregateResult, BootstrapTable, Percentile, PointEstimates, VarscopeResult,
};

/// Aggregation output together with the display names that only appeared in
/// the bootstrap table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Aggregation {
    /// One entry per display name of the point estimates, sorted by name
    pub results: Vec<AggregateResult>,
    /// Bootstrap-only display names, sorted; these never reach `results`
    pub bootstrap_only: Vec<String>,
}

#[derive(Debug, Default, Clone, Copy)]
struct GroupSums {
    total: f64,
    median: f64,
    iqr_sum_sq: f64,
}

/// Groups lineages by resolved display name and combines their statistics.
///
/// For each display name `d` found among the point estimates:
/// - `total_percent  = 100 * sum(fraction)`
/// - `median_percent = 100 * sum(p50)`
/// - `spread_percent = 100 * sqrt(sum((p75 - p25)^2))`
///
/// where the bootstrap sums run over the columns resolving to `d`. Names with
/// no bootstrap column get zero median and spread. Non-finite inputs are
/// propagated, not clamped.
#[derive(Debug, Clone, Copy)]
pub struct GroupAggregator<'a> {
    resolver: NameResolver<'a>,
}

impl<'a> GroupAggregator<'a> {
    pub fn new(resolver: NameResolver<'a>) -> Self {
        Self { resolver }
    }

    pub fn aggregate(
        &self,
        point: &[AbundanceRecord],
        bootstrap: &BootstrapTable,
    ) -> VarscopeResult<Vec<AggregateResult>> {
        Ok(self.aggregate_detailed(point, bootstrap)?.results)
    }

    pub fn aggregate_estimates(
        &self,
        estimates: &PointEstimates,
        bootstrap: &BootstrapTable,
    ) -> VarscopeResult<Aggregation> {
        self.aggregate_detailed(estimates.records(), bootstrap)
    }

    /// Fails before touching any data if a required percentile row is missing
    pub fn aggregate_detailed(
        &self,
        point: &[AbundanceRecord],
        bootstrap: &BootstrapTable,
    ) -> VarscopeResult<Aggregation> {
        let p25 = bootstrap.row(Percentile::P25)?;
        let p50 = bootstrap.row(Percentile::P50)?;
        let p75 = bootstrap.row(Percentile::P75)?;

        let point_names = self
            .resolver
            .resolve_all(point.iter().map(|r| r.lineage.as_str()));
        let boot_names = self.resolver.resolve_all(bootstrap.columns());

        // The point estimates alone decide which groups exist
        let mut groups: BTreeMap<&str, GroupSums> = point_names
            .iter()
            .map(|name| (name.as_str(), GroupSums::default()))
            .collect();

        for (name, record) in point_names.iter().zip(point) {
            if let Some(sums) = groups.get_mut(name.as_str()) {
                sums.total += record.fraction;
            }
        }

        let mut bootstrap_only = BTreeSet::new();
        for (idx, name) in boot_names.iter().enumerate() {
            match groups.get_mut(name.as_str()) {
                Some(sums) => {
                    let width = p75[idx] - p25[idx];
                    sums.median += p50[idx];
                    sums.iqr_sum_sq += width * width;
                }
                None => {
                    bootstrap_only.insert(name.as_str());
                }
            }
        }

        if !bootstrap_only.is_empty() {
            tracing::debug!(
                "Dropping {} bootstrap-only display names: {:?}",
                bootstrap_only.len(),
                bootstrap_only
            );
        }

        let results: Vec<AggregateResult> = groups
            .into_iter()
            .map(|(name, sums)| {
                tracing::debug!(
                    "{}: total={:.4} median={:.4} iqr_sum_sq={:.6}",
                    name,
                    sums.total,
                    sums.median,
                    sums.iqr_sum_sq
                );
                AggregateResult {
                    name: name.to_string(),
                    total_percent: 100.0 * sums.total,
                    median_percent: 100.0 * sums.median,
                    spread_percent: 100.0 * sums.iqr_sum_sq.sqrt(),
                }
            })
            .collect();

        Ok(Aggregation {
            results,
            bootstrap_only: bootstrap_only.into_iter().map(str::to_string).collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::taxonomy::TaxonomyTable;
    use pretty_assertions::assert_eq;
    use varscope_core::{StructuralError, VarscopeError};

    const EPS: f64 = 1e-9;

    fn delta_table() -> TaxonomyTable {
        TaxonomyTable::from_pairs([("B.1.617.2", "Delta"), ("AY", "Delta")])
    }

    fn boot(columns: &[&str], p25: Vec<f64>, p50: Vec<f64>, p75: Vec<f64>) -> BootstrapTable {
        BootstrapTable::new(columns.iter().map(|c| c.to_string()).collect())
            .with_row(0.25, p25)
            .unwrap()
            .with_row(0.5, p50)
            .unwrap()
            .with_row(0.75, p75)
            .unwrap()
    }

    #[test]
    fn test_delta_scenario() {
        let table = delta_table();
        let aggregator = GroupAggregator::new(NameResolver::new(&table));

        let point = vec![
            AbundanceRecord::new("B.1.617.2", 0.6),
            AbundanceRecord::new("AY.4", 0.1),
        ];
        let bootstrap = boot(
            &["B.1.617.2", "AY.4"],
            vec![0.55, 0.07],
            vec![0.58, 0.09],
            vec![0.58, 0.11],
        );

        let results = aggregator.aggregate(&point, &bootstrap).unwrap();
        assert_eq!(results.len(), 1);

        let delta = &results[0];
        assert_eq!(delta.name, "Delta");
        assert!((delta.total_percent - 70.0).abs() < EPS);
        assert!((delta.median_percent - 67.0).abs() < EPS);
        // sqrt(0.03^2 + 0.04^2) = 0.05
        assert!((delta.spread_percent - 5.0).abs() < EPS);
    }

    #[test]
    fn test_spread_is_root_sum_square_not_sum() {
        let table = delta_table();
        let aggregator = GroupAggregator::new(NameResolver::new(&table));

        let point = vec![AbundanceRecord::new("AY.1", 0.5)];
        let bootstrap = boot(
            &["AY.1", "AY.2"],
            vec![0.0, 0.0],
            vec![0.1, 0.1],
            vec![0.3, 0.4],
        );

        let results = aggregator.aggregate(&point, &bootstrap).unwrap();
        // sqrt(0.09 + 0.16) = 0.5, a plain sum would give 0.7
        assert!((results[0].spread_percent - 50.0).abs() < EPS);
    }

    #[test]
    fn test_bootstrap_only_names_are_dropped() {
        let table = TaxonomyTable::who_default();
        let aggregator = GroupAggregator::new(NameResolver::new(&table));

        let point = vec![AbundanceRecord::new("BA.1.1", 0.9)];
        let bootstrap = boot(
            &["BA.1.1", "B.1.1.7"],
            vec![0.8, 0.0],
            vec![0.85, 0.01],
            vec![0.9, 0.02],
        );

        let aggregation = aggregator.aggregate_detailed(&point, &bootstrap).unwrap();
        let names: Vec<&str> = aggregation.results.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["BA.1"]);
        assert_eq!(aggregation.bootstrap_only, vec!["Alpha".to_string()]);
    }

    #[test]
    fn test_missing_bootstrap_column_gives_zero() {
        let table = TaxonomyTable::who_default();
        let aggregator = GroupAggregator::new(NameResolver::new(&table));

        let point = vec![
            AbundanceRecord::new("P.1", 0.2),
            AbundanceRecord::new("XBB.1.5", 0.3),
        ];
        let bootstrap = boot(&["P.1"], vec![0.1], vec![0.2], vec![0.3]);

        let results = aggregator.aggregate(&point, &bootstrap).unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].name, "Gamma");
        assert_eq!(results[1].name, "XBB.1.5");
        assert!((results[1].total_percent - 30.0).abs() < EPS);
        assert_eq!(results[1].median_percent, 0.0);
        assert_eq!(results[1].spread_percent, 0.0);
    }

    #[test]
    fn test_missing_percentile_row_fails() {
        let table = delta_table();
        let aggregator = GroupAggregator::new(NameResolver::new(&table));

        let point = vec![AbundanceRecord::new("AY.4", 0.1)];
        let bootstrap = BootstrapTable::new(vec!["AY.4".to_string()])
            .with_row(0.25, vec![0.05])
            .unwrap()
            .with_row(0.5, vec![0.1])
            .unwrap();

        match aggregator.aggregate(&point, &bootstrap) {
            Err(VarscopeError::Structural(StructuralError::MissingPercentile { percentile })) => {
                assert_eq!(percentile, 0.75)
            }
            other => panic!("Expected MissingPercentile, got {:?}", other),
        }
    }

    #[test]
    fn test_nan_propagates() {
        let table = delta_table();
        let aggregator = GroupAggregator::new(NameResolver::new(&table));

        let point = vec![AbundanceRecord::new("AY.4", f64::NAN)];
        let bootstrap = boot(&["AY.4"], vec![0.1], vec![f64::INFINITY], vec![0.2]);

        let results = aggregator.aggregate(&point, &bootstrap).unwrap();
        assert!(results[0].total_percent.is_nan());
        assert!(results[0].median_percent.is_infinite());
        assert!(!results[0].is_finite());
    }

    #[test]
    fn test_output_sorted_by_name() {
        let table = TaxonomyTable::who_default();
        let aggregator = GroupAggregator::new(NameResolver::new(&table));

        let point = vec![
            AbundanceRecord::new("P.1", 0.1),
            AbundanceRecord::new("B.1.1.7", 0.1),
            AbundanceRecord::new("other", 0.1),
            AbundanceRecord::new("B.1.351", 0.1),
        ];
        let bootstrap = boot(&[], vec![], vec![], vec![]);

        let names: Vec<String> = aggregator
            .aggregate(&point, &bootstrap)
            .unwrap()
            .into_iter()
            .map(|r| r.name)
            .collect();
        assert_eq!(names, vec!["Alpha", "Beta", "Gamma", "Other"]);
    }
}
