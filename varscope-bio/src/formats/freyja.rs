/// Readers for the two Freyja outputs of a sample
///
/// Only the parts of each file the aggregation needs are read:
/// - `demix`: tab separated `key<TAB>value` lines; the `lineages` and
///   `abundances` values are token lists, either bare (`AY.4 BA.1`) or in the
///   bracketed numpy form older Freyja releases wrote (`['AY.4' 'BA.1']`)
/// - `boot` lineage percentiles: CSV with a header of lineage codes and one
///   row per percentile
use std::fs::File;
use std::io::Read;
use std::path::Path;
use varscope_core::{BootstrapTable, PointEstimates, VarscopeError, VarscopeResult};

const LINEAGES_KEY: &str = "lineages";
const ABUNDANCES_KEY: &str = "abundances";

/// Parse a demix output file into point estimates
pub fn parse_demix<P: AsRef<Path>>(path: P) -> VarscopeResult<PointEstimates> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)?;
    let estimates = parse_demix_str(&text)?;
    tracing::info!(
        "Loaded {} lineages from {}",
        estimates.len(),
        path.display()
    );
    Ok(estimates)
}

pub fn parse_demix_str(text: &str) -> VarscopeResult<PointEstimates> {
    let mut lineages = None;
    let mut abundances = None;

    for line in text.lines() {
        let Some((key, value)) = line.split_once('\t') else {
            continue;
        };

        match key.trim() {
            LINEAGES_KEY => lineages = Some(tokenize(value)),
            ABUNDANCES_KEY => abundances = Some(parse_numbers(&tokenize(value), ABUNDANCES_KEY)?),
            _ => {}
        }
    }

    let lineages = lineages
        .ok_or_else(|| VarscopeError::Parse(format!("demix output has no '{}' row", LINEAGES_KEY)))?;
    let abundances = abundances.ok_or_else(|| {
        VarscopeError::Parse(format!("demix output has no '{}' row", ABUNDANCES_KEY))
    })?;

    Ok(PointEstimates::from_parallel(lineages, abundances)?)
}

/// Split a list cell into tokens, dropping brackets, separators and quotes
fn tokenize(value: &str) -> Vec<String> {
    let trimmed = value.trim();
    let inner = trimmed
        .strip_prefix('[')
        .and_then(|s| s.strip_suffix(']'))
        .unwrap_or(trimmed);

    inner
        .split(|c: char| c.is_whitespace() || c == ',')
        .map(|t| t.trim_matches(|c| c == '\'' || c == '"'))
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_numbers(tokens: &[String], field: &str) -> VarscopeResult<Vec<f64>> {
    tokens
        .iter()
        .map(|t| parse_number(t, field))
        .collect()
}

fn parse_number(token: &str, field: &str) -> VarscopeResult<f64> {
    token
        .parse::<f64>()
        .map_err(|_| VarscopeError::Parse(format!("invalid {} value '{}'", field, token)))
}

/// Parse a bootstrap lineage percentile CSV file
pub fn parse_bootstrap<P: AsRef<Path>>(path: P) -> VarscopeResult<BootstrapTable> {
    let path = path.as_ref();
    let table = parse_bootstrap_reader(File::open(path)?)?;
    tracing::info!(
        "Loaded {} bootstrap columns x {} percentiles from {}",
        table.columns().len(),
        table.rows().len(),
        path.display()
    );
    Ok(table)
}

pub fn parse_bootstrap_reader<R: Read>(reader: R) -> VarscopeResult<BootstrapTable> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    // The first header cell labels the percentile index and is ignored
    let columns: Vec<String> = csv_reader
        .headers()
        .map_err(csv_error)?
        .iter()
        .skip(1)
        .map(str::to_string)
        .collect();

    let mut table = BootstrapTable::new(columns);

    for record in csv_reader.records() {
        let record = record.map_err(csv_error)?;
        let mut fields = record.iter();

        let percentile = match fields.next() {
            Some(p) if !p.is_empty() => parse_number(p, "percentile")?,
            _ => continue,
        };
        let values = fields
            .map(|v| parse_number(v, "bootstrap"))
            .collect::<VarscopeResult<Vec<f64>>>()?;

        table.push_row(percentile, values)?;
    }

    Ok(table)
}

fn csv_error(err: csv::Error) -> VarscopeError {
    if err.is_io_error() {
        if let csv::ErrorKind::Io(io) = err.into_kind() {
            return VarscopeError::Io(io);
        }
        return VarscopeError::Parse("bootstrap CSV read failed".to_string());
    }
    VarscopeError::Parse(format!("bootstrap CSV: {}", err))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use varscope_core::{AbundanceRecord, Percentile, StructuralError};

    const DEMIX: &str = "\tsample1.tsv\n\
summarized\t[('Delta', 0.71), ('Other', 0.02)]\n\
lineages\tB.1.617.2 AY.4 AY.103\n\
abundances\t0.60000000 0.10000000 0.01000000\n\
resid\t3.21\n\
coverage\t98.7\n";

    #[test]
    fn test_parse_demix_bare_lists() {
        let estimates = parse_demix_str(DEMIX).unwrap();
        assert_eq!(
            estimates.records(),
            &[
                AbundanceRecord::new("B.1.617.2", 0.6),
                AbundanceRecord::new("AY.4", 0.1),
                AbundanceRecord::new("AY.103", 0.01),
            ]
        );
    }

    #[test]
    fn test_parse_demix_numpy_repr() {
        let text = "lineages\t['BA.1.1' 'BA.2']\nabundances\t[0.75 0.25]\n";
        let estimates = parse_demix_str(text).unwrap();
        assert_eq!(estimates.records()[0], AbundanceRecord::new("BA.1.1", 0.75));
        assert_eq!(estimates.records()[1], AbundanceRecord::new("BA.2", 0.25));
    }

    #[test]
    fn test_parse_demix_comma_separated() {
        let text = "lineages\t[\"XBB.1.5\", \"BQ.1\"]\nabundances\t[0.5, 0.5]\n";
        let estimates = parse_demix_str(text).unwrap();
        assert_eq!(estimates.len(), 2);
        assert_eq!(estimates.records()[0].lineage, "XBB.1.5");
    }

    #[test]
    fn test_parse_demix_missing_row() {
        match parse_demix_str("lineages\tBA.1\n").unwrap_err() {
            VarscopeError::Parse(msg) => assert!(msg.contains("abundances")),
            e => panic!("Expected Parse error, got {:?}", e),
        }
    }

    #[test]
    fn test_parse_demix_bad_number() {
        match parse_demix_str("lineages\tBA.1 BA.2\nabundances\t0.5 lots\n").unwrap_err() {
            VarscopeError::Parse(msg) => assert!(msg.contains("'lots'")),
            e => panic!("Expected Parse error, got {:?}", e),
        }
    }

    #[test]
    fn test_parse_demix_count_mismatch() {
        match parse_demix_str("lineages\tBA.1 BA.2\nabundances\t0.5\n").unwrap_err() {
            VarscopeError::Structural(StructuralError::LengthMismatch { lineages, abundances }) => {
                assert_eq!((lineages, abundances), (2, 1));
            }
            e => panic!("Expected LengthMismatch, got {:?}", e),
        }
    }

    #[test]
    fn test_parse_bootstrap() {
        let csv = ",B.1.617.2,AY.4\n\
0.025,0.50,0.05\n\
0.25,0.55,0.07\n\
0.5,0.58,0.09\n\
0.75,0.58,0.11\n\
0.975,0.62,0.15\n";

        let table = parse_bootstrap_reader(csv.as_bytes()).unwrap();
        assert_eq!(table.columns(), &["B.1.617.2".to_string(), "AY.4".to_string()]);
        assert_eq!(table.rows().len(), 5);
        assert_eq!(table.row(Percentile::P25).unwrap(), &[0.55, 0.07]);
        assert_eq!(table.row(Percentile::P75).unwrap(), &[0.58, 0.11]);
    }

    #[test]
    fn test_parse_bootstrap_ragged_row() {
        let csv = ",BA.1,BA.2\n0.25,0.1\n";
        match parse_bootstrap_reader(csv.as_bytes()).unwrap_err() {
            VarscopeError::Structural(StructuralError::RowWidthMismatch { expected, found, .. }) => {
                assert_eq!((expected, found), (2, 1));
            }
            e => panic!("Expected RowWidthMismatch, got {:?}", e),
        }
    }

    #[test]
    fn test_parse_bootstrap_bad_value() {
        let csv = ",BA.1\n0.25,abc\n";
        assert!(matches!(
            parse_bootstrap_reader(csv.as_bytes()),
            Err(VarscopeError::Parse(_))
        ));
    }
}
