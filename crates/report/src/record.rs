//! Output units of the extraction pipeline.

use regtab_sheet::CellValue;

/// Column names of the final output table, in write order.
pub const OUTPUT_HEADER: [&str; 4] = [
    "Effect",
    "Point Estimate",
    "95% Wald Confidence Limits",
    "Max Likelihood Estimates",
];

/// One data row pulled from an odds-ratio region, before the likelihood
/// value is joined on.
#[derive(Debug, Clone, PartialEq)]
pub struct OddsRatioRow {
    pub effect: CellValue,
    pub point_estimate: CellValue,
    /// Both Wald limits, rendered as `"lower, upper"`.
    pub confidence_limits: String,
}

/// One fully assembled output record.
///
/// The likelihood value is joined onto the region row by position, not by
/// key. The fields of a record are therefore not guaranteed to originate
/// from the same source row; they are the i-th entries of two scans that
/// walk the report in the same order.
#[derive(Debug, Clone, PartialEq)]
pub struct CleanRecord {
    pub effect: CellValue,
    pub point_estimate: CellValue,
    pub confidence_limits: String,
    pub likelihood: CellValue,
}

impl CleanRecord {
    /// The record's cells in output-column order.
    #[must_use]
    pub fn cells(&self) -> Vec<CellValue> {
        vec![
            self.effect.clone(),
            self.point_estimate.clone(),
            CellValue::String(self.confidence_limits.clone()),
            self.likelihood.clone(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cells_follow_header_order() {
        let record = CleanRecord {
            effect: CellValue::String("ageGroup".to_string()),
            point_estimate: CellValue::Float(1.422),
            confidence_limits: "0.897, 2.255".to_string(),
            likelihood: CellValue::Float(0.0352),
        };

        let cells = record.cells();
        assert_eq!(cells.len(), OUTPUT_HEADER.len());
        assert_eq!(cells[0], CellValue::String("ageGroup".to_string()));
        assert_eq!(cells[2], CellValue::String("0.897, 2.255".to_string()));
    }
}
