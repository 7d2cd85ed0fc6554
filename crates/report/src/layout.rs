//! Where the statistical blocks sit inside a stacked report sheet.
//!
//! The extractor addresses the grid by position. Every offset it relies on
//! lives here under a name, so a report with a different column order or
//! retitled blocks needs a different [`ReportLayout`], not a code change.

/// Marker texts and fixed offsets for one report layout.
///
/// The defaults describe logistic-regression output as produced by the
/// conversion pipeline: each block of the source report lands in the sheet
/// as a title row, a column-header row and data rows, with an index column
/// written at column 0. Data columns are therefore shifted right by one
/// against the source table.
#[derive(Debug, Clone)]
pub struct ReportLayout {
    /// Title text opening an odds-ratio region. Matched case-sensitively.
    pub region_start_marker: String,
    /// Title text closing an odds-ratio region. Matched case-sensitively.
    pub region_end_marker: String,
    /// Title text of a maximum-likelihood block. Matched case-insensitively,
    /// which is how report headers with inconsistent casing still match.
    pub likelihood_marker: String,
    /// Column of the effect name inside a region data row.
    pub effect_col: usize,
    /// Column of the point estimate inside a region data row.
    pub estimate_col: usize,
    /// Column of the lower Wald confidence limit.
    pub lower_limit_col: usize,
    /// Column of the upper Wald confidence limit.
    pub upper_limit_col: usize,
    /// Column holding likelihood-estimate values.
    pub likelihood_col: usize,
    /// Offset from a likelihood marker row down to the first value row.
    /// The default steps over the two-row block gap and the column-header
    /// row of the block below the marker.
    pub likelihood_row_offset: usize,
}

impl Default for ReportLayout {
    fn default() -> Self {
        ReportLayout {
            region_start_marker: "Odds Ratio Estimates".to_string(),
            region_end_marker: "Association of Predicted Probabilities and Observed Responses"
                .to_string(),
            likelihood_marker: "Analysis of Maximum Likelihood Estimates".to_string(),
            effect_col: 1,
            estimate_col: 2,
            lower_limit_col: 3,
            upper_limit_col: 4,
            likelihood_col: 7,
            likelihood_row_offset: 4,
        }
    }
}
