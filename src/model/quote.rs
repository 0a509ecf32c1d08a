//! Whole-quote request and report.

use serde::{Deserialize, Serialize};

use super::{OtherProductLineInput, OtherProductLineResult, QuoteTotals, WallLineInput, WallLineResult};

/// All configured lines of a quote.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QuoteRequest {
    pub wall_lines: Vec<WallLineInput>,
    pub other_lines: Vec<OtherProductLineInput>,
}

impl QuoteRequest {
    /// Total number of lines.
    pub fn line_count(&self) -> usize {
        self.wall_lines.len() + self.other_lines.len()
    }

    /// Check if the request has no line.
    pub fn is_empty(&self) -> bool {
        self.line_count() == 0
    }
}

/// Per-line breakdown plus totals, handed to the report layer.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteReport {
    pub wall_lines: Vec<WallLineResult>,
    pub other_lines: Vec<OtherProductLineResult>,
    pub totals: QuoteTotals,
}
