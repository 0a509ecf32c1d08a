//! Plain-text quote recap handed to the report layer.
//!
//! Sections are INI-like (`[WALL 1]`, `[OTHER 1]`, `[TOTALS]`) with one
//! `Key=Value` per line. Amounts use the 2-decimal convention.

use std::fmt::Write;

use crate::config::float_cmp::approx_zero;
use crate::model::{OtherProductLineResult, QuoteReport, QuoteTotals, WallLineResult};
use crate::units::format_amount;

/// Writer for recap sections.
pub struct RecapWriter {
    /// Output buffer.
    buffer: String,
}

impl Default for RecapWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl RecapWriter {
    /// Create a new recap writer.
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
        }
    }

    /// Get the generated recap.
    pub fn output(&self) -> &str {
        &self.buffer
    }

    /// Take the generated recap.
    pub fn take_output(self) -> String {
        self.buffer
    }

    /// Write a comment line.
    pub fn write_comment(&mut self, comment: &str) {
        writeln!(self.buffer, "; {}", comment).unwrap();
    }

    /// Open a section.
    pub fn write_section(&mut self, name: &str) {
        if !self.buffer.is_empty() {
            writeln!(self.buffer).unwrap();
        }
        writeln!(self.buffer, "[{}]", name).unwrap();
    }

    /// Write a key/value pair.
    pub fn write_value(&mut self, key: &str, value: impl std::fmt::Display) {
        writeln!(self.buffer, "{}={}", key, value).unwrap();
    }

    /// Write an amount with two decimals.
    pub fn write_amount(&mut self, key: &str, amount: f64) {
        self.write_value(key, format_amount(amount));
    }
}

/// Generate the recap of a priced quote.
pub fn generate_recap(report: &QuoteReport) -> String {
    let mut writer = RecapWriter::new();

    writer.write_comment(&format!("Creator: ledquote-rs {}", env!("CARGO_PKG_VERSION")));
    writer.write_comment(&format!(
        "Lines: {} wall, {} other",
        report.wall_lines.len(),
        report.other_lines.len()
    ));

    for (idx, line) in report.wall_lines.iter().enumerate() {
        write_wall_section(&mut writer, line, idx + 1);
    }

    for (idx, line) in report.other_lines.iter().enumerate() {
        write_other_section(&mut writer, line, idx + 1);
    }

    write_totals_section(&mut writer, &report.totals);

    writer.take_output()
}

fn write_wall_section(writer: &mut RecapWriter, line: &WallLineResult, num: usize) {
    writer.write_section(&format!("WALL {}", num));
    writer.write_amount("Surface", line.surface_m2);
    writer.write_value(
        "Diagonal",
        format!("{} cm / {} in", line.diagonal_cm, line.diagonal_inches),
    );
    match line.resolution() {
        Some((w, h)) => writer.write_value("Resolution", format!("{}x{}", w, h)),
        None => writer.write_value("Resolution", "-"),
    }
    writer.write_amount("LinearMeters", line.linear_meter_used);
    writer.write_value("UnitPrice", line.monthly_or_purchase_total);
    writer.write_value("Quantity", line.quantity);
    if !approx_zero(line.finish_amount) {
        writer.write_amount("Finish", line.finish_amount);
    }
    writer.write_amount("AmountHT", line.line_amount_ht);
}

fn write_other_section(writer: &mut RecapWriter, line: &OtherProductLineResult, num: usize) {
    writer.write_section(&format!("OTHER {}", num));
    if !line.label.is_empty() {
        writer.write_value("Label", &line.label);
    }
    writer.write_amount("UnitPrice", line.unit_price);
    writer.write_value("Quantity", line.quantity);
    writer.write_amount("AmountHT", line.line_total);
}

fn write_totals_section(writer: &mut RecapWriter, totals: &QuoteTotals) {
    writer.write_section("TOTALS");
    writer.write_amount("Lines", totals.sum_ht_excluding_surcharge);
    writer.write_amount("Surcharge", totals.fixed_surcharge_eur);
    writer.write_amount("TotalHT", totals.total_ht);
    writer.write_value("VatRate", format!("{}%", totals.vat_rate * 100.0));
    writer.write_amount("TVA", totals.total_vat);
    writer.write_amount("TotalTTC", totals.total_ttc);
}
