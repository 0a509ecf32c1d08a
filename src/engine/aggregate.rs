//! Combination of line results into quote totals.

use crate::config::{FIXED_SURCHARGE_EUR, VAT_RATE};
use crate::model::{OtherProductLineResult, QuoteTotals, WallLineResult};
use crate::units::finite_or_zero;

/// Aggregate wall and other lines into HT / TVA / TTC totals.
///
/// Wall line amounts already include their finish add-on; it is not added
/// again here. The surcharge is charged once when at least one line exists.
pub fn aggregate(wall_lines: &[WallLineResult], other_lines: &[OtherProductLineResult]) -> QuoteTotals {
    let wall_sum: f64 = wall_lines.iter().map(|l| l.line_amount_ht).sum();
    let other_sum: f64 = other_lines.iter().map(|l| l.line_total).sum();
    let sum_ht = finite_or_zero(wall_sum + other_sum);

    let surcharge = if wall_lines.len() + other_lines.len() > 0 {
        FIXED_SURCHARGE_EUR
    } else {
        0.0
    };

    let total_ht = sum_ht + surcharge;
    let total_vat = total_ht * VAT_RATE;

    QuoteTotals {
        sum_ht_excluding_surcharge: sum_ht,
        fixed_surcharge_eur: surcharge,
        total_ht,
        vat_rate: VAT_RATE,
        total_vat,
        total_ttc: total_ht + total_vat,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const EPS: f64 = 0.0001;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPS
    }

    fn wall(amount: f64) -> WallLineResult {
        WallLineResult {
            line_amount_ht: amount,
            ..Default::default()
        }
    }

    fn other(total: f64) -> OtherProductLineResult {
        OtherProductLineResult {
            line_total: total,
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_quote_has_no_surcharge() {
        let totals = aggregate(&[], &[]);
        assert_eq!(totals.fixed_surcharge_eur, 0.0);
        assert_eq!(totals.total_ht, 0.0);
        assert_eq!(totals.total_vat, 0.0);
        assert_eq!(totals.total_ttc, 0.0);
        assert!(totals.is_empty());
    }

    #[test]
    fn test_single_line_adds_surcharge() {
        let totals = aggregate(&[], &[other(360.0)]);
        assert!(approx_eq(totals.sum_ht_excluding_surcharge, 360.0));
        assert!(approx_eq(totals.total_ht, 379.95));
        assert!(approx_eq(totals.total_vat, 75.99));
        assert!(approx_eq(totals.total_ttc, 455.94));
    }

    #[test]
    fn test_surcharge_applied_once() {
        let walls: Vec<_> = (0..5).map(|_| wall(100.0)).collect();
        let others: Vec<_> = (0..5).map(|_| other(10.0)).collect();
        let totals = aggregate(&walls, &others);
        assert_eq!(totals.fixed_surcharge_eur, FIXED_SURCHARGE_EUR);
        assert!(approx_eq(totals.total_ht, 550.0 + 19.95));
    }

    #[test]
    fn test_vat_is_twenty_percent_of_ht() {
        let totals = aggregate(&[wall(123.0), wall(802.0)], &[other(7776.0)]);
        assert_eq!(totals.total_vat, totals.total_ht * 0.20);
        assert_eq!(totals.total_ttc, totals.total_ht + totals.total_vat);
    }

    #[test]
    fn test_aggregate_is_idempotent() {
        let walls = [wall(123.0)];
        let others = [other(360.0), other(72.5)];
        assert_eq!(aggregate(&walls, &others), aggregate(&walls, &others));
    }

    #[test]
    fn test_finish_not_counted_twice() {
        let line = WallLineResult {
            finish_amount: 31.0,
            line_amount_ht: 277.0,
            ..Default::default()
        };
        let totals = aggregate(&[line], &[]);
        assert!(approx_eq(totals.sum_ht_excluding_surcharge, 277.0));
    }
}
