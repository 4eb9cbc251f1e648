//! Spreadsheet export of projection output
//!
//! Pure serialization over an already-computed result; nothing here mutates
//! the series it reads. Both tables are rendered to in-memory CSV buffers
//! with named column headers.

use crate::params::InvestmentParameters;
use crate::projection::{CashflowSeries, ProjectionResult};
use csv::Writer;
use std::error::Error;

/// Serialize the cash-flow series as a two-column table
///
/// One row per series entry: period index (year 0 = equity outlay) and the
/// cash-flow value for that year.
pub fn cashflow_table(series: &CashflowSeries) -> Result<Vec<u8>, Box<dyn Error>> {
    let mut writer = Writer::from_writer(Vec::new());
    writer.write_record(["Year", "Cashflow"])?;

    for (year, value) in series.values().iter().enumerate() {
        writer.write_record([year.to_string(), format!("{:.2}", value)])?;
    }

    Ok(writer.into_inner()?)
}

/// Serialize the scenario parameters and headline results as a two-column
/// Parameter/Value table
pub fn summary_table(
    params: &InvestmentParameters,
    result: &ProjectionResult,
) -> Result<Vec<u8>, Box<dyn Error>> {
    let mut writer = Writer::from_writer(Vec::new());
    writer.write_record(["Parameter", "Value"])?;

    let rows: [(&str, f64); 12] = [
        ("Purchase price", params.purchase_price),
        ("Notary fees", params.notary_fees),
        ("Renovation", params.renovation),
        ("Furnishing", params.furnishing),
        ("Equity", params.equity),
        ("Loan principal", result.loan.principal),
        ("Monthly payment", result.loan.monthly_payment),
        ("Annual rent", params.annual_rent()),
        ("Annual charges", params.annual_charges()),
        ("Annual cashflow", result.annual_cashflow),
        ("IRR (%)", result.irr_pct()),
        ("Net sale proceeds", result.net_sale_proceeds),
    ];

    for (name, value) in rows {
        writer.write_record([name.to_string(), format!("{:.2}", value)])?;
    }

    Ok(writer.into_inner()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::ProjectionEngine;

    #[test]
    fn test_cashflow_table_has_header_and_all_entries() {
        let params = InvestmentParameters::default_scenario();
        let result = ProjectionEngine::new(params).project();

        let buffer = cashflow_table(&result.series).unwrap();
        let mut reader = csv::Reader::from_reader(buffer.as_slice());

        assert_eq!(
            reader.headers().unwrap(),
            &csv::StringRecord::from(vec!["Year", "Cashflow"])
        );

        let records: Vec<csv::StringRecord> =
            reader.records().collect::<Result<_, _>>().unwrap();
        assert_eq!(records.len(), result.series.len());
        assert_eq!(&records[0][0], "0");
        assert_eq!(&records[0][1], "-20000.00");
    }

    #[test]
    fn test_summary_table_round_trips() {
        let params = InvestmentParameters::default_scenario();
        let result = ProjectionEngine::new(params.clone()).project();

        let buffer = summary_table(&params, &result).unwrap();
        let mut reader = csv::Reader::from_reader(buffer.as_slice());

        let records: Vec<csv::StringRecord> =
            reader.records().collect::<Result<_, _>>().unwrap();
        assert_eq!(records.len(), 12);
        assert_eq!(&records[0][0], "Purchase price");
        assert_eq!(&records[0][1], "200000.00");
        assert_eq!(&records[6][0], "Monthly payment");
        assert_eq!(&records[6][1], "1179.56");
    }

    #[test]
    fn test_export_leaves_series_untouched() {
        let params = InvestmentParameters::default_scenario();
        let result = ProjectionEngine::new(params).project();

        let before = result.series.clone();
        let _ = cashflow_table(&result.series).unwrap();
        assert_eq!(result.series, before);
    }
}
