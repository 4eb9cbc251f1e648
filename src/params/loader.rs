//! Load investment scenarios from CSV, one parameter set per row

use super::InvestmentParameters;
use csv::Reader;
use std::error::Error;
use std::path::Path;

/// Raw CSV row matching the scenario file columns
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    #[serde(rename = "PurchasePrice")]
    purchase_price: f64,
    #[serde(rename = "NotaryFees")]
    notary_fees: f64,
    #[serde(rename = "Renovation")]
    renovation: f64,
    #[serde(rename = "Furnishing")]
    furnishing: f64,
    #[serde(rename = "AgencyFees", default)]
    agency_fees: f64,
    #[serde(rename = "Equity")]
    equity: f64,
    #[serde(rename = "LoanRatePct")]
    loan_rate_pct: f64,
    #[serde(rename = "InsuranceRatePct")]
    insurance_rate_pct: f64,
    #[serde(rename = "LoanTermYears")]
    loan_term_years: u32,
    #[serde(rename = "MonthlyRent")]
    monthly_rent: f64,
    #[serde(rename = "VacancyPct")]
    vacancy_rate_pct: f64,
    #[serde(rename = "RentEscalationPct")]
    rent_escalation_pct: f64,
    #[serde(rename = "CondoFees")]
    condo_fees: f64,
    #[serde(rename = "LandlordInsurance")]
    landlord_insurance: f64,
    #[serde(rename = "PropertyTax")]
    property_tax: f64,
    #[serde(rename = "OtherCharges", default)]
    other_charges: f64,
    #[serde(rename = "ChargesEscalationPct")]
    charges_escalation_pct: f64,
    #[serde(rename = "HoldingYears")]
    holding_period_years: u32,
    #[serde(rename = "AppreciationPct")]
    appreciation_rate_pct: f64,
    #[serde(rename = "CapitalGainsTaxPct")]
    capital_gains_tax_pct: f64,
}

impl CsvRow {
    fn to_parameters(self) -> Result<InvestmentParameters, Box<dyn Error>> {
        let params = InvestmentParameters {
            purchase_price: self.purchase_price,
            notary_fees: self.notary_fees,
            renovation: self.renovation,
            furnishing: self.furnishing,
            agency_fees: self.agency_fees,
            equity: self.equity,
            loan_rate_pct: self.loan_rate_pct,
            insurance_rate_pct: self.insurance_rate_pct,
            loan_term_years: self.loan_term_years,
            monthly_rent: self.monthly_rent,
            vacancy_rate_pct: self.vacancy_rate_pct,
            rent_escalation_pct: self.rent_escalation_pct,
            condo_fees: self.condo_fees,
            landlord_insurance: self.landlord_insurance,
            property_tax: self.property_tax,
            other_charges: self.other_charges,
            charges_escalation_pct: self.charges_escalation_pct,
            holding_period_years: self.holding_period_years,
            appreciation_rate_pct: self.appreciation_rate_pct,
            capital_gains_tax_pct: self.capital_gains_tax_pct,
        };
        params.validate()?;
        Ok(params)
    }
}

/// Load all scenarios from a CSV file
pub fn load_parameters<P: AsRef<Path>>(path: P) -> Result<Vec<InvestmentParameters>, Box<dyn Error>> {
    let mut reader = Reader::from_path(path)?;
    let mut scenarios = Vec::new();

    for result in reader.deserialize() {
        let row: CsvRow = result?;
        scenarios.push(row.to_parameters()?);
    }

    Ok(scenarios)
}

/// Load scenarios from any reader (e.g., string buffer, network stream)
pub fn load_parameters_from_reader<R: std::io::Read>(
    reader: R,
) -> Result<Vec<InvestmentParameters>, Box<dyn Error>> {
    let mut csv_reader = Reader::from_reader(reader);
    let mut scenarios = Vec::new();

    for result in csv_reader.deserialize() {
        let row: CsvRow = result?;
        scenarios.push(row.to_parameters()?);
    }

    Ok(scenarios)
}
