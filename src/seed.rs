// 🌱 Seed Fixture
// Sample donors loaded into the ledger at startup (data/seed_donations.csv)

use crate::ledger::DonorLedger;
use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::info;

pub const EMBEDDED_SEED: &str = include_str!("../data/seed_donations.csv");

/// One fixture row: a single gift by a single donor
#[derive(Debug, Clone, Deserialize)]
pub struct SeedDonation {
    pub donor: String,
    pub amount: f64,
}

/// Parse fixture CSV (`donor,amount` header, one gift per row)
pub fn parse_seed(content: &str) -> Result<Vec<SeedDonation>> {
    let mut rdr = csv::Reader::from_reader(content.as_bytes());

    let mut donations = Vec::new();
    for (line, result) in rdr.deserialize().enumerate() {
        let donation: SeedDonation = result
            .with_context(|| format!("Failed to deserialize seed row {}", line + 1))?;
        donations.push(donation);
    }

    Ok(donations)
}

/// Build a ledger from fixture CSV; rows go through `record_donation`
pub fn load_ledger(content: &str) -> Result<DonorLedger> {
    let mut ledger = DonorLedger::new();
    for donation in parse_seed(content)? {
        ledger
            .record_donation(&donation.donor, donation.amount)
            .with_context(|| format!("Invalid seed donation for {}", donation.donor))?;
    }

    info!(donors = ledger.len(), "seed ledger loaded");
    Ok(ledger)
}

pub fn seeded_ledger() -> Result<DonorLedger> {
    load_ledger(EMBEDDED_SEED)
}
