// 📒 Donor Ledger
// In-memory table of donors and their donation histories

use crate::error::{MailroomError, MailroomResult};
use std::collections::HashMap;
use tracing::debug;

// ============================================================================
// DONOR
// ============================================================================

/// A donor and every gift recorded for them, oldest first
#[derive(Debug, Clone, PartialEq)]
pub struct Donor {
    /// Full name - the unique key in the ledger
    pub name: String,

    /// Donation amounts in the order they were entered (never empty)
    pub donations: Vec<f64>,
}

impl Donor {
    fn new(name: String, first_amount: f64) -> Self {
        Donor {
            name,
            donations: vec![first_amount],
        }
    }

    pub fn total(&self) -> f64 {
        self.donations.iter().sum()
    }

    pub fn gift_count(&self) -> usize {
        self.donations.len()
    }

    pub fn average(&self) -> f64 {
        self.total() / self.gift_count() as f64
    }
}

// ============================================================================
// LEDGER
// ============================================================================

/// Donor name → donation history, iterated in insertion order
#[derive(Debug, Default)]
pub struct DonorLedger {
    donors: Vec<Donor>,
    index: HashMap<String, usize>,
}

impl DonorLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a donation, creating the donor on their first gift
    ///
    /// Names match exactly (case-sensitive). Negative and non-finite
    /// amounts are refused so every history stays valid.
    pub fn record_donation(&mut self, name: &str, amount: f64) -> MailroomResult<()> {
        if !amount.is_finite() {
            return Err(MailroomError::NonFiniteAmount);
        }
        if amount < 0.0 {
            return Err(MailroomError::NegativeAmount(amount));
        }

        match self.index.get(name).copied() {
            Some(position) => {
                let donor = &mut self.donors[position];
                donor.donations.push(amount);
                debug!(donor = name, amount, gifts = donor.donations.len(), "donation appended");
            }
            None => {
                self.index.insert(name.to_string(), self.donors.len());
                self.donors.push(Donor::new(name.to_string(), amount));
                debug!(donor = name, amount, "new donor created");
            }
        }

        Ok(())
    }

    /// Donor names in insertion order
    pub fn list_donor_names(&self) -> Vec<&str> {
        self.donors.iter().map(|d| d.name.as_str()).collect()
    }

    pub fn donor(&self, name: &str) -> Option<&Donor> {
        self.index.get(name).map(|&position| &self.donors[position])
    }

    pub fn donations(&self, name: &str) -> Option<&[f64]> {
        self.donor(name).map(|d| d.donations.as_slice())
    }

    pub fn donors(&self) -> impl Iterator<Item = &Donor> {
        self.donors.iter()
    }

    pub fn len(&self) -> usize {
        self.donors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.donors.is_empty()
    }
}

// ============================================================================
// TESTS
// ============================================================================
