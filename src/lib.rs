// Mailroom - Core Library
// Exposes the ledger, report, letters and menu loop for the CLI and tests

pub mod config;
pub mod error;
pub mod ledger;
pub mod letters;
pub mod menu;
pub mod report;
pub mod seed;

// Re-export commonly used types
pub use config::MailroomConfig;
pub use error::{MailroomError, MailroomResult};
pub use ledger::{Donor, DonorLedger};
pub use letters::render_thank_you;
pub use menu::{Flow, MailroomSession, MenuAction};
pub use report::{build_report, Report, ReportRow};
pub use seed::{load_ledger, parse_seed, seeded_ledger, SeedDonation};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
