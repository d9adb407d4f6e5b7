// 🗂️ Menu Loop
// Read-eval loop over the donor ledger: thank-you, report, letters to all, quit

use crate::config::MailroomConfig;
use crate::error::{MailroomError, MailroomResult};
use crate::ledger::DonorLedger;
use crate::letters::render_thank_you;
use crate::report::build_report;
use std::io::{BufRead, Write};
use tracing::{info, warn};

pub const MENU_TEXT: &str = "Select Action \n 1. Send a Thank You \n 2. Create a Report \n 3. Send Letters to Everyone \n 4. Quit \n";
pub const NAME_PROMPT: &str = "Donor's Full Name: ";
pub const AMOUNT_PROMPT: &str = "How much did they donate? ";
pub const LIST_KEYWORD: &str = "list";

// ============================================================================
// MENU ACTIONS
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    SendThankYou,
    CreateReport,
    SendLettersToEveryone,
    Quit,
}

/// What the loop does after an action has run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Stop,
}

impl MenuAction {
    /// Map a menu number to its action; unknown numbers map to nothing
    pub fn from_choice(choice: i64) -> Option<Self> {
        match choice {
            1 => Some(MenuAction::SendThankYou),
            2 => Some(MenuAction::CreateReport),
            3 => Some(MenuAction::SendLettersToEveryone),
            4 => Some(MenuAction::Quit),
            _ => None,
        }
    }

    pub fn handle<R: BufRead, W: Write>(
        self,
        session: &mut MailroomSession<R, W>,
    ) -> MailroomResult<Flow> {
        match self {
            MenuAction::SendThankYou => session.thank_you()?,
            MenuAction::CreateReport => session.print_report()?,
            MenuAction::SendLettersToEveryone => session.letters_to_everyone()?,
            MenuAction::Quit => return Ok(Flow::Stop),
        }
        Ok(Flow::Continue)
    }
}

/// Parse the operator's menu entry as an integer
pub fn parse_choice(input: &str) -> MailroomResult<i64> {
    input
        .trim()
        .parse()
        .map_err(|_| MailroomError::InvalidMenuChoice(input.trim().to_string()))
}

pub fn parse_amount(input: &str) -> MailroomResult<f64> {
    input
        .trim()
        .parse()
        .map_err(|_| MailroomError::InvalidAmount(input.trim().to_string()))
}

// ============================================================================
// SESSION
// ============================================================================

/// One operator session: owns the ledger and the console streams
pub struct MailroomSession<R, W> {
    ledger: DonorLedger,
    config: MailroomConfig,
    input: R,
    output: W,
    running: bool,
}

impl<R: BufRead, W: Write> MailroomSession<R, W> {
    pub fn new(ledger: DonorLedger, config: MailroomConfig, input: R, output: W) -> Self {
        Self {
            ledger,
            config,
            input,
            output,
            running: true,
        }
    }

    pub fn ledger(&self) -> &DonorLedger {
        &self.ledger
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Run until Quit or end of input
    pub fn run(&mut self) -> MailroomResult<()> {
        info!(donors = self.ledger.len(), "mailroom session started");

        while self.running {
            match self.step() {
                Ok(Flow::Continue) => {}
                Ok(Flow::Stop) => self.running = false,
                Err(MailroomError::UnexpectedEof) => {
                    info!("input closed, ending session");
                    self.running = false;
                }
                Err(err) => return Err(err),
            }
        }

        info!(donors = self.ledger.len(), "mailroom session ended");
        Ok(())
    }

    /// Show the menu, read one choice and dispatch it
    pub fn step(&mut self) -> MailroomResult<Flow> {
        let line = self.prompt(MENU_TEXT)?;

        let choice = match parse_choice(&line) {
            Ok(choice) => choice,
            Err(err) => {
                warn!(error = %err, "menu input rejected");
                writeln!(self.output, "Please enter a number from 1 to 4.")?;
                return Ok(Flow::Continue);
            }
        };

        match MenuAction::from_choice(choice) {
            Some(action) => action.handle(self),
            None => Ok(Flow::Continue),
        }
    }

    // ========================================================================
    // HANDLERS
    // ========================================================================

    /// Guided flow: name (with `list`), amount, record, then letter
    fn thank_you(&mut self) -> MailroomResult<()> {
        let name = self.read_donor_name()?;
        self.read_and_record_amount(&name)?;
        self.write_letter(&name)
    }

    fn print_report(&mut self) -> MailroomResult<()> {
        let report = build_report(&self.ledger);
        write!(self.output, "{}", report)?;
        Ok(())
    }

    fn letters_to_everyone(&mut self) -> MailroomResult<()> {
        let names: Vec<String> = self
            .ledger
            .list_donor_names()
            .into_iter()
            .map(str::to_string)
            .collect();
        for name in names {
            self.write_letter(&name)?;
        }
        Ok(())
    }

    // ========================================================================
    // HELPERS
    // ========================================================================

    fn read_donor_name(&mut self) -> MailroomResult<String> {
        loop {
            let name = self.prompt(NAME_PROMPT)?;
            if !name.eq_ignore_ascii_case(LIST_KEYWORD) {
                return Ok(name);
            }
            for donor in self.ledger.list_donor_names() {
                writeln!(self.output, "{}", donor)?;
            }
        }
    }

    fn read_and_record_amount(&mut self, name: &str) -> MailroomResult<()> {
        loop {
            let line = self.prompt(AMOUNT_PROMPT)?;
            let result = parse_amount(&line).and_then(|amount| self.ledger.record_donation(name, amount));

            match result {
                Ok(()) => return Ok(()),
                Err(err) if err.is_recoverable() => {
                    warn!(donor = name, error = %err, "donation amount rejected");
                    let hint = match err {
                        MailroomError::InvalidAmount(_) => "Please enter a numeric amount.",
                        _ => "Please enter a non-negative amount.",
                    };
                    writeln!(self.output, "{}", hint)?;
                }
                Err(err) => return Err(err),
            }
        }
    }

    fn write_letter(&mut self, name: &str) -> MailroomResult<()> {
        let letter = render_thank_you(name, &self.config.sender);
        writeln!(self.output, "\n{}", letter)?;
        Ok(())
    }

    /// Write `text`, flush, and read one trimmed line
    fn prompt(&mut self, text: &str) -> MailroomResult<String> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(MailroomError::UnexpectedEof);
        }
        Ok(line.trim().to_string())
    }
}

// ============================================================================
// TESTS
// ============================================================================
