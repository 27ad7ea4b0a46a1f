//! Address autofill driven by the postal code field
//!
//! Every edit of the postal code goes through [`AutofillController::on_postal_code_changed`],
//! which either clears the address or hands back a [`LookupTicket`] for the caller to
//! run. Lookup results come back through [`AutofillController::on_lookup_completed`];
//! only the completion carrying the latest ticket token is applied.

use super::address::{is_complete_postal_code, Address, LookupOutcome};
use super::notice::Notice;

/// A lookup the caller must perform
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupTicket {
    pub token: u64,
    pub postal_code: String,
}

/// Side effect requested by a postal code change
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AutofillEffect {
    None,
    Lookup(LookupTicket),
}

/// A finished lookup, reported back to the controller
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupCompletion {
    pub token: u64,
    pub postal_code: String,
    pub outcome: LookupOutcome,
}

impl LookupCompletion {
    pub fn new(ticket: LookupTicket, outcome: LookupOutcome) -> Self {
        Self {
            token: ticket.token,
            postal_code: ticket.postal_code,
            outcome,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum AutofillPhase {
    #[default]
    Idle,
    LookupInFlight(LookupTicket),
}

#[derive(Debug, Clone, Default)]
pub struct AutofillController {
    /// Last token handed out. Bumped on every postal code mutation.
    latest_token: u64,
    phase: AutofillPhase,
}

impl AutofillController {
    pub fn phase(&self) -> &AutofillPhase {
        &self.phase
    }

    pub fn is_lookup_in_flight(&self) -> bool {
        matches!(self.phase, AutofillPhase::LookupInFlight(_))
    }

    /// React to a new postal code value.
    ///
    /// Incomplete codes clear `address` immediately. Complete codes leave the
    /// address untouched and return the lookup to perform.
    pub fn on_postal_code_changed(&mut self, address: &mut Address, code: &str) -> AutofillEffect {
        self.latest_token += 1;

        if !is_complete_postal_code(code) {
            address.clear();
            self.phase = AutofillPhase::Idle;
            return AutofillEffect::None;
        }

        let ticket = LookupTicket {
            token: self.latest_token,
            postal_code: code.to_string(),
        };
        tracing::debug!(token = ticket.token, postal_code = %ticket.postal_code, "lookup issued");
        self.phase = AutofillPhase::LookupInFlight(ticket.clone());
        AutofillEffect::Lookup(ticket)
    }

    /// Apply a finished lookup to `address`.
    ///
    /// Returns the notice to surface, if any. Superseded completions leave
    /// everything untouched and return `None`.
    pub fn on_lookup_completed(
        &mut self,
        address: &mut Address,
        current_code: &str,
        completion: LookupCompletion,
    ) -> Option<Notice> {
        if completion.token != self.latest_token || completion.postal_code != current_code {
            tracing::debug!(
                token = completion.token,
                latest = self.latest_token,
                postal_code = %completion.postal_code,
                "discarding stale lookup result"
            );
            return None;
        }

        self.phase = AutofillPhase::Idle;

        match completion.outcome {
            LookupOutcome::Found(found) => {
                tracing::info!(postal_code = %completion.postal_code, city = %found.city, "address filled");
                *address = found;
                None
            }
            LookupOutcome::NotFound => {
                tracing::info!(postal_code = %completion.postal_code, "postal code not found");
                address.clear();
                Some(Notice::postal_code_not_found())
            }
            LookupOutcome::TransportError(detail) => {
                tracing::warn!(postal_code = %completion.postal_code, error = %detail, "postal code lookup failed");
                address.clear();
                Some(Notice::postal_code_lookup_failed())
            }
        }
    }
}
