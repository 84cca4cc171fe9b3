// chat-widget/chat-widget-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use crate::domain::shared::models::{DebtorId, ParticipantId};

pub const INVALID_TAX_ID_ERROR: &str = "The CPF/CNPJ must consist of 11 or 14 digits.";
pub const CUSTOMER_NOT_FOUND_ERROR: &str = "Customer not found!";
pub const MISSING_ASSOCIATION_IDS_ERROR: &str = "The customer cannot be associated without ids.";

const VALID_TAX_ID_LENGTHS: [usize; 2] = [11, 14];

/// A customer as returned by a search.
#[derive(Debug, Clone, PartialEq)]
pub struct CustomerRecord {
    pub debtor_id: DebtorId,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum CustomerWorkflowState {
    #[default]
    Idle,
    Searching,
    /// A customer was found and can be associated with the conversation.
    AssociatePending { customer: CustomerRecord },
    Associating { customer: CustomerRecord },
    Associated { customer: CustomerRecord },
    Disassociating { customer: CustomerRecord },
}

/// The search/associate/disassociate state machine of a client conversation.
///
/// Transitions started by the user return the request to send to the adapter (or `None` if
/// validation failed, in which case `error` describes why). Acknowledgments are applied with the
/// `handle_*` methods.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CustomerWorkflow {
    pub search_input: String,
    pub error: Option<String>,
    state: CustomerWorkflowState,
}

impl CustomerWorkflow {
    pub fn state(&self) -> &CustomerWorkflowState {
        &self.state
    }

    pub fn customer(&self) -> Option<&CustomerRecord> {
        match &self.state {
            CustomerWorkflowState::Idle | CustomerWorkflowState::Searching => None,
            CustomerWorkflowState::AssociatePending { customer }
            | CustomerWorkflowState::Associating { customer }
            | CustomerWorkflowState::Associated { customer }
            | CustomerWorkflowState::Disassociating { customer } => Some(customer),
        }
    }

    pub fn is_associated(&self) -> bool {
        matches!(
            self.state,
            CustomerWorkflowState::Associated { .. } | CustomerWorkflowState::Disassociating { .. }
        )
    }

    pub fn is_loading(&self) -> bool {
        matches!(
            self.state,
            CustomerWorkflowState::Searching
                | CustomerWorkflowState::Associating { .. }
                | CustomerWorkflowState::Disassociating { .. }
        )
    }

    /// Validates the search input and enters `Searching`. Returns the normalized tax id to
    /// search for.
    pub fn begin_search(&mut self) -> Option<String> {
        if self.search_input.trim().is_empty() {
            return None;
        }

        self.error = None;

        let Some(tax_id) = normalize_tax_id(&self.search_input) else {
            self.error = Some(INVALID_TAX_ID_ERROR.to_string());
            return None;
        };

        self.state = CustomerWorkflowState::Searching;
        Some(tax_id)
    }

    /// Applies a search result. Results arriving while no search is running, including after the
    /// search was closed, are ignored.
    pub fn handle_search_result(&mut self, customer: Option<CustomerRecord>) -> bool {
        if self.state != CustomerWorkflowState::Searching {
            return false;
        }

        match customer.filter(|c| !c.debtor_id.is_blank()) {
            Some(customer) => {
                self.error = None;
                self.state = CustomerWorkflowState::AssociatePending { customer }
            }
            None => {
                self.error = Some(CUSTOMER_NOT_FOUND_ERROR.to_string());
                self.state = CustomerWorkflowState::Idle
            }
        }
        true
    }

    /// Abandons a search and clears its input.
    pub fn cancel_search(&mut self) {
        self.search_input.clear();
        self.error = None;
        if self.state == CustomerWorkflowState::Searching {
            self.state = CustomerWorkflowState::Idle;
        }
    }

    /// Enters `Associating`. Returns the debtor id to associate the conversation with.
    pub fn begin_associate(&mut self, participant_id: &ParticipantId) -> Option<DebtorId> {
        let customer = match &self.state {
            CustomerWorkflowState::AssociatePending { customer }
                if !customer.debtor_id.is_blank() && !participant_id.is_blank() =>
            {
                customer.clone()
            }
            _ => {
                self.error = Some(MISSING_ASSOCIATION_IDS_ERROR.to_string());
                return None;
            }
        };

        let debtor_id = customer.debtor_id.clone();
        self.error = None;
        self.state = CustomerWorkflowState::Associating { customer };
        Some(debtor_id)
    }

    /// Applies an association confirmation. Only a found customer can be associated, so
    /// confirmations arriving in any other state are ignored.
    pub fn handle_associated(&mut self) -> bool {
        let customer = match &self.state {
            CustomerWorkflowState::AssociatePending { customer }
            | CustomerWorkflowState::Associating { customer } => customer.clone(),
            _ => return false,
        };
        self.state = CustomerWorkflowState::Associated { customer };
        true
    }

    /// Stops waiting for an association acknowledgment. The found customer is kept.
    pub fn cancel_associate(&mut self) {
        if let CustomerWorkflowState::Associating { customer } = &self.state {
            self.state = CustomerWorkflowState::AssociatePending {
                customer: customer.clone(),
            };
        }
    }

    pub fn begin_disassociate(&mut self, participant_id: &ParticipantId) -> bool {
        let customer = match &self.state {
            CustomerWorkflowState::Associated { customer }
                if !customer.debtor_id.is_blank() && !participant_id.is_blank() =>
            {
                customer.clone()
            }
            _ => {
                self.error = Some(MISSING_ASSOCIATION_IDS_ERROR.to_string());
                return false;
            }
        };

        self.error = None;
        self.state = CustomerWorkflowState::Disassociating { customer };
        true
    }

    /// Resets the workflow to its pre-search state.
    pub fn handle_disassociated(&mut self) -> bool {
        if !self.is_associated() {
            return false;
        }
        *self = Self::default();
        true
    }

    pub fn cancel_disassociate(&mut self) {
        if let CustomerWorkflowState::Disassociating { customer } = &self.state {
            self.state = CustomerWorkflowState::Associated {
                customer: customer.clone(),
            };
        }
    }
}

/// Strips the usual CPF/CNPJ punctuation and returns the digits if they form an 11 or 14 digit
/// identifier.
pub fn normalize_tax_id(input: &str) -> Option<String> {
    let normalized = input
        .chars()
        .filter(|c| !matches!(c, '.' | '-' | '/') && !c.is_whitespace())
        .collect::<String>();

    if !normalized.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }

    VALID_TAX_ID_LENGTHS
        .contains(&normalized.len())
        .then_some(normalized)
}
