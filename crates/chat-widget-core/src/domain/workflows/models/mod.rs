// chat-widget/chat-widget-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use customer_workflow::{
    normalize_tax_id, CustomerRecord, CustomerWorkflow, CustomerWorkflowState,
    CUSTOMER_NOT_FOUND_ERROR, INVALID_TAX_ID_ERROR, MISSING_ASSOCIATION_IDS_ERROR,
};
pub use friends_list_selection::FriendsListSelection;
pub use window_action::{WindowAction, WindowPanel};

mod customer_workflow;
mod friends_list_selection;
mod window_action;
