// chat-widget/chat-widget-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use strum_macros::Display;

/// An action offered in a window's option menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum WindowAction {
    #[strum(serialize = "Add person")]
    AddPerson,
    #[strum(serialize = "End session")]
    EndSession,
    #[strum(serialize = "Associate customer")]
    AssociateCustomer,
    #[strum(serialize = "Disassociate customer")]
    DisassociateCustomer,
}

/// The workflow panel currently shown in a window. Only one is visible at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WindowPanel {
    #[default]
    None,
    EndSession,
    SearchCustomer,
    AssociateCustomer,
    DisassociateCustomer,
}
