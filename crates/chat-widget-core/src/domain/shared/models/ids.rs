// chat-widget/chat-widget-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use chat_widget_utils::id_string;

id_string!(
    /// Identifies a chattable participant. The local user's id lives in the same namespace,
    /// since messages carry sender and recipient as participant ids.
    ParticipantId
);

id_string!(
    /// Identifies a debtor (customer record) that a client conversation can be associated with.
    DebtorId
);
