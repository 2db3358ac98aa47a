use crate::db::{Message, MessageKind};

/// Read-time visibility rule: broadcast-class messages (`message`,
/// `status`) are visible to everyone; a `private_message` only to its
/// two parties. Applied before any `limit` truncation.
pub fn visible_to(message: &Message, viewer: &str) -> bool {
    matches!(message.kind, MessageKind::Message | MessageKind::Status)
        || message.sender == viewer
        || message.recipient == viewer
}
