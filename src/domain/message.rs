use super::participant::MessageSide;

/// Glyph stored as the body of a "like" sticker message.
pub const LIKE_GLYPH: &str = "👍";

/// The fixed emoji vocabulary the reaction editor offers.
pub const REACTION_EMOJIS: [&str; 5] = ["😍", "OK", "❤️", "👏", "👍"];

/// Reactor name applied by the one-key ❤️ shortcut.
pub const QUICK_REACT_NAME: &str = "Người dùng";

/// What a message body holds and how it renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MessageKind {
    #[default]
    Text,
    /// Body is an inline image reference (data URI).
    Image,
    /// Body is the fixed like glyph, rendered oversized.
    Like,
}

/// The reactor names attached to one emoji on one message.
///
/// A message holds at most one group per emoji; a group is removed rather
/// than kept with an empty name list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReactionGroup {
    pub emoji: String,
    pub names: Vec<String>,
}

impl ReactionGroup {
    pub fn new(emoji: impl Into<String>, names: Vec<String>) -> Self {
        Self {
            emoji: emoji.into(),
            names,
        }
    }
}

/// One entry in the mockup conversation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    /// Unique id derived from the creation timestamp.
    pub id: String,
    /// Body text, image data reference, or the like glyph, per `kind`.
    pub text: String,
    /// References a participant id; rendering falls back to the first
    /// participant when it no longer resolves.
    pub sender_id: String,
    /// Display-formatted wall-clock time; not used for ordering.
    pub timestamp: String,
    pub side: MessageSide,
    pub reactions: Vec<ReactionGroup>,
    pub kind: MessageKind,
}

impl Message {
    /// Returns the reaction group for `emoji`, if one exists.
    pub fn reaction(&self, emoji: &str) -> Option<&ReactionGroup> {
        self.reactions.iter().find(|group| group.emoji == emoji)
    }
}

/// The two-message conversation every editing session starts from.
pub fn seed_messages() -> Vec<Message> {
    vec![
        Message {
            id: "1".to_owned(),
            text: "Tôi mọi người hay bận. Nên team sẽ chốt đi ăn vào trưa thứ 6 nhé".to_owned(),
            sender_id: "user-1".to_owned(),
            timestamp: "10:00 AM".to_owned(),
            side: MessageSide::Left,
            reactions: vec![
                ReactionGroup::new(
                    "😍",
                    vec![
                        "Thảo Bùi".to_owned(),
                        "Lê Khanh".to_owned(),
                        "Kim Tuyến".to_owned(),
                    ],
                ),
                ReactionGroup::new("OK", vec!["PHAN XUAN".to_owned()]),
                ReactionGroup::new("❤️", vec!["PHAN XUAN".to_owned(), "bách".to_owned()]),
                ReactionGroup::new("👏", vec!["Thanh Huyền".to_owned()]),
            ],
            kind: MessageKind::Text,
        },
        Message {
            id: "2".to_owned(),
            text: "vâng ạ".to_owned(),
            sender_id: "user-2".to_owned(),
            timestamp: "10:01 AM".to_owned(),
            side: MessageSide::Right,
            reactions: vec![],
            kind: MessageKind::Text,
        },
    ]
}
