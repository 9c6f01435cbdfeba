use serde::{Deserialize, Serialize};

/// Which visual column a message renders in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MessageSide {
    #[default]
    Left,
    Right,
}

impl MessageSide {
    /// Index of the participant that sends from this side (0 = left, 1 = right).
    pub fn participant_index(self) -> usize {
        match self {
            MessageSide::Left => 0,
            MessageSide::Right => 1,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            MessageSide::Left => MessageSide::Right,
            MessageSide::Right => MessageSide::Left,
        }
    }

    pub fn as_label(self) -> &'static str {
        match self {
            MessageSide::Left => "left",
            MessageSide::Right => "right",
        }
    }
}

/// One of the two identities that can send messages in the mockup.
///
/// The pair is ordered: index 0 renders on the left, index 1 on the right.
/// Ids are stable for the process lifetime; only name, avatar, and the
/// online flag are editable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Participant {
    pub id: String,
    pub name: String,
    /// Image reference: a URL or an inline `data:` URI.
    pub avatar: String,
    /// Display-only presence marker; carries no behavior.
    pub is_online: bool,
}

/// The hardcoded participant pair used before any saved configuration exists.
pub fn default_participants() -> [Participant; 2] {
    [
        Participant {
            id: "user-1".to_owned(),
            name: "Phương QL".to_owned(),
            avatar: "https://picsum.photos/seed/user1/200".to_owned(),
            is_online: true,
        },
        Participant {
            id: "user-2".to_owned(),
            name: "PHAN XUAN".to_owned(),
            avatar: "https://picsum.photos/seed/user2/200".to_owned(),
            is_online: true,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sides_map_to_participant_indices() {
        assert_eq!(MessageSide::Left.participant_index(), 0);
        assert_eq!(MessageSide::Right.participant_index(), 1);
    }

    #[test]
    fn toggled_flips_the_side() {
        assert_eq!(MessageSide::Left.toggled(), MessageSide::Right);
        assert_eq!(MessageSide::Right.toggled(), MessageSide::Left);
    }

    #[test]
    fn default_pair_has_stable_ids() {
        let [first, second] = default_participants();

        assert_eq!(first.id, "user-1");
        assert_eq!(second.id, "user-2");
    }

    #[test]
    fn participant_serializes_with_camel_case_online_flag() {
        let [first, _] = default_participants();

        let json = serde_json::to_string(&first).expect("participant must serialize");

        assert!(json.contains("\"isOnline\":true"));
        assert!(!json.contains("is_online"));
    }

    #[test]
    fn participant_round_trips_through_json() {
        let pair = default_participants();

        let json = serde_json::to_string(&pair).expect("pair must serialize");
        let restored: Vec<Participant> = serde_json::from_str(&json).expect("pair must parse");

        assert_eq!(restored, pair.to_vec());
    }
}
