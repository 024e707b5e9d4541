//! Player-facing error taxonomy.
//!
//! Every operation reports its first failing check synchronously, with
//! enough detail for the client to render a specific message (which
//! resource is short, how many cooldown seconds remain). Nothing here is
//! retried by the engine; retries are a caller concern.

use crate::skills::SkillKind;
use crate::tier::Tier;
use thiserror::Error;

/// Broad classification of a [`GameError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed or out-of-range input.
    Validation,
    /// The operation is invalid given current state.
    StateConflict,
    /// An eligibility requirement is not met.
    Precondition,
    /// A referenced entity does not exist.
    NotFound,
}

/// Everything a game operation can refuse with.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    // --- validation ---
    #[error("guild name is required")]
    EmptyGuildName,
    #[error("quantity must be at least 1")]
    ZeroQuantity,

    // --- state conflicts ---
    #[error("a {activity} task is already underway")]
    TaskAlreadyActive { activity: &'static str },
    #[error("no active {activity} task")]
    NoActiveTask { activity: &'static str },
    #[error("not finished yet ({remaining_secs}s remaining)")]
    TaskNotFinished { remaining_secs: u64 },
    #[error("you are already in a guild")]
    AlreadyInGuild,
    #[error("guild name \"{name}\" is already taken")]
    GuildNameTaken { name: String },
    #[error("you are not in a guild")]
    NotInGuild,
    #[error("you are not a member of guild {id}")]
    WrongGuild { id: u64 },
    #[error("guild is already at the top class")]
    GuildAtTopClass,

    // --- preconditions ---
    #[error("requires {skill} level {required}")]
    SkillTooLow { skill: SkillKind, required: u32 },
    #[error("not enough {item}: need {required}, have {held}")]
    InsufficientMaterials {
        item: String,
        required: u32,
        held: u32,
    },
    #[error("rank {required} required for this adventure tier")]
    RankTooLow { required: Tier },
    #[error("the adventure board is refreshing, wait {remaining_secs}s")]
    AdventureCooldown { remaining_secs: u64 },
    #[error("not enough {resource}: need {required}, have {held}")]
    InsufficientSupplies {
        resource: &'static str,
        required: u32,
        held: u32,
    },
    #[error("only the guild leader can promote the guild")]
    NotGuildLeader,
    #[error("all members must be at least rank {required} for class {class}")]
    MemberRanksTooLow { required: Tier, class: u32 },
    #[error("guild needs at least {required} total completed adventures (currently {total})")]
    GuildAdventuresShort { required: u32, total: u32 },
    #[error("not enough stock: requested {requested}, available {available}")]
    InsufficientStock { requested: u32, available: u32 },
    #[error("not enough gold: need {required}, have {held}")]
    NotEnoughGold { required: u64, held: u64 },
    #[error("not enough {item}: requested {requested}, have {held}")]
    NotEnoughItems {
        item: String,
        requested: u32,
        held: u32,
    },

    // --- not found ---
    #[error("recipe {id} not found")]
    RecipeNotFound { id: u64 },
    #[error("adventure template {id} not found")]
    TemplateNotFound { id: u64 },
    #[error("shop {id} not found")]
    ShopNotFound { id: u64 },
    #[error("item {id} not found")]
    ItemNotFound { id: u64 },
    #[error("guild {id} not found")]
    GuildNotFound { id: u64 },
}

impl GameError {
    /// Which branch of the taxonomy this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        use GameError::*;
        match self {
            EmptyGuildName | ZeroQuantity => ErrorKind::Validation,
            TaskAlreadyActive { .. }
            | NoActiveTask { .. }
            | TaskNotFinished { .. }
            | AlreadyInGuild
            | GuildNameTaken { .. }
            | NotInGuild
            | WrongGuild { .. }
            | GuildAtTopClass => ErrorKind::StateConflict,
            SkillTooLow { .. }
            | InsufficientMaterials { .. }
            | RankTooLow { .. }
            | AdventureCooldown { .. }
            | InsufficientSupplies { .. }
            | NotGuildLeader
            | MemberRanksTooLow { .. }
            | GuildAdventuresShort { .. }
            | InsufficientStock { .. }
            | NotEnoughGold { .. }
            | NotEnoughItems { .. } => ErrorKind::Precondition,
            RecipeNotFound { .. }
            | TemplateNotFound { .. }
            | ShopNotFound { .. }
            | ItemNotFound { .. }
            | GuildNotFound { .. } => ErrorKind::NotFound,
        }
    }
}

// Reducers report errors as strings; the message already carries the detail.
impl From<GameError> for String {
    fn from(err: GameError) -> Self {
        err.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_cover_taxonomy() {
        assert_eq!(GameError::EmptyGuildName.kind(), ErrorKind::Validation);
        assert_eq!(
            GameError::TaskAlreadyActive { activity: "crafting" }.kind(),
            ErrorKind::StateConflict
        );
        assert_eq!(
            GameError::RankTooLow { required: Tier::S }.kind(),
            ErrorKind::Precondition
        );
        assert_eq!(
            GameError::RecipeNotFound { id: 7 }.kind(),
            ErrorKind::NotFound
        );
    }

    #[test]
    fn messages_carry_detail() {
        let err = GameError::AdventureCooldown { remaining_secs: 42 };
        assert!(err.to_string().contains("42s"));

        let err = GameError::InsufficientSupplies {
            resource: "water",
            required: 10,
            held: 3,
        };
        let msg = err.to_string();
        assert!(msg.contains("water") && msg.contains("10") && msg.contains('3'));
    }
}
