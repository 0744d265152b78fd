//! Reaction polarity and the per-(user, target) toggle state machine
//!
//! ```text
//!   NONE     --P-->  P-state    added
//!   P-state  --P-->  NONE       removed
//!   other    --P-->  P-state    changed
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Sentiment of a reaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Polarity {
    Like,
    Dislike,
}

impl Polarity {
    /// Stored representation (`reactions.polarity`)
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Like => "like",
            Self::Dislike => "dislike",
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Like => Self::Dislike,
            Self::Dislike => Self::Like,
        }
    }
}

impl fmt::Display for Polarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned for anything other than `like` / `dislike`
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized polarity '{0}', expected 'like' or 'dislike'")]
pub struct PolarityParseError(pub String);

impl FromStr for Polarity {
    type Err = PolarityParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "like" => Ok(Self::Like),
            "dislike" => Ok(Self::Dislike),
            other => Err(PolarityParseError(other.to_string())),
        }
    }
}

/// State of a single (user, target) pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ReactionState {
    #[default]
    None,
    Liked,
    Disliked,
}

impl ReactionState {
    /// The reaction row that backs this state, if any
    pub const fn polarity(self) -> Option<Polarity> {
        match self {
            Self::None => None,
            Self::Liked => Some(Polarity::Like),
            Self::Disliked => Some(Polarity::Dislike),
        }
    }

    /// Apply a toggle request
    pub fn toggle(self, requested: Polarity) -> Transition {
        let (to, action, write) = match self.polarity() {
            None => (
                Self::from(Some(requested)),
                ToggleAction::Added,
                ReactionWrite::Insert(requested),
            ),
            Some(current) if current == requested => {
                (Self::None, ToggleAction::Removed, ReactionWrite::Delete)
            }
            Some(_) => (
                Self::from(Some(requested)),
                ToggleAction::Changed,
                ReactionWrite::Update(requested),
            ),
        };

        Transition {
            from: self,
            to,
            action,
            write,
        }
    }
}

impl From<Option<Polarity>> for ReactionState {
    fn from(polarity: Option<Polarity>) -> Self {
        match polarity {
            None => Self::None,
            Some(Polarity::Like) => Self::Liked,
            Some(Polarity::Dislike) => Self::Disliked,
        }
    }
}

/// What happened to the reaction set, reported back to the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToggleAction {
    Added,
    Removed,
    Changed,
}

impl ToggleAction {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Added => "added",
            Self::Removed => "removed",
            Self::Changed => "changed",
        }
    }
}

impl fmt::Display for ToggleAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Store mutation required to realise a transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReactionWrite {
    Insert(Polarity),
    Update(Polarity),
    Delete,
}

/// Outcome of [`ReactionState::toggle`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: ReactionState,
    pub to: ReactionState,
    pub action: ToggleAction,
    pub write: ReactionWrite,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_polarity_parse() {
        assert_eq!("like".parse::<Polarity>(), Ok(Polarity::Like));
        assert_eq!("dislike".parse::<Polarity>(), Ok(Polarity::Dislike));
        assert!("LIKE".parse::<Polarity>().is_err());
        assert!("".parse::<Polarity>().is_err());
        assert_eq!(Polarity::Like.opposite(), Polarity::Dislike);
    }

    #[test]
    fn test_transition_table() {
        use Polarity::{Dislike, Like};
        use ReactionState::{Disliked, Liked, None};

        let cases = [
            (None, Like, Liked, ToggleAction::Added, ReactionWrite::Insert(Like)),
            (None, Dislike, Disliked, ToggleAction::Added, ReactionWrite::Insert(Dislike)),
            (Liked, Like, None, ToggleAction::Removed, ReactionWrite::Delete),
            (Disliked, Dislike, None, ToggleAction::Removed, ReactionWrite::Delete),
            (Liked, Dislike, Disliked, ToggleAction::Changed, ReactionWrite::Update(Dislike)),
            (Disliked, Like, Liked, ToggleAction::Changed, ReactionWrite::Update(Like)),
        ];

        for (from, requested, to, action, write) in cases {
            let t = from.toggle(requested);
            assert_eq!(t.from, from);
            assert_eq!(t.to, to, "{from:?} --{requested}-->");
            assert_eq!(t.action, action);
            assert_eq!(t.write, write);
        }
    }

    #[test]
    fn test_double_toggle_restores_state() {
        for start in [ReactionState::None, ReactionState::Liked, ReactionState::Disliked] {
            for p in [Polarity::Like, Polarity::Dislike] {
                let first = start.toggle(p);
                let second = first.to.toggle(p);
                if start.polarity() == Some(p) {
                    // removed, then added back
                    assert_eq!(second.to, start);
                } else {
                    assert_eq!(second.to, ReactionState::None);
                    assert_eq!(second.action, ToggleAction::Removed);
                }
            }
        }
    }

    #[test]
    fn test_any_sequence_stays_in_named_states() {
        let mut state = ReactionState::None;
        let script = [
            Polarity::Like,
            Polarity::Like,
            Polarity::Dislike,
            Polarity::Like,
            Polarity::Like,
            Polarity::Dislike,
        ];
        for p in script {
            state = state.toggle(p).to;
        }
        // like,like -> None; dislike -> Disliked; like -> Liked; like -> None; dislike -> Disliked
        assert_eq!(state, ReactionState::Disliked);
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(serde_json::to_string(&ToggleAction::Changed).unwrap(), "\"changed\"");
        assert_eq!(serde_json::to_string(&Polarity::Dislike).unwrap(), "\"dislike\"");
    }
}
