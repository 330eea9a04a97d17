//! Nickname roster and the active-selection state cell.

use serde::{Deserialize, Serialize};

/// Icon references used across the greeting screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Glyph {
    Crown,
    Flower,
    Sparkles,
    Heart,
    Music,
    Sun,
    Moon,
}

impl Glyph {
    /// Returns the symbol drawn for this glyph.
    pub fn symbol(&self) -> &'static str {
        match self {
            Glyph::Crown => "\u{1F451}",
            Glyph::Flower => "\u{273F}",
            Glyph::Sparkles => "\u{2728}",
            Glyph::Heart => "\u{2665}",
            Glyph::Music => "\u{266B}",
            Glyph::Sun => "\u{2600}",
            Glyph::Moon => "\u{263E}",
        }
    }

    /// Returns the CSS modifier class for this glyph.
    pub fn css_class(&self) -> &'static str {
        match self {
            Glyph::Crown => "glyph-crown",
            Glyph::Flower => "glyph-flower",
            Glyph::Sparkles => "glyph-sparkles",
            Glyph::Heart => "glyph-heart",
            Glyph::Music => "glyph-music",
            Glyph::Sun => "glyph-sun",
            Glyph::Moon => "glyph-moon",
        }
    }
}

/// A nickname the greeting can address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Nickname {
    pub key: String,
    pub label: String,
    pub icon: Glyph,
}

impl Nickname {
    pub fn new(key: impl Into<String>, label: impl Into<String>, icon: Glyph) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            icon,
        }
    }
}

/// Position of a nickname in the roster.
///
/// The roster always has exactly three entries, so every slot is valid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum NicknameSlot {
    #[default]
    First,
    Second,
    Third,
}

impl NicknameSlot {
    /// All slots in display order.
    pub fn all() -> [NicknameSlot; 3] {
        [NicknameSlot::First, NicknameSlot::Second, NicknameSlot::Third]
    }

    fn index(self) -> usize {
        match self {
            NicknameSlot::First => 0,
            NicknameSlot::Second => 1,
            NicknameSlot::Third => 2,
        }
    }
}

/// The fixed, ordered list of three nicknames.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NicknameRoster([Nickname; 3]);

impl NicknameRoster {
    pub fn new(first: Nickname, second: Nickname, third: Nickname) -> Self {
        Self([first, second, third])
    }

    /// Returns the nickname in the given slot.
    pub fn get(&self, slot: NicknameSlot) -> &Nickname {
        &self.0[slot.index()]
    }

    /// Iterates slots and nicknames in display order.
    pub fn iter(&self) -> impl Iterator<Item = (NicknameSlot, &Nickname)> {
        NicknameSlot::all().into_iter().zip(self.0.iter())
    }
}

impl Default for NicknameRoster {
    fn default() -> Self {
        Self::new(
            Nickname::new("salwa", "Salwa", Glyph::Crown),
            Nickname::new("doctora", "Doctora Slimen", Glyph::Flower),
            Nickname::new("doudty", "Doudty", Glyph::Sparkles),
        )
    }
}

/// State cell holding the active nickname.
///
/// Every piece of text that mentions the addressee is derived from
/// [`SelectionState::active`]; nothing keeps its own copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionState {
    roster: NicknameRoster,
    active: NicknameSlot,
}

impl SelectionState {
    /// Creates a selection with the first roster entry active.
    pub fn new(roster: NicknameRoster) -> Self {
        Self {
            roster,
            active: NicknameSlot::First,
        }
    }

    /// Makes `slot` the active nickname.
    pub fn select(&mut self, slot: NicknameSlot) {
        if self.active != slot {
            tracing::debug!(nickname = %self.roster.get(slot).key, "Nickname selected");
        }
        self.active = slot;
    }

    pub fn active_slot(&self) -> NicknameSlot {
        self.active
    }

    pub fn active(&self) -> &Nickname {
        self.roster.get(self.active)
    }

    pub fn roster(&self) -> &NicknameRoster {
        &self.roster
    }
}

impl Default for SelectionState {
    fn default() -> Self {
        Self::new(NicknameRoster::default())
    }
}
