use serde::{Deserialize, Serialize};

/// Label used when a season index falls outside the four real seasons.
pub const INVALID_SEASON_NAME: &str = "End times";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Season {
    #[default]
    Spring,
    Summer,
    Autumn,
    Winter,
}

string_enum!(Season {
    Spring => "spring",
    Summer => "summer",
    Autumn => "autumn",
    Winter => "winter",
});

impl Season {
    /// All seasons in calendar order.
    pub const ALL: [Season; 4] = [Season::Spring, Season::Summer, Season::Autumn, Season::Winter];

    /// Position within the year (Spring = 0).
    pub fn index(self) -> i64 {
        match self {
            Season::Spring => 0,
            Season::Summer => 1,
            Season::Autumn => 2,
            Season::Winter => 3,
        }
    }

    /// Season at `index` wrapped into the year, so negative and large indices
    /// still land on a real season.
    pub fn from_index_wrapping(index: i64) -> Season {
        Season::ALL[index.rem_euclid(4) as usize]
    }

    pub fn next(self) -> Season {
        Season::from_index_wrapping(self.index() + 1)
    }

    /// Display name.
    pub fn name(self) -> &'static str {
        match self {
            Season::Spring => "Spring",
            Season::Summer => "Summer",
            Season::Autumn => "Autumn",
            Season::Winter => "Winter",
        }
    }

    /// Display name for a raw season index. Anything outside 0..4 gets
    /// [`INVALID_SEASON_NAME`].
    pub fn name_of_index(index: i64) -> &'static str {
        match index {
            0..=3 => Season::ALL[index as usize].name(),
            _ => INVALID_SEASON_NAME,
        }
    }
}
