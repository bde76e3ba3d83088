use std::fmt;

use serde::Serialize;

use crate::response::league_info::AccountLeagueInfo;

/// Below the `-1` "no data" sentinel, so any played character beats it.
pub const LP_BASELINE: i64 = -2;

/// League points above this mean the character has reached Master rank.
pub const MASTER_LP_THRESHOLD: i64 = 25000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub highest_lp_character: String,
    pub highest_lp: i64,
    pub highest_mr_character: String,
    pub highest_mr: i64,
}

impl Default for Summary {
    fn default() -> Self {
        Self {
            highest_lp_character: String::new(),
            highest_lp: LP_BASELINE,
            highest_mr_character: String::new(),
            highest_mr: 0,
        }
    }
}

impl Summary {
    pub fn is_master(&self) -> bool {
        self.highest_lp > MASTER_LP_THRESHOLD
    }
}

/// Picks the played character with the most league points and, across every
/// character whether played or not, the one with the highest master rating.
/// Ties keep the first character in response order.
pub fn analyze(info: &AccountLeagueInfo) -> Summary {
    let mut summary = Summary::default();

    for character in &info.response.character_league_infos {
        let league = &character.league_info;

        if character.is_played && league.league_point > summary.highest_lp {
            summary.highest_lp = league.league_point;
            summary.highest_lp_character = character.character_name.clone();
        }
        if league.master_rating > summary.highest_mr {
            summary.highest_mr = league.master_rating;
            summary.highest_mr_character = character.character_name.clone();
        }
    }

    summary
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Highest character is {} with LP of {}",
            self.highest_lp_character, self.highest_lp
        )?;

        if self.is_master() {
            write!(f, "\nMaster character detected. ")?;
            if self.highest_mr > 0 {
                write!(
                    f,
                    "Highest MR rated character this season is {}, with MR of {}",
                    self.highest_mr_character, self.highest_mr
                )?;
            } else {
                write!(
                    f,
                    "However, they have not played any games on their Master Ranked characters this season."
                )?;
            }
        }
        Ok(())
    }
}
