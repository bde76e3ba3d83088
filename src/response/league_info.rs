use serde::{Deserialize, Deserializer, Serialize};

/// Decodes a `null` field the same as a missing one.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccountLeagueInfo {
    #[serde(deserialize_with = "null_as_default")]
    pub response: LeagueInfoResponse,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LeagueInfoResponse {
    #[serde(deserialize_with = "null_as_default")]
    pub character_league_infos: Vec<CharacterLeagueInfo>,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CharacterLeagueInfo {
    #[serde(deserialize_with = "null_as_default")]
    pub character_id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub is_played: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub character_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub character_alpha: String,
    #[serde(deserialize_with = "null_as_default")]
    pub character_tool_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub character_sort: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub league_info: LeagueInfo,
}

/// `league_point` is `-1` when the character has no ranked data this season.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LeagueInfo {
    #[serde(deserialize_with = "null_as_default")]
    pub league_point: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub league_rank: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub master_league: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub master_rating: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub master_rating_ranking: i64,
}
