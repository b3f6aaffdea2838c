//! Race messages
//!
//! A race belongs to a meeting and has an advertised start time. Its
//! `status` is not stored anywhere: it is derived every time a race is read.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::timestamp::Timestamp;
use crate::Id;

/// Whether a race is still open for betting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RaceStatus {
    Open,
    Closed,
}

impl RaceStatus {
    /// `Open` while `now` is strictly before `advertised_start`, `Closed` from then on
    pub fn at(advertised_start: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        if now < advertised_start {
            Self::Open
        } else {
            Self::Closed
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "OPEN",
            Self::Closed => "CLOSED",
        }
    }
}

impl std::fmt::Display for RaceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Race {
    pub id: Id,
    pub meeting_id: Id,
    pub name: String,
    pub number: i64,
    pub visible: bool,
    pub advertised_start_time: Timestamp,
    pub status: RaceStatus,
}

/// Restrictions for a race listing
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ListRacesRequestFilter {
    /// Only races of these meetings; empty means every meeting
    pub meeting_ids: Vec<Id>,
    /// Only races flagged visible
    pub visible_races: bool,
    /// `ASC` or `DESC` by advertised start time, case-insensitive
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_by: Option<String>,
}

impl ListRacesRequestFilter {
    /// The ordering directive as supplied, if it is a non-empty string
    pub fn order_directive(&self) -> Option<&str> {
        self.order_by.as_deref().filter(|s| !s.is_empty())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GetRaceByIdRequestFilter {
    pub id: Id,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListRacesRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter: Option<ListRacesRequestFilter>,
}

impl ListRacesRequest {
    pub fn with_filter(filter: ListRacesRequestFilter) -> Self {
        Self {
            filter: Some(filter),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetRaceByIdRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter: Option<GetRaceByIdRequestFilter>,
}

impl GetRaceByIdRequest {
    pub fn new(id: Id) -> Self {
        Self {
            filter: Some(GetRaceByIdRequestFilter { id }),
        }
    }
}

/// Envelope for every race operation, including get-by-id
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListRacesResponse {
    #[serde(default)]
    pub races: Vec<Race>,
}
