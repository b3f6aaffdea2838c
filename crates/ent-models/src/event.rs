//! Sporting event messages

use serde::{Deserialize, Serialize};

use crate::timestamp::Timestamp;
use crate::Id;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: Id,
    pub name: String,
    pub team_one: String,
    pub team_two: String,
    pub visible: bool,
    pub advertised_start_time: Timestamp,
}

/// Restrictions for an event listing
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ListEventsRequestFilter {
    /// Only these events; empty means every event
    pub event_ids: Vec<Id>,
    /// Only events flagged visible
    pub visible_events: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListEventsRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter: Option<ListEventsRequestFilter>,
}

impl ListEventsRequest {
    pub fn with_filter(filter: ListEventsRequestFilter) -> Self {
        Self {
            filter: Some(filter),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListEventsResponse {
    #[serde(default)]
    pub events: Vec<Event>,
}
