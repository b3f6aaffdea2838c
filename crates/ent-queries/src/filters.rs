//! Filter compilation
//!
//! Translates request filters into SQL clauses appended to a catalog query.
//!
//! The race listing keeps the clause shapes existing clients were built
//! against, quirks included:
//!
//! - the visibility and ordering fragments carry a `;` terminator;
//! - every fragment, `order by` included, is joined with ` AND `;
//! - when an ordering directive is present (recognised or not) the fragments
//!   are appended without a `WHERE` keyword.
//!
//! An ordering directive on its own therefore yields valid SQL, while one
//! combined with a predicate does not and fails at execution time. The tests
//! below pin these shapes; change them together with the clients.

use ent_models::{GetRaceByIdRequestFilter, ListEventsRequestFilter, ListRacesRequestFilter};

use crate::builder::{in_clause, CompiledQuery};
use crate::sorts::OrderDirection;

/// Column the race listing restricts on
pub const RACE_KEY_COLUMN: &str = "meeting_id";
/// Column the event listing restricts on
pub const EVENT_KEY_COLUMN: &str = "id";

const VISIBLE_RACES_CLAUSE: &str = " visible = 1; ";
const VISIBLE_EVENTS_CLAUSE: &str = "visible = 1";

/// Compile a race listing filter onto `query`
pub fn apply_race_filter(query: &str, filter: Option<&ListRacesRequestFilter>) -> CompiledQuery {
    let filter = match filter {
        Some(filter) => filter,
        None => return CompiledQuery::bare(query),
    };

    let mut clauses = Vec::new();
    let mut args = Vec::new();

    if !filter.meeting_ids.is_empty() {
        clauses.push(in_clause(RACE_KEY_COLUMN, filter.meeting_ids.len()));
        args.extend(filter.meeting_ids.iter().copied());
    }

    if filter.visible_races {
        clauses.push(VISIBLE_RACES_CLAUSE.to_string());
    }

    let directive = filter.order_directive();
    if let Some(direction) = directive.and_then(OrderDirection::parse) {
        clauses.push(direction.start_time_clause());
    }

    let mut sql = query.to_string();
    if !clauses.is_empty() {
        if directive.is_none() {
            sql.push_str(" WHERE ");
        }
        sql.push_str(&clauses.join(" AND "));
    }

    CompiledQuery { sql, args }
}

/// Compile a race get-by-id filter onto `query`
///
/// The id is written into the SQL text rather than bound. Without a filter
/// the query is returned unchanged and selects every race.
pub fn apply_race_by_id_filter(
    query: &str,
    filter: Option<&GetRaceByIdRequestFilter>,
) -> CompiledQuery {
    match filter {
        Some(filter) => CompiledQuery::bare(format!("{} where id = {}", query, filter.id)),
        None => CompiledQuery::bare(query),
    }
}

/// Compile an event listing filter onto `query`
pub fn apply_event_filter(query: &str, filter: Option<&ListEventsRequestFilter>) -> CompiledQuery {
    let filter = match filter {
        Some(filter) => filter,
        None => return CompiledQuery::bare(query),
    };

    let mut clauses = Vec::new();
    let mut args = Vec::new();

    if !filter.event_ids.is_empty() {
        clauses.push(in_clause(EVENT_KEY_COLUMN, filter.event_ids.len()));
        args.extend(filter.event_ids.iter().copied());
    }

    if filter.visible_events {
        clauses.push(VISIBLE_EVENTS_CLAUSE.to_string());
    }

    let mut sql = query.to_string();
    if !clauses.is_empty() {
        sql.push_str(" WHERE ");
        sql.push_str(&clauses.join(" AND "));
    }

    CompiledQuery { sql, args }
}
