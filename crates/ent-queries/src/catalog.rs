//! Query Catalog
//!
//! Base statements selecting the fixed column set of each entity, without any
//! `WHERE` clause. Column order here is the order the row scanners decode.
//! Each statement ends in whitespace so appended clause fragments never fuse
//! with the table name.

/// Entity-type key into the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryKey {
    RacesList,
    EventsList,
}

const RACES_LIST: &str = r#"
    SELECT
        id,
        meeting_id,
        name,
        number,
        visible,
        advertised_start_time
    FROM races
    "#;

const EVENTS_LIST: &str = r#"
    SELECT
        id,
        name,
        team_one,
        team_two,
        visible,
        advertised_start_time
    FROM events
    "#;

/// Base SQL for an entity type
pub fn base_query(key: QueryKey) -> &'static str {
    match key {
        QueryKey::RacesList => RACES_LIST,
        QueryKey::EventsList => EVENTS_LIST,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_queries_have_no_where_clause() {
        for key in [QueryKey::RacesList, QueryKey::EventsList] {
            let sql = base_query(key).to_lowercase();
            assert!(sql.contains("select"));
            assert!(!sql.contains("where"));
            assert!(base_query(key).ends_with(char::is_whitespace));
        }
    }

    #[test]
    fn test_tables() {
        assert!(base_query(QueryKey::RacesList).contains("FROM races"));
        assert!(base_query(QueryKey::EventsList).contains("FROM events"));
    }
}
