//! Ordering directives
//!
//! Race listings can be ordered by advertised start time. The directive
//! arrives as free text; only `ASC` and `DESC` (any case) are recognised.

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderDirection {
    Asc,
    Desc,
}

impl OrderDirection {
    /// Parse a directive after Unicode upper-casing. Anything else yields `None`.
    pub fn parse(directive: &str) -> Option<Self> {
        match directive.to_uppercase().as_str() {
            "ASC" => Some(Self::Asc),
            "DESC" => Some(Self::Desc),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }

    /// The clause fragment appended to a race listing, terminator included
    pub fn start_time_clause(&self) -> String {
        format!(" order by advertised_start_time {}; ", self.as_str())
    }
}
