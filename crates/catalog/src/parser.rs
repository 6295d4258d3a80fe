//! Parsers for filter values typed by the user.
//!
//! Accepts the API's own values in any case (`alive`, `Alive`, `ALIVE`) and
//! the Spanish labels shown in the UI (`vivo`, `masculino`, ...). An empty
//! value, `-` or `all` clears the filter.

use crate::error::{CatalogError, Result};
use crate::types::{Gender, Status};

/// Parse a status value
pub fn parse_status(s: &str) -> Result<Status> {
    match s.trim().to_lowercase().as_str() {
        "alive" | "vivo" => Ok(Status::Alive),
        "dead" | "muerto" => Ok(Status::Dead),
        "unknown" | "desconocido" => Ok(Status::Unknown),
        _ => Err(CatalogError::InvalidValue {
            field: "status".to_string(),
            value: s.to_string(),
        }),
    }
}

/// Parse a gender value
pub fn parse_gender(s: &str) -> Result<Gender> {
    match s.trim().to_lowercase().as_str() {
        "female" | "femenino" => Ok(Gender::Female),
        "male" | "masculino" => Ok(Gender::Male),
        "genderless" | "sin género" | "sin genero" => Ok(Gender::Genderless),
        "unknown" | "desconocido" => Ok(Gender::Unknown),
        _ => Err(CatalogError::InvalidValue {
            field: "gender".to_string(),
            value: s.to_string(),
        }),
    }
}

fn is_cleared(s: &str) -> bool {
    matches!(s.trim().to_lowercase().as_str(), "" | "-" | "all" | "todos")
}

/// Parse an optional status filter; cleared values yield `None`
pub fn parse_status_filter(s: &str) -> Result<Option<Status>> {
    if is_cleared(s) {
        return Ok(None);
    }
    parse_status(s).map(Some)
}

/// Parse an optional gender filter; cleared values yield `None`
pub fn parse_gender_filter(s: &str) -> Result<Option<Gender>> {
    if is_cleared(s) {
        return Ok(None);
    }
    parse_gender(s).map(Some)
}

/// Parse a 1-based page number
pub fn parse_page(s: &str) -> Result<u32> {
    match s.trim().parse::<u32>() {
        Ok(page) if page >= 1 => Ok(page),
        _ => Err(CatalogError::InvalidPage(s.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_status_any_case_and_spanish() {
        assert_eq!(parse_status("Alive").unwrap(), Status::Alive);
        assert_eq!(parse_status("DEAD").unwrap(), Status::Dead);
        assert_eq!(parse_status("desconocido").unwrap(), Status::Unknown);
        assert!(parse_status("zombie").is_err());
    }

    #[test]
    fn test_parse_gender() {
        assert_eq!(parse_gender("genderless").unwrap(), Gender::Genderless);
        assert_eq!(parse_gender("Femenino").unwrap(), Gender::Female);
        assert_eq!(
            parse_gender("robot"),
            Err(CatalogError::InvalidValue {
                field: "gender".to_string(),
                value: "robot".to_string(),
            })
        );
    }

    #[test]
    fn test_cleared_filters() {
        assert_eq!(parse_status_filter("").unwrap(), None);
        assert_eq!(parse_status_filter("-").unwrap(), None);
        assert_eq!(parse_gender_filter("all").unwrap(), None);
        assert_eq!(parse_gender_filter("male").unwrap(), Some(Gender::Male));
    }

    #[test]
    fn test_parse_page() {
        assert_eq!(parse_page("3").unwrap(), 3);
        assert!(parse_page("0").is_err());
        assert!(parse_page("abc").is_err());
    }
}
