//! Spanish labels and messages shown by the browser.
//!
//! Species is free-form on the API side; unknown species are shown as sent.

use crate::types::{Gender, Status};

/// Placeholder shown when a character image fails to load
pub const IMAGE_FALLBACK: &str = "data:image/svg+xml;base64,PHN2ZyB3aWR0aD0iMjAwIiBoZWlnaHQ9IjIwMCIgeG1sbnM9Imh0dHA6Ly93d3cudzMub3JnLzIwMDAvc3ZnIj48cmVjdCB3aWR0aD0iMjAwIiBoZWlnaHQ9IjIwMCIgZmlsbD0iI2YzZjRmNiIvPjx0ZXh0IHg9IjUwJSIgeT0iNTAlIiBkeT0iLjNlbSIgZm9udC1mYW1pbHk9InNhbnMtc2VyaWYiIGZvbnQtc2l6ZT0iMTRweCIgZmlsbD0iIzlmYTJhNyIgdGV4dC1hbmNob3I9Im1pZGRsZSI+SW1hZ2VuIG5vIGRpc3BvbmlibGU8L3RleHQ+PC9zdmc+";

pub fn status_label(status: Status) -> &'static str {
    match status {
        Status::Alive => "Vivo",
        Status::Dead => "Muerto",
        Status::Unknown => "Desconocido",
    }
}

pub fn gender_label(gender: Gender) -> &'static str {
    match gender {
        Gender::Male => "Masculino",
        Gender::Female => "Femenino",
        Gender::Genderless => "Sin género",
        Gender::Unknown => "Desconocido",
    }
}

/// Translate a species name, passing through anything not in the table
pub fn species_label(species: &str) -> &str {
    match species {
        "Human" => "Humano",
        "Alien" => "Alienígena",
        "Humanoid" => "Humanoide",
        "Robot" => "Robot",
        "Animal" => "Animal",
        "Cronenberg" => "Cronenberg",
        "Disease" => "Enfermedad",
        "unknown" => "Desconocido",
        other => other,
    }
}

/// Results counter, e.g. "Mostrando 20 de 826 personajes"
pub fn results_count(shown: usize, total: u32) -> String {
    format!("Mostrando {shown} de {total} personajes")
}

/// Screen-reader announcement after a successful load
pub fn loaded_announcement(loaded: usize, total: u32) -> String {
    format!("Se cargaron {loaded} personajes. Total: {total}")
}

pub fn card_aria_label(name: &str) -> String {
    format!("Ver detalles de {name}")
}

pub fn page_aria_label(page: u32) -> String {
    format!("Ir a la página {page}")
}

pub const PREVIOUS_LABEL: &str = "◀ Anterior";
pub const NEXT_LABEL: &str = "Siguiente ▶";
pub const LOAD_MORE_LABEL: &str = "Cargar más";
pub const LOADING_MESSAGE: &str = "Cargando personajes...";
pub const RETRY_LABEL: &str = "Reintentar";

pub const EMPTY_STATE_TITLE: &str = "No se pudieron cargar los personajes";
pub const EMPTY_STATE_HINT: &str =
    "Intenta recargar la página o ajustar los filtros de búsqueda.";

pub const NOT_FOUND_MESSAGE: &str = "No se encontraron personajes con los filtros aplicados.";
pub const NETWORK_ERROR_MESSAGE: &str = "Error de conexión. Verifica tu conexión a internet.";
pub const UNKNOWN_ERROR_MESSAGE: &str = "Error desconocido al cargar los personajes.";

pub fn server_error_message(detail: &str) -> String {
    format!("Error del servidor: {detail}")
}
