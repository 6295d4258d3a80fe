//! Mapping character records onto a render target.
//!
//! The renderer knows nothing about concrete widgets: it turns records into
//! `CardView` rows and hands them to a `RenderTarget`. The terminal front end
//! and the in-memory test target both implement that trait.

use std::time::Duration;

use catalog::{locale, CharacterRecord};

use crate::pagination::{LoadMoreView, PageControl};
use crate::state::LoadMode;

// =============================================================================
// Views
// =============================================================================

/// One interactive card in the results grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    pub id: u32,
    pub name: String,
    pub status_label: String,
    /// Style hook, e.g. `status-alive`
    pub status_class: String,
    pub species_label: String,
    pub gender_label: String,
    pub origin: String,
    pub location: String,
    pub episode_count: usize,
    pub image: String,
    /// Shown instead of `image` when it fails to load
    pub image_fallback: &'static str,
    pub image_alt: String,
    /// Accessible name of the card's button role
    pub aria_label: String,
    /// Staggered entrance delay; cosmetic only
    pub reveal_delay: Duration,
}

impl CardView {
    /// Build the card for `record`, the `position`-th among newly rendered cards
    pub fn from_record(record: &CharacterRecord, position: usize, reveal_step: Duration) -> Self {
        Self {
            id: record.id,
            name: record.name.clone(),
            status_label: locale::status_label(record.status).to_string(),
            status_class: format!("status-{}", record.status.query_value()),
            species_label: locale::species_label(&record.species).to_string(),
            gender_label: locale::gender_label(record.gender).to_string(),
            origin: record.origin.name.clone(),
            location: record.location.name.clone(),
            episode_count: record.episode_count(),
            image: record.image.clone(),
            image_fallback: locale::IMAGE_FALLBACK,
            image_alt: format!("Imagen de {}", record.name),
            aria_label: locale::card_aria_label(&record.name),
            reveal_delay: reveal_step * position as u32,
        }
    }
}

/// Plain-text detail view surfaced when a card is activated
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailView {
    pub id: u32,
    pub lines: Vec<(&'static str, String)>,
}

impl DetailView {
    pub fn from_record(record: &CharacterRecord) -> Self {
        Self {
            id: record.id,
            lines: vec![
                ("Nombre", record.name.clone()),
                ("Estado", locale::status_label(record.status).to_string()),
                ("Especie", locale::species_label(&record.species).to_string()),
                ("Género", locale::gender_label(record.gender).to_string()),
                ("Origen", record.origin.name.clone()),
                ("Ubicación actual", record.location.name.clone()),
                ("Número de episodios", record.episode_count().to_string()),
            ],
        }
    }

    /// Render as `Label: value` lines
    pub fn to_text(&self) -> String {
        self.lines
            .iter()
            .map(|(label, value)| format!("{label}: {value}"))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

// =============================================================================
// Render Target
// =============================================================================

/// Everything the browser writes to its UI.
///
/// Implementations decide how to draw; the browser decides what and when.
pub trait RenderTarget {
    /// Remove every card from the grid
    fn clear_cards(&mut self);

    /// Add cards after the existing ones, in order
    fn append_cards(&mut self, cards: Vec<CardView>);

    /// Replace the grid with an explanatory empty state
    fn show_empty_state(&mut self, title: &str, hint: &str);

    fn set_results_count(&mut self, text: &str);

    fn set_pagination(&mut self, controls: &[PageControl], load_more: LoadMoreView);

    /// Show or hide the loading indicator
    fn set_loading(&mut self, loading: bool);

    /// Show a localized error with a retry affordance
    fn show_error(&mut self, message: &str);

    fn hide_error(&mut self);

    /// Polite live-region announcement for assistive technology
    fn announce(&mut self, message: &str);

    fn show_details(&mut self, details: &DetailView);
}

// =============================================================================
// Renderer
// =============================================================================

/// Turns the result set into cards on a target
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    reveal_step: Duration,
}

impl Renderer {
    pub fn new(reveal_step: Duration) -> Self {
        Self { reveal_step }
    }

    /// Render `records` on `target`.
    ///
    /// ## Algorithm
    /// - Replace: clear the grid, then render every record
    /// - Append: render only the trailing `added` records, leaving the
    ///   cards already on screen untouched
    ///
    /// Returns the number of cards rendered.
    pub fn render(
        &self,
        target: &mut impl RenderTarget,
        records: &[CharacterRecord],
        mode: LoadMode,
        added: usize,
    ) -> usize {
        let fresh = match mode {
            LoadMode::Replace => {
                target.clear_cards();
                records
            }
            LoadMode::Append => &records[records.len().saturating_sub(added)..],
        };

        let cards: Vec<CardView> = fresh
            .iter()
            .enumerate()
            .map(|(position, record)| CardView::from_record(record, position, self.reveal_step))
            .collect();
        let rendered = cards.len();

        target.append_cards(cards);
        rendered
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryTarget;
    use crate::testing::{record, records};
    use catalog::{Gender, Status};

    #[test]
    fn test_card_has_localized_labels() {
        let mut morty = record(2, "Morty Smith");
        morty.status = Status::Unknown;
        morty.gender = Gender::Male;
        morty.species = "Alien".to_string();

        let card = CardView::from_record(&morty, 3, Duration::from_millis(100));

        assert_eq!(card.status_label, "Desconocido");
        assert_eq!(card.status_class, "status-unknown");
        assert_eq!(card.species_label, "Alienígena");
        assert_eq!(card.gender_label, "Masculino");
        assert_eq!(card.episode_count, 3);
        assert_eq!(card.aria_label, "Ver detalles de Morty Smith");
        assert_eq!(card.image_fallback, locale::IMAGE_FALLBACK);
        assert_eq!(card.reveal_delay, Duration::from_millis(300));
    }

    #[test]
    fn test_detail_view_text() {
        let details = DetailView::from_record(&record(1, "Rick Sanchez"));
        let text = details.to_text();

        assert!(text.starts_with("Nombre: Rick Sanchez\nEstado: Vivo"));
        assert!(text.contains("Ubicación actual: Citadel of Ricks"));
        assert!(text.ends_with("Número de episodios: 3"));
    }

    #[test]
    fn test_replace_clears_and_renders_all() {
        let renderer = Renderer::new(Duration::from_millis(100));
        let mut target = MemoryTarget::default();
        target.append_cards(vec![CardView::from_record(&record(99, "Old"), 0, Duration::ZERO)]);

        let rendered = renderer.render(&mut target, &records(1, 20), LoadMode::Replace, 20);

        assert_eq!(rendered, 20);
        assert_eq!(target.cards.len(), 20);
        assert_eq!(target.cards[0].id, 1);
        assert_eq!(target.clears, 1);
    }

    #[test]
    fn test_append_renders_only_the_new_tail() {
        let renderer = Renderer::new(Duration::from_millis(100));
        let mut target = MemoryTarget::default();
        let all = records(1, 27);

        renderer.render(&mut target, &all[..20], LoadMode::Replace, 20);
        let rendered = renderer.render(&mut target, &all, LoadMode::Append, 7);

        assert_eq!(rendered, 7);
        assert_eq!(target.cards.len(), 27);
        assert_eq!(target.cards[20].id, 21);
        assert_eq!(target.cards[20].reveal_delay, Duration::ZERO, "stagger restarts per batch");
        assert_eq!(target.clears, 1);
    }
}
