//! Terminal render target.
//!
//! Cards are printed as numbered rows so `show <n>` can refer to them.
//! The staggered entrance animation has no terminal equivalent and is
//! ignored.

use std::fmt::Display;
use std::io::{self, Stdout, Write};

use browser::{CardView, ControlKind, DetailView, LoadMoreView, PageControl, RenderTarget};
use catalog::locale;
use colored::Colorize;
use tracing::warn;

pub struct TerminalTarget<W: Write = Stdout> {
    out: W,
    /// Number of cards currently in the grid
    shown: usize,
    loading: bool,
}

impl TerminalTarget<Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TerminalTarget<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            shown: 0,
            loading: false,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn line(&mut self, text: impl Display) {
        if let Err(e) = writeln!(self.out, "{text}") {
            warn!("Failed to write to terminal: {}", e);
        }
    }

    fn status_badge(card: &CardView) -> String {
        let label = format!("[{}]", card.status_label);
        match card.status_class.as_str() {
            "status-alive" => label.green().to_string(),
            "status-dead" => label.red().to_string(),
            _ => label.yellow().to_string(),
        }
    }

    fn control_label(control: &PageControl) -> String {
        match control.kind {
            ControlKind::Page if control.active => format!("[{}]", control.label).bold().to_string(),
            ControlKind::Page => control.label.clone(),
            _ if control.disabled => control.label.dimmed().to_string(),
            _ => control.label.clone(),
        }
    }
}

impl<W: Write> RenderTarget for TerminalTarget<W> {
    fn clear_cards(&mut self) {
        self.shown = 0;
        self.line("");
    }

    fn append_cards(&mut self, cards: Vec<CardView>) {
        for card in cards {
            self.shown += 1;
            let header = format!(
                "{:>3}. {} {}",
                self.shown,
                card.name.bold(),
                Self::status_badge(&card)
            );
            self.line(header);
            let details = format!(
                "     Especie: {} · Género: {} · Origen: {} · Ubicación: {} · Episodios: {}",
                card.species_label, card.gender_label, card.origin, card.location, card.episode_count
            );
            self.line(details);
        }
    }

    fn show_empty_state(&mut self, title: &str, hint: &str) {
        self.shown = 0;
        self.line(title.bold());
        self.line(hint.dimmed());
    }

    fn set_results_count(&mut self, text: &str) {
        self.line(text.cyan());
    }

    fn set_pagination(&mut self, controls: &[PageControl], load_more: LoadMoreView) {
        // Drawn once the load settles
        if self.loading {
            return;
        }
        let bar = controls
            .iter()
            .map(Self::control_label)
            .collect::<Vec<_>>()
            .join("  ");
        self.line(bar);
        if load_more.visible {
            self.line(format!("({}: escribe `more`)", locale::LOAD_MORE_LABEL).dimmed());
        }
    }

    fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
        if loading {
            self.line(locale::LOADING_MESSAGE.dimmed());
        }
    }

    fn show_error(&mut self, message: &str) {
        self.line(message.red().bold());
        self.line(format!("({}: escribe `retry`)", locale::RETRY_LABEL).dimmed());
    }

    fn hide_error(&mut self) {}

    fn announce(&mut self, message: &str) {
        self.line(message.dimmed());
    }

    fn show_details(&mut self, details: &DetailView) {
        self.line("");
        self.line(details.to_text());
        self.line("");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use browser::build_controls;
    use std::time::Duration;

    fn card(name: &str) -> CardView {
        CardView {
            id: 1,
            name: name.to_string(),
            status_label: "Vivo".to_string(),
            status_class: "status-alive".to_string(),
            species_label: "Humano".to_string(),
            gender_label: "Masculino".to_string(),
            origin: "Earth (C-137)".to_string(),
            location: "Citadel of Ricks".to_string(),
            episode_count: 51,
            image: String::new(),
            image_fallback: locale::IMAGE_FALLBACK,
            image_alt: String::new(),
            aria_label: locale::card_aria_label(name),
            reveal_delay: Duration::ZERO,
        }
    }

    fn rendered(target: TerminalTarget<Vec<u8>>) -> String {
        String::from_utf8(target.into_inner()).unwrap()
    }

    #[test]
    fn test_cards_are_numbered_across_appends() {
        colored::control::set_override(false);
        let mut target = TerminalTarget::new(Vec::new());

        target.append_cards(vec![card("Rick Sanchez")]);
        target.append_cards(vec![card("Morty Smith")]);

        let text = rendered(target);
        assert!(text.contains("  1. Rick Sanchez [Vivo]"));
        assert!(text.contains("  2. Morty Smith [Vivo]"));
        assert!(text.contains("Episodios: 51"));
    }

    #[test]
    fn test_pagination_drawn_only_when_settled() {
        colored::control::set_override(false);
        let mut target = TerminalTarget::new(Vec::new());
        let controls = build_controls(1, 3);

        target.set_loading(true);
        target.set_pagination(&controls, LoadMoreView { visible: true, disabled: true });
        target.set_loading(false);
        target.set_pagination(&controls, LoadMoreView { visible: true, disabled: false });

        let text = rendered(target);
        assert_eq!(text.matches("Siguiente").count(), 1);
        assert!(text.contains("[1]  2  3"));
        assert!(text.contains("escribe `more`"));
    }

    #[test]
    fn test_pagination_drawn_when_load_more_disabled_at_rest() {
        colored::control::set_override(false);
        let mut target = TerminalTarget::new(Vec::new());
        let controls = build_controls(2, 2);

        target.set_loading(false);
        target.set_pagination(&controls, LoadMoreView { visible: false, disabled: true });

        let text = rendered(target);
        assert!(text.contains("1  [2]"), "last page still shows its bar: {text}");
        assert!(!text.contains("escribe `more`"));
    }
}
