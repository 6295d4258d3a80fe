//! Commands of the interactive `browse` session.

use std::time::Instant;

use anyhow::{bail, Result};
use api_client::CharacterSource;
use browser::{BrowserSession, RenderTarget};
use catalog::parser::{parse_gender_filter, parse_page, parse_status_filter};
use catalog::{Gender, Status};
use tracing::debug;

pub const HELP: &str = "\
Comandos:
  search <texto>    buscar por nombre (inmediato)
  type <texto>      buscar mientras escribes (espera 500 ms, mínimo 3 letras)
  status <valor|->  alive, dead, unknown o - para quitar el filtro
  gender <valor|->  female, male, genderless, unknown o -
  page <n>          ir a la página n
  next / prev       página siguiente / anterior
  more              cargar más resultados
  retry             reintentar tras un error
  show <n>          ver detalles de la tarjeta n
  help              mostrar esta ayuda
  quit              salir";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Search(String),
    Type(String),
    Status(Option<Status>),
    Gender(Option<Gender>),
    Page(u32),
    Next,
    Prev,
    More,
    Retry,
    /// 1-based card number as printed
    Show(usize),
    Help,
    Quit,
    Nothing,
}

/// Parse one input line into a command
pub fn parse_command(line: &str) -> Result<Command> {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let command = match word.to_lowercase().as_str() {
        "" => Command::Nothing,
        "search" | "buscar" => Command::Search(rest.to_string()),
        "type" => Command::Type(rest.to_string()),
        "status" | "estado" => Command::Status(parse_status_filter(rest)?),
        "gender" | "genero" | "género" => Command::Gender(parse_gender_filter(rest)?),
        "page" | "pagina" | "página" => Command::Page(parse_page(rest)?),
        "next" | "n" => Command::Next,
        "prev" | "p" => Command::Prev,
        "more" | "m" => Command::More,
        "retry" | "r" => Command::Retry,
        "show" | "ver" => match rest.parse::<usize>() {
            Ok(n) if n >= 1 => Command::Show(n),
            _ => bail!("Expected a card number, got '{}'", rest),
        },
        "help" | "h" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        other => bail!("Unknown command '{}' (type `help`)", other),
    };
    Ok(command)
}

/// Run a command against the session.
///
/// Returns a note for the user when the command had no effect.
pub async fn run_command<S, R>(
    session: &mut BrowserSession<S, R>,
    command: Command,
) -> Option<&'static str>
where
    S: CharacterSource,
    R: RenderTarget,
{
    debug!("Running {:?}", command);
    match command {
        Command::Search(text) => {
            session.search(&text).await;
        }
        Command::Type(text) => session.type_text(&text, Instant::now()),
        Command::Status(status) => {
            let gender = session.state().filters.gender;
            session.change_filters(status, gender).await;
        }
        Command::Gender(gender) => {
            let status = session.state().filters.status;
            session.change_filters(status, gender).await;
        }
        Command::Page(page) => {
            if session.select_page(page).await.is_none() {
                return Some("Esa página no existe.");
            }
        }
        Command::Next => {
            if session.next().await.is_none() {
                return Some("Ya estás en la última página.");
            }
        }
        Command::Prev => {
            if session.previous().await.is_none() {
                return Some("Ya estás en la primera página.");
            }
        }
        Command::More => {
            if session.load_more().await.is_none() {
                return Some("No hay más personajes para cargar.");
            }
        }
        Command::Retry => {
            session.retry().await;
        }
        Command::Show(n) => {
            if !session.activate_card(n - 1) {
                return Some("No hay ninguna tarjeta con ese número.");
            }
        }
        Command::Help => return Some(HELP),
        Command::Quit | Command::Nothing => {}
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_search_keeps_inner_spaces() {
        assert_eq!(
            parse_command("search  rick sanchez ").unwrap(),
            Command::Search("rick sanchez".to_string())
        );
        assert_eq!(parse_command("type").unwrap(), Command::Type(String::new()));
    }

    #[test]
    fn test_parse_filters() {
        assert_eq!(parse_command("status dead").unwrap(), Command::Status(Some(Status::Dead)));
        assert_eq!(parse_command("status -").unwrap(), Command::Status(None));
        assert_eq!(
            parse_command("gender Genderless").unwrap(),
            Command::Gender(Some(Gender::Genderless))
        );
        assert!(parse_command("gender robot").is_err());
    }

    #[test]
    fn test_parse_navigation() {
        assert_eq!(parse_command("page 4").unwrap(), Command::Page(4));
        assert!(parse_command("page 0").is_err());
        assert_eq!(parse_command("N").unwrap(), Command::Next);
        assert_eq!(parse_command("more").unwrap(), Command::More);
        assert_eq!(parse_command("show 3").unwrap(), Command::Show(3));
        assert!(parse_command("show 0").is_err());
    }

    #[test]
    fn test_parse_misc() {
        assert_eq!(parse_command("   ").unwrap(), Command::Nothing);
        assert_eq!(parse_command("quit").unwrap(), Command::Quit);
        assert!(parse_command("dance").is_err());
    }
}
