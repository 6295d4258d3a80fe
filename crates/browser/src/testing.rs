//! Shared fixtures for unit tests.

use catalog::{CharacterPage, CharacterRecord, Gender, NamedResource, PageInfo, Status};

pub fn record(id: u32, name: &str) -> CharacterRecord {
    CharacterRecord {
        id,
        name: name.to_string(),
        status: Status::Alive,
        species: "Human".to_string(),
        kind: String::new(),
        gender: Gender::Male,
        origin: NamedResource {
            name: "Earth (C-137)".to_string(),
            url: String::new(),
        },
        location: NamedResource {
            name: "Citadel of Ricks".to_string(),
            url: String::new(),
        },
        image: format!("https://rickandmortyapi.com/api/character/avatar/{id}.jpeg"),
        episode: vec!["https://rickandmortyapi.com/api/episode/1".to_string(); 3],
        url: format!("https://rickandmortyapi.com/api/character/{id}"),
        created: String::new(),
    }
}

/// `count` records with consecutive ids starting at `first_id`
pub fn records(first_id: u32, count: usize) -> Vec<CharacterRecord> {
    (0..count as u32)
        .map(|i| record(first_id + i, &format!("Character {}", first_id + i)))
        .collect()
}

/// A last page (no `next` link)
pub fn page_of(results: Vec<CharacterRecord>, count: u32, pages: u32) -> CharacterPage {
    CharacterPage {
        info: PageInfo {
            count,
            pages,
            next: None,
            prev: None,
        },
        results,
    }
}

/// A page followed by more pages
pub fn page_with_next(results: Vec<CharacterRecord>, count: u32, pages: u32) -> CharacterPage {
    let mut page = page_of(results, count, pages);
    page.info.next = Some("https://rickandmortyapi.com/api/character?page=2".to_string());
    page
}
