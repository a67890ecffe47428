use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::Context;
use onitama::{validate_deck, Card};

/// Loads a custom deck from a JSON file.
///
/// The file contains a list of cards such as
/// `[{"name": "Ox", "color": "blue", "offsets": [[-1, 0], [0, 1], [1, 0]]}, ...]`.
pub fn load_deck(path: &Path) -> anyhow::Result<Vec<Card>> {
    let file = File::open(path)
        .with_context(|| format!("Could not open deck file '{}'", path.display()))?;
    let cards = parse_deck(BufReader::new(file))
        .with_context(|| format!("Invalid deck file '{}'", path.display()))?;
    Ok(cards)
}

pub fn parse_deck(reader: impl std::io::Read) -> anyhow::Result<Vec<Card>> {
    let cards: Vec<Card> = serde_json::from_reader(reader)?;
    validate_deck(&cards)?;
    Ok(cards)
}

#[cfg(test)]
mod tests {
    use onitama::InvalidDeck;

    use super::*;

    const FIVE_CARDS: &str = r#"[
        {"name": "Ox", "color": "blue", "offsets": [[-1, 0], [0, 1], [1, 0]]},
        {"name": "Horse", "color": "red", "offsets": [[-1, 0], [0, -1], [1, 0]]},
        {"name": "Crane", "color": "blue", "offsets": [[-1, 0], [1, -1], [1, 1]]},
        {"name": "Mantis", "color": "red", "offsets": [[-1, -1], [-1, 1], [1, 0]]},
        {"name": "Boar", "color": "red", "offsets": [[-1, 0], [0, -1], [0, 1]]}
    ]"#;

    #[test]
    fn parses_custom_deck() {
        let cards = parse_deck(FIVE_CARDS.as_bytes()).unwrap();
        assert_eq!(cards.len(), 5);
        assert_eq!(cards[3].name(), "Mantis");
    }

    #[test]
    fn rejects_short_deck() {
        let json = r#"[{"name": "Ox", "color": "blue", "offsets": [[-1, 0]]}]"#;
        let err = parse_deck(json.as_bytes()).unwrap_err();
        assert_eq!(
            err.downcast_ref::<InvalidDeck>(),
            Some(&InvalidDeck::TooFewCards { len: 1 })
        );
    }

    #[test]
    fn rejects_malformed_card() {
        let json = r#"[{"name": "Ox", "color": "blue", "offsets": [[-1, 0], [-1, 0]]}]"#;
        let err = parse_deck(json.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("more than once"), "{}", err);
    }

    #[test]
    fn missing_file() {
        let err = load_deck(Path::new("/nonexistent/deck.json")).unwrap_err();
        assert!(err.to_string().contains("Could not open deck file"));
    }
}
