use std::fmt::Write;

use glassdesk_core::WordEntry;

/// Render an entry the way the word card lays it out: headword, language
/// and pronunciation, numbered meanings with their examples, then compounds.
pub fn render(entry: &WordEntry, is_favorite: bool) -> String {
    let mut out = String::new();

    let star = if is_favorite { " ★" } else { "" };
    let _ = writeln!(out, "{}{}", entry.headword, star);

    let mut badges = Vec::new();
    if let Some(language) = entry.origin_language.as_deref().filter(|s| !s.is_empty()) {
        badges.push(format!("[{}]", language));
    }
    if let Some(pronunciation) = entry.pronunciation.as_deref().filter(|s| !s.is_empty()) {
        badges.push(format!("/{}/", pronunciation));
    }
    if !badges.is_empty() {
        let _ = writeln!(out, "{}", badges.join(" "));
    }

    for (index, meaning) in entry.meanings.iter().enumerate() {
        let _ = writeln!(out);
        let _ = writeln!(out, "{:>3}. {}", index + 1, meaning.text);
        for example in &meaning.examples {
            let _ = writeln!(out, "     \"{}\"", example.text);
            if let Some(author) = &example.author {
                let _ = writeln!(out, "       - {}", author.full_name);
            }
        }
    }

    let compounds = entry.compound_list();
    if !compounds.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Birleşik Kelimeler");
        let _ = writeln!(out, "  {}", compounds.join(", "));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use glassdesk_core::dictionary::{Author, Example, Meaning};

    fn entry() -> WordEntry {
        WordEntry {
            id: "1".to_string(),
            headword: "kalem".to_string(),
            origin_language: Some("Arapça kalem".to_string()),
            pronunciation: Some("kalem".to_string()),
            compounds: Some("dolma kalem, kurşun kalem".to_string()),
            meanings: vec![
                Meaning {
                    id: "10".to_string(),
                    text: "Yazı yazmaya yarayan araç".to_string(),
                    examples: vec![Example {
                        text: "Kalemini aldı.".to_string(),
                        author: Some(Author {
                            full_name: "Sait Faik Abasıyanık".to_string(),
                        }),
                    }],
                },
                Meaning {
                    id: "11".to_string(),
                    text: "Resmî daire bölümü".to_string(),
                    examples: Vec::new(),
                },
            ],
            ..Default::default()
        }
    }

    #[test]
    fn test_render_full_card() {
        let card = render(&entry(), false);
        let lines: Vec<&str> = card.lines().collect();
        assert_eq!(lines[0], "kalem");
        assert_eq!(lines[1], "[Arapça kalem] /kalem/");
        assert!(card.contains("  1. Yazı yazmaya yarayan araç"));
        assert!(card.contains("     \"Kalemini aldı.\""));
        assert!(card.contains("       - Sait Faik Abasıyanık"));
        assert!(card.contains("  2. Resmî daire bölümü"));
        assert!(card.contains("Birleşik Kelimeler\n  dolma kalem, kurşun kalem"));
    }

    #[test]
    fn test_render_minimal_card() {
        let minimal = WordEntry {
            headword: "su".to_string(),
            ..Default::default()
        };
        assert_eq!(render(&minimal, true), "su ★\n");
    }
}
