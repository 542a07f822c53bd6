/// Favorite headwords, in the order they were added. Held in memory only.
#[derive(Clone, Debug, Default)]
pub struct Favorites {
    words: Vec<String>,
}

impl Favorites {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the word, or remove it if already present. Returns whether the
    /// word is a favorite afterwards.
    pub fn toggle(&mut self, word: &str) -> bool {
        if let Some(index) = self.words.iter().position(|w| w == word) {
            self.words.remove(index);
            false
        } else {
            self.words.push(word.to_string());
            true
        }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }
}
