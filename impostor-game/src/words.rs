use rand::Rng;
use serde::{Deserialize, Serialize};

/// A named category holding a fixed word list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub words: Vec<String>,
}

/// Container for all word categories
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct WordBook {
    pub categories: Vec<Category>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WordError {
    #[error("unknown category: {0}")]
    UnknownCategory(String),
    #[error("category has no words: {0}")]
    EmptyCategory(String),
}

impl WordBook {
    /// Create an empty word book (useful for tests)
    #[must_use]
    pub fn empty() -> Self {
        Self {
            categories: Vec::new(),
        }
    }

    /// Load a word book from JSON string
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON cannot be parsed into valid category data.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Create a word book from pre-parsed categories
    #[must_use]
    pub fn from_categories(categories: Vec<Category>) -> Self {
        Self { categories }
    }

    /// Look up a category by id
    #[must_use]
    pub fn category(&self, category_id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == category_id)
    }

    /// Draw one word uniformly at random from the category's fixed list.
    ///
    /// # Errors
    ///
    /// Returns `WordError::UnknownCategory` if the id is not in the fixed
    /// category set, or `WordError::EmptyCategory` if its list is empty.
    /// Both indicate mispopulated static data rather than user input.
    pub fn random_word(
        &self,
        category_id: &str,
        rng: &mut impl Rng,
    ) -> Result<&str, WordError> {
        let category = self
            .category(category_id)
            .ok_or_else(|| WordError::UnknownCategory(category_id.to_string()))?;
        if category.words.is_empty() {
            return Err(WordError::EmptyCategory(category_id.to_string()));
        }
        let index = rng.gen_range(0..category.words.len());
        Ok(&category.words[index])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn book() -> WordBook {
        WordBook::from_json(
            r#"{
                "categories": [
                    {
                        "id": "animals",
                        "name": "Animales",
                        "words": ["León", "Tigre", "Oso"]
                    },
                    { "id": "hollow", "name": "Vacía", "words": [] }
                ]
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn word_book_parses_categories() {
        let book = book();
        assert_eq!(book.categories.len(), 2);
        assert_eq!(book.category("animals").unwrap().name, "Animales");
        assert!(book.category("missing").is_none());
    }

    #[test]
    fn random_word_comes_from_requested_category() {
        let book = book();
        let mut rng = SmallRng::seed_from_u64(7);
        for _ in 0..32 {
            let word = book.random_word("animals", &mut rng).unwrap();
            assert!(["León", "Tigre", "Oso"].contains(&word));
        }
    }

    #[test]
    fn random_word_rejects_unknown_and_empty_categories() {
        let book = book();
        let mut rng = SmallRng::seed_from_u64(7);
        assert_eq!(
            book.random_word("missing", &mut rng),
            Err(WordError::UnknownCategory(String::from("missing")))
        );
        assert_eq!(
            book.random_word("hollow", &mut rng),
            Err(WordError::EmptyCategory(String::from("hollow")))
        );
    }
}
