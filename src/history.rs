/*!
The search-term history and the suggestion matching over it.
*/
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Past search terms, most recent first, with no duplicates.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct History {
    terms: Vec<String>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a term to the front of the history. Adding a term which is already present is a
    /// no-op.
    pub fn add(&mut self, term: &str) {
        if self.terms.iter().any(|existing| existing == term) {
            return;
        }
        self.terms.insert(0, term.to_string());
    }

    /// Remove a term from the history. A no-op if the term is not present.
    pub fn remove(&mut self, term: &str) {
        if let Some(position) = self.terms.iter().position(|existing| existing == term) {
            self.terms.remove(position);
        }
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    /// Return up to `limit` past terms which the input is a prefix of, in history order.
    ///
    /// The input is trimmed, lowercased and stripped of diacritics; candidates are only
    /// lowercased. An empty input deliberately matches the entire history so that focusing
    /// the empty input offers the most recent searches.
    pub fn matching(&self, input: &str, limit: usize) -> Vec<String> {
        let input: String = normalize(input);
        if input.is_empty() {
            return self.terms.clone();
        }
        let length: usize = input.chars().count();

        let mut matches: Vec<String> = Vec::new();
        for term in &self.terms {
            if matches.len() == limit {
                break;
            }
            let head: String = term.chars().take(length).collect::<String>().to_lowercase();
            if head == input {
                matches.push(term.clone());
            }
        }
        matches
    }
}

/// Trim, lowercase and strip diacritics, so that "Crème" becomes "creme".
fn normalize(text: &str) -> String {
    text.trim()
        .nfd()
        .filter(|character| !is_combining_mark(*character))
        .collect::<String>()
        .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_case::test_case;

    fn history_of(terms: &[&str]) -> History {
        History {
            terms: terms.iter().map(|term| term.to_string()).collect(),
        }
    }

    #[test]
    fn test_add_prepends() {
        let mut history = History::new();
        history.add("cats");
        history.add("cars");

        assert_eq!(history.terms(), &["cars".to_string(), "cats".to_string()]);
    }

    #[test]
    fn test_add_existing_term_is_a_noop() {
        let mut history = history_of(&["cars", "cats"]);
        history.add("cats");

        assert_eq!(history.terms(), &["cars".to_string(), "cats".to_string()]);
    }

    #[test]
    fn test_remove() {
        let mut history = history_of(&["cats", "cars", "dog"]);
        history.remove("cats");

        assert_eq!(history.terms(), &["cars".to_string(), "dog".to_string()]);
    }

    #[test]
    fn test_remove_missing_term_is_a_noop() {
        let mut history = history_of(&["cats"]);
        history.remove("dog");

        assert_eq!(history.terms(), &["cats".to_string()]);
    }

    #[test]
    fn test_empty_input_matches_the_entire_history() {
        let history = history_of(&["cats", "cars", "dog"]);

        assert_eq!(history.matching("", 5), history.terms().to_vec());
        assert_eq!(history.matching("   ", 5), history.terms().to_vec());
    }

    #[test_case(&["Paris", "paris", "London"], "par", &["Paris", "paris"]; "case insensitive prefix match in history order")]
    #[test_case(&["cats", "cars", "dog"], "ca", &["cats", "cars"]; "prefix match keeps history order")]
    #[test_case(&["cats"], "cats and dogs", &[]; "input longer than the candidate")]
    #[test_case(&["creme brulee"], "Crèm", &["creme brulee"]; "diacritics are stripped from the input")]
    fn test_matching(terms: &[&str], input: &str, expected: &[&str]) {
        let history = history_of(terms);

        let result: Vec<String> = history.matching(input, 5);

        let expected: Vec<String> = expected.iter().map(|term| term.to_string()).collect();
        assert_eq!(result, expected);
    }

    #[test]
    fn test_matching_is_capped() {
        let history = history_of(&["cat", "cata", "catb", "catc", "catd", "cate", "dog"]);

        let result: Vec<String> = history.matching("cat", 5);

        assert_eq!(result.len(), 5);
        assert_eq!(result, history.terms()[..5].to_vec());
    }
}
