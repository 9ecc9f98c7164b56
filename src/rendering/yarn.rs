use crossterm::style::Color as CrosstermColor;
use std::cmp::Ordering;

/// A single row of styled text.
#[derive(Default, Debug, PartialEq, Eq, Clone)]
pub struct Yarn {
    characters: Vec<char>,

    // NOTE: The style vectors are allowed to be shorter than the number of characters.
    colors: Vec<Option<CrosstermColor>>,
    backgrounds: Vec<Option<CrosstermColor>>,
}

impl Yarn {
    /// Return a new yarn of zero length.
    pub fn new() -> Self {
        Self {
            ..Default::default()
        }
    }

    /// Return a yarn with the string centered and truncated with dots if the string is longer
    /// than the length.
    pub fn center(string: &str, len: usize) -> Self {
        if len == 0 {
            return Yarn::default();
        }

        match string.chars().count().cmp(&len) {
            Ordering::Greater => {
                if len <= 3 {
                    return Yarn::from(vec!['.'; len]);
                }
                let mut characters: Vec<char> = Vec::with_capacity(len);
                characters.extend(string.chars().take(len - 3));
                characters.append(&mut vec!['.'; 3]);
                Yarn::from(characters)
            }
            Ordering::Less => {
                let count = string.chars().count();
                let mut characters: Vec<char> = Vec::with_capacity(len);

                let before_len: usize = (len - count) / 2;
                characters.append(&mut vec![' '; before_len]);

                characters.extend(string.chars());

                let after_len: usize = len - count - before_len;
                characters.append(&mut vec![' '; after_len]);

                Yarn::from(characters)
            }
            Ordering::Equal => Yarn::from(string),
        }
    }

    pub fn len(&self) -> usize {
        self.characters.len()
    }

    /// Add the other yarn to the end of this one and return the new yarn.
    pub fn concat(mut self, other: Self) -> Self {
        let len_before: usize = self.len();
        self.characters.extend(other.characters);

        if !other.colors.is_empty() {
            self.colors.resize(len_before, None);
            self.colors.extend(other.colors);
        }

        if !other.backgrounds.is_empty() {
            self.backgrounds.resize(len_before, None);
            self.backgrounds.extend(other.backgrounds);
        }

        self
    }

    /// Truncate or pad with spaces to the new length.
    pub fn resize(&mut self, new_len: usize) {
        let len = self.len();
        match len.cmp(&new_len) {
            Ordering::Greater => {
                self.truncate(new_len);
            }
            Ordering::Less => {
                self.characters.extend(vec![' '; new_len - len]);
            }
            Ordering::Equal => {}
        }
    }

    pub fn truncate(&mut self, new_len: usize) {
        self.characters.truncate(new_len);
        self.colors.truncate(new_len);
        self.backgrounds.truncate(new_len);
    }

    pub fn color(&mut self, color: CrosstermColor) {
        self.colors = vec![Some(color); self.len()];
    }

    /// Change the color of all text after (and including) the given position.
    pub fn color_after(&mut self, color: CrosstermColor, position: usize) {
        let num_chars: usize = self.characters.len();
        self.colors.resize(num_chars, None);
        for index in position..num_chars {
            self.colors[index] = Some(color);
        }
    }

    pub fn background(&mut self, color: CrosstermColor) {
        self.backgrounds = vec![Some(color); self.len()];
    }

    /// Change the background of all text after (and including) the given position.
    pub fn background_after(&mut self, color: CrosstermColor, position: usize) {
        let num_chars: usize = self.characters.len();
        self.backgrounds.resize(num_chars, None);
        for index in position..num_chars {
            self.backgrounds[index] = Some(color);
        }
    }

    pub fn characters(&self) -> &Vec<char> {
        &self.characters
    }

    pub fn colors(&self) -> &Vec<Option<CrosstermColor>> {
        &self.colors
    }

    pub fn backgrounds(&self) -> &Vec<Option<CrosstermColor>> {
        &self.backgrounds
    }
}

impl From<String> for Yarn {
    fn from(string: String) -> Self {
        let characters: Vec<char> = string.chars().collect();
        Yarn {
            characters,
            ..Default::default()
        }
    }
}

impl From<&str> for Yarn {
    fn from(string: &str) -> Self {
        let characters: Vec<char> = string.chars().collect();
        Yarn {
            characters,
            ..Default::default()
        }
    }
}

impl From<Vec<char>> for Yarn {
    fn from(characters: Vec<char>) -> Self {
        Yarn {
            characters,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_case::test_case;

    #[test_case("", 0, Yarn::new(); "an empty string and no length")]
    #[test_case("", 3, Yarn::from("   "); "an empty string and some length")]
    #[test_case("cat", 3, Yarn::from("cat"); "a string that just fits")]
    #[test_case("cat", 5, Yarn::from(" cat "); "a string is centered")]
    #[test_case("cat", 6, Yarn::from(" cat  "); "a string is centered and breaks ties leftwards")]
    #[test_case("kitten", 5, Yarn::from("ki..."); "a string is truncated with dots")]
    #[test_case("kitten", 2, Yarn::from(".."); "dot truncation can handle lengths less than 3")]
    fn test_center(string: &str, len: usize, expected_result: Yarn) {
        let result: Yarn = Yarn::center(string, len);

        assert_eq!(result, expected_result);
    }

    #[test]
    fn test_concat_keeps_styles_aligned() {
        let mut colored = Yarn::from("ab");
        colored.background(CrosstermColor::Yellow);

        let result: Yarn = Yarn::from("xy").concat(colored);

        assert_eq!(result.characters(), &vec!['x', 'y', 'a', 'b']);
        assert_eq!(
            result.backgrounds(),
            &vec![
                None,
                None,
                Some(CrosstermColor::Yellow),
                Some(CrosstermColor::Yellow)
            ]
        );
    }

    #[test]
    fn test_background_after() {
        let mut yarn = Yarn::from("abcd");
        yarn.background_after(CrosstermColor::Yellow, 2);

        assert_eq!(
            yarn.backgrounds(),
            &vec![
                None,
                None,
                Some(CrosstermColor::Yellow),
                Some(CrosstermColor::Yellow)
            ]
        );
    }
}
