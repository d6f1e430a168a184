/// Split text into words separated by runs of the space character.
///
/// Only `' '` separates words; tabs and newlines stay inside tokens. Empty
/// tokens are never produced.
pub fn tokenize(text: &str) -> impl Iterator<Item = &str> {
    text.split(' ').filter(|word| !word.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_tokenize() {
        let t: Vec<&str> = tokenize("cat sat on a mat").collect();
        assert_eq!(t, vec!["cat", "sat", "on", "a", "mat"]);
    }

    #[test]
    fn collapses_space_runs() {
        let t: Vec<&str> = tokenize("   white   cat  ").collect();
        assert_eq!(t, vec!["white", "cat"]);
    }

    #[test]
    fn empty_and_blank_input() {
        assert_eq!(tokenize("").count(), 0);
        assert_eq!(tokenize("     ").count(), 0);
    }

    #[test]
    fn only_space_separates() {
        let t: Vec<&str> = tokenize("cat\tdog\nbird fish").collect();
        assert_eq!(t, vec!["cat\tdog\nbird", "fish"]);
    }
}
