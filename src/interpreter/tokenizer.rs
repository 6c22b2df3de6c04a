//! Stage tokenizer
//!
//! Splits one pipeline stage into words. Single or double quotes group
//! words containing spaces and are stripped from the result. An unterminated
//! quote runs to the end of the stage.

pub fn tokenize(stage: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut quote: Option<char> = None;

    for c in stage.chars() {
        match quote {
            Some(q) if c == q => quote = None,
            Some(_) => current.push(c),
            None if c == '"' || c == '\'' => quote = Some(c),
            None if c == ' ' || c == '\t' => {
                if !current.is_empty() {
                    tokens.push(std::mem::take(&mut current));
                }
            }
            None => current.push(c),
        }
    }
    if !current.is_empty() {
        tokens.push(current);
    }
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_plain_words() {
        assert_eq!(tokenize("ls  -l   /tmp"), words(&["ls", "-l", "/tmp"]));
        assert!(tokenize("   ").is_empty());
    }

    #[test]
    fn test_quotes_group_and_are_stripped() {
        assert_eq!(tokenize("echo \"hello world\""), words(&["echo", "hello world"]));
        assert_eq!(tokenize("grep 'a b' f"), words(&["grep", "a b", "f"]));
        assert_eq!(tokenize("echo it\"'\"s"), words(&["echo", "it's"]));
    }

    #[test]
    fn test_quote_joins_adjacent_text() {
        assert_eq!(tokenize("find -name \"*.txt\"x"), words(&["find", "-name", "*.txtx"]));
    }

    #[test]
    fn test_unterminated_quote_runs_to_end() {
        assert_eq!(tokenize("echo 'open  ended"), words(&["echo", "open  ended"]));
    }

    #[test]
    fn test_empty_quotes_produce_no_token() {
        assert_eq!(tokenize("echo \"\""), words(&["echo"]));
    }
}
