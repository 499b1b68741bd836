// Tokenized tag input for the vibes field.
//
// The field holds a comma/semicolon-separated list of short tags. Suggestions
// run against the last (in-progress) token only; accepting one rewrites the
// whole field into normalized ", "-joined form with a trailing ", " so the
// next tag can be typed immediately. Normalization is idempotent.

use crate::constants::TOKEN_DELIMITERS;

/// Title-case a tag: uppercase the first letter of each whitespace-separated
/// word, leave the rest of the word untouched ("romcom" -> "Romcom",
/// "McCarthy" stays "McCarthy").
pub fn title_case(s: &str) -> String {
    s.trim()
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Split the live field text on any delimiter, trimming each token.
/// Empty tokens are kept positionally so the trailing in-progress token
/// is always `tokens.last()`.
pub fn split_tokens(text: &str) -> Vec<String> {
    text.split(&TOKEN_DELIMITERS[..])
        .map(|t| t.trim().to_string())
        .collect()
}

/// The token currently being typed (everything after the last delimiter).
pub fn current_fragment(text: &str) -> String {
    split_tokens(text).pop().unwrap_or_default()
}

/// Completed tokens: everything before the last delimiter, empties dropped.
pub fn completed_tokens(text: &str) -> Vec<String> {
    let mut tokens = split_tokens(text);
    tokens.pop();
    tokens.retain(|t| !t.is_empty());
    tokens
}

/// Replace the in-progress token with an accepted suggestion, normalize every
/// token to title case, rejoin with ", " and append a trailing ", ".
/// Returns the new field text; the caller moves the cursor to the end.
pub fn accept_suggestion(text: &str, choice: &str) -> String {
    let mut tokens = split_tokens(text);
    match tokens.last_mut() {
        Some(last) => *last = choice.to_string(),
        None => tokens.push(choice.to_string()),
    }
    let joined = tokens
        .iter()
        .map(|t| title_case(t))
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join(", ");
    format!("{}, ", joined)
}

/// Final token extraction for saving: title-case every token, drop empties,
/// dedupe case-insensitively while preserving first-seen order.
pub fn final_tokens(text: &str) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    let mut out = Vec::new();
    for token in split_tokens(text) {
        let normalized = title_case(&token);
        if normalized.is_empty() {
            continue;
        }
        let key = normalized.to_lowercase();
        if seen.contains(&key) {
            continue;
        }
        seen.push(key);
        out.push(normalized);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_case_basic() {
        assert_eq!(title_case("dark academia"), "Dark Academia");
        assert_eq!(title_case("  slow-burn "), "Slow-burn");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn test_title_case_idempotent() {
        for s in ["dark", "Dark Academia", "McCarthy style", "cozy  mystery"] {
            let once = title_case(s);
            assert_eq!(title_case(&once), once);
        }
    }

    #[test]
    fn test_split_keeps_trailing_fragment() {
        let tokens = split_tokens("Dark, Epic, cre");
        assert_eq!(tokens, vec!["Dark", "Epic", "cre"]);
        assert_eq!(current_fragment("Dark, Epic, cre"), "cre");
        assert_eq!(current_fragment("Dark, Epic, "), "");
        assert_eq!(completed_tokens("Dark, Epic, cre"), vec!["Dark", "Epic"]);
    }

    #[test]
    fn test_split_mixed_delimiters() {
        assert_eq!(split_tokens("a; b,c"), vec!["a", "b", "c"]);
        assert_eq!(completed_tokens("a;; b, "), vec!["a", "b"]);
    }

    #[test]
    fn test_accept_suggestion_replaces_last_token() {
        let text = accept_suggestion("dark, ep", "Epic");
        assert_eq!(text, "Dark, Epic, ");
        // accepting into an empty field
        assert_eq!(accept_suggestion("", "Cozy"), "Cozy, ");
    }

    #[test]
    fn test_accept_then_split_roundtrips() {
        // normalize∘split∘join is stable: re-splitting the rewritten text
        // yields the same completed token set.
        let text = accept_suggestion("dark, slow-burn, ep", "Epic");
        assert_eq!(
            completed_tokens(&text),
            vec!["Dark", "Slow-burn", "Epic"]
        );
        let again = accept_suggestion(&text, "");
        assert_eq!(completed_tokens(&again), completed_tokens(&text));
    }

    #[test]
    fn test_final_tokens_dedupes_case_insensitively() {
        assert_eq!(final_tokens("dark, Dark, Epic"), vec!["Dark", "Epic"]);
        assert_eq!(final_tokens("a,,b; a ,"), vec!["A", "B"]);
        assert_eq!(final_tokens(""), Vec::<String>::new());
    }

    #[test]
    fn test_final_tokens_preserve_first_seen_order() {
        assert_eq!(
            final_tokens("witty, cozy, WITTY, tense"),
            vec!["Witty", "Cozy", "Tense"]
        );
    }
}
