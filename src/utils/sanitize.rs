/// Strips angle brackets so free-text evaluation fields cannot carry markup.
pub fn strip_markup(input: &str) -> String {
    input
        .chars()
        .filter(|c| *c != '<' && *c != '>')
        .collect::<String>()
        .trim()
        .to_string()
}
