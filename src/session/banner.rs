/// Frame a message between two border lines as wide as its longest line.
pub fn banner(message: &str, border: char) -> String {
    let width = message
        .lines()
        .map(|line| line.chars().count())
        .max()
        .unwrap_or_default();
    let rule = border.to_string().repeat(width);
    format!("{}\n{}\n{}", rule, message, rule)
}
