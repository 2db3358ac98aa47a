/// Strips `<...>` markup and trims surrounding whitespace.
///
/// Free-text fields (names, recipients, message text) pass through here
/// before validation, so a payload of only markup counts as empty.
pub fn clean(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut in_tag = false;

    for ch in input.chars() {
        match ch {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            _ if in_tag => {}
            _ => out.push(ch),
        }
    }

    out.trim().to_owned()
}
