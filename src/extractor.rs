/// Returns the text between the first `left` and the first `right` that follows it.
///
/// When `start` is given the search for `left` begins right after the first occurrence of
/// `start`. All matching is literal, case-sensitive and leftmost-first.
///
/// # Arguments
/// `body` - the text to search.
/// `left` - the delimiter preceding the wanted text.
/// `right` - the delimiter following the wanted text.
/// `start` - an optional marker that has to appear before `left`.
///
/// # Returns
/// The text between the delimiters (possibly empty) or `None` if any of the markers is missing.
pub fn read_between<'a>(
    body: &'a str,
    left: &str,
    right: &str,
    start: Option<&str>,
) -> Option<&'a str> {
    let offset = match start {
        Some(start) => body.find(start)? + start.len(),
        None => 0,
    };

    let value_start = offset + body[offset..].find(left)? + left.len();
    let value_end = value_start + body[value_start..].find(right)?;

    Some(&body[value_start..value_end])
}
