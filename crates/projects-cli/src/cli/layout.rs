/// Spaces between the left column and the right column.
pub const COLUMN_PADDING: usize = 20;

/// Lay out `entries` two per line, pairing entry `i` with entry `i + 1`.
///
/// The left column is padded to the widest left-hand entry; a trailing
/// unpaired entry gets a line of its own.
pub fn two_columns(entries: &[String]) -> Vec<String> {
    let width = entries
        .chunks(2)
        .filter(|pair| pair.len() == 2)
        .map(|pair| pair[0].chars().count())
        .max()
        .unwrap_or(0)
        + COLUMN_PADDING;

    entries
        .chunks(2)
        .map(|pair| match pair.get(1) {
            Some(right) => format!("{:<width$}{right}", pair[0]),
            None => pair[0].clone(),
        })
        .collect()
}
