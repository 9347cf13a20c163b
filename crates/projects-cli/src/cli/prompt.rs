use std::io::{self, BufRead, Write};

/// Ask before deleting a project. Blank lines are skipped; only a first
/// token of `y` or `Y` confirms.
pub fn confirm_deletion<R: BufRead, W: Write>(
    project: &str,
    input: &mut R,
    output: &mut W,
) -> io::Result<bool> {
    write!(
        output,
        "This action will delete the project \"{project}\"\nDo you want to proceed? (Y/n)\n> "
    )?;
    output.flush()?;

    let mut line = String::new();
    loop {
        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Ok(false);
        }
        if let Some(token) = line.split_whitespace().next() {
            return Ok(token.eq_ignore_ascii_case("y"));
        }
    }
}
