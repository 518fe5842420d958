use std::io::{self, BufRead, Write};
use std::ops::RangeInclusive;

/// Read one line without its line ending. `None` at end of input.
pub fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    let trimmed_len = line.trim_end_matches(|c| c == '\n' || c == '\r').len();
    line.truncate(trimmed_len);
    Ok(Some(line))
}

/// Ask for an integer until one inside `range` is entered.
/// Returns `None` if input runs out first.
pub fn prompt_in_range<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    label: &str,
    range: RangeInclusive<usize>,
) -> io::Result<Option<usize>> {
    loop {
        write!(out, "{label} ({}-{}): ", range.start(), range.end())?;
        out.flush()?;

        let Some(line) = read_line(input)? else {
            return Ok(None);
        };

        match line.trim().parse::<usize>() {
            Ok(value) if range.contains(&value) => return Ok(Some(value)),
            Ok(_) => writeln!(
                out,
                "Value must be between {} and {}.",
                range.start(),
                range.end()
            )?,
            Err(_) => writeln!(out, "Invalid input, enter a number.")?,
        }
    }
}
