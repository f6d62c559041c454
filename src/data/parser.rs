use super::extract::parse_number;
use super::model::{Delimiter, RawTable};

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Parse CSV-like text into a [`RawTable`].
///
/// Layout accepted:
///
/// ```text
/// # comment / free-text preamble lines   -> metadata
/// Year,Value                             -> header (delimiter inferred here)
/// 1880,-0.12                             -> data rows
/// 1881,-0.07
/// ```
///
/// The header opens the block of equal-width lines that holds the first
/// numeric rows, so a non-numeric row right under it (`a,b`, `NA,NA`) stays
/// a data row. Without any numeric line the first non-comment line is the
/// header. Returns `None` only when the text has no usable line at all.
pub fn parse(text: &str) -> Option<RawTable> {
    let lines: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();

    let (header_pos, delimiter) = find_header(&lines)?;
    let header = split_line(lines[header_pos], delimiter);

    let metadata: Vec<String> = lines[..header_pos].iter().map(|l| l.to_string()).collect();

    let mut rows = Vec::new();
    let mut skipped = 0;
    for line in &lines[header_pos + 1..] {
        if is_comment(line) {
            skipped += 1;
            continue;
        }
        let cells = split_line(line, delimiter);
        if cells.len() == header.len() {
            rows.push(cells);
        } else {
            log::debug!(
                "skipping line with {} cells (expected {}): {line}",
                cells.len(),
                header.len()
            );
            skipped += 1;
        }
    }

    Some(RawTable {
        metadata,
        header,
        rows,
        delimiter,
        skipped,
    })
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn is_comment(line: &str) -> bool {
    line.starts_with('#')
}

/// Locate the header line and the delimiter of the table.
///
/// The anchor is the first numeric line followed by a line of the same
/// width (or the first numeric line at all). The header is the earliest line
/// of the unbroken same-width run ending at the anchor.
fn find_header(lines: &[&str]) -> Option<(usize, Delimiter)> {
    let candidates: Vec<usize> = (0..lines.len())
        .filter(|&i| !is_comment(lines[i]))
        .collect();
    let first = *candidates.first()?;

    let line_at = |k: usize| lines[candidates[k]];
    let anchor = (0..candidates.len())
        .find(|&k| {
            has_number(line_at(k))
                && k + 1 < candidates.len()
                && same_width(line_at(k), line_at(k + 1))
        })
        .or_else(|| (0..candidates.len()).find(|&k| has_number(line_at(k))));

    let Some(anchor) = anchor else {
        return Some((first, Delimiter::detect(lines[first])));
    };

    let delimiter = Delimiter::detect(line_at(anchor));
    let width = split_line(line_at(anchor), delimiter).len();
    let mut start = anchor;
    while start > 0 && split_line(line_at(start - 1), delimiter).len() == width {
        start -= 1;
    }
    Some((candidates[start], delimiter))
}

fn has_number(line: &str) -> bool {
    split_line(line, Delimiter::detect(line))
        .iter()
        .any(|c| parse_number(c).is_some())
}

/// Both lines split into the same number of cells under `line`'s delimiter.
fn same_width(line: &str, next: &str) -> bool {
    let delimiter = Delimiter::detect(line);
    split_line(line, delimiter).len() == split_line(next, delimiter).len()
}

/// Split one line into trimmed cells.
///
/// Comma lines go through the `csv` tokenizer so quoted cells may contain
/// commas.
pub(crate) fn split_line(line: &str, delimiter: Delimiter) -> Vec<String> {
    match delimiter {
        Delimiter::Comma => {
            let mut reader = csv::ReaderBuilder::new()
                .has_headers(false)
                .flexible(true)
                .trim(csv::Trim::All)
                .from_reader(line.as_bytes());
            match reader.records().next() {
                Some(Ok(record)) => record.iter().map(str::to_string).collect(),
                _ => line.split(',').map(|c| c.trim().to_string()).collect(),
            }
        }
        Delimiter::Whitespace => line.split_whitespace().map(str::to_string).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_comma() {
        let table = parse("x,y\n1,2\n2,4\n3,6\n").unwrap();
        assert_eq!(table.header, vec!["x", "y"]);
        assert_eq!(table.len(), 3);
        assert_eq!(table.rows[2], vec!["3", "6"]);
        assert_eq!(table.delimiter, Delimiter::Comma);
        assert!(table.metadata.is_empty());
        assert_eq!(table.skipped, 0);
    }

    #[test]
    fn test_empty_input() {
        assert!(parse("").is_none());
        assert!(parse("\n\n   \n").is_none());
        assert!(parse("# only a comment\n").is_none());
    }

    #[test]
    fn test_free_text_preamble() {
        let text = "Global Land and Ocean Temperature Anomalies, January-December\n\
                    Units: Degrees Celsius\n\
                    Base Period: 1901-2000\n\
                    Missing: -999\n\
                    Year,Value\n\
                    1880,-0.12\n\
                    1881,-0.07\n";
        let table = parse(text).unwrap();
        assert_eq!(table.header, vec!["Year", "Value"]);
        assert_eq!(table.metadata.len(), 4);
        assert_eq!(table.metadata[1], "Units: Degrees Celsius");
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_comment_preamble_whitespace() {
        let text = "# Hubble (1929)\n# distance in Mpc\ndistance velocity\n0.032 170\n0.034\t290\n";
        let table = parse(text).unwrap();
        assert_eq!(table.delimiter, Delimiter::Whitespace);
        assert_eq!(table.metadata, vec!["# Hubble (1929)", "# distance in Mpc"]);
        assert_eq!(table.rows, vec![vec!["0.032", "170"], vec!["0.034", "290"]]);
    }

    #[test]
    fn test_malformed_lines_skipped() {
        let text = "a,b,c\n1,2,3\n4,5\n6,7,8\n# trailing note\ntotal: 2 rows\n";
        let table = parse(text).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.skipped, 3);
        assert!(table.rows.iter().all(|r| r.len() == table.column_count()));
    }

    #[test]
    fn test_quoted_comma_cell() {
        let text = "name,value\n\"Smith, J\",3.5\n";
        let table = parse(text).unwrap();
        assert_eq!(table.rows, vec![vec!["Smith, J", "3.5"]]);
    }

    #[test]
    fn test_windows_line_endings() {
        let table = parse("x,y\r\n1,2\r\n").unwrap();
        assert_eq!(table.header, vec!["x", "y"]);
        assert_eq!(table.rows, vec![vec!["1", "2"]]);
    }

    #[test]
    fn test_non_numeric_first_row_stays_data() {
        let table = parse("x,y\na,b\n1,2\n2,4\n3,6\n").unwrap();
        assert_eq!(table.header, vec!["x", "y"]);
        assert!(table.metadata.is_empty());
        assert_eq!(table.rows[0], vec!["a", "b"]);
        assert_eq!(table.len(), 4);
    }

    #[test]
    fn test_missing_values_first_row() {
        let table = parse("year,temp\nNA,NA\n1990,0.4\n1991,0.5\n").unwrap();
        assert_eq!(table.header, vec!["year", "temp"]);
        assert!(table.metadata.is_empty());
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn test_single_data_row() {
        let table = parse("# note\nx y\n1 2\n").unwrap();
        assert_eq!(table.header, vec!["x", "y"]);
        assert_eq!(table.metadata, vec!["# note"]);
        assert_eq!(table.rows, vec![vec!["1", "2"]]);
    }

    #[test]
    fn test_header_without_data() {
        let table = parse("only,a,header\n").unwrap();
        assert_eq!(table.column_count(), 3);
        assert!(table.is_empty());
    }

    #[test]
    fn test_split_line_whitespace_runs() {
        assert_eq!(
            split_line("  1.0 \t  2.0   3.0 ", Delimiter::Whitespace),
            vec!["1.0", "2.0", "3.0"]
        );
        assert_eq!(split_line("1, 2 ,3", Delimiter::Comma), vec!["1", "2", "3"]);
    }
}
