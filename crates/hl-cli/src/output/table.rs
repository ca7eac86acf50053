#[derive(Clone, Copy, Debug)]
pub struct TableOptions {
    pub max_width: Option<usize>,
    pub color: bool,
}

const MIN_COLUMN: usize = 6;
const GAP: &str = "  ";

/// Render an aligned plain-text table.
///
/// Columns shrink (widest first, never below the header or six characters)
/// until the table fits `max_width`; overflowing cells end in `…`.
#[must_use]
pub fn render_entity_table(
    headers: &[&str],
    rows: &[Vec<String>],
    options: TableOptions,
) -> String {
    let mut widths = headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            rows.iter()
                .filter_map(|row| row.get(index))
                .map(|cell| cell.chars().count())
                .chain([header.len(), MIN_COLUMN])
                .max()
                .unwrap_or(MIN_COLUMN)
        })
        .collect::<Vec<_>>();

    if let Some(max_width) = options.max_width {
        shrink_to_fit(&mut widths, headers, max_width);
    }

    let header_line = headers
        .iter()
        .zip(&widths)
        .map(|(header, width)| pad(&truncate(header, *width), *width, false))
        .collect::<Vec<_>>()
        .join(GAP);
    let divider = "-".repeat(header_line.chars().count());

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(header_line);
    lines.push(divider);
    for row in rows {
        let line = widths
            .iter()
            .enumerate()
            .map(|(index, width)| {
                let cell = truncate(row.get(index).map_or("-", String::as_str), *width);
                let padded = pad(&cell, *width, looks_numeric(&cell));
                if options.color {
                    colorize(&padded, &cell)
                } else {
                    padded
                }
            })
            .collect::<Vec<_>>()
            .join(GAP);
        lines.push(line);
    }
    lines.join("\n")
}

fn shrink_to_fit(widths: &mut [usize], headers: &[&str], max_width: usize) {
    let gaps = widths.len().saturating_sub(1) * GAP.len();
    while widths.iter().sum::<usize>() + gaps > max_width {
        let widest = widths
            .iter()
            .enumerate()
            .filter(|(index, width)| **width > headers[*index].len().max(MIN_COLUMN))
            .max_by_key(|(_, width)| **width)
            .map(|(index, _)| index);
        let Some(index) = widest else {
            break;
        };
        widths[index] -= 1;
    }
}

fn truncate(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    let mut out = value.chars().take(width.saturating_sub(1)).collect::<String>();
    out.push('…');
    out
}

fn pad(value: &str, width: usize, right_align: bool) -> String {
    if right_align {
        format!("{value:>width$}")
    } else {
        format!("{value:<width$}")
    }
}

fn looks_numeric(value: &str) -> bool {
    !value.is_empty() && value.chars().all(|ch| ch.is_ascii_digit() || ch == '.')
}

/// Wrap a padded cell in an ANSI colour chosen from its status-like content.
fn colorize(padded: &str, cell: &str) -> String {
    let code = match cell.to_ascii_uppercase().as_str() {
        "APPROVED" | "ACTIVE" | "VERIFIED" | "ADMIN" | "COMPLETE" | "TRUE" | "SUCCESS" => "32",
        "PENDING" | "NOT_VERIFIED" | "APPROVAL_REQUIRED" | "REVIEW" | "INFO" => "33",
        "REJECTED" | "INACTIVE" | "DECLINED" | "FALSE" | "ERROR" => "31",
        _ => return padded.to_string(),
    };
    format!("\u{1b}[{code}m{padded}\u{1b}[0m")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(max_width: Option<usize>) -> TableOptions {
        TableOptions {
            max_width,
            color: false,
        }
    }

    #[test]
    fn alignment_handles_mixed_widths() {
        let rows = vec![
            vec!["1".to_string(), "ACTIVE".to_string(), "Oak".to_string()],
            vec![
                "200".to_string(),
                "INACTIVE".to_string(),
                "Green Valley Residents".to_string(),
            ],
        ];
        let table = render_entity_table(&["id", "status", "name"], &rows, plain(None));
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("id"));
        assert!(lines[1].chars().all(|c| c == '-'));
        // Numeric ids are right-aligned within the column.
        assert!(lines[2].starts_with("     1"));
        let len = lines[0].chars().count();
        assert!(lines.iter().all(|line| line.chars().count() == len));
    }

    #[test]
    fn narrow_terminal_truncates_widest_column() {
        let rows = vec![vec![
            "1".to_string(),
            "A very long community description that will not fit".to_string(),
        ]];
        let table = render_entity_table(&["id", "description"], &rows, plain(Some(40)));
        assert!(table.lines().all(|line| line.chars().count() <= 40));
        assert!(table.contains('…'));
    }

    #[test]
    fn color_wraps_known_statuses_only() {
        assert!(colorize("PENDING ", "PENDING").starts_with("\u{1b}[33m"));
        assert_eq!(colorize("Maple   ", "Maple"), "Maple   ");
    }
}
