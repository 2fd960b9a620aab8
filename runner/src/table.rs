use itertools::Itertools;

use crate::run::Report;

const HEADERS: [&str; 3] = ["Day", "First Answer", "Second Answer"];

/// One line of the answer table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub day: String,
    pub first: String,
    pub second: String,
}

impl Row {
    fn cells(&self) -> [&str; 3] {
        [&self.day, &self.first, &self.second]
    }
}

impl From<&Report> for Row {
    fn from(report: &Report) -> Self {
        let (first, second) = match &report.answers {
            Ok([first, second]) => (first.clone(), second.clone()),
            Err(error) => (
                format!("error: {}", error.chain().map(|cause| cause.to_string()).join(": ")),
                "-".to_string(),
            ),
        };
        Row {
            day: report.solution.to_string(),
            first,
            second,
        }
    }
}

/// Draws the rows as a box table under the `Day`, `First Answer` and
/// `Second Answer` headers.
pub fn render(rows: &[Row]) -> String {
    let mut widths = HEADERS.map(|header| header.chars().count());
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row.cells()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let rule = |left: &str, middle: &str, right: &str| {
        let segments = widths.iter().map(|width| "─".repeat(width + 2)).join(middle);
        format!("{left}{segments}{right}")
    };
    let line = |cells: [&str; 3]| {
        let padded = cells
            .iter()
            .zip(&widths)
            .map(|(cell, &width)| format!(" {cell:<width$} "))
            .join("│");
        format!("│{padded}│")
    };

    let mut lines = vec![rule("┌", "┬", "┐"), line(HEADERS), rule("├", "┼", "┤")];
    lines.extend(rows.iter().map(|row| line(row.cells())));
    lines.push(rule("└", "┴", "┘"));
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draws_a_boxed_table() {
        let rows = [Row {
            day: "2020 day 1".to_string(),
            first: "514579".to_string(),
            second: "241861950".to_string(),
        }];

        let expected = "\
┌────────────┬──────────────┬───────────────┐
│ Day        │ First Answer │ Second Answer │
├────────────┼──────────────┼───────────────┤
│ 2020 day 1 │ 514579       │ 241861950     │
└────────────┴──────────────┴───────────────┘";
        assert_eq!(render(&rows), expected);
    }

    #[test]
    fn empty_table_keeps_its_headers() {
        assert_eq!(render(&[]).lines().count(), 4);
    }

    #[test]
    fn long_cells_widen_their_column() {
        let rows = [
            Row {
                day: "2025 day 8".to_string(),
                first: "error: 2025 day 8 part 1 failed: Parse failed".to_string(),
                second: "-".to_string(),
            },
            Row {
                day: "2025 day 9".to_string(),
                first: "50".to_string(),
                second: "24".to_string(),
            },
        ];

        let table = render(&rows);
        let widths = table.lines().map(|line| line.chars().count()).collect::<Vec<_>>();
        assert!(widths.iter().all(|&w| w == widths[0]));
    }
}
