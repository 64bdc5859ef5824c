use super::traits::GridWriter;
use crate::core::models::grid::{Cell, Grid};
use crate::core::models::placement::PlacementRecord;
use std::io::{self, Write};

/// A printable LaTeX article containing the blank puzzle, the words to find, and the
/// solved grid on a separate page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LatexDocument {
    pub challenge_title: String,
    pub solution_title: String,
    /// Number of columns used for the word list.
    pub word_columns: usize,
}

impl Default for LatexDocument {
    fn default() -> Self {
        Self {
            challenge_title: "Challenge".to_string(),
            solution_title: "Solution".to_string(),
            word_columns: 4,
        }
    }
}

impl LatexDocument {
    fn write_preamble(&self, writer: &mut impl Write) -> io::Result<()> {
        writeln!(writer, r"\documentclass[a4paper]{{article}}")?;
        writeln!(writer, r"\usepackage[utf8]{{inputenc}}")?;
        writeln!(writer, r"\usepackage[table]{{xcolor}}")?;
        writeln!(writer, r"\usepackage{{multicol}}")?;
        writeln!(writer, r"\usepackage{{fullpage}}")?;
        writeln!(writer, r"\usepackage{{graphicx}}")?;
        writeln!(writer)?;
        writeln!(writer, r"\begin{{document}}")
    }

    fn write_table(&self, grid: &Grid, reveal: bool, writer: &mut impl Write) -> io::Result<()> {
        write!(writer, r"\resizebox{{\textwidth}}{{!}}{{")?;
        write!(writer, r"\begin{{tabular}}{{|")?;
        for _ in 0..grid.cols() {
            write!(writer, "c|")?;
        }
        writeln!(writer, "}}")?;
        writeln!(writer, r"\hline")?;

        for row in grid.iter_rows() {
            let cells: Vec<String> = row
                .iter()
                .map(|cell| match cell {
                    Cell::Empty => r"\cellcolor{black}".to_string(),
                    Cell::Letter(c) if reveal => escape(&c.to_string()),
                    Cell::Letter(_) => String::new(),
                })
                .collect();
            writeln!(writer, r"{} \\ \hline", cells.join(" & "))?;
        }

        writeln!(writer, r"\end{{tabular}}")?;
        writeln!(writer, "}}")
    }

    fn write_word_list(&self, words: &[PlacementRecord], writer: &mut impl Write) -> io::Result<()> {
        if words.is_empty() {
            return Ok(());
        }
        let mut sorted: Vec<&str> = words.iter().map(PlacementRecord::word).collect();
        sorted.sort_by(|a, b| {
            (a.chars().count(), a.chars().next())
                .cmp(&(b.chars().count(), b.chars().next()))
                .then_with(|| a.cmp(b))
        });

        writeln!(writer, r"\section*{{Words used for the problem}}")?;
        writeln!(writer, r"\begin{{multicols}}{{{}}}", self.word_columns)?;
        writeln!(writer, r"\noindent")?;
        for word in sorted {
            writeln!(writer, r"{}\\", escape(word))?;
        }
        writeln!(writer, r"\end{{multicols}}")
    }
}

impl GridWriter for LatexDocument {
    fn write_to(
        &self,
        grid: &Grid,
        words: &[PlacementRecord],
        writer: &mut impl Write,
    ) -> io::Result<()> {
        self.write_preamble(writer)?;

        writeln!(writer, r"\section*{{{}}}", escape(&self.challenge_title))?;
        self.write_table(grid, false, writer)?;
        writeln!(writer)?;
        self.write_word_list(words, writer)?;

        writeln!(writer, r"\newpage")?;
        writeln!(writer, r"\section*{{{}}}", escape(&self.solution_title))?;
        self.write_table(grid, true, writer)?;

        writeln!(writer, r"\end{{document}}")
    }
}

/// Escapes the characters LaTeX treats specially in running text.
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' | '%' | '$' | '#' | '_' | '{' | '}' => {
                out.push('\\');
                out.push(c);
            }
            '~' => out.push_str(r"\textasciitilde{}"),
            '^' => out.push_str(r"\textasciicircum{}"),
            '\\' => out.push_str(r"\textbackslash{}"),
            _ => out.push(c),
        }
    }
    out
}
