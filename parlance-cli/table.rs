//! Column-aligned table output.
//!
//! Rows are queued and laid out on [`TableWriter::flush`] using elastic
//! tabstops: consecutive rows that share a column form a block, and every cell
//! in the block is padded to the widest cell plus the configured padding. The
//! last cell of a row is never padded. Widths are measured in terminal columns,
//! so styled cells and wide characters align correctly.

use std::io::{self, Write};
use std::mem;

use console::measure_text_width;

/// Writer that aligns queued rows into columns.
#[derive(Debug)]
pub struct TableWriter<W: Write> {
    sink: W,
    padding: usize,
    lines: Vec<Vec<String>>,
}

impl<W: Write> TableWriter<W> {
    /// Creates a table writer.
    ///
    /// # Parameters
    ///
    /// * `sink` - Destination for the rendered table
    /// * `padding` - Spaces added after the widest cell of each column
    pub fn new(sink: W, padding: usize) -> Self {
        Self {
            sink,
            padding,
            lines: Vec::new(),
        }
    }

    /// Queues a row.
    ///
    /// `prefix` is prepended to the first cell and counts toward its width.
    /// A newline inside a cell ends the line there; the rest of the cell and
    /// the following cells continue on a new line, without the prefix.
    pub fn write_row<S: AsRef<str>>(&mut self, prefix: &str, cells: &[S]) {
        let mut line = Vec::with_capacity(cells.len());
        let mut cell = prefix.to_string();

        for (i, text) in cells.iter().enumerate() {
            if i > 0 {
                line.push(mem::take(&mut cell));
            }
            let mut parts = text.as_ref().split('\n');
            cell.push_str(parts.next().unwrap_or_default());
            for part in parts {
                line.push(mem::take(&mut cell));
                self.lines.push(mem::take(&mut line));
                cell.push_str(part);
            }
        }

        line.push(cell);
        self.lines.push(line);
    }

    /// Number of lines waiting for [`TableWriter::flush`].
    pub fn pending(&self) -> usize {
        self.lines.len()
    }

    /// Lays out and writes every queued row, then flushes the sink.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to or flushing the sink fails. Queued rows
    /// are discarded either way.
    pub fn flush(&mut self) -> io::Result<()> {
        let mut widths = Vec::new();
        let result = self.format(&mut widths, 0, self.lines.len());
        self.lines.clear();
        result?;
        self.sink.flush()
    }

    /// Consumes the writer, returning the sink.
    pub fn into_inner(self) -> W {
        self.sink
    }

    fn format(&mut self, widths: &mut Vec<usize>, mut line0: usize, line1: usize) -> io::Result<()> {
        let column = widths.len();
        let mut this = line0;

        while this < line1 {
            if column + 1 >= self.lines[this].len() {
                this += 1;
                continue;
            }

            // A column block starts here; emit the rows before it first.
            self.write_lines(widths, line0, this)?;
            line0 = this;

            let mut width = 0;
            while this < line1 {
                let line = &self.lines[this];
                if column + 1 >= line.len() {
                    break;
                }
                width = width.max(measure_text_width(&line[column]) + self.padding);
                this += 1;
            }

            widths.push(width);
            self.format(widths, line0, this)?;
            widths.pop();
            line0 = this;
        }

        self.write_lines(widths, line0, line1)
    }

    fn write_lines(&mut self, widths: &[usize], line0: usize, line1: usize) -> io::Result<()> {
        let Self { sink, lines, .. } = self;

        for line in &lines[line0..line1] {
            for (j, cell) in line.iter().enumerate() {
                sink.write_all(cell.as_bytes())?;
                if let Some(&width) = widths.get(j) {
                    let fill = width.saturating_sub(measure_text_width(cell));
                    write!(sink, "{:fill$}", "")?;
                }
            }
            sink.write_all(b"\n")?;
        }
        Ok(())
    }
}
