//! Line-oriented encoding of word files.
//!
//! Each input line holds one data word written as '0'/'1' characters. Each output line holds the
//! matching code word in the same format, in input order. The first malformed line aborts the run;
//! nothing is written for it.

use crate::ecc::{assemble, code_length, DataWord};
use crate::error::{Error, Result};
use log::{debug, trace};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Totals for one encoding run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EncodeSummary {
    /// Number of lines encoded
    pub lines: usize,
    /// Data bits read across all lines
    pub data_bits: usize,
    /// Code bits written across all lines
    pub code_bits: usize,
}

/// Encodes every line of `reader` and writes one code word per line to `writer`.
///
/// Accepts `\n` and `\r\n` line endings and always writes `\n`. Errors from a specific line are
/// wrapped in [`Error::Line`] with its 1-based number.
pub fn encode_lines<R, W>(reader: R, mut writer: W) -> Result<EncodeSummary>
where
    R: BufRead,
    W: Write,
{
    let mut summary = EncodeSummary::default();

    for (idx, line) in reader.lines().enumerate() {
        let number = idx + 1;
        let line = line.map_err(|err| Error::from(err).at_line(number))?;

        let word: DataWord = line.parse().map_err(|err: Error| err.at_line(number))?;
        let code = assemble(&word, code_length(word.len())).map_err(|err| err.at_line(number))?;

        writeln!(writer, "{}", code)?;
        trace!("line {}: {} -> {}", number, word, code);

        summary.lines += 1;
        summary.data_bits += word.len();
        summary.code_bits += code.len();
    }

    writer.flush()?;
    Ok(summary)
}

/// Encodes the word file at `input` into a new file at `output`.
///
/// The input is opened before the output is created, so a missing input leaves no output file
/// behind. Both files are closed when this returns, on success or failure.
pub fn encode_file<P, Q>(input: P, output: Q) -> Result<EncodeSummary>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let input = input.as_ref();
    let output = output.as_ref();

    let reader = File::open(input).map_err(|source| Error::Open {
        path: input.to_path_buf(),
        source,
    })?;
    let writer = File::create(output).map_err(|source| Error::Create {
        path: output.to_path_buf(),
        source,
    })?;

    debug!("encoding {} -> {}", input.display(), output.display());
    let summary = encode_lines(BufReader::new(reader), BufWriter::new(writer))?;
    debug!(
        "encoded {} lines ({} data bits, {} code bits)",
        summary.lines, summary.data_bits, summary.code_bits
    );

    Ok(summary)
}
