//! PPM encoding and decoding of the finished raster
//!
//! Supports the two pixel-triplet variants: `P3` (one human-readable decimal
//! triplet per line) and `P6` (three raw bytes per cell, row-major, no
//! padding). The writer takes any sink, the reader any buffered source, so
//! round-trips run against in-memory buffers as easily as stdout or files.

use crate::io::configuration::MAX_CHANNEL_VALUE;
use crate::io::error::{Result, ppm_parse_error};
use crate::spatial::Grid;
use std::io::{BufRead, Write};

/// Raster output variant selector
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PpmFormat {
    /// Human-readable decimal triplets (`P3`)
    Plain,
    /// Raw binary triplets (`P6`)
    #[default]
    Binary,
}

impl PpmFormat {
    /// The magic number identifying this variant in a PPM header
    pub const fn magic(self) -> &'static str {
        match self {
            Self::Plain => "P3",
            Self::Binary => "P6",
        }
    }
}

/// Write the grid to a sink in the selected PPM variant
///
/// Emits the magic number, the raster dimensions, and the maximum channel
/// value, followed by one triplet per cell in row-major order.
///
/// # Errors
///
/// Returns an error when writing to the sink fails.
pub fn write_ppm<W: Write>(grid: &Grid, format: PpmFormat, sink: &mut W) -> Result<()> {
    writeln!(sink, "{}", format.magic())?;
    writeln!(sink, "{} {}", grid.width(), grid.height())?;
    writeln!(sink, "{MAX_CHANNEL_VALUE}")?;

    match format {
        PpmFormat::Plain => {
            for cell in grid.iter_row_major() {
                writeln!(sink, "{} {} {}", cell.color[0], cell.color[1], cell.color[2])?;
            }
        }
        PpmFormat::Binary => {
            for cell in grid.iter_row_major() {
                sink.write_all(&cell.color)?;
            }
        }
    }

    sink.flush()?;
    Ok(())
}

/// A decoded PPM raster
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PpmImage {
    /// Raster width in pixels
    pub width: usize,
    /// Raster height in pixels
    pub height: usize,
    /// Maximum channel value declared in the header
    pub max_value: u8,
    /// Row-major channel triplets
    pub pixels: Vec<[u8; 3]>,
}

/// Decode either PPM variant from a buffered source
///
/// # Errors
///
/// Returns an error for an unsupported magic number, a malformed or
/// out-of-range header value, truncated pixel data, or a plain-variant
/// sample that is not a decimal value within the declared maximum.
pub fn read_ppm<R: BufRead>(source: &mut R) -> Result<PpmImage> {
    let magic = next_token(source)?;
    let binary = match magic.as_str() {
        "P3" => false,
        "P6" => true,
        other => {
            return Err(ppm_parse_error(&format!(
                "unsupported magic number '{other}'"
            )));
        }
    };

    let width = parse_header_value(&next_token(source)?, "width")?;
    let height = parse_header_value(&next_token(source)?, "height")?;
    let max_value = parse_header_value(&next_token(source)?, "maximum channel value")?;
    if max_value == 0 || max_value > MAX_CHANNEL_VALUE as usize {
        return Err(ppm_parse_error(&format!(
            "unsupported maximum channel value {max_value}"
        )));
    }

    let sample_count = width
        .checked_mul(height)
        .and_then(|cells| cells.checked_mul(3))
        .ok_or_else(|| ppm_parse_error(&"raster dimensions overflow"))?;

    let samples = if binary {
        let mut raw = vec![0_u8; sample_count];
        source
            .read_exact(&mut raw)
            .map_err(|err| ppm_parse_error(&format!("truncated binary pixel data: {err}")))?;
        raw
    } else {
        let mut raw = Vec::with_capacity(sample_count);
        for _ in 0..sample_count {
            let token = next_token(source)?;
            let value: usize = token
                .parse()
                .map_err(|err| ppm_parse_error(&format!("malformed sample '{token}': {err}")))?;
            if value > max_value {
                return Err(ppm_parse_error(&format!(
                    "sample {value} exceeds declared maximum {max_value}"
                )));
            }
            raw.push(value as u8);
        }
        raw
    };

    let mut pixels = Vec::with_capacity(width.saturating_mul(height));
    for chunk in samples.chunks_exact(3) {
        if let [r, g, b] = *chunk {
            pixels.push([r, g, b]);
        }
    }

    Ok(PpmImage {
        width,
        height,
        max_value: max_value as u8,
        pixels,
    })
}

fn parse_header_value(token: &str, field: &str) -> Result<usize> {
    token
        .parse()
        .map_err(|err| ppm_parse_error(&format!("malformed {field} '{token}': {err}")))
}

// Reads one whitespace-delimited header token, consuming the single
// delimiter that follows it (which matters before P6 pixel data).
fn next_token<R: BufRead>(source: &mut R) -> Result<String> {
    let mut token = Vec::new();
    let mut byte = [0_u8; 1];
    loop {
        let read = source
            .read(&mut byte)
            .map_err(|err| ppm_parse_error(&format!("read failure: {err}")))?;
        if read == 0 {
            if token.is_empty() {
                return Err(ppm_parse_error(&"unexpected end of data"));
            }
            break;
        }
        if byte[0].is_ascii_whitespace() {
            if token.is_empty() {
                continue;
            }
            break;
        }
        token.push(byte[0]);
    }
    String::from_utf8(token)
        .map_err(|err| ppm_parse_error(&format!("non-UTF-8 header token: {err}")))
}
