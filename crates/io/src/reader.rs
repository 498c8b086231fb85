//! CSV reader for spectral tables.

use std::path::Path;

use helios_spectrum::{Segment, SpectralTable};
use tracing::debug;

use crate::error::IoError;
use crate::record::PixelRecord;

/// Accumulates one segment's columns while scanning rows.
#[derive(Default)]
struct SegmentBuilder {
    wavelength: Vec<f64>,
    flux: Vec<f64>,
    error: Vec<f64>,
    error_lower: Vec<f64>,
    gross: Vec<f64>,
    gcounts: Vec<f64>,
    exptime: f64,
}

impl SegmentBuilder {
    fn push(&mut self, record: &PixelRecord) {
        self.wavelength.push(record.wavelength);
        self.flux.push(record.flux);
        self.error.push(record.error);
        self.error_lower.push(record.error_lower);
        self.gross.push(record.gross);
        self.gcounts.push(record.gcounts);
        self.exptime = record.exptime;
    }

    fn build(self) -> Result<Segment, IoError> {
        Ok(Segment::new(
            self.wavelength,
            self.flux,
            self.error,
            self.error_lower,
            self.gross,
            self.gcounts,
            self.exptime,
        )?)
    }
}

/// Read a spectral table from a long-format CSV file.
///
/// The file must carry the header
/// `segment,wavelength,flux,error,error_lower,gross,gcounts,exptime` and one
/// row per pixel. Segment indices must start at 0, be contiguous, and appear
/// in blocks; the exposure time must be constant within a segment.
///
/// # Errors
///
/// Returns [`IoError::FileNotFound`] if the file does not exist,
/// [`IoError::Csv`] on malformed rows, [`IoError::Format`] on layout
/// violations, or [`IoError::Spectrum`] if the assembled table fails
/// validation.
#[tracing::instrument(skip_all, fields(path = %path.display()))]
pub fn read_csv(path: &Path) -> Result<SpectralTable, IoError> {
    if !path.exists() {
        return Err(IoError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let mut reader = csv::Reader::from_path(path)?;

    let mut segments: Vec<Segment> = Vec::new();
    let mut current: Option<SegmentBuilder> = None;
    let mut current_index = 0usize;

    for (i, result) in reader.deserialize().enumerate() {
        let line = i + 2; // header is line 1
        let record: PixelRecord = result?;

        match current.as_mut() {
            None => {
                if record.segment != 0 {
                    return Err(IoError::Format {
                        line,
                        details: format!(
                            "segment indices must start at 0, got {}",
                            record.segment
                        ),
                    });
                }
                let mut builder = SegmentBuilder::default();
                builder.push(&record);
                current = Some(builder);
            }
            Some(builder) if record.segment == current_index => {
                if record.exptime != builder.exptime {
                    return Err(IoError::Format {
                        line,
                        details: format!(
                            "exptime changed within segment {}: {} != {}",
                            current_index, record.exptime, builder.exptime
                        ),
                    });
                }
                builder.push(&record);
            }
            Some(builder) if record.segment == current_index + 1 => {
                // Flush the finished segment; the builder restarts empty.
                segments.push(std::mem::take(builder).build()?);
                current_index += 1;
                builder.push(&record);
            }
            Some(_) => {
                return Err(IoError::Format {
                    line,
                    details: format!(
                        "segment indices must be contiguous: expected {} or {}, got {}",
                        current_index,
                        current_index + 1,
                        record.segment
                    ),
                });
            }
        }
    }

    if let Some(builder) = current {
        segments.push(builder.build()?);
    }

    let table = SpectralTable::new(segments)?;
    debug!(
        n_segments = table.n_segments(),
        n_pixels = table.n_pixels(),
        "spectral table read"
    );
    Ok(table)
}
