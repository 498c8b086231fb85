//! CSV writer for spectral tables.

use std::path::Path;

use helios_spectrum::SpectralTable;
use tracing::debug;

use crate::error::IoError;
use crate::record::PixelRecord;

/// Write a spectral table to a long-format CSV file.
///
/// Emits the layout accepted by [`read_csv`](crate::read_csv): one row per
/// pixel, segments in table order, with the segment index and exposure time
/// repeated on every row.
///
/// # Errors
///
/// Returns [`IoError::Csv`] or [`IoError::Io`] on write failures.
#[tracing::instrument(skip_all, fields(path = %path.display()))]
pub fn write_csv(path: &Path, table: &SpectralTable) -> Result<(), IoError> {
    let mut writer = csv::Writer::from_path(path)?;

    for (i, seg) in table.segments().iter().enumerate() {
        for px in 0..seg.len() {
            writer.serialize(PixelRecord {
                segment: i,
                wavelength: seg.wavelength()[px],
                flux: seg.flux()[px],
                error: seg.error()[px],
                error_lower: seg.error_lower()[px],
                gross: seg.gross()[px],
                gcounts: seg.gcounts()[px],
                exptime: seg.exptime(),
            })?;
        }
    }
    writer.flush()?;

    debug!(
        n_segments = table.n_segments(),
        n_pixels = table.n_pixels(),
        "spectral table written"
    );
    Ok(())
}
