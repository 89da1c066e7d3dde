use crate::kmlib::errors::{Error, Result};
use crate::kmlib::Point;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Write one `x<TAB>y<TAB>cluster` line per point, preserving input order.
///
/// The target file is created or overwritten. A point that no assignment
/// pass ever touched writes a cluster of -1; that only happens when the
/// iteration cap is zero.
pub fn write_results(path: &Path, points: &[Point]) -> Result<()> {
    let as_output = |e: std::io::Error| Error::OutputUnavailable {
        path: path.to_path_buf(),
        source: e,
    };

    let mut writer = BufWriter::new(File::create(path).map_err(as_output)?);
    for point in points {
        let cluster = point.cluster.map_or(-1, |c| c as i64);
        writeln!(writer, "{}\t{}\t{}", point.pos.x, point.pos.y, cluster).map_err(as_output)?;
    }
    writer.flush().map_err(as_output)?;

    Ok(())
}
