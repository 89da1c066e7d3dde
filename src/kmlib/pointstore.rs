use crate::kmlib::errors::{Error, Result};
use std::fs;
use std::path::Path;

/// A bare 2-D position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Coord {
    pub x: f64,
    pub y: f64,
}

impl Coord {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// One input point and the cluster index the most recent assignment pass
/// gave it. `cluster` stays `None` until the first pass runs.
#[derive(Clone, Debug)]
pub struct Point {
    pub pos: Coord,
    pub cluster: Option<usize>,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            pos: Coord::new(x, y),
            cluster: None,
        }
    }
}

/// Read whitespace-separated x/y pairs from a file, preserving their order.
///
/// Tokens are consumed pairwise and ingestion stops at the first token that
/// does not parse as a number, or at a trailing unpaired token. Whatever was
/// read up to that record is kept, so a file whose second line is garbage
/// yields a one-point collection rather than an error.
///
/// `max_points` is an optional safety limit on the collection size; the
/// collection otherwise grows without bound.
pub fn load_points(path: &Path, max_points: Option<usize>) -> Result<Vec<Point>> {
    let content = fs::read_to_string(path).map_err(|e| Error::DataUnavailable {
        path: path.to_path_buf(),
        source: e,
    })?;

    let mut points = Vec::new();
    let mut tokens = content.split_whitespace();
    while let Some(x_tok) = tokens.next() {
        if let Some(cap) = max_points {
            if points.len() >= cap {
                warn!("--max-points {} reached, ignoring the rest of the input", cap);
                break;
            }
        }

        let y_tok = match tokens.next() {
            Some(tok) => tok,
            None => break,
        };
        let (x, y) = match (x_tok.parse::<f64>(), y_tok.parse::<f64>()) {
            (Ok(x), Ok(y)) => (x, y),
            _ => break,
        };
        points.push(Point::new(x, y));
    }

    Ok(points)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn data_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_preserves_order() {
        let file = data_file("1.5 -2.0\n3 4\n-5.25 6\n");
        let points = load_points(file.path(), None).unwrap();
        assert_eq!(points.len(), 3);
        assert_eq!(points[0].pos, Coord::new(1.5, -2.0));
        assert_eq!(points[1].pos, Coord::new(3.0, 4.0));
        assert_eq!(points[2].pos, Coord::new(-5.25, 6.0));
        assert!(points.iter().all(|p| p.cluster.is_none()));
    }

    #[test]
    fn test_load_halts_at_malformed_record() {
        let file = data_file("0.0 0.0\nnot a point\n10 10\n");
        let points = load_points(file.path(), None).unwrap();
        assert_eq!(points.len(), 1);
        assert_eq!(points[0].pos, Coord::new(0.0, 0.0));
    }

    #[test]
    fn test_load_drops_trailing_unpaired_token() {
        let file = data_file("1 2\n3\n");
        let points = load_points(file.path(), None).unwrap();
        assert_eq!(points.len(), 1);
    }

    #[test]
    fn test_load_missing_file_is_data_unavailable() {
        let result = load_points(Path::new("/no/such/kmeans-data.txt"), None);
        assert!(matches!(result, Err(Error::DataUnavailable { .. })));
    }

    #[test]
    fn test_load_respects_max_points() {
        let file = data_file("1 1\n2 2\n3 3\n4 4\n");
        let points = load_points(file.path(), Some(2)).unwrap();
        assert_eq!(points.len(), 2);
        assert_eq!(points[1].pos, Coord::new(2.0, 2.0));
    }

    #[test]
    fn test_load_empty_file() {
        let file = data_file("");
        let points = load_points(file.path(), None).unwrap();
        assert!(points.is_empty());
    }
}
