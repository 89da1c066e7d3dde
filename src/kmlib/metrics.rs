use crate::kmlib::Coord;

/// Euclidean distance between two positions.
pub fn euclidean(a: &Coord, b: &Coord) -> f64 {
    ((a.x - b.x).powi(2) + (a.y - b.y).powi(2)).sqrt()
}

/// Squared displacement between an old and a new centroid position.
///
/// The convergence check compares this against epsilon squared, so the
/// square root in [`euclidean`] is never paid per iteration.
pub fn displacement_sq(a: &Coord, b: &Coord) -> f64 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    dx * dx + dy * dy
}
