#![allow(dead_code)]
use nv_version::Version;

/// Parses a version string, panicking on malformed input (intended for tests).
pub fn version(text: &str) -> Version {
    Version::parse(text).expect("Failed to parse test version")
}

/// Returns versions within the packing range, sorted ascending.
pub fn sorted_versions() -> Vec<Version> {
    vec![
        Version::new(0, 0, 0),
        Version::new(0, 0, 1),
        Version::new(0, 1, 0),
        Version::new(0, 999, 999),
        Version::new(1, 0, 0),
        Version::new(1, 2, 3),
        Version::new(1, 2, 10),
        Version::new(1, 10, 0),
        Version::new(2, 0, 0),
        Version::new(10, 0, 0),
    ]
}

/// Returns a grid of triples covering equal and differing components.
pub fn triple_grid() -> Vec<(i32, i32, i32)> {
    let values = [0, 1, 2, 999];
    let mut grid = Vec::new();
    for &major in &values {
        for &minor in &values {
            for &micro in &values {
                grid.push((major, minor, micro));
            }
        }
    }
    grid
}
