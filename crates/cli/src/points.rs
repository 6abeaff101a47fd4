//! Point files in and hull documents out.
//!
//! - `.csv`: header with `x` and `y` columns (extra columns ignored), read with
//!   the lazy polars reader and cast to `f64`.
//! - `.json`: array of `[x, y]` pairs.

use anyhow::{bail, Context, Result};
use hull2::{Hull, Vec2};
use polars::prelude::*;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::Path;

/// Hull output document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HullDoc {
    pub input_points: usize,
    pub vertices: usize,
    pub area: f64,
    /// Counterclockwise, first vertex not repeated.
    pub hull: Vec<[f64; 2]>,
    /// Same ring closed for plotting.
    pub closed: Vec<[f64; 2]>,
}

impl HullDoc {
    pub fn new(input_points: usize, hull: &Hull<f64>) -> Self {
        Self {
            input_points,
            vertices: hull.len(),
            area: hull.signed_area(),
            hull: hull.vertices().iter().map(|v| [v.x, v.y]).collect(),
            closed: hull.closed_ring().map(|v| [v.x, v.y]).collect(),
        }
    }
}

pub fn read_points(path: &Path) -> Result<Vec<Vec2<f64>>> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("csv") => read_csv(path),
        Some("json") => read_json(path),
        _ => bail!(
            "unsupported point file {} (expected .csv or .json)",
            path.display()
        ),
    }
}

fn read_csv(path: &Path) -> Result<Vec<Vec2<f64>>> {
    let df = LazyCsvReader::new(path)
        .with_infer_schema_length(Some(100))
        .finish()
        .with_context(|| format!("opening {}", path.display()))?
        .select([
            col("x").cast(DataType::Float64),
            col("y").cast(DataType::Float64),
        ])
        .collect()
        .with_context(|| format!("reading x/y columns from {}", path.display()))?;
    let xs = df.column("x")?.f64()?;
    let ys = df.column("y")?.f64()?;
    xs.into_iter()
        .zip(ys.into_iter())
        .enumerate()
        .map(|(row, xy)| match xy {
            (Some(x), Some(y)) => Ok(Vec2::new(x, y)),
            _ => bail!("{} row {row}: missing x or y", path.display()),
        })
        .collect()
}

fn read_json(path: &Path) -> Result<Vec<Vec2<f64>>> {
    let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let raw: Vec<[f64; 2]> = serde_json::from_slice(&bytes)
        .with_context(|| format!("parsing {} as [[x, y], ...]", path.display()))?;
    Ok(raw.into_iter().map(|[x, y]| Vec2::new(x, y)).collect())
}

pub fn write_points_csv(path: &Path, points: &[Vec2<f64>]) -> Result<()> {
    ensure_parent(path)?;
    let xs: Vec<f64> = points.iter().map(|p| p.x).collect();
    let ys: Vec<f64> = points.iter().map(|p| p.y).collect();
    let mut df = df!("x" => xs, "y" => ys)?;
    let mut file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    CsvWriter::new(&mut file)
        .finish(&mut df)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

pub fn write_hull_doc(path: &Path, doc: &HullDoc) -> Result<()> {
    ensure_parent(path)?;
    fs::write(path, serde_json::to_vec_pretty(doc)?)
        .with_context(|| format!("writing {}", path.display()))
}

pub fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating dir {}", parent.display()))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use hull2::HullCfg;
    use tempfile::tempdir;

    #[test]
    fn csv_roundtrip_keeps_points() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested/points.csv");
        let pts = vec![Vec2::new(0.25, 0.5), Vec2::new(1.0, 0.0), Vec2::new(0.0, 1.0)];
        write_points_csv(&path, &pts).unwrap();
        let back = read_points(&path).unwrap();
        assert_eq!(back.len(), 3);
        for (a, b) in back.iter().zip(&pts) {
            assert!((a - b).norm() < 1e-12);
        }
    }

    #[test]
    fn csv_integer_columns_are_cast() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("ints.csv");
        fs::write(&path, "id,x,y\n0,0,0\n1,2,0\n2,0,2\n").unwrap();
        let pts = read_points(&path).unwrap();
        assert_eq!(pts, vec![Vec2::new(0.0, 0.0), Vec2::new(2.0, 0.0), Vec2::new(0.0, 2.0)]);
    }

    #[test]
    fn json_points() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("points.json");
        fs::write(&path, "[[0, 0], [1, 1], [2, 2]]").unwrap();
        assert_eq!(read_points(&path).unwrap().len(), 3);
        fs::write(&path, "{\"x\": 1}").unwrap();
        assert!(read_points(&path).is_err());
    }

    #[test]
    fn unknown_extension_rejected() {
        let err = read_points(Path::new("points.txt")).unwrap_err();
        assert!(err.to_string().contains("expected .csv or .json"));
    }

    #[test]
    fn hull_doc_closes_ring() {
        let pts = vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(1.0, 0.0),
            Vec2::new(1.0, 1.0),
            Vec2::new(0.0, 1.0),
            Vec2::new(0.5, 0.5),
        ];
        let hull = Hull::from_points(&pts, HullCfg::default()).unwrap();
        let doc = HullDoc::new(pts.len(), &hull);
        assert_eq!(doc.input_points, 5);
        assert_eq!(doc.vertices, 4);
        assert_eq!(doc.hull[0], [0.0, 0.0]);
        assert_eq!(doc.closed.len(), 5);
        assert_eq!(doc.closed[4], doc.closed[0]);
        assert!((doc.area - 1.0).abs() < 1e-12);
    }
}
