use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use hull2::prelude::*;
use serde_json::json;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod points;
mod provenance;

use points::{read_points, write_hull_doc, write_points_csv, HullDoc};
use provenance::{current_git_rev, write_sidecar, Payload};

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Convex hull runner: sample point clouds, compute hulls, record provenance")]
struct Cmd {
    /// Optional run tag; propagated to logs and provenance
    #[arg(long)]
    tag: Option<String>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Draw uniform points in the unit square and write them as CSV (x,y)
    Sample {
        #[arg(long, default_value_t = 20)]
        n: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        /// Replay index; (seed, index) reproduces a single draw
        #[arg(long, default_value_t = 0)]
        index: u64,
        #[arg(long)]
        out: PathBuf,
    },
    /// Compute the convex hull of a point file (.csv with x,y columns or .json pairs)
    Hull {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
        /// Retain points lying on hull edges
        #[arg(long)]
        keep_collinear: bool,
        /// Use the exact orientation predicate
        #[arg(long)]
        exact: bool,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Sample {
            n,
            seed,
            index,
            out,
        } => sample(n, ReplayToken { seed, index }, &out, cmd.tag),
        Action::Hull {
            input,
            out,
            keep_collinear,
            exact,
        } => {
            let cfg = hull_cfg(keep_collinear, exact);
            hull(&input, &out, cfg, cmd.tag).map(|_| ())
        }
        Action::Report => report(cmd.tag),
    }
}

fn hull_cfg(keep_collinear: bool, exact: bool) -> HullCfg {
    HullCfg {
        collinear: if keep_collinear {
            CollinearPolicy::Keep
        } else {
            CollinearPolicy::Drop
        },
        predicate: if exact {
            Predicate::Exact
        } else {
            Predicate::Fast
        },
    }
}

fn sample(n: usize, tok: ReplayToken, out: &Path, tag: Option<String>) -> Result<()> {
    if n == 0 {
        bail!("--n must be positive");
    }
    tracing::info!(
        n,
        seed = tok.seed,
        index = tok.index,
        out = %out.display(),
        tag = ?tag,
        "sample"
    );
    let pts = uniform_points(n, SampleBox::default(), tok);
    write_points_csv(out, &pts)?;
    let payload = Payload::new(
        json!({ "n": n, "seed": tok.seed, "index": tok.index, "box": [[0.0, 0.0], [1.0, 1.0]] }),
        tag,
    );
    write_sidecar(out, payload)?;
    Ok(())
}

fn hull(input: &Path, out: &Path, cfg: HullCfg, tag: Option<String>) -> Result<HullDoc> {
    tracing::info!(input = %input.display(), out = %out.display(), cfg = ?cfg, tag = ?tag, "hull");
    let pts = read_points(input)?;
    let hull = Hull::from_points(&pts, cfg)?;
    let doc = HullDoc::new(pts.len(), &hull);
    tracing::info!(
        points = doc.input_points,
        vertices = doc.vertices,
        area = doc.area,
        "hull_done"
    );
    if hull.is_degenerate() {
        tracing::warn!(vertices = doc.vertices, "degenerate hull (no enclosed area)");
    }
    write_hull_doc(out, &doc)?;
    let payload = Payload::new(
        json!({
            "input": input.to_string_lossy(),
            "collinear": format!("{:?}", cfg.collinear),
            "predicate": format!("{:?}", cfg.predicate),
        }),
        tag,
    );
    write_sidecar(out, payload)?;
    Ok(doc)
}

fn report(tag: Option<String>) -> Result<()> {
    let obj = json!({
        "code_rev": current_git_rev(),
        "hull2_version": hull2::VERSION,
        "tag": tag,
        "params": {},
        "outputs": []
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn sample_then_hull() {
        let dir = tempdir().unwrap();
        let pts_path = dir.path().join("points.csv");
        sample(20, ReplayToken { seed: 3, index: 0 }, &pts_path, Some("t".into())).unwrap();
        assert!(dir.path().join("points.csv.provenance.json").exists());

        let out = dir.path().join("out/hull.json");
        let doc = hull(&pts_path, &out, HullCfg::default(), None).unwrap();
        assert_eq!(doc.input_points, 20);
        assert!(doc.vertices >= 3 && doc.vertices <= 20);
        assert!(doc.area > 0.0 && doc.area <= 1.0);

        let parsed: HullDoc = serde_json::from_slice(&fs::read(&out).unwrap()).unwrap();
        assert_eq!(parsed, doc);
        assert!(dir.path().join("out/hull.json.provenance.json").exists());
    }

    #[test]
    fn hull_flags_map_to_cfg() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("line.json");
        fs::write(&input, "[[0, 0], [1, 1], [2, 2], [1, 1]]").unwrap();

        let d_out = dir.path().join("d.json");
        let dropped = hull(&input, &d_out, hull_cfg(false, true), None).unwrap();
        assert_eq!(dropped.hull, vec![[0.0, 0.0], [2.0, 2.0]]);
        assert_eq!(dropped.area, 0.0);

        let keep = hull(&input, &dir.path().join("k.json"), hull_cfg(true, false), None).unwrap();
        assert_eq!(keep.hull, vec![[0.0, 0.0], [1.0, 1.0], [2.0, 2.0]]);
    }

    #[test]
    fn sample_rejects_zero_points() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("p.csv");
        assert!(sample(0, ReplayToken { seed: 0, index: 0 }, &out, None).is_err());
        assert!(!out.exists());
    }

    #[test]
    fn cli_parses_hull_flags() {
        let cmd = Cmd::try_parse_from([
            "cli",
            "--tag",
            "x",
            "hull",
            "--input",
            "a.csv",
            "--out",
            "b.json",
            "--keep-collinear",
        ])
        .unwrap();
        assert_eq!(cmd.tag.as_deref(), Some("x"));
        match cmd.action {
            Action::Hull {
                keep_collinear,
                exact,
                ..
            } => assert!(keep_collinear && !exact),
            _ => panic!("expected hull"),
        }
    }
}
