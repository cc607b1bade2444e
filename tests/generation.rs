//! End-to-end pipeline, persistence, and rendering checks

use fractalwalk::algorithm::executor::{CurveConfig, CurveGenerator};
use fractalwalk::io::{export, render};
use fractalwalk::math::mixing::recommended_steps;
use fractalwalk::spatial::{Point, Region};

fn config(levels: Vec<(i32, i32)>, steps: Option<usize>, seed: u64) -> CurveConfig {
    CurveConfig {
        levels,
        backbite_steps: steps,
        step_multiplier: 100.0,
        seed,
    }
}

#[test]
fn test_generate_produces_a_valid_full_resolution_curve() {
    let Ok(mut generator) =
        CurveGenerator::new(config(vec![(2, 2), (2, 2), (2, 2)], Some(256), 5))
    else {
        unreachable!("valid config rejected");
    };
    let Ok(path) = generator.generate() else {
        unreachable!("generation failed");
    };

    assert_eq!(path.len(), 64);
    assert_eq!(generator.cell_count(), 64);
    assert!(generator.full_region().is_hamiltonian(&path));
}

#[test]
fn test_identical_seeds_reproduce_identical_runs() {
    let run = |seed| -> Vec<Point> {
        let Ok(mut generator) = CurveGenerator::new(config(vec![(2, 3), (3, 2)], Some(100), seed))
        else {
            unreachable!("valid config rejected");
        };
        let Ok(path) = generator.generate() else {
            unreachable!("generation failed");
        };
        path
    };

    assert_eq!(run(1234), run(1234));
    assert_ne!(run(1), run(2));
}

#[test]
fn test_invalid_configurations_fail_fast() {
    assert!(CurveGenerator::new(config(vec![], None, 1)).is_err());
    assert!(CurveGenerator::new(config(vec![(0, 2)], None, 1)).is_err());
    assert!(CurveGenerator::new(config(vec![(4096, 1), (2, 1)], None, 1)).is_err());
}

#[test]
fn test_refine_rejects_out_of_range_levels() {
    let Ok(mut generator) = CurveGenerator::new(config(vec![(2, 2), (2, 2)], Some(0), 1)) else {
        unreachable!("valid config rejected");
    };
    let Ok(base) = generator.sample_base() else {
        unreachable!("base sampling failed");
    };

    assert!(generator.refine(&base, 0).is_err());
    assert!(generator.refine(&base, 2).is_err());
}

#[test]
fn test_mixing_step_count_prefers_explicit_over_derived() {
    let Ok(generator) = CurveGenerator::new(config(vec![(4, 4)], Some(7), 1)) else {
        unreachable!("valid config rejected");
    };
    assert_eq!(generator.mixing_steps(), 7);

    let Ok(derived) = CurveGenerator::new(config(vec![(4, 4)], None, 1)) else {
        unreachable!("valid config rejected");
    };
    assert_eq!(derived.mixing_steps(), recommended_steps(16, 100.0));
}

#[test]
fn test_recommended_steps_scales_with_cell_count() {
    assert_eq!(recommended_steps(0, 100.0), 0);
    assert_eq!(recommended_steps(1, 100.0), 0);
    assert!(recommended_steps(4, 100.0) >= 4);
    assert!(recommended_steps(64, 100.0) > recommended_steps(16, 100.0));
}

#[test]
fn test_save_and_read_round_trip() {
    let Ok(dir) = tempfile::tempdir() else {
        unreachable!("tempdir failed");
    };
    let destination = dir.path().join("path.txt");
    let path = vec![Point::new(0, 0), Point::new(0, 1), Point::new(1, 1)];

    assert!(export::save_path(&path, &destination).is_ok());

    let Ok(contents) = std::fs::read_to_string(&destination) else {
        unreachable!("written file unreadable");
    };
    assert_eq!(contents, "0 0\n0 1\n1 1\n");

    let Ok(restored) = export::read_path(&destination) else {
        unreachable!("round trip failed");
    };
    assert_eq!(restored, path);
}

#[test]
fn test_malformed_path_data_is_reported() {
    let Ok(dir) = tempfile::tempdir() else {
        unreachable!("tempdir failed");
    };
    let destination = dir.path().join("bad.txt");
    assert!(std::fs::write(&destination, "0 0\nnot a pair\n").is_ok());

    assert!(export::read_path(&destination).is_err());
}

#[test]
fn test_format_path_grid_annotates_indices() {
    let Ok(region) = Region::new(2, 2, Point::new(0, 0)) else {
        unreachable!();
    };
    let path = vec![
        Point::new(0, 0),
        Point::new(1, 0),
        Point::new(1, 1),
        Point::new(0, 1),
    ];
    assert_eq!(render::format_path_grid(&path, &region), " 0  3 \n 1  2 \n");

    let partial = vec![Point::new(0, 0)];
    assert!(render::format_path_grid(&partial, &region).contains('.'));
}

#[test]
fn test_path_index_grid_marks_unvisited_cells() {
    let Ok(region) = Region::new(2, 3, Point::new(0, 0)) else {
        unreachable!();
    };
    let path = vec![Point::new(0, 0), Point::new(0, 1)];
    let grid = render::path_index_grid(&path, &region);

    assert_eq!(grid.get([0, 0]).copied().flatten(), Some(0));
    assert_eq!(grid.get([0, 1]).copied().flatten(), Some(1));
    assert_eq!(grid.get([1, 2]).copied().flatten(), None);
}

#[test]
fn test_image_exports_write_files() {
    let Ok(dir) = tempfile::tempdir() else {
        unreachable!("tempdir failed");
    };
    let Ok(region) = Region::new(2, 2, Point::new(0, 0)) else {
        unreachable!();
    };
    let path = vec![
        Point::new(0, 0),
        Point::new(0, 1),
        Point::new(1, 1),
        Point::new(1, 0),
    ];

    let png = dir.path().join("curve.png");
    assert!(render::render_path_png(&path, &region, 4, &png).is_ok());
    assert!(png.exists());

    let gif = dir.path().join("curve.gif");
    assert!(render::render_path_gif(&path, &region, 4, 5, &gif).is_ok());
    assert!(gif.exists());
}
