use ufoplot::spatial::PointIndex;

#[test]
fn nearest_picks_the_closer_of_two_points() {
    let index = PointIndex::build(&[(10.0, 10.0), (500.0, 500.0)]);
    assert_eq!(index.nearest(20.0, 20.0), Some(0));
    assert_eq!(index.nearest(400.0, 450.0), Some(1));
}

#[test]
fn nearest_always_answers_for_a_nonempty_index() {
    let index = PointIndex::build(&[(100.0, 700.0)]);
    // However far the query is, it attaches to the nearest point.
    assert_eq!(index.nearest(-10_000.0, 10_000.0), Some(0));
}

#[test]
fn empty_index_returns_none() {
    let index = PointIndex::build(&[]);
    assert_eq!(index.nearest(0.0, 0.0), None);
}

/// Deterministic LCG so the cross-check needs no external randomness.
fn pseudo_random_points(n: usize) -> Vec<(f32, f32)> {
    let mut state: u64 = 0x2545F491_4F6CDD1D;
    let mut next = || {
        state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        ((state >> 33) % 10_000) as f32 / 10.0
    };
    (0..n).map(|_| (next(), next())).collect()
}

fn brute_force_nearest(points: &[(f32, f32)], x: f32, y: f32) -> usize {
    let mut best = (f32::INFINITY, 0);
    for (i, &(px, py)) in points.iter().enumerate() {
        let d2 = (px - x) * (px - x) + (py - y) * (py - y);
        if d2 < best.0 {
            best = (d2, i);
        }
    }
    best.1
}

#[test]
fn kd_tree_agrees_with_brute_force() {
    let points = pseudo_random_points(257);
    let index = PointIndex::build(&points);
    assert_eq!(index.len(), 257);

    // Same generator seed as the indexed points, nudged off-grid so queries
    // never coincide with an indexed position.
    let queries: Vec<(f32, f32)> = pseudo_random_points(64)
        .iter()
        .map(|&(x, y)| (x + 3.7, y - 2.3))
        .collect();
    for &(qx, qy) in &queries {
        let expected = brute_force_nearest(&points, qx, qy);
        let got = index.nearest(qx, qy).unwrap();
        let (ex, ey) = points[expected];
        let (gx, gy) = points[got];
        let ed = (ex - qx).powi(2) + (ey - qy).powi(2);
        let gd = (gx - qx).powi(2) + (gy - qy).powi(2);
        // Equidistant points may legitimately differ in index.
        assert_eq!(gd, ed, "query ({qx},{qy}): got {got}, expected {expected}");
    }
}

#[test]
fn collinear_points_are_handled() {
    let points: Vec<(f32, f32)> = (0..50).map(|i| (i as f32 * 10.0, 400.0)).collect();
    let index = PointIndex::build(&points);
    assert_eq!(index.nearest(222.0, 0.0), Some(22));
    assert_eq!(index.nearest(-50.0, 400.0), Some(0));
    assert_eq!(index.nearest(10_000.0, 400.0), Some(49));
}
