#![allow(clippy::float_cmp)]

use proptest::prelude::*;

use super::*;

fn rect(l: f64, t: f64, r: f64, b: f64) -> Rect {
    Rect::from_edges(l, t, r, b)
}

// =============================================================
// Point
// =============================================================

#[test]
fn point_new() {
    let p = Point::new(3.0, 4.0);
    assert_eq!(p.x, 3.0);
    assert_eq!(p.y, 4.0);
}

#[test]
fn point_translate() {
    assert_eq!(Point::new(1.0, 2.0).translate(-3.0, 0.5), Point::new(-2.0, 2.5));
}

// =============================================================
// Rect construction
// =============================================================

#[test]
fn from_edges_normalises_order() {
    let r = rect(10.0, 20.0, 0.0, 5.0);
    assert_eq!(r, rect(0.0, 5.0, 10.0, 20.0));
    assert_eq!(r.width(), 10.0);
    assert_eq!(r.height(), 15.0);
}

#[test]
fn from_origin_size() {
    let r = Rect::from_origin_size(5.0, 6.0, 10.0, 4.0);
    assert_eq!(r, rect(5.0, 6.0, 15.0, 10.0));
}

#[test]
fn from_origin_negative_size_extends_up_left() {
    let r = Rect::from_origin_size(5.0, 6.0, -5.0, -6.0);
    assert_eq!(r, rect(0.0, 0.0, 5.0, 6.0));
}

#[test]
fn translate_moves_all_edges() {
    let r = rect(0.0, 0.0, 2.0, 3.0).translate(10.0, -1.0);
    assert_eq!(r, rect(10.0, -1.0, 12.0, 2.0));
}

// =============================================================
// Intersection
// =============================================================

#[test]
fn overlapping_rects_intersect() {
    assert!(rect(0.0, 0.0, 10.0, 10.0).intersects(&rect(5.0, 5.0, 15.0, 15.0)));
}

#[test]
fn contained_rect_intersects() {
    assert!(rect(0.0, 0.0, 10.0, 10.0).intersects(&rect(2.0, 2.0, 3.0, 3.0)));
}

#[test]
fn disjoint_rects_do_not_intersect() {
    assert!(!rect(0.0, 0.0, 10.0, 10.0).intersects(&rect(11.0, 0.0, 20.0, 10.0)));
    assert!(!rect(0.0, 0.0, 10.0, 10.0).intersects(&rect(0.0, 10.5, 10.0, 20.0)));
}

#[test]
fn shared_vertical_edge_intersects() {
    assert!(rect(0.0, 0.0, 10.0, 10.0).intersects(&rect(10.0, 0.0, 20.0, 10.0)));
}

#[test]
fn shared_horizontal_edge_intersects() {
    assert!(rect(0.0, 0.0, 10.0, 10.0).intersects(&rect(0.0, 10.0, 10.0, 20.0)));
}

#[test]
fn shared_corner_intersects() {
    assert!(rect(0.0, 0.0, 10.0, 10.0).intersects(&rect(10.0, 10.0, 20.0, 20.0)));
}

#[test]
fn overlap_on_one_axis_only_does_not_intersect() {
    assert!(!rect(0.0, 0.0, 10.0, 10.0).intersects(&rect(5.0, 30.0, 15.0, 40.0)));
}

#[test]
fn intersection_area_of_overlap() {
    let a = rect(0.0, 0.0, 10.0, 10.0);
    let b = rect(5.0, 5.0, 15.0, 15.0);
    assert_eq!(a.intersection_area(&b), 25.0);
}

#[test]
fn intersection_area_zero_when_touching() {
    let a = rect(0.0, 0.0, 10.0, 10.0);
    let b = rect(10.0, 0.0, 20.0, 10.0);
    assert!(a.intersects(&b));
    assert_eq!(a.intersection_area(&b), 0.0);
}

#[test]
fn intersection_area_zero_when_disjoint() {
    assert_eq!(rect(0.0, 0.0, 1.0, 1.0).intersection_area(&rect(5.0, 5.0, 6.0, 6.0)), 0.0);
}

#[test]
fn contains_is_closed() {
    let r = rect(0.0, 0.0, 10.0, 10.0);
    assert!(r.contains(Point::new(5.0, 5.0)));
    assert!(r.contains(Point::new(0.0, 10.0)));
    assert!(!r.contains(Point::new(10.1, 5.0)));
}

// =============================================================
// Providers
// =============================================================

#[test]
fn label_geometry_box_sits_above_baseline() {
    let geo = LabelGeometry { width: 40.0, height: 10.0 };
    let choice = Choice::new("cat", Point::new(100.0, 50.0));
    assert_eq!(geo.choice_bounds(&choice), rect(100.0, 40.0, 140.0, 50.0));
}

#[test]
fn text_geometry_width_follows_value_length() {
    let geo = TextGeometry { advance: 10.0, height: 12.0 };
    let short = Choice::new("ox", Point::new(0.0, 20.0));
    let long = Choice::new("giraffe", Point::new(0.0, 20.0));
    assert_eq!(geo.choice_bounds(&short).width(), 20.0);
    assert_eq!(geo.choice_bounds(&long).width(), 70.0);
    assert_eq!(geo.choice_bounds(&long).top, 8.0);
}

#[test]
fn text_geometry_counts_chars_not_bytes() {
    let geo = TextGeometry { advance: 10.0, height: 12.0 };
    let choice = Choice::new("été", Point::new(0.0, 0.0));
    assert_eq!(geo.choice_bounds(&choice).width(), 30.0);
}

// =============================================================
// Properties
// =============================================================

fn arb_rect() -> impl Strategy<Value = Rect> {
    (-500.0..500.0f64, -500.0..500.0f64, 0.0..200.0f64, 0.0..200.0f64)
        .prop_map(|(x, y, w, h)| Rect::from_origin_size(x, y, w, h))
}

proptest! {
    #[test]
    fn intersects_is_symmetric(a in arb_rect(), b in arb_rect()) {
        prop_assert_eq!(a.intersects(&b), b.intersects(&a));
    }

    #[test]
    fn intersection_area_is_symmetric(a in arb_rect(), b in arb_rect()) {
        prop_assert_eq!(a.intersection_area(&b), b.intersection_area(&a));
    }

    #[test]
    fn rect_intersects_itself(a in arb_rect()) {
        prop_assert!(a.intersects(&a));
    }

    #[test]
    fn edge_neighbours_intersect(a in arb_rect(), h in 0.0..200.0f64, w in 0.0..200.0f64) {
        let right = Rect::from_origin_size(a.right, a.top, w, h);
        let below = Rect::from_origin_size(a.left, a.bottom, w, h);
        prop_assert!(a.intersects(&right));
        prop_assert!(a.intersects(&below));
    }

    #[test]
    fn positive_area_implies_intersection(a in arb_rect(), b in arb_rect()) {
        if a.intersection_area(&b) > 0.0 {
            prop_assert!(a.intersects(&b));
        }
    }
}
