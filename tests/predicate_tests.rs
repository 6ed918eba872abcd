mod support;

use polywind::predicates::{Sign, edge_sign, triangle_sign, vertex_sign};
use polywind::{Triangle, triangle_chain};
use support::{int_point, pt, seeded};

// Small integer coordinates keep every product exact, so the symmetries below
// hold bit-for-bit rather than up to rounding.

#[test]
fn vertex_sign_is_antisymmetric() {
    let mut rng = seeded(7);
    for _ in 0..500 {
        let (p, o) = (int_point(&mut rng, 3), int_point(&mut rng, 3));
        assert_eq!(vertex_sign(&p, &o), -vertex_sign(&o, &p));
        assert_eq!(vertex_sign(&p, &o).is_zero(), p == o);
    }
}

#[test]
fn edge_sign_is_antisymmetric_and_zero_only_on_collinear_points() {
    let mut rng = seeded(11);
    for _ in 0..500 {
        let (p, q, o) = (int_point(&mut rng, 4), int_point(&mut rng, 4), int_point(&mut rng, 4));
        let s = edge_sign(&p, &q, &o);
        assert_eq!(s, -edge_sign(&q, &p, &o));

        let collinear = (q - p).cross(&(o - p)) == nalgebra::Vector3::zeros();
        assert_eq!(s.is_zero(), collinear, "p={p:?} q={q:?} o={o:?}");
    }
}

#[test]
fn triangle_sign_flips_with_orientation_and_survives_rotation() {
    let mut rng = seeded(13);
    for _ in 0..500 {
        let (p, q, r, o) = (int_point(&mut rng, 5), int_point(&mut rng, 5), int_point(&mut rng, 5), int_point(&mut rng, 5));
        let s = triangle_sign(&p, &q, &r, &o);
        assert_eq!(s, -triangle_sign(&q, &p, &r, &o));
        assert_eq!(s, triangle_sign(&q, &r, &p, &o));
        assert_eq!(s, triangle_sign(&r, &p, &q, &o));
    }
}

#[test]
fn triangle_sign_agrees_with_the_normal() {
    let mut rng = seeded(17);
    for _ in 0..500 {
        let t = Triangle::new(int_point(&mut rng, 5), int_point(&mut rng, 5), int_point(&mut rng, 5));
        let o = int_point(&mut rng, 5);
        let [p, q, r] = &t.vertices;
        let facing = t.normal().dot(&(p - o));
        assert_eq!(triangle_sign(p, q, r, &o), Sign::of(facing));
    }
}

#[test]
fn chain_flips_with_the_triangle() {
    let mut rng = seeded(19);
    for _ in 0..1000 {
        let (a, b, c, o) = (int_point(&mut rng, 3), int_point(&mut rng, 3), int_point(&mut rng, 3), int_point(&mut rng, 3));
        assert_eq!(triangle_chain(&b, &a, &c, &o), -triangle_chain(&a, &b, &c, &o));
        let t = Triangle::new(a, b, c);
        assert_eq!(t.flipped().chain(&o), -t.chain(&o));
    }
}

#[test]
fn degenerate_triangles_never_contribute() {
    let o = pt(0.0, 0.0, 0.0);
    let p = pt(1.0, 2.0, 3.0);
    let q = pt(-2.0, 1.0, 5.0);
    // Repeated vertex, and three collinear vertices.
    assert_eq!(triangle_chain(&p, &p, &q, &o), Sign::Zero);
    assert_eq!(triangle_chain(&p, &pt(2.0, 4.0, 6.0), &pt(-1.0, -2.0, -3.0), &pt(0.5, 0.0, 0.0)), Sign::Zero);
}
