//! Cross-checks the 3x3 matrix-vector product against nalgebra.

use approx::assert_relative_eq;
use vector3_core::Vector3;

fn nalgebra_multiply(matrix: &[Vec<f64>], v: Vector3) -> Vector3 {
    let m = nalgebra::Matrix3::new(
        matrix[0][0],
        matrix[0][1],
        matrix[0][2],
        matrix[1][0],
        matrix[1][1],
        matrix[1][2],
        matrix[2][0],
        matrix[2][1],
        matrix[2][2],
    );
    let r = m * nalgebra::Vector3::new(v.x, v.y, v.z);
    Vector3::new(r.x, r.y, r.z)
}

#[test]
fn test_transform_matches_nalgebra() {
    let v = Vector3::new(1.5, -2.0, 0.75);

    let matrices = [
        vec![
            vec![1.0, 0.0, 0.0],
            vec![0.0, 1.0, 0.0],
            vec![0.0, 0.0, 1.0],
        ],
        vec![
            vec![2.0, 0.0, 0.0],
            vec![0.0, 3.0, 0.0],
            vec![0.0, 0.0, 0.5],
        ],
        vec![
            vec![0.25, -1.5, 3.0],
            vec![7.0, 0.0, -2.5],
            vec![-0.75, 4.5, 1.25],
        ],
    ];

    for matrix in &matrices {
        let ours = v.transform(matrix);
        let expected = nalgebra_multiply(matrix, v);

        assert_relative_eq!(ours.x, expected.x, epsilon = 1e-12);
        assert_relative_eq!(ours.y, expected.y, epsilon = 1e-12);
        assert_relative_eq!(ours.z, expected.z, epsilon = 1e-12);
    }
}

#[test]
fn test_transform_composes_like_nalgebra() {
    let v = Vector3::new(-3.0, 1.0, 2.0);
    let scale = vec![
        vec![2.0, 0.0, 0.0],
        vec![0.0, 2.0, 0.0],
        vec![0.0, 0.0, 2.0],
    ];
    // 90 degrees about z
    let rotation = vec![
        vec![0.0, -1.0, 0.0],
        vec![1.0, 0.0, 0.0],
        vec![0.0, 0.0, 1.0],
    ];

    let ours = v.transform(&scale).transform(&rotation);
    let expected = nalgebra_multiply(&rotation, nalgebra_multiply(&scale, v));

    assert_relative_eq!(ours.x, expected.x, epsilon = 1e-12);
    assert_relative_eq!(ours.y, expected.y, epsilon = 1e-12);
    assert_relative_eq!(ours.z, expected.z, epsilon = 1e-12);
}
