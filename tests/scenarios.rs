use approx::assert_abs_diff_eq;
use linear_utils::*;

fn init_logger() {
    env_logger::builder()
        .filter_module("linear_utils", log::LevelFilter::Trace)
        .is_test(true)
        .try_init()
        .ok();
}

#[test]
fn identity_matrix_times_vector() {
    let m = Matrix::new(1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0);
    let v = multiply_matrix_with_vector(&m, &Vector::new(2.0, 3.0, 4.0));
    assert_eq!(v, Vector::new(2.0, 3.0, 4.0));
}

#[test]
fn scale_cells() {
    init_logger();

    let scale = ScaleMatrix::new(2.0, 3.0);
    assert_eq!(
        *scale.matrix(),
        Matrix::new(2.0, 0.0, 0.0, 0.0, 3.0, 0.0, 0.0, 0.0, 0.0)
    );
    assert_eq!(scale.matrix().p33(), 0.0);
}

#[test]
fn rotation_at_zero_degrees() {
    init_logger();

    let m = *RotationMatrix::new(0.0).matrix();
    assert_eq!(m.p11(), 1.0);
    assert_abs_diff_eq!(m.p21(), 0.0, epsilon = 1e-9);
    assert_abs_diff_eq!(m.p12(), 0.0, epsilon = 1e-9);
    assert_eq!(m.p22(), 1.0);
    assert_eq!(m.p33(), 0.0);
}

#[test]
fn rotation_at_ninety_degrees() {
    init_logger();

    let m = *RotationMatrix::new(90.0).matrix();
    assert_abs_diff_eq!(m.p11(), 0.0, epsilon = 1e-9);
    assert_abs_diff_eq!(m.p21(), -1.0, epsilon = 1e-9);
    assert_abs_diff_eq!(m.p12(), 1.0, epsilon = 1e-9);
    assert_abs_diff_eq!(m.p22(), 0.0, epsilon = 1e-9);
    assert_eq!(m.p33(), 0.0);
}

#[test]
fn identity_times_uniform_scale() {
    let identity = Matrix::new(1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0);
    let two = Matrix::new(2.0, 0.0, 0.0, 0.0, 2.0, 0.0, 0.0, 0.0, 2.0);
    assert_eq!(
        multiply_matrix_with_matrix(&identity, &two),
        Matrix::new(2.0, 0.0, 0.0, 0.0, 2.0, 0.0, 0.0, 0.0, 2.0)
    );
}

#[test]
fn non_symmetric_product_is_not_transposed() {
    let a = Matrix::from_rows([[1.0, 2.0, 3.0], [0.0, 1.0, 4.0], [5.0, 6.0, 0.0]]);
    let b = Matrix::from_rows([[0.0, 1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]]);

    // Swapping the first two columns of `a`.
    assert_eq!(
        multiply_matrix_with_matrix(&a, &b),
        Matrix::from_rows([[2.0, 1.0, 3.0], [1.0, 0.0, 4.0], [6.0, 5.0, 0.0]])
    );
}
