use crate::tensor::Tensor;

#[test]
fn test_print() {
    use std::fmt::Write;

    // 测试标量
    let tensor = Tensor::new(&[1.], &[]);
    let mut buffer = String::new();
    write!(&mut buffer, "{}", tensor).unwrap();
    assert_eq!(buffer, "  1.0000\n形状: []\n");

    // 测试向量
    let tensor = Tensor::new(&[1., 2., 3.], &[3]);
    let mut buffer = String::new();
    write!(&mut buffer, "{}", tensor).unwrap();
    assert_eq!(buffer, "[  1.0000,   2.0000,   3.0000]\n形状: [3]\n");

    // 测试矩阵
    let tensor = Tensor::new(&[1., 2., 3., 4., 5., 6.], &[2, 3]);
    let mut buffer = String::new();
    write!(&mut buffer, "{}", tensor).unwrap();
    assert_eq!(
        buffer,
        "[[  1.0000,   2.0000,   3.0000], \n [  4.0000,   5.0000,   6.0000]]\n形状: [2, 3]\n"
    );
}

#[test]
fn test_print_rank4() {
    use std::fmt::Write;

    let tensor = Tensor::new(&[1., 2., 3., 4.], &[1, 1, 2, 2]);
    let mut buffer = String::new();
    write!(&mut buffer, "{}", tensor).unwrap();
    assert_eq!(
        buffer,
        "[[[[  1.0000,   2.0000], \n   [  3.0000,   4.0000]]]]\n形状: [1, 1, 2, 2]\n"
    );

    let tensor = Tensor::new(&[1., -2.], &[1, 2, 1, 1]);
    let mut buffer = String::new();
    write!(&mut buffer, "{}", tensor).unwrap();
    assert_eq!(
        buffer,
        "[[[[  1.0000]], \n  [[ -2.0000]]]]\n形状: [1, 2, 1, 1]\n"
    );
}

#[test]
fn test_print_empty() {
    let tensor = Tensor::zeros(&[0, 1, 2, 2]);
    assert_eq!(format!("{tensor}"), "[]\n形状: [0, 1, 2, 2]\n");
}
