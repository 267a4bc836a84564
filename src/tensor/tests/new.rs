use crate::assert_panic;
use crate::errors::TensorError;
use crate::tensor::Tensor;

#[test]
fn test_new() {
    let tensor = Tensor::new(&[1., 2., 3., 4.], &[1, 1, 2, 2]);
    assert_eq!(tensor.shape(), &[1, 1, 2, 2]);
    assert_eq!(tensor.to_vec(), vec![1., 2., 3., 4.]);

    let scalar = Tensor::new(&[1.], &[]);
    assert_eq!(scalar.shape(), &[] as &[usize]);
}

#[test]
fn test_new_with_mismatched_length() {
    assert_panic!(
        Tensor::new(&[1., 2., 3.], &[2, 2]),
        "数据长度为3，与形状[2, 2]所需的元素个数不一致"
    );
}

#[test]
fn test_try_new() {
    let result = Tensor::try_new(&[1., 2., 3.], &[1, 1, 2, 2]);
    assert_eq!(
        result,
        Err(TensorError::DataLengthMismatch {
            data_len: 3,
            shape: vec![1, 1, 2, 2],
        })
    );
    assert!(result.unwrap_err().is_shape_error());

    assert!(Tensor::try_new(&[1., 2., 3., 4.], &[4]).is_ok());
}

#[test]
fn test_from_matrix() {
    let tensor = Tensor::from_matrix(&[[1., 2., 3.], [4., 5., 6.]]);
    assert_eq!(tensor.shape(), &[1, 1, 2, 3]);
    assert_eq!(tensor.to_vec(), vec![1., 2., 3., 4., 5., 6.]);
}

#[test]
fn test_zeros_and_ones() {
    let zeros = Tensor::zeros(&[2, 3, 4, 5]);
    assert_eq!(zeros.shape(), &[2, 3, 4, 5]);
    assert!(zeros.to_vec().iter().all(|&x| x == 0.));

    let ones = Tensor::ones(&[1, 2, 3, 3]);
    assert_eq!(ones.size(), 18);
    assert!(ones.to_vec().iter().all(|&x| x == 1.));
}

#[test]
fn test_normal_with_rng() {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    let mut rng1 = StdRng::seed_from_u64(42);
    let mut rng2 = StdRng::seed_from_u64(42);
    let a = Tensor::normal_with_rng(0., 1., &[4, 3, 3, 3], &mut rng1);
    let b = Tensor::normal_with_rng(0., 1., &[4, 3, 3, 3], &mut rng2);
    assert_eq!(a.shape(), &[4, 3, 3, 3]);
    assert_eq!(a, b);

    // 奇数个元素也能正确截断
    let c = Tensor::normal_with_rng(1., 0.5, &[1, 1, 1, 7], &mut rng1);
    assert_eq!(c.size(), 7);
    assert!(c.to_vec().iter().all(|x| x.is_finite()));
}
