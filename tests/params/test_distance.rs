//! Distance accumulator selection used from a generic kernel.

use std::any::TypeId;

use annparams::{DataType, DistanceType, ElementType};

/// Squared Euclidean distance accumulated in the selected distance type
fn squared_l2<T>(a: &[T], b: &[T]) -> DistanceType<T>
where
    T: ElementType,
    DistanceType<T>: From<T>
        + Default
        + std::ops::Sub<Output = DistanceType<T>>
        + std::ops::Mul<Output = DistanceType<T>>
        + std::ops::Add<Output = DistanceType<T>>,
{
    a.iter()
        .zip(b)
        .map(|(&x, &y)| {
            let diff = <DistanceType<T> as From<T>>::from(x)
                - <DistanceType<T> as From<T>>::from(y);
            diff * diff
        })
        .fold(<DistanceType<T>>::default(), |acc, term| acc + term)
}

#[test]
fn test_byte_vectors_do_not_wrap() {
    let a = [0u8, 255, 10];
    let b = [255u8, 0, 10];

    let distance = squared_l2(&a, &b);
    assert_eq!(TypeId::of::<DistanceType<u8>>(), TypeId::of::<f32>());
    assert_eq!(distance, 2.0 * 255.0 * 255.0);
}

#[test]
fn test_float_vectors_keep_precision() {
    let a = [1.0f64, 2.0, 3.0];
    let b = [1.5f64, 2.0, 1.0];

    let distance: f64 = squared_l2(&a, &b);
    assert_eq!(distance, 4.25);
}

#[test]
fn test_datatype_tags_follow_the_mapping() {
    assert_eq!(<u8 as ElementType>::DATATYPE.distance_type(), DataType::Float32);
    assert_eq!(<i32 as ElementType>::DATATYPE.distance_type(), DataType::Float32);
    assert_eq!(<u16 as ElementType>::DATATYPE.distance_type(), DataType::Uint16);
    assert_eq!(<f64 as ElementType>::DATATYPE.distance_type(), DataType::Float64);
}
