use crate::base::SQRT_2;

/// Returns the number of components of a symmetric tensor for the given space dimension
///
/// Panics (at compile time when used in a const context) if `ndim` is not 1, 2 or 3.
pub const fn stensor_size(ndim: usize) -> usize {
    match ndim {
        1 => 3,
        2 => 4,
        3 => 6,
        _ => panic!("the space dimension must be 1, 2 or 3"),
    }
}

/// Returns the number of components of a general (non-symmetric) tensor for the given space dimension
///
/// Panics (at compile time when used in a const context) if `ndim` is not 1, 2 or 3.
pub const fn tensor_size(ndim: usize) -> usize {
    match ndim {
        1 => 3,
        2 => 5,
        3 => 9,
        _ => panic!("the space dimension must be 1, 2 or 3"),
    }
}

/// Maps the components of a symmetric tensor to the (i,j) indices of the 3×3 matrix
///
/// ```text
/// xx, yy, zz, √2·xy, √2·xz, √2·yz
/// ```
pub const STENSOR_INDICES: [(usize, usize); 6] = [(0, 0), (1, 1), (2, 2), (0, 1), (0, 2), (1, 2)];

/// Maps the components of a general tensor to the (i,j) indices of the 3×3 matrix
///
/// ```text
/// xx, yy, zz, xy, yx, xz, zx, yz, zy
/// ```
pub const TENSOR_INDICES: [(usize, usize); 9] = [
    (0, 0),
    (1, 1),
    (2, 2),
    (0, 1),
    (1, 0),
    (0, 2),
    (2, 0),
    (1, 2),
    (2, 1),
];

/// Returns the scaling of a symmetric tensor component (1 on the diagonal, √2 otherwise)
#[inline]
pub fn stensor_weight(a: usize) -> f64 {
    if a < 3 {
        1.0
    } else {
        SQRT_2
    }
}

/// Returns the position of the (i,j) entry in the storage of a 3D symmetric tensor
#[inline]
pub fn stensor_position(i: usize, j: usize) -> usize {
    match (i.min(j), i.max(j)) {
        (0, 0) => 0,
        (1, 1) => 1,
        (2, 2) => 2,
        (0, 1) => 3,
        (0, 2) => 4,
        _ => 5,
    }
}

/// Returns the position of the (i,j) entry in the storage of a 3D general tensor
#[inline]
pub fn tensor_position(i: usize, j: usize) -> usize {
    match (i, j) {
        (0, 0) => 0,
        (1, 1) => 1,
        (2, 2) => 2,
        (0, 1) => 3,
        (1, 0) => 4,
        (0, 2) => 5,
        (2, 0) => 6,
        (1, 2) => 7,
        _ => 8,
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sizes_work() {
        assert_eq!(stensor_size(1), 3);
        assert_eq!(stensor_size(2), 4);
        assert_eq!(stensor_size(3), 6);
        assert_eq!(tensor_size(1), 3);
        assert_eq!(tensor_size(2), 5);
        assert_eq!(tensor_size(3), 9);
    }

    #[test]
    #[should_panic(expected = "the space dimension must be 1, 2 or 3")]
    fn stensor_size_panics_on_wrong_dimension() {
        stensor_size(4);
    }

    #[test]
    fn positions_invert_the_index_tables() {
        for (a, (i, j)) in STENSOR_INDICES.iter().enumerate() {
            assert_eq!(stensor_position(*i, *j), a);
            assert_eq!(stensor_position(*j, *i), a);
        }
        for (a, (i, j)) in TENSOR_INDICES.iter().enumerate() {
            assert_eq!(tensor_position(*i, *j), a);
        }
    }

    #[test]
    fn weights_work() {
        assert_eq!(stensor_weight(0), 1.0);
        assert_eq!(stensor_weight(2), 1.0);
        assert_eq!(stensor_weight(3), SQRT_2);
        assert_eq!(stensor_weight(5), SQRT_2);
    }
}
