use num_bigint::BigUint;

/// Maps each element of a vector using the provided mapping function.
///
/// # Arguments
/// * `vector` - The input vector to transform
/// * `mapper` - A function that maps each element
///
/// # Returns
/// A new vector with each element transformed by the mapper function
pub fn map_vector(vector: &[BigUint], mapper: &dyn Fn(&BigUint) -> BigUint) -> Vec<BigUint> {
    vector.iter().map(mapper).collect()
}

/// Sum of all elements.
pub fn sum(vector: &[BigUint]) -> BigUint {
    vector.iter().sum()
}
