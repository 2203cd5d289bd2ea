/// Scalar features derived from a polymer chain.
///
/// These are the structural half of the difficulty model's input; the
/// process conditions (temperature, pressure) are appended by the caller
/// when the full feature vector is assembled.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChainFeatures {
    pub length: usize,
    pub count_a: usize,
    pub count_b: usize,
    pub count_c: usize,
    pub avg_bond_strength: f64,
}

#[cfg(test)]
mod tests {
    use crate::core::models::chain::PolymerChain;
    use crate::core::models::monomer::Monomer;

    #[test]
    fn features_reflect_the_chain() {
        let chain = PolymerChain::new(
            vec![Monomer::C, Monomer::C, Monomer::B],
            vec![0.6, 1.4],
        )
        .unwrap();
        let features = chain.features();
        assert_eq!(features.length, 3);
        assert_eq!(features.count_a, 0);
        assert_eq!(features.count_b, 1);
        assert_eq!(features.count_c, 2);
        assert!((features.avg_bond_strength - 1.0).abs() < 1e-12);
    }
}
