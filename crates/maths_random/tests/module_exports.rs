//! Integration tests for module exports.
//!
//! Verify that all public modules and types are exported and reachable via
//! absolute paths.

/// Engines are reachable from the crate root and from `engines`.
#[test]
fn test_engine_exports() {
    use maths_random::engines::Algorithm;
    use maths_random::{
        AesCounterRng, CellularAutomatonRng, Cmwc4096Rng, MersenneTwisterRng, RandomSource,
        XorShiftRng,
    };

    assert_eq!(Algorithm::ALL.len(), 5);
    assert_eq!(AesCounterRng::DEFAULT_SEED_SIZE_BYTES, 32);
    assert_eq!(CellularAutomatonRng::SEED_SIZE_BYTES, 16);
    assert_eq!(Cmwc4096Rng::SEED_SIZE_BYTES, 16384);
    assert_eq!(MersenneTwisterRng::SEED_SIZE_BYTES, 16);
    assert_eq!(XorShiftRng::SEED_SIZE_BYTES, 20);

    let rng = XorShiftRng::from_seed(&[7; 20]).unwrap();
    let _ = rng.next_f64();
}

/// Capability traits and the error type are re-exported at the root.
#[test]
fn test_trait_exports() {
    use maths_random::error::RngError as PathError;
    use maths_random::source::RandomSource as PathSource;
    use maths_random::{AesCounterRng, RepeatableRng, Reseed, RngCoreAdapter, RngError};

    fn accepts_error(_: &PathError) {}
    accepts_error(&RngError::UnknownAlgorithm("x".to_string()));

    let rng = AesCounterRng::from_seed(&[1; 16]).unwrap();
    rng.reseed(1).unwrap();
    assert_eq!(rng.seed().len(), 16);
    let _ = PathSource::next_u32(&rng);

    let mut adapter = RngCoreAdapter::new(rng);
    let _ = rand::RngCore::next_u64(&mut adapter);
}

/// Seed sources are accessible via `seed`.
#[test]
fn test_seed_exports() {
    use maths_random::seed::{
        DefaultSeedSource, DevRandomSeedSource, FixedSeedSource, OsSeedSource, SeedSource,
    };

    let fixed = FixedSeedSource::new(vec![1, 2, 3]);
    assert_eq!(fixed.generate_seed(2).unwrap(), vec![1, 2]);
    let _ = DevRandomSeedSource::new();
    let _: &dyn SeedSource = &OsSeedSource;
    let _: &dyn SeedSource = &DefaultSeedSource;
}

/// Samplers are accessible via `distributions`.
#[test]
fn test_distribution_exports() {
    use maths_random::distributions::{
        AdjustableValue, BinomialGenerator, ContinuousUniformGenerator, DiscreteUniformGenerator,
        ExponentialGenerator, GaussianGenerator, NumberGenerator, Parameter, PoissonGenerator,
    };
    use maths_random::MersenneTwisterRng;

    let rng = MersenneTwisterRng::from_seed(&[9; 16]).unwrap();
    let rate: Parameter<f64> = AdjustableValue::new(1.0).into();
    assert!(ExponentialGenerator::new(rate, &rng).unwrap().next_value().is_ok());
    assert!(BinomialGenerator::new(3, 0.5, &rng).is_ok());
    assert!(PoissonGenerator::new(2.0, &rng).is_ok());
    assert!(GaussianGenerator::new(0.0, 1.0, &rng).is_ok());
    assert!(ContinuousUniformGenerator::new(0.0, 1.0, &rng).is_ok());
    assert!(DiscreteUniformGenerator::new(0, 1, &rng).is_ok());
}

/// Frozen generators are accessible via the root.
#[test]
fn test_frozen_exports() {
    use maths_random::{FrozenRng, MersenneTwisterRng};

    let rng = MersenneTwisterRng::from_seed(&[4; 16]).unwrap();
    assert_eq!(FrozenRng::freeze(&rng).seed().unwrap(), vec![4; 16]);
}
