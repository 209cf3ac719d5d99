//! End-to-end flows from a flat record to typed parameters and back.

use annparams::params::{
    AutotunedIndexParams, CompositeIndexParams, KDTreeIndexParams, KMeansIndexParams,
    LinearIndexParams, SavedIndexParams,
};
use annparams::{
    AlgorithmId, CentersInit, FlannParameters, IndexParams, LogLevel, ParamsError,
    SearchParams, create_from_parameters,
};

fn garbage_record() -> FlannParameters {
    FlannParameters {
        algorithm: AlgorithmId::from_raw(-3),
        checks: -9,
        cb_index: 1.0e9,
        trees: 999,
        branching: -1,
        iterations: i32::MAX,
        centers_init: CentersInit::from_raw(17),
        target_precision: -0.5,
        build_weight: f32::INFINITY,
        memory_weight: 42.0,
        sample_fraction: 7.5,
        log_level: LogLevel::from_raw(99),
        random_seed: -1,
    }
}

#[test]
fn test_kmeans_record_end_to_end() {
    let record = FlannParameters {
        algorithm: AlgorithmId::KMEANS,
        branching: 32,
        iterations: 11,
        centers_init: CentersInit::KMEANSPP,
        checks: 64,
        random_seed: 7,
        ..FlannParameters::default()
    };

    let params = create_from_parameters(&record).unwrap();
    assert_eq!(params.index_type(), AlgorithmId::KMEANS);

    let kmeans = params.downcast_ref::<KMeansIndexParams>().unwrap();
    assert_eq!(kmeans.branching, 32);
    assert_eq!(kmeans.iterations, 11);
    assert_eq!(kmeans.centers_init, CentersInit::KMEANSPP);

    let fresh = params.to_record();
    assert_eq!(fresh.algorithm, AlgorithmId::KMEANS);
    assert_eq!(fresh.branching, 32);
    assert_eq!(fresh.iterations, 11);
    assert_eq!(fresh.centers_init, CentersInit::KMEANSPP);
    assert_eq!(fresh.trees, FlannParameters::default().trees);

    assert_eq!(SearchParams::from_parameters(&record).checks, 64);
    assert_eq!(record.random_seed, 7);
}

#[test]
fn test_unregistered_tag_fails() {
    let record = FlannParameters {
        algorithm: AlgorithmId::from_raw(77),
        ..FlannParameters::default()
    };

    let result = create_from_parameters(&record);
    assert!(matches!(
        result,
        Err(ParamsError::UnknownAlgorithm { id }) if id == AlgorithmId::from_raw(77)
    ));
}

#[test]
fn test_foreign_fields_do_not_affect_import() {
    let variants: Vec<Box<dyn IndexParams>> = vec![
        Box::new(LinearIndexParams),
        Box::new(KDTreeIndexParams::new(7)),
        Box::new(KMeansIndexParams {
            branching: 12,
            iterations: 3,
            centers_init: CentersInit::GONZALES,
            cb_index: 0.4,
        }),
        Box::new(CompositeIndexParams::default()),
        Box::new(SavedIndexParams),
        Box::new(AutotunedIndexParams::default()),
    ];

    for params in variants {
        let mut noisy = garbage_record();
        let mut clean = FlannParameters::zeroed();
        params.to_parameters(&mut noisy);
        params.to_parameters(&mut clean);

        let from_noisy = create_from_parameters(&noisy).unwrap();
        let from_clean = create_from_parameters(&clean).unwrap();

        assert_eq!(from_noisy.index_type(), params.index_type());
        assert_eq!(
            from_noisy.describe(),
            from_clean.describe(),
            "{} import depends on foreign fields",
            params.index_type()
        );
        assert_eq!(from_noisy.describe(), params.describe());
    }
}

#[test]
fn test_composite_splits_into_parts() {
    let record = FlannParameters {
        algorithm: AlgorithmId::COMPOSITE,
        trees: 6,
        branching: 48,
        ..FlannParameters::default()
    };

    let params = create_from_parameters(&record).unwrap();
    let composite = params.downcast_ref::<CompositeIndexParams>().unwrap();

    assert_eq!(composite.kdtree(), KDTreeIndexParams::new(6));
    assert_eq!(composite.kmeans().branching, 48);
    assert_eq!(
        CompositeIndexParams::from_parts(composite.kdtree(), composite.kmeans()),
        *composite
    );
}

#[test]
fn test_seeded_records_reproduce_randomness() {
    use rand::Rng;

    let record = FlannParameters {
        random_seed: 7,
        ..FlannParameters::default()
    };

    let first: Vec<u32> = record.rng().random_iter().take(4).collect();
    let second: Vec<u32> = record.rng().random_iter().take(4).collect();
    assert_eq!(first, second);
}
