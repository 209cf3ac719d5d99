//! Export then import through the registry must reproduce owned fields.

use annparams::params::{
    AutotunedIndexParams, CompositeIndexParams, KDTreeIndexParams, KMeansIndexParams,
    LinearIndexParams, SavedIndexParams,
};
use annparams::{CentersInit, FlannParameters, IndexParams, create_from_parameters};

fn assert_round_trip<P>(original: P)
where
    P: IndexParams + PartialEq + 'static,
{
    let mut record = FlannParameters::zeroed();
    original.to_parameters(&mut record);
    assert_eq!(record.algorithm, original.index_type());

    let imported = create_from_parameters(&record).unwrap();
    assert_eq!(imported.index_type(), original.index_type());
    assert_eq!(imported.downcast_ref::<P>(), Some(&original));
}

#[test]
fn test_linear_round_trip() {
    assert_round_trip(LinearIndexParams);
}

#[test]
fn test_saved_round_trip() {
    assert_round_trip(SavedIndexParams);
}

#[test]
fn test_kdtree_round_trip() {
    assert_round_trip(KDTreeIndexParams::new(16));
}

#[test]
fn test_kmeans_round_trip() {
    assert_round_trip(KMeansIndexParams {
        branching: 64,
        iterations: -1,
        centers_init: CentersInit::KMEANSPP,
        cb_index: 0.35,
    });
}

#[test]
fn test_composite_round_trip() {
    assert_round_trip(CompositeIndexParams {
        trees: 8,
        branching: 24,
        iterations: 5,
        centers_init: CentersInit::GONZALES,
        cb_index: 0.0,
    });
}

#[test]
fn test_autotuned_round_trip() {
    assert_round_trip(AutotunedIndexParams {
        target_precision: 0.975,
        build_weight: 0.5,
        memory_weight: 0.25,
        sample_fraction: 0.033,
    });
}

#[test]
fn test_export_leaves_foreign_fields_alone() {
    let base = FlannParameters {
        checks: 777,
        trees: 9,
        target_precision: 0.5,
        random_seed: 1234,
        ..FlannParameters::default()
    };

    let mut record = base;
    KMeansIndexParams::default().to_parameters(&mut record);

    assert_eq!(record.checks, 777);
    assert_eq!(record.trees, 9);
    assert_eq!(record.target_precision, 0.5);
    assert_eq!(record.random_seed, 1234);
    assert_eq!(record.log_level, base.log_level);
}

#[test]
fn test_out_of_range_values_pass_through() {
    let record = FlannParameters {
        algorithm: annparams::AlgorithmId::KMEANS,
        branching: -5,
        centers_init: CentersInit::from_raw(42),
        cb_index: f32::NAN,
        ..FlannParameters::default()
    };

    let params = create_from_parameters(&record).unwrap();
    let kmeans = params.downcast_ref::<KMeansIndexParams>().unwrap();
    assert_eq!(kmeans.branching, -5);
    assert_eq!(kmeans.centers_init.raw(), 42);
    assert!(kmeans.cb_index.is_nan());
}
