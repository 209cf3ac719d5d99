//! Registry behavior as seen from outside the crate.

use std::sync::Arc;

use annparams::params::{AlgorithmDefinition, KDTreeIndexParams, KMeansIndexParams, ParamValue};
use annparams::{AlgorithmId, FlannParameters, IndexParams, ParamsError, ParamsRegistry};

/// Custom algorithm registered under an otherwise unused tag
#[derive(Debug, Clone, Default, PartialEq)]
struct BallTreeParams {
    leaf_size: i32,
}

const BALL_TREE: AlgorithmId = AlgorithmId::from_raw(40);

impl IndexParams for BallTreeParams {
    fn index_type(&self) -> AlgorithmId {
        BALL_TREE
    }

    fn from_parameters(&mut self, params: &FlannParameters) {
        self.leaf_size = params.branching;
    }

    fn to_parameters(&self, params: &mut FlannParameters) {
        params.algorithm = BALL_TREE;
        params.branching = self.leaf_size;
    }

    fn describe(&self) -> Vec<(&'static str, ParamValue)> {
        vec![("leaf_size", self.leaf_size.into())]
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }

    fn clone_box(&self) -> Box<dyn IndexParams> {
        Box::new(self.clone())
    }
}

struct BallTreeDefinition;

impl AlgorithmDefinition for BallTreeDefinition {
    fn id(&self) -> AlgorithmId {
        BALL_TREE
    }

    fn name(&self) -> &'static str {
        "Ball Tree"
    }

    fn create_params(&self) -> Box<dyn IndexParams> {
        Box::new(BallTreeParams { leaf_size: 10 })
    }
}

#[test]
fn test_kdtree_record_resolves_to_kdtree_params() {
    let registry = ParamsRegistry::with_defaults();
    let record = FlannParameters {
        algorithm: AlgorithmId::KDTREE,
        trees: 12,
        ..FlannParameters::default()
    };

    let params = registry.create_from_parameters(&record).unwrap();
    assert_eq!(params.index_type(), AlgorithmId::KDTREE);
    assert_eq!(
        params.downcast_ref::<KDTreeIndexParams>(),
        Some(&KDTreeIndexParams::new(12))
    );
    assert!(params.downcast_ref::<KMeansIndexParams>().is_none());
}

#[test]
fn test_custom_algorithm_can_be_registered() {
    let mut registry = ParamsRegistry::with_defaults();
    assert!(registry.register(Arc::new(BallTreeDefinition)).is_none());

    let record = FlannParameters {
        algorithm: BALL_TREE,
        branching: 25,
        ..FlannParameters::default()
    };
    let params = registry.create_from_parameters(&record).unwrap();

    assert_eq!(params.index_type(), BALL_TREE);
    assert_eq!(
        params.downcast_ref::<BallTreeParams>(),
        Some(&BallTreeParams { leaf_size: 25 })
    );

    let listed: Vec<_> = registry.iter().map(|def| def.name()).collect();
    assert!(listed.contains(&"Ball Tree"));
    assert_eq!(listed.last(), Some(&"Autotuned"));
}

#[test]
fn test_unknown_tag_error_names_the_tag() {
    let registry = ParamsRegistry::with_defaults();
    let record = FlannParameters {
        algorithm: AlgorithmId::from_raw(77),
        ..FlannParameters::default()
    };

    let err = registry.create_from_parameters(&record).unwrap_err();
    assert!(matches!(err, ParamsError::UnknownAlgorithm { id } if id.raw() == 77));
    assert!(err.to_string().contains("77"));
    assert_eq!(err.status_code(), "UNKNOWN_ALGORITHM");
}
