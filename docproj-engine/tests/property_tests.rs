//! Property-based tests for exclusion and inclusion projection

use docproj_engine::{
    ExclusionProjector, FieldPath, InclusionProjector, PathLimits, Projector,
};
use docproj_format::constants::ID_FIELD;
use docproj_test_utils::no_level_grew;
use docproj_test_utils::strategies::{document, flat_document, path, path_set};
use proptest::prelude::*;

fn parse(paths: &[String]) -> Vec<FieldPath> {
    FieldPath::parse_all(paths, &PathLimits::default()).expect("generated paths are within limits")
}

fn exclusion(paths: &[String]) -> ExclusionProjector {
    ExclusionProjector::new(parse(paths), ID_FIELD)
}

fn inclusion(paths: &[String]) -> InclusionProjector {
    InclusionProjector::new(parse(paths), ID_FIELD)
}

proptest! {
    #[test]
    fn exclusion_is_idempotent(doc in document(3), paths in path_set(4)) {
        let projector = exclusion(&paths);
        let mut once = doc;
        projector.project(&mut once);
        let mut twice = once.clone();
        projector.project(&mut twice);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn inclusion_is_idempotent(doc in document(3), paths in path_set(4)) {
        let projector = inclusion(&paths);
        let mut once = doc;
        projector.project(&mut once);
        let mut twice = once.clone();
        projector.project(&mut twice);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn exclusion_never_removes_identifier(doc in document(3), paths in path_set(4)) {
        let had_id = doc.contains_key(ID_FIELD);
        let mut projected = doc;
        exclusion(&paths).project(&mut projected);
        prop_assert_eq!(projected.contains_key(ID_FIELD), had_id);
    }

    #[test]
    fn exclusion_with_identifier_path_keeps_identifier(doc in document(2)) {
        let paths = vec![ID_FIELD.to_string(), "*".to_string(), "**".to_string()];
        let had_id = doc.get(ID_FIELD).cloned();
        let mut projected = doc;
        exclusion(&paths).project(&mut projected);
        prop_assert_eq!(projected.get(ID_FIELD).cloned(), had_id);
    }

    #[test]
    fn inclusion_always_keeps_identifier(doc in document(3), paths in path_set(4)) {
        let had_id = doc.get(ID_FIELD).cloned();
        let mut projected = doc;
        inclusion(&paths).project(&mut projected);
        prop_assert_eq!(projected.get(ID_FIELD).cloned(), had_id);
    }

    #[test]
    fn exclusion_never_grows_any_level(doc in document(3), paths in path_set(4)) {
        let mut projected = doc.clone();
        exclusion(&paths).project(&mut projected);
        prop_assert!(no_level_grew(&doc, &projected));
    }

    #[test]
    fn inclusion_never_grows_any_level(doc in document(3), paths in path_set(4)) {
        let mut projected = doc.clone();
        inclusion(&paths).project(&mut projected);
        prop_assert!(no_level_grew(&doc, &projected));
    }

    #[test]
    fn absent_first_segment_is_a_no_op(doc in document(3), rest in path(3)) {
        let paths = vec![format!("missing_field.{rest}"), "missing_field".to_string()];
        let mut projected = doc.clone();
        exclusion(&paths).project(&mut projected);
        prop_assert_eq!(projected, doc);
    }

    #[test]
    fn double_wildcard_on_flat_document_leaves_identifier(doc in flat_document()) {
        let mut projected = doc.clone();
        exclusion(&["**".to_string()]).project(&mut projected);

        let mut expected = docproj_engine::Document::new();
        if let Some(id) = doc.get(ID_FIELD) {
            expected.insert(ID_FIELD.to_string(), id.clone());
        }
        prop_assert_eq!(projected, expected);
    }

    #[test]
    fn single_wildcard_matches_double_on_flat_document(doc in flat_document()) {
        let mut single = doc.clone();
        let mut double = doc;
        exclusion(&["*".to_string()]).project(&mut single);
        exclusion(&["**".to_string()]).project(&mut double);
        prop_assert_eq!(single, double);
    }

    #[test]
    fn inclusion_of_everything_is_identity(doc in document(3)) {
        let mut projected = doc.clone();
        inclusion(&["**".to_string()]).project(&mut projected);
        prop_assert_eq!(projected, doc);
    }

    #[test]
    fn exclusion_path_order_does_not_matter(doc in document(3), paths in path_set(4)) {
        let mut reversed_paths = paths.clone();
        reversed_paths.reverse();

        let mut forward = doc.clone();
        let mut backward = doc;
        exclusion(&paths).project(&mut forward);
        exclusion(&reversed_paths).project(&mut backward);
        prop_assert_eq!(forward, backward);
    }
}
