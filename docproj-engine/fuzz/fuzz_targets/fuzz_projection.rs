#![no_main]

use docproj_engine::{ExclusionProjector, FieldPath, InclusionProjector, PathLimits, Projector};
use docproj_format::constants::ID_FIELD;
use docproj_format::Document;
use libfuzzer_sys::fuzz_target;

// Input layout: path list (comma separated), a NUL byte, then a JSON object.
fuzz_target!(|data: &[u8]| {
    let Some(split) = data.iter().position(|&b| b == 0) else {
        return;
    };
    let (path_bytes, json_bytes) = (&data[..split], &data[split + 1..]);

    let Ok(path_list) = std::str::from_utf8(path_bytes) else {
        return;
    };
    let Ok(paths) = FieldPath::parse_all(path_list.split(','), &PathLimits::default()) else {
        return;
    };
    let Ok(doc) = serde_json::from_slice::<Document>(json_bytes) else {
        return;
    };

    let had_id = doc.get(ID_FIELD).is_some();

    let exclusion = ExclusionProjector::new(paths.clone(), ID_FIELD);
    let mut excluded = doc.clone();
    exclusion.project(&mut excluded);
    assert!(excluded.len() <= doc.len());
    assert_eq!(excluded.get(ID_FIELD).is_some(), had_id);

    let mut again = excluded.clone();
    exclusion.project(&mut again);
    assert_eq!(again, excluded);

    let inclusion = InclusionProjector::new(paths, ID_FIELD);
    let mut included = doc.clone();
    inclusion.project(&mut included);
    assert!(included.len() <= doc.len());
    assert_eq!(included.get(ID_FIELD), doc.get(ID_FIELD));
});
