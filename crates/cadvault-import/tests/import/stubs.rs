use cadvault_core::BoundingBox;
use cadvault_import::CadImporter;

fn assert_stub_scene(filename: &str, format_name: &str) {
    let importer = CadImporter::new();
    let scene = importer
        .parse(&[0x01, 0x02, 0x03, 0x04], filename)
        .unwrap();

    assert_eq!(scene.layers.len(), 1);
    assert_eq!(scene.layers[0].id, "default");
    assert_eq!(scene.object_count(), 0);
    assert_eq!(scene.bounding_box, BoundingBox::placeholder());
    assert_eq!(scene.units, "mm");
    assert_eq!(scene.metadata["format"], format_name);

    let note = scene.metadata["note"].as_str().unwrap();
    assert!(!note.is_empty(), "stub scenes must explain themselves");
}

#[test]
fn test_step_inputs_return_placeholder_scene() {
    assert_stub_scene("housing.step", "STEP");
    assert_stub_scene("housing.stp", "STEP");
}

#[test]
fn test_iges_inputs_return_placeholder_scene() {
    assert_stub_scene("surface.iges", "IGES");
    assert_stub_scene("surface.igs", "IGES");
}

#[test]
fn test_dwg_inputs_return_placeholder_scene() {
    assert_stub_scene("floorplan.dwg", "DWG");
}
