use cadvault_core::{ObjectGeometry, ObjectKind, Point3};
use cadvault_import::CadImporter;

fn mesh_of(scene: &cadvault_core::ParsedScene) -> &cadvault_core::MeshGeometry {
    assert_eq!(scene.layers.len(), 1);
    assert_eq!(scene.layers[0].objects.len(), 1);
    match &scene.layers[0].objects[0].geometry {
        ObjectGeometry::Polyline(mesh) => mesh,
        other => panic!("Expected a mesh, got {:?}", other),
    }
}

#[test]
fn test_obj_vertices_and_single_face() {
    let importer = CadImporter::new();
    let obj = "v 0 0 0\nv 10 0 0\nv 0 10 0\nf 1 2 3\n";
    let scene = importer.parse(obj.as_bytes(), "tri.obj").unwrap();

    assert_eq!(scene.metadata["format"], "OBJ");
    assert_eq!(scene.metadata["vertexCount"], 3);
    assert_eq!(scene.metadata["faceCount"], 1);

    let mesh = mesh_of(&scene);
    assert_eq!(mesh.vertices[1], Point3::new(10.0, 0.0, 0.0));
    // References are converted from 1-based to 0-based
    assert_eq!(mesh.faces, vec![[0, 1, 2]]);

    assert_eq!(scene.bounding_box.min, Point3::new(0.0, 0.0, 0.0));
    assert_eq!(scene.bounding_box.max, Point3::new(10.0, 10.0, 0.0));
}

#[test]
fn test_obj_face_references_with_slashes() {
    let importer = CadImporter::new();
    let obj = "v 0 0 1\nv 1 0 1\nv 1 1 1\nf 1/1/1 2/2/2 3/3/3\n";
    let scene = importer.parse(obj.as_bytes(), "slash.obj").unwrap();
    assert_eq!(mesh_of(&scene).faces, vec![[0, 1, 2]]);
}

#[test]
fn test_obj_ngon_reads_first_three_references() {
    let importer = CadImporter::new();
    let obj = "v 0 0 0\nv 1 0 0\nv 1 1 0\nv 0 1 0\nf 1 2 3 4\n";
    let scene = importer.parse(obj.as_bytes(), "quad.obj").unwrap();
    // Positional read, no fan-triangulation
    assert_eq!(scene.metadata["faceCount"], 1);
    assert_eq!(mesh_of(&scene).faces, vec![[0, 1, 2]]);
}

#[test]
fn test_obj_empty_input_keeps_degenerate_bounds() {
    let importer = CadImporter::new();
    let scene = importer.parse(b"# nothing here\n", "empty.obj").unwrap();
    assert_eq!(scene.metadata["vertexCount"], 0);
    // The flat-vertex path does not synthesize a default footprint
    assert!(scene.bounding_box.min.x.is_infinite());
    assert!(scene.bounding_box.max.x.is_infinite());
}

fn binary_stl(triangles: &[[[f32; 3]; 3]]) -> Vec<u8> {
    let mut bytes = vec![0u8; 80];
    bytes.extend_from_slice(&(triangles.len() as u32).to_le_bytes());
    for triangle in triangles {
        bytes.extend_from_slice(&[0u8; 12]); // normal
        for vertex in triangle {
            for component in vertex {
                bytes.extend_from_slice(&component.to_le_bytes());
            }
        }
        bytes.extend_from_slice(&[0u8; 2]); // attribute byte count
    }
    bytes
}

#[test]
fn test_binary_stl_counts_and_geometry() {
    let bytes = binary_stl(&[
        [[0.0, 0.0, 0.0], [10.0, 0.0, 0.0], [0.0, 10.0, 0.0]],
        [[0.0, 0.0, 0.0], [0.0, 0.0, 5.0], [10.0, 0.0, 0.0]],
    ]);
    let scene = CadImporter::new().parse(&bytes, "part.stl").unwrap();

    assert_eq!(scene.metadata["format"], "STL");
    assert_eq!(scene.metadata["triangleCount"], 2);
    assert_eq!(scene.metadata["vertexCount"], 6);

    let mesh = mesh_of(&scene);
    assert_eq!(mesh.faces, vec![[0, 1, 2], [3, 4, 5]]);
    assert_eq!(mesh.vertices[4], Point3::new(0.0, 0.0, 5.0));
    assert_eq!(scene.bounding_box.max, Point3::new(10.0, 10.0, 5.0));
}

#[test]
fn test_ascii_stl_matches_binary_counts() {
    let ascii = concat!(
        "solid widget\n",
        " facet normal 0 0 1\n",
        "  outer loop\n",
        "   vertex 0 0 0\n",
        "   vertex 10 0 0\n",
        "   vertex 0 10 0\n",
        "  endloop\n",
        " endfacet\n",
        " facet normal 0 1 0\n",
        "  outer loop\n",
        "   vertex 0 0 0\n",
        "   vertex 0 0 5\n",
        "   vertex 10 0 0\n",
        "  endloop\n",
        " endfacet\n",
        "endsolid widget\n",
    );
    let scene = CadImporter::new().parse(ascii.as_bytes(), "part.stl").unwrap();

    assert_eq!(scene.metadata["triangleCount"], 2);
    assert_eq!(scene.metadata["vertexCount"], 6);
    assert_eq!(scene.bounding_box.max, Point3::new(10.0, 10.0, 5.0));
    // The solid's name is kept as a property on the mesh object
    assert_eq!(scene.layers[0].objects[0].properties["name"], "widget");
}

#[test]
fn test_ascii_stl_drops_partial_facets() {
    let ascii = concat!(
        "solid broken\n",
        " facet normal 0 0 1\n",
        "  outer loop\n",
        "   vertex 0 0 0\n",
        "   vertex 10 0 0\n",
        "  endloop\n",
        " endfacet\n",
        "endsolid broken\n",
    );
    let scene = CadImporter::new().parse(ascii.as_bytes(), "part.stl").unwrap();
    assert_eq!(scene.metadata["triangleCount"], 0);
    assert_eq!(scene.metadata["vertexCount"], 0);
}

#[test]
fn test_stl_garbage_bytes_never_error() {
    // Random bytes whose length does not match the binary formula take the
    // ASCII path and decode to an empty mesh
    let scene = CadImporter::new()
        .parse(&[0xDE, 0xAD, 0xBE, 0xEF, 0x00], "junk.stl")
        .unwrap();
    assert_eq!(scene.layers.len(), 1);
    assert_eq!(scene.metadata["triangleCount"], 0);
    assert_eq!(scene.layers[0].objects[0].kind(), ObjectKind::Polyline);
}
