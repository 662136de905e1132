//! CLI integration tests for mdl2obj
//!
//! These run the real binary against synthetic MDL files in a temporary
//! working directory and check the emitted OBJ/MTL documents.

use assert_cmd::Command;
use byteorder::{LittleEndian, WriteBytesExt};
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Builds a minimal valid MDL file: no skins, one vertex, one triangle
fn create_test_mdl() -> Vec<u8> {
    let mut data = Vec::new();

    data.extend_from_slice(b"IDPO");
    data.write_u32::<LittleEndian>(6).unwrap();
    for v in [1.0f32, 1.0, 1.0] {
        data.write_f32::<LittleEndian>(v).unwrap(); // scale
    }
    for v in [0.0f32, 0.0, 0.0] {
        data.write_f32::<LittleEndian>(v).unwrap(); // origin
    }
    data.write_f32::<LittleEndian>(10.0).unwrap(); // radius
    for v in [0.0f32, 0.0, 0.0] {
        data.write_f32::<LittleEndian>(v).unwrap(); // offsets
    }
    data.write_u32::<LittleEndian>(0).unwrap(); // num_skins
    data.write_u32::<LittleEndian>(8).unwrap(); // skin_width
    data.write_u32::<LittleEndian>(4).unwrap(); // skin_height
    data.write_u32::<LittleEndian>(1).unwrap(); // num_verts
    data.write_u32::<LittleEndian>(1).unwrap(); // num_triangles
    data.write_u32::<LittleEndian>(1).unwrap(); // num_frames
    data.write_u32::<LittleEndian>(0).unwrap(); // sync_type
    data.write_u32::<LittleEndian>(0).unwrap(); // flags
    data.write_f32::<LittleEndian>(1.0).unwrap(); // size

    for v in [0u32, 4, 2] {
        data.write_u32::<LittleEndian>(v).unwrap(); // texture vertex
    }
    for v in [1u32, 0, 0, 0] {
        data.write_u32::<LittleEndian>(v).unwrap(); // triangle
    }

    data.write_u32::<LittleEndian>(0).unwrap(); // frame type
    data.extend_from_slice(&[0, 0, 0, 0]); // min
    data.extend_from_slice(&[255, 255, 255, 0]); // max
    data.extend_from_slice(b"only\0\0\0\0\0\0\0\0\0\0\0\0");
    data.extend_from_slice(&[10, 20, 30, 5]); // packed vertex

    data
}

#[test]
fn test_no_arguments_prints_usage() {
    Command::cargo_bin("mdl2obj")
        .unwrap()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_surplus_arguments_rejected() {
    Command::cargo_bin("mdl2obj")
        .unwrap()
        .args(["a.mdl", "b.mdl"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_converts_model_to_obj_and_mtl() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("dog.mdl"), create_test_mdl()).unwrap();

    Command::cargo_bin("mdl2obj")
        .unwrap()
        .current_dir(temp.path())
        .arg("dog.mdl")
        .assert()
        .success();

    let obj = fs::read_to_string(temp.path().join("dog.obj")).unwrap();
    assert!(obj.starts_with("o dog\nmtllib dog.mtl\nusemtl dog\nv -10 30 20\n"));
    assert_eq!(obj.lines().filter(|l| l.starts_with("vn ")).count(), 162);
    assert!(obj.ends_with("f 1/1/5 1/1/5 1/1/5\n"));

    let mtl = fs::read_to_string(temp.path().join("dog.mtl")).unwrap();
    assert!(mtl.starts_with("newmtl dog\n"));
    assert!(mtl.contains("map_Kd dog.jpg"));
}

#[test]
fn test_conversion_is_idempotent() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("dog.mdl"), create_test_mdl()).unwrap();

    let mut outputs = Vec::new();
    for _ in 0..2 {
        Command::cargo_bin("mdl2obj")
            .unwrap()
            .current_dir(temp.path())
            .arg("dog.mdl")
            .assert()
            .success();
        outputs.push((
            fs::read(temp.path().join("dog.obj")).unwrap(),
            fs::read(temp.path().join("dog.mtl")).unwrap(),
        ));
    }
    assert_eq!(outputs[0], outputs[1]);
}

#[test]
fn test_bad_magic_fails_with_diagnostic() {
    let temp = TempDir::new().unwrap();
    let mut data = create_test_mdl();
    data[..4].copy_from_slice(b"IDP2");
    fs::write(temp.path().join("bad.mdl"), data).unwrap();

    Command::cargo_bin("mdl2obj")
        .unwrap()
        .current_dir(temp.path())
        .arg("bad.mdl")
        .assert()
        .failure()
        .stderr(predicate::str::contains("IDP2"));
}

#[test]
fn test_missing_file_fails() {
    let temp = TempDir::new().unwrap();

    Command::cargo_bin("mdl2obj")
        .unwrap()
        .current_dir(temp.path())
        .arg("nope.mdl")
        .assert()
        .failure()
        .stderr(predicate::str::contains("nope.mdl"));
}
