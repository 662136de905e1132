use byteorder::{LittleEndian, WriteBytesExt};
use criterion::{Criterion, criterion_group, criterion_main};
use quake_mdl::{MdlModel, NORMAL_TABLE, ObjMesh};
use std::io::Cursor;

/// Builds an in-memory MDL file with the given vertex and triangle counts
fn create_test_mdl(num_verts: u32, num_triangles: u32) -> Vec<u8> {
    let mut data = Vec::new();

    data.extend_from_slice(b"IDPO");
    data.write_u32::<LittleEndian>(6).unwrap();
    for v in [0.5f32, 0.5, 0.5] {
        data.write_f32::<LittleEndian>(v).unwrap();
    }
    for v in [-16.0f32, -16.0, -16.0] {
        data.write_f32::<LittleEndian>(v).unwrap();
    }
    data.write_f32::<LittleEndian>(32.0).unwrap();
    for v in [0.0f32, 0.0, 0.0] {
        data.write_f32::<LittleEndian>(v).unwrap();
    }
    data.write_u32::<LittleEndian>(1).unwrap();
    data.write_u32::<LittleEndian>(64).unwrap();
    data.write_u32::<LittleEndian>(64).unwrap();
    data.write_u32::<LittleEndian>(num_verts).unwrap();
    data.write_u32::<LittleEndian>(num_triangles).unwrap();
    data.write_u32::<LittleEndian>(1).unwrap();
    data.write_u32::<LittleEndian>(0).unwrap();
    data.write_u32::<LittleEndian>(0).unwrap();
    data.write_f32::<LittleEndian>(1.0).unwrap();

    data.write_u32::<LittleEndian>(0).unwrap(); // single skin
    data.extend_from_slice(&[0u8; 64 * 64]);

    for i in 0..num_verts {
        data.write_u32::<LittleEndian>(i % 2).unwrap();
        data.write_u32::<LittleEndian>(i % 64).unwrap();
        data.write_u32::<LittleEndian>((i / 64) % 64).unwrap();
    }
    for i in 0..num_triangles {
        data.write_u32::<LittleEndian>(i % 2).unwrap();
        for k in 0..3u32 {
            data.write_u32::<LittleEndian>((i + k) % num_verts).unwrap();
        }
    }

    data.write_u32::<LittleEndian>(0).unwrap();
    data.extend_from_slice(&[0, 0, 0, 0]);
    data.extend_from_slice(&[255, 255, 255, 0]);
    data.extend_from_slice(b"bench\0\0\0\0\0\0\0\0\0\0\0");
    for i in 0..num_verts {
        data.extend_from_slice(&[
            (i % 256) as u8,
            ((i / 2) % 256) as u8,
            ((i / 4) % 256) as u8,
            (i % 162) as u8,
        ]);
    }

    data
}

fn bench_parse(c: &mut Criterion) {
    let data = create_test_mdl(1024, 2048);

    c.bench_function("parse_model", |b| {
        b.iter(|| {
            let mut cursor = Cursor::new(&data);
            let _model = MdlModel::parse(&mut cursor).unwrap();
        })
    });
}

fn bench_convert(c: &mut Criterion) {
    let data = create_test_mdl(1024, 2048);
    let model = MdlModel::parse(&mut Cursor::new(&data)).unwrap();

    c.bench_function("convert_model", |b| {
        b.iter(|| {
            let mesh = ObjMesh::from_model(&model, "bench").unwrap();
            let mut obj = Vec::new();
            mesh.write_obj(&mut obj, &NORMAL_TABLE).unwrap();
            obj
        })
    });
}

criterion_group!(benches, bench_parse, bench_convert);
criterion_main!(benches);
