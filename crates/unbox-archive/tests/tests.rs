use std::fs::{self, File};
use std::io::{Cursor, Write};
use std::path::Path;

use unbox_archive::{Error, extract_archive, extract_from_reader};
use zip::write::SimpleFileOptions;

fn write_zip(path: &Path, entries: &[(&str, &[u8])]) {
    let file = File::create(path).expect("Failed to create test archive");
    let mut writer = zip::ZipWriter::new(file);
    for (name, content) in entries {
        if name.ends_with('/') {
            writer
                .add_directory(*name, SimpleFileOptions::default())
                .expect("Failed to add directory");
        } else {
            writer
                .start_file(*name, SimpleFileOptions::default())
                .expect("Failed to start file");
            writer.write_all(content).expect("Failed to write entry");
        }
    }
    writer.finish().expect("Failed to finish archive");
}

#[test]
fn extract_demo_archive() {
    let temp_dir = tempfile::Builder::new()
        .prefix("unbox-test-zip-")
        .tempdir()
        .expect("Failed to create temp dir");
    let archive = temp_dir.path().join("demo.zip");
    write_zip(
        &archive,
        &[
            ("a.txt", b"hey"),
            ("weird:name?.txt", b""),
            ("sub/dir/b.txt", b"12345"),
        ],
    );

    let target = temp_dir.path().join("extracted_data/demo");
    let report = extract_archive(&archive, &target).expect("Extraction of demo.zip failed");

    assert_eq!(report.entry_count, 3);
    assert_eq!(report.total_bytes, 8);
    assert_eq!(fs::read(target.join("a.txt")).unwrap(), b"hey");
    assert_eq!(fs::read(target.join("weird_name_.txt")).unwrap(), b"");
    assert_eq!(fs::read(target.join("sub/dir/b.txt")).unwrap().len(), 5);
    assert!(!target.join("weird:name?.txt").exists());
}

#[test]
fn extraction_is_complete() {
    let names: Vec<String> = (0..25).map(|i| format!("batch/{}/file-{i:02}.dat", i % 4)).collect();
    let payloads: Vec<Vec<u8>> = (0..25).map(|i| vec![i as u8; i * 3]).collect();
    let entries: Vec<(&str, &[u8])> = names
        .iter()
        .zip(&payloads)
        .map(|(n, p)| (n.as_str(), p.as_slice()))
        .collect();

    let temp_dir = tempfile::tempdir().unwrap();
    let archive = temp_dir.path().join("many.zip");
    write_zip(&archive, &entries);

    let target = temp_dir.path().join("many");
    extract_archive(&archive, &target).unwrap();

    let written = walk_files(&target);
    assert_eq!(written, entries.len());
    for (name, payload) in &entries {
        assert_eq!(&fs::read(target.join(name)).unwrap(), payload);
    }
}

#[test]
fn extract_with_directory_entries() {
    let temp_dir = tempfile::tempdir().unwrap();
    let archive = temp_dir.path().join("dirs.zip");
    write_zip(&archive, &[("docs/", b""), ("docs/readme.md", b"# hi"), ("empty/", b"")]);

    let target = temp_dir.path().join("dirs");
    let report = extract_archive(&archive, &target).unwrap();

    assert_eq!(report.files().count(), 1);
    assert!(target.join("empty").is_dir());
    assert_eq!(fs::read_to_string(target.join("docs/readme.md")).unwrap(), "# hi");
}

#[test]
fn extract_into_existing_target() {
    let temp_dir = tempfile::tempdir().unwrap();
    let archive = temp_dir.path().join("again.zip");
    write_zip(&archive, &[("a.txt", b"v1")]);
    let target = temp_dir.path().join("again");

    extract_archive(&archive, &target).unwrap();
    extract_archive(&archive, &target).unwrap();

    assert_eq!(fs::read(target.join("a.txt")).unwrap(), b"v1");
}

#[test]
fn corrupt_archive_leaves_empty_target() {
    let temp_dir = tempfile::tempdir().unwrap();
    let archive = temp_dir.path().join("broken.zip");
    fs::write(&archive, b"this is not a zip file").unwrap();

    let target = temp_dir.path().join("broken");
    let err = extract_archive(&archive, &target).unwrap_err();

    assert!(matches!(err, Error::ArchiveRead(_)));
    assert!(target.is_dir());
    assert_eq!(fs::read_dir(&target).unwrap().count(), 0);
}

#[test]
fn extract_from_in_memory_reader() {
    let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
    writer
        .start_file("x*y.txt", SimpleFileOptions::default())
        .unwrap();
    writer.write_all(b"star").unwrap();
    let data = writer.finish().unwrap().into_inner();

    let temp_dir = tempfile::tempdir().unwrap();
    let report = extract_from_reader(Cursor::new(data), temp_dir.path()).unwrap();

    assert_eq!(report.entry_count, 1);
    assert_eq!(fs::read(temp_dir.path().join("x_y.txt")).unwrap(), b"star");
}

fn walk_files(root: &Path) -> usize {
    let mut count = 0;
    for entry in fs::read_dir(root).unwrap() {
        let path = entry.unwrap().path();
        if path.is_dir() {
            count += walk_files(&path);
        } else {
            count += 1;
        }
    }
    count
}
