//! End-to-end pipeline tests over generated nested-archive fixtures.
//!
//! The fixtures are served from a loopback HTTP listener so the full
//! fetch → expand → discover → encode → join → finalize chain runs.
//! Tests that encode video are skipped when ffmpeg is not installed.

use clipforge::catalog::{Assembly, ItemSpec, Source};
use clipforge::pipeline::ItemPipeline;
use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::net::TcpListener;
use std::path::Path;
use std::thread;

fn ffmpeg_available() -> bool {
    clipforge_av::tools::check_tool_with_arg("ffmpeg", "-version").available
}

/// Write ten zero-padded JPEG frames into a part directory.
fn write_part_frames(dir: &Path, shade: u8) {
    std::fs::create_dir_all(dir).unwrap();
    for i in 1..=10u32 {
        let frame = image::RgbImage::from_pixel(64, 64, image::Rgb([shade, 96, 160]));
        frame.save(dir.join(format!("{i:08}.jpg"))).unwrap();
    }
}

/// Pack a directory into `archive` as a tar.xz with one top-level entry.
fn tar_xz_dir(archive: &Path, entry_name: &str, dir: &Path) {
    let file = File::create(archive).unwrap();
    let encoder = xz2::write::XzEncoder::new(file, 6);
    let mut builder = tar::Builder::new(encoder);
    builder.append_dir_all(entry_name, dir).unwrap();
    builder.into_inner().unwrap().finish().unwrap();
}

/// Pack named files into `archive` as a tar.xz.
fn tar_xz_files(archive: &Path, files: &[(&str, &Path)]) {
    let file = File::create(archive).unwrap();
    let encoder = xz2::write::XzEncoder::new(file, 6);
    let mut builder = tar::Builder::new(encoder);
    for (name, path) in files {
        builder.append_path_with_name(path, name).unwrap();
    }
    builder.into_inner().unwrap().finish().unwrap();
}

/// Serve one canned 200 response on a loopback port.
fn serve_bytes(body: Vec<u8>) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();

    thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let mut reader = BufReader::new(stream.try_clone().unwrap());
        let mut line = String::new();
        loop {
            line.clear();
            if reader.read_line(&mut line).unwrap() == 0 || line == "\r\n" {
                break;
            }
        }
        let header = format!(
            "HTTP/1.1 200 OK\r\nConnection: close\r\nContent-Length: {}\r\n\r\n",
            body.len()
        );
        stream.write_all(header.as_bytes()).unwrap();
        stream.write_all(&body).unwrap();
    });

    format!("http://{addr}/fixture.tar.xz")
}

/// Build a top-level archive nesting three part archives. `empty_part`
/// leaves that part without frames so its segment build fails.
fn build_fixture(work: &Path, empty_part: Option<usize>) -> Vec<u8> {
    let mut nested_paths = Vec::new();
    for i in 1..=3usize {
        let part_name = format!("part_C{i}");
        let staging = work.join(format!("staging_{i}"));
        if empty_part == Some(i) {
            std::fs::create_dir_all(&staging).unwrap();
        } else {
            write_part_frames(&staging, (i * 60) as u8);
        }

        let nested = work.join(format!("{part_name}.tar.xz"));
        tar_xz_dir(&nested, &part_name, &staging);
        nested_paths.push(nested);
    }

    let top = work.join("fixture.tar.xz");
    let entries: Vec<(String, &Path)> = nested_paths
        .iter()
        .map(|p| {
            (
                p.file_name().unwrap().to_string_lossy().to_string(),
                p.as_path(),
            )
        })
        .collect();
    let named: Vec<(&str, &Path)> = entries.iter().map(|(n, p)| (n.as_str(), *p)).collect();
    tar_xz_files(&top, &named);

    std::fs::read(&top).unwrap()
}

fn nested_item(url: String) -> ItemSpec {
    ItemSpec {
        name: "choke-fixture".to_string(),
        source: Source::Archive {
            url,
            assembly: Assembly::NestedParts {
                pattern: "%08d.jpg".to_string(),
            },
        },
        output_dir: "IJCB Videos".into(),
        output_name: "ChokeFixture.mkv".to_string(),
        fps: 30.0,
        cut: None,
        filters: Vec::new(),
    }
}

#[test]
fn nested_archive_pipeline_produces_final_asset() {
    if !ffmpeg_available() {
        eprintln!("skipping: ffmpeg not available");
        return;
    }

    let work = tempfile::tempdir().unwrap();
    let body = build_fixture(work.path(), None);
    let url = serve_bytes(body);

    let output_root = tempfile::tempdir().unwrap();
    let item = nested_item(url);

    let final_path = ItemPipeline::new(&item, output_root.path()).run().unwrap();

    assert_eq!(
        final_path,
        output_root.path().join("IJCB Videos/ChokeFixture.mkv")
    );
    assert!(final_path.exists());
    assert!(std::fs::metadata(&final_path).unwrap().len() > 0);
}

#[test]
fn pipeline_aborts_when_a_segment_fails() {
    if !ffmpeg_available() {
        eprintln!("skipping: ffmpeg not available");
        return;
    }

    let work = tempfile::tempdir().unwrap();
    // Part 2 has no frames, so its segment build fails and the join
    // must never happen.
    let body = build_fixture(work.path(), Some(2));
    let url = serve_bytes(body);

    let output_root = tempfile::tempdir().unwrap();
    let item = nested_item(url);

    let err = ItemPipeline::new(&item, output_root.path())
        .run()
        .unwrap_err();

    match err.downcast_ref::<clipforge_av::Error>() {
        Some(clipforge_av::Error::SegmentCount { expected, built }) => {
            assert_eq!(*expected, 3);
            assert_eq!(*built, 2);
        }
        other => panic!("expected segment count error, got {other:?}"),
    }

    assert!(!item.final_path(output_root.path()).exists());
}

#[test]
fn expansion_failure_aborts_before_any_encoding() {
    // Needs no ffmpeg: the pipeline dies at the expander.
    let url = serve_bytes(b"not an xz archive at all".to_vec());

    let output_root = tempfile::tempdir().unwrap();
    let item = nested_item(url);

    let err = ItemPipeline::new(&item, output_root.path())
        .run()
        .unwrap_err();

    assert!(matches!(
        err.downcast_ref::<clipforge_av::Error>(),
        Some(clipforge_av::Error::Expansion { .. })
    ));
    assert!(!item.final_path(output_root.path()).exists());
}
