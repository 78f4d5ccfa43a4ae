use launcher_icons::output_plan::{generate_all, OutputPlan, DENSITIES};
use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

const BINARY: &str = env!("CARGO_BIN_EXE_launcher-icons");

/// Runs `launcher-icons -o <tmp>/res` against an empty root and checks the full layout.
#[test]
fn test_generates_full_mipmap_layout() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let output_dir = temp_dir.path().join("res");

    let output = Command::new(BINARY)
        .arg("-o")
        .arg(&output_dir)
        .output()
        .expect("Failed to run launcher-icons");

    if !output.status.success() {
        eprintln!("stdout: {}", String::from_utf8_lossy(&output.stdout));
        eprintln!("stderr: {}", String::from_utf8_lossy(&output.stderr));
        panic!("launcher-icons command failed");
    }

    for (density, legacy_size, adaptive_size) in DENSITIES {
        let mipmap_dir = output_dir.join(format!("mipmap-{density}"));
        assert_png_size(&mipmap_dir.join("ic_launcher.png"), legacy_size);
        assert_png_size(&mipmap_dir.join("ic_launcher_round.png"), legacy_size);
        assert_png_size(&mipmap_dir.join("ic_launcher_foreground.png"), adaptive_size);
    }
    assert_png_size(&output_dir.join("mipmap-mdpi/ic_launcher.png"), 48);
    assert_png_size(&output_dir.join("mipmap-xxxhdpi/ic_launcher_foreground.png"), 432);
    assert_png_size(&output_dir.join("playstore-icon.png"), 512);

    let xml = std::fs::read_to_string(output_dir.join("values/ic_launcher_background.xml"))
        .expect("Failed to read color resource");
    assert_eq!(
        xml,
        "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n\
         <resources>\n    \
         <color name=\"ic_launcher_background\">#0a0e27</color>\n\
         </resources>\n"
    );

    assert_eq!(count_files(&output_dir), 17);

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.matches("✓").count(), 17);
    assert!(stdout.contains("ic_launcher.png (legacy, 48x48)"));
    assert!(stdout.contains("ic_launcher_round.png (round, 48x48)"));
    assert!(stdout.contains("ic_launcher_foreground.png (foreground, 432x432)"));
    assert!(stdout.contains("Done!"));
}

#[test]
fn test_regeneration_is_byte_identical() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let root = temp_dir.path();

    let first = generate_all(root).expect("First run failed");
    let first_bytes: Vec<Vec<u8>> = first.iter().map(|p| std::fs::read(p).unwrap()).collect();

    let second = generate_all(root).expect("Second run failed");
    let second_bytes: Vec<Vec<u8>> = second.iter().map(|p| std::fs::read(p).unwrap()).collect();

    assert_eq!(first, second);
    assert_eq!(first.len(), 17);
    assert_eq!(first_bytes, second_bytes);
}

#[test]
fn test_unwritable_root_is_an_error() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let blocker = temp_dir.path().join("not-a-dir");
    std::fs::write(&blocker, b"file").unwrap();

    let result = generate_all(&blocker);
    assert!(result.is_err());
}

/// A failure partway through stops the plan but keeps what was already written.
#[test]
fn test_failure_keeps_earlier_files_and_rerun_repairs() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let root = temp_dir.path();

    // A regular file where the values/ directory belongs blocks the color resource.
    let blocker = root.join("values");
    std::fs::write(&blocker, b"file").unwrap();

    let result = generate_all(root);
    assert!(result.is_err());

    for (density, legacy_size, adaptive_size) in DENSITIES {
        let mipmap_dir = root.join(format!("mipmap-{density}"));
        assert_png_size(&mipmap_dir.join("ic_launcher.png"), legacy_size);
        assert_png_size(&mipmap_dir.join("ic_launcher_round.png"), legacy_size);
        assert_png_size(&mipmap_dir.join("ic_launcher_foreground.png"), adaptive_size);
    }
    assert_png_size(&root.join("playstore-icon.png"), 512);
    assert!(!root.join("values/ic_launcher_background.xml").exists());

    std::fs::remove_file(&blocker).unwrap();
    let written = generate_all(root).expect("Rerun after removing the blocker failed");
    assert_eq!(written.len(), 17);
    assert!(root.join("values/ic_launcher_background.xml").is_file());
    assert_eq!(count_files(root), 17);
}

#[test]
fn test_list_prints_plan_json() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let output_dir = temp_dir.path().join("res");

    let output = Command::new(BINARY)
        .arg("--list")
        .arg("-o")
        .arg(&output_dir)
        .output()
        .expect("Failed to run launcher-icons --list");
    assert!(output.status.success());
    assert!(!output_dir.exists(), "--list must not write anything");

    let parsed: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("--list should print valid JSON");
    let artifacts = parsed["artifacts"].as_array().unwrap();
    assert_eq!(artifacts.len(), 17);

    let first = &artifacts[0];
    assert_eq!(first["path"], "mipmap-mdpi/ic_launcher.png");
    assert_eq!(first["density"], "mdpi");
    assert_eq!(first["kind"], "image");
    assert_eq!(first["variant"], "legacy");
    assert_eq!(first["size"], 48);

    let store = &artifacts[15];
    assert_eq!(store["path"], "playstore-icon.png");
    assert!(store.get("density").is_none());
    assert_eq!(store["size"], 512);

    assert_eq!(artifacts[16]["kind"], "color_resource");
    assert_eq!(artifacts[16]["path"], "values/ic_launcher_background.xml");
}

#[test]
fn test_plan_matches_density_table() {
    let plan = OutputPlan::android();
    assert_eq!(plan.artifacts.len(), DENSITIES.len() * 3 + 2);

    let mut paths: Vec<&str> = plan.artifacts.iter().map(|a| a.path.as_str()).collect();
    paths.sort();
    paths.dedup();
    assert_eq!(paths.len(), plan.artifacts.len(), "plan paths must be unique");
}

fn assert_png_size(path: &Path, size: u32) {
    assert!(path.exists(), "{} should exist", path.display());
    let (width, height) = image::image_dimensions(path)
        .unwrap_or_else(|e| panic!("Failed to read {}: {e}", path.display()));
    assert_eq!((width, height), (size, size), "{}", path.display());
}

fn count_files(dir: &Path) -> usize {
    std::fs::read_dir(dir)
        .unwrap()
        .map(|entry| {
            let path = entry.unwrap().path();
            if path.is_dir() {
                count_files(&path)
            } else {
                1
            }
        })
        .sum()
}
