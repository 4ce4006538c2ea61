use std::io::Cursor;
use std::path::{Path, PathBuf};

fn temp_dir(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!(
        "morphkit_{name}_{}_{}",
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ))
}

fn write_png(path: &Path, rgba: [u8; 4]) {
    let img = image::RgbaImage::from_pixel(8, 8, image::Rgba(rgba));
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();
    std::fs::write(path, &buf).unwrap();
}

fn bin() -> PathBuf {
    std::env::var_os("CARGO_BIN_EXE_morphkit")
        .map(PathBuf::from)
        .unwrap_or_else(|| {
            let mut p = PathBuf::from("target").join("debug");
            p.push(if cfg!(windows) {
                "morphkit.exe"
            } else {
                "morphkit"
            });
            p
        })
}

#[test]
fn cli_sheet_writes_a_jpeg() {
    let tmp = temp_dir("cli_sheet");
    std::fs::create_dir_all(&tmp).unwrap();

    write_png(&tmp.join("a-morph0-frame0.png"), [255, 0, 0, 255]);
    write_png(&tmp.join("a-morph0-frame1.png"), [0, 0, 255, 255]);

    let out = tmp.join("sheet.jpg");
    let status = std::process::Command::new(bin())
        .arg("sheet")
        .arg("--input-dir")
        .arg(&tmp)
        .arg("--out")
        .arg(&out)
        .args(["--cell-width", "8", "--cell-height", "8", "--take", "2"])
        .status()
        .unwrap();

    assert!(status.success());
    assert_eq!(image::image_dimensions(&out).unwrap(), (16, 8));

    std::fs::remove_dir_all(&tmp).ok();
}

#[test]
fn cli_sheet_fails_nonzero_on_missing_input() {
    let tmp = temp_dir("cli_sheet_missing");

    let status = std::process::Command::new(bin())
        .arg("sheet")
        .arg("--input-dir")
        .arg(tmp.join("nowhere"))
        .arg("--out")
        .arg(tmp.join("sheet.jpg"))
        .status()
        .unwrap();

    assert!(!status.success());
}

#[test]
fn cli_curve_writes_a_png() {
    let tmp = temp_dir("cli_curve");
    std::fs::create_dir_all(&tmp).unwrap();

    let out = tmp.join("fig.png");
    let status = std::process::Command::new(bin())
        .arg("curve")
        .arg("--out")
        .arg(&out)
        .args(["--samples", "10", "--ease", "quad-in-out"])
        .status()
        .unwrap();

    assert!(status.success());
    assert!(out.exists());

    std::fs::remove_dir_all(&tmp).ok();
}

#[test]
fn cli_curve_reads_a_job_config() {
    let tmp = temp_dir("cli_curve_job");
    std::fs::create_dir_all(&tmp).unwrap();

    let out = tmp.join("fig.png");
    let job = serde_json::json!({
        "p0": { "x": 0.0, "y": 0.0 },
        "p1": { "x": 2.0, "y": 3.0 },
        "p2": { "x": 4.0, "y": 0.0 },
        "samples": 25,
        "ease": "linear",
        "output_path": out,
    });
    let job_path = tmp.join("curve.json");
    std::fs::write(&job_path, serde_json::to_vec_pretty(&job).unwrap()).unwrap();

    let status = std::process::Command::new(bin())
        .arg("curve")
        .arg("--config")
        .arg(&job_path)
        .status()
        .unwrap();

    assert!(status.success());
    assert!(out.exists());

    std::fs::remove_dir_all(&tmp).ok();
}
