use std::path::PathBuf;

use framecraft::{
    ArtworkConfiguration, ArtworkParams, ArtworkRecord, Catalog, ColorRgba, CropRatio, FrameId,
    FramingMode, MatWidths, MattingStyle,
};
use kurbo::Vec2;

fn bin_path() -> PathBuf {
    std::env::var_os("CARGO_BIN_EXE_framecraft")
        .map(PathBuf::from)
        .unwrap_or_else(|| {
            let mut p = PathBuf::from("target").join("debug");
            p.push(if cfg!(windows) {
                "framecraft.exe"
            } else {
                "framecraft"
            });
            p
        })
}

fn write_stale_frame_config(path: &PathBuf) {
    let config = ArtworkConfiguration::new(
        ArtworkParams {
            name: String::new(),
            image_data: Vec::new(),
            crop_ratio: CropRatio::R11x14,
            mats: MatWidths::ZERO,
            frame_width: 1.0,
            frame_color: ColorRgba::BLACK,
            mat_color: ColorRgba::WHITE,
            image_scale: 1.0,
            image_offset: Vec2::ZERO,
            framing_mode: FramingMode::Standard,
            matting_style: MattingStyle::Centered,
            standard_frame: Some(FrameId::Entry(6)), // 16x20 portrait
            free_ar_enabled: false,
        },
        &Catalog::builtin(),
    )
    .unwrap();

    // Point the persisted record at an index a newer catalog no longer has.
    let mut record = ArtworkRecord::from(config);
    record.standard_frame = Some(FrameId::Entry(999));

    let f = std::fs::File::create(path).unwrap();
    serde_json::to_writer_pretty(f, &record).unwrap();
}

#[test]
fn cli_layout_warns_on_stderr_and_keeps_stdout_json() {
    let dir = PathBuf::from("target").join("cli_smoke");
    std::fs::create_dir_all(&dir).unwrap();

    let config_path = dir.join("stale.json");
    write_stale_frame_config(&config_path);

    let in_arg = config_path.to_string_lossy().to_string();
    let output = std::process::Command::new(bin_path())
        .args(["layout", "--in", in_arg.as_str()])
        .output()
        .unwrap();

    assert!(output.status.success());

    // The unresolved frame reference is reported, and on stderr only, so
    // stdout stays machine-readable.
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("standard frame reference unresolved"),
        "stderr was: {stderr}"
    );

    let layout: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(layout["mats"]["top"], serde_json::json!(0.0));
    assert_eq!(layout["total_width"], serde_json::json!(13.0));
    assert_eq!(layout["total_height"], serde_json::json!(16.0));
}

#[test]
fn cli_frames_lists_the_exact_match_first() {
    let output = std::process::Command::new(bin_path())
        .args(["frames", "--width", "11", "--height", "14"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let first = stdout.lines().next().unwrap();
    assert_eq!(first, "11.0\" x 14.0\" (Exact Match)");
}
