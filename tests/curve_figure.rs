use std::path::PathBuf;

use morphkit::{
    CurveConfig, Ease, FIGURE_SIZE_PX, MorphkitError, render_curve_figure, sample_quadratic,
};

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

#[test]
fn figure_is_written_and_decodes_at_the_documented_size() {
    let tmp = temp_dir("figure");
    std::fs::create_dir_all(&tmp).unwrap();

    let config = CurveConfig {
        output_path: tmp.join("de_casteljau.png"),
        ..CurveConfig::default()
    };
    let samples = sample_quadratic(&config).unwrap();
    render_curve_figure(&config, &samples).unwrap();

    assert_eq!(
        image::image_dimensions(&config.output_path).unwrap(),
        FIGURE_SIZE_PX
    );

    std::fs::remove_dir_all(&tmp).ok();
}

#[test]
fn figure_parent_dirs_are_created() {
    let tmp = temp_dir("figure_nested");

    let config = CurveConfig {
        output_path: tmp.join("plots").join("fig.png"),
        ..CurveConfig::default()
    };
    let samples = sample_quadratic(&config).unwrap();
    render_curve_figure(&config, &samples).unwrap();
    assert!(config.output_path.exists());

    std::fs::remove_dir_all(&tmp).ok();
}

#[test]
fn eased_sampling_still_pins_the_curve_endpoints() {
    let config = CurveConfig {
        samples: 13,
        ease: Ease::CubicInOut,
        ..CurveConfig::default()
    };
    let samples = sample_quadratic(&config).unwrap();
    assert_eq!(samples.len(), 13);
    assert_eq!(samples[0].b, config.p0);
    assert_eq!(samples.last().unwrap().b, config.p2);
}

#[test]
fn degenerate_sample_count_is_a_validation_error() {
    let config = CurveConfig {
        samples: 1,
        ..CurveConfig::default()
    };
    assert!(matches!(
        sample_quadratic(&config),
        Err(MorphkitError::Validation(_))
    ));
}
