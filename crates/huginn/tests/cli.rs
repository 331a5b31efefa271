use std::{fs, path::Path};

use clap::Parser;
use huginn::{
    Error,
    cli::{Cli, Commands, decode::Decode, encode::Encode},
    tensor,
};
use tempfile::tempdir;

const DETECTOR_CONFIG: &str = r#"
input_width = 32
input_height = 16
detection_slots = 4
confidence_threshold = 0.5
classes = ["ball", "robot"]
"#;

fn write_config(dir: &Path) {
    fs::write(dir.join("detector.toml"), DETECTOR_CONFIG).unwrap();
}

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(std::iter::once("huginn").chain(args.iter().copied())).unwrap()
}

#[test]
fn encode_writes_planar_tensor() {
    let dir = tempdir().unwrap();
    write_config(dir.path());

    let image_path = dir.path().join("red.png");
    image::RgbImage::from_pixel(64, 32, image::Rgb([255, 0, 0]))
        .save(&image_path)
        .unwrap();
    let tensor_path = dir.path().join("input.bin");

    let cli = Cli {
        action: Commands::Encode(Encode {
            image: image_path,
            output: tensor_path.clone(),
        }),
        config: dir.path().to_path_buf(),
        overlay: None,
        verbose: false,
    };
    let config = cli.detector_config().unwrap();
    let Commands::Encode(encode) = cli.action else {
        unreachable!()
    };
    encode.encode(&config).unwrap();

    let values = tensor::read(&tensor_path).unwrap();
    assert_eq!(values.len(), 3 * 32 * 16);

    let (red, rest) = values.split_at(32 * 16);
    assert!(red.iter().all(|v| (v - 1.0).abs() < 2.0 / 255.0));
    assert!(rest.iter().all(|v| v.abs() < 2.0 / 255.0));
}

#[test]
fn decode_rejects_wrong_tensor_size() {
    let dir = tempdir().unwrap();
    write_config(dir.path());

    let tensor_path = dir.path().join("output.bin");
    tensor::write(&tensor_path, &[0.0; 8]).unwrap();

    let cli = parse(&[
        "decode",
        tensor_path.to_str().unwrap(),
        "--width",
        "320",
        "--height",
        "160",
        "--config",
        dir.path().to_str().unwrap(),
    ]);
    let config = cli.detector_config().unwrap();
    let Commands::Decode(decode) = cli.action else {
        panic!("expected the decode command");
    };

    assert!(matches!(
        decode.decode(&config),
        Err(Error::Detection(detection::Error::InsufficientBuffer {
            expected: 24,
            actual: 8
        }))
    ));
}

#[test]
fn decode_accepts_model_sized_tensor() {
    let dir = tempdir().unwrap();
    write_config(dir.path());

    let tensor_path = dir.path().join("output.bin");
    tensor::write(&tensor_path, &[0.0; 24]).unwrap();

    let cli = parse(&[
        "decode",
        tensor_path.to_str().unwrap(),
        "--width",
        "320",
        "--height",
        "160",
        "--config",
        dir.path().to_str().unwrap(),
    ]);
    let config = cli.detector_config().unwrap();
    let Commands::Decode(decode) = cli.action else {
        panic!("expected the decode command");
    };

    decode.decode(&config).unwrap();
}

#[test]
fn decode_needs_original_dimensions() {
    assert!(Cli::try_parse_from(["huginn", "decode", "output.bin"]).is_err());
    assert!(Cli::try_parse_from(["huginn", "decode", "output.bin", "--width", "10"]).is_err());
    assert!(
        Cli::try_parse_from([
            "huginn",
            "decode",
            "output.bin",
            "--image",
            "a.png",
            "--width",
            "10",
            "--height",
            "10",
        ])
        .is_err()
    );

    let cli = parse(&["decode", "output.bin", "--image", "a.png"]);
    let Commands::Decode(Decode { image, width, .. }) = cli.action else {
        panic!("expected the decode command");
    };
    assert_eq!(image.as_deref(), Some(Path::new("a.png")));
    assert_eq!(width, None);
}

#[test]
fn overlay_overrides_config() {
    let dir = tempdir().unwrap();
    write_config(dir.path());

    let overlay = dir.path().join("overlay");
    fs::create_dir(&overlay).unwrap();
    fs::write(overlay.join("detector.toml"), "confidence_threshold = 0.25").unwrap();

    let cli = parse(&[
        "classes",
        "--config",
        dir.path().to_str().unwrap(),
        "--overlay",
        overlay.to_str().unwrap(),
    ]);
    let config = cli.detector_config().unwrap();

    assert!((config.confidence_threshold - 0.25).abs() < f32::EPSILON);
    assert_eq!(config.classes, ["ball", "robot"]);
}
