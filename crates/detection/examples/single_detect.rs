use detection::{DecodingConfig, DetectionDecoder, MergeOrder, decoder::BOX_ROWS};

fn main() {
    let config = DecodingConfig {
        input_width: 640,
        input_height: 640,
        detection_slots: 8400,
        classes: (0..80).map(|i| format!("class_{i}")).collect(),
        confidence_threshold: 0.5,
        iou_threshold: 0.7,
        merge_order: MergeOrder::Ascending,
    };

    let slots = config.detection_slots;
    let mut output = vec![0.0; config.output_len()];

    // a single 64x128 box in the center of the image, scoring 0.87 for class 17
    for (row, value) in [320.0, 320.0, 64.0, 128.0].into_iter().enumerate() {
        output[row * slots + 42] = value;
    }
    output[(BOX_ROWS + 17) * slots + 42] = 0.87;

    let decoder = DetectionDecoder::new(config).expect("valid decoding config");
    let detections = decoder
        .decode(&output, 1920, 1080)
        .expect("output buffer matches config");

    for detection in detections {
        println!("{detection}");
    }
}
