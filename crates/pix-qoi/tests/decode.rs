/*
 * Copyright (c) 2026.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
use nanorand::Rng;
use pix_core::bytestream::ByteCursor;
use pix_core::colorspace::{ColorCharacteristics, ColorSpace};
use pix_core::options::DecoderOptions;
use pix_qoi::{QoiDecoder, QoiErrors};

const END_MARKER: [u8; 8] = [0, 0, 0, 0, 0, 0, 0, 1];

/// Build a QOI stream from raw header fields and chunk bytes,
/// appending the end-of-stream marker.
fn qoi_stream(width: u32, height: u32, channels: u8, colorspace: u8, chunks: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(14 + chunks.len() + END_MARKER.len());
    out.extend_from_slice(b"qoif");
    out.extend_from_slice(&width.to_be_bytes());
    out.extend_from_slice(&height.to_be_bytes());
    out.push(channels);
    out.push(colorspace);
    out.extend_from_slice(chunks);
    out.extend_from_slice(&END_MARKER);
    out
}

fn decode(data: &[u8]) -> Result<Vec<u8>, QoiErrors> {
    QoiDecoder::new(ByteCursor::new(data)).decode()
}

#[test]
fn wrong_magic_is_rejected() {
    let mut data = qoi_stream(1, 1, 4, 0, &[0xFF, 1, 2, 3, 4]);
    data[3] = b'g'; // "qoig"

    let err = decode(&data).unwrap_err();
    assert!(matches!(err, QoiErrors::WrongMagicBytes));
}

#[test]
fn zero_width_is_rejected() {
    let data = qoi_stream(0, 10, 4, 0, &[]);
    let err = decode(&data).unwrap_err();
    assert!(matches!(err, QoiErrors::ZeroDimensions(0, 10)));
}

#[test]
fn zero_height_is_rejected() {
    let data = qoi_stream(10, 0, 4, 0, &[]);
    let err = decode(&data).unwrap_err();
    assert!(matches!(err, QoiErrors::ZeroDimensions(10, 0)));
}

#[test]
fn invalid_channel_count_is_rejected() {
    let data = qoi_stream(1, 1, 5, 0, &[0xFF, 1, 2, 3, 4]);
    let err = decode(&data).unwrap_err();
    assert!(matches!(err, QoiErrors::UnknownChannels(5)));
}

#[test]
fn invalid_colorspace_byte_is_rejected() {
    let data = qoi_stream(1, 1, 4, 2, &[0xFF, 1, 2, 3, 4]);
    let err = decode(&data).unwrap_err();
    assert!(matches!(err, QoiErrors::UnknownColorspace(2)));
}

#[test]
fn truncated_header_is_rejected() {
    let err = decode(b"qoif\x00\x00").unwrap_err();
    assert!(matches!(err, QoiErrors::IoErrors(_)));
}

#[test]
fn headers_give_identify_information() {
    let data = qoi_stream(3, 2, 4, 1, &[]);
    let mut decoder = QoiDecoder::new(ByteCursor::new(&data));

    assert!(decoder.dimensions().is_none());
    assert!(decoder.colorspace().is_none());

    decoder.decode_headers().unwrap();

    assert_eq!(decoder.dimensions(), Some((3, 2)));
    assert_eq!(decoder.colorspace(), Some(ColorSpace::RGBA));
    assert_eq!(
        decoder.color_characteristics(),
        Some(ColorCharacteristics::Linear)
    );
    assert_eq!(decoder.output_buffer_size(), Some(3 * 2 * 4));
}

#[test]
fn configured_maximum_width_is_respected() {
    let data = qoi_stream(11, 1, 4, 0, &[]);
    let options = DecoderOptions::default().set_max_width(10);
    let mut decoder = QoiDecoder::new_with_options(ByteCursor::new(&data), options);

    let err = decoder.decode().unwrap_err();
    assert!(matches!(err, QoiErrors::Generic(_)));
}

#[test]
fn rgb_chunk_carries_previous_alpha() {
    // alpha 7 set by an RGBA chunk must survive the following RGB chunk
    let chunks = [0xFF, 1, 2, 3, 7, 0xFE, 4, 5, 6];
    let data = qoi_stream(2, 1, 4, 0, &chunks);

    let pixels = decode(&data).unwrap();
    assert_eq!(pixels, [1, 2, 3, 7, 4, 5, 6, 7]);
}

#[test]
fn index_chunk_references_cached_pixel() {
    // (10,20,30,255) hashes to (10*3 + 20*5 + 30*7 + 255*11) % 64 == 9
    let chunks = [0xFE, 10, 20, 30, 0x09];
    let data = qoi_stream(2, 1, 4, 0, &chunks);

    let pixels = decode(&data).unwrap();
    assert_eq!(pixels, [10, 20, 30, 255, 10, 20, 30, 255]);
}

#[test]
fn index_chunk_can_reference_the_starting_pixel() {
    // (0,0,0,255) hashes to slot 53; it must be referenceable before
    // any chunk wrote to the cache
    let chunks = [53];
    let data = qoi_stream(1, 1, 4, 0, &chunks);

    let pixels = decode(&data).unwrap();
    assert_eq!(pixels, [0, 0, 0, 255]);
}

#[test]
fn run_crosses_row_boundaries() {
    // a run of 5 on a 2-wide image spans rows 0, 1 and half of row 2
    let chunks = [0xC4, 0xFE, 1, 2, 3];
    let data = qoi_stream(2, 3, 4, 0, &chunks);

    let pixels = decode(&data).unwrap();

    let mut expected = [0, 0, 0, 255].repeat(5);
    expected.extend_from_slice(&[1, 2, 3, 255]);
    assert_eq!(pixels, expected);
}

#[test]
fn longest_run_is_sixty_two() {
    let chunks = [0xFD];
    let data = qoi_stream(62, 1, 4, 0, &chunks);

    let pixels = decode(&data).unwrap();
    assert_eq!(pixels, [0, 0, 0, 255].repeat(62));
}

#[test]
fn diff_chunk_wraps_below_zero() {
    // red is 1, a diff of -2 must wrap to 255 and not clamp
    let chunks = [0xFE, 1, 0, 0, 0x4A];
    let data = qoi_stream(2, 1, 4, 0, &chunks);

    let pixels = decode(&data).unwrap();
    assert_eq!(pixels, [1, 0, 0, 255, 255, 0, 0, 255]);
}

#[test]
fn luma_chunk_applies_green_biased_deltas() {
    // dg = 8 (0xA8), dr - dg = 7 (high nibble 15), db - dg = -8 (low nibble 0)
    let chunks = [0xA8, 0xF0];
    let data = qoi_stream(1, 1, 4, 0, &chunks);

    let pixels = decode(&data).unwrap();
    assert_eq!(pixels, [15, 8, 0, 255]);
}

#[test]
fn payload_ops_are_valid_in_three_channel_images() {
    // an RGBA chunk in a 3-channel image updates the carried alpha
    // even though alpha is dropped on output
    let chunks = [0xFF, 9, 8, 7, 6, 0xFE, 1, 2, 3];
    let data = qoi_stream(2, 1, 3, 0, &chunks);

    let pixels = decode(&data).unwrap();
    assert_eq!(pixels, [9, 8, 7, 1, 2, 3]);
}

#[test]
fn reserved_run_byte_values_fail_decoding() {
    // 0xC0 | 62 and 0xC0 | 63 are the RGB/RGBA op-codes; using them
    // where a run was intended swallows marker bytes as payload and
    // the stream must fail validation as a whole
    for reserved in [0xFE, 0xFF] {
        let data = qoi_stream(1, 1, 4, 0, &[reserved]);
        assert!(decode(&data).is_err());
    }
}

#[test]
fn end_marker_must_terminate_in_one() {
    let mut data = qoi_stream(1, 1, 4, 0, &[0xFE, 1, 2, 3]);
    *data.last_mut().unwrap() = 0x00;

    let err = decode(&data).unwrap_err();
    assert!(matches!(err, QoiErrors::GenericStatic(_)));
}

#[test]
fn truncated_end_marker_is_rejected() {
    let mut data = qoi_stream(1, 1, 4, 0, &[0xFE, 1, 2, 3]);
    data.truncate(data.len() - 3);

    let err = decode(&data).unwrap_err();
    assert!(matches!(err, QoiErrors::IoErrors(_)));
}

#[test]
fn trailing_bytes_obey_strict_mode() {
    let mut data = qoi_stream(1, 1, 4, 0, &[0xFE, 1, 2, 3]);
    data.push(0xAB);

    // strict mode is the default
    let err = decode(&data).unwrap_err();
    assert!(matches!(err, QoiErrors::GenericStatic(_)));

    let options = DecoderOptions::default().set_strict_mode(false);
    let mut decoder = QoiDecoder::new_with_options(ByteCursor::new(&data), options);
    assert_eq!(decoder.decode().unwrap(), [1, 2, 3, 255]);
}

#[test]
fn too_small_output_buffer_is_rejected() {
    let data = qoi_stream(2, 2, 4, 0, &[0xC3]);
    let mut decoder = QoiDecoder::new(ByteCursor::new(&data));

    let mut small = [0_u8; 15];
    let err = decoder.decode_into(&mut small).unwrap_err();
    assert!(matches!(err, QoiErrors::TooSmallOutput(16, 15)));
}

#[test]
fn oversized_output_buffer_is_filled_up_to_image_size() {
    let data = qoi_stream(1, 1, 4, 0, &[0xFE, 1, 2, 3]);
    let mut decoder = QoiDecoder::new(ByteCursor::new(&data));

    let mut big = [0xCC_u8; 8];
    decoder.decode_into(&mut big).unwrap();
    assert_eq!(big, [1, 2, 3, 255, 0xCC, 0xCC, 0xCC, 0xCC]);
}

#[test]
fn std_io_sources_decode_like_cursors() {
    let chunks = [0xFE, 10, 20, 30, 0x09];
    let data = qoi_stream(2, 1, 4, 0, &chunks);

    let mut decoder = QoiDecoder::new(std::io::Cursor::new(&data));
    let from_cursor = decoder.decode().unwrap();

    let buffered = std::io::BufReader::new(std::io::Cursor::new(&data));
    let mut decoder = QoiDecoder::new(buffered);
    let from_buf_reader = decoder.decode().unwrap();

    assert_eq!(from_cursor, from_buf_reader);
    assert_eq!(from_cursor, decode(&data).unwrap());
}

fn round_trip(width: u32, height: u32, colors: rapid_qoi::Colors) {
    let channels = match colors {
        rapid_qoi::Colors::Rgb | rapid_qoi::Colors::Srgb => 3,
        _ => 4
    };
    let mut pixels = vec![0_u8; (width * height) as usize * channels];
    nanorand::WyRand::new().fill(&mut pixels);

    let encoder = rapid_qoi::Qoi {
        width,
        height,
        colors
    };
    let encoded = encoder.encode_alloc(&pixels).unwrap();

    let mut decoder = QoiDecoder::new(ByteCursor::new(&encoded));
    let decoded = decoder.decode().unwrap();

    assert_eq!(decoder.dimensions(), Some((width as usize, height as usize)));
    assert_eq!(decoded, pixels);
}

#[test]
fn round_trip_random_rgba() {
    round_trip(127, 63, rapid_qoi::Colors::Rgba);
}

#[test]
fn round_trip_random_rgb() {
    round_trip(64, 65, rapid_qoi::Colors::Rgb);
}
