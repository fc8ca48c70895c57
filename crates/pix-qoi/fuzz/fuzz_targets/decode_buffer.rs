#![no_main]

use libfuzzer_sys::fuzz_target;
use pix_qoi::pix_core::bytestream::ByteCursor;

fuzz_target!(|data: &[u8]| {
    let mut decoder = pix_qoi::QoiDecoder::new(ByteCursor::new(data));
    let _ = decoder.decode();
});
