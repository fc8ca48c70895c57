/*
 * Copyright (c) 2026.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Decoding the Quite OK Image format
//!
//! [Format Specification](https://qoiformat.org/qoi-specification.pdf)
//!
//! The entry point is [`QoiDecoder`]; call [`decode_headers`] to read
//! image information only, or [`decode`]/[`decode_into`] to get the
//! uncompressed pixels.
//!
//! # Features
//! - `no_std` with the `alloc` feature
//! - Strict structural validation, a malformed stream is rejected as a whole
//! - Fuzz tested
//!
//! [`decode_headers`]: QoiDecoder::decode_headers
//! [`decode`]: QoiDecoder::decode
//! [`decode_into`]: QoiDecoder::decode_into

#![cfg_attr(not(feature = "std"), no_std)]
extern crate alloc;

pub use decoder::*;
pub use errors::*;
pub use pix_core;

mod constants;
mod decoder;
mod errors;
