/*
 * Copyright (c) 2026.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Decoder options
//!
//! This module exposes a struct for which all implemented
//! decoders get shared options for decoding.
//!
//! The same `DecoderOptions` value can be reused across decoders.
pub use decoder::DecoderOptions;

mod decoder;
