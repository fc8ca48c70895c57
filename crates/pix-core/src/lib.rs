/*
 * Copyright (c) 2026.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Core routines shared by the pix family of decoders
//!
//! This crate provides the support layer the format crates build on:
//!
//! - A byte-stream reading abstraction with endian aware reads
//! - Colorspace and bit depth information shared by images
//! - Decoder options
//! - A logging shim that forwards to the `log` crate when enabled
//!
//! The crate is `#[no_std]` with `alloc`; the `std` feature adds
//! `std::io` sources and `std::error::Error` impls.
//!
//! # Features
//!  - `std`: Enables standard library support.
//!  - `log`: Routes the logging macros through the `log` crate.
#![cfg_attr(not(feature = "std"), no_std)]
#![macro_use]
extern crate alloc;

pub mod bit_depth;
pub mod bytestream;
pub mod colorspace;
pub mod log;
pub mod options;
