/*
 * Copyright (c) 2026.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! A byte-stream reading abstraction
//!
//! Decoders in this family consume bytes through [`ByteReader`],
//! which wraps anything implementing [`ByteReaderTrait`].
//!
//! For in-memory buffers prefer [`ByteCursor`]; with the `std`
//! feature the trait is also implemented for [`std::io::Cursor`]
//! and [`std::io::BufReader`].
pub use cursor::ByteCursor;
pub use reader::{ByteIoError, ByteReader};
pub use traits::ByteReaderTrait;

mod cursor;
mod reader;
#[cfg(feature = "std")]
mod std_readers;
mod traits;
