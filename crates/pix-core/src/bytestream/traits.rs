/*
 * Copyright (c) 2026.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Input traits for the pix family of decoders.

use crate::bytestream::reader::ByteIoError;

/// The input trait implemented for byte sources.
///
/// This provides the basic reads the decoders need, with support
/// for extending it to multiple source implementations.
/// Decoding in this family is strictly linear, so the trait only
/// models forward reads with a well-defined short-read signal.
///
/// # Considerations
///
/// If you have an in memory buffer, prefer
/// [`ByteCursor`](crate::bytestream::ByteCursor) over
/// [`Cursor`](std::io::Cursor); it avoids going through `std::io`
/// machinery for reads that are simple slice accesses.
pub trait ByteReaderTrait {
    /// Read a single byte from the source and return
    /// `0` if we can't read one, e.g because of EOF.
    ///
    /// The implementation should try to be as fast as possible as this is
    /// called from hot loops where it may become the bottleneck
    fn read_byte_no_error(&mut self) -> u8;

    /// Read exact bytes required to fill `buf` or return an error
    /// if that isn't possible.
    ///
    /// # Arguments
    ///  - `buf`: Buffer to fill with bytes from the underlying source
    fn read_exact_bytes(&mut self, buf: &mut [u8]) -> Result<(), ByteIoError>;

    /// Read exact bytes required to fill `buf` or return an error
    /// if that isn't possible.
    ///
    /// This is the same as [`read_exact_bytes`](Self::read_exact_bytes) but
    /// implemented as a separate method to allow implementations to optimize
    /// it for lengths known at compile time.
    fn read_const_bytes<const N: usize>(&mut self, buf: &mut [u8; N]) -> Result<(), ByteIoError>;

    /// Read exact bytes required to fill `buf`, leaving `buf`
    /// untouched if the source cannot satisfy the read.
    fn read_const_bytes_no_error<const N: usize>(&mut self, buf: &mut [u8; N]);

    /// Read bytes into `buf` returning how many bytes were read
    /// or an error if one occurred.
    ///
    /// This doesn't guarantee that `buf` will be filled, for such a
    /// guarantee see [`read_exact_bytes`](Self::read_exact_bytes)
    fn read_bytes(&mut self, buf: &mut [u8]) -> Result<usize, ByteIoError>;

    /// Report whether we are at the end of the source.
    ///
    /// # Warning
    /// This may cause an additional syscall, e.g when reading from a file,
    /// so use it sparingly.
    fn is_eof(&mut self) -> Result<bool, ByteIoError>;

    /// Return the current position of the inner cursor.
    ///
    /// This can be used to check the advancement of the cursor
    fn position(&mut self) -> Result<u64, ByteIoError>;

    /// Read all bytes remaining in this source into `sink` until EOF.
    ///
    /// # Returns
    /// - `Ok(usize)`: The actual number of bytes added to the sink
    /// - `Err()`: An error that occurred when reading bytes
    fn read_remaining(&mut self, sink: &mut alloc::vec::Vec<u8>) -> Result<usize, ByteIoError>;
}
