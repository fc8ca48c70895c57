/*
 * Copyright (c) 2026.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
use alloc::vec::Vec;

use crate::bytestream::reader::ByteIoError;
use crate::bytestream::ByteReaderTrait;

/// An in-memory byte source.
///
/// This is analogous to [`Cursor`](std::io::Cursor) but works in
/// `no_std` builds and keeps reads as plain slice accesses.
pub struct ByteCursor<T: AsRef<[u8]>> {
    inner:    T,
    position: usize
}

impl<T: AsRef<[u8]>> ByteCursor<T> {
    pub fn new(inner: T) -> ByteCursor<T> {
        ByteCursor { inner, position: 0 }
    }

    /// Return the wrapped buffer
    pub fn into_inner(self) -> T {
        self.inner
    }

    #[inline(always)]
    fn remaining(&self) -> &[u8] {
        let stream = self.inner.as_ref();
        &stream[self.position.min(stream.len())..]
    }
}

impl<T: AsRef<[u8]>> ByteReaderTrait for ByteCursor<T> {
    #[inline(always)]
    fn read_byte_no_error(&mut self) -> u8 {
        match self.inner.as_ref().get(self.position) {
            Some(byte) => {
                self.position += 1;
                *byte
            }
            None => 0
        }
    }

    #[inline(always)]
    fn read_exact_bytes(&mut self, buf: &mut [u8]) -> Result<(), ByteIoError> {
        let remaining = self.remaining();
        if remaining.len() < buf.len() {
            return Err(ByteIoError::NotEnoughBytes(buf.len(), remaining.len()));
        }
        buf.copy_from_slice(&remaining[..buf.len()]);
        self.position += buf.len();
        Ok(())
    }

    #[inline(always)]
    fn read_const_bytes<const N: usize>(&mut self, buf: &mut [u8; N]) -> Result<(), ByteIoError> {
        match self.remaining().get(..N) {
            Some(bytes) => {
                buf.copy_from_slice(bytes);
                self.position += N;
                Ok(())
            }
            None => Err(ByteIoError::NotEnoughBytes(N, self.remaining().len()))
        }
    }

    #[inline(always)]
    fn read_const_bytes_no_error<const N: usize>(&mut self, buf: &mut [u8; N]) {
        if let Some(bytes) = self.remaining().get(..N) {
            buf.copy_from_slice(bytes);
            self.position += N;
        }
    }

    #[inline(always)]
    fn read_bytes(&mut self, buf: &mut [u8]) -> Result<usize, ByteIoError> {
        let remaining = self.remaining();
        let can_read = remaining.len().min(buf.len());

        buf[..can_read].copy_from_slice(&remaining[..can_read]);
        self.position += can_read;

        Ok(can_read)
    }

    #[inline(always)]
    fn is_eof(&mut self) -> Result<bool, ByteIoError> {
        Ok(self.position >= self.inner.as_ref().len())
    }

    #[inline(always)]
    fn position(&mut self) -> Result<u64, ByteIoError> {
        Ok(self.position as u64)
    }

    fn read_remaining(&mut self, sink: &mut Vec<u8>) -> Result<usize, ByteIoError> {
        let remaining = self.remaining();
        sink.extend_from_slice(remaining);

        let bytes_read = remaining.len();
        self.position += bytes_read;

        Ok(bytes_read)
    }
}

#[cfg(test)]
mod tests {
    use crate::bytestream::{ByteCursor, ByteReader};

    #[test]
    fn endian_aware_reads() {
        let mut reader = ByteReader::new(ByteCursor::new([0x12, 0x34, 0x56, 0x78]));

        assert_eq!(reader.get_u16_be_err().unwrap(), 0x1234);
        assert_eq!(reader.get_u16_le(), 0x7856);
        assert!(reader.eof().unwrap());
    }

    #[test]
    fn short_reads_are_signaled() {
        let mut reader = ByteReader::new(ByteCursor::new([1, 2, 3]));

        assert!(reader.get_u32_be_err().is_err());
        // a failed read does not advance the stream
        assert_eq!(reader.position().unwrap(), 0);
        assert_eq!(reader.read_fixed_bytes_or_error::<3>().unwrap(), [1, 2, 3]);
    }

    #[test]
    fn zero_filled_reads_past_eof() {
        let mut reader = ByteReader::new(ByteCursor::new([0xFF]));

        assert_eq!(reader.get_u8(), 0xFF);
        assert_eq!(reader.get_u8(), 0);
        assert_eq!(reader.get_fixed_bytes_or_zero::<4>(), [0; 4]);
    }

    #[test]
    fn remaining_bytes_drains_the_source() {
        let mut reader = ByteReader::new(ByteCursor::new([9, 8, 7, 6]));

        assert_eq!(reader.get_u8(), 9);
        assert_eq!(reader.remaining_bytes().unwrap(), &[8, 7, 6]);
        assert!(reader.eof().unwrap());
    }
}
