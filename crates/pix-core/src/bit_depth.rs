/*
 * Copyright (c) 2026.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Image bit depth information

/// The image bit depth.
///
/// Describes how many bits a single decoded sample occupies,
/// which in turn decides the storage type for pixels.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum BitDepth {
    /// Eight bit depth.
    ///
    /// Images with such bit depth use [`u8`] to store
    /// pixels and use the whole range from 0-255.
    Eight,
    /// Sixteen bit depth.
    ///
    /// Images with such bit depth use [`u16`] to store pixels
    /// and use the whole range from 0-65535.
    ///
    /// Data is stored and processed in native endian.
    Sixteen,
    /// Bit depth information is unknown
    Unknown
}

/// The underlying bit representation of the image.
///
/// This represents the minimum rust type that
/// can be used to represent image data.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum BitType {
    /// Images represented using a [`u8`] as their
    /// underlying pixel storage
    Eight,
    /// Images represented using a [`u16`] as their
    /// underlying pixel storage
    Sixteen
}

impl Default for BitDepth {
    fn default() -> Self {
        Self::Unknown
    }
}

impl BitDepth {
    /// Get the max value supported by the bit depth.
    ///
    /// During conversion from one bit depth to another,
    /// larger values should be clamped to this value.
    pub const fn max_value(self) -> u16 {
        match self {
            Self::Eight => (1 << 8) - 1,
            Self::Sixteen => u16::MAX,
            Self::Unknown => 0
        }
    }

    /// Return the minimum rust type that can be used to represent
    /// each pixel in the image without overflow.
    ///
    /// # Example
    ///
    /// ```
    /// use pix_core::bit_depth::{BitDepth, BitType};
    /// assert_eq!(BitDepth::Eight.bit_type(), BitType::Eight);
    /// ```
    pub const fn bit_type(self) -> BitType {
        match self {
            Self::Eight => BitType::Eight,
            Self::Sixteen => BitType::Sixteen,
            Self::Unknown => panic!("Unknown bit type")
        }
    }

    /// Get the number of bytes needed to store a single sample
    /// of this bit depth.
    ///
    /// ```
    /// use pix_core::bit_depth::BitDepth;
    /// assert_eq!(BitDepth::Sixteen.size_of(), 2);
    /// ```
    pub const fn size_of(self) -> usize {
        match self {
            Self::Eight => 1,
            Self::Sixteen => 2,
            Self::Unknown => panic!("Unknown bit type")
        }
    }
}
