/*
 * Copyright (c) 2026.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use alloc::vec::Vec;
use alloc::{format, vec};

use pix_core::bit_depth::BitDepth;
use pix_core::bytestream::{ByteReader, ByteReaderTrait};
use pix_core::colorspace::{ColorCharacteristics, ColorSpace};
use pix_core::log::{trace, warn};
use pix_core::options::DecoderOptions;

use crate::constants::{
    QOI_END_MARKER, QOI_MAGIC, QOI_MASK_2, QOI_OP_DIFF, QOI_OP_INDEX, QOI_OP_LUMA, QOI_OP_RGB,
    QOI_OP_RGBA, QOI_OP_RUN
};
use crate::errors::QoiErrors;

/// The pixel every decode starts from, opaque black.
const QOI_START_PIXEL: [u8; 4] = [0, 0, 0, 255];

/// Position of a pixel in the 64-entry pixel cache.
///
/// The multiplier set and the modulus are fixed by the format,
/// streams are encoded against this exact function.
const fn pixel_hash(px: [u8; 4]) -> usize {
    (px[0] as usize * 3 + px[1] as usize * 5 + px[2] as usize * 7 + px[3] as usize * 11) % 64
}

/// A single decoded chunk header.
///
/// The full-byte ops `0xFE`/`0xFF` are matched before the two-bit
/// ops, so the run payload can never be 62 or 63, those byte values
/// are the RGB/RGBA op-codes.
enum ChunkOp {
    /// Three payload bytes, alpha carried over
    Rgb,
    /// Four payload bytes
    Rgba,
    /// Pixel cache position
    Index(u8),
    /// Packed two-bit channel deltas
    Diff(u8),
    /// Six-bit green delta, one more payload byte
    Luma(u8),
    /// Repetitions of the previous pixel, biased by -1
    Run(u8)
}

impl ChunkOp {
    #[inline(always)]
    const fn from_byte(byte: u8) -> ChunkOp {
        match byte {
            QOI_OP_RGB => ChunkOp::Rgb,
            QOI_OP_RGBA => ChunkOp::Rgba,
            _ => {
                let low = byte & 0x3f;

                match byte & QOI_MASK_2 {
                    QOI_OP_INDEX => ChunkOp::Index(low),
                    QOI_OP_DIFF => ChunkOp::Diff(low),
                    QOI_OP_LUMA => ChunkOp::Luma(low),
                    QOI_OP_RUN => ChunkOp::Run(low),
                    // the mask leaves only the four values above
                    _ => unreachable!()
                }
            }
        }
    }
}

/// A Quite OK Image decoder
///
/// The decoder is initialized by calling `new`
/// and either of [`decode_headers`] to decode headers
/// or [`decode`] to return uncompressed pixels
///
/// Additional methods are provided that give more
/// details of the compressed image like width and height
/// are accessible after decoding headers
///
/// [`decode_headers`]:QoiDecoder::decode_headers
/// [`decode`]:QoiDecoder::decode
pub struct QoiDecoder<T>
where
    T: ByteReaderTrait
{
    width:                 usize,
    height:                usize,
    colorspace:            ColorSpace,
    color_characteristics: ColorCharacteristics,
    decoded_headers:       bool,
    stream:                ByteReader<T>,
    options:               DecoderOptions
}

impl<T> QoiDecoder<T>
where
    T: ByteReaderTrait
{
    /// Create a new QOI format decoder with the default options
    ///
    /// # Arguments
    /// - `data`: The compressed qoi data
    ///
    /// # Returns
    /// - A decoder instance which will on calling `decode` will decode
    /// data
    /// # Example
    ///
    /// ```no_run
    /// use pix_core::bytestream::ByteCursor;
    /// let mut decoder = pix_qoi::QoiDecoder::new(ByteCursor::new(b""));
    /// // additional code
    /// ```
    pub fn new(data: T) -> QoiDecoder<T> {
        QoiDecoder::new_with_options(data, DecoderOptions::default())
    }

    /// Create a new QOI format decoder that obeys specified restrictions
    ///
    /// E.g can be used to set width and height limits to prevent OOM attacks
    ///
    /// # Arguments
    /// - `data`: The compressed qoi data
    /// - `options`: Decoder options that the decoder should respect
    ///
    /// # Example
    /// ```
    /// use pix_core::bytestream::ByteCursor;
    /// use pix_core::options::DecoderOptions;
    /// use pix_qoi::QoiDecoder;
    /// // only decode images less than 10 in both width and height
    ///
    /// let options = DecoderOptions::default().set_max_width(10).set_max_height(10);
    ///
    /// let mut decoder = QoiDecoder::new_with_options(ByteCursor::new(b""), options);
    /// ```
    #[allow(clippy::redundant_field_names)]
    pub fn new_with_options(data: T, options: DecoderOptions) -> QoiDecoder<T> {
        QoiDecoder {
            width:                 0,
            height:                0,
            colorspace:            ColorSpace::RGB,
            color_characteristics: ColorCharacteristics::Linear,
            decoded_headers:       false,
            stream:                ByteReader::new(data),
            options:               options
        }
    }

    /// Decode a QOI header storing needed information into
    /// the decoder instance
    ///
    /// This reads exactly the 14 header bytes; nothing else of the
    /// stream is touched, which makes it the cheap entry point for
    /// identifying an image.
    ///
    /// # Returns
    ///
    /// - On success: Nothing
    /// - On error: The error encountered when decoding headers
    ///     error type will be an instance of [QoiErrors]
    ///
    /// [QoiErrors]:crate::errors::QoiErrors
    pub fn decode_headers(&mut self) -> Result<(), QoiErrors> {
        let magic = self.stream.read_fixed_bytes_or_error::<4>()?;

        if magic != QOI_MAGIC {
            return Err(QoiErrors::WrongMagicBytes);
        }

        let width = self.stream.get_u32_be_err()? as usize;
        let height = self.stream.get_u32_be_err()? as usize;
        let channels = self.stream.get_u8_err()?;
        let colorspace = self.stream.get_u8_err()?;

        if width == 0 || height == 0 {
            return Err(QoiErrors::ZeroDimensions(width, height));
        }

        if width > self.options.max_width() {
            let msg = format!(
                "Width {} greater than max configured width {}",
                width,
                self.options.max_width()
            );
            return Err(QoiErrors::Generic(msg));
        }

        if height > self.options.max_height() {
            let msg = format!(
                "Height {} greater than max configured height {}",
                height,
                self.options.max_height()
            );
            return Err(QoiErrors::Generic(msg));
        }

        self.colorspace = match channels {
            3 => ColorSpace::RGB,
            4 => ColorSpace::RGBA,
            _ => return Err(QoiErrors::UnknownChannels(channels))
        };
        // informational only, arithmetic is identical in both
        self.color_characteristics = match colorspace {
            0 => ColorCharacteristics::sRGB,
            1 => ColorCharacteristics::Linear,
            _ => return Err(QoiErrors::UnknownColorspace(colorspace))
        };

        self.width = width;
        self.height = height;

        trace!("Image width: {:?}", self.width);
        trace!("Image height: {:?}", self.height);
        trace!("Image colorspace: {:?}", self.colorspace);
        self.decoded_headers = true;

        Ok(())
    }

    /// Return the number of bytes required to hold a decoded image frame
    ///
    /// # Returns
    ///  - `Some(usize)`: Minimum size for a buffer needed to decode the image
    ///  - `None`: Indicates the image headers were not decoded
    ///
    /// # Panics
    /// In case `width*height*colorspace` calculation may overflow a usize
    pub fn output_buffer_size(&self) -> Option<usize> {
        if self.decoded_headers {
            self.width
                .checked_mul(self.height)
                .unwrap()
                .checked_mul(self.colorspace.num_components())
        } else {
            None
        }
    }

    /// Decode the bytes of a QOI image data, returning the
    /// uncompressed bytes or the error encountered during decoding
    ///
    /// Additional details about the encoded image can be found after
    /// calling this or [`decode_headers`], i.e the width and height can
    /// be accessed by the [`dimensions`] method.
    ///
    /// # Returns
    /// - On success: The decoded bytes, `width * height * channels` of them
    /// - On error: An instance of [QoiErrors] which gives a reason why the
    /// image could not be decoded
    ///
    /// [`decode_headers`]:Self::decode_headers
    /// [`dimensions`]:Self::dimensions
    /// [QoiErrors]:crate::errors::QoiErrors
    pub fn decode(&mut self) -> Result<Vec<u8>, QoiErrors> {
        if !self.decoded_headers {
            self.decode_headers()?;
        }
        let mut output = vec![0; self.output_buffer_size().unwrap()];

        self.decode_into(&mut output)?;

        Ok(output)
    }

    /// Decode a compressed QOI image and store the contents
    /// into the output buffer
    ///
    /// Returns an error if the buffer cannot hold the
    /// decoded image
    ///
    /// # Arguments
    ///
    /// * `pixels`: Output buffer for which we will write decoded
    /// pixels
    ///
    /// returns: Result<(), QoiErrors>
    pub fn decode_into(&mut self, pixels: &mut [u8]) -> Result<(), QoiErrors> {
        if !self.decoded_headers {
            self.decode_headers()?;
        }

        let output_size = self.output_buffer_size().unwrap();

        if pixels.len() < output_size {
            return Err(QoiErrors::TooSmallOutput(output_size, pixels.len()));
        }

        match self.colorspace.num_components() {
            3 => self.decode_inner_generic::<3>(&mut pixels[..output_size])?,
            4 => self.decode_inner_generic::<4>(&mut pixels[..output_size])?,
            _ => unreachable!()
        }
        Ok(())
    }

    fn decode_inner_generic<const SIZE: usize>(
        &mut self, pixels: &mut [u8]
    ) -> Result<(), QoiErrors> {
        let mut index = [[0_u8; 4]; 64];
        let mut px = QOI_START_PIXEL;
        // The starting pixel must be referenceable by an index chunk
        // before anything was written, so its slot is pre-seeded.
        // Transparent black hashes to a different slot, the hash is
        // alpha sensitive.
        index[pixel_hash(px)] = px;

        let mut run = 0;

        // Runs may cross row boundaries, so the output is walked as one
        // flat row-major sequence rather than row by row.
        for pix_chunk in pixels.chunks_exact_mut(SIZE) {
            if run > 0 {
                run -= 1;
                pix_chunk.copy_from_slice(&px[0..SIZE]);
                continue;
            }

            let chunk = self.stream.get_u8();

            match ChunkOp::from_byte(chunk) {
                ChunkOp::Rgb => {
                    let packed_bytes = self.stream.get_fixed_bytes_or_zero::<3>();

                    px[0] = packed_bytes[0];
                    px[1] = packed_bytes[1];
                    px[2] = packed_bytes[2];

                    index[pixel_hash(px)] = px;
                }
                ChunkOp::Rgba => {
                    let packed_bytes = self.stream.get_fixed_bytes_or_zero::<4>();
                    px.copy_from_slice(&packed_bytes);

                    index[pixel_hash(px)] = px;
                }
                ChunkOp::Index(pos) => {
                    // the cache already holds this value, no write back
                    px = index[usize::from(pos)];
                }
                ChunkOp::Diff(diff) => {
                    px[0] = px[0].wrapping_add(((diff >> 4) & 0x03).wrapping_sub(2));
                    px[1] = px[1].wrapping_add(((diff >> 2) & 0x03).wrapping_sub(2));
                    px[2] = px[2].wrapping_add((diff & 0x03).wrapping_sub(2));

                    index[pixel_hash(px)] = px;
                }
                ChunkOp::Luma(dg) => {
                    let b2 = self.stream.get_u8();
                    let vg = dg.wrapping_sub(32);

                    px[0] = px[0].wrapping_add(vg.wrapping_sub(8).wrapping_add((b2 >> 4) & 0x0f));
                    px[1] = px[1].wrapping_add(vg);
                    px[2] = px[2].wrapping_add(vg.wrapping_sub(8).wrapping_add(b2 & 0x0f));

                    index[pixel_hash(px)] = px;
                }
                ChunkOp::Run(r) => {
                    // this iteration emits the first repetition
                    run = usize::from(r);
                }
            }

            pix_chunk.copy_from_slice(&px[0..SIZE]);
        }

        let marker = self.stream.read_fixed_bytes_or_error::<8>()?;

        if marker != QOI_END_MARKER {
            return Err(QoiErrors::GenericStatic(
                "End-of-stream marker does not match QOI signature"
            ));
        }

        if !self.stream.eof()? {
            if self.options.strict_mode() {
                return Err(QoiErrors::GenericStatic(
                    "Trailing bytes after the end-of-stream marker"
                ));
            }
            warn!("Trailing bytes after the end-of-stream marker");
        }

        trace!("Finished decoding image");

        Ok(())
    }

    /// Returns the image colorspace or `None` if the headers haven't
    /// been decoded
    ///
    /// Colorspace returned can either be [RGB] or [RGBA]
    ///
    /// [RGB]: pix_core::colorspace::ColorSpace::RGB
    /// [RGBA]: pix_core::colorspace::ColorSpace::RGBA
    pub const fn colorspace(&self) -> Option<ColorSpace> {
        if self.decoded_headers {
            Some(self.colorspace)
        } else {
            None
        }
    }

    /// Returns the color characteristics stored in the header, or `None`
    /// if the headers haven't been decoded
    ///
    /// This is purely informational, it does not change decoding
    pub const fn color_characteristics(&self) -> Option<ColorCharacteristics> {
        if self.decoded_headers {
            Some(self.color_characteristics)
        } else {
            None
        }
    }

    /// Return QOI default bit depth
    ///
    /// This is always 8
    ///
    /// # Example
    ///
    /// ```
    /// use pix_core::bit_depth::BitDepth;
    /// use pix_core::bytestream::ByteCursor;
    /// use pix_qoi::QoiDecoder;
    /// let decoder = QoiDecoder::new(ByteCursor::new(b""));
    /// assert_eq!(decoder.bit_depth(), BitDepth::Eight)
    /// ```
    pub const fn bit_depth(&self) -> BitDepth {
        BitDepth::Eight
    }

    /// Return the width and height of the image
    ///
    /// Or none if the headers haven't been decoded
    ///
    /// # Example
    ///
    /// ```no_run
    /// use pix_core::bytestream::ByteCursor;
    /// use pix_qoi::QoiDecoder;
    /// let mut decoder = QoiDecoder::new(ByteCursor::new(b""));
    ///
    /// decoder.decode_headers().unwrap();
    /// // get dimensions now.
    /// let (w, h) = decoder.dimensions().unwrap();
    /// ```
    pub const fn dimensions(&self) -> Option<(usize, usize)> {
        if self.decoded_headers {
            return Some((self.width, self.height));
        }
        None
    }
}
