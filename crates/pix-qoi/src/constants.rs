/*
 * Copyright (c) 2026.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

// 00xxxxxx
pub const QOI_OP_INDEX: u8 = 0x00;
// 01xxxxxx
pub const QOI_OP_DIFF: u8 = 0x40;
// 10xxxxxx
pub const QOI_OP_LUMA: u8 = 0x80;
// 11xxxxxx
pub const QOI_OP_RUN: u8 = 0xc0;
// 11111110
pub const QOI_OP_RGB: u8 = 0xfe;
// 11111111
pub const QOI_OP_RGBA: u8 = 0xff;

// (11)000000
pub const QOI_MASK_2: u8 = 0xc0;

pub const QOI_MAGIC: [u8; 4] = *b"qoif";

// seven 0x00 bytes and a final 0x01
pub const QOI_END_MARKER: [u8; 8] = [0, 0, 0, 0, 0, 0, 0, 1];
