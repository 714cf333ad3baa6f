//! Bit-packed on-disk serialization of a computed suffix array (feature
//! `pack`), generalized from the teacher's `u32`-only format to the
//! crate's generic index width by packing the low and high 32-bit halves
//! of each entry as two independent `BitPacker4x` planes. For `u32`
//! arrays the high plane always packs to zero bits, so the on-disk cost
//! is identical to the teacher's original format; only `u64` arrays with
//! values above `u32::MAX` pay for the second plane.

use crate::sa_index::SaIndex;
use bincode::config as bincode_config;
use bitpacking::{BitPacker, BitPacker4x as Packer};
use serde::{Deserialize, Serialize};
use std::io::prelude::*;
use std::io::Result;

// Little endian of b"SA4x", i.e. Compressed Suffix Array using BitPacker4x.
const MAGIC_CSA4: u32 = 2016690515;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackedSuffixArray {
    magic: u32,
    length: u32,
    bits_lo: u8,
    bits_hi: u8,
    data_lo: Vec<u8>,
    data_hi: Vec<u8>,
}

impl PackedSuffixArray {
    pub fn from_sa<Idx: SaIndex>(sa: &[Idx]) -> Self {
        assert!(sa.len() as u64 <= std::u32::MAX as u64);

        let lo: Vec<u32> = sa.iter().map(|&v| v.to_usize() as u64 as u32).collect();
        let hi: Vec<u32> = sa
            .iter()
            .map(|&v| ((v.to_usize() as u64) >> 32) as u32)
            .collect();

        let (bits_lo, data_lo) = pack_plane(&lo);
        let (bits_hi, data_hi) = pack_plane(&hi);

        PackedSuffixArray {
            magic: MAGIC_CSA4,
            length: sa.len() as u32,
            bits_lo,
            bits_hi,
            data_lo,
            data_hi,
        }
    }

    pub fn into_sa<Idx: SaIndex>(self) -> Vec<Idx> {
        assert_eq!(self.magic, MAGIC_CSA4);
        let length = self.length as usize;
        let lo = unpack_plane(&self.data_lo, self.bits_lo, length);
        let hi = unpack_plane(&self.data_hi, self.bits_hi, length);

        lo.iter()
            .zip(hi.iter())
            .map(|(&lo, &hi)| Idx::from_usize((((hi as u64) << 32) | lo as u64) as usize))
            .collect()
    }

    pub fn dump<W: Write>(&self, file: W) -> Result<()> {
        let mut cfg = bincode_config();
        cfg.little_endian();
        cfg.serialize_into(file, self).map_err(error_conv)
    }

    pub fn dump_bytes(&self) -> Result<Vec<u8>> {
        let mut cfg = bincode_config();
        cfg.little_endian();
        cfg.serialize(self).map_err(error_conv)
    }

    pub fn load<R: Read>(file: R) -> Result<Self> {
        let mut cfg = bincode_config();
        cfg.little_endian();
        cfg.deserialize_from(file).map_err(error_conv)
    }

    pub fn load_bytes(bytes: &[u8]) -> Result<Self> {
        let mut cfg = bincode_config();
        cfg.little_endian();
        cfg.deserialize(bytes).map_err(error_conv)
    }
}

fn pack_plane(plane: &[u32]) -> (u8, Vec<u8>) {
    let bits = sa_bits(plane);
    let u32_chunk_size = Packer::BLOCK_LEN;
    let u8_chunk_size = bits as usize * Packer::BLOCK_LEN / 8;
    let chunk_count = ceiling_div(plane.len(), u32_chunk_size);

    let packer = Packer::new();
    let mut data = Vec::with_capacity(u8_chunk_size * chunk_count);
    let mut buf = vec![0u8; u8_chunk_size];
    let mut rest = plane;
    while rest.len() >= u32_chunk_size {
        let (chunk, tail) = rest.split_at(u32_chunk_size);
        packer.compress(chunk, &mut buf[..], bits);
        data.extend_from_slice(&buf[..]);
        rest = tail;
    }
    if !rest.is_empty() {
        let mut chunk = vec![0u32; u32_chunk_size];
        chunk[..rest.len()].copy_from_slice(rest);
        packer.compress(&chunk[..], &mut buf[..], bits);

        let mut tail = buf.len();
        while tail > 0 && buf[tail - 1] == 0 {
            tail -= 1;
        }
        data.extend_from_slice(&buf[..tail]);
    }

    (bits, data)
}

fn unpack_plane(data: &[u8], bits: u8, length: usize) -> Vec<u32> {
    let u32_chunk_size = Packer::BLOCK_LEN;
    let u8_chunk_size = bits as usize * Packer::BLOCK_LEN / 8;

    let packer = Packer::new();
    let mut data = data;
    let mut remain = length;
    let mut plane = Vec::with_capacity(remain);
    let mut buf = vec![0u32; u32_chunk_size];
    while data.len() >= u8_chunk_size && u8_chunk_size > 0 {
        let (chunk, tail) = data.split_at(u8_chunk_size);
        packer.decompress(chunk, &mut buf[..], bits);
        let n = if tail.is_empty() { remain } else { u32_chunk_size };
        plane.extend_from_slice(&buf[..n]);
        data = tail;
        remain -= n;
    }
    if !data.is_empty() {
        let mut chunk = vec![0u8; u8_chunk_size];
        chunk[..data.len()].copy_from_slice(data);
        packer.decompress(&chunk[..], &mut buf[..], bits);
        plane.extend_from_slice(&buf[..remain]);
    }
    if bits == 0 {
        plane = vec![0u32; length];
    }

    plane
}

fn sa_bits(plane: &[u32]) -> u8 {
    let max = plane.iter().copied().max().unwrap_or(0);
    (32 - max.leading_zeros()) as u8
}

fn ceiling_div(x: usize, y: usize) -> usize {
    x / y + usize::from(x % y != 0)
}

fn error_conv(err: bincode::Error) -> std::io::Error {
    use bincode::ErrorKind as BincodeErrorKind;
    use std::io::{Error, ErrorKind as IoErrorKind};

    match *err {
        BincodeErrorKind::Io(e) => e,
        BincodeErrorKind::SizeLimit => Error::new(IoErrorKind::Other, BincodeErrorKind::SizeLimit),
        BincodeErrorKind::Custom(ref e) => Error::new(IoErrorKind::Other, e.clone()),
        ref e => Error::new(IoErrorKind::InvalidData, format!("{:?}", e)),
    }
}
