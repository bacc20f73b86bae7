use std::io::{Read, Write};

use super::error::CodecError;

// All multi-byte quantities are big-endian.

pub fn write_u8<W: Write + ?Sized>(out: &mut W, v: u8) -> Result<(), CodecError> {
    out.write_all(&[v])?;
    Ok(())
}

pub fn write_i8<W: Write + ?Sized>(out: &mut W, v: i8) -> Result<(), CodecError> {
    out.write_all(&v.to_be_bytes())?;
    Ok(())
}

pub fn write_i16<W: Write + ?Sized>(out: &mut W, v: i16) -> Result<(), CodecError> {
    out.write_all(&v.to_be_bytes())?;
    Ok(())
}

pub fn write_u16<W: Write + ?Sized>(out: &mut W, v: u16) -> Result<(), CodecError> {
    out.write_all(&v.to_be_bytes())?;
    Ok(())
}

pub fn write_i32<W: Write + ?Sized>(out: &mut W, v: i32) -> Result<(), CodecError> {
    out.write_all(&v.to_be_bytes())?;
    Ok(())
}

pub fn write_i64<W: Write + ?Sized>(out: &mut W, v: i64) -> Result<(), CodecError> {
    out.write_all(&v.to_be_bytes())?;
    Ok(())
}

pub fn write_f32<W: Write + ?Sized>(out: &mut W, v: f32) -> Result<(), CodecError> {
    out.write_all(&v.to_bits().to_be_bytes())?;
    Ok(())
}

pub fn write_f64<W: Write + ?Sized>(out: &mut W, v: f64) -> Result<(), CodecError> {
    out.write_all(&v.to_bits().to_be_bytes())?;
    Ok(())
}

/// Writes a length as a signed 32-bit prefix.
pub fn write_len<W: Write + ?Sized>(out: &mut W, len: usize) -> Result<(), CodecError> {
    let len = i32::try_from(len).map_err(|_| CodecError::LimitExceeded {
        what: "length prefix",
        value: len,
        limit: i32::MAX as usize,
    })?;
    write_i32(out, len)
}

pub fn read_u8<R: Read + ?Sized>(input: &mut R) -> Result<u8, CodecError> {
    let mut buf = [0u8; 1];
    input.read_exact(&mut buf)?;
    Ok(buf[0])
}

pub fn read_i8<R: Read + ?Sized>(input: &mut R) -> Result<i8, CodecError> {
    let mut buf = [0u8; 1];
    input.read_exact(&mut buf)?;
    Ok(i8::from_be_bytes(buf))
}

pub fn read_i16<R: Read + ?Sized>(input: &mut R) -> Result<i16, CodecError> {
    let mut buf = [0u8; 2];
    input.read_exact(&mut buf)?;
    Ok(i16::from_be_bytes(buf))
}

pub fn read_u16<R: Read + ?Sized>(input: &mut R) -> Result<u16, CodecError> {
    let mut buf = [0u8; 2];
    input.read_exact(&mut buf)?;
    Ok(u16::from_be_bytes(buf))
}

pub fn read_i32<R: Read + ?Sized>(input: &mut R) -> Result<i32, CodecError> {
    let mut buf = [0u8; 4];
    input.read_exact(&mut buf)?;
    Ok(i32::from_be_bytes(buf))
}

pub fn read_i64<R: Read + ?Sized>(input: &mut R) -> Result<i64, CodecError> {
    let mut buf = [0u8; 8];
    input.read_exact(&mut buf)?;
    Ok(i64::from_be_bytes(buf))
}

pub fn read_f32<R: Read + ?Sized>(input: &mut R) -> Result<f32, CodecError> {
    let mut buf = [0u8; 4];
    input.read_exact(&mut buf)?;
    Ok(f32::from_bits(u32::from_be_bytes(buf)))
}

pub fn read_f64<R: Read + ?Sized>(input: &mut R) -> Result<f64, CodecError> {
    let mut buf = [0u8; 8];
    input.read_exact(&mut buf)?;
    Ok(f64::from_bits(u64::from_be_bytes(buf)))
}

/// Reads a signed 32-bit length prefix, rejecting negative values.
pub fn read_len<R: Read + ?Sized>(input: &mut R, what: &str) -> Result<usize, CodecError> {
    let len = read_i32(input)?;
    usize::try_from(len).map_err(|_| CodecError::Corrupt(format!("negative {what}: {len}")))
}

pub fn read_vec<R: Read + ?Sized>(input: &mut R, len: usize) -> Result<Vec<u8>, CodecError> {
    let mut buf = vec![0u8; len];
    input.read_exact(&mut buf)?;
    Ok(buf)
}
