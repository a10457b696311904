/// Blurhash placeholder decoding
///
/// A blurhash is a short base-83 string holding the DC colour and a few
/// cosine (AC) components of an image. Decoding renders those components
/// into a small RGBA buffer that is shown, stretched, while the real
/// photo is still loading.
use image::{Rgba, RgbaImage};
use std::f32::consts::PI;
use thiserror::Error;

const BASE83: &[u8; 83] =
    b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz#$%*+,-.:;=?@[]^_{|}~";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BlurhashError {
    #[error("blurhash is too short")]
    TooShort,
    #[error("blurhash should be {expected} characters, got {actual}")]
    Length { expected: usize, actual: usize },
    #[error("invalid base83 character {0:?}")]
    InvalidCharacter(char),
}

fn decode83(chars: &str) -> Result<u32, BlurhashError> {
    chars.chars().try_fold(0u32, |value, c| {
        let digit = BASE83
            .iter()
            .position(|&b| b as char == c)
            .ok_or(BlurhashError::InvalidCharacter(c))?;
        Ok(value * 83 + digit as u32)
    })
}

fn srgb_to_linear(value: u32) -> f32 {
    let v = value as f32 / 255.0;
    if v <= 0.04045 {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

fn linear_to_srgb(value: f32) -> u8 {
    let v = value.clamp(0.0, 1.0);
    let srgb = if v <= 0.003_130_8 {
        v * 12.92
    } else {
        1.055 * v.powf(1.0 / 2.4) - 0.055
    };
    (srgb * 255.0 + 0.5).clamp(0.0, 255.0) as u8
}

fn sign_pow(value: f32, exponent: f32) -> f32 {
    value.abs().powf(exponent).copysign(value)
}

fn decode_dc(value: u32) -> [f32; 3] {
    [
        srgb_to_linear(value >> 16),
        srgb_to_linear((value >> 8) & 255),
        srgb_to_linear(value & 255),
    ]
}

fn decode_ac(value: u32, max_value: f32) -> [f32; 3] {
    let quant_r = value / (19 * 19);
    let quant_g = (value / 19) % 19;
    let quant_b = value % 19;
    [quant_r, quant_g, quant_b].map(|q| sign_pow((q as f32 - 9.0) / 9.0, 2.0) * max_value)
}

/// Decode `hash` into a `width` × `height` RGBA image
pub fn decode(hash: &str, width: u32, height: u32) -> Result<RgbaImage, BlurhashError> {
    if !hash.is_ascii() {
        let bad = hash.chars().find(|c| !c.is_ascii()).unwrap_or('?');
        return Err(BlurhashError::InvalidCharacter(bad));
    }
    if hash.len() < 6 {
        return Err(BlurhashError::TooShort);
    }

    let size_flag = decode83(&hash[0..1])?;
    let num_y = (size_flag / 9 + 1) as usize;
    let num_x = (size_flag % 9 + 1) as usize;

    let expected = 4 + 2 * num_x * num_y;
    if hash.len() != expected {
        return Err(BlurhashError::Length {
            expected,
            actual: hash.len(),
        });
    }

    let quantised_max = decode83(&hash[1..2])?;
    let max_value = (quantised_max + 1) as f32 / 166.0;

    let mut colors = Vec::with_capacity(num_x * num_y);
    colors.push(decode_dc(decode83(&hash[2..6])?));
    for i in 1..num_x * num_y {
        let start = 4 + i * 2;
        colors.push(decode_ac(decode83(&hash[start..start + 2])?, max_value));
    }

    let mut pixels = RgbaImage::new(width, height);
    for (x, y, pixel) in pixels.enumerate_pixels_mut() {
        let mut rgb = [0.0f32; 3];
        for j in 0..num_y {
            for i in 0..num_x {
                let basis = (PI * x as f32 * i as f32 / width as f32).cos()
                    * (PI * y as f32 * j as f32 / height as f32).cos();
                let color = colors[i + j * num_x];
                for c in 0..3 {
                    rgb[c] += color[c] * basis;
                }
            }
        }
        *pixel = Rgba([
            linear_to_srgb(rgb[0]),
            linear_to_srgb(rgb[1]),
            linear_to_srgb(rgb[2]),
            255,
        ]);
    }

    Ok(pixels)
}
