#![allow(dead_code)]

pub const DISCRIMINATOR_SIZE: usize = 8;
pub const ENUM_SIZE: usize = 1; // for data/field-less enums
pub const U8_SIZE: usize = 1;
pub const U32_SIZE: usize = 4;
pub const U64_SIZE: usize = 8;
pub const I128_SIZE: usize = 16;
pub const PUB_KEY_SIZE: usize = 32;
pub const CHAR_SIZE: usize = 4;

const VEC_PREFIX_SIZE: usize = 4;
pub const fn vec_size(element_size: usize, length: usize) -> usize {
    VEC_PREFIX_SIZE + element_size * length
}
