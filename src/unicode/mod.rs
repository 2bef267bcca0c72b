pub mod percent_decode;
pub mod utf8;
