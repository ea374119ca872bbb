//! Live display of streaming replies

pub mod stream;
