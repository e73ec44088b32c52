#![no_std]

pub mod esc_error;
