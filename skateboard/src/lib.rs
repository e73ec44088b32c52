#![no_std]

pub mod common;
