#![allow(non_snake_case)]

mod shell;

pub use shell::Shell;
