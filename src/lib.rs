pub mod cli;
pub mod commands;
pub mod error;

pub mod core {
    pub mod call;
    pub mod event;
    pub mod matrix;
    pub mod svtype;
    pub mod tool;
}

pub mod io {
    pub mod callers;
    pub mod info;
    pub mod matrix_writer;
    pub mod readers;
    pub mod table_reader;
    pub mod table_writer;
}

pub mod utils {
    pub mod util;
}

pub mod constants;

pub use constants::*;
