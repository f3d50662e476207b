#![doc = include_str!("../README.md")]
#![doc(test(attr(deny(warnings))))]

mod assembler;
mod config;
pub mod converters;
mod error;
pub mod mapper;
pub mod mapping;
pub mod registry;
pub mod serialize;
mod table;
pub mod vocab;

pub use assembler::{
    build_schema, convert, Conversion, ConversionStatistics, GraphAssembler, OutputGraphs,
};
pub use config::{ConversionOptions, IdentifierPolicy};
pub use error::{LoaderError, MappingError, SerializerError};
pub use table::{CemeteryTable, Row};
