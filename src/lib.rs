pub mod byte_float;
pub mod codec;
pub mod consts;
pub mod decode;
pub mod harness;
pub mod io;
pub mod tracing;
pub mod utility;
