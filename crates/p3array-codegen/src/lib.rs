//! C array code generation for P3 frame streams.
//!
//! A P3 file is a sequence of frames. Each frame opens with a 4-byte header:
//! - A 1-byte frame type
//! - A 1-byte reserved field
//! - A 2-byte little-endian payload length
//!
//! The generator turns a P3 file into a C byte-array literal so the blob can
//! be compiled into firmware images with no filesystem. Payloads are never
//! decoded: headers are inferred at every 4-byte-aligned offset purely to
//! annotate the generated array with comments, and the annotation has no
//! effect on the emitted bytes.

pub mod carray;
pub mod convert;
pub mod error;
pub mod frame;
pub mod scan;

pub use carray::{render, RenderedArray, BYTES_PER_LINE};
pub use convert::{convert, ConvertConfig, ConvertReport};
pub use error::{CodegenError, Result};
pub use frame::{peek_header, FrameHeader, HEADER_SIZE};
pub use scan::{annotate, Annotations, FrameAnnotation};
