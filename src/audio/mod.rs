//! Audio kernels: in-memory PCM buffers, WAV encoding, and trimming.
//!
//! All operations work on already-decoded sample data; decoding compressed
//! formats is the job of the browser's media APIs upstream of this crate.

pub mod buffer;
pub mod trim;
pub mod wav;

pub use buffer::AudioBuffer;
