pub mod addressable_heap;

pub use addressable_heap::{AddressableHeap, Handle};
