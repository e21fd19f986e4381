pub mod entry;
#[cfg(test)]
pub mod memory;
pub mod reader;
