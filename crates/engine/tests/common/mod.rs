//! Shared fixtures for the engine test suite.

use memsim_core::Config;
use memsim_core::common::{AccessKind, Operation};
use memsim_core::config::PrefetcherKind;

/// Default config with the given strategy selected.
pub fn config_with(kind: PrefetcherKind) -> Config {
    let mut config = Config::default();
    config.prefetch.kind = kind;
    config
}

/// Data-read operation.
pub fn read(addr: u64) -> Operation {
    Operation::new(AccessKind::DataRead, addr)
}

/// Data-write operation.
pub fn write(addr: u64) -> Operation {
    Operation::new(AccessKind::DataWrite, addr)
}

/// Instruction-read operation.
pub fn inst_read(addr: u64) -> Operation {
    Operation::new(AccessKind::InstRead, addr)
}

/// Instruction-write operation.
pub fn inst_write(addr: u64) -> Operation {
    Operation::new(AccessKind::InstWrite, addr)
}
