use mockall::mock;
use syncram_core::common::{Geometry, MemError};
use syncram_core::config::ReadMode;
use syncram_core::sim::loader::MemoryImage;
use syncram_core::soc::{SyncMemory, TickOutcome, TickSignals};

mock! {
    pub Memory {}
    impl SyncMemory for Memory {
        fn geometry(&self) -> Geometry;
        fn read_mode(&self) -> ReadMode;
        fn tick(&mut self, signals: &TickSignals) -> Result<TickOutcome, MemError>;
        fn read(&self, address: u64) -> Result<u64, MemError>;
        fn preload(&mut self, image: &MemoryImage) -> Result<(), MemError>;
        fn reset(&mut self);
    }
}

/// A mock that reports `geometry` and answers every tick with `Idle`.
pub fn idle_memory(geometry: Geometry) -> MockMemory {
    let mut mock = MockMemory::new();
    let _ = mock.expect_geometry().return_const(geometry);
    let _ = mock.expect_tick().returning(|_| Ok(TickOutcome::Idle));
    mock
}
