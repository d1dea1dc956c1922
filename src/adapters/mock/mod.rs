pub mod clock;
pub mod id_generator;

pub use clock::FixedClock;
pub use id_generator::SequentialIdGenerator;
