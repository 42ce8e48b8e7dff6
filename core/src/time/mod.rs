pub mod ticks;
pub mod unit;

pub use self::ticks::Ticks;
pub use self::unit::{Rounding, TimeUnit};
