// Hardware Abstraction Layer (HAL) Module
//
// Verbindet die Traits aus hazard-core mit esp-hal GPIOs
// und der embassy-time Uhr.

pub mod clock;
pub mod gpio;

pub use clock::EmbassyTimeSource;
pub use gpio::{GpioIndicator, GpioSignal};
