pub mod keys;
pub mod led;
pub mod pins;
pub mod trigger;
pub mod usart;

pub use keys::{Key, Keys};
pub use led::{Buzzer, Led};
pub use pins::BoardPins;
pub use usart::Usart;
