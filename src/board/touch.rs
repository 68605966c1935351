//! FT5x06/FT6x06 capacitive touch controller over async I²C.
//!
//! The controller pulls its interrupt line low while a finger is on the
//! panel. The input task waits on that edge when idle and polls the touch
//! block at a fixed rate while pressed.

use embassy_nrf::gpio::Input;
use embedded_hal_async::i2c::I2c;

use touchstick::input::ft5x06::{decode_first_point, REG_TD_STATUS, TOUCH_BLOCK_LEN};
use touchstick::{Error, Offset};

pub struct Touch<I2C> {
    i2c: I2C,
    addr: u8,
    irq: Input<'static>,
}

impl<I2C: I2c> Touch<I2C> {
    pub fn new(i2c: I2C, addr: u8, irq: Input<'static>) -> Self {
        Self { i2c, addr, irq }
    }

    /// Wait until the controller signals a touch.
    pub async fn wait_for_touch(&mut self) {
        self.irq.wait_for_low().await;
    }

    /// Read the first touch point, `None` when the panel is not touched.
    pub async fn read(&mut self) -> Result<Option<Offset>, Error> {
        let mut block = [0u8; TOUCH_BLOCK_LEN];
        self.i2c
            .write_read(self.addr, &[REG_TD_STATUS], &mut block)
            .await
            .map_err(|_| Error::Touch)?;
        Ok(decode_first_point(&block))
    }
}
