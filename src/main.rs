//! touchstick demo firmware - nRF52840 + SSD1306 + FT5x06 touch panel.
//!
//! One joystick sits on the right side of the panel. The input task polls
//! the touch controller, feeds the samples through the tracker and router
//! into the widget, and redraws after every move or reset. Accepted
//! displacements go through a channel to the report task, which logs
//! them over RTT.

#![no_std]
#![no_main]

mod board;

use defmt::{debug, error, info, warn};
use embassy_executor::Spawner;
use embassy_futures::select::select;
use embassy_nrf::gpio::{Input, Pull};
use embassy_nrf::twim::{self, Twim};
use embassy_nrf::{bind_interrupts, peripherals};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::{Channel, Receiver, Sender};
use embassy_time::{Duration, Timer};
use embedded_graphics::pixelcolor::BinaryColor;
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use board::display::Display;
use board::touch::Touch;
use touchstick::config;
use touchstick::ui::JoystickWidget;
use touchstick::{
    DisplacementSink, InputRouter, JoystickConfig, Outcome, PointerTarget, PointerTracker, Rect,
};

bind_interrupts!(struct Irqs {
    SPIM0_SPIS0_TWIM0_TWIS0_SPI0_TWI0 => twim::InterruptHandler<peripherals::TWISPI0>;
    SPIM1_SPIS1_TWIM1_TWIS1_SPI1_TWI1 => twim::InterruptHandler<peripherals::TWISPI1>;
});

type DisplayBus = Twim<'static, peripherals::TWISPI0>;
type TouchBus = Twim<'static, peripherals::TWISPI1>;

/// One accepted drag step.
#[derive(Clone, Copy, defmt::Format)]
struct Displacement {
    id: u8,
    dx: i32,
    dy: i32,
}

type DisplacementChannel =
    Channel<CriticalSectionRawMutex, Displacement, { config::DISPLACEMENT_QUEUE_DEPTH }>;

static DISPLACEMENTS: StaticCell<DisplacementChannel> = StaticCell::new();

/// Forwards displacements to the report task without blocking the input
/// task. Drops the step when the queue is full.
struct ChannelSink {
    tx: Sender<'static, CriticalSectionRawMutex, Displacement, { config::DISPLACEMENT_QUEUE_DEPTH }>,
}

impl DisplacementSink for ChannelSink {
    fn on_displace(&mut self, id: u8, dx: i32, dy: i32) {
        if self.tx.try_send(Displacement { id, dx, dy }).is_err() {
            warn!("Displacement queue full, dropping ({}, {})", dx, dy);
        }
    }
}

type Widget = JoystickWidget<BinaryColor, ChannelSink>;

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let p = embassy_nrf::init(Default::default());
    info!("touchstick starting");

    let channel: &'static DisplacementChannel = DISPLACEMENTS.init(Channel::new());

    // I²C SDA → P0.26, SCL → P0.27
    let display_bus = Twim::new(p.TWISPI0, Irqs, p.P0_26, p.P0_27, twim::Config::default());
    let display = match board::display::init(display_bus) {
        Ok(display) => display,
        Err(e) => {
            error!("Display init failed: {}", e);
            return;
        }
    };

    // Touch SDA → P0.30, SCL → P0.31, INT → P0.29 (active low)
    let touch_bus = Twim::new(p.TWISPI1, Irqs, p.P0_30, p.P0_31, twim::Config::default());
    let touch_irq = Input::new(p.P0_29, Pull::Up);
    let touch = Touch::new(touch_bus, config::TOUCH_I2C_ADDR, touch_irq);

    let screen = Rect::new(0, 0, config::DISPLAY_WIDTH, config::DISPLAY_HEIGHT);
    let joystick = JoystickConfig::new(
        config::DEMO_JOYSTICK_ID,
        config::DEMO_BASE_RADIUS,
        config::DEMO_STICK_RADIUS,
    )
    .aligned(config::DEMO_ALIGN, config::DEMO_OFFSET);
    let sink = ChannelSink {
        tx: channel.sender(),
    };
    let widget: Widget = match JoystickWidget::new(screen, joystick, None, None, Some(sink)) {
        Ok(widget) => widget,
        Err(e) => {
            error!("Joystick config rejected: {}", e);
            return;
        }
    };

    spawner.must_spawn(report_task(channel.receiver()));
    spawner.must_spawn(input_task(touch, display, widget));
}

/// Poll touch → tracker → router → widget, redrawing on change.
#[embassy_executor::task]
async fn input_task(
    mut touch: Touch<TouchBus>,
    mut display: Display<DisplayBus>,
    mut widget: Widget,
) -> ! {
    let screen = Rect::new(0, 0, config::DISPLAY_WIDTH, config::DISPLAY_HEIGHT);
    let mut tracker = PointerTracker::new(screen);
    let mut router = InputRouter::new();

    if let Err(e) = board::display::draw_frame(&mut display, &widget) {
        error!("Display: {}", e);
    }

    loop {
        if !tracker.is_pressed() {
            // Re-read once a second even without an edge so a missed
            // interrupt cannot leave the stick stuck.
            select(touch.wait_for_touch(), Timer::after(Duration::from_secs(1))).await;
        }

        let sample = match touch.read().await {
            Ok(sample) => sample,
            Err(e) => {
                warn!("Touch read failed: {}", e);
                Timer::after(Duration::from_millis(config::TOUCH_POLL_MS)).await;
                continue;
            }
        };

        if let Some(tracked) = tracker.update(sample) {
            let mut targets: [&mut dyn PointerTarget; 1] = [&mut widget];
            let delivered = router.dispatch(&mut targets, tracked);
            if let Some((_, outcome @ (Outcome::Moved(_) | Outcome::Reset))) = delivered {
                debug!("Stick: {}", outcome);
                if let Err(e) = board::display::draw_frame(&mut display, &widget) {
                    error!("Display: {}", e);
                }
            }
        }

        Timer::after(Duration::from_millis(config::TOUCH_POLL_MS)).await;
    }
}

/// Consume displacements off the input task's hot path.
#[embassy_executor::task]
async fn report_task(
    rx: Receiver<'static, CriticalSectionRawMutex, Displacement, { config::DISPLACEMENT_QUEUE_DEPTH }>,
) -> ! {
    loop {
        let d = rx.receive().await;
        info!("Joystick ID: {}, dx: {}, dy: {}", d.id, d.dx, d.dy);
    }
}
