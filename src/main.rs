//! Thermal fan controller firmware for Raspberry Pi Pico 2 (RP2350).
//!
//! Reads a TMP36 analog temperature sensor, classifies the temperature into
//! one of four bands, and drives a PWM fan plus a tri-color status indicator
//! while rendering the temperature and fan state on a 16x2 character LCD.
//!
//! # Architecture
//!
//! One polling task on a fixed 200 ms cadence:
//! read -> convert -> classify -> actuate -> render -> sleep. The band
//! policy is a pure table lookup (see the library's `policy` module); this
//! binary only adds the board bring-up and the I/O writes.
//!
//! # Wiring
//!
//! - TMP36 output on GPIO26 (ADC0)
//! - Fan on GPIO10 (PWM slice 5, channel A)
//! - Indicator red/green/blue on GPIO9/GPIO8/GPIO7
//! - LCD rs/en on GPIO16/GPIO17, DB4..DB7 on GPIO18..GPIO21

#![cfg_attr(target_arch = "arm", no_std)]
#![cfg_attr(target_arch = "arm", no_main)]

// Modules only used in the binary (not testable on host)
#[cfg(target_arch = "arm")]
mod hd44780;

#[cfg(target_arch = "arm")]
mod firmware {
    use defmt::{debug, info};
    use embassy_executor::Spawner;
    use embassy_rp::adc::{self, Adc, Channel as AdcChannel, Config as AdcConfig};
    use embassy_rp::bind_interrupts;
    use embassy_rp::gpio::{Level, Output, Pull};
    use embassy_rp::pwm::{Config as PwmConfig, Pwm};
    use embassy_time::Timer;
    use static_cell::StaticCell;
    use {defmt_rtt as _, panic_probe as _};

    use thermofan_pico2::config::{BOOT_SETTLE_MS, CALIBRATION, CYCLE_INTERVAL_MS, PWM_TOP};
    use thermofan_pico2::policy::{ColorPattern, classify};
    use thermofan_pico2::render::render_lines;

    use crate::hd44780::Hd44780;

    bind_interrupts!(struct Irqs {
        ADC_IRQ_FIFO => adc::InterruptHandler;
    });

    // Program metadata for `picotool info`
    #[unsafe(link_section = ".bi_entries")]
    #[used]
    pub static PICOTOOL_ENTRIES: [embassy_rp::binary_info::EntryAddr; 4] = [
        embassy_rp::binary_info::rp_program_name!(c"thermofan"),
        embassy_rp::binary_info::rp_program_description!(c"Four-band thermal fan controller"),
        embassy_rp::binary_info::rp_cargo_version!(),
        embassy_rp::binary_info::rp_program_build_attribute!(),
    ];

    // =========================================================================
    // Actuator Wrappers
    // =========================================================================

    /// Fan output: one PWM slice wrapped with its config so the duty can be
    /// updated without rebuilding the rest of the configuration.
    struct FanPwm {
        pwm: Pwm<'static>,
        cfg: PwmConfig,
    }

    impl FanPwm {
        fn new(
            pwm: Pwm<'static>,
            cfg: PwmConfig,
        ) -> Self {
            Self { pwm, cfg }
        }

        /// Set the fan duty as a compare value on the 8-bit scale.
        fn set_duty(
            &mut self,
            duty: u8,
        ) {
            self.cfg.compare_a = duty as u16;
            self.pwm.set_config(&self.cfg);
        }
    }

    /// The three digital color channels of the status indicator.
    struct ColorOutputs {
        red: Output<'static>,
        green: Output<'static>,
        blue: Output<'static>,
    }

    impl ColorOutputs {
        /// Drive all three channels to the given pattern. Every channel is set
        /// unconditionally, so a previous pattern never leaves a stale channel.
        fn set(&mut self, pattern: ColorPattern) {
            self.red.set_level(level_for(pattern.red));
            self.green.set_level(level_for(pattern.green));
            self.blue.set_level(level_for(pattern.blue));
        }
    }

    fn level_for(on: bool) -> Level {
        if on { Level::High } else { Level::Low }
    }

    // =========================================================================
    // Board
    // =========================================================================

    /// All hardware resources of the controller, built once at startup and
    /// handed to the control loop by reference.
    struct Board {
        adc: Adc<'static, adc::Async>,
        sensor: AdcChannel<'static>,
        fan: FanPwm,
        color: ColorOutputs,
        lcd: Hd44780<'static>,
    }

    static BOARD: StaticCell<Board> = StaticCell::new();

    /// The polling loop: one cycle every 200 ms for the lifetime of the
    /// device. Each cycle is independent - no state is carried over.
    #[embassy_executor::task]
    async fn control_loop(board: &'static mut Board) {
        info!("Control loop started");

        loop {
            // A failed conversion falls through as code 0 and classifies like
            // any cold reading; the next cycle reads again.
            let raw = board.adc.read(&mut board.sensor).await.unwrap_or(0);
            let temp_c = CALIBRATION.celsius_from_raw(raw);
            let state = classify(temp_c).actuators();

            board.fan.set_duty(state.fan_duty);
            board.color.set(state.color);

            let lines = render_lines(temp_c, state.label);
            board.lcd.set_cursor(0, 0).await;
            board.lcd.write_str(&lines.temp_line).await;
            board.lcd.set_cursor(0, 1).await;
            board.lcd.write_str(&lines.fan_line).await;

            debug!(
                "raw={=u16} temp={=f32} fan={=str} duty={=u8}",
                raw, temp_c, state.label, state.fan_duty
            );

            Timer::after_millis(CYCLE_INTERVAL_MS).await;
        }
    }

    #[embassy_executor::main]
    async fn main(spawner: Spawner) {
        info!("Thermofan starting");
        let p = embassy_rp::init(Default::default());

        // Fan PWM at zero duty (GPIO10 is PWM slice 5, channel A)
        let mut pwm_cfg = PwmConfig::default();
        pwm_cfg.top = PWM_TOP;
        pwm_cfg.compare_a = 0;
        let pwm = Pwm::new_output_a(p.PWM_SLICE5, p.PIN_10, pwm_cfg.clone());
        let fan = FanPwm::new(pwm, pwm_cfg);

        // Temperature sensor on ADC0
        let adc = Adc::new(p.ADC, Irqs, AdcConfig::default());
        let sensor = AdcChannel::new_pin(p.PIN_26, Pull::None);

        // Status indicator channels, all off
        let mut color = ColorOutputs {
            red: Output::new(p.PIN_9, Level::Low),
            green: Output::new(p.PIN_8, Level::Low),
            blue: Output::new(p.PIN_7, Level::Low),
        };
        color.set(ColorPattern::OFF);

        // LCD on a 4-bit parallel bus
        let mut lcd = Hd44780::new(
            Output::new(p.PIN_16, Level::Low),
            Output::new(p.PIN_17, Level::Low),
            Output::new(p.PIN_18, Level::Low),
            Output::new(p.PIN_19, Level::Low),
            Output::new(p.PIN_20, Level::Low),
            Output::new(p.PIN_21, Level::Low),
        );

        // Boot screen, fixed settle delay, then clear for the first cycle
        lcd.init().await;
        lcd.write_str("Initializing...").await;
        Timer::after_millis(BOOT_SETTLE_MS).await;
        lcd.clear().await;

        let board = BOARD.init(Board {
            adc,
            sensor,
            fan,
            color,
            lcd,
        });
        spawner.spawn(control_loop(board)).unwrap();
    }
}

/// Host stand-in so `cargo build` / `cargo test` work off-target; the
/// embassy entrypoint in the `firmware` module is the real main.
#[cfg(not(target_arch = "arm"))]
fn main() {}
