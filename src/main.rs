use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use raylib::prelude::*;
use tracing::info;

mod config;
mod constants;
mod controls;
mod ffmpeg;
mod logging;
mod navigator;
mod slide;
mod strip;
mod texture_loader;
mod timer;

use crate::config::{Cli, Config};
use crate::constants::*;
use crate::controls::Button;
use crate::ffmpeg::Ffmpeg;
use crate::navigator::Navigator;
use crate::slide::Slide;
use crate::strip::SlideStrip;
use crate::texture_loader::load_directory;
use crate::timer::RepeatingTimer;

fn main() -> Result<()> {
    logging::setup_logging();
    let cli = Cli::parse();
    run(&cli)
}

fn run(cli: &Cli) -> Result<()> {
    let mut config = Config::try_from(cli).context("invalid configuration")?;

    let (mut rl, thread) = raylib::init()
        .size(RENDER_WIDTH / 2, RENDER_HEIGHT / 2)
        .title("Carousel")
        .vsync()
        .resizable()
        .build();
    rl.set_target_fps(FPS);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);

    // --- Slides ---
    let slides: Vec<Slide> = match &cli.images {
        Some(dir) => {
            let textures = load_directory(&mut rl, &thread, dir)
                .with_context(|| format!("loading slides from {}", dir.display()))?;
            config = config.with_slide_count(textures.len())?;
            textures.into_iter().map(Slide::from_texture).collect()
        }
        None => (0..config.slide_count())
            .map(|i| Slide::placeholder(i, config.slide_count()))
            .collect(),
    };
    let mut navigator = Navigator::new(SlideStrip::new(slides), &config);
    let buttons = Button::pair();

    let mut recorder = match &cli.record {
        Some(video) => Some(Ffmpeg::new(RENDER_WIDTH, RENDER_HEIGHT, FPS, video)?),
        None => None,
    };
    // Timer firings left before a recording is complete.
    let mut remaining = recorder
        .as_ref()
        .map(|_| config.slide_count() as u64 * u64::from(cli.cycles));

    let mut framebuffer = rl
        .load_render_texture(&thread, RENDER_WIDTH.try_into()?, RENDER_HEIGHT.try_into()?)
        .map_err(|e| anyhow!("failed to create render texture: {}", e))?;

    let mut timer = RepeatingTimer::new(config.interval());
    info!(
        slides = navigator.surface().len(),
        interval_ms = timer.interval().as_millis() as u64,
        "carousel ready"
    );
    timer.start();

    // --- Main Loop ---
    while !rl.window_should_close() {
        let dt = if recorder.is_some() { FRAME_TIME } else { rl.get_frame_time() };

        let activated = controls::poll(&rl, &buttons);
        let recorded = navigator::step(
            &mut navigator,
            &mut timer,
            &activated,
            Duration::from_secs_f32(dt),
            &mut remaining,
        );

        // --- Render into the fixed size framebuffer ---
        rl.draw_texture_mode(&thread, &mut framebuffer, |mut tmd| {
            let mut d = tmd.begin_drawing(&thread);
            d.clear_background(Color::BLACK);
            navigator.surface().draw(&mut d);
            for button in buttons.iter() {
                button.draw(&mut d);
            }
        });

        // --- Stretch the framebuffer over the window ---
        let mut d2 = rl.begin_drawing(&thread);
        let sw = d2.get_screen_width() as f32;
        let sh = d2.get_screen_height() as f32;
        d2.draw_texture_pro(
            &framebuffer,
            Rectangle::new(0.0, 0.0, framebuffer.width() as f32, -(framebuffer.height() as f32)),
            Rectangle::new(0.0, 0.0, sw, sh),
            Vector2::new(0.0, 0.0),
            0.0,
            Color::WHITE,
        );
        drop(d2);

        if let Some(ffmpeg) = recorder.as_mut() {
            let image = framebuffer
                .load_image()
                .map_err(|e| anyhow!("failed to read back framebuffer: {}", e))?;
            ffmpeg.write(&image)?;
        }

        if recorded {
            break;
        }
    }

    timer.cancel();
    info!(
        index = navigator.index(),
        slide_count = navigator.slide_count(),
        offset = navigator.surface().offset(),
        "carousel closed"
    );
    if let Some(ffmpeg) = recorder {
        ffmpeg.finish()?;
    }
    Ok(())
}
