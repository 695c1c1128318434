use std::fs;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use log::{info, warn};
use rand::SeedableRng;
use rand::prelude::SmallRng;
use thousands::Separable;
use vitreye::io::export::{export_items, export_layout};
use vitreye::io::svg::layout_to_svg;
use vwall::io;
use vwall::io::cli::Cli;
use vwall::io::output::WallOutput;
use vwall::loader::{ImageFile, Source, generate_test_rects};
use vwall::session::{Session, WallEvent};

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let mut config = io::read_config(args.config_file.as_deref())?;
    if let Some(window) = args.window {
        config.window_width = window.width;
        config.window_height = window.height;
    }
    info!("[MAIN] successfully parsed WallConfig: {config:?}");

    let sources: Vec<Box<dyn Source>> = match args.inputs.is_empty() {
        true => {
            let mut rng = match config.prng_seed {
                Some(seed) => SmallRng::seed_from_u64(seed),
                None => SmallRng::from_os_rng(),
            };
            warn!(
                "[MAIN] no inputs provided, generating {} synthetic rectangles",
                config.n_test_rects
            );
            generate_test_rects(&config, &mut rng)
                .into_iter()
                .map(|r| Box::new(r) as Box<dyn Source>)
                .collect()
        }
        false => io::collect_inputs(&args.inputs)?
            .into_iter()
            .map(|path| Box::new(ImageFile { path }) as Box<dyn Source>)
            .collect(),
    };

    if !args.output_folder.exists() {
        fs::create_dir_all(&args.output_folder).with_context(|| {
            format!("could not create output folder: {:?}", args.output_folder)
        })?;
    }

    let mut session = Session::new(&config, sources);
    let frame_interval = Duration::from_secs(1) / config.fps.max(1);
    session.run(|_| vec![], frame_interval);

    // interaction once everything is on the wall
    let events = args
        .scroll
        .iter()
        .map(|&ticks| WallEvent::Wheel {
            ticks,
            flipped: args.flipped,
        })
        .chain(args.click.iter().map(|&p| WallEvent::Click(p)));
    let outcome = session.tick(events);

    let layout = &session.layout;
    info!(
        "[MAIN] wall of {} items, {} placed, {} placement overflows, content height {}px",
        layout.n_items().separate_with_commas(),
        layout.n_placed().separate_with_commas(),
        layout.n_overflows(),
        layout.content_height().separate_with_commas()
    );

    // logs go to stderr, stdout only carries the report
    io::write_report(
        &mut std::io::stdout().lock(),
        layout,
        session.labels(),
        &outcome.selections,
    )?;

    {
        let output = WallOutput {
            items: export_items(layout, session.labels()),
            layout: export_layout(layout),
            scroll_offset: session.scroll.offset(),
            config,
        };
        io::write_json(&output, &args.output_folder.join("wall.json"))?;
    }

    {
        let svg = layout_to_svg(layout, &session.scroll, config.svg_draw_options);
        io::write_svg(&svg, &args.output_folder.join("wall.svg"))?;
    }

    Ok(())
}
