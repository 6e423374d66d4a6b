//! Habitat globe viewer entry point.
//!
//! An interactive viewer that shows where an animal lives on a small globe,
//! written in Rust using:
//! - **raylib** for windowing, input, and graphics
//! - **bevy_ecs** for entity-component-system architecture
//!
//! # Main Loop
//!
//! 1. Load the configuration and the subject catalog
//! 2. Detect the host capabilities and pick the view strategy
//! 3. Initialize the raylib window and the ECS world, register observers and
//!    session hooks
//! 4. Run the main loop:
//!    - Read keyboard and pointer input
//!    - Turn pointer drags on the globe into spin
//!    - Rebuild the globe rotation, move labels, render
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- --subject "Snow Leopard"
//! ```

// Do not create console on Windows
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

use bevy_ecs::prelude::*;
use clap::Parser;
use habitatglobe::events::session::SessionChangedEvent;
use habitatglobe::game;
use habitatglobe::resources::camera3d::SceneCamera;
use habitatglobe::resources::capabilities::{HostCapabilities, ViewStrategy};
use habitatglobe::resources::catalog::SubjectCatalog;
use habitatglobe::resources::input::InputState;
use habitatglobe::resources::pointer::PointerState;
use habitatglobe::resources::session::{NextSessionState, SessionState, SessionStates};
use habitatglobe::resources::viewerconfig::ViewerConfig;
use habitatglobe::systems::input::{update_input_state, update_pointer_state};
use habitatglobe::systems::orientation::apply_orientation_system;
use habitatglobe::systems::pointer::pointer_drag_system;
use habitatglobe::systems::render::render_system;
use habitatglobe::systems::session::{check_pending_state, state_is_viewing};
use habitatglobe::systems::stuckto::stuck_to_entity_system;
use log::{error, info, warn};
use std::path::PathBuf;

/// Habitat globe viewer
#[derive(Parser)]
#[command(version, about = "Shows where an animal lives on an interactive globe.")]
struct Cli {
    /// JSON file with the subjects to browse.
    #[arg(long, value_name = "PATH", default_value = "assets/subjects.json")]
    catalog: PathBuf,

    /// INI configuration file (default: ./habitatglobe.ini).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Use the flat map card instead of the interactive globe.
    #[arg(long)]
    flat: bool,

    /// Open this subject right away instead of the subject list.
    #[arg(long, value_name = "NAME")]
    subject: Option<String>,

    /// Write the effective configuration as INI and exit.
    /// Optionally provide a path (default: the --config path).
    #[arg(long, value_name = "PATH")]
    write_config: Option<Option<PathBuf>>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => ViewerConfig::with_path(path),
        None => ViewerConfig::new(),
    };
    if let Err(e) = config.load_from_file() {
        info!("{}; using default configuration", e);
    }
    if cli.flat {
        config.force_flat = true;
    }

    // Early-exit: write the configuration and quit (no window needed)
    if let Some(maybe_path) = cli.write_config {
        if let Some(path) = maybe_path {
            config.config_path = path;
        }
        if let Err(e) = config.save_to_file() {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
        println!("Configuration written to {}", config.config_path.display());
        return;
    }

    let catalog = match SubjectCatalog::load_from_file(&cli.catalog) {
        Ok(catalog) => catalog,
        Err(e) => {
            warn!("{}; using the built-in example subject", e);
            SubjectCatalog::example()
        }
    };

    let initial_state = match cli.subject.as_deref() {
        Some(name) => match catalog.find_by_name(name) {
            Some(index) => SessionStates::Viewing(index),
            None => {
                error!("No subject named {:?} in the catalog", name);
                SessionStates::Browsing
            }
        },
        None => SessionStates::Browsing,
    };

    let strategy = ViewStrategy::select(&HostCapabilities::detect(config.force_flat));

    // --------------- Raylib window ---------------
    let (mut rl, thread) = raylib::init()
        .size(config.window_width as i32, config.window_height as i32)
        .resizable()
        .msaa_4x()
        .title("Habitat Globe")
        .build();
    rl.set_target_fps(config.target_fps);
    // Escape is used for navigation
    rl.set_exit_key(None);

    // --------------- ECS world + resources ---------------
    let mut world = World::new();
    world.insert_resource(config);
    world.insert_resource(catalog);
    world.insert_resource(strategy);
    world.insert_resource(SceneCamera::default());
    world.insert_resource(InputState::default());
    world.insert_resource(PointerState::default());
    world.insert_resource(SessionState::new());
    world.insert_resource(NextSessionState::new());
    world.insert_non_send_resource(rl);
    world.insert_non_send_resource(thread);

    game::install(&mut world);

    world.resource_mut::<NextSessionState>().set(initial_state);
    world.trigger(SessionChangedEvent {}); // Apply right away so the first frame already shows it
    world.flush();

    let mut update = Schedule::default();
    update.add_systems(update_input_state);
    update.add_systems(update_pointer_state);
    update.add_systems(check_pending_state.after(update_input_state));
    update.add_systems(
        pointer_drag_system
            .run_if(state_is_viewing)
            .after(update_pointer_state)
            .after(check_pending_state),
    );
    update.add_systems(apply_orientation_system.after(pointer_drag_system));
    update.add_systems(stuck_to_entity_system.after(apply_orientation_system));
    update.add_systems(render_system.after(stuck_to_entity_system));

    if let Err(e) = update.initialize(&mut world) {
        error!("Failed to initialize schedule: {}", e);
        return;
    }

    // --------------- Main loop ---------------
    while !world
        .non_send_resource::<raylib::RaylibHandle>()
        .window_should_close()
        && world.resource::<SessionState>().get() != SessionStates::Quitting
    {
        update.run(&mut world);
        world.clear_trackers();
    }
    info!("Bye");
}
