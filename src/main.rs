// src/main.rs
use env_logger::Env;
use nannou::prelude::*;
use rand::rngs::ThreadRng;

use twenty48::{
    config::Config,
    controllers::{command_for_key, GameController, InputCommand, OscController},
    render::BoardRenderer,
};

// never run more than this many board ticks for one frame
const MAX_TICKS_PER_FRAME: u32 = 8;

struct Model {
    // Core components:
    game: GameController,
    renderer: BoardRenderer,
    random: ThreadRng,

    // Comms components:
    osc_controller: Option<OscController>,

    // Fixed-rate board clock
    tick_interval: f32,
    accumulator: f32,

    // FPS
    show_fps: bool,
    fps: f32,
}

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    nannou::app(model).update(update).run();
}

fn model(app: &App) -> Model {
    // Load config
    let config = Config::load().unwrap_or_else(|e| {
        log::warn!("{}; using default config", e);
        Config::default()
    });
    let board_config = config.board_config();

    // Create window
    let renderer = BoardRenderer::new(&board_config.layout);
    let size = renderer.window_size();
    app.new_window()
        .title(&config.window.title)
        .size(size.x as u32, size.y as u32)
        .resizable(false)
        .view(view)
        .key_pressed(key_pressed)
        .build()
        .expect("Failed to build window");

    // Create OSC controller
    let osc_controller = if config.osc.enabled {
        OscController::new(config.osc.rx_port)
            .map_err(|e| log::error!("{}; OSC input disabled", e))
            .ok()
    } else {
        None
    };

    let mut random = rand::thread_rng();
    let mut game = GameController::new(board_config);
    game.start(&mut random);

    Model {
        game,
        renderer,
        random,
        osc_controller,
        tick_interval: config.timing.tick_interval(),
        accumulator: 0.0,
        show_fps: config.window.show_fps,
        fps: 0.0,
    }
}

fn handle_command(model: &mut Model, command: InputCommand) {
    model.game.handle_command(command, &mut model.random);
}

fn key_pressed(_app: &App, model: &mut Model, key: Key) {
    if key == Key::F {
        model.show_fps = !model.show_fps;
        return;
    }
    if let Some(command) = command_for_key(key) {
        handle_command(model, command);
    }
}

fn update(_app: &App, model: &mut Model, update: Update) {
    let dt = update.since_last.as_secs_f32();
    if dt > 0.0 {
        model.fps = 1.0 / dt;
    }

    // Process OSC messages
    let commands = match model.osc_controller.as_mut() {
        Some(osc) => {
            osc.process_messages();
            osc.take_commands()
        }
        None => Vec::new(),
    };
    for command in commands {
        handle_command(model, command);
    }

    /*********************  Fixed-rate board update **********************/
    model.accumulator += dt;
    let mut ticks = 0;
    while model.accumulator >= model.tick_interval && ticks < MAX_TICKS_PER_FRAME {
        model.game.update(model.tick_interval);
        model.accumulator -= model.tick_interval;
        ticks += 1;
    }
    if ticks == MAX_TICKS_PER_FRAME {
        model.accumulator = 0.0;
    }
    /*************************************************************************/
}

// Draw the state of Model into the given Frame
fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();
    model.renderer.draw(&draw, &model.game.draw_commands());

    if model.show_fps {
        let size = model.renderer.window_size();
        draw.text(&format!("FPS: {:.1}", model.fps))
            .x_y(-size.x / 2.0 + 60.0, size.y / 2.0 - 20.0)
            .color(BLACK);
    }

    if let Err(e) = draw.to_frame(app, &frame) {
        log::error!("Failed to draw frame: {:?}", e);
    }
}
