//! B-Spline Knot Editor.
//!
//! Konsolen-Frontend für das Kontrollpolygon eines B-Splines: liest
//! Eingabezeilen von stdin und hält den Knotenvektor synchron.

use bspline_knot_editor::{ui, AppController, AppIntent, AppState, EditorOptions};
use std::io::{BufRead, Write};

fn main() -> anyhow::Result<()> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> anyhow::Result<()> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .parse_default_env()
            .init();

        log::info!(
            "B-Spline Knot Editor v{} startet...",
            env!("CARGO_PKG_VERSION")
        );

        let mut app = EditorApp::new()?;
        app.run_loop()
    }
}

/// Haupt-Anwendungsstruktur
struct EditorApp {
    state: AppState,
    controller: AppController,
}

impl EditorApp {
    fn new() -> anyhow::Result<Self> {
        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = EditorOptions::config_path();
        let editor_options = EditorOptions::load_from_file(&config_path);

        Ok(Self {
            state: AppState::with_options(editor_options)?,
            controller: AppController::new(),
        })
    }

    fn run_loop(&mut self) -> anyhow::Result<()> {
        let stdin = std::io::stdin();
        let mut out = std::io::stdout().lock();

        writeln!(out, "{}", ui::HELP)?;
        self.show_scene(&mut out)?;

        for line in stdin.lock().lines() {
            let line = line?;
            match ui::parse_line(&line, &self.state.options) {
                Ok(ui::ConsoleInput::Intents(intents)) => self.process_events(intents),
                Ok(ui::ConsoleInput::ShowScene) => self.show_scene(&mut out)?,
                Ok(ui::ConsoleInput::Help) => writeln!(out, "{}", ui::HELP)?,
                Ok(ui::ConsoleInput::SaveOptions(path)) => self.save_options(path),
                Err(e) => log::warn!("Eingabe ignoriert: {:#}", e),
            }

            let messages = self.state.status.drain();
            ui::render_status(&mut out, &messages)?;
            out.flush()?;

            if self.state.should_exit {
                break;
            }
        }

        log::info!("B-Spline Knot Editor beendet");
        Ok(())
    }

    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Event handling failed: {:#}", e);
            }
        }
    }

    fn save_options(&mut self, path: Option<std::path::PathBuf>) {
        let path = path.unwrap_or_else(EditorOptions::config_path);
        let options = self.state.options.with_session(&self.state.session);
        match options.save_to_file(&path) {
            Ok(()) => self.state.options = options,
            Err(e) => log::error!("Optionen konnten nicht gespeichert werden: {:#}", e),
        }
    }

    fn show_scene(&self, out: &mut impl Write) -> anyhow::Result<()> {
        let scene = self.controller.build_render_scene(&self.state);
        ui::render_scene(out, &scene)?;
        Ok(())
    }
}
