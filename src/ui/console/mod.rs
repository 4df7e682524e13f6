//! Zeilen-Eingabe für das Konsolen-Frontend.
//!
//! Bildet die Maus- und Tastenbelegung des Editors auf Textbefehle ab und
//! mappt sie auf `AppIntent`s. Koordinaten sind NDC, mit nachgestelltem `px`
//! werden sie als Fensterpixel interpretiert.

use crate::app::AppIntent;
use crate::core::screen_to_ndc;
use crate::shared::EditorOptions;
use anyhow::{bail, Context};
use glam::Vec2;
use std::path::PathBuf;

/// Kurzhilfe für die Konsole.
pub const HELP: &str = "\
lmb X Y [px]     primary press (select+drag or append point)
rmb X Y [px]     secondary press (delete point)
mmb X Y [px]     middle press (insert point before hit and drag it)
cursor X Y [px]  pointer move
release          pointer release
add X Y          append point
insert X Y       insert point before selection
delete           delete selected point
move I X Y       move point I
select X Y       select point under position
up | down        increase | decrease order
right | left     step uParam forward | backward
enter            report order and point count
show             print points and knots
save [PATH]      store points and order as start values
help             this text
esc | quit       exit";

/// Ergebnis einer Eingabezeile.
#[derive(Debug, Clone, PartialEq)]
pub enum ConsoleInput {
    /// Intents für den Controller
    Intents(Vec<AppIntent>),
    /// Szene ausgeben
    ShowScene,
    /// Hilfe ausgeben
    Help,
    /// Punkte und Ordnung als Startwerte speichern (ohne Pfad: Standard-Config)
    SaveOptions(Option<PathBuf>),
}

/// Parst eine Eingabezeile.
pub fn parse_line(line: &str, options: &EditorOptions) -> anyhow::Result<ConsoleInput> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let Some((&command, args)) = tokens.split_first() else {
        return Ok(ConsoleInput::Intents(Vec::new()));
    };

    let intent = match command.to_ascii_lowercase().as_str() {
        "lmb" => AppIntent::PrimaryPressed {
            pos: parse_pos(args, options)?,
        },
        "rmb" => AppIntent::SecondaryPressed {
            pos: parse_pos(args, options)?,
        },
        "mmb" => AppIntent::MiddlePressed {
            pos: parse_pos(args, options)?,
        },
        "cursor" => AppIntent::PointerMoved {
            pos: parse_pos(args, options)?,
        },
        "release" => AppIntent::PointerReleased,
        "add" => AppIntent::AddPointRequested {
            pos: parse_pos(args, options)?,
        },
        "insert" => AppIntent::InsertPointAtSelectedRequested {
            pos: parse_pos(args, options)?,
        },
        "delete" => AppIntent::DeleteSelectedRequested,
        "move" => {
            let Some((index, rest)) = args.split_first() else {
                bail!("move erwartet: move I X Y");
            };
            let index = index
                .parse::<usize>()
                .with_context(|| format!("Ungültiger Index: {index}"))?;
            AppIntent::MovePointRequested {
                index,
                pos: parse_pos(rest, options)?,
            }
        }
        "select" => AppIntent::SelectPointRequested {
            pos: parse_pos(args, options)?,
        },
        "up" => AppIntent::IncreaseOrderRequested,
        "down" => AppIntent::DecreaseOrderRequested,
        "right" => AppIntent::ParamStepForwardRequested,
        "left" => AppIntent::ParamStepBackwardRequested,
        "enter" => AppIntent::StateQueryRequested,
        "esc" | "quit" | "exit" => AppIntent::ExitRequested,
        "show" => return Ok(ConsoleInput::ShowScene),
        "help" | "?" => return Ok(ConsoleInput::Help),
        "save" => {
            let path = (!args.is_empty()).then(|| PathBuf::from(args.join(" ")));
            return Ok(ConsoleInput::SaveOptions(path));
        }
        other => bail!("Unbekannter Befehl: {other}"),
    };

    Ok(ConsoleInput::Intents(vec![intent]))
}

/// Liest `X Y` oder `X Y px` und liefert NDC-Koordinaten.
fn parse_pos(args: &[&str], options: &EditorOptions) -> anyhow::Result<Vec2> {
    let (x, y, pixels) = match args {
        [x, y] => (x, y, false),
        [x, y, unit] if unit.eq_ignore_ascii_case("px") => (x, y, true),
        _ => bail!("Position erwartet: X Y [px]"),
    };
    let x: f32 = x
        .parse()
        .with_context(|| format!("Ungültige X-Koordinate: {x}"))?;
    let y: f32 = y
        .parse()
        .with_context(|| format!("Ungültige Y-Koordinate: {y}"))?;

    let pos = Vec2::new(x, y);
    if pixels {
        Ok(screen_to_ndc(pos, options.window_size_vec()))
    } else {
        Ok(pos)
    }
}
