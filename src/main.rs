//! Terminal driver for the vagas board.
//!
//! Reads one command per line from stdin, turns it into an [`Event`], and
//! redraws the whole screen whenever the handler asks for it. A `Tick` is fed
//! every 50 ms while stdin is quiet so the search debounce and the success
//! banner expire on time.
//!
//! # Usage
//!
//! ```text
//! vagas [config=<file.toml>] [key=value ...]
//! ```
//!
//! # Commands
//!
//! - `busca <texto>`: type into the search box
//! - `filtro <modo|tipo|area> <valor>`: press a filter button
//! - `ordem <recente|antiga|alfabetica|tipo>`: pick the sort order
//! - `prox` / `ant`: next and previous page
//! - `abrir <id>`: open a listing's details
//! - `fechar`, `fundo`, `esc`: close button, backdrop click, Escape key
//! - `candidatar`: apply to the open listing
//! - `campo <nome|email|telefone|linkedin> <valor>`: type into a form field
//! - `sair <campo>`: leave a form field
//! - `enviar`: submit the application
//! - `q`: quit

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread;
use std::time::{Duration, Instant};
use vagas::app::FormField;
use vagas::observability::init_tracing;
use vagas::query::{FilterGroup, SortKey};
use vagas::ui::{render, AnsiRenderer};
use vagas::{handle_event, initialize, load_theme, Action, AppState, Config, Event};

const TICK: Duration = Duration::from_millis(50);
const DEFAULT_ROWS: usize = 40;
const DEFAULT_COLS: usize = 120;

struct Driver<W: Write> {
    state: AppState,
    renderer: AnsiRenderer<W>,
    running: bool,
}

impl<W: Write> Driver<W> {
    fn run(&mut self, commands: &mpsc::Receiver<String>) -> vagas::Result<()> {
        render(&self.state, &mut self.renderer)?;

        while self.running {
            let event = match commands.recv_timeout(TICK) {
                Ok(line) => match parse_command(&line, Instant::now()) {
                    Some(event) => event,
                    None => {
                        tracing::debug!(command = %line, "unrecognized command");
                        continue;
                    }
                },
                Err(RecvTimeoutError::Timeout) => Event::Tick(Instant::now()),
                Err(RecvTimeoutError::Disconnected) => Event::Quit,
            };

            let is_command = !matches!(event, Event::Tick(_) | Event::Quit);
            let (mut should_render, actions) = handle_event(&mut self.state, &event)?;
            for action in &actions {
                self.execute_action(action);
            }

            // Piped input can arrive faster than the tick interval.
            if is_command {
                let (ticked, _) = handle_event(&mut self.state, &Event::Tick(Instant::now()))?;
                should_render |= ticked;
            }

            if should_render {
                render(&self.state, &mut self.renderer)?;
            }
        }
        Ok(())
    }

    fn execute_action(&mut self, action: &Action) {
        match action {
            Action::ScrollToList => {
                tracing::debug!("scrolling to listing table");
            }
            Action::SubmitApplication(payload) => match serde_json::to_string(payload) {
                Ok(json) => tracing::debug!(payload = %json, "application recorded"),
                Err(e) => tracing::warn!(error = %e, "failed to serialize application"),
            },
            Action::Quit => {
                tracing::debug!("quitting");
                self.running = false;
            }
        }
    }
}

/// Maps one input line to an event. Unknown commands and missing
/// arguments yield `None`.
fn parse_command(line: &str, now: Instant) -> Option<Event> {
    let line = line.trim();
    let (command, rest) = line.split_once(' ').unwrap_or((line, ""));
    let rest = rest.trim();

    let event = match command {
        "busca" => Event::SearchInput {
            text: rest.to_string(),
            at: now,
        },
        "filtro" => {
            let (group, value) = rest.split_once(' ')?;
            Event::SelectFilter {
                group: FilterGroup::from_name(group)?,
                value: value.trim().to_string(),
            }
        }
        "ordem" => Event::SetSort(SortKey::from_code(rest)?),
        "prox" => Event::NextPage,
        "ant" => Event::PrevPage,
        "abrir" if !rest.is_empty() => Event::OpenDetail {
            id: rest.to_string(),
        },
        "fechar" => Event::CloseModal,
        "fundo" => Event::OverlayClick { on_backdrop: true },
        "esc" => Event::Escape,
        "candidatar" => Event::Apply,
        "campo" => {
            let (field, value) = rest.split_once(' ').unwrap_or((rest, ""));
            Event::FieldInput {
                field: FormField::from_name(field)?,
                value: value.to_string(),
            }
        }
        "sair" => Event::FieldBlur(FormField::from_name(rest)?),
        "enviar" => Event::Submit { at: now },
        "q" => Event::Quit,
        _ => return None,
    };
    Some(event)
}

fn parse_args(args: impl Iterator<Item = String>) -> BTreeMap<String, String> {
    args.filter_map(|arg| {
        arg.split_once('=')
            .map(|(key, value)| (key.trim().to_string(), value.to_string()))
    })
    .collect()
}

fn terminal_size() -> (usize, usize) {
    let dimension = |var: &str, default: usize| {
        std::env::var(var)
            .ok()
            .and_then(|v| v.trim().parse().ok())
            .filter(|&n: &usize| n > 0)
            .unwrap_or(default)
    };
    (dimension("LINES", DEFAULT_ROWS), dimension("COLUMNS", DEFAULT_COLS))
}

fn spawn_stdin_reader() -> mpsc::Receiver<String> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            let Ok(line) = line else { break };
            if tx.send(line).is_err() {
                break;
            }
        }
    });
    rx
}

fn main() -> ExitCode {
    let config = match Config::load(&parse_args(std::env::args().skip(1))) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("vagas: {e}");
            return ExitCode::FAILURE;
        }
    };

    init_tracing(&config);

    let state = match initialize(&config) {
        Ok(state) => state,
        Err(e) => {
            tracing::error!(error = %e, "failed to initialize");
            eprintln!("vagas: {e}");
            return ExitCode::FAILURE;
        }
    };

    let (rows, cols) = terminal_size();
    let mut driver = Driver {
        state,
        renderer: AnsiRenderer::new(io::stdout(), load_theme(&config), rows, cols),
        running: true,
    };

    let commands = spawn_stdin_reader();
    if let Err(e) = driver.run(&commands) {
        tracing::error!(error = %e, "driver stopped");
        eprintln!("vagas: {e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_query_commands() {
        let now = Instant::now();
        assert_eq!(
            parse_command("filtro area todas", now),
            Some(Event::SelectFilter {
                group: FilterGroup::Area,
                value: "todas".to_string()
            })
        );
        assert_eq!(parse_command("ordem tipo", now), Some(Event::SetSort(SortKey::Tipo)));
        assert_eq!(
            parse_command("busca banco de dados", now),
            Some(Event::SearchInput {
                text: "banco de dados".to_string(),
                at: now
            })
        );
        assert_eq!(parse_command("prox", now), Some(Event::NextPage));
    }

    #[test]
    fn parses_form_commands() {
        let now = Instant::now();
        assert_eq!(
            parse_command("campo nome Ana Silva", now),
            Some(Event::FieldInput {
                field: FormField::Nome,
                value: "Ana Silva".to_string()
            })
        );
        assert_eq!(
            parse_command("campo linkedin", now),
            Some(Event::FieldInput {
                field: FormField::Linkedin,
                value: String::new()
            })
        );
        assert_eq!(parse_command("sair email", now), Some(Event::FieldBlur(FormField::Email)));
    }

    #[test]
    fn rejects_unknown_or_incomplete_commands() {
        let now = Instant::now();
        assert_eq!(parse_command("pular", now), None);
        assert_eq!(parse_command("filtro cor azul", now), None);
        assert_eq!(parse_command("filtro modo", now), None);
        assert_eq!(parse_command("ordem aleatoria", now), None);
        assert_eq!(parse_command("abrir", now), None);
    }

    fn driver(records: Vec<vagas::ListingRecord>) -> Driver<Vec<u8>> {
        Driver {
            state: AppState::new(records),
            renderer: AnsiRenderer::new(Vec::new(), vagas::Theme::default(), 30, 120),
            running: true,
        }
    }

    fn titled(id: &str, titulo: &str) -> vagas::ListingRecord {
        let attrs = BTreeMap::from([("data-titulo".to_string(), titulo.to_string())]);
        vagas::ListingRecord::from_attributes(id, &attrs)
    }

    #[test]
    fn search_typed_right_before_end_of_input_is_applied() {
        let mut driver = driver(vec![titled("dev", "Desenvolvedor"), titled("rh", "Recrutador")]);
        let (tx, rx) = mpsc::channel();
        tx.send("busca dev".to_string()).unwrap();
        drop(tx);

        driver.run(&rx).unwrap();

        assert!(!driver.running);
        assert_eq!(driver.state.query.search_term, "dev");
        assert_eq!(driver.state.filtered.len(), 1);
    }

    #[test]
    fn quit_command_flushes_pending_search() {
        let mut driver = driver(vec![titled("dev", "Desenvolvedor"), titled("rh", "Recrutador")]);
        let (tx, rx) = mpsc::channel();
        tx.send("busca recru".to_string()).unwrap();
        tx.send("q".to_string()).unwrap();

        driver.run(&rx).unwrap();

        let frames = String::from_utf8(driver.renderer.into_inner()).unwrap();
        assert!(frames.contains("Vagas (1)"));
        assert_eq!(driver.state.query.search_term, "recru");
    }

    #[test]
    fn args_become_config_pairs() {
        let args = ["page_size=4", "verbose", "theme=catppuccin-latte"].map(String::from);
        let map = parse_args(args.into_iter());
        assert_eq!(map.len(), 2);
        assert_eq!(map["page_size"], "4");
    }
}
