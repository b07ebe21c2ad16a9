use miniapp::app::{App, AppDeps, AppMessage};
use miniapp::cli::{parse_args, usage, CliCommand};
use miniapp::input::{Command, CommandRegistry};
use miniapp::startup::init_logging;
use miniapp::terminal::{install_panic_hook, TerminalManager};
use miniapp::ui;

use color_eyre::Result;
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;
use ratatui::Terminal;
use tokio::sync::mpsc;
use tokio::time::MissedTickBehavior;

const VERSION: &str = env!("CARGO_PKG_VERSION");

fn main() -> Result<()> {
    let config = match parse_args(std::env::args().skip(1)) {
        Ok(CliCommand::Run(config)) => config,
        Ok(CliCommand::Version) => {
            println!("miniapp {}", VERSION);
            return Ok(());
        }
        Ok(CliCommand::Help) => {
            println!("{}", usage());
            return Ok(());
        }
        Err(e) => {
            eprintln!("{}\n\n{}", e, usage());
            std::process::exit(2);
        }
    };

    color_eyre::install()?;
    install_panic_hook();

    if !init_logging(&config.log_file()) {
        eprintln!(
            "Warning: logging disabled, cannot write {}",
            config.log_file().display()
        );
    }
    tracing::info!("miniapp {} starting", VERSION);

    let runtime = tokio::runtime::Runtime::new()?;
    let deps = AppDeps::production(&config);
    let tick_interval = config.tick_interval;

    runtime.block_on(async move {
        let mut manager = TerminalManager::new()?;
        let mut app = App::new(config, deps);
        app.start();

        let result = run_app(manager.terminal(), &mut app, tick_interval).await;
        manager.restore();

        if let Err(ref e) = result {
            tracing::error!("Event loop failed: {:?}", e);
        }
        tracing::info!("miniapp exiting");
        result
    })
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    tick_interval: std::time::Duration,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let registry = CommandRegistry::new();
    let mut event_stream = EventStream::new();
    let mut message_rx: Option<mpsc::UnboundedReceiver<AppMessage>> = app.message_rx.take();

    let mut ticker = tokio::time::interval(tick_interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        // Draw only when state changed since the last frame
        if app.needs_redraw {
            terminal.draw(|f| ui::render(f, app))?;
            app.needs_redraw = false;
        }

        tokio::select! {
            _ = ticker.tick() => {
                app.tick();
            }

            event_result = event_stream.next() => {
                match event_result {
                    Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                        let context = app.build_input_context();
                        if let Some(cmd) = registry.dispatch(key, &context) {
                            tracing::trace!("Key {:?} -> {:?}", key.code, cmd);
                            app.execute_command(cmd);
                        }
                    }
                    Some(Ok(Event::Paste(text))) => {
                        // Pasted text goes wherever typed characters would
                        for c in text.chars().filter(|c| !c.is_control()) {
                            app.execute_command(Command::InsertChar(c));
                        }
                    }
                    Some(Ok(Event::Resize(_, _))) => app.mark_dirty(),
                    Some(Ok(_)) => {}
                    Some(Err(e)) => {
                        tracing::warn!("Terminal event error: {}", e);
                    }
                    None => return Ok(()),
                }
            }

            msg = async {
                match &mut message_rx {
                    Some(rx) => rx.recv().await,
                    None => std::future::pending().await,
                }
            } => {
                if let Some(msg) = msg {
                    app.handle_message(msg);
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
