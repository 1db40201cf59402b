mod config;
mod controller;
mod error;
mod logging;
mod model;
mod view;

use std::io;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{Event, EventStream},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use tokio::time::MissedTickBehavior;

use config::Args;
use controller::AppController;
use model::{AppModel, HttpMusicApi, VisualizerFrame};
use view::{surface_size, AppView};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    if let Err(e) = logging::init_logging(&args.log_dir) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    tracing::info!("=== Music Explorer Starting ===");

    let api = HttpMusicApi::new(&args.api_base, args.timeout())
        .context("failed to build HTTP client")?;
    tracing::info!(api_base = api.base_url(), page_size = args.page_size, "Search API configured");
    let model = Arc::new(AppModel::new(args.page_size));
    let controller = AppController::new(model.clone(), Arc::new(api));

    // Initial health probe runs alongside the first frames
    let controller_for_health = controller.clone();
    tokio::spawn(async move {
        controller_for_health.check_health().await;
    });

    let visualizer = (!args.no_visualizer).then(|| VisualizerFrame::new(args.bars));

    tracing::info!("Starting TUI...");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, model, controller, visualizer, &args).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        tracing::error!(error = ?err, "Application error");
    }

    tracing::info!("Music Explorer shutting down");
    res
}

fn resize_visualizer(visualizer: &mut Option<VisualizerFrame>, width: u16, height: u16) {
    if let Some(visualizer) = visualizer.as_mut() {
        let (w, h) = surface_size(AppView::visualizer_area(Rect::new(0, 0, width, height)));
        visualizer.resize(w, h);
    }
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    model: Arc<AppModel>,
    controller: AppController,
    mut visualizer: Option<VisualizerFrame>,
    args: &Args,
) -> Result<()> {
    let size = terminal.size()?;
    resize_visualizer(&mut visualizer, size.width, size.height);

    let mut rng = fastrand::Rng::new();
    let mut ticker = tokio::time::interval(args.frame_interval());
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
    let mut events = EventStream::new();

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                if let Some(visualizer) = visualizer.as_mut() {
                    visualizer.step(&mut rng);
                }

                let ui_state = model.get_ui_state().await;
                let search_state = model.get_search_state().await;

                terminal.draw(|f| {
                    AppView::render(f, &ui_state, &search_state, visualizer.as_ref());
                })?;
            }
            event = events.next() => {
                match event {
                    Some(Ok(Event::Key(key))) => {
                        if let Err(e) = controller.handle_key_event(key).await {
                            tracing::warn!(error = %e, "Key handling failed");
                        }
                    }
                    Some(Ok(Event::Resize(width, height))) => {
                        tracing::debug!(width, height, "Terminal resized");
                        resize_visualizer(&mut visualizer, width, height);
                    }
                    Some(Ok(_)) => {}
                    Some(Err(e)) => return Err(e.into()),
                    None => break,
                }
            }
        }

        if model.should_quit().await {
            break;
        }
    }

    // Release the frame timer and the terminal event reader before the terminal is restored
    drop(ticker);
    drop(events);
    tracing::debug!("Run loop stopped");

    Ok(())
}
