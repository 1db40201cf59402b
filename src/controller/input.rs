//! Key event handling

use std::future::Future;

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::model::ActiveSection;
use super::AppController;

impl AppController {
    pub async fn handle_key_event(&self, key: KeyEvent) -> Result<()> {
        if key.kind != KeyEventKind::Press {
            return Ok(());
        }

        let model = &self.model;
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        // Ctrl+C / Ctrl+Q quit from anywhere, even while typing
        if ctrl && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('q')) {
            model.set_should_quit(true).await;
            return Ok(());
        }

        if ctrl && key.code == KeyCode::Char('r') {
            self.retry_connection();
            return Ok(());
        }

        // Handle help popup
        if model.is_help_popup_open().await {
            if matches!(key.code, KeyCode::Esc | KeyCode::Char('h') | KeyCode::Char('H')) {
                model.hide_help_popup().await;
            }
            return Ok(());
        }

        let ui_state = model.get_ui_state().await;

        // Handle search input when in search section
        if ui_state.active_section == ActiveSection::Search {
            match key.code {
                KeyCode::Tab | KeyCode::BackTab => {
                    if key.code == KeyCode::BackTab || key.modifiers.contains(KeyModifiers::SHIFT) {
                        model.cycle_section_backward().await;
                    } else {
                        model.cycle_section_forward().await;
                    }
                }
                KeyCode::Enter => {
                    let controller = self.clone();
                    self.spawn(async move { controller.submit_search().await });
                }
                KeyCode::Esc => model.clear_search_input().await,
                KeyCode::Backspace => model.backspace_search().await,
                KeyCode::Up => model.cycle_search_type(false).await,
                KeyCode::Down => model.cycle_search_type(true).await,
                KeyCode::Char(c) if !ctrl => model.append_to_search(c).await,
                _ => {}
            }
            return Ok(());
        }

        // Results section
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => model.set_should_quit(true).await,
            KeyCode::Tab => model.cycle_section_forward().await,
            KeyCode::BackTab => model.cycle_section_backward().await,
            KeyCode::Char('/') | KeyCode::Char('g') | KeyCode::Char('G') | KeyCode::Esc => {
                model.set_active_section(ActiveSection::Search).await;
            }
            KeyCode::Char('h') | KeyCode::Char('H') => model.show_help_popup().await,
            KeyCode::Up => model.result_move_up().await,
            KeyCode::Down => model.result_move_down().await,
            KeyCode::Left | KeyCode::PageUp => {
                let controller = self.clone();
                self.spawn(async move { controller.prev_page().await });
            }
            KeyCode::Right | KeyCode::PageDown => {
                let controller = self.clone();
                self.spawn(async move { controller.next_page().await });
            }
            KeyCode::Home => {
                let controller = self.clone();
                self.spawn(async move { controller.first_page().await });
            }
            KeyCode::End => {
                let controller = self.clone();
                self.spawn(async move { controller.last_page().await });
            }
            KeyCode::Char('s') | KeyCode::Char('S') => {
                let controller = self.clone();
                self.spawn(async move { controller.cycle_page_size().await });
            }
            KeyCode::Char('r') | KeyCode::Char('R') => self.retry_connection(),
            _ => {}
        }

        Ok(())
    }

    /// Manual retry: re-runs only the health check, never the last search
    pub fn retry_connection(&self) {
        let controller = self.clone();
        self.spawn(async move { controller.check_health().await });
    }

    /// Run network-bound work off the input path so the UI keeps drawing
    fn spawn<F>(&self, task: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        tokio::spawn(task);
    }
}
