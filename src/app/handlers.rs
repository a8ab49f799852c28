//! Key handling for the App.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::{App, Route, Tab};
use crate::search::SearchEvent;
use crate::traits::ShareOutcome;
use crate::ui::{self, DetailLayout};
use crate::view_model::DetailState;

/// A selectable item on a detail screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailLink {
    /// Push another detail screen
    Open(Route),
    /// Open a URL outside the terminal
    External(String),
}

fn move_cursor(cursor: usize, len: usize, down: bool) -> usize {
    if len == 0 {
        0
    } else if down {
        (cursor + 1).min(len - 1)
    } else {
        cursor.saturating_sub(1)
    }
}

impl App {
    /// Handle a key press.
    pub fn handle_key(&mut self, key: KeyEvent) {
        self.mark_dirty();

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit();
            return;
        }

        if self.search_bar.is_focused() {
            self.handle_search_key(key);
            return;
        }

        self.status = None;
        match key.code {
            KeyCode::Char('q') => return self.quit(),
            KeyCode::Char('1') => return self.switch_tab(Tab::Schedule),
            KeyCode::Char('2') => return self.switch_tab(Tab::Speakers),
            KeyCode::Char('3') => return self.switch_tab(Tab::Videos),
            KeyCode::Tab => return self.switch_tab(self.active_tab().next()),
            _ => {}
        }

        if self.navigator.current().is_some() {
            self.handle_detail_key(key);
            return;
        }

        match self.active_tab() {
            Tab::Schedule => self.handle_schedule_key(key),
            Tab::Speakers => self.handle_speakers_key(key),
            Tab::Videos => self.handle_videos_key(key),
        }
    }

    pub fn switch_tab(&mut self, tab: Tab) {
        self.navigator.select_tab(tab);
        if let Some(binding) = self.active_binding() {
            let binding = binding.clone();
            self.search_bar.configure(&binding);
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent) {
        let Some(event) = self.search_bar.handle_key(key) else {
            return;
        };
        let query_changed = !matches!(event, SearchEvent::Submitted(_));
        if let Some(binding) = self.active_binding_mut() {
            binding.apply(event);
        }
        if query_changed {
            self.reset_list_cursor();
        }
    }

    fn reset_list_cursor(&mut self) {
        match self.active_tab() {
            Tab::Schedule => self.schedule_cursor = 0,
            Tab::Speakers => self.speakers_cursor = 0,
            Tab::Videos => {}
        }
    }

    /// Esc on a list with an active query clears it.
    fn clear_query(&mut self) {
        let Some(binding) = self.active_binding_mut() else {
            return;
        };
        if binding.query().is_empty() {
            return;
        }
        binding.apply(SearchEvent::Cancelled);
        let binding = binding.clone();
        self.search_bar.configure(&binding);
        self.reset_list_cursor();
    }

    fn handle_schedule_key(&mut self, key: KeyEvent) {
        let Some((days, selected_day, rows)) = self
            .schedule_view()
            .map(|v| (v.days.len(), v.selected_day, v.rows.len()))
        else {
            if key.code == KeyCode::Char('/') {
                self.search_bar.focus();
            }
            return;
        };

        match key.code {
            KeyCode::Char('/') => self.search_bar.focus(),
            KeyCode::Esc => self.clear_query(),
            KeyCode::Left | KeyCode::Char('h') => {
                if selected_day > 0 {
                    self.selected_day = selected_day - 1;
                    self.schedule_cursor = 0;
                }
            }
            KeyCode::Right | KeyCode::Char('l') => {
                if selected_day + 1 < days {
                    self.selected_day = selected_day + 1;
                    self.schedule_cursor = 0;
                }
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.schedule_cursor = move_cursor(self.schedule_cursor, rows, false);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.schedule_cursor = move_cursor(self.schedule_cursor, rows, true);
            }
            KeyCode::Enter => {
                let id = self.schedule_view().and_then(|v| {
                    v.rows
                        .get(self.schedule_cursor)
                        .map(|row| row.session.id.clone())
                });
                if let Some(id) = id {
                    self.navigator.push(Route::Session(id));
                }
            }
            _ => {}
        }
    }

    fn handle_speakers_key(&mut self, key: KeyEvent) {
        let count = self.speakers_view().map_or(0, |v| v.speakers.len());

        match key.code {
            KeyCode::Char('/') => self.search_bar.focus(),
            KeyCode::Esc => self.clear_query(),
            KeyCode::Up | KeyCode::Char('k') => {
                self.speakers_cursor = move_cursor(self.speakers_cursor, count, false);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.speakers_cursor = move_cursor(self.speakers_cursor, count, true);
            }
            KeyCode::Enter => {
                let id = self.speakers_view().and_then(|v| {
                    v.speakers
                        .get(self.speakers_cursor)
                        .map(|speaker| speaker.id.clone())
                });
                if let Some(id) = id {
                    self.navigator.push(Route::Speaker(id));
                }
            }
            _ => {}
        }
    }

    fn handle_videos_key(&mut self, key: KeyEvent) {
        let count = self.videos().len();

        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.video_cursor = move_cursor(self.video_cursor, count, false);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.video_cursor = move_cursor(self.video_cursor, count, true);
            }
            KeyCode::Char('o') => {
                self.video_sort = self.video_sort.toggled();
                self.video_cursor = 0;
            }
            KeyCode::Enter => self.play_selected_video(),
            _ => {}
        }
    }

    fn handle_detail_key(&mut self, key: KeyEvent) {
        let links = self.detail_links();

        match key.code {
            KeyCode::Esc | KeyCode::Backspace => {
                self.navigator.pop();
            }
            // The cursor moves between items; past either end the content scrolls
            KeyCode::Up | KeyCode::Char('k') => {
                let cursor = self.navigator.cursor();
                if cursor > 0 {
                    self.navigator.set_cursor(move_cursor(cursor, links.len(), false));
                    self.reveal_detail_cursor();
                } else {
                    self.scroll_detail(|scroll, _| scroll.saturating_sub(1));
                }
            }
            KeyCode::Down | KeyCode::Char('j') => {
                let cursor = self.navigator.cursor();
                if cursor + 1 < links.len() {
                    self.navigator.set_cursor(move_cursor(cursor, links.len(), true));
                    self.reveal_detail_cursor();
                } else {
                    self.scroll_detail(|scroll, _| scroll.saturating_add(1));
                }
            }
            KeyCode::PageUp => {
                self.scroll_detail(|scroll, layout| scroll.saturating_sub(layout.page_rows()))
            }
            KeyCode::PageDown | KeyCode::Char(' ') => {
                self.scroll_detail(|scroll, layout| scroll.saturating_add(layout.page_rows()))
            }
            KeyCode::Home | KeyCode::Char('g') => self.scroll_detail(|_, _| 0),
            KeyCode::End | KeyCode::Char('G') => self.scroll_detail(|_, layout| layout.max_scroll()),
            KeyCode::Enter => match links.into_iter().nth(self.navigator.cursor()) {
                Some(DetailLink::Open(route)) => self.navigator.push(route),
                Some(DetailLink::External(url)) => self.launch(&url, None),
                None => {}
            },
            KeyCode::Char('s') => self.share_current(),
            _ => {}
        }
    }

    /// Move the detail scroll offset, clamped to the content.
    fn scroll_detail(&mut self, step: impl FnOnce(u16, &DetailLayout) -> u16) {
        let Some(layout) = ui::detail_layout(self) else {
            return;
        };
        let current = self.navigator.scroll().min(layout.max_scroll());
        self.navigator
            .set_scroll(step(current, &layout).min(layout.max_scroll()));
    }

    fn reveal_detail_cursor(&mut self) {
        if let Some(layout) = ui::detail_layout(self) {
            let scroll = layout.reveal(self.navigator.scroll(), self.navigator.cursor());
            self.navigator.set_scroll(scroll);
        }
    }

    /// Selectable items of the current detail screen, in display order.
    ///
    /// Session detail lists its speakers. Speaker detail lists their
    /// sessions followed by their external links.
    pub fn detail_links(&self) -> Vec<DetailLink> {
        match self.navigator.current() {
            Some(Route::Session(id)) => match self.session_detail(id) {
                DetailState::Found(detail) => detail
                    .speakers
                    .iter()
                    .map(|s| DetailLink::Open(Route::Speaker(s.id.clone())))
                    .collect(),
                _ => Vec::new(),
            },
            Some(Route::Speaker(id)) => match self.speaker_detail(id) {
                DetailState::Found(detail) => detail
                    .sessions
                    .iter()
                    .map(|row| DetailLink::Open(Route::Session(row.session.id.clone())))
                    .chain(
                        detail
                            .speaker
                            .links
                            .iter()
                            .filter(|link| !link.url.is_empty())
                            .map(|link| DetailLink::External(link.url.clone())),
                    )
                    .collect(),
                _ => Vec::new(),
            },
            None => Vec::new(),
        }
    }

    /// Share message of the current detail screen, if it resolved.
    pub fn current_share_message(&self) -> Option<String> {
        match self.navigator.current()? {
            Route::Session(id) => self
                .session_detail(id)
                .found()
                .map(|d| d.share_message.clone()),
            Route::Speaker(id) => self
                .speaker_detail(id)
                .found()
                .map(|d| d.share_message.clone()),
        }
    }

    fn share_current(&mut self) {
        let Some(message) = self.current_share_message() else {
            return;
        };

        self.status = Some(match self.share.share(&message) {
            Ok(ShareOutcome::Copied) => "Copied to clipboard".to_string(),
            Ok(ShareOutcome::Delivered(target)) => format!("Shared via {}", target),
            Err(e) => {
                tracing::warn!("Share failed: {}", e);
                format!("Could not share: {}", e)
            }
        });
    }

    fn play_selected_video(&mut self) {
        let Some(video) = self.videos().get(self.video_cursor).copied() else {
            return;
        };
        self.active_video = Some(video.id);
        self.launch(video.video_url, Some(video.title));
    }

    fn launch(&mut self, url: &str, title: Option<&str>) {
        self.status = Some(match self.launcher.launch(url) {
            Ok(()) => match title {
                Some(title) => format!("Playing {}", title),
                None => format!("Opened {}", url),
            },
            Err(e) => {
                tracing::warn!("{}", e);
                e.to_string()
            }
        });
    }
}
