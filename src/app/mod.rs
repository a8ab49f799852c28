//! Application state for the TUI.
//!
//! - [`App`] - everything a frame is rendered from
//! - [`Tab`], [`Route`], [`Navigator`] - tab and stack navigation
//! - [`AppMessage`] - input arriving from outside the key loop

mod handlers;
mod messages;
mod navigation;

pub use handlers::DetailLink;
pub use messages::AppMessage;
pub use navigation::{Navigator, Route, Tab};

use chrono::Local;

use crate::adapters::{ClipboardShare, SystemLauncher};
use crate::config::AppConfig;
use crate::models::{sorted_videos, Video, VideoSort};
use crate::search::{SearchBar, SearchBinding};
use crate::store::LoadState;
use crate::traits::{ShareSurface, UrlLauncher};
use crate::view_model::{
    build_schedule, filter_speakers, session_detail, speaker_detail, DetailState, ScheduleView,
    SessionDetail, SpeakerDetail, SpeakersView,
};

pub const SESSION_SEARCH_PLACEHOLDER: &str = "Search sessions...";
pub const SPEAKER_SEARCH_PLACEHOLDER: &str = "Search speakers...";

/// Main application state.
pub struct App {
    pub config: AppConfig,
    /// Last state observed from the conference store
    pub load_state: LoadState,
    pub navigator: Navigator,
    /// Host search bar, configured for whichever list tab is active
    pub search_bar: SearchBar,
    pub session_search: SearchBinding,
    pub speaker_search: SearchBinding,
    /// Index into the schedule's day tabs
    pub selected_day: usize,
    pub schedule_cursor: usize,
    pub speakers_cursor: usize,
    pub video_cursor: usize,
    pub video_sort: VideoSort,
    /// Id of the video marked as playing
    pub active_video: Option<&'static str>,
    /// One-line feedback shown in the footer
    pub status: Option<String>,
    pub should_quit: bool,
    /// Dirty flag; the main loop only draws when set
    pub needs_redraw: bool,
    /// Animation tick counter
    pub tick_count: u64,
    pub terminal_width: u16,
    pub terminal_height: u16,
    share: Box<dyn ShareSurface>,
    launcher: Box<dyn UrlLauncher>,
}

impl App {
    /// App wired to the system clipboard and URL handler.
    pub fn new(config: AppConfig) -> Self {
        Self::with_surfaces(
            config,
            Box::new(ClipboardShare::new()),
            Box::new(SystemLauncher::new()),
        )
    }

    pub fn with_surfaces(
        config: AppConfig,
        share: Box<dyn ShareSurface>,
        launcher: Box<dyn UrlLauncher>,
    ) -> Self {
        let session_search = SearchBinding::new(SESSION_SEARCH_PLACEHOLDER);
        let mut search_bar = SearchBar::new();
        search_bar.configure(&session_search);

        Self {
            config,
            load_state: LoadState::Loading,
            navigator: Navigator::new(),
            search_bar,
            session_search,
            speaker_search: SearchBinding::new(SPEAKER_SEARCH_PLACEHOLDER),
            selected_day: 0,
            schedule_cursor: 0,
            speakers_cursor: 0,
            video_cursor: 0,
            video_sort: VideoSort::default(),
            active_video: None,
            status: None,
            should_quit: false,
            needs_redraw: true,
            tick_count: 0,
            terminal_width: 80,
            terminal_height: 24,
            share,
            launcher,
        }
    }

    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Advance animations. Only the loading indicator animates.
    pub fn tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);
        if self.load_state.is_loading() {
            self.mark_dirty();
        }
    }

    pub fn handle_message(&mut self, message: AppMessage) {
        match message {
            AppMessage::LoadStateChanged(state) => {
                self.load_state = state;
                self.schedule_cursor = 0;
                self.speakers_cursor = 0;
            }
            AppMessage::Resized { width, height } => {
                self.terminal_width = width;
                self.terminal_height = height;
            }
        }
        self.mark_dirty();
    }

    pub fn active_tab(&self) -> Tab {
        self.navigator.active_tab()
    }

    /// Search binding of the active tab; the video tab has none.
    pub fn active_binding(&self) -> Option<&SearchBinding> {
        match self.active_tab() {
            Tab::Schedule => Some(&self.session_search),
            Tab::Speakers => Some(&self.speaker_search),
            Tab::Videos => None,
        }
    }

    fn active_binding_mut(&mut self) -> Option<&mut SearchBinding> {
        match self.active_tab() {
            Tab::Schedule => Some(&mut self.session_search),
            Tab::Speakers => Some(&mut self.speaker_search),
            Tab::Videos => None,
        }
    }

    /// Schedule list, once data is ready.
    pub fn schedule_view(&self) -> Option<ScheduleView<'_>> {
        self.load_state
            .data()
            .map(|data| build_schedule(data, self.session_search.query(), self.selected_day, &Local))
    }

    /// Speaker directory, once data is ready.
    pub fn speakers_view(&self) -> Option<SpeakersView<'_>> {
        self.load_state
            .data()
            .map(|data| filter_speakers(&data.speakers, self.speaker_search.query()))
    }

    pub fn session_detail(&self, id: &str) -> DetailState<SessionDetail<'_>> {
        session_detail(&self.load_state, id, &self.config.event_name, &Local)
    }

    pub fn speaker_detail(&self, id: &str) -> DetailState<SpeakerDetail<'_>> {
        speaker_detail(&self.load_state, id, &self.config.event_name, &Local)
    }

    pub fn videos(&self) -> Vec<&'static Video> {
        sorted_videos(self.video_sort)
    }
}
