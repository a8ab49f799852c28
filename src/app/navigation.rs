//! Tabs and per-tab navigation stacks.

/// Top-level tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Schedule,
    Speakers,
    Videos,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Schedule, Tab::Speakers, Tab::Videos];

    pub fn index(self) -> usize {
        match self {
            Tab::Schedule => 0,
            Tab::Speakers => 1,
            Tab::Videos => 2,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Tab::Schedule => "Schedule",
            Tab::Speakers => "Speakers",
            Tab::Videos => "Videos",
        }
    }

    /// Cycle Schedule → Speakers → Videos → Schedule
    pub fn next(self) -> Self {
        match self {
            Tab::Schedule => Tab::Speakers,
            Tab::Speakers => Tab::Videos,
            Tab::Videos => Tab::Schedule,
        }
    }
}

/// A detail screen pushed on top of a tab's list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Session(String),
    Speaker(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Entry {
    route: Route,
    cursor: usize,
    /// First visible row of the wrapped content
    scroll: u16,
}

/// One navigation stack per tab. An empty stack shows the tab's list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Navigator {
    active: Tab,
    stacks: [Vec<Entry>; 3],
}

impl Navigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_tab(&self) -> Tab {
        self.active
    }

    /// Switch tabs. Each tab keeps its own stack.
    pub fn select_tab(&mut self, tab: Tab) {
        self.active = tab;
    }

    pub fn push(&mut self, route: Route) {
        self.stacks[self.active.index()].push(Entry {
            route,
            cursor: 0,
            scroll: 0,
        });
    }

    /// Pop the top route; returns `false` when already at the list.
    pub fn pop(&mut self) -> bool {
        self.stacks[self.active.index()].pop().is_some()
    }

    /// Top route of the active tab.
    pub fn current(&self) -> Option<&Route> {
        self.stacks[self.active.index()].last().map(|e| &e.route)
    }

    pub fn depth(&self) -> usize {
        self.stacks[self.active.index()].len()
    }

    /// Cursor of the top detail screen.
    pub fn cursor(&self) -> usize {
        self.stacks[self.active.index()]
            .last()
            .map_or(0, |e| e.cursor)
    }

    pub fn set_cursor(&mut self, cursor: usize) {
        if let Some(entry) = self.stacks[self.active.index()].last_mut() {
            entry.cursor = cursor;
        }
    }

    /// Scroll offset of the top detail screen.
    pub fn scroll(&self) -> u16 {
        self.stacks[self.active.index()]
            .last()
            .map_or(0, |e| e.scroll)
    }

    pub fn set_scroll(&mut self, scroll: u16) {
        if let Some(entry) = self.stacks[self.active.index()].last_mut() {
            entry.scroll = scroll;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_cycle() {
        assert_eq!(Tab::Schedule.next(), Tab::Speakers);
        assert_eq!(Tab::Videos.next(), Tab::Schedule);
        assert_eq!(Tab::ALL.map(Tab::index), [0, 1, 2]);
    }

    #[test]
    fn test_stacks_are_per_tab() {
        let mut nav = Navigator::new();
        nav.push(Route::Session("s1".into()));
        nav.push(Route::Speaker("p1".into()));
        assert_eq!(nav.depth(), 2);

        nav.select_tab(Tab::Speakers);
        assert_eq!(nav.current(), None);
        nav.push(Route::Speaker("p2".into()));

        nav.select_tab(Tab::Schedule);
        assert_eq!(nav.current(), Some(&Route::Speaker("p1".into())));
        assert!(nav.pop());
        assert_eq!(nav.current(), Some(&Route::Session("s1".into())));
        assert!(nav.pop());
        assert!(!nav.pop());

        nav.select_tab(Tab::Speakers);
        assert_eq!(nav.current(), Some(&Route::Speaker("p2".into())));
    }

    #[test]
    fn test_cursor_belongs_to_entry() {
        let mut nav = Navigator::new();
        nav.set_cursor(3);
        assert_eq!(nav.cursor(), 0);

        nav.push(Route::Session("s1".into()));
        nav.set_cursor(2);
        nav.push(Route::Speaker("p1".into()));
        assert_eq!(nav.cursor(), 0);
        nav.pop();
        assert_eq!(nav.cursor(), 2);
    }

    #[test]
    fn test_scroll_belongs_to_entry() {
        let mut nav = Navigator::new();
        nav.set_scroll(4);
        assert_eq!(nav.scroll(), 0);

        nav.push(Route::Session("s1".into()));
        nav.set_scroll(12);
        nav.push(Route::Speaker("p1".into()));
        assert_eq!(nav.scroll(), 0);
        nav.pop();
        assert_eq!(nav.scroll(), 12);
    }
}
