use std::time::Instant;

use tracing::{info, warn};

use crate::dictionary::{LookupError, WordEntry, validate_query};
use crate::dock::{self, DockEntry, SEARCH_TITLE};
use crate::shell::favorites::Favorites;
use crate::shell::lock::LockScreen;
use crate::state::{Command, DesktopStore, Event, Payload, Store};
use crate::themes::Theme;
use crate::windows::{WindowId, WindowKind, WindowRecord};

/// State of the dictionary search panel outside the window record itself.
#[derive(Debug, Clone, Default)]
struct SearchState {
    loading: bool,
    last_error: Option<String>,
}

/// The host shell: decides what each window shows and issues open requests.
///
/// Owns the window store along with the state that surrounds it (lock
/// screen, theme, favorites, search progress).
#[derive(Debug)]
pub struct Desktop {
    store: DesktopStore,
    lock: LockScreen,
    theme: Theme,
    favorites: Favorites,
    search: SearchState,
}

impl Desktop {
    pub fn new(store: DesktopStore, theme: Theme, now: Instant) -> Self {
        Self {
            store,
            lock: LockScreen::new(now),
            theme,
            favorites: Favorites::new(),
            search: SearchState::default(),
        }
    }

    pub fn store(&self) -> &DesktopStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut DesktopStore {
        &mut self.store
    }

    /// Route a window command, typically reported by the window view.
    pub fn dispatch(&mut self, cmd: Command) -> Vec<Event> {
        match self.store.dispatch(cmd) {
            Ok(events) => events,
            Err(never) => match never {},
        }
    }

    // --- Lock screen ---

    pub fn lock_screen(&self) -> &LockScreen {
        &self.lock
    }

    pub fn lock(&mut self, now: Instant) {
        self.lock.lock(now);
        info!(event = "core.shell.locked");
    }

    pub fn release_swipe(&mut self, offset_y: f64) -> bool {
        let unlocked = self.lock.release_swipe(offset_y);
        if unlocked {
            info!(event = "core.shell.unlocked");
        }
        unlocked
    }

    pub fn record_activity(&mut self, now: Instant) {
        self.lock.record_activity(now);
    }

    // --- Dock ---

    /// The dock is hidden while the screen is locked.
    pub fn dock_visible(&self) -> bool {
        !self.lock.is_locked()
    }

    pub fn dock_entries(&self) -> Vec<DockEntry> {
        dock::minimized_entries(self.store.windows())
    }

    /// A launcher button was clicked.
    pub fn click_launcher(&mut self, kind: WindowKind) -> Vec<Event> {
        match dock::launch_command(kind) {
            Some(cmd) => self.dispatch(cmd),
            None => Vec::new(),
        }
    }

    // --- Dictionary search ---

    pub fn is_loading(&self) -> bool {
        self.search.loading
    }

    /// Message from the last failed search, if the last search failed.
    pub fn last_error(&self) -> Option<&str> {
        self.search.last_error.as_deref()
    }

    pub fn search_window(&self) -> Option<&WindowRecord<Payload>> {
        self.store.windows().find_by_kind(WindowKind::Search)
    }

    /// Start a search. Blank queries are ignored and return `None`.
    ///
    /// Makes sure the search panel is open and in front, then returns the
    /// trimmed query for the caller to look up.
    pub fn begin_search(&mut self, query: &str) -> Option<String> {
        let query = validate_query(query).ok()?.to_string();

        self.search.loading = true;
        self.search.last_error = None;

        match self.search_window().map(|w| w.id.clone()) {
            Some(id) => {
                self.dispatch(Command::Focus { id });
            }
            None => {
                self.store.open(SEARCH_TITLE, WindowKind::Search, None);
            }
        }

        info!(event = "core.shell.search_started", query = %query);
        Some(query)
    }

    /// Finish a search with the lookup result.
    ///
    /// The first entry is attached to the search panel. If the panel was
    /// closed while the lookup was in flight, a new one is opened with the
    /// entry. Returns the id of the panel showing the result.
    pub fn finish_search(
        &mut self,
        result: Result<Vec<WordEntry>, LookupError>,
    ) -> Option<WindowId> {
        self.search.loading = false;

        let entry = match result.map(|entries| entries.into_iter().next()) {
            Ok(Some(entry)) => entry,
            Ok(None) => return self.fail_search(LookupError::NotFound),
            Err(e) => return self.fail_search(e),
        };

        info!(
            event = "core.shell.search_completed",
            headword = %entry.headword
        );

        let payload = Payload::Entry(entry);
        match self.search_window().map(|w| w.id.clone()) {
            Some(id) => {
                self.dispatch(Command::UpdatePayload {
                    id: id.clone(),
                    payload,
                });
                Some(id)
            }
            None => {
                let (id, _) = self
                    .store
                    .open(SEARCH_TITLE, WindowKind::Search, Some(payload));
                Some(id)
            }
        }
    }

    fn fail_search(&mut self, error: LookupError) -> Option<WindowId> {
        warn!(
            event = "core.shell.search_failed",
            error = %error
        );
        self.search.last_error = Some(error.user_message());
        None
    }

    /// Open a standalone window for one entry.
    pub fn open_word(&mut self, entry: WordEntry) -> WindowId {
        let title = entry.headword.clone();
        let (id, _) = self
            .store
            .open(title, WindowKind::Word, Some(Payload::Entry(entry)));
        id
    }

    // --- Favorites ---

    pub fn toggle_favorite(&mut self, word: &str) -> bool {
        self.favorites.toggle(word)
    }

    pub fn is_favorite(&self, word: &str) -> bool {
        self.favorites.contains(word)
    }

    pub fn favorites(&self) -> &Favorites {
        &self.favorites
    }

    // --- Themes ---

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn set_theme(&mut self, theme: Theme) {
        info!(event = "core.shell.theme_changed", theme = %theme);
        self.theme = theme;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::windows::{WindowDefaults, WindowStatus};

    fn desktop() -> Desktop {
        Desktop::new(
            DesktopStore::with_sequential_ids(WindowDefaults::default()),
            Theme::default(),
            Instant::now(),
        )
    }

    fn entry(word: &str) -> WordEntry {
        WordEntry {
            id: "1".to_string(),
            headword: word.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_dock_hidden_until_unlocked() {
        let mut desktop = desktop();
        assert!(!desktop.dock_visible());
        assert!(desktop.release_swipe(-300.0));
        assert!(desktop.dock_visible());
        desktop.lock(Instant::now());
        assert!(!desktop.dock_visible());
    }

    #[test]
    fn test_launcher_opens_singletons() {
        let mut desktop = desktop();
        desktop.click_launcher(WindowKind::Search);
        desktop.click_launcher(WindowKind::Search);
        desktop.click_launcher(WindowKind::Themes);
        assert!(desktop.click_launcher(WindowKind::Word).is_empty());

        let windows = desktop.store().windows();
        assert_eq!(windows.len(), 2);
        assert_eq!(desktop.search_window().unwrap().title, "Sözlük");
        assert_eq!(
            windows.find_by_kind(WindowKind::Themes).unwrap().title,
            "Temalar"
        );
    }

    #[test]
    fn test_blank_search_is_ignored() {
        let mut desktop = desktop();
        assert!(desktop.begin_search("   ").is_none());
        assert!(!desktop.is_loading());
        assert!(desktop.store().windows().is_empty());
    }

    #[test]
    fn test_search_opens_panel_and_attaches_first_entry() {
        let mut desktop = desktop();
        assert_eq!(desktop.begin_search("  kalem ").as_deref(), Some("kalem"));
        assert!(desktop.is_loading());
        let panel = desktop.search_window().unwrap().id.clone();

        let shown = desktop.finish_search(Ok(vec![entry("kalem"), entry("kalem2")]));
        assert_eq!(shown, Some(panel.clone()));
        assert!(!desktop.is_loading());

        let record = desktop.store().window(&panel).unwrap();
        assert_eq!(
            record.payload.as_ref().and_then(Payload::entry).map(|e| e.headword.as_str()),
            Some("kalem")
        );
    }

    #[test]
    fn test_search_focuses_existing_panel() {
        let mut desktop = desktop();
        desktop.click_launcher(WindowKind::Search);
        desktop.click_launcher(WindowKind::Themes);
        let panel = desktop.search_window().unwrap().id.clone();

        desktop.begin_search("su");
        assert_eq!(desktop.store().windows().frontmost().unwrap().id, panel);
        assert_eq!(desktop.store().windows().len(), 2);
    }

    #[test]
    fn test_search_restores_minimized_panel_via_focus_only() {
        let mut desktop = desktop();
        desktop.click_launcher(WindowKind::Search);
        let panel = desktop.search_window().unwrap().id.clone();
        desktop.dispatch(Command::Minimize { id: panel.clone() });

        desktop.begin_search("su");
        // Focus raises but does not change status; the dock still offers it.
        assert_eq!(
            desktop.store().window(&panel).unwrap().status,
            WindowStatus::Minimized
        );
        assert_eq!(desktop.dock_entries().len(), 1);
    }

    #[test]
    fn test_search_reopens_panel_closed_midflight() {
        let mut desktop = desktop();
        desktop.begin_search("kalem");
        let first = desktop.search_window().unwrap().id.clone();
        desktop.dispatch(Command::Close { id: first.clone() });

        let shown = desktop.finish_search(Ok(vec![entry("kalem")])).unwrap();
        assert_ne!(shown, first);
        assert!(desktop.store().window(&shown).unwrap().payload.is_some());
    }

    #[test]
    fn test_failed_search_records_user_message() {
        let mut desktop = desktop();
        desktop.begin_search("zzzz");
        assert!(desktop.finish_search(Err(LookupError::NotFound)).is_none());
        assert_eq!(desktop.last_error(), Some("Kelime bulunamadı."));

        assert!(desktop.finish_search(Ok(Vec::new())).is_none());
        assert_eq!(desktop.last_error(), Some("Kelime bulunamadı."));

        desktop.begin_search("kalem");
        assert!(desktop.last_error().is_none());
    }

    #[test]
    fn test_word_windows_and_favorites() {
        let mut desktop = desktop();
        let a = desktop.open_word(entry("kalem"));
        let b = desktop.open_word(entry("defter"));
        assert_ne!(a, b);
        assert_eq!(desktop.store().window(&b).unwrap().title, "defter");

        assert!(desktop.toggle_favorite("kalem"));
        assert!(desktop.is_favorite("kalem"));
        assert!(!desktop.toggle_favorite("kalem"));
        assert!(desktop.favorites().words().is_empty());
    }

    #[test]
    fn test_set_theme() {
        let mut desktop = desktop();
        assert_eq!(desktop.theme(), Theme::Aurora);
        desktop.set_theme(Theme::Ocean);
        assert_eq!(desktop.theme(), Theme::Ocean);
    }
}
