use std::cell::RefCell;
use std::collections::HashMap;
use std::path::PathBuf;
use std::rc::Rc;
use std::sync::mpsc::{Receiver, TryRecvError};

use pinup_core::runtime::CoreHandle;
use pinup_core::store::views::{self, CardView, CollectionInfo};
use pinup_core::store::AppDataStore;
use pinup_core::wallet::WalletSession;
use pinup_core::worker::{DataChange, GalleryCommand};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Connect,
    Gallery,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Editing,
}

/// All transient view state lives here: reveal flags, lightbox open/index,
/// description expansion, grid selection. None of it is persisted - a
/// restart resets everything to censored defaults.
pub struct App {
    pub running: bool,
    pub view: View,
    pub input_mode: InputMode,
    /// Address entry buffer on the connect screen.
    pub input: String,
    pub wallet: WalletSession,
    pub data_store: Rc<RefCell<AppDataStore>>,
    /// token id -> revealed. Default false (censored); cosmetic only.
    pub revealed: HashMap<String, bool>,
    pub selected: usize,
    pub scroll_row: usize,
    /// Set during render from the actual terminal width; used by the
    /// selection movement logic.
    pub grid_columns: usize,
    pub lightbox_open: bool,
    pub lightbox_index: usize,
    pub description_expanded: bool,
    pub status: Option<String>,
    pub pending_quit: bool,
    uncensored_dir: PathBuf,
    core_handle: Option<CoreHandle>,
    data_rx: Option<Receiver<DataChange>>,
}

impl App {
    pub fn new(data_store: Rc<RefCell<AppDataStore>>, uncensored_dir: PathBuf) -> Self {
        Self {
            running: true,
            view: View::Connect,
            input_mode: InputMode::Editing,
            input: String::new(),
            wallet: WalletSession::default(),
            data_store,
            revealed: HashMap::new(),
            selected: 0,
            scroll_row: 0,
            grid_columns: 1,
            lightbox_open: false,
            lightbox_index: 0,
            description_expanded: false,
            status: None,
            pending_quit: false,
            uncensored_dir,
            core_handle: None,
            data_rx: None,
        }
    }

    pub fn set_core_handle(&mut self, handle: CoreHandle, data_rx: Receiver<DataChange>) {
        self.core_handle = Some(handle);
        self.data_rx = Some(data_rx);
    }

    pub fn quit(&mut self) {
        self.running = false;
    }

    pub fn set_status(&mut self, message: &str) {
        self.status = Some(message.to_string());
    }

    /// Validate the typed address and, on success, switch to the gallery and
    /// kick off the ownership+metadata load.
    pub fn connect(&mut self) {
        match self.wallet.connect(&self.input) {
            Ok(_) => {
                self.input.clear();
                self.input_mode = InputMode::Normal;
                self.status = None;
                self.view = View::Gallery;
                self.request_load();
            }
            Err(e) => self.set_status(&format!("Invalid address: {e}")),
        }
    }

    pub fn disconnect(&mut self) {
        self.wallet.disconnect();
        self.data_store.borrow_mut().clear();
        self.revealed.clear();
        self.selected = 0;
        self.scroll_row = 0;
        self.lightbox_open = false;
        self.description_expanded = false;
        self.status = None;
        self.view = View::Connect;
        self.input_mode = InputMode::Editing;
    }

    fn request_load(&mut self) {
        let Some(address) = self.wallet.address().map(str::to_string) else {
            return;
        };
        let generation = self.data_store.borrow_mut().begin_load();
        if let Some(handle) = &self.core_handle {
            if let Err(e) = handle.send(GalleryCommand::LoadTokens {
                address,
                generation,
            }) {
                tracing::warn!("failed to send load command: {}", e);
                self.data_store.borrow_mut().apply(DataChange::TokensLoadFailed { generation });
                self.set_status("Failed to reach the fetch worker");
            }
        }
    }

    /// Drain pending data changes from the worker. Stale batches are
    /// discarded inside the store via the generation check.
    pub fn check_for_data_updates(&mut self) {
        let Some(data_rx) = self.data_rx.take() else {
            return;
        };
        let mut disconnected = false;
        loop {
            match data_rx.try_recv() {
                Ok(change) => self.data_store.borrow_mut().apply(change),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    disconnected = true;
                    break;
                }
            }
        }
        if !disconnected {
            self.data_rx = Some(data_rx);
        }

        let count = self.data_store.borrow().tokens.len();
        if self.selected >= count {
            self.selected = count.saturating_sub(1);
        }
    }

    pub fn card_views(&self) -> Vec<CardView> {
        views::build_card_views(&self.data_store.borrow(), &self.revealed, &self.uncensored_dir)
    }

    pub fn collection_info(&self) -> Option<CollectionInfo> {
        views::collection_info(&self.data_store.borrow())
    }

    pub fn total_score(&self) -> f64 {
        self.data_store.borrow().total_score()
    }

    pub fn is_loading(&self) -> bool {
        self.data_store.borrow().loading
    }

    /// Flip the reveal state of the selected card. Only meaningful for
    /// flagged tokens - there is nothing to reveal on the rest.
    pub fn toggle_reveal(&mut self) {
        let token_id = {
            let store = self.data_store.borrow();
            let Some(token) = store.tokens.get(self.selected) else {
                return;
            };
            let token_id = token.record.token_id.clone();
            if !store.visibility.is_flagged(&token_id) {
                return;
            }
            token_id
        };
        let entry = self.revealed.entry(token_id).or_insert(false);
        *entry = !*entry;
    }

    pub fn move_selection(&mut self, delta_col: isize, delta_row: isize) {
        let count = self.data_store.borrow().tokens.len();
        if count == 0 {
            return;
        }
        let columns = self.grid_columns.max(1) as isize;
        let index = self.selected as isize + delta_col + delta_row * columns;
        self.selected = index.clamp(0, count as isize - 1) as usize;
    }

    pub fn open_lightbox(&mut self) {
        if self.data_store.borrow().tokens.is_empty() {
            return;
        }
        self.lightbox_index = self.selected;
        self.lightbox_open = true;
    }

    pub fn close_lightbox(&mut self) {
        self.lightbox_open = false;
    }

    pub fn lightbox_prev(&mut self) {
        self.lightbox_index = self.lightbox_index.saturating_sub(1);
    }

    pub fn lightbox_next(&mut self) {
        let count = self.data_store.borrow().tokens.len();
        if self.lightbox_index + 1 < count {
            self.lightbox_index += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pinup_core::models::token::{ContractInfo, MintInfo, TokenImage};
    use pinup_core::models::{EnrichedToken, TokenRecord, VisibilityList};

    fn token(token_id: &str) -> EnrichedToken {
        EnrichedToken {
            record: TokenRecord {
                token_id: token_id.to_string(),
                name: None,
                description: None,
                token_uri: None,
                image: TokenImage { cached_url: None },
                contract: ContractInfo {
                    address: "0xabc".to_string(),
                    name: None,
                    symbol: None,
                    token_type: None,
                },
                mint: MintInfo { timestamp: None },
            },
            live: None,
        }
    }

    fn app_with_tokens(ids: &[&str], flagged: &str) -> App {
        let mut store = AppDataStore::new();
        let generation = store.begin_load();
        let visibility: VisibilityList =
            serde_json::from_str(&format!(r#"{{"{flagged}": true}}"#)).unwrap();
        store.apply(DataChange::VisibilityLoaded(visibility));
        store.apply(DataChange::TokensLoaded {
            generation,
            tokens: ids.iter().map(|id| token(id)).collect(),
        });
        App::new(Rc::new(RefCell::new(store)), PathBuf::from("uncensored"))
    }

    #[test]
    fn test_toggle_reveal_only_for_flagged_tokens() {
        let mut app = app_with_tokens(&["1", "2"], "2");

        // Selected token "1" is not flagged - nothing to reveal.
        app.toggle_reveal();
        assert!(app.revealed.is_empty());

        app.selected = 1;
        app.toggle_reveal();
        assert_eq!(app.revealed.get("2"), Some(&true));
        app.toggle_reveal();
        assert_eq!(app.revealed.get("2"), Some(&false));
    }

    #[test]
    fn test_selection_clamps_to_grid() {
        let mut app = app_with_tokens(&["1", "2", "3", "4", "5"], "1");
        app.grid_columns = 2;

        app.move_selection(-1, 0);
        assert_eq!(app.selected, 0);

        app.move_selection(0, 1);
        assert_eq!(app.selected, 2);

        app.move_selection(0, 5);
        assert_eq!(app.selected, 4);
    }

    #[test]
    fn test_disconnect_resets_view_state() {
        let mut app = app_with_tokens(&["2"], "2");
        app.view = View::Gallery;
        app.toggle_reveal();
        app.open_lightbox();

        app.disconnect();

        assert_eq!(app.view, View::Connect);
        assert!(app.revealed.is_empty());
        assert!(!app.lightbox_open);
        assert!(app.data_store.borrow().tokens.is_empty());
        // The session-wide visibility list survives a disconnect.
        assert!(app.data_store.borrow().visibility.is_flagged("2"));
    }

    #[test]
    fn test_lightbox_navigation_stays_in_bounds() {
        let mut app = app_with_tokens(&["1", "2"], "1");
        app.selected = 1;
        app.open_lightbox();
        assert_eq!(app.lightbox_index, 1);

        app.lightbox_next();
        assert_eq!(app.lightbox_index, 1);

        app.lightbox_prev();
        app.lightbox_prev();
        assert_eq!(app.lightbox_index, 0);
    }

    #[test]
    fn test_connect_rejects_bad_address() {
        let mut app = app_with_tokens(&["1"], "1");
        app.input = "not-an-address".to_string();
        app.connect();
        assert_eq!(app.view, View::Connect);
        assert!(app.status.is_some());
    }
}
