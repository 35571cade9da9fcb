//! Selector widget state.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::error::SettingsResult;
use crate::i18n::Translator;
use crate::log;
use crate::model::{Model, Provider};
use crate::picker::Picker;
use crate::settings::{self, PINNED_MODELS_KEY, SettingsStore};

use super::{Menu, MenuItem, OpenSignal, PinnedModels};

/// What the host should do after the selector handled an input.
#[derive(Debug, Clone, PartialEq)]
pub enum SelectorOutcome {
    /// The selector is closed or did not use the input
    Ignored,
    /// Input was consumed, nothing for the host to do
    Handled,
    /// Mention this model in the message
    Mention(Model),
    /// Persist a pin toggle for this model uniq id via [`MentionSelector::toggle_pin`]
    TogglePin(String),
}

/// The model mention dropdown.
#[derive(Debug)]
pub struct MentionSelector {
    providers: Vec<Provider>,
    mentioned: Vec<Model>,
    pinned: PinnedModels,
    translator: Translator,
    menu: Menu,

    open: bool,
    selected: usize,
    /// First visible row of the dropdown
    scroll_offset: usize,
    /// Number of rows the dropdown shows at most
    max_rows: usize,
    /// Rows actually drawn last frame, once the terminal clipped the dropdown
    viewport_height: Option<usize>,

    signal: Option<OpenSignal>,
}

impl MentionSelector {
    pub fn new(providers: Vec<Provider>, translator: Translator, max_rows: usize) -> Self {
        let mut selector = Self {
            providers,
            mentioned: vec![],
            pinned: PinnedModels::default(),
            translator,
            menu: Menu::default(),
            open: false,
            selected: 0,
            scroll_offset: 0,
            max_rows: max_rows.max(1),
            viewport_height: None,
            signal: None,
        };
        selector.rebuild();
        selector
    }

    // === Mounting ===

    /// Subscribe to open requests and load pinned models from the store.
    pub async fn mount<S: SettingsStore>(&mut self, signal: OpenSignal, store: &S) {
        self.signal = Some(signal);
        let ids = settings::load_pinned(store).await;
        log::log(&format!("Loaded {} pinned models", ids.len()));
        self.set_pinned(PinnedModels::from_ids(ids));
    }

    /// Drop the open-request subscription.
    pub fn unmount(&mut self) {
        self.signal = None;
        self.open = false;
    }

    /// Open the menu if the host requested it since the last poll.
    pub fn poll_open_requests(&mut self) -> bool {
        let requested = self
            .signal
            .as_mut()
            .map(|signal| signal.take_pending())
            .unwrap_or(false);
        if requested {
            self.open();
        }
        requested && self.open
    }

    // === Inputs from the host ===

    pub fn set_mentioned(&mut self, mentioned: &[Model]) {
        self.mentioned = mentioned.to_vec();
        self.rebuild();
    }

    pub fn set_pinned(&mut self, pinned: PinnedModels) {
        self.pinned = pinned;
        self.rebuild();
    }

    fn rebuild(&mut self) {
        self.menu = Menu::build(&self.providers, &self.pinned, &self.mentioned, &self.translator);
        if self.menu.is_empty() {
            self.open = false;
        }
        self.select_index(self.selected);
        self.clamp_scroll();
    }

    // === Accessors ===

    pub fn menu(&self) -> &Menu {
        &self.menu
    }

    #[cfg(test)]
    pub fn pinned(&self) -> &PinnedModels {
        &self.pinned
    }

    pub fn translator(&self) -> &Translator {
        &self.translator
    }

    /// Nothing to mention means nothing to render, trigger included.
    pub fn is_visible(&self) -> bool {
        !self.menu.is_empty()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    /// Rows the dropdown asks for when the terminal has room
    pub fn preferred_rows(&self) -> usize {
        self.menu.row_count().min(self.max_rows)
    }

    /// Rows the dropdown actually shows
    pub fn visible_rows(&self) -> usize {
        match self.viewport_height {
            Some(height) => self.preferred_rows().min(height),
            None => self.preferred_rows(),
        }
    }

    /// Record how many rows the renderer could fit.
    ///
    /// A changed height re-scrolls so the highlighted row stays on screen.
    pub fn set_viewport_height(&mut self, height: usize) {
        let height = height.max(1);
        if self.viewport_height != Some(height) {
            self.viewport_height = Some(height);
            self.scroll_to_selected();
        }
        self.clamp_scroll();
    }

    // === Open / close ===

    pub fn open(&mut self) {
        if !self.is_visible() {
            return;
        }
        self.open = true;
        self.reset_selection();
        self.scroll_offset = 0;
        log::log_event("mention selector opened");
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Toolbar button click: toggles like a dropdown.
    pub fn toggle_open(&mut self) {
        if self.open {
            self.close();
        } else {
            self.open();
        }
    }

    // === Selection ===

    /// Mention `model` unless it is already part of the message.
    pub fn select_model(&mut self, model: &Model) -> SelectorOutcome {
        if self.mentioned.iter().any(|m| m.id == model.id) {
            return SelectorOutcome::Handled;
        }
        self.open = false;
        log::log_event(&format!("mention {}", model.uniq_id()));
        SelectorOutcome::Mention(model.clone())
    }

    /// Click on the item at flattened `index`.
    pub fn click_item(&mut self, index: usize) -> SelectorOutcome {
        match self.menu.items().get(index) {
            Some(item) => {
                let model = item.model.clone();
                self.set_selected_index(index);
                self.select_model(&model)
            }
            None => SelectorOutcome::Ignored,
        }
    }

    fn commit_highlighted(&mut self) -> SelectorOutcome {
        let outcome = match self.selected_item() {
            Some(item) => {
                let model = item.model.clone();
                self.select_model(&model)
            }
            None => SelectorOutcome::Handled,
        };
        self.open = false;
        match outcome {
            SelectorOutcome::Mention(model) => SelectorOutcome::Mention(model),
            _ => SelectorOutcome::Handled,
        }
    }

    // === Pins ===

    /// Flip the pin of `uniq_id`, persist the full list, then update the menu.
    ///
    /// On a failed write the in-memory pins are left as they were.
    pub async fn toggle_pin<S: SettingsStore>(&mut self, store: &S, uniq_id: &str) -> SettingsResult<()> {
        let next = self.pinned.toggled(uniq_id);
        store
            .put(PINNED_MODELS_KEY, serde_json::to_value(next.ids())?)
            .await?;
        self.set_pinned(next);
        Ok(())
    }

    // === Keyboard ===

    /// Keys the open dropdown consumes. Everything else belongs to the composer.
    pub fn captures_key(key: &KeyEvent) -> bool {
        match key.code {
            KeyCode::Down
            | KeyCode::Up
            | KeyCode::Home
            | KeyCode::End
            | KeyCode::Enter
            | KeyCode::Esc
            | KeyCode::Tab => true,
            KeyCode::Char('p') => key.modifiers.contains(KeyModifiers::CONTROL),
            _ => false,
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> SelectorOutcome {
        if !self.open {
            return SelectorOutcome::Ignored;
        }

        let outcome = match key.code {
            KeyCode::Down => {
                self.select_next();
                SelectorOutcome::Handled
            }
            KeyCode::Up => {
                self.select_prev();
                SelectorOutcome::Handled
            }
            KeyCode::Home => {
                self.reset_selection();
                SelectorOutcome::Handled
            }
            KeyCode::End => {
                self.select_last();
                SelectorOutcome::Handled
            }
            KeyCode::Enter => self.commit_highlighted(),
            KeyCode::Esc => {
                self.close();
                SelectorOutcome::Handled
            }
            KeyCode::Tab => self.pin_highlighted(),
            KeyCode::Char('p') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.pin_highlighted()
            }
            _ => SelectorOutcome::Ignored,
        };

        if self.open {
            self.scroll_to_selected();
        }
        outcome
    }

    fn pin_highlighted(&self) -> SelectorOutcome {
        self.selected_item()
            .map(|item| SelectorOutcome::TogglePin(item.uniq_id()))
            .unwrap_or(SelectorOutcome::Handled)
    }

    // === Viewport ===

    /// Scroll the least amount needed to show the highlighted row.
    pub fn scroll_to_selected(&mut self) {
        let Some(row) = self.menu.row_of_item(self.selected) else {
            return;
        };
        let height = self.visible_rows();
        if row < self.scroll_offset {
            self.scroll_offset = row;
        } else if row >= self.scroll_offset + height {
            self.scroll_offset = row + 1 - height;
        }
    }

    /// Move the viewport without changing the highlight (mouse wheel).
    pub fn scroll_by(&mut self, delta: isize) {
        self.scroll_offset = self.scroll_offset.saturating_add_signed(delta);
        self.clamp_scroll();
    }

    fn clamp_scroll(&mut self) {
        let max_offset = self.menu.row_count().saturating_sub(self.visible_rows());
        self.scroll_offset = self.scroll_offset.min(max_offset);
    }
}

impl Picker for MentionSelector {
    type Item = MenuItem;

    fn items(&self) -> &[MenuItem] {
        self.menu.items()
    }

    fn selected_index(&self) -> usize {
        self.selected
    }

    fn set_selected_index(&mut self, index: usize) {
        self.selected = index;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selector::open_channel;
    use crate::settings::{FailingStore, MemoryStore};
    use crossterm::event::KeyEvent;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn alpha() -> Model {
        Model::new("m1", "Alpha", "p1")
    }

    fn providers() -> Vec<Provider> {
        vec![
            Provider::new("p1", "p1", false)
                .with_model(alpha())
                .with_model(Model::new("m2", "Beta", "").with_embedding(true))
                .with_model(Model::new("m3", "Gamma", "")),
        ]
    }

    fn opened() -> MentionSelector {
        let mut selector = MentionSelector::new(providers(), Translator::default(), 16);
        selector.open();
        selector
    }

    #[test]
    fn test_open_resets_highlight() {
        let mut selector = opened();
        selector.handle_key(key(KeyCode::Down));
        assert_eq!(selector.selected_index(), 1);

        selector.close();
        selector.open();
        assert!(selector.is_open());
        assert_eq!(selector.selected_index(), 0);
    }

    #[test]
    fn test_navigation_clamps_at_both_ends() {
        let mut selector = opened();

        selector.handle_key(key(KeyCode::Up));
        assert_eq!(selector.selected_index(), 0);

        selector.handle_key(key(KeyCode::Down));
        selector.handle_key(key(KeyCode::Down));
        assert_eq!(selector.selected_index(), 1);
        assert_eq!(selector.selected_item().unwrap().model.name, "Gamma");
    }

    #[test]
    fn test_enter_mentions_once_and_closes() {
        let mut selector = opened();
        let outcome = selector.handle_key(key(KeyCode::Enter));
        assert_eq!(outcome, SelectorOutcome::Mention(alpha()));
        assert!(!selector.is_open());

        assert_eq!(selector.handle_key(key(KeyCode::Enter)), SelectorOutcome::Ignored);
    }

    #[test]
    fn test_enter_on_mentioned_model_only_closes() {
        let mut selector = opened();
        selector.set_mentioned(&[alpha()]);

        let outcome = selector.handle_key(key(KeyCode::Enter));
        assert_eq!(outcome, SelectorOutcome::Handled);
        assert!(!selector.is_open());
    }

    #[test]
    fn test_click_on_mentioned_model_keeps_menu_open() {
        let mut selector = opened();
        selector.set_mentioned(&[alpha()]);

        assert_eq!(selector.click_item(0), SelectorOutcome::Handled);
        assert!(selector.is_open());

        assert!(matches!(selector.click_item(1), SelectorOutcome::Mention(m) if m.name == "Gamma"));
        assert!(!selector.is_open());
    }

    #[test]
    fn test_escape_closes_without_mention() {
        let mut selector = opened();
        assert_eq!(selector.handle_key(key(KeyCode::Esc)), SelectorOutcome::Handled);
        assert!(!selector.is_open());
    }

    #[test]
    fn test_uncaptured_keys_are_ignored() {
        let mut selector = opened();
        let typed = key(KeyCode::Char('x'));
        assert!(!MentionSelector::captures_key(&typed));
        assert_eq!(selector.handle_key(typed), SelectorOutcome::Ignored);
        assert!(selector.is_open());

        let ctrl_p = KeyEvent::new(KeyCode::Char('p'), KeyModifiers::CONTROL);
        assert!(MentionSelector::captures_key(&ctrl_p));
        assert!(matches!(selector.handle_key(ctrl_p), SelectorOutcome::TogglePin(_)));
    }

    #[test]
    fn test_keys_ignored_while_closed() {
        let mut selector = MentionSelector::new(providers(), Translator::default(), 16);
        assert_eq!(selector.handle_key(key(KeyCode::Down)), SelectorOutcome::Ignored);
        assert_eq!(selector.selected_index(), 0);
    }

    #[test]
    fn test_selecting_fresh_model_from_scenario() {
        let providers = vec![
            Provider::new("p1", "p1", false)
                .with_model(alpha())
                .with_model(Model::new("m2", "Beta", "").with_embedding(true)),
        ];
        let mut selector = MentionSelector::new(providers, Translator::default(), 16);
        assert_eq!(selector.len(), 1);

        selector.open();
        assert_eq!(selector.select_model(&alpha()), SelectorOutcome::Mention(alpha()));
        assert!(!selector.is_open());
    }

    #[test]
    fn test_invisible_without_selectable_models() {
        let providers = vec![
            Provider::new("p1", "p1", false)
                .with_model(Model::new("m2", "Beta", "").with_embedding(true)),
        ];
        let mut selector = MentionSelector::new(providers, Translator::default(), 16);
        assert!(!selector.is_visible());

        selector.open();
        assert!(!selector.is_open());
    }

    #[tokio::test]
    async fn test_toggle_pin_persists_and_rebuilds() {
        let store = MemoryStore::new();
        let mut selector = opened();
        let id = alpha().uniq_id();

        selector.toggle_pin(&store, &id).await.unwrap();
        assert_eq!(selector.len(), 3);
        assert_eq!(selector.menu().groups()[0].label, "Pinned");
        assert_eq!(settings::load_pinned(&store).await, vec![id.clone()]);

        selector.toggle_pin(&store, &id).await.unwrap();
        assert_eq!(selector.len(), 2);
        assert!(settings::load_pinned(&store).await.is_empty());
    }

    #[tokio::test]
    async fn test_tab_requests_pin_of_highlighted() {
        let mut selector = opened();
        selector.handle_key(key(KeyCode::Down));
        let outcome = selector.handle_key(key(KeyCode::Tab));
        assert_eq!(
            outcome,
            SelectorOutcome::TogglePin(Model::new("m3", "Gamma", "p1").uniq_id())
        );
        assert!(selector.is_open());
    }

    #[tokio::test]
    async fn test_mount_loads_pins_and_listens_for_open() {
        let store = MemoryStore::new();
        store
            .put(PINNED_MODELS_KEY, serde_json::json!([alpha().uniq_id(), alpha().uniq_id()]))
            .await
            .unwrap();

        let (trigger, signal) = open_channel();
        let mut selector = MentionSelector::new(providers(), Translator::default(), 16);
        selector.mount(signal, &store).await;
        assert_eq!(selector.pinned().ids().len(), 1);

        assert!(!selector.poll_open_requests());
        trigger.fire();
        assert!(selector.poll_open_requests());
        assert!(selector.is_open());

        selector.unmount();
        assert!(!trigger.fire());
        assert!(!selector.poll_open_requests());
    }

    #[tokio::test]
    async fn test_highlight_clamped_when_menu_shrinks() {
        let store = MemoryStore::new();
        let mut selector = opened();
        let id = alpha().uniq_id();
        selector.toggle_pin(&store, &id).await.unwrap();

        selector.handle_key(key(KeyCode::End));
        assert_eq!(selector.selected_index(), 2);

        selector.toggle_pin(&store, &id).await.unwrap();
        assert_eq!(selector.selected_index(), 1);
    }

    #[test]
    fn test_scroll_nearest() {
        let providers = vec![(0..10).fold(Provider::new("p1", "p1", false), |p, i| {
            p.with_model(Model::new(format!("m{}", i), format!("Model {}", i), ""))
        })];
        let mut selector = MentionSelector::new(providers, Translator::default(), 4);
        selector.open();
        assert_eq!(selector.visible_rows(), 4);

        // rows: header, items 0..9 at rows 1..10
        for _ in 0..3 {
            selector.handle_key(key(KeyCode::Down));
        }
        assert_eq!(selector.scroll_offset(), 1);

        selector.handle_key(key(KeyCode::Up));
        assert_eq!(selector.scroll_offset(), 1);

        selector.handle_key(key(KeyCode::Home));
        assert_eq!(selector.scroll_offset(), 1);

        selector.handle_key(key(KeyCode::End));
        assert_eq!(selector.scroll_offset(), 7);

        selector.scroll_by(100);
        assert_eq!(selector.scroll_offset(), 7);
        selector.scroll_by(-100);
        assert_eq!(selector.scroll_offset(), 0);
    }

    #[test]
    fn test_clipped_viewport_keeps_highlight_visible() {
        let providers = vec![(0..20).fold(Provider::new("p1", "p1", false), |p, i| {
            p.with_model(Model::new(format!("m{:02}", i), format!("Model{:02}", i), ""))
        })];
        let mut selector = MentionSelector::new(providers, Translator::default(), 16);
        selector.open();
        selector.set_viewport_height(10);
        assert_eq!(selector.preferred_rows(), 16);
        assert_eq!(selector.visible_rows(), 10);

        for _ in 0..12 {
            selector.handle_key(key(KeyCode::Down));
        }
        // item 12 is row 13, the last of rows 4..=13
        assert_eq!(selector.scroll_offset(), 4);

        // Shrinking further pulls the viewport down to the highlight
        selector.set_viewport_height(5);
        assert_eq!(selector.scroll_offset(), 9);

        // Growing back keeps the offset inside the scrollable range
        selector.set_viewport_height(40);
        assert_eq!(selector.visible_rows(), 16);
        assert_eq!(selector.scroll_offset(), 5);
    }

    #[tokio::test]
    async fn test_failed_pin_write_leaves_pins_untouched() {
        let store = FailingStore;
        let mut selector = opened();

        let result = selector.toggle_pin(&store, &alpha().uniq_id()).await;
        assert!(result.is_err());
        assert!(selector.pinned().is_empty());
        assert_eq!(selector.len(), 2);
        assert!(selector.menu().groups().iter().all(|g| g.label != "Pinned"));
        assert!(selector.is_open());
    }
}
