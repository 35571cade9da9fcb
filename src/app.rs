use crate::events::Action;
use crate::log;
use crate::model::Model;
use crate::selector::{MentionSelector, OpenTrigger, SelectorOutcome};
use crate::settings::SettingsStore;
use crate::tui::interaction::InteractionRegistry;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputMode {
    Compose,     // Typing the message
    MentionMenu, // Mention dropdown has keyboard focus
    Help,        // Help popup showing all hotkeys
}

/// Rectangular screen area used for mouse hit testing
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ClickRegion {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl ClickRegion {
    pub fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self { x, y, width, height }
    }

    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }
}

/// A message that has been sent from the composer
#[derive(Debug, Clone, PartialEq)]
pub struct SentMessage {
    pub text: String,
    pub mentions: Vec<Model>,
}

pub struct App {
    pub input: String,
    /// Cursor position in chars
    pub cursor: usize,
    /// Models mentioned in the message being composed
    pub mentioned: Vec<Model>,
    pub sent: Vec<SentMessage>,
    pub selector: MentionSelector,
    /// Handle used to ask the selector to open (e.g. when typing `@`)
    pub trigger: OpenTrigger,
    pub interactions: InteractionRegistry,
    pub show_help: bool,
    pub should_quit: bool,
}

impl App {
    pub fn new(selector: MentionSelector, trigger: OpenTrigger) -> Self {
        Self {
            input: String::new(),
            cursor: 0,
            mentioned: vec![],
            sent: vec![],
            selector,
            trigger,
            interactions: InteractionRegistry::new(),
            show_help: false,
            should_quit: false,
        }
    }

    pub fn input_mode(&self) -> InputMode {
        if self.show_help {
            InputMode::Help
        } else if self.selector.is_open() {
            InputMode::MentionMenu
        } else {
            InputMode::Compose
        }
    }

    /// Apply pending open requests. Called once per loop iteration.
    pub fn tick(&mut self) {
        self.selector.poll_open_requests();
    }

    pub async fn dispatch<S: SettingsStore>(&mut self, action: Action, store: &S) {
        match action {
            Action::None => {}
            Action::Quit => self.should_quit = true,
            Action::OpenHelp => self.show_help = true,
            Action::CloseHelp => self.show_help = false,

            Action::InputChar(c) => self.input_char(c),
            Action::InputBackspace => self.input_backspace(),
            Action::InputLeft => self.cursor = self.cursor.saturating_sub(1),
            Action::InputRight => self.cursor = (self.cursor + 1).min(self.input.chars().count()),
            Action::InputHome => self.cursor = 0,
            Action::InputEnd => self.cursor = self.input.chars().count(),
            Action::ClearInput => {
                self.input.clear();
                self.cursor = 0;
            }
            Action::SubmitMessage => self.submit_message(),

            Action::RequestMentionMenu => {
                self.trigger.fire();
            }
            Action::ToggleMentionMenu => self.selector.toggle_open(),
            Action::CloseMentionMenu => self.selector.close(),
            Action::ScrollMentionMenu(delta) => self.selector.scroll_by(delta),
            Action::SelectorKey(key) => {
                let outcome = self.selector.handle_key(key);
                self.apply_outcome(outcome, store).await;
            }
            Action::ClickMentionItem(index) => {
                let outcome = self.selector.click_item(index);
                self.apply_outcome(outcome, store).await;
            }
            Action::ClickPin(uniq_id) => {
                self.apply_outcome(SelectorOutcome::TogglePin(uniq_id), store).await;
            }
            Action::RemoveMention(index) => self.remove_mention(index),
        }
    }

    async fn apply_outcome<S: SettingsStore>(&mut self, outcome: SelectorOutcome, store: &S) {
        match outcome {
            SelectorOutcome::Mention(model) => self.add_mention(model),
            SelectorOutcome::TogglePin(uniq_id) => {
                if let Err(e) = self.selector.toggle_pin(store, &uniq_id).await {
                    log::log(&format!("Failed to save pinned models: {}", e));
                }
            }
            SelectorOutcome::Handled | SelectorOutcome::Ignored => {}
        }
    }

    // === Mentions ===

    pub fn add_mention(&mut self, model: Model) {
        self.mentioned.push(model);
        self.selector.set_mentioned(&self.mentioned);
    }

    pub fn remove_mention(&mut self, index: usize) {
        if index < self.mentioned.len() {
            let model = self.mentioned.remove(index);
            log::log_event(&format!("unmention {}", model.uniq_id()));
            self.selector.set_mentioned(&self.mentioned);
        }
    }

    // === Input editing ===

    fn byte_index(&self) -> usize {
        self.input
            .char_indices()
            .nth(self.cursor)
            .map(|(i, _)| i)
            .unwrap_or(self.input.len())
    }

    pub fn input_char(&mut self, c: char) {
        let idx = self.byte_index();
        self.input.insert(idx, c);
        self.cursor += 1;
    }

    /// Delete before the cursor; on an empty line drop the last mention instead.
    pub fn input_backspace(&mut self) {
        if self.input.is_empty() {
            if !self.mentioned.is_empty() {
                self.remove_mention(self.mentioned.len() - 1);
            }
            return;
        }
        if self.cursor > 0 {
            self.cursor -= 1;
            let idx = self.byte_index();
            self.input.remove(idx);
        }
    }

    pub fn submit_message(&mut self) {
        let text = self.input.trim().to_string();
        if text.is_empty() && self.mentioned.is_empty() {
            return;
        }

        let names: Vec<&str> = self.mentioned.iter().map(|m| m.name.as_str()).collect();
        log::log_event(&format!("send message mentioning [{}]", names.join(", ")));

        self.sent.push(SentMessage {
            text,
            mentions: std::mem::take(&mut self.mentioned),
        });
        self.input.clear();
        self.cursor = 0;
        self.selector.set_mentioned(&self.mentioned);
    }
}
