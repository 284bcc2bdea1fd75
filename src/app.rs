//! Application state and core logic

use crate::account::{AccountClientTrait, SignInResponse, SubmitError};
use crate::keymap::{action_for, Action};
use crate::state::{AppState, Focus, Language, LinkTarget, SubmitState};
use crossterm::event::KeyEvent;
use std::sync::Arc;
use tokio::sync::mpsc;

/// Result of one sign-in request, delivered back to the event loop
pub type SubmitOutcome = Result<SignInResponse, SubmitError>;

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Account service used for submissions
    client: Arc<dyn AccountClientTrait>,
    outcome_tx: mpsc::UnboundedSender<SubmitOutcome>,
    outcome_rx: mpsc::UnboundedReceiver<SubmitOutcome>,
    /// Whether the app should quit
    quit: bool,
    /// Event loop ticks, drives the loading spinner
    pub tick: usize,
}

impl App {
    pub fn new(state: AppState, client: Arc<dyn AccountClientTrait>) -> Self {
        let (outcome_tx, outcome_rx) = mpsc::unbounded_channel();
        Self {
            state,
            client,
            outcome_tx,
            outcome_rx,
            quit: false,
            tick: 0,
        }
    }

    /// Advance per-frame state and apply finished submissions
    pub fn on_tick(&mut self) {
        self.tick = self.tick.wrapping_add(1);
        self.poll_submissions();
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        let Some(action) = action_for(&key) else {
            return;
        };

        // The error dialog is modal: only dismiss and quit get through
        if self.state.current_error().is_some() {
            match action {
                Action::Quit => self.quit = true,
                Action::Confirm | Action::Dismiss => self.state.dismiss_error(),
                _ => {}
            }
            return;
        }

        match action {
            Action::Quit | Action::Dismiss => self.quit = true,
            Action::NextField => self.state.form.next_field(),
            Action::PrevField => self.state.form.prev_field(),
            Action::Submit => {
                self.submit();
            }
            Action::Confirm => self.confirm(),
            Action::ToggleTheme => self.state.toggle_theme(),
            Action::ToggleLanguage => self.state.toggle_language(),
            Action::SelectEnglish => self.state.set_language(Language::En),
            Action::SelectKorean => self.state.set_language(Language::Ko),
            Action::ToggleReveal => self.state.form.password_field.toggle_mask(),
            Action::OpenHelp => self.activate_link(LinkTarget::Help),
            Action::OpenPrivacy => self.activate_link(LinkTarget::Privacy),
            Action::OpenTerms => self.activate_link(LinkTarget::Terms),
            Action::Input(c) => {
                let pack = self.state.pack();
                self.state.form.input_char(c, pack);
            }
            Action::Backspace => {
                let pack = self.state.pack();
                self.state.form.backspace(pack);
            }
        }
    }

    /// Enter on the focused element
    fn confirm(&mut self) {
        match self.state.form.focus {
            Focus::Identifier | Focus::Password | Focus::SubmitButton => {
                self.submit();
            }
            Focus::ForgotLink => self.activate_link(LinkTarget::Forgot),
            Focus::CreateLink => self.activate_link(LinkTarget::Create),
        }
    }

    /// Start a sign-in request if the gate is open.
    /// Returns whether a request was started.
    pub fn submit(&mut self) -> bool {
        if !self.state.can_submit() {
            tracing::debug!(
                submitting = self.state.is_submitting(),
                "submit ignored: form not ready"
            );
            return false;
        }
        let Some(request) = self.state.form.sign_in_request() else {
            return false;
        };

        self.state.submit_state = SubmitState::Submitting;
        self.state.status_message = None;
        tracing::info!("submitting sign-in");

        let client = Arc::clone(&self.client);
        let tx = self.outcome_tx.clone();
        tokio::spawn(async move {
            let outcome = client.sign_in(request).await;
            // Receiver only goes away when the app is shutting down
            let _ = tx.send(outcome);
        });
        true
    }

    /// Apply any finished submissions
    fn poll_submissions(&mut self) {
        while let Ok(outcome) = self.outcome_rx.try_recv() {
            self.finish_submission(outcome);
        }
    }

    /// Resolve the in-flight submission, whatever its outcome
    pub fn finish_submission(&mut self, outcome: SubmitOutcome) {
        self.state.submit_state = SubmitState::Idle;
        let pack = self.state.pack();
        match outcome {
            Ok(response) => {
                tracing::info!("Welcome, {}!", response.name);
                self.state.status_message = Some(pack.welcome_message(&response.name));
            }
            Err(err) => {
                tracing::warn!(error = %err, "sign-in failed");
                self.state.push_error(pack.submit_failed.to_string());
            }
        }
    }

    /// Links lead nowhere yet; acknowledge the press in the status line
    fn activate_link(&mut self, link: LinkTarget) {
        let label = link.label(self.state.pack());
        tracing::debug!(?link, "link activated");
        self.state.status_message = Some(format!("{label} ↗"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::account::{MockAccountClientTrait, SignInRequest};
    use crate::state::{Theme, ENGLISH, KOREAN};
    use crossterm::event::{KeyCode, KeyModifiers};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn type_str(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
    }

    fn app_with(mock: MockAccountClientTrait) -> App {
        App::new(AppState::default(), Arc::new(mock))
    }

    /// Mock that must never be called
    fn idle_mock() -> MockAccountClientTrait {
        let mut mock = MockAccountClientTrait::new();
        mock.expect_sign_in().times(0);
        mock
    }

    fn fill_valid(app: &mut App, identifier: &str) {
        type_str(app, identifier);
        app.handle_key(key(KeyCode::Tab));
        type_str(app, "abcdef");
    }

    async fn wait_for_outcome(app: &mut App) {
        let outcome = app.outcome_rx.recv().await.unwrap();
        app.finish_submission(outcome);
    }

    mod editing {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_typing_fills_focused_field() {
            let mut app = app_with(idle_mock());
            type_str(&mut app, "a@b");
            assert_eq!(app.state.form.identifier_field.as_text(), "a@b");
            app.handle_key(key(KeyCode::Backspace));
            assert_eq!(app.state.form.identifier_field.as_text(), "a@");
        }

        #[test]
        fn test_tab_moves_to_password() {
            let mut app = app_with(idle_mock());
            app.handle_key(key(KeyCode::Tab));
            type_str(&mut app, "pw");
            assert_eq!(app.state.form.password_field.as_text(), "pw");
            assert!(app.state.form.identifier_field.is_empty());
        }

        #[test]
        fn test_ctrl_p_reveals_password() {
            let mut app = app_with(idle_mock());
            assert!(app.state.form.password_field.is_masked);
            app.handle_key(ctrl('p'));
            assert!(!app.state.form.password_field.is_masked);
        }
    }

    mod gate {
        use super::*;

        #[test]
        fn test_submit_ignored_when_incomplete() {
            let mut app = app_with(idle_mock());
            type_str(&mut app, "plainstring");
            app.handle_key(key(KeyCode::Tab));
            type_str(&mut app, "abcdef");
            assert!(!app.submit());
            assert!(!app.state.is_submitting());
        }

        #[test]
        fn test_submit_ignored_with_short_password() {
            let mut app = app_with(idle_mock());
            type_str(&mut app, "a@b.co");
            app.handle_key(key(KeyCode::Tab));
            type_str(&mut app, "abc");
            app.handle_key(key(KeyCode::Enter));
            assert!(!app.state.is_submitting());
        }
    }

    mod submission {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test]
        async fn test_email_submission_success() {
            let mut mock = MockAccountClientTrait::new();
            mock.expect_sign_in()
                .withf(|request| {
                    *request
                        == SignInRequest::Email {
                            email: "a@b.co".to_string(),
                            password: "abcdef".to_string(),
                        }
                })
                .times(1)
                .returning(|_| {
                    Ok(SignInResponse {
                        name: "Ada".to_string(),
                    })
                });
            let mut app = app_with(mock);
            fill_valid(&mut app, "a@b.co");

            app.handle_key(ctrl('s'));
            assert!(app.state.is_submitting());

            wait_for_outcome(&mut app).await;
            assert!(!app.state.is_submitting());
            assert_eq!(app.state.status_message.as_deref(), Some("Welcome, Ada!"));
            assert!(app.state.current_error().is_none());
        }

        #[tokio::test]
        async fn test_phone_submission_sends_number() {
            let mut mock = MockAccountClientTrait::new();
            mock.expect_sign_in()
                .withf(|request| matches!(request, SignInRequest::Phone { number, .. } if number == "12345678"))
                .times(1)
                .returning(|_| {
                    Ok(SignInResponse {
                        name: "Kim".to_string(),
                    })
                });
            let mut app = app_with(mock);
            fill_valid(&mut app, "12345678");

            assert!(app.submit());
            wait_for_outcome(&mut app).await;
            assert_eq!(app.state.status_message.as_deref(), Some("Welcome, Kim!"));
        }

        #[tokio::test]
        async fn test_failure_resets_submitting_and_shows_error() {
            let mut mock = MockAccountClientTrait::new();
            mock.expect_sign_in().times(1).returning(|_| {
                Err(SubmitError::Status {
                    code: 500,
                    body: "boom".to_string(),
                })
            });
            let mut app = app_with(mock);
            fill_valid(&mut app, "a@b.co");

            assert!(app.submit());
            wait_for_outcome(&mut app).await;

            assert!(!app.state.is_submitting());
            assert_eq!(app.state.current_error(), Some(ENGLISH.submit_failed));
            // Form stays filled so the user can retry by hand
            assert!(app.state.can_submit());
        }

        #[tokio::test]
        async fn test_failure_message_uses_current_language() {
            let mut mock = MockAccountClientTrait::new();
            mock.expect_sign_in()
                .times(1)
                .returning(|_| Err(SubmitError::Transport("refused".to_string())));
            let mut app = app_with(mock);
            fill_valid(&mut app, "a@b.co");
            app.handle_key(key(KeyCode::F(2)));

            assert!(app.submit());
            wait_for_outcome(&mut app).await;
            assert_eq!(app.state.current_error(), Some(KOREAN.submit_failed));
        }

        #[tokio::test]
        async fn test_resubmit_blocked_while_in_flight() {
            let mut mock = MockAccountClientTrait::new();
            mock.expect_sign_in().times(1).returning(|_| {
                Ok(SignInResponse {
                    name: "Ada".to_string(),
                })
            });
            let mut app = app_with(mock);
            fill_valid(&mut app, "a@b.co");

            assert!(app.submit());
            assert!(!app.submit());
            app.handle_key(key(KeyCode::Enter));

            wait_for_outcome(&mut app).await;
            assert!(app.outcome_rx.try_recv().is_err());
        }

        #[tokio::test]
        async fn test_editing_allowed_while_in_flight() {
            let mut mock = MockAccountClientTrait::new();
            mock.expect_sign_in().times(1).returning(|_| {
                Ok(SignInResponse {
                    name: "Ada".to_string(),
                })
            });
            let mut app = app_with(mock);
            fill_valid(&mut app, "a@b.co");

            assert!(app.submit());
            type_str(&mut app, "g");
            assert_eq!(app.state.form.password_field.as_text(), "abcdefg");
            assert!(app.state.is_submitting());

            wait_for_outcome(&mut app).await;
            assert!(!app.state.is_submitting());
        }

        #[tokio::test]
        async fn test_poll_submissions_applies_outcome() {
            let mut mock = MockAccountClientTrait::new();
            mock.expect_sign_in().times(1).returning(|_| {
                Ok(SignInResponse {
                    name: "Ada".to_string(),
                })
            });
            let mut app = app_with(mock);
            fill_valid(&mut app, "a@b.co");
            assert!(app.submit());

            // Let the spawned request run on the current-thread runtime
            for _ in 0..10 {
                tokio::task::yield_now().await;
                app.on_tick();
                if !app.state.is_submitting() {
                    break;
                }
            }

            assert!(!app.state.is_submitting());
            assert_eq!(app.state.status_message.as_deref(), Some("Welcome, Ada!"));
        }

        #[tokio::test]
        async fn test_identifier_kept_out_of_info_log() {
            let dir = tempfile::tempdir().unwrap();
            let (writer, guard) = crate::logging::file_writer(dir.path()).unwrap();
            let subscriber = tracing_subscriber::fmt()
                .with_ansi(false)
                .with_max_level(tracing::Level::INFO)
                .with_writer(writer)
                .finish();
            let mut mock = MockAccountClientTrait::new();
            mock.expect_sign_in().times(1).returning(|_| {
                Ok(SignInResponse {
                    name: "Ada".to_string(),
                })
            });
            let mut app = app_with(mock);
            fill_valid(&mut app, "a@b.co");

            tracing::subscriber::with_default(subscriber, || assert!(app.submit()));
            wait_for_outcome(&mut app).await;
            drop(guard);

            let log = std::fs::read_to_string(dir.path().join(crate::logging::LOG_FILE)).unwrap();
            assert!(log.contains("submitting sign-in"), "log was: {log}");
            assert!(!log.contains("a@b.co"), "log was: {log}");
        }
    }

    mod dialog {
        use super::*;

        #[test]
        fn test_error_dialog_swallows_input() {
            let mut app = app_with(idle_mock());
            app.state.push_error("oops".to_string());
            type_str(&mut app, "abc");
            assert!(app.state.form.identifier_field.is_empty());
            assert!(!app.should_quit());
        }

        #[test]
        fn test_enter_dismisses_error() {
            let mut app = app_with(idle_mock());
            app.state.push_error("oops".to_string());
            app.handle_key(key(KeyCode::Enter));
            assert!(app.state.current_error().is_none());
        }

        #[test]
        fn test_esc_dismisses_before_quitting() {
            let mut app = app_with(idle_mock());
            app.state.push_error("oops".to_string());
            app.handle_key(key(KeyCode::Esc));
            assert!(!app.should_quit());
            app.handle_key(key(KeyCode::Esc));
            assert!(app.should_quit());
        }

        #[test]
        fn test_ctrl_c_quits_from_dialog() {
            let mut app = app_with(idle_mock());
            app.state.push_error("oops".to_string());
            app.handle_key(ctrl('c'));
            assert!(app.should_quit());
        }
    }

    mod appearance {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_language_shortcuts() {
            let mut app = app_with(idle_mock());
            app.handle_key(ctrl('l'));
            assert_eq!(app.state.language, Language::Ko);
            app.handle_key(key(KeyCode::F(1)));
            assert_eq!(app.state.language, Language::En);
        }

        #[test]
        fn test_language_switch_does_not_touch_fields() {
            let mut app = app_with(idle_mock());
            type_str(&mut app, "0123");
            let track = app.state.form.identifier_track();
            app.handle_key(key(KeyCode::F(2)));
            assert_eq!(app.state.form.identifier_track(), track);
            assert_eq!(app.state.form.identifier_field.as_text(), "0123");
            assert_eq!(
                app.state.form.identifier_error.as_deref(),
                Some(KOREAN.phone_validation)
            );
        }

        #[test]
        fn test_theme_toggle() {
            let mut app = app_with(idle_mock());
            app.handle_key(ctrl('t'));
            assert_eq!(app.state.theme, Theme::Dark);
            app.handle_key(ctrl('t'));
            assert_eq!(app.state.theme, Theme::Light);
        }
    }

    mod links {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_enter_on_forgot_link() {
            let mut app = app_with(idle_mock());
            app.state.form.focus = Focus::ForgotLink;
            app.handle_key(key(KeyCode::Enter));
            assert_eq!(
                app.state.status_message.as_deref(),
                Some("Forgot Password? ↗")
            );
        }

        #[test]
        fn test_footer_link_in_korean() {
            let mut app = app_with(idle_mock());
            app.handle_key(key(KeyCode::F(2)));
            app.handle_key(key(KeyCode::F(3)));
            assert_eq!(app.state.status_message.as_deref(), Some("도움 ↗"));
        }
    }
}
