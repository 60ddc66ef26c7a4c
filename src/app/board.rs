use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, error, info, warn};

use crate::app::Confirm;
use crate::command;
use crate::config::{SIGNUP_MESSAGE_TTL, UNREGISTER_MESSAGE_TTL};
use crate::model::{Catalog, Reply};
use crate::page::{ActivitiesList, MessageKind, Page};
use crate::service::{ActivityApi, ApiError};

pub const SIGNUP_FALLBACK: &str = "An error occurred";
pub const SIGNUP_FAILED: &str = "Failed to sign up. Please try again.";
pub const UNREGISTER_FALLBACK: &str = "Failed to unregister participant";
pub const UNREGISTER_FAILED: &str = "Failed to unregister. Try again.";

command! {
    /// Re-fetch the catalog, then re-render the list and the select.
    pub Refresh();
    pub SetEmail(email: String);
    /// Returns false when `name` is not an option; the placeholder is selected instead.
    pub SelectActivity(name: String) -> bool;
    /// Sign up the form's email for the form's activity.
    pub Submit();
    /// Delegated click on an unregister control. Returns whether a request was sent.
    pub ClickUnregister(activity: String, email: String) -> bool;
    pub Snapshot() -> Page;
    CatalogLoaded(seq: u64, result: Result<Catalog, ApiError>);
    SignupFinished(result: Result<Reply, ApiError>);
    UnregisterFinished(result: Result<Reply, ApiError>);
    HideMessage(generation: u64);
}

/// The controller bound to one [Page].
///
/// The page is owned by the actor task; every interaction is a command, and
/// network completions come back as commands too, so handlers never overlap.
#[derive(Clone)]
pub struct ActivityBoard {
    pub op: CommandSender,
}

impl ActivityBoard {
    /// Binds a board to `page` and starts loading the catalog.
    pub fn create(api: Arc<dyn ActivityApi>, page: Page, prompt: Box<dyn Confirm>) -> ActivityBoard {
        let (op, mut rx) = Command::new_channel();
        let mut state = BoardInner {
            api,
            prompt,
            page,
            op: op.clone(),
            refresh_seq: 0,
            message_generation: 0,
            hide_timer: None,
        };
        tokio::spawn(async move {
            use Command::*;
            state.refresh();

            while let Some(command) = rx.recv().await {
                match command {
                    Refresh { resp_tx } => {
                        state.refresh();
                        let _ = resp_tx.send(());
                    }
                    SetEmail { email, resp_tx } => {
                        state.page.form.email = email;
                        let _ = resp_tx.send(());
                    }
                    SelectActivity { name, resp_tx } => {
                        let _ = resp_tx.send(state.page.form.activity.select(&name));
                    }
                    Submit { resp_tx } => {
                        state.submit();
                        let _ = resp_tx.send(());
                    }
                    ClickUnregister { activity, email, resp_tx } => {
                        let sent = state.click_unregister(activity, email).await;
                        let _ = resp_tx.send(sent);
                    }
                    Snapshot { resp_tx } => {
                        let _ = resp_tx.send(state.page.clone());
                    }
                    CatalogLoaded { seq, result, resp_tx } => {
                        state.catalog_loaded(seq, result);
                        let _ = resp_tx.send(());
                    }
                    SignupFinished { result, resp_tx } => {
                        state.signup_finished(result);
                        let _ = resp_tx.send(());
                    }
                    UnregisterFinished { result, resp_tx } => {
                        state.unregister_finished(result);
                        let _ = resp_tx.send(());
                    }
                    HideMessage { generation, resp_tx } => {
                        state.hide_message(generation);
                        let _ = resp_tx.send(());
                    }
                }
            }
            debug!("activity board dropped");
        });

        ActivityBoard { op }
    }
}

struct BoardInner {
    api: Arc<dyn ActivityApi>,
    prompt: Box<dyn Confirm>,
    page: Page,
    op: CommandSender,
    // latest dispatched list request; older responses are dropped
    refresh_seq: u64,
    // bumped on every shown message; hide requests for older ones are ignored
    message_generation: u64,
    hide_timer: Option<JoinHandle<()>>,
}

impl BoardInner {
    fn refresh(&mut self) {
        self.refresh_seq += 1;
        let seq = self.refresh_seq;
        let api = self.api.clone();
        let op = self.op.clone();
        tokio::spawn(async move {
            let result = api.activities().await;
            let _ = op.CatalogLoaded(seq, result).await;
        });
    }

    fn catalog_loaded(&mut self, seq: u64, result: Result<Catalog, ApiError>) {
        if seq != self.refresh_seq {
            debug!("dropping activities response #{seq}, latest is #{}", self.refresh_seq);
            return;
        }
        match result {
            Ok(catalog) => {
                self.page.activities = ActivitiesList::render(&catalog);
                self.page.form.activity.fill(&catalog);
                info!("rendered {} activities", catalog.len());
            }
            Err(e) => {
                self.page.activities = ActivitiesList::Failed;
                self.page.form.activity.reset_options();
                error!("Error fetching activities: {e}");
            }
        }
    }

    fn submit(&mut self) {
        let email = self.page.form.email.clone();
        let activity = self.page.form.activity.value().to_string();
        let api = self.api.clone();
        let op = self.op.clone();
        tokio::spawn(async move {
            let result = api.signup(&activity, &email).await;
            let _ = op.SignupFinished(result).await;
        });
    }

    fn signup_finished(&mut self, result: Result<Reply, ApiError>) {
        match result {
            Ok(reply) if reply.is_success() => {
                let text = reply.body.message.unwrap_or_default();
                self.show_message(MessageKind::Success, text, Some(SIGNUP_MESSAGE_TTL));
                self.page.form.reset();
                self.refresh();
            }
            Ok(reply) => {
                debug!("sign up rejected with {}", reply.status);
                let text = reply.body.detail_or(SIGNUP_FALLBACK);
                self.show_message(MessageKind::Error, text, Some(SIGNUP_MESSAGE_TTL));
            }
            Err(e) => {
                error!("Error signing up: {e}");
                self.show_message(MessageKind::Error, SIGNUP_FAILED.to_string(), None);
            }
        }
    }

    async fn click_unregister(&mut self, activity: String, email: String) -> bool {
        if !self.page.activities.has_control(&activity, &email) {
            warn!("no unregister control for `{email}` in `{activity}`");
            return false;
        }
        let question = format!("Unregister {email} from {activity}?");
        if !self.prompt.confirm(&question).await {
            debug!("unregister of `{email}` from `{activity}` declined");
            return false;
        }
        let api = self.api.clone();
        let op = self.op.clone();
        tokio::spawn(async move {
            let result = api.unregister(&activity, &email).await;
            let _ = op.UnregisterFinished(result).await;
        });
        true
    }

    fn unregister_finished(&mut self, result: Result<Reply, ApiError>) {
        match result {
            Ok(reply) if reply.is_success() => self.refresh(),
            Ok(reply) => {
                debug!("unregister rejected with {}", reply.status);
                let text = reply.body.reason_or(UNREGISTER_FALLBACK);
                self.show_message(MessageKind::Error, text, Some(UNREGISTER_MESSAGE_TTL));
            }
            Err(e) => {
                error!("Error unregistering participant: {e}");
                let text = UNREGISTER_FAILED.to_string();
                self.show_message(MessageKind::Error, text, Some(UNREGISTER_MESSAGE_TTL));
            }
        }
    }

    /// Replaces the message and its timer. Without `ttl` it stays until replaced.
    fn show_message(&mut self, kind: MessageKind, text: String, ttl: Option<Duration>) {
        self.message_generation += 1;
        if let Some(timer) = self.hide_timer.take() {
            timer.abort();
        }
        self.page.message.show(kind, text);
        if let Some(ttl) = ttl {
            let generation = self.message_generation;
            let op = self.op.clone();
            self.hide_timer = Some(tokio::spawn(async move {
                tokio::time::sleep(ttl).await;
                let _ = op.HideMessage(generation).await;
            }));
        }
    }

    fn hide_message(&mut self, generation: u64) {
        if generation == self.message_generation {
            self.page.message.hide();
            self.hide_timer = None;
        }
    }
}
