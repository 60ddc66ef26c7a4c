use std::fmt::{Display, Formatter};

use maud::{html, DOCTYPE};

pub use activities::{ActivitiesList, FAILED_NOTICE, LOADING_NOTICE, NO_PARTICIPANTS_NOTICE};
pub use form::{SignupForm, PLACEHOLDER_OPTION};
pub use message::{MessageArea, MessageKind};

mod activities;
mod form;
mod message;

/// The document an activity board is bound to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Page {
    pub activities: ActivitiesList,
    pub form: SignupForm,
    pub message: MessageArea,
}

impl Page {
    pub fn to_html(&self) -> String {
        html! {
            (DOCTYPE)
            html lang="en" {
                head {
                    meta charset="UTF-8";
                    title { "Activities" }
                }
                body {
                    main {
                        section id="activities-container" {
                            h3 { "Available Activities" }
                            (self.activities.markup())
                        }
                        section id="signup-container" {
                            h3 { "Sign Up for an Activity" }
                            (self.form.markup())
                            (self.message.markup())
                        }
                    }
                }
            }
        }
        .into_string()
    }
}

impl Display for Page {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.activities {
            ActivitiesList::Loading => writeln!(f, "{LOADING_NOTICE}")?,
            ActivitiesList::Failed => writeln!(f, "{FAILED_NOTICE}")?,
            ActivitiesList::Cards(cards) => {
                for card in cards {
                    writeln!(f, "{} ({} spots left)", card.name, card.spots_left)?;
                    writeln!(f, "  {}", card.description)?;
                    writeln!(f, "  Schedule: {}", card.schedule)?;
                    if card.participants.is_empty() {
                        writeln!(f, "  {NO_PARTICIPANTS_NOTICE}")?;
                    }
                    for email in &card.participants {
                        writeln!(f, "  - {email}")?;
                    }
                }
            }
        }
        let activity = match self.form.activity.value() {
            "" => PLACEHOLDER_OPTION,
            value => value,
        };
        writeln!(f, "email: {}  activity: {activity}", self.form.email)?;
        if let Some((kind, text)) = self.message.visible() {
            writeln!(f, "[{kind}] {text}")?;
        }
        Ok(())
    }
}
