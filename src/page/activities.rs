use maud::{html, Markup};

use crate::model::{Activity, Catalog};

pub const LOADING_NOTICE: &str = "Loading activities...";
pub const FAILED_NOTICE: &str = "Failed to load activities. Please try again later.";
pub const NO_PARTICIPANTS_NOTICE: &str = "No participants yet. Be the first to sign up!";

/// The `activities-list` panel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ActivitiesList {
    #[default]
    Loading,
    Cards(Vec<ActivityCard>),
    Failed,
}

impl ActivitiesList {
    pub fn render(catalog: &Catalog) -> ActivitiesList {
        ActivitiesList::Cards(
            catalog
                .iter()
                .map(|(name, activity)| ActivityCard::new(name, activity))
                .collect(),
        )
    }

    pub fn cards(&self) -> &[ActivityCard] {
        match self {
            ActivitiesList::Cards(cards) => cards,
            _ => &[],
        }
    }

    pub fn card(&self, name: &str) -> Option<&ActivityCard> {
        self.cards().iter().find(|card| card.name == name)
    }

    /// Whether an unregister control tagged with this pair is on the page.
    pub fn has_control(&self, activity: &str, email: &str) -> bool {
        self.card(activity)
            .map(|card| card.participants.iter().any(|e| e == email))
            .unwrap_or(false)
    }

    pub fn markup(&self) -> Markup {
        html! {
            div id="activities-list" {
                @match self {
                    ActivitiesList::Loading => p { (LOADING_NOTICE) },
                    ActivitiesList::Failed => p { (FAILED_NOTICE) },
                    ActivitiesList::Cards(cards) => {
                        @for card in cards {
                            (card.markup())
                        }
                    }
                }
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityCard {
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub spots_left: i64,
    pub participants: Vec<String>,
}

impl ActivityCard {
    pub fn new(name: &str, activity: &Activity) -> ActivityCard {
        ActivityCard {
            name: name.to_string(),
            description: activity.description.clone(),
            schedule: activity.schedule.clone(),
            spots_left: activity.spots_left(),
            participants: activity.participants.clone(),
        }
    }

    pub fn markup(&self) -> Markup {
        html! {
            div class="activity-card" {
                h4 { (self.name) }
                p { (self.description) }
                p { strong { "Schedule:" } " " (self.schedule) }
                p { strong { "Availability:" } " " (self.spots_left) " spots left" }
                @if self.participants.is_empty() {
                    div class="participants-section info" {
                        em { (NO_PARTICIPANTS_NOTICE) }
                    }
                } @else {
                    div class="participants-section" {
                        strong { "Participants:" }
                        ul class="participants-list" {
                            @for email in &self.participants {
                                li class="participant-item" {
                                    span class="participant-email" { (email) }
                                    button class="delete-btn" data-activity=(self.name) data-email=(email) title="Unregister" { "✖" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
