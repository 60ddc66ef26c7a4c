use maud::{html, Markup};

use crate::model::Catalog;

pub const PLACEHOLDER_OPTION: &str = "-- Select an activity --";

/// The `activity` select. The placeholder option (value `""`) is always first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivitySelect {
    options: Vec<String>,
    value: String,
}

impl ActivitySelect {
    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Drops every option except the placeholder, which becomes selected.
    pub fn reset_options(&mut self) {
        self.options.clear();
        self.value.clear();
    }

    pub fn push_option(&mut self, name: &str) {
        self.options.push(name.to_string());
    }

    pub fn fill(&mut self, catalog: &Catalog) {
        self.reset_options();
        for (name, _) in catalog.iter() {
            self.push_option(name);
        }
    }

    /// Unknown values fall back to the placeholder.
    pub fn select(&mut self, value: &str) -> bool {
        if value.is_empty() || self.options.iter().any(|e| e == value) {
            self.value = value.to_string();
            true
        } else {
            self.value.clear();
            false
        }
    }

    pub fn markup(&self) -> Markup {
        html! {
            select id="activity" name="activity" required {
                option value="" selected[self.value.is_empty()] { (PLACEHOLDER_OPTION) }
                @for name in &self.options {
                    option value=(name) selected[*name == self.value] { (name) }
                }
            }
        }
    }
}

/// The `signup-form`: the `email` input and the activity select.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub email: String,
    pub activity: ActivitySelect,
}

impl SignupForm {
    pub fn reset(&mut self) {
        self.email.clear();
        self.activity.select("");
    }

    pub fn markup(&self) -> Markup {
        html! {
            form id="signup-form" {
                div class="form-group" {
                    label for="email" { "Email:" }
                    input type="email" id="email" required value=(self.email);
                }
                div class="form-group" {
                    label for="activity" { "Activity:" }
                    (self.activity.markup())
                }
                button type="submit" { "Sign Up" }
            }
        }
    }
}
