use std::fmt::{Display, Formatter};

use maud::{html, Markup};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Success,
    Error,
}

impl MessageKind {
    pub fn class(&self) -> &'static str {
        match self {
            MessageKind::Success => "success",
            MessageKind::Error => "error",
        }
    }
}

impl Display for MessageKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.class())
    }
}

/// The transient `message` area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageArea {
    pub text: String,
    pub kind: Option<MessageKind>,
    pub hidden: bool,
}

impl Default for MessageArea {
    fn default() -> Self {
        MessageArea {
            text: String::new(),
            kind: None,
            hidden: true,
        }
    }
}

impl MessageArea {
    pub fn show(&mut self, kind: MessageKind, text: String) {
        self.text = text;
        self.kind = Some(kind);
        self.hidden = false;
    }

    pub fn hide(&mut self) {
        self.hidden = true;
    }

    /// The message currently on screen, if any.
    pub fn visible(&self) -> Option<(MessageKind, &str)> {
        match self.kind {
            Some(kind) if !self.hidden => Some((kind, self.text.as_str())),
            _ => None,
        }
    }

    pub fn markup(&self) -> Markup {
        let mut class = self.kind.map(|e| e.class().to_string()).unwrap_or_default();
        if self.hidden {
            if !class.is_empty() {
                class.push(' ');
            }
            class.push_str("hidden");
        }
        html! {
            div id="message" class=(class) { (self.text) }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_cycles_visibility() {
        let mut area = MessageArea::default();
        assert_eq!(area.visible(), None);
        assert_eq!(area.markup().into_string(), r#"<div id="message" class="hidden"></div>"#);

        area.show(MessageKind::Success, "Signed up!".to_string());
        assert_eq!(area.visible(), Some((MessageKind::Success, "Signed up!")));
        assert_eq!(area.markup().into_string(), r#"<div id="message" class="success">Signed up!</div>"#);

        area.hide();
        assert_eq!(area.visible(), None);
        assert_eq!(area.markup().into_string(), r#"<div id="message" class="success hidden">Signed up!</div>"#);
    }
}
