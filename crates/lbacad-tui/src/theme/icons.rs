//! Icon set with an ASCII fallback for terminals without emoji fonts

/// Icons used across the explainer widgets. Constructed from the
/// `ui.icons` setting; the fallback keeps column widths stable.
#[derive(Debug, Clone, Copy)]
pub struct IconSet {
    emoji: bool,
}

impl IconSet {
    pub fn new(emoji: bool) -> Self {
        Self { emoji }
    }

    pub fn balancer(&self) -> &'static str {
        if self.emoji {
            "⚖"
        } else {
            "LB"
        }
    }

    pub fn server(&self) -> &'static str {
        if self.emoji {
            "🖥"
        } else {
            "[]"
        }
    }

    pub fn client(&self) -> &'static str {
        if self.emoji {
            "💻"
        } else {
            "PC"
        }
    }

    pub fn heartbeat(&self) -> &'static str {
        if self.emoji {
            "💓"
        } else {
            "<3"
        }
    }

    pub fn crashed(&self) -> &'static str {
        if self.emoji {
            "🚫"
        } else {
            "xx"
        }
    }

    pub fn packet(&self) -> &'static str {
        if self.emoji {
            "📦"
        } else {
            "[#]"
        }
    }

    pub fn graduate(&self) -> &'static str {
        if self.emoji {
            "🎓"
        } else {
            "**"
        }
    }
}
