//! Message template overrides.
//!
//! ```toml
//! [messages]
//! prefix = "&8[&5PG&8] "
//!
//! [messages.general]
//! no-permission = "&4You can't do that."
//! ```

use super::defaults::default_message_prefix;
use portalguns_text::{Category, MessageSource, Msg};
use serde::Deserialize;
use std::collections::HashMap;

/// Message template overrides, keyed by category then message name.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MessagesConfig {
    /// Prefix for chat messages.
    #[serde(default = "default_message_prefix")]
    pub prefix: String,
    /// `category -> name -> template`.
    #[serde(flatten)]
    pub sections: HashMap<String, HashMap<String, String>>,
}

impl MessagesConfig {
    /// Override keys that do not name a catalog entry, as `category.name`.
    pub fn unknown_keys(&self) -> Vec<String> {
        let mut unknown = Vec::new();
        for (section, entries) in &self.sections {
            let category = section.parse::<Category>().ok();
            for name in entries.keys() {
                let known = category.is_some_and(|c| Msg::find(c, name).is_some());
                if !known {
                    unknown.push(format!("{section}.{name}"));
                }
            }
        }
        unknown.sort();
        unknown
    }
}

impl Default for MessagesConfig {
    fn default() -> Self {
        Self {
            prefix: default_message_prefix(),
            sections: HashMap::new(),
        }
    }
}

impl MessageSource for MessagesConfig {
    fn template(&self, category: Category, name: &str) -> Option<&str> {
        self.sections
            .get(category.name())
            .and_then(|entries| entries.get(name))
            .map(String::as_str)
    }

    fn prefix(&self) -> &str {
        &self.prefix
    }
}
