//! The message catalog.
//!
//! Every user-facing string has a stable `(category, name)` key and a
//! default template. Hosts override templates through a
//! [`MessageSource`]; anything the source does not know falls back to
//! the built-in default.

use crate::colors::ColoredStringExt;
use crate::error::TextError;
use crate::params::{apply_params, Param};
use std::fmt;
use std::str::FromStr;

/// Message category, used as the configuration section name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Generic command replies.
    General,
    /// Item string parsing failures.
    ItemParser,
    /// Portal gun item naming and lore.
    Gun,
    /// Control panel menu entries.
    ControlPanel,
}

impl Category {
    /// All categories, in catalog order.
    pub const ALL: [Category; 4] = [
        Category::General,
        Category::ItemParser,
        Category::Gun,
        Category::ControlPanel,
    ];

    /// Configuration section name (kebab-case).
    pub const fn name(self) -> &'static str {
        match self {
            Category::General => "general",
            Category::ItemParser => "item-parser",
            Category::Gun => "gun",
            Category::ControlPanel => "control-panel",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = TextError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| TextError::UnknownCategory(s.to_string()))
    }
}

/// Lookup capability for configured message templates.
pub trait MessageSource {
    /// The configured template for `(category, name)`, if any.
    fn template(&self, category: Category, name: &str) -> Option<&str>;

    /// Prefix prepended when a message is rendered with a prefix.
    fn prefix(&self) -> &str {
        ""
    }
}

/// A source with no overrides: every message renders its default.
#[derive(Debug, Clone, Copy, Default)]
pub struct Defaults;

impl MessageSource for Defaults {
    fn template(&self, _category: Category, _name: &str) -> Option<&str> {
        None
    }
}

/// Rendering options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Render {
    /// Prepend the source's prefix.
    pub prefix: bool,
    /// Translate `&` colour codes.
    pub color: bool,
}

impl Render {
    /// Raw template text with parameters applied.
    pub const PLAIN: Render = Render {
        prefix: false,
        color: false,
    };

    /// Prefixed and coloured, as sent to players.
    pub const CHAT: Render = Render {
        prefix: true,
        color: true,
    };
}

/// Something that can receive a rendered chat line.
pub trait Recipient {
    /// Deliver one rendered message.
    fn send_message(&self, text: &str);
}

/// Macro to define the catalog with minimal boilerplate.
///
/// Each entry is `Variant => Category, "config-name", "default template";`.
macro_rules! define_messages {
    ($($variant:ident => $cat:ident, $name:literal, $default:literal;)*) => {
        /// A catalog entry.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum Msg {
            $(
                #[doc = $default]
                $variant,
            )*
        }

        impl Msg {
            /// Every catalog entry, in declaration order.
            pub const ALL: &'static [Msg] = &[$(Msg::$variant,)*];

            /// Configuration key within the category (kebab-case).
            pub const fn name(self) -> &'static str {
                match self {
                    $(Msg::$variant => $name,)*
                }
            }

            /// Category this message belongs to.
            pub const fn category(self) -> Category {
                match self {
                    $(Msg::$variant => Category::$cat,)*
                }
            }

            /// Built-in template.
            pub const fn default_template(self) -> &'static str {
                match self {
                    $(Msg::$variant => $default,)*
                }
            }
        }
    };
}

define_messages! {
    NoPermission => General, "no-permission", "&cInsufficient permissions.";
    PlayerCommand => General, "player-command", "&cThis is a player command only.";
    InvalidUsage => General, "invalid-usage", "&cInvalid usage! &7{usage}";
    Primary => General, "primary", "primary";
    Secondary => General, "secondary", "secondary";
    Nobody => General, "nobody", "&cnobody";

    NoItemSpecified => ItemParser, "no-item-specified", "&cNo item specified!";
    UnknownItemName => ItemParser, "unknown-item-name", "&cThe item &4{input} &cis not a valid item!";
    MissingMetaValue => ItemParser, "missing-meta-value", "&cNo value specified for meta &4{meta}&c!";
    NotANumber => ItemParser, "not-a-number", "&4{input} &cis not a number!";
    InvalidColor => ItemParser, "invalid-color", "&4{input} &cis not a valid color!";
    InvalidDyeColor => ItemParser, "invalid-dye-color", "&4{input} &cis not a valid dye color!";
    InvalidFireworkShape => ItemParser, "invalid-firework-shape", "&4{input} &cis not a valid firework shape!";
    MissingFireworkShape => ItemParser, "missing-firework-shape", "&cTo create a firework effect, you need to specify the shape!";
    MissingFireworkColor => ItemParser, "missing-firework-color", "&cTo create a firework effect, you need to set at least one color!";
    InvalidEnchantValue => ItemParser, "invalid-enchant-value", "&4{input} &cis not a valid enchantment level.";
    InvalidPotionValue => ItemParser, "invalid-potion-value", "&4{input} &cis not a valid potion effect value. It should be {duration}.{amplifier}&c.";

    GunName => Gun, "gun-name", "&6&lPortal &9&lGun";
    InactiveGun => Gun, "inactive-gun", "&c&lBroken Portal Gun";
    GunUidPrefix => Gun, "gun-uid-prefix", "&8&o";
    GunOwner => Gun, "gun-owner", "&6Owner&8: &a";
    GlobalOwner => Gun, "global-owner", "&e(Global gun!)";
    GunDurabilityPrefix => Gun, "gun-durability-prefix", "&a";
    GunDurabilitySeperator => Gun, "gun-durability-seperator", "&7/";
    GunDurabilitySuffix => Gun, "gun-durability-suffix", "&2";
    GunDescription => Gun, "gun-description", "&7Left click to create the primary portal.\n&7Right click to create the secondary portal.\n&aShift click &7to open the &acontrol panel&7!";
    CraftNew => Gun, "craft-new", "&7Craft a new portal gun!";
    CraftCopy => Gun, "craft-copy", "&7Craft a copy of your previous gun!";
    CraftGunInfoSeparator => Gun, "craft-gun-info-separator", "&7------------------";

    MenuTitle => ControlPanel, "menu-title", "&9&lControl Panel";
    DeleteName => ControlPanel, "delete-name", "&c&lDelete Portal";
    DeleteDesc => ControlPanel, "delete-desc", "&7Delete the {type} portal if it's active.";
    PersistentName => ControlPanel, "persistent-name", "&6&lPersistent";
    PersistentDesc => ControlPanel, "persistent-desc", "&7This portal is persistent.\n&7The portal won't get deleted when cleanup happens.\n&eClick &7to make it non persistent.";
    NotPersistentName => ControlPanel, "not-persistent-name", "&e&lNot Persistent";
    NotPersistentDesc => ControlPanel, "not-persistent-desc", "&7This portal is not persistent.\n&7The portal will get deleted when cleanup happens.\n&6Click &7to make it persistent.";
    SharesName => ControlPanel, "shares-name", "&6&lShares";
    SharesDesc => ControlPanel, "shares-desc", "&7&oAdd friends to allow them to use your portals!\n&7They can not use your portal gun!\n&eLeft click &7to &eadd &7people.\n&cRight click &7to &cremove &7people.\n&6Currently shared with&8:\n{shares}";
    PrimaryName => ControlPanel, "primary-name", "&9&lPrimary Portal";
    SecondaryName => ControlPanel, "secondary-name", "&6&lSecondary Portal";
    PortalDesc => ControlPanel, "portal-desc", "&7This is your {type} portal.\n&7Below you can adjust the portal color!\n&6Color&8: &a{color}\n&6Location&8: &a{location}";
    PortalDescInactive => ControlPanel, "portal-desc-inactive", "&7This is your {type} portal.\n&7Below you can adjust the portal color!\n&c&lThis portal is not active!\n&cClick while holding your gun to create a portal!";
    ColorFormat => ControlPanel, "color-format", "&c{red}&8,&a{green}&8,&9{blue}";
    SeperatorLeft => ControlPanel, "seperator-left", "&9Primary Portal";
    SeperatorRight => ControlPanel, "seperator-right", "&6Secondary Portal";
    SeperatorCenter => ControlPanel, "seperator-center", "&9Primary &7<-> &6Secondary";
    Red => ControlPanel, "red", "&cRed &8[&6{value}&8]";
    Green => ControlPanel, "green", "&aGreen &8[&6{value}&8]";
    Blue => ControlPanel, "blue", "&9Blue &8[&6{value}&8]";
    ColorDescIncrease => ControlPanel, "color-desc-increase", "increase";
    ColorDescDecrease => ControlPanel, "color-desc-decrease", "decrease";
    ColorDesc => ControlPanel, "color-desc", "&aLeft click &7to {type} the color by &a1&7.\n&2Shift+Left click &7to {type} the color by &25&7.\n&eRight click &7to {type} the color by &e20&7.\n&6Shift+Right click &7to {type} the color by &650&7.";
}

impl Msg {
    /// Find the entry for a `(category, name)` pair.
    pub fn find(category: Category, name: &str) -> Option<Msg> {
        Msg::ALL
            .iter()
            .copied()
            .find(|m| m.category() == category && m.name().eq_ignore_ascii_case(name))
    }

    /// The template to use, preferring the source over the default.
    pub fn template<'s, S: MessageSource + ?Sized>(self, source: &'s S) -> &'s str {
        source
            .template(self.category(), self.name())
            .unwrap_or(self.default_template())
    }

    /// Render with parameters applied and no prefix or colouring.
    pub fn text<S: MessageSource + ?Sized>(self, source: &S, params: &[Param]) -> String {
        self.render(source, Render::PLAIN, params)
    }

    /// Render the message.
    ///
    /// Parameters are substituted in order, after the prefix is added and
    /// before colour codes are translated.
    pub fn render<S: MessageSource + ?Sized>(
        self,
        source: &S,
        opts: Render,
        params: &[Param],
    ) -> String {
        let mut message = String::new();
        if opts.prefix {
            message.push_str(source.prefix());
        }
        message.push_str(self.template(source));

        let message = apply_params(message, params);
        if opts.color {
            message.colorize().into_owned()
        } else {
            message
        }
    }

    /// Render for chat and deliver to one recipient.
    pub fn send<S, R>(self, source: &S, recipient: &R, params: &[Param])
    where
        S: MessageSource + ?Sized,
        R: Recipient + ?Sized,
    {
        recipient.send_message(&self.render(source, Render::CHAT, params));
    }

    /// Render once and deliver to every recipient.
    pub fn broadcast<'r, S, R, I>(self, source: &S, recipients: I, params: &[Param])
    where
        S: MessageSource + ?Sized,
        R: Recipient + ?Sized + 'r,
        I: IntoIterator<Item = &'r R>,
    {
        let line = self.render(source, Render::CHAT, params);
        for recipient in recipients {
            recipient.send_message(&line);
        }
    }
}

impl fmt::Display for Msg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.category(), self.name())
    }
}

impl FromStr for Msg {
    type Err = TextError;

    /// Parse a `category.name` key.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (cat, name) = s
            .split_once('.')
            .ok_or_else(|| TextError::MalformedKey(s.to_string()))?;
        let category = cat.parse::<Category>()?;
        Msg::find(category, name).ok_or_else(|| TextError::UnknownMessage {
            category: category.name(),
            name: name.to_string(),
        })
    }
}
