use serde::{Deserialize, Serialize};

/// Output name used when the user does not pick one.
pub const DEFAULT_OUTPUT_NAME: &str = "CustomSlotsMoney";

/// The eight tunable numbers of the slots/money mod.
///
/// Values are forwarded to the compiler untouched; negative or oversized
/// numbers are legal here and end up in the script as written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct ModConfig {
    // Slots
    pub joker_slots_game: i64,
    pub consumable_slots_game: i64,
    pub joker_slots_shop: i64,
    pub consumable_slots_shop: i64,
    // Money
    pub starting_money: i64,
    pub interest_cap: i64,
    pub interest_rate: i64,
    pub dollars_per_interest: i64,
}

impl Default for ModConfig {
    fn default() -> Self {
        Self {
            joker_slots_game: 5,
            consumable_slots_game: 2,
            joker_slots_shop: 2,
            consumable_slots_shop: 2,
            starting_money: 4,
            interest_cap: 25,
            interest_rate: 1,
            dollars_per_interest: 5,
        }
    }
}

impl ModConfig {
    pub fn get(&self, field: ConfigField) -> i64 {
        match field {
            ConfigField::JokerSlotsGame => self.joker_slots_game,
            ConfigField::ConsumableSlotsGame => self.consumable_slots_game,
            ConfigField::JokerSlotsShop => self.joker_slots_shop,
            ConfigField::ConsumableSlotsShop => self.consumable_slots_shop,
            ConfigField::StartingMoney => self.starting_money,
            ConfigField::InterestCap => self.interest_cap,
            ConfigField::InterestRate => self.interest_rate,
            ConfigField::DollarsPerInterest => self.dollars_per_interest,
        }
    }

    /// Functional update: a copy of `self` with only `field` replaced.
    pub fn with_field(self, field: ConfigField, value: i64) -> Self {
        let mut next = self;
        let slot = match field {
            ConfigField::JokerSlotsGame => &mut next.joker_slots_game,
            ConfigField::ConsumableSlotsGame => &mut next.consumable_slots_game,
            ConfigField::JokerSlotsShop => &mut next.joker_slots_shop,
            ConfigField::ConsumableSlotsShop => &mut next.consumable_slots_shop,
            ConfigField::StartingMoney => &mut next.starting_money,
            ConfigField::InterestCap => &mut next.interest_cap,
            ConfigField::InterestRate => &mut next.interest_rate,
            ConfigField::DollarsPerInterest => &mut next.dollars_per_interest,
        };
        *slot = value;
        next
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldGroup {
    Slots,
    Money,
}

impl FieldGroup {
    pub fn label(self) -> &'static str {
        match self {
            FieldGroup::Slots => "SLOTS",
            FieldGroup::Money => "MONEY",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigField {
    JokerSlotsGame,
    ConsumableSlotsGame,
    JokerSlotsShop,
    ConsumableSlotsShop,
    StartingMoney,
    InterestCap,
    InterestRate,
    DollarsPerInterest,
}

impl ConfigField {
    /// Declaration order; the generated script follows it.
    pub const ALL: [ConfigField; 8] = [
        ConfigField::JokerSlotsGame,
        ConfigField::ConsumableSlotsGame,
        ConfigField::JokerSlotsShop,
        ConfigField::ConsumableSlotsShop,
        ConfigField::StartingMoney,
        ConfigField::InterestCap,
        ConfigField::InterestRate,
        ConfigField::DollarsPerInterest,
    ];

    /// camelCase key used in JSON config files.
    pub fn key(self) -> &'static str {
        match self {
            ConfigField::JokerSlotsGame => "jokerSlotsGame",
            ConfigField::ConsumableSlotsGame => "consumableSlotsGame",
            ConfigField::JokerSlotsShop => "jokerSlotsShop",
            ConfigField::ConsumableSlotsShop => "consumableSlotsShop",
            ConfigField::StartingMoney => "startingMoney",
            ConfigField::InterestCap => "interestCap",
            ConfigField::InterestRate => "interestRate",
            ConfigField::DollarsPerInterest => "dollarsPerInterest",
        }
    }

    /// Key inside the Lua `mod_config` table.
    pub fn snake_key(self) -> &'static str {
        match self {
            ConfigField::JokerSlotsGame => "joker_slots_game",
            ConfigField::ConsumableSlotsGame => "consumable_slots_game",
            ConfigField::JokerSlotsShop => "joker_slots_shop",
            ConfigField::ConsumableSlotsShop => "consumable_slots_shop",
            ConfigField::StartingMoney => "starting_money",
            ConfigField::InterestCap => "interest_cap",
            ConfigField::InterestRate => "interest_rate",
            ConfigField::DollarsPerInterest => "dollars_per_interest",
        }
    }

    /// Name of the `local` constant declared for this field.
    pub fn lua_const(self) -> &'static str {
        match self {
            ConfigField::JokerSlotsGame => "JOKER_SLOTS_GAME",
            ConfigField::ConsumableSlotsGame => "CONSUMABLE_SLOTS_GAME",
            ConfigField::JokerSlotsShop => "JOKER_SLOTS_SHOP",
            ConfigField::ConsumableSlotsShop => "CONSUMABLE_SLOTS_SHOP",
            ConfigField::StartingMoney => "STARTING_MONEY",
            ConfigField::InterestCap => "INTEREST_CAP",
            ConfigField::InterestRate => "INTEREST_RATE",
            ConfigField::DollarsPerInterest => "DOLLARS_PER_INTEREST",
        }
    }

    pub fn group(self) -> FieldGroup {
        match self {
            ConfigField::JokerSlotsGame
            | ConfigField::ConsumableSlotsGame
            | ConfigField::JokerSlotsShop
            | ConfigField::ConsumableSlotsShop => FieldGroup::Slots,
            _ => FieldGroup::Money,
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            ConfigField::JokerSlotsGame => "joker slots during a run",
            ConfigField::ConsumableSlotsGame => "consumable slots during a run",
            ConfigField::JokerSlotsShop => "joker cards offered in the shop",
            ConfigField::ConsumableSlotsShop => "voucher slots in the shop",
            ConfigField::StartingMoney => "money at the start of a run",
            ConfigField::InterestCap => "money above which interest stops",
            ConfigField::InterestRate => "money earned per interest tick (recorded only)",
            ConfigField::DollarsPerInterest => "money needed for one interest tick",
        }
    }

    /// Looks a field up by its camelCase or snake_case key.
    pub fn from_key(key: &str) -> Option<ConfigField> {
        Self::ALL
            .into_iter()
            .find(|f| f.key() == key || f.snake_key() == key)
    }
}
