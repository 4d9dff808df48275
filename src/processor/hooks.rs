//! Fixed Lua text shared by every generated mod.
//!
//! Anything here is part of the output format: editing a single byte
//! changes the script of every user, so bump `HOOKS_VERSION` when it moves.

pub const HOOKS_VERSION: &str = "1.0.0";

pub const HEADER_START: &str = "--- STEAMODDED HEADER\n";
pub const HEADER_NAME: &str = "--- MOD_NAME: ";
pub const HEADER_ID: &str = "--- MOD_ID: ";

pub const HEADER_TAIL: &str = "--- MOD_AUTHOR: WinterWolf VN
--- MOD_DESCRIPTION: Mod chinh sua Joker Slots, Consumable Slots, Money
--- PREFIX: csm
--- VERSION: 1.0.0

----------------------------------------------
--          BALATRO MOD PACK v1.0           --
----------------------------------------------
";

pub const BANNER_RULE: &str = "-- ============================================\n";
pub const CONFIG_BANNER: &str = "-- CAU HINH MOD - ";
pub const CODE_BANNER: &str = "-- CODE MOD - KHONG CAN CHINH SUA\n";

pub const MOD_CONFIG_OPEN: &str = "local mod_config = {\n";
pub const MOD_CONFIG_CLOSE: &str = "}\n";

/// Behaviour hooks; they only read `mod_config`.
pub const HOOKS: &str = r#"-- Ap dung khi bat dau run
local game_start_run_ref = Game.start_run
function Game:start_run(args)
    local ret = game_start_run_ref(self, args)
    
    -- Ap dung Joker Slots
    if G.jokers then
        G.jokers.config.card_limit = mod_config.joker_slots_game
    end
    
    -- Ap dung Consumable Slots
    if G.consumeables then
        G.consumeables.config.card_limit = mod_config.consumable_slots_game
    end
    
    -- Ap dung Starting Money
    if G.GAME then
        G.GAME.dollars = mod_config.starting_money
        G.GAME.interest_cap = mod_config.interest_cap
    end
    
    return ret
end

-- Ap dung cho Shop
local shop_create_ref = G.UIDEF.shop
if shop_create_ref then
    G.UIDEF.shop = function()
        local ret = shop_create_ref()
        if G.shop_jokers then
            G.shop_jokers.config.card_limit = mod_config.joker_slots_shop
        end
        if G.shop_vouchers then
            G.shop_vouchers.config.card_limit = mod_config.consumable_slots_shop
        end
        return ret
    end
end
"#;

pub const LOG_CALL: &str = "sendDebugMessage(";
pub const LOADED_SUFFIX: &str = " loaded!";

pub const LOG_TAIL: &str = r#"sendDebugMessage("Joker Slots: " .. mod_config.joker_slots_game)
sendDebugMessage("Starting Money: $" .. mod_config.starting_money)
"#;
