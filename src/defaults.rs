//! Central place for all default values.
//! Update these and the whole app picks them up.

use std::time::Duration;

use crate::chain::Chain;

pub struct Defaults;

impl Defaults {
    /* Remote service */
    pub const BASE_URL: &'static str = "http://127.0.0.1:8000";
    pub const BASE_URL_ENV: &'static str = "FOOD_MEME_BASE_URL";

    /* Image request (fixed by the service contract) */
    pub const IMAGE_SIZE: &'static str = "1024x1024";
    pub const IMAGE_QUALITY: &'static str = "standard";
    pub const IMAGE_COUNT: u32 = 1;
    pub const IMAGE_RESPONSE_FORMAT: &'static str = "url";

    /* Prompt capture */
    pub const AUTO_PROMPT: &'static str = "Sichuan Hotpot";
    pub const PRESET_PROMPTS: [&'static str; 2] = ["Spaghetti alla Carbonara", "Hainanese Chicken Rice"];

    /* Launch form */
    pub const MAX_SUPPLY_MIN: u64 = 1;
    pub const MAX_SUPPLY_MAX: u64 = 18_466_744_073_709;
    pub const MAX_SUPPLY: &'static str = "1000000";
    pub const COEFFICIENT_A: &'static str = "1";
    pub const COEFFICIENT_B: &'static str = "0";
    pub const COEFFICIENT_C: &'static str = "0";
    pub const LAUNCH_CHAIN: Chain = Chain::Ethereum;

    /* Wallet (simulated provider) */
    pub const WALLET_ADDRESS: &'static str = "0x742d35Cc6634C0532925a3b844Bc454e4438f44e";

    /* Notifications */
    pub const TOAST_DURATION: Duration = Duration::from_millis(3000);

    /* Files */
    pub const CONFIG_FILE: &'static str = "config.toml";
    pub const LOG_FILE: &'static str = "food-meme.log";
    pub const LOG_FILTER: &'static str = "food_meme_factory=info,food_meme=info";
}
