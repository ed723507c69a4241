use serde::Deserialize;
use serde_json::Value;

/// Storage flavour of a token, mirroring the registry id segments
/// (e.g. `statemint-substrate-assets-1984-usdt`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TokenType {
    Native,
    SubstrateAssets,
    Orml,
}

/// One token entry of the registry snapshot.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenInfo {
    pub id: String,

    #[serde(rename = "type")]
    pub token_type: TokenType,

    /// Chain-specific identifier of the token as the runtime spells it.
    /// Numeric for pallet-assets ids, structured JSON for orml currency ids,
    /// absent for most native tokens.
    #[serde(default)]
    pub on_chain_id: Option<Value>,

    pub symbol: String,
    pub decimals: u8,

    #[serde(default)]
    pub logo: Option<String>,

    /// Registry id of the chain the token lives on.
    pub chain: String,
}

impl TokenInfo {
    pub fn is_native(&self) -> bool {
        self.token_type == TokenType::Native
    }
}
