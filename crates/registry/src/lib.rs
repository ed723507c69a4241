//! Read-only chain and token registry snapshots.
//!
//! Registries are loaded once by the caller (typically from bundled or
//! synced JSON) and handed to the decoding pipeline by reference. Nothing
//! in this crate mutates a snapshot after construction.

mod chain;
mod error;
mod token;

pub use chain::ChainInfo;
pub use error::RegistryError;
pub use token::{TokenInfo, TokenType};

/// Immutable snapshot of all known chains.
#[derive(Debug, Clone, Default)]
pub struct ChainRegistry {
    chains: Vec<ChainInfo>,
}

impl ChainRegistry {
    pub fn new(chains: Vec<ChainInfo>) -> Result<Self, RegistryError> {
        let registry = Self { chains };
        registry.validate()?;
        Ok(registry)
    }

    pub fn from_json_str(json: &str) -> Result<Self, RegistryError> {
        let chains: Vec<ChainInfo> = serde_json::from_str(json)?;
        Self::new(chains)
    }

    fn validate(&self) -> Result<(), RegistryError> {
        for (i, chain) in self.chains.iter().enumerate() {
            if self.chains[..i].iter().any(|c| c.id == chain.id) {
                return Err(RegistryError::DuplicateChain(chain.id.clone()));
            }
        }
        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<&ChainInfo> {
        self.chains.iter().find(|c| c.id == id)
    }

    /// The parachain with the given id under the given relay.
    pub fn parachain(&self, relay: &str, para_id: u32) -> Option<&ChainInfo> {
        self.chains
            .iter()
            .find(|c| c.relay_chain.as_deref() == Some(relay) && c.para_id == Some(para_id))
    }

    /// The relay chain of `chain`, if it has one.
    pub fn relay_of(&self, chain: &ChainInfo) -> Option<&ChainInfo> {
        chain.relay_chain.as_deref().and_then(|relay| self.get(relay))
    }

    pub fn is_empty(&self) -> bool {
        self.chains.is_empty()
    }

    pub fn len(&self) -> usize {
        self.chains.len()
    }
}

/// Immutable snapshot of all known tokens.
#[derive(Debug, Clone, Default)]
pub struct TokenRegistry {
    tokens: Vec<TokenInfo>,
}

impl TokenRegistry {
    pub fn new(tokens: Vec<TokenInfo>) -> Result<Self, RegistryError> {
        let registry = Self { tokens };
        registry.validate()?;
        Ok(registry)
    }

    pub fn from_json_str(json: &str) -> Result<Self, RegistryError> {
        let tokens: Vec<TokenInfo> = serde_json::from_str(json)?;
        Self::new(tokens)
    }

    fn validate(&self) -> Result<(), RegistryError> {
        for (i, token) in self.tokens.iter().enumerate() {
            if self.tokens[..i].iter().any(|t| t.id == token.id) {
                return Err(RegistryError::DuplicateToken(token.id.clone()));
            }
        }
        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<&TokenInfo> {
        self.tokens.iter().find(|t| t.id == id)
    }

    /// The native token of `chain`, looked up through the chain's
    /// `native_token_id`.
    pub fn native_token(&self, chain: &ChainInfo) -> Option<&TokenInfo> {
        self.get(&chain.native_token_id)
    }

    pub fn tokens_on_chain<'a>(&'a self, chain_id: &'a str) -> impl Iterator<Item = &'a TokenInfo> {
        self.tokens.iter().filter(move |t| t.chain == chain_id)
    }

    /// First token whose registry id starts with `prefix`, in snapshot order.
    ///
    /// Used for pallet-assets lookups where only `{chain}-substrate-assets-{assetId}`
    /// is recoverable from the wire: the trailing symbol segment is unknown.
    /// Note that a prefix can match more than one entry (asset id 1984 is a
    /// string prefix of asset id 19840); the first match wins.
    pub fn find_by_id_prefix(&self, prefix: &str) -> Option<&TokenInfo> {
        self.tokens.iter().find(|t| t.id.starts_with(prefix))
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain(id: &str, relay: Option<&str>, para_id: Option<u32>) -> ChainInfo {
        ChainInfo {
            id: id.to_string(),
            relay_chain: relay.map(str::to_string),
            para_id,
            ss58_prefix: 42,
            native_token_id: format!("{id}-native"),
        }
    }

    fn token(id: &str, chain: &str) -> TokenInfo {
        TokenInfo {
            id: id.to_string(),
            token_type: TokenType::Native,
            on_chain_id: None,
            symbol: "UNIT".to_string(),
            decimals: 12,
            logo: None,
            chain: chain.to_string(),
        }
    }

    #[test]
    fn test_parachain_lookup() {
        let registry = ChainRegistry::new(vec![
            chain("polkadot", None, None),
            chain("statemint", Some("polkadot"), Some(1000)),
            chain("acala", Some("polkadot"), Some(2000)),
        ])
        .unwrap();

        assert_eq!(registry.parachain("polkadot", 2000).unwrap().id, "acala");
        assert!(registry.parachain("polkadot", 2001).is_none());
        assert!(registry.parachain("kusama", 1000).is_none());
    }

    #[test]
    fn test_relay_of() {
        let registry = ChainRegistry::new(vec![
            chain("polkadot", None, None),
            chain("statemint", Some("polkadot"), Some(1000)),
        ])
        .unwrap();

        let statemint = registry.get("statemint").unwrap();
        assert_eq!(registry.relay_of(statemint).unwrap().id, "polkadot");

        let polkadot = registry.get("polkadot").unwrap();
        assert!(registry.relay_of(polkadot).is_none());
    }

    #[test]
    fn test_duplicate_chain_rejected() {
        let result = ChainRegistry::new(vec![chain("acala", None, None), chain("acala", None, None)]);
        assert!(matches!(result, Err(RegistryError::DuplicateChain(id)) if id == "acala"));
    }

    #[test]
    fn test_find_by_id_prefix_first_match_wins() {
        let registry = TokenRegistry::new(vec![
            token("statemint-substrate-assets-1984-usdt", "statemint"),
            token("statemint-substrate-assets-19840-fake", "statemint"),
        ])
        .unwrap();

        let hit = registry
            .find_by_id_prefix("statemint-substrate-assets-1984")
            .unwrap();
        assert_eq!(hit.id, "statemint-substrate-assets-1984-usdt");
    }

    #[test]
    fn test_from_json_str() {
        let json = r#"[
            {"id": "kusama", "ss58Prefix": 2, "nativeTokenId": "kusama-native-ksm"}
        ]"#;
        let registry = ChainRegistry::from_json_str(json).unwrap();
        assert_eq!(registry.len(), 1);
        assert!(!registry.is_empty());
    }

    #[test]
    fn test_duplicate_token_rejected() {
        let result = TokenRegistry::new(vec![token("a-native", "a"), token("a-native", "a")]);
        assert!(matches!(result, Err(RegistryError::DuplicateToken(_))));
    }
}
