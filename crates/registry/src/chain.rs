use serde::Deserialize;

/// One chain entry of the registry snapshot.
///
/// A chain is either a relay chain (`relay_chain` is `None`) or a parachain
/// identified by `para_id` relative to its relay.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChainInfo {
    pub id: String,

    /// Registry id of the relay chain this chain derives security from.
    /// `None` for relay chains themselves and for solo chains.
    #[serde(default)]
    pub relay_chain: Option<String>,

    /// Parachain id on the relay, when applicable.
    #[serde(default)]
    pub para_id: Option<u32>,

    /// SS58 address format prefix used for human-readable addresses.
    pub ss58_prefix: u16,

    /// Registry id of the chain's native token.
    pub native_token_id: String,
}

impl ChainInfo {
    pub fn is_relay(&self) -> bool {
        self.relay_chain.is_none()
    }

    /// The relay id under which parachain lookups for this chain are scoped:
    /// its own id when it is a relay, otherwise the relay it belongs to.
    pub fn relay_scope(&self) -> &str {
        self.relay_chain.as_deref().unwrap_or(&self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_parachain() {
        let json = r#"{
            "id": "statemint",
            "relayChain": "polkadot",
            "paraId": 1000,
            "ss58Prefix": 0,
            "nativeTokenId": "statemint-native-dot"
        }"#;
        let chain: ChainInfo = serde_json::from_str(json).unwrap();
        assert_eq!(chain.id, "statemint");
        assert_eq!(chain.relay_chain.as_deref(), Some("polkadot"));
        assert_eq!(chain.para_id, Some(1000));
        assert!(!chain.is_relay());
        assert_eq!(chain.relay_scope(), "polkadot");
    }

    #[test]
    fn test_deserialize_relay_defaults() {
        let json = r#"{
            "id": "polkadot",
            "ss58Prefix": 0,
            "nativeTokenId": "polkadot-native-dot"
        }"#;
        let chain: ChainInfo = serde_json::from_str(json).unwrap();
        assert_eq!(chain.relay_chain, None);
        assert_eq!(chain.para_id, None);
        assert!(chain.is_relay());
        assert_eq!(chain.relay_scope(), "polkadot");
    }
}
