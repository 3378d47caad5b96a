use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::sdn::IdentityRecord;

/// Marker the list uses in `idType` for cryptocurrency wallet entries,
/// e.g. `Digital Currency Address - XBT`.
pub const DIGITAL_CURRENCY_MARKER: &str = "Digital Currency Address";

/// Sentinel written for entries whose `<idNumber>` is absent. The published
/// list does contain such entries and they are kept, not dropped.
pub const MISSING_ADDRESS: &str = "N/A";

/// Built-in ticker -> blockchain table. Layer-2 tickers (ARB, OP) collapse
/// to their base chain.
static BASE_CHAINS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("BTC", "Bitcoin"),
        ("XBT", "Bitcoin"),
        ("ETH", "Ethereum"),
        ("BNB", "Binance Smart Chain"),
        ("TRX", "Tron"),
        ("XRP", "Ripple"),
        ("SOL", "Solana"),
        ("DOT", "Polkadot"),
        ("AVAX", "Avalanche"),
        ("MATIC", "Polygon"),
        ("ALGO", "Algorand"),
        ("XLM", "Stellar"),
        ("ARB", "Ethereum"),
        ("OP", "Ethereum"),
    ])
});

/// Immutable ticker -> blockchain mapping, fixed for the lifetime of a run.
#[derive(Debug, Clone)]
pub struct ChainMap {
    map: HashMap<String, String>,
}

impl Default for ChainMap {
    fn default() -> Self {
        let map = BASE_CHAINS
            .iter()
            .map(|(ticker, chain)| (ticker.to_string(), chain.to_string()))
            .collect();
        ChainMap { map }
    }
}

impl ChainMap {
    /// Built-in table with the optional `CHAIN_MAP` env var merged over it.
    /// The override is a JSON object, e.g. `{"TON":"The Open Network"}`;
    /// malformed overrides are logged and ignored.
    pub fn from_env() -> Self {
        let mut chain_map = ChainMap::default();
        if let Ok(raw) = std::env::var("CHAIN_MAP") {
            match serde_json::from_str::<HashMap<String, String>>(&raw) {
                Ok(overrides) => chain_map.map.extend(overrides),
                Err(e) => {
                    tracing::warn!(target: "classify", "ignoring malformed CHAIN_MAP: {e}")
                }
            }
        }
        chain_map
    }

    /// Blockchain for a wallet: exact (case-sensitive) ticker lookup first,
    /// then the address-prefix heuristic. `None` means unrecognized.
    pub fn resolve(&self, ticker: &str, address: &str) -> Option<String> {
        if let Some(chain) = self.map.get(ticker) {
            return Some(chain.clone());
        }
        base_chain_from_address(address).map(str::to_string)
    }
}

/// Prefix heuristic for wallets whose ticker has no table entry.
pub fn base_chain_from_address(address: &str) -> Option<&'static str> {
    if address.starts_with('1') || address.starts_with('3') || address.starts_with("bc1") {
        Some("Bitcoin")
    } else if address.starts_with("0x") {
        Some("Ethereum")
    } else if address.starts_with('T') {
        Some("Tron")
    } else {
        None
    }
}

/// Currency ticker embedded in an `idType`: the text after the last ` - `
/// separator, or the whole string when there is none.
pub fn ticker_of(id_type: &str) -> &str {
    id_type.rsplit(" - ").next().unwrap_or(id_type)
}

/// Wallet partition built from one pass over the identity records.
///
/// `by_chain` keeps chains in the order they were first seen; the writer's
/// file numbering follows that order.
#[derive(Debug, Clone, Default)]
pub struct WalletLists {
    pub complete: Vec<String>,
    pub by_chain: Vec<(String, Vec<String>)>,
    pub unrecognized: Vec<String>,
}

impl WalletLists {
    fn push_chain(&mut self, chain: String, address: String) {
        match self.by_chain.iter_mut().find(|(name, _)| *name == chain) {
            Some((_, addresses)) => addresses.push(address),
            None => self.by_chain.push((chain, vec![address])),
        }
    }
}

/// Partition the digital-currency records into the complete list plus
/// exactly one chain group (or the unrecognized group) each. Order is
/// first-seen throughout; addresses are not deduplicated.
pub fn classify(records: &[IdentityRecord], chain_map: &ChainMap) -> WalletLists {
    let mut lists = WalletLists::default();
    for record in records {
        if !record.id_type.contains(DIGITAL_CURRENCY_MARKER) {
            continue;
        }
        let ticker = ticker_of(&record.id_type);
        let address = record
            .id_number
            .clone()
            .unwrap_or_else(|| MISSING_ADDRESS.to_string());
        tracing::debug!(target: "classify", "currency {ticker}, address {address}");

        lists.complete.push(address.clone());
        match chain_map.resolve(ticker, &address) {
            Some(chain) => lists.push_chain(chain, address),
            None => lists.unrecognized.push(address),
        }
    }
    lists
}
