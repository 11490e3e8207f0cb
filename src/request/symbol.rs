//! Symbol normalization for path segments.

/// Market prefix carried by forex tickers.
pub const FOREX_PREFIX: &str = "C:";

/// How a market normalizes ticker symbols.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolRule {
    /// Upper-case only (crypto).
    Upper,
    /// Prepend the prefix when absent, then upper-case (forex).
    Prefixed(&'static str),
}

impl SymbolRule {
    pub fn apply(&self, symbol: &str) -> String {
        match self {
            SymbolRule::Upper => symbol.to_uppercase(),
            SymbolRule::Prefixed(prefix) => {
                if symbol.starts_with(prefix) {
                    symbol.to_uppercase()
                } else {
                    format!("{}{}", prefix, symbol).to_uppercase()
                }
            }
        }
    }
}

/// Upper-cases a plain currency/coin code (`usd` → `USD`).
pub fn code(symbol: &str) -> String {
    symbol.to_uppercase()
}

/// Forex ticker normalization: `EURUSD` and `C:EURUSD` both give `C:EURUSD`.
pub fn ensure_prefix(symbol: &str) -> String {
    SymbolRule::Prefixed(FOREX_PREFIX).apply(symbol)
}
