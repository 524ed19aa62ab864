/// Default local daemon for each supported coin.
pub const COINS: &[(&str, &str)] = &[
    ("btc", "http://localhost:5000"),
    ("ltc", "http://localhost:5001"),
    ("gzro", "http://localhost:5002"),
    ("bsty", "http://localhost:5003"),
    ("bch", "http://localhost:5004"),
    ("xrg", "http://localhost:5005"),
];

pub fn default_url(coin: &str) -> Option<&'static str> {
    COINS
        .iter()
        .find(|(name, _)| *name == coin)
        .map(|(_, url)| *url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_coins() {
        assert_eq!(default_url("btc"), Some("http://localhost:5000"));
        assert_eq!(default_url("bch"), Some("http://localhost:5004"));
        assert_eq!(default_url("xrg"), Some("http://localhost:5005"));
    }

    #[test]
    fn lookup_is_case_sensitive() {
        assert_eq!(default_url("BTC"), None);
        assert_eq!(default_url("doge"), None);
    }
}
