use anyhow::Context;
use std::net::SocketAddr;
use std::path::PathBuf;

pub(crate) const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
pub(crate) const DEFAULT_STATIC_DIR: &str = "ui/storefront-wasm/www";

/// Service settings, read once at start-up.
#[derive(Debug, Clone)]
pub(crate) struct ServiceConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) static_dir: PathBuf,
    pub(crate) whatsapp: Option<String>,
}

impl ServiceConfig {
    pub(crate) fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let bind_raw = non_empty("INSTYLE_BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_owned());
        let bind_addr = bind_raw
            .trim()
            .parse::<SocketAddr>()
            .with_context(|| format!("INSTYLE_BIND_ADDR is not a socket address: {bind_raw}"))?;

        let static_dir = non_empty("INSTYLE_STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STATIC_DIR));

        Ok(Self {
            bind_addr,
            static_dir,
            whatsapp: non_empty("INSTYLE_WHATSAPP"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_unset() -> anyhow::Result<()> {
        let config = ServiceConfig::from_lookup(lookup(&[("INSTYLE_STATIC_DIR", "  ")]))?;
        assert_eq!(config.bind_addr, DEFAULT_BIND_ADDR.parse()?);
        assert_eq!(config.static_dir, PathBuf::from(DEFAULT_STATIC_DIR));
        assert!(config.whatsapp.is_none());
        Ok(())
    }

    #[test]
    fn overrides_are_read() -> anyhow::Result<()> {
        let config = ServiceConfig::from_lookup(lookup(&[
            ("INSTYLE_BIND_ADDR", "127.0.0.1:9000"),
            ("INSTYLE_STATIC_DIR", "/srv/instyle"),
            ("INSTYLE_WHATSAPP", "9611000000"),
        ]))?;
        assert_eq!(config.bind_addr.port(), 9000);
        assert_eq!(config.static_dir, PathBuf::from("/srv/instyle"));
        assert_eq!(config.whatsapp.as_deref(), Some("9611000000"));
        Ok(())
    }

    #[test]
    fn bad_bind_addr_is_an_error() {
        let err = ServiceConfig::from_lookup(lookup(&[("INSTYLE_BIND_ADDR", "localhost")]))
            .unwrap_err();
        assert!(err.to_string().contains("INSTYLE_BIND_ADDR"));
    }
}
