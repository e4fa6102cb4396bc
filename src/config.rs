use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    // Server
    pub port: u16,

    // Domain used for absolute hreflang alternates
    pub site_domain: String,

    // Minimum matching segments (exclusive) for a link to count as related
    pub link_highlight_threshold: usize,

    // Logical URLs expanded per locale for pre-rendering
    pub prerender_routes: Vec<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            port: match std::env::var("PORT") {
                Ok(v) => v.parse().with_context(|| format!("Invalid PORT: {}", v))?,
                Err(_) => 8080,
            },

            site_domain: std::env::var("SITE_DOMAIN")
                .map(|v| v.trim_end_matches('/').to_string())
                .unwrap_or_else(|_| "https://www.example.com".to_string()),

            link_highlight_threshold: std::env::var("LINK_HIGHLIGHT_THRESHOLD")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(1),

            prerender_routes: std::env::var("PRERENDER_ROUTES")
                .map(|v| parse_routes(&v))
                .unwrap_or_else(|_| {
                    vec!["/".to_string(), "/about".to_string(), "/star-wars".to_string()]
                }),
        })
    }
}

/// Split a comma separated route list, ensuring each route is absolute.
fn parse_routes(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            if s.starts_with('/') {
                s.to_string()
            } else {
                format!("/{}", s)
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const KEYS: [&str; 4] = [
        "PORT",
        "SITE_DOMAIN",
        "LINK_HIGHLIGHT_THRESHOLD",
        "PRERENDER_ROUTES",
    ];

    fn clear_env() {
        for key in KEYS {
            std::env::remove_var(key);
        }
    }

    #[test]
    #[serial]
    fn test_defaults() {
        clear_env();
        let config = Config::from_env().unwrap();

        assert_eq!(config.port, 8080);
        assert_eq!(config.site_domain, "https://www.example.com");
        assert_eq!(config.link_highlight_threshold, 1);
        assert_eq!(config.prerender_routes, vec!["/", "/about", "/star-wars"]);
    }

    #[test]
    #[serial]
    fn test_overrides() {
        clear_env();
        std::env::set_var("PORT", "3000");
        std::env::set_var("SITE_DOMAIN", "https://example.org/");
        std::env::set_var("LINK_HIGHLIGHT_THRESHOLD", "2");
        std::env::set_var("PRERENDER_ROUTES", "/, about ,/star-wars/1,");

        let config = Config::from_env().unwrap();
        clear_env();

        assert_eq!(config.port, 3000);
        assert_eq!(config.site_domain, "https://example.org");
        assert_eq!(config.link_highlight_threshold, 2);
        assert_eq!(config.prerender_routes, vec!["/", "/about", "/star-wars/1"]);
    }

    #[test]
    #[serial]
    fn test_invalid_port_is_an_error() {
        clear_env();
        std::env::set_var("PORT", "not-a-port");

        let result = Config::from_env();
        clear_env();

        let err = result.unwrap_err();
        assert!(err.to_string().contains("Invalid PORT"));
    }

    #[test]
    #[serial]
    fn test_invalid_threshold_falls_back() {
        clear_env();
        std::env::set_var("LINK_HIGHLIGHT_THRESHOLD", "-1");

        let config = Config::from_env().unwrap();
        clear_env();

        assert_eq!(config.link_highlight_threshold, 1);
    }

    #[test]
    fn test_parse_routes() {
        assert_eq!(parse_routes("a,/b"), vec!["/a", "/b"]);
        assert!(parse_routes(" , ").is_empty());
    }
}
