pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::CliConfig;

#[cfg(feature = "cli")]
mod cli {
    use crate::config::toml_config::TomlConfig;
    use crate::core::navigation::MenuSnapshot;
    use crate::utils::error::Result;
    use clap::Parser;

    #[derive(Debug, Clone, Parser)]
    #[command(name = "menu-kit")]
    #[command(about = "Manage a restaurant menu from the terminal")]
    pub struct CliConfig {
        /// Path to TOML configuration file
        #[arg(short, long)]
        pub config: Option<String>,

        /// Menu to start with, as a JSON snapshot: {"menuItems": [...]}
        #[arg(long)]
        pub seed: Option<String>,

        #[arg(short, long, help = "Enable verbose output")]
        pub verbose: bool,

        #[arg(long, help = "Emit logs as JSON")]
        pub json_logs: bool,
    }

    impl CliConfig {
        /// 載入 TOML 配置；未指定檔案時使用預設值
        pub fn load_toml(&self) -> Result<TomlConfig> {
            match &self.config {
                Some(path) => TomlConfig::from_file(path),
                None => Ok(TomlConfig::default()),
            }
        }

        pub fn seed_snapshot(&self) -> Result<MenuSnapshot> {
            match &self.seed {
                Some(json) => MenuSnapshot::from_json(json),
                None => Ok(MenuSnapshot::default()),
            }
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_parse_args() {
            let config = CliConfig::parse_from([
                "menu-kit",
                "--seed",
                r#"{"menuItems":[{"dishName":"Soup","description":"Hot","course":"Starters","price":45.5}]}"#,
                "-v",
            ]);

            assert!(config.verbose);
            assert!(!config.json_logs);
            assert_eq!(config.seed_snapshot().unwrap().menu_items.len(), 1);
            assert_eq!(config.load_toml().unwrap().logging.level, "info");
        }

        #[test]
        fn test_bad_seed_is_an_error() {
            let config = CliConfig::parse_from(["menu-kit", "--seed", "[1,2"]);
            assert!(config.seed_snapshot().is_err());
        }
    }
}
