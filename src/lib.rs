pub mod config {
    use serde::Deserialize;

    #[derive(Deserialize, Debug)]
    pub struct Config {
        #[serde(default = "default_data_file")]
        pub data_file: String,
        #[serde(default = "default_port")]
        pub port: u16,
    }

    impl Config {
        /// Loads configuration from environment variables.
        pub fn from_env() -> anyhow::Result<Self> {
            let settings = config::Config::builder()
                .add_source(config::Environment::default())
                .build()?;

            let config: Config = settings.try_deserialize()?;
            Ok(config)
        }
    }

    fn default_data_file() -> String {
        "data.json".to_string()
    }

    fn default_port() -> u16 {
        8080
    }
}

pub mod assistant;
pub mod event;
pub mod message;
pub mod store;
pub mod task;
pub mod web;
