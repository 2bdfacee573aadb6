pub mod analyzer_config;
