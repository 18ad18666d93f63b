use serde::{Deserialize, Serialize};

use super::ConfigError;

pub trait ConfigSerializer<TConfig> {
    fn serialize(&self, config: &TConfig) -> Result<String, ConfigError>;
    fn deserialize(&self, content: &str) -> Result<TConfig, ConfigError>;
}

#[derive(Default)]
pub struct YamlConfigSerializer;

impl YamlConfigSerializer {
    pub fn new() -> Self {
        Self {}
    }
}

impl<TConfig> ConfigSerializer<TConfig> for YamlConfigSerializer
where
    TConfig: for<'de> Deserialize<'de> + Serialize,
{
    fn serialize(&self, config: &TConfig) -> Result<String, ConfigError> {
        serde_yaml_ng::to_string(config).map_err(ConfigError::Serialize)
    }

    fn deserialize(&self, content: &str) -> Result<TConfig, ConfigError> {
        serde_yaml_ng::from_str(content).map_err(ConfigError::Deserialize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{GameSettings, Point};

    #[test]
    fn test_default_settings_can_be_serialized_and_deserialized_string() {
        let settings = GameSettings::default();
        let serializer = YamlConfigSerializer::new();
        let serialized = serializer.serialize(&settings).unwrap();
        let deserialized: GameSettings = serializer.deserialize(&serialized).unwrap();
        assert_eq!(settings, deserialized);
    }

    #[test]
    fn test_optional_fields_may_be_omitted() {
        let content = r#"
            size: 10
            snake:
              - { x: 1, y: 0 }
              - { x: 0, y: 0 }
        "#;
        let serializer = YamlConfigSerializer::new();
        let settings: GameSettings = serializer.deserialize(content).unwrap();
        assert_eq!(settings.size, 10);
        assert_eq!(settings.snake, vec![Point::new(1, 0), Point::new(0, 0)]);
        assert_eq!(settings.iterations, None);
        assert_eq!(settings.seed, None);
    }

    #[test]
    fn test_malformed_yaml_is_deserialize_error() {
        let serializer = YamlConfigSerializer::new();
        let result: Result<GameSettings, _> = serializer.deserialize("size: [not a number");
        assert!(matches!(result, Err(ConfigError::Deserialize(_))));
    }
}
