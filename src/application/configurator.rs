use crate::domain::configuration::{CarConfiguration, ConfigUpdate, SetField};

/// Holds the live configuration of the current dashboard session.
///
/// Nothing here is persisted and nothing is validated: step editors are
/// trusted to send values they offered.
#[derive(Debug, Default)]
pub struct ConfigurationStore {
    config: CarConfiguration,
}

impl ConfigurationStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn read(&self) -> &CarConfiguration {
        &self.config
    }

    pub fn snapshot(&self) -> CarConfiguration {
        self.config.clone()
    }

    pub fn update(&mut self, update: ConfigUpdate) -> &CarConfiguration {
        log::debug!("configuration update from step '{}'", update.step().title());
        self.config.apply(update);
        &self.config
    }

    pub fn update_with<F>(&mut self, mutator: F) -> &CarConfiguration
    where
        F: FnOnce(&mut CarConfiguration),
    {
        mutator(&mut self.config);
        &self.config
    }

    /// Removes `value` from the set if present, adds it otherwise.
    pub fn toggle(&mut self, field: SetField, value: &str) -> &CarConfiguration {
        if self.config.set(field).iter().any(|v| v == value) {
            self.config.remove_from(field, value);
        } else {
            self.config.insert_into(field, value.to_string());
        }
        &self.config
    }

    pub fn reset(&mut self) {
        self.config = CarConfiguration::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::configuration::LogoUpload;

    #[test]
    fn read_before_any_update_returns_defaults() {
        let store = ConfigurationStore::new();
        assert_eq!(store.read(), &CarConfiguration::default());
    }

    #[test]
    fn update_changes_only_the_targeted_field() {
        let mut store = ConfigurationStore::new();
        store.update(ConfigUpdate::BodyStyle("Coupe".into()));
        store.update(ConfigUpdate::AddSmartTech("AI Assistant".into()));
        let before = store.snapshot();

        store.update(ConfigUpdate::RimSize(21));

        let expected = CarConfiguration {
            rim_size: 21,
            ..before
        };
        assert_eq!(store.read(), &expected);
    }

    #[test]
    fn store_does_not_validate_ranges() {
        let mut store = ConfigurationStore::new();
        store.update(ConfigUpdate::Budget(1));
        store.update(ConfigUpdate::MaxSpeed(9_999));
        store.update(ConfigUpdate::Airbags(3));
        assert_eq!(store.read().budget, 1);
        assert_eq!(store.read().max_speed, 9_999);
        assert_eq!(store.read().airbags, 3);
    }

    #[test]
    fn toggling_twice_restores_membership() {
        let mut store = ConfigurationStore::new();
        store.update(ConfigUpdate::AddConnectivity("Android Auto".into()));
        let original = store.snapshot();

        store.toggle(SetField::Connectivity, "5G Telematics");
        assert_eq!(
            store.read().connectivity,
            vec!["Android Auto", "5G Telematics"]
        );
        store.toggle(SetField::Connectivity, "5G Telematics");

        assert_eq!(store.read(), &original);
    }

    #[test]
    fn toggle_removes_present_value() {
        let mut store = ConfigurationStore::new();
        store.toggle(SetField::SmartTech, "Auto Park Assist");
        store.toggle(SetField::SmartTech, "Rain Sensing Wipers");
        store.toggle(SetField::SmartTech, "Auto Park Assist");
        assert_eq!(store.read().smart_tech, vec!["Rain Sensing Wipers"]);
    }

    #[test]
    fn add_and_remove_are_guarded() {
        let mut store = ConfigurationStore::new();
        store.update(ConfigUpdate::AddSmartTech("Heads-Up Display".into()));
        store.update(ConfigUpdate::AddSmartTech("Heads-Up Display".into()));
        store.update(ConfigUpdate::RemoveConnectivity("Apple CarPlay".into()));
        assert_eq!(store.read().smart_tech.len(), 1);
        assert!(store.read().connectivity.is_empty());
    }

    #[test]
    fn update_with_applies_arbitrary_mutation() {
        let mut store = ConfigurationStore::new();
        store.update_with(|c| {
            c.custom_logo = Some(LogoUpload {
                file_name: "crest.png".into(),
                content_type: "image/png".into(),
                size_bytes: 2048,
            });
        });
        assert_eq!(
            store.read().custom_logo.as_ref().map(|l| l.file_name.as_str()),
            Some("crest.png")
        );
    }

    #[test]
    fn reset_discards_session_edits() {
        let mut store = ConfigurationStore::new();
        store.update(ConfigUpdate::TowHitch(true));
        store.reset();
        assert_eq!(store.read(), &CarConfiguration::default());
    }
}
