mod general_settings;

pub use general_settings::GeneralSettings;
