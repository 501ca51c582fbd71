//! Type definitions for the staged options builder

use crate::config::models::DeliveryOptionsSettings;

/// First stage: only the project id can be supplied
#[derive(Debug, Default)]
pub struct DeliveryOptionsBuilder {
    pub(super) settings: DeliveryOptionsSettings,
}

/// Second stage: exactly one API mode has to be chosen
#[derive(Debug)]
pub struct ApiModeSteps {
    pub(super) settings: DeliveryOptionsSettings,
}

/// Last stage: optional settings in any order, finished by `build`
#[derive(Debug)]
pub struct OptionalSteps {
    pub(super) settings: DeliveryOptionsSettings,
}
