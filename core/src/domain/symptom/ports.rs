use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    symptom::{
        entities::{Condition, Symptom},
        report::SymptomReport,
        selection::SelectionState,
        value_objects::{
            CheckSymptomsInput, ConditionAdvice, GetConditionAdviceInput, GetSymptomsFilter,
            SelectionInput, SelectionUpdate, ToggleSymptomInput,
        },
    },
};

/// Per-device storage of the symptom selection. A device without a stored
/// selection reads back as an empty one.
#[cfg_attr(test, mockall::automock)]
pub trait SelectionRepository: Send + Sync {
    fn get(
        &self,
        device_id: String,
    ) -> impl Future<Output = Result<SelectionState, CoreError>> + Send;

    /// Flips `symptom` in the device selection as one atomic step and returns
    /// its membership afterwards with the updated selection.
    fn toggle(
        &self,
        device_id: String,
        symptom: Symptom,
    ) -> impl Future<Output = Result<(bool, SelectionState), CoreError>> + Send;

    fn remove(&self, device_id: String) -> impl Future<Output = Result<(), CoreError>> + Send;
}

pub trait SymptomCheckService: Send + Sync {
    fn list_symptoms(
        &self,
        filter: GetSymptomsFilter,
    ) -> impl Future<Output = Result<Vec<Symptom>, CoreError>> + Send;

    fn list_conditions(&self) -> impl Future<Output = Result<Vec<Condition>, CoreError>> + Send;

    fn check_symptoms(
        &self,
        input: CheckSymptomsInput,
    ) -> impl Future<Output = Result<SymptomReport, CoreError>> + Send;

    fn get_condition_advice(
        &self,
        input: GetConditionAdviceInput,
    ) -> impl Future<Output = Result<ConditionAdvice, CoreError>> + Send;

    fn get_selection(
        &self,
        input: SelectionInput,
    ) -> impl Future<Output = Result<SelectionState, CoreError>> + Send;

    fn toggle_symptom(
        &self,
        input: ToggleSymptomInput,
    ) -> impl Future<Output = Result<SelectionUpdate, CoreError>> + Send;

    fn clear_selection(
        &self,
        input: SelectionInput,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;

    fn check_selection(
        &self,
        input: SelectionInput,
    ) -> impl Future<Output = Result<SymptomReport, CoreError>> + Send;
}
